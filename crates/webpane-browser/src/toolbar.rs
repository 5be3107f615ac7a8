//! Toolbar layout derivation.
//!
//! `derive_layout` is a pure function from the option set, device class
//! and navigation state to a `ToolbarLayout`. Writing that layout to the
//! host is a separate step (`apply_layout`) so the rules can be tested
//! without any UI.

use webpane_common::DeviceClass;

use crate::options::ButtonOptionSet;

/// Width of the fixed spacers between trailing items on regular devices.
pub const REGULAR_SPACER_WIDTH: f64 = 35.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarButton {
    Back,
    Forward,
    Refresh,
    Stop,
    Action,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolbarItem {
    Button { button: ToolbarButton, enabled: bool },
    /// Stretches to fill available space.
    FlexibleSpace,
    /// Fixed gap. `None` uses the host's default width.
    FixedSpace { width: Option<f64> },
}

impl ToolbarItem {
    fn button(button: ToolbarButton, enabled: bool) -> Self {
        Self::Button { button, enabled }
    }

    pub fn as_button(&self) -> Option<ToolbarButton> {
        match self {
            Self::Button { button, .. } => Some(*button),
            _ => None,
        }
    }

    pub fn is_spacer(&self) -> bool {
        !matches!(self, Self::Button { .. })
    }
}

/// Renderer navigation state the layout depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub is_loading: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutInput {
    pub options: ButtonOptionSet,
    pub device_class: DeviceClass,
    pub navigation: NavigationState,
    /// The screen sits inside a split view; regular layouts drop spacers.
    pub in_split_view: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarLayout {
    /// Nothing to show: the option set is empty.
    Hidden,
    /// Compact devices: items for a bottom toolbar, left to right.
    Bottom(Vec<ToolbarItem>),
    /// Regular devices: items for the navigation bar's trailing slot,
    /// already in the order the host's trailing-items API expects.
    Trailing(Vec<ToolbarItem>),
}

impl ToolbarLayout {
    pub fn items(&self) -> &[ToolbarItem] {
        match self {
            Self::Hidden => &[],
            Self::Bottom(items) | Self::Trailing(items) => items,
        }
    }

    /// The buttons only, in layout order.
    pub fn buttons(&self) -> Vec<ToolbarButton> {
        self.items().iter().filter_map(ToolbarItem::as_button).collect()
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }
}

/// Receives toolbar writes.
pub trait ToolbarSink {
    fn set_toolbar_items(&mut self, items: &[ToolbarItem]);
    fn set_trailing_items(&mut self, items: &[ToolbarItem]);
}

/// Derive the toolbar for the given state.
pub fn derive_layout(input: &LayoutInput) -> ToolbarLayout {
    if input.options.is_empty() {
        return ToolbarLayout::Hidden;
    }

    let nav = input.navigation;
    let back = ToolbarItem::button(ToolbarButton::Back, nav.can_go_back);
    let forward = ToolbarItem::button(ToolbarButton::Forward, nav.can_go_forward);
    let refresh_stop = if nav.is_loading {
        ToolbarItem::button(ToolbarButton::Stop, true)
    } else {
        ToolbarItem::button(ToolbarButton::Refresh, true)
    };
    let action = ToolbarItem::button(ToolbarButton::Action, true);

    match input.device_class {
        DeviceClass::Compact => {
            let mut buttons = Vec::with_capacity(4);
            if input.options.contains(ButtonOptionSet::COURSE) {
                buttons.push(back);
                buttons.push(forward);
            }
            if input.options.contains(ButtonOptionSet::REFRESH) {
                buttons.push(refresh_stop);
            }
            if input.options.contains(ButtonOptionSet::ACTION) {
                buttons.push(action);
            }

            let end_cap = ToolbarItem::FixedSpace { width: None };
            let mut items = Vec::with_capacity(buttons.len() * 2 + 1);
            items.push(end_cap);
            for (i, button) in buttons.into_iter().enumerate() {
                if i > 0 {
                    items.push(ToolbarItem::FlexibleSpace);
                }
                items.push(button);
            }
            items.push(end_cap);
            ToolbarLayout::Bottom(items)
        }
        DeviceClass::Regular => {
            let add_space = !input.in_split_view;
            let spacer = ToolbarItem::FixedSpace {
                width: Some(REGULAR_SPACER_WIDTH),
            };

            let mut items = Vec::with_capacity(9);
            if add_space {
                // Leading gap; ends up at the far edge once reversed.
                items.push(spacer);
            }
            let mut push = |item: ToolbarItem| {
                items.push(item);
                if add_space {
                    items.push(spacer);
                }
            };

            if input.options.contains(ButtonOptionSet::REFRESH) {
                push(refresh_stop);
            }
            if input.options.contains(ButtonOptionSet::COURSE) {
                push(back);
                push(forward);
            }
            if input.options.contains(ButtonOptionSet::ACTION) {
                push(action);
            }

            items.reverse();
            ToolbarLayout::Trailing(items)
        }
    }
}

/// Write `layout` to `sink` unless the screen is closing.
///
/// Returns whether anything was written. `Hidden` never writes.
pub fn apply_layout<S: ToolbarSink + ?Sized>(
    layout: &ToolbarLayout,
    closing: bool,
    sink: &mut S,
) -> bool {
    if closing {
        return false;
    }
    match layout {
        ToolbarLayout::Hidden => false,
        ToolbarLayout::Bottom(items) => {
            sink.set_toolbar_items(items);
            true
        }
        ToolbarLayout::Trailing(items) => {
            sink.set_trailing_items(items);
            true
        }
    }
}
