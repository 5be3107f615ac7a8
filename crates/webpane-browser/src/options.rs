//! Which toolbar controls a screen offers.

use bitflags::bitflags;

use crate::toolbar::ToolbarButton;

bitflags! {
    /// Immutable selection of toolbar controls. Read during layout only.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ButtonOptionSet: u8 {
        /// Back and forward.
        const COURSE = 1 << 0;
        /// Refresh, or stop while loading.
        const REFRESH = 1 << 1;
        /// Share the current page.
        const ACTION = 1 << 2;
    }
}

impl ButtonOptionSet {
    /// Build from individual toggles, e.g. a config section.
    pub fn from_toggles(course: bool, refresh: bool, action: bool) -> Self {
        let mut set = Self::empty();
        set.set(Self::COURSE, course);
        set.set(Self::REFRESH, refresh);
        set.set(Self::ACTION, action);
        set
    }

    /// Whether the control behind `button` is part of this set.
    pub fn offers(self, button: ToolbarButton) -> bool {
        let flag = match button {
            ToolbarButton::Back | ToolbarButton::Forward => Self::COURSE,
            ToolbarButton::Refresh | ToolbarButton::Stop => Self::REFRESH,
            ToolbarButton::Action => Self::ACTION,
        };
        self.contains(flag)
    }
}

impl Default for ButtonOptionSet {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_three() {
        let set = ButtonOptionSet::default();
        assert!(set.contains(ButtonOptionSet::COURSE));
        assert!(set.contains(ButtonOptionSet::REFRESH));
        assert!(set.contains(ButtonOptionSet::ACTION));
        assert!(!set.is_empty());
    }

    #[test]
    fn from_toggles_matches_flags() {
        assert_eq!(
            ButtonOptionSet::from_toggles(true, false, true),
            ButtonOptionSet::COURSE | ButtonOptionSet::ACTION
        );
        assert!(ButtonOptionSet::from_toggles(false, false, false).is_empty());
    }

    #[test]
    fn offers_maps_buttons_to_flags() {
        let set = ButtonOptionSet::REFRESH;
        assert!(set.offers(ToolbarButton::Refresh));
        assert!(set.offers(ToolbarButton::Stop));
        assert!(!set.offers(ToolbarButton::Back));
        assert!(!set.offers(ToolbarButton::Action));
    }

    #[test]
    fn bit_values_are_stable() {
        assert_eq!(ButtonOptionSet::COURSE.bits(), 1);
        assert_eq!(ButtonOptionSet::REFRESH.bits(), 2);
        assert_eq!(ButtonOptionSet::ACTION.bits(), 4);
    }
}
