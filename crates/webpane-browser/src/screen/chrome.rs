//! Toolbar, share flow and dismissal.

use tracing::debug;
use webpane_common::DeviceClass;

use crate::hooks::{Renderer, ScreenHost};
use crate::share::ShareRequest;
use crate::toolbar::{apply_layout, derive_layout, LayoutInput, NavigationState, ToolbarButton};

use super::BrowserScreen;

impl<R: Renderer, H: ScreenHost> BrowserScreen<R, H> {
    /// Current inputs to the toolbar layout.
    pub fn layout_input(&self) -> LayoutInput {
        LayoutInput {
            options: self.options,
            device_class: self.host.device_class(),
            navigation: NavigationState {
                can_go_back: self.renderer.can_go_back(),
                can_go_forward: self.renderer.can_go_forward(),
                is_loading: self.renderer.is_loading(),
            },
            in_split_view: self.host.is_in_split_view(),
        }
    }

    /// Recompute the toolbar and write it unless the screen is closing.
    /// Returns whether the host was updated.
    pub fn refresh_toolbar(&mut self) -> bool {
        if self.options.is_empty() {
            return false;
        }
        let layout = derive_layout(&self.layout_input());
        let written = apply_layout(&layout, self.closing, &mut self.host);
        self.last_layout = layout;
        written
    }

    /// Screen is about to become visible.
    pub fn will_appear(&mut self) {
        if self.options.is_empty() {
            return;
        }
        let show = self.host.device_class() == DeviceClass::Compact;
        self.host.set_toolbar_hidden(!show);
        self.toolbar_shown = show;
    }

    /// Screen is about to go away; hide a toolbar we showed.
    pub fn will_disappear(&mut self) {
        if self.toolbar_shown {
            self.host.set_toolbar_hidden(true);
            self.toolbar_shown = false;
        }
    }

    pub fn did_disappear(&mut self) {
        self.services.activity.set_busy(false);
    }

    /// Handle a tap on a toolbar control.
    pub fn perform(&mut self, button: ToolbarButton) {
        debug!(?button, "toolbar action");
        match button {
            ToolbarButton::Back => self.renderer.go_back(),
            ToolbarButton::Forward => self.renderer.go_forward(),
            ToolbarButton::Refresh => self.renderer.reload(),
            ToolbarButton::Stop => self.stop(),
            ToolbarButton::Action => self.share(),
        }
    }

    /// Stop the current load. A pending attempt ends as a failure.
    pub fn stop(&mut self) {
        self.renderer.stop_loading();
        if self.phase.is_pending() && self.attempt > 0 {
            let url = self.current_url();
            self.did_fail_navigation(Some(&url), "stopped");
        } else {
            self.refresh_toolbar();
        }
    }

    /// Present the share flow for the page on screen.
    pub fn share(&mut self) {
        let request = ShareRequest::for_url(
            self.current_url(),
            self.host.device_class(),
            self.host.bounds(),
        );
        debug!(url = %request.url(), "presenting share");
        self.host.present_share(&request);
    }

    /// Dismiss the screen. Only the first call has any effect.
    pub fn done(&mut self) {
        if self.closing {
            debug!("done called while already closing");
            return;
        }
        self.closing = true;
        if let Some(callback) = self.closing_callback.take() {
            callback();
        }
        if let Some(token) = self.stored_bar_style.take() {
            self.host.restore_bar_style(&token);
        }
        self.host.dismiss();
    }

    /// Full teardown when the host window goes away: dismiss first, then
    /// the disappearance callbacks.
    pub fn close(&mut self) {
        self.done();
        self.will_disappear();
        self.did_disappear();
    }
}
