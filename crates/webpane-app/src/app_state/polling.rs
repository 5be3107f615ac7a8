//! Renderer event draining and wake-up scheduling.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::WebpaneApp;
use super::types::POLL_INTERVAL;

impl WebpaneApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_screen_events();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    /// Feed queued renderer callbacks into the screen, in arrival order.
    fn poll_screen_events(&mut self) {
        let Some(screen) = self.screen.as_mut() else {
            return;
        };
        let events = screen.renderer().drain_events();
        if events.is_empty() {
            return;
        }
        tracing::trace!(count = events.len(), "draining renderer events");
        for event in events {
            screen.handle_event(event);
        }
    }
}
