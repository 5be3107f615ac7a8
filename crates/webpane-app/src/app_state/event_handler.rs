//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::core::WebpaneApp;
use super::shortcuts::{shortcut_for, Shortcut};

impl ApplicationHandler for WebpaneApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_screen_bounds();
                }
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit() {
            self.shutdown();
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl WebpaneApp {
    /// Translate a key press into a toolbar action or dismissal.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        let KeyEvent {
            logical_key, state, ..
        } = event;
        if state != ElementState::Pressed {
            return;
        }
        let Some(shortcut) = shortcut_for(&logical_key, self.modifiers) else {
            return;
        };
        let Some(screen) = self.screen.as_mut() else {
            return;
        };

        tracing::debug!(?shortcut, "shortcut");
        match shortcut {
            Shortcut::Toolbar(button) => {
                if screen.options().offers(button) {
                    screen.perform(button);
                }
            }
            Shortcut::Done => screen.done(),
            Shortcut::DevTools => screen.renderer().open_devtools(),
        }
    }
}
