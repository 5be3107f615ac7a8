//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window and the browser screen embedded in it.

mod bounds;
mod clipboard;
mod core;
mod event_handler;
mod host;
mod init;
mod polling;
mod services;
mod shortcuts;
mod types;

pub use core::WebpaneApp;
