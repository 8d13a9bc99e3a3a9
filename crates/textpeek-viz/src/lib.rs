//! egui visualization for the textpeek document window.
//!
//! [`TextpeekApp`] renders a [`textpeek_core::DocumentWindow`] and feeds
//! checkbox input back into it. [`start`] hosts the app in a native eframe
//! window and blocks until the user closes it.

mod app;
mod host;

pub use app::TextpeekApp;
pub use host::{native_options, start};
