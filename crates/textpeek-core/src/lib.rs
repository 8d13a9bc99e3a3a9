//! Core model for textpeek: a single window showing one block of text
//! behind a show/hide checkbox.
//!
//! Nothing in this crate depends on a GUI toolkit. The renderer in
//! `textpeek-viz` reads the model every frame and reports user input back
//! through [`DocumentWindow`].

mod config;
mod content;
mod error;
mod toggle;
mod viewer;
mod window;

pub use config::WindowConfig;
pub use content::TextContent;
pub use error::{StartupError, StartupResult};
pub use toggle::{ToggleState, Toggled, VisibilityToggle};
pub use viewer::ContentViewer;
pub use window::{DocumentWindow, VisibilityBinding};
