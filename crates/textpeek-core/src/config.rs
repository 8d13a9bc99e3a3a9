//! Presentation constants for the window.
//!
//! These are fixed literals rather than user input: there is no config
//! file and no environment variable. The builder methods exist for the
//! development runner and tests.

/// Window title used by the application.
pub const DEFAULT_TITLE: &str = "My App";

/// Label of the show/hide checkbox.
pub const DEFAULT_TOGGLE_LABEL: &str = "Show document text";

/// Window presentation settings.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    /// Title of the top-level window.
    pub title: String,
    /// Label shown next to the checkbox.
    pub toggle_label: String,
    /// Initial inner size in points.
    pub inner_size: [f32; 2],
    /// Smallest inner size the window can be shrunk to.
    pub min_inner_size: [f32; 2],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            toggle_label: DEFAULT_TOGGLE_LABEL.to_string(),
            inner_size: [480.0, 320.0],
            min_inner_size: [200.0, 80.0],
        }
    }
}

impl WindowConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_inner_size(mut self, size: [f32; 2]) -> Self {
        self.inner_size = size;
        self
    }
}
