//! The text shown by the viewer.

use std::sync::Arc;

/// Immutable text supplied once at startup.
///
/// Clones share the same allocation, so handing the content to the viewer
/// and to log statements never copies the text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextContent(Arc<str>);

impl TextContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self(Arc::from(text.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of `\n`-separated lines. The empty string counts as one line.
    pub fn line_count(&self) -> usize {
        self.0.split('\n').count()
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}
