//! Scrollable text viewer state.

use crate::content::TextContent;

/// State of the scrollable region that renders the document text.
///
/// Hiding the viewer only flips a flag. Content and scroll position stay
/// untouched so showing it again restores exactly what was there.
#[derive(Debug, Clone)]
pub struct ContentViewer {
    content: TextContent,
    visible: bool,
    /// Last scroll position reported by the renderer, in points.
    scroll_offset: [f32; 2],
}

impl ContentViewer {
    /// Create a hidden viewer showing `content`.
    pub fn new(content: TextContent) -> Self {
        let mut viewer = Self {
            content: TextContent::default(),
            visible: false,
            scroll_offset: [0.0, 0.0],
        };
        viewer.set_content(content);
        viewer
    }

    /// Replace the displayed text.
    pub(crate) fn set_content(&mut self, content: TextContent) {
        self.content = content;
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn text(&self) -> &str {
        self.content.as_str()
    }

    pub fn scroll_offset(&self) -> [f32; 2] {
        self.scroll_offset
    }

    pub(crate) fn set_scroll_offset(&mut self, offset: [f32; 2]) {
        self.scroll_offset = offset;
    }
}
