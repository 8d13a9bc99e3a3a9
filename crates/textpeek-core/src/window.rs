//! The top-level document window and the toggle → viewer binding.

use tracing::debug;

use crate::config::WindowConfig;
use crate::content::TextContent;
use crate::toggle::{Toggled, VisibilityToggle};
use crate::viewer::ContentViewer;

/// The single subscriber of the toggle's notifications.
///
/// Reads the toggle's checked state and mirrors it onto the viewer.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisibilityBinding;

impl VisibilityBinding {
    pub fn on_toggled(
        &self,
        event: Toggled,
        toggle: &VisibilityToggle,
        viewer: &mut ContentViewer,
    ) {
        let checked = toggle.is_checked();
        debug_assert_eq!(event.checked, checked);
        viewer.set_visible(checked);
        debug!(checked, "viewer visibility updated");
    }
}

/// One window: a text viewer stacked above its show/hide checkbox.
#[derive(Debug, Clone)]
pub struct DocumentWindow {
    title: String,
    toggle: VisibilityToggle,
    viewer: ContentViewer,
    /// Registered once here and never replaced.
    binding: VisibilityBinding,
}

impl DocumentWindow {
    pub fn new(content: TextContent, config: &WindowConfig) -> Self {
        debug!(
            bytes = content.len(),
            lines = content.line_count(),
            "building document window"
        );
        Self {
            title: config.title.clone(),
            toggle: VisibilityToggle::new(config.toggle_label.clone()),
            viewer: ContentViewer::new(content),
            binding: VisibilityBinding,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn toggle(&self) -> &VisibilityToggle {
        &self.toggle
    }

    pub fn viewer(&self) -> &ContentViewer {
        &self.viewer
    }

    /// Remember the scroll position reported by the renderer.
    ///
    /// This is the only viewer state writable from outside; visibility is
    /// owned by the binding.
    pub fn record_scroll_offset(&mut self, offset: [f32; 2]) {
        self.viewer.set_scroll_offset(offset);
    }

    /// Perform one user click on the checkbox.
    pub fn click_toggle(&mut self) {
        let event = self.toggle.activate();
        self.dispatch(event);
    }

    /// Apply the checked state reported by the native checkbox.
    ///
    /// Returns whether a notification was delivered.
    pub fn sync_toggle(&mut self, checked: bool) -> bool {
        let event = self.toggle.set_checked(checked);
        let fired = event.is_some();
        self.dispatch(event);
        fired
    }

    /// Viewer visibility matches the toggle's checked state.
    pub fn is_consistent(&self) -> bool {
        self.viewer.is_visible() == self.toggle.is_checked()
    }

    fn dispatch(&mut self, event: Option<Toggled>) {
        if let Some(event) = event {
            self.binding.on_toggled(event, &self.toggle, &mut self.viewer);
        }
    }
}
