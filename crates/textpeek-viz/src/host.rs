//! Native eframe host.
//!
//! eframe owns the one event loop of the process. It is created inside
//! [`start`], runs until the window closes and is torn down before
//! [`start`] returns, on success and on failure alike.

use eframe::{run_native, NativeOptions};
use tracing::info;

use textpeek_core::{DocumentWindow, StartupError, StartupResult, TextContent, WindowConfig};

use crate::app::TextpeekApp;

/// Viewport options for the document window.
pub fn native_options(config: &WindowConfig) -> NativeOptions {
    NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.inner_size)
            .with_min_inner_size(config.min_inner_size)
            .with_title(config.title.clone()),
        ..Default::default()
    }
}

/// Show the document window and block until it is closed.
pub fn start(content: TextContent, config: &WindowConfig) -> StartupResult<()> {
    let window = DocumentWindow::new(content, config);
    let title = window.title().to_string();

    info!(%title, "starting event loop");

    run_native(
        &title,
        native_options(config),
        Box::new(move |_cc| Ok(Box::new(TextpeekApp::new(window)))),
    )
    .map_err(|e| StartupError::toolkit(e.to_string()))?;

    info!("window closed");
    Ok(())
}
