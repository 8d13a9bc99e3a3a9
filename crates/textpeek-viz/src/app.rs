//! Main application state and rendering logic.

use eframe::App;
use egui::{Context, Label, Rect, ScrollArea, Ui};

use textpeek_core::DocumentWindow;

/// Stable id of the viewer's scroll area, so egui keeps its state across
/// frames where the viewer is hidden.
const VIEWER_SCROLL_ID: &str = "document_text";

/// The document window application.
pub struct TextpeekApp {
    window: DocumentWindow,
    /// Whether the viewer was drawn on the previous frame.
    viewer_was_shown: bool,
    /// Screen rect of the checkbox from the last frame.
    toggle_rect: Option<Rect>,
}

impl TextpeekApp {
    pub fn new(window: DocumentWindow) -> Self {
        Self {
            window,
            viewer_was_shown: false,
            toggle_rect: None,
        }
    }

    pub fn window(&self) -> &DocumentWindow {
        &self.window
    }

    /// Mutable access for driving the window without real input events.
    pub fn window_mut(&mut self) -> &mut DocumentWindow {
        &mut self.window
    }

    /// Where the checkbox was drawn on the last frame, if it was drawn.
    pub fn toggle_rect(&self) -> Option<Rect> {
        self.toggle_rect
    }

    /// Render one frame: the viewer stacked above the checkbox.
    pub fn render(&mut self, ctx: &Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical(|ui| {
                self.viewer_ui(ui);
                self.toggle_ui(ui);
            });
        });
    }

    fn viewer_ui(&mut self, ui: &mut Ui) {
        let viewer = self.window.viewer();
        if !viewer.is_visible() {
            self.viewer_was_shown = false;
            return;
        }

        // Leave one row below the viewer for the checkbox.
        let reserved = ui.spacing().interact_size.y + ui.spacing().item_spacing.y;
        let mut area = ScrollArea::both()
            .id_salt(VIEWER_SCROLL_ID)
            .auto_shrink([false, false])
            .max_height((ui.available_height() - reserved).max(0.0));

        if !self.viewer_was_shown {
            let [x, y] = viewer.scroll_offset();
            area = area.scroll_offset(egui::vec2(x, y));
        }

        let output = area.show(ui, |ui| {
            ui.add(Label::new(viewer.text()).extend());
        });

        let offset = output.state.offset;
        self.window.record_scroll_offset([offset.x, offset.y]);
        self.viewer_was_shown = true;
    }

    fn toggle_ui(&mut self, ui: &mut Ui) {
        let mut checked = self.window.toggle().is_checked();
        let response = ui.checkbox(&mut checked, self.window.toggle().label());
        self.toggle_rect = Some(response.rect);
        if response.changed() {
            self.window.sync_toggle(checked);
        }
    }
}

impl App for TextpeekApp {
    fn update(&mut self, ctx: &Context, _: &mut eframe::Frame) {
        self.render(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2, Event, Modifiers, PointerButton, RawInput};
    use textpeek_core::{TextContent, WindowConfig};

    fn app(text: &str) -> TextpeekApp {
        TextpeekApp::new(DocumentWindow::new(
            TextContent::new(text),
            &WindowConfig::default(),
        ))
    }

    fn small_screen() -> RawInput {
        RawInput {
            screen_rect: Some(Rect::from_min_size(pos2(0.0, 0.0), vec2(320.0, 160.0))),
            ..Default::default()
        }
    }

    fn frame(ctx: &Context, app: &mut TextpeekApp) {
        let _ = ctx.run(small_screen(), |ctx| app.render(ctx));
    }

    #[test]
    fn renders_hidden_viewer_without_touching_state() {
        let ctx = Context::default();
        let mut app = app("hello world");

        frame(&ctx, &mut app);

        assert!(!app.window().viewer().is_visible());
        assert!(!app.window().toggle().is_checked());
        assert!(!app.viewer_was_shown);
    }

    #[test]
    fn renders_visible_viewer_for_edge_case_texts() {
        for text in ["", "line1\nline2", "ünïcødé ✓"] {
            let ctx = Context::default();
            let mut app = app(text);
            app.window_mut().click_toggle();

            frame(&ctx, &mut app);

            assert!(app.viewer_was_shown);
            assert!(app.window().is_consistent());
            assert_eq!(app.window().viewer().text(), text);
        }
    }

    #[test]
    fn hiding_and_showing_restores_scroll_position() {
        let long_text = (0..200)
            .map(|i| format!("line {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let ctx = Context::default();
        let mut app = app(&long_text);

        app.window_mut().click_toggle();
        frame(&ctx, &mut app);
        app.window_mut().record_scroll_offset([0.0, 40.0]);

        app.window_mut().click_toggle();
        frame(&ctx, &mut app);
        assert!(!app.viewer_was_shown);

        app.window_mut().click_toggle();
        frame(&ctx, &mut app);

        let [_, y] = app.window().viewer().scroll_offset();
        assert!((y - 40.0).abs() < 0.5, "scroll offset was {y}");
        assert_eq!(app.window().viewer().text(), long_text);
    }

    /// Feeds frames with a steadily advancing clock so presses and
    /// releases register as single clicks.
    struct InputDriver {
        ctx: Context,
        time: f64,
    }

    impl InputDriver {
        fn new() -> Self {
            Self {
                ctx: Context::default(),
                time: 0.0,
            }
        }

        fn frame(&mut self, app: &mut TextpeekApp, events: Vec<Event>) {
            self.time += 0.05;
            let input = RawInput {
                time: Some(self.time),
                events,
                ..small_screen()
            };
            let _ = self.ctx.run(input, |ctx| app.render(ctx));
        }

        /// Press and release the primary button over the checkbox.
        fn click_checkbox(&mut self, app: &mut TextpeekApp) {
            // Let the layout settle and keep clicks apart from each other.
            self.time += 1.0;
            self.frame(app, Vec::new());
            self.frame(app, Vec::new());

            let pos = app.toggle_rect().expect("checkbox was drawn").center();
            self.frame(
                app,
                vec![
                    Event::PointerMoved(pos),
                    Event::PointerButton {
                        pos,
                        button: PointerButton::Primary,
                        pressed: true,
                        modifiers: Modifiers::default(),
                    },
                ],
            );
            self.frame(
                app,
                vec![Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed: false,
                    modifiers: Modifiers::default(),
                }],
            );
        }
    }

    #[test]
    fn clicking_the_checkbox_shows_and_hides_the_text() {
        let mut driver = InputDriver::new();
        let mut app = app("hello world");

        driver.frame(&mut app, Vec::new());
        assert!(app.toggle_rect().is_some());
        assert!(!app.window().toggle().is_checked());
        assert!(!app.window().viewer().is_visible());

        driver.click_checkbox(&mut app);
        assert!(app.window().toggle().is_checked());
        assert!(app.window().viewer().is_visible());
        assert_eq!(app.window().viewer().text(), "hello world");

        driver.frame(&mut app, Vec::new());
        assert!(app.viewer_was_shown);

        driver.click_checkbox(&mut app);
        assert!(!app.window().toggle().is_checked());
        assert!(!app.window().viewer().is_visible());
        assert!(app.window().is_consistent());
    }
}
