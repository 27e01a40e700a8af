use crate::color::format_hex;
use crate::panels;
use crate::session::DrawingSession;

/// The eframe application: one drawing session plus transient view state.
pub struct PixelApp {
    pub(crate) session: DrawingSession,
    /// Slider value while dragging; committed to the session on release.
    pub(crate) pending_size: usize,
    /// Contents of the hex color field.
    pub(crate) hex_entry: String,
}

impl Default for PixelApp {
    fn default() -> Self {
        let session = DrawingSession::default();
        Self {
            pending_size: session.board().size(),
            hex_entry: format_hex(session.selected_color()),
            session,
        }
    }
}

impl PixelApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }
}

impl eframe::App for PixelApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::controls_panel(self, ctx);
        panels::board_panel(self, ctx);
    }
}
