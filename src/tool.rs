use egui::Color32;

use crate::color::DEFAULT_COLOR;

/// Which pen variant is configured. Remembered even while the eraser is
/// active so the Pen button can restore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PenMode {
    Solid,
    Random,
}

/// The mutually exclusive tool family: the pen (in either mode) or the eraser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTool {
    Pen,
    Eraser,
}

/// What a cell event does under the current selection. Exactly one of these
/// is in effect at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolAction {
    PaintSolid,
    PaintRandom,
    Erase,
}

/// The paint tool selector.
///
/// Holds the active tool, the configured pen variant and the solid color.
/// Mutual exclusion between the eraser and the pen variants is structural:
/// `ActiveTool` is a single value, and the pen variant only takes effect
/// while the pen is active. Transitions happen only from control-panel
/// clicks; there is nothing asynchronous here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolState {
    active: ActiveTool,
    pen_mode: PenMode,
    selected_color: Color32,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            active: ActiveTool::Pen,
            pen_mode: PenMode::Solid,
            selected_color: DEFAULT_COLOR,
        }
    }
}

impl ToolState {
    /// Sets the solid color and activates the solid pen, deactivating the
    /// eraser.
    pub fn select_solid_color(&mut self, color: Color32) {
        self.selected_color = color;
        self.pen_mode = PenMode::Solid;
        self.active = ActiveTool::Pen;
    }

    /// Activates the random-color pen, deactivating the eraser.
    pub fn select_random_color(&mut self) {
        self.pen_mode = PenMode::Random;
        self.active = ActiveTool::Pen;
    }

    /// Activates the eraser, suppressing whichever pen variant is configured.
    pub fn select_eraser(&mut self) {
        self.active = ActiveTool::Eraser;
    }

    /// Reactivates the pen in its last configured variant, deactivating the
    /// eraser.
    pub fn select_pen(&mut self) {
        self.active = ActiveTool::Pen;
    }

    pub fn selected_color(&self) -> Color32 {
        self.selected_color
    }

    pub fn pen_mode(&self) -> PenMode {
        self.pen_mode
    }

    pub fn is_pen_active(&self) -> bool {
        self.active == ActiveTool::Pen
    }

    pub fn is_eraser_active(&self) -> bool {
        self.active == ActiveTool::Eraser
    }

    /// The action a cell event performs right now.
    pub fn action(&self) -> ToolAction {
        match (self.active, self.pen_mode) {
            (ActiveTool::Eraser, _) => ToolAction::Erase,
            (ActiveTool::Pen, PenMode::Solid) => ToolAction::PaintSolid,
            (ActiveTool::Pen, PenMode::Random) => ToolAction::PaintRandom,
        }
    }
}
