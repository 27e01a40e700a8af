use egui::Color32;

use crate::board::Board;
use crate::color::random_color;
use crate::input::PointerTracker;
use crate::tool::{ToolAction, ToolState};

/// Board edge on startup.
pub const DEFAULT_SIZE: usize = 16;

/// The one owner of all mutable drawing state.
///
/// Panels read from it and feed it intents; it routes pointer events through
/// the tracker and applies the selected tool to the board. Tool selection,
/// solid color and grid-line visibility survive board recreation, the board
/// itself never does.
pub struct DrawingSession {
    board: Board,
    tools: ToolState,
    pointer: PointerTracker,
    grid_lines_visible: bool,
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self {
            board: Board::new(DEFAULT_SIZE),
            tools: ToolState::default(),
            pointer: PointerTracker::default(),
            grid_lines_visible: true,
        }
    }
}

impl DrawingSession {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn grid_lines_visible(&self) -> bool {
        self.grid_lines_visible
    }

    pub fn selected_color(&self) -> Color32 {
        self.tools.selected_color()
    }

    // ----- control panel intents -----

    pub fn select_solid_color(&mut self, color: Color32) {
        self.tools.select_solid_color(color);
        log::info!("tool selected: solid pen, color {:?}", color);
    }

    pub fn select_random_color(&mut self) {
        self.tools.select_random_color();
        log::info!("tool selected: random pen");
    }

    pub fn select_eraser(&mut self) {
        self.tools.select_eraser();
        log::info!("tool selected: eraser");
    }

    pub fn select_pen(&mut self) {
        self.tools.select_pen();
        log::info!(
            "tool selected: pen, restoring {:?} mode",
            self.tools.pen_mode()
        );
    }

    /// Commits a resize: the board is destroyed and recreated empty at the
    /// new size. Tool and grid-line state are untouched.
    pub fn resize(&mut self, size: usize) {
        self.board = Board::new(size);
        self.pointer.release();
        log::info!("board resized to {0} x {0}", self.board.size());
    }

    /// Replaces the board with an empty one at its current committed size,
    /// independent of any uncommitted slider preview.
    pub fn clear_board(&mut self) {
        self.board = Board::new(self.board.size());
        self.pointer.release();
        log::info!("board cleared");
    }

    /// Shows or hides the grid lines. A display concern only; cell paint
    /// state is untouched.
    pub fn set_grid_lines_visible(&mut self, visible: bool) {
        self.grid_lines_visible = visible;
        log::info!("grid lines visible: {visible}");
    }

    pub fn toggle_grid_lines(&mut self) {
        self.set_grid_lines_visible(!self.grid_lines_visible);
    }

    // ----- pointer protocol (board panel feeds these per frame) -----

    /// Primary button pressed while hovering `cell`.
    pub fn pointer_down(&mut self, cell: (usize, usize)) {
        let cell = self.pointer.press(cell);
        self.apply_tool(cell);
    }

    /// Current hover target while the frame's button state is unchanged.
    /// `None` means the pointer is off the board.
    pub fn pointer_hover(&mut self, cell: Option<(usize, usize)>) {
        if let Some(cell) = self.pointer.hover(cell) {
            self.apply_tool(cell);
        }
    }

    /// Primary button released, anywhere.
    pub fn pointer_up(&mut self) {
        self.pointer.release();
    }

    fn apply_tool(&mut self, (row, col): (usize, usize)) {
        match self.tools.action() {
            ToolAction::Erase => {
                log::trace!("erase cell ({row}, {col})");
                self.board.erase(row, col);
            }
            ToolAction::PaintRandom => {
                // Rolled per cell event on purpose, so a drag speckles.
                let color = random_color();
                log::trace!("paint cell ({row}, {col}) with random {:?}", color);
                self.board.paint(row, col, color);
            }
            ToolAction::PaintSolid => {
                log::trace!("paint cell ({row}, {col})");
                self.board.paint(row, col, self.tools.selected_color());
            }
        }
    }
}
