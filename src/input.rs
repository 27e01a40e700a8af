//! Pointer protocol for drag-painting.
//!
//! The tracker is a two-state machine over the primary button:
//!
//! ```text
//!            press over a cell (applies tool)
//!      ┌────────────────────────────────────────┐
//!      │                                        ▼
//! ┌────┴───┐                               ┌────────┐ enter new cell
//! │   Up   │                               │  Down  ├────────────────┐
//! └────────┘                               └────┬───┘ (applies tool) │
//!      ▲                                        │    ▲               │
//!      └────────────────────────────────────────┘    └───────────────┘
//!                  release anywhere
//! ```
//!
//! Hovering while `Up` never applies anything. While `Down`, the tool fires
//! once per cell *entered*, not once per frame: resting the pointer on a
//! cell does not keep repainting it, which matters for random-color mode
//! where every application rolls a fresh color.

/// Whether the primary pointer button is currently held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerState {
    Up,
    Down,
}

/// Tracks the held button and the last cell the tool was applied to, so a
/// frame-based caller can report the hovered cell every frame and still get
/// per-cell-entry semantics.
#[derive(Debug, Clone, Copy)]
pub struct PointerTracker {
    state: PointerState,
    last_cell: Option<(usize, usize)>,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self {
            state: PointerState::Up,
            last_cell: None,
        }
    }
}

impl PointerTracker {
    pub fn state(&self) -> PointerState {
        self.state
    }

    pub fn is_down(&self) -> bool {
        self.state == PointerState::Down
    }

    /// Primary button pressed over `cell`. The tool is applied to that cell
    /// immediately; pressing is a paint, not just a mode switch.
    pub fn press(&mut self, cell: (usize, usize)) -> (usize, usize) {
        self.state = PointerState::Down;
        self.last_cell = Some(cell);
        cell
    }

    /// The cell currently under the pointer, or `None` when the pointer is
    /// off the board. Returns the cell to apply the tool to, if this hover
    /// entered a new cell while the button is held.
    pub fn hover(&mut self, cell: Option<(usize, usize)>) -> Option<(usize, usize)> {
        if self.state != PointerState::Down {
            return None;
        }
        match cell {
            Some(cell) if self.last_cell != Some(cell) => {
                self.last_cell = Some(cell);
                Some(cell)
            }
            Some(_) => None,
            None => {
                // Leaving the board re-arms the last cell, so coming back to
                // it counts as entering it again.
                self.last_cell = None;
                None
            }
        }
    }

    /// Primary button released, anywhere on screen.
    pub fn release(&mut self) {
        self.state = PointerState::Up;
        self.last_cell = None;
    }
}
