use egui::Color32;

/// Smallest board edge the size slider offers.
pub const MIN_SIZE: usize = 4;
/// Largest board edge the size slider offers.
pub const MAX_SIZE: usize = 64;

/// A square grid of paintable cells.
///
/// Cells are addressed as `(row, col)` with both in `[0, size)`. An empty
/// cell holds no color. The board is always recreated wholesale on resize or
/// clear; there is no resize-and-preserve path.
pub struct Board {
    size: usize,
    cells: Vec<Option<Color32>>,
}

impl Board {
    /// Creates an empty `size x size` board. The size is clamped to
    /// `[MIN_SIZE, MAX_SIZE]` so the board invariant holds even if a caller
    /// bypasses the slider bounds.
    pub fn new(size: usize) -> Self {
        let size = size.clamp(MIN_SIZE, MAX_SIZE);
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The painted color of a cell, or `None` if it is empty.
    pub fn cell(&self, row: usize, col: usize) -> Option<Color32> {
        self.cells[self.index(row, col)]
    }

    pub fn is_painted(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_some()
    }

    /// Paints a cell. Repainting an already-painted cell overwrites its color.
    pub fn paint(&mut self, row: usize, col: usize, color: Color32) {
        let i = self.index(row, col);
        self.cells[i] = Some(color);
    }

    /// Clears a cell back to empty if it is painted. Erasing an empty cell
    /// is a silent no-op.
    pub fn erase(&mut self, row: usize, col: usize) {
        let i = self.index(row, col);
        if self.cells[i].is_some() {
            self.cells[i] = None;
        }
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.size && col < self.size);
        row * self.size + col
    }
}
