use egui::{Color32, Pos2, Rect, Sense, Stroke, vec2};

use crate::PixelApp;

const BOARD_BACKGROUND: Color32 = Color32::WHITE;
const GRID_LINE: Stroke = Stroke {
    width: 1.0,
    color: Color32::from_gray(200),
};
const BOARD_BORDER: Stroke = Stroke {
    width: 1.0,
    color: Color32::from_gray(120),
};

/// Maps between screen space and cell coordinates for one frame's board rect.
struct BoardLayout {
    rect: Rect,
    size: usize,
    cell_side: f32,
}

impl BoardLayout {
    fn new(rect: Rect, size: usize) -> Self {
        Self {
            rect,
            size,
            cell_side: rect.width() / size as f32,
        }
    }

    /// The cell under `pos`, if it lies on the board.
    fn cell_at(&self, pos: Pos2) -> Option<(usize, usize)> {
        if !self.rect.contains(pos) {
            return None;
        }
        let col = ((pos.x - self.rect.min.x) / self.cell_side) as usize;
        let row = ((pos.y - self.rect.min.y) / self.cell_side) as usize;
        // The rect's far edges belong to the last row/column.
        Some((row.min(self.size - 1), col.min(self.size - 1)))
    }

    fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let min = self.rect.min
            + vec2(col as f32 * self.cell_side, row as f32 * self.cell_side);
        Rect::from_min_size(min, vec2(self.cell_side, self.cell_side))
    }
}

/// The central panel: draws the board every frame and translates egui's
/// per-frame pointer state into the session's down/hover/up protocol.
pub fn board_panel(app: &mut PixelApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available = ui.available_size();
        let side = available.x.min(available.y);
        // Only the primary button paints; a secondary-button press neither
        // paints nor opens a menu on the board surface.
        let (response, painter) = ui.allocate_painter(vec2(side, side), Sense::click_and_drag());
        let layout = BoardLayout::new(response.rect, app.session.board().size());

        let hovered_cell = response.hover_pos().and_then(|pos| layout.cell_at(pos));
        let (pressed, down, released) = ctx.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_down(),
                i.pointer.primary_released(),
            )
        });

        // Press before release, so a press and release reported in the same
        // frame still paints once and ends with the button up.
        if pressed {
            if let Some(cell) = hovered_cell {
                app.session.pointer_down(cell);
            }
        } else if down {
            app.session.pointer_hover(hovered_cell);
        }
        if released {
            app.session.pointer_up();
        }

        paint_board(app, &painter, &layout);
    });
}

fn paint_board(app: &PixelApp, painter: &egui::Painter, layout: &BoardLayout) {
    painter.rect_filled(layout.rect, 0.0, BOARD_BACKGROUND);

    let board = app.session.board();
    for row in 0..board.size() {
        for col in 0..board.size() {
            if let Some(color) = board.cell(row, col) {
                painter.rect_filled(layout.cell_rect(row, col), 0.0, color);
            }
        }
    }

    if app.session.grid_lines_visible() {
        for i in 1..layout.size {
            let offset = i as f32 * layout.cell_side;
            let x = layout.rect.min.x + offset;
            let y = layout.rect.min.y + offset;
            painter.line_segment(
                [Pos2::new(x, layout.rect.min.y), Pos2::new(x, layout.rect.max.y)],
                GRID_LINE,
            );
            painter.line_segment(
                [Pos2::new(layout.rect.min.x, y), Pos2::new(layout.rect.max.x, y)],
                GRID_LINE,
            );
        }
    }

    painter.rect_stroke(layout.rect, 0.0, BOARD_BORDER);
}
