use egui::Color32;
use pixel_board::{DrawingSession, PointerState, PointerTracker, parse_hex};

fn painted_cells(session: &DrawingSession) -> Vec<(usize, usize)> {
    let board = session.board();
    let mut painted = Vec::new();
    for row in 0..board.size() {
        for col in 0..board.size() {
            if board.is_painted(row, col) {
                painted.push((row, col));
            }
        }
    }
    painted
}

#[test]
fn drag_paints_every_entered_cell_and_nothing_else() {
    let mut session = DrawingSession::default();
    let red = parse_hex("#ff0000").unwrap();
    session.select_solid_color(red);

    session.pointer_down((0, 0));
    session.pointer_hover(Some((0, 1)));
    session.pointer_hover(Some((0, 2)));
    session.pointer_up();

    assert_eq!(painted_cells(&session), vec![(0, 0), (0, 1), (0, 2)]);
    for cell in [(0, 0), (0, 1), (0, 2)] {
        assert_eq!(session.board().cell(cell.0, cell.1), Some(red));
    }
}

#[test]
fn hover_without_a_press_never_paints() {
    let mut session = DrawingSession::default();
    session.pointer_hover(Some((3, 3)));
    session.pointer_hover(Some((4, 4)));
    assert!(painted_cells(&session).is_empty());
}

#[test]
fn hover_after_release_never_paints() {
    let mut session = DrawingSession::default();
    session.pointer_down((0, 0));
    session.pointer_up();
    session.pointer_hover(Some((5, 5)));
    assert_eq!(painted_cells(&session), vec![(0, 0)]);
}

#[test]
fn pressing_alone_paints_that_cell() {
    let mut session = DrawingSession::default();
    session.pointer_down((7, 2));
    assert_eq!(painted_cells(&session), vec![(7, 2)]);
}

#[test]
fn eraser_drag_clears_painted_cells_only() {
    let mut session = DrawingSession::default();
    session.pointer_down((1, 0));
    session.pointer_hover(Some((1, 1)));
    session.pointer_up();

    session.select_eraser();
    session.pointer_down((1, 0));
    session.pointer_hover(Some((1, 1)));
    session.pointer_hover(Some((1, 2))); // was never painted
    session.pointer_up();

    assert!(painted_cells(&session).is_empty());
}

#[test]
fn random_mode_paints_valid_opaque_colors() {
    let mut session = DrawingSession::default();
    session.select_random_color();

    session.pointer_down((0, 0));
    for col in 1..8 {
        session.pointer_hover(Some((0, col)));
    }
    session.pointer_up();

    assert_eq!(painted_cells(&session).len(), 8);
    for col in 0..8 {
        let color = session.board().cell(0, col).unwrap();
        assert_eq!(color.a(), 255);
    }
}

#[test]
fn tracker_applies_once_per_entered_cell() {
    let mut tracker = PointerTracker::default();
    assert_eq!(tracker.state(), PointerState::Up);

    assert_eq!(tracker.press((0, 0)), (0, 0));
    assert!(tracker.is_down());

    // Resting on the pressed cell does not re-apply.
    assert_eq!(tracker.hover(Some((0, 0))), None);
    assert_eq!(tracker.hover(Some((0, 1))), Some((0, 1)));
    assert_eq!(tracker.hover(Some((0, 1))), None);

    // Leaving the board and coming back to the same cell counts as a fresh
    // entry.
    assert_eq!(tracker.hover(None), None);
    assert_eq!(tracker.hover(Some((0, 1))), Some((0, 1)));

    tracker.release();
    assert_eq!(tracker.state(), PointerState::Up);
    assert_eq!(tracker.hover(Some((2, 2))), None);
}

#[test]
fn resize_recreates_an_empty_board_and_keeps_ui_state() {
    let mut session = DrawingSession::default();
    let teal = parse_hex("#008080").unwrap();
    session.select_solid_color(teal);
    session.pointer_down((0, 0));
    session.pointer_up();
    assert!(session.grid_lines_visible());

    session.resize(32);

    assert_eq!(session.board().size(), 32);
    assert!(painted_cells(&session).is_empty());
    assert!(session.grid_lines_visible());
    assert_eq!(session.selected_color(), teal);
}

#[test]
fn clear_empties_the_board_at_its_current_size() {
    let mut session = DrawingSession::default();
    session.resize(24);
    session.select_eraser();
    session.select_pen();
    session.pointer_down((10, 10));
    session.pointer_up();

    session.clear_board();

    assert_eq!(session.board().size(), 24);
    assert!(painted_cells(&session).is_empty());
    // Tool and color selection survive the wipe.
    assert_eq!(session.selected_color(), Color32::BLACK);
    assert!(session.tools().is_pen_active());
}

#[test]
fn toggling_grid_lines_leaves_paint_alone() {
    let mut session = DrawingSession::default();
    session.pointer_down((2, 2));
    session.pointer_up();

    assert!(session.grid_lines_visible());
    session.toggle_grid_lines();
    assert!(!session.grid_lines_visible());
    session.toggle_grid_lines();
    assert!(session.grid_lines_visible());

    assert_eq!(painted_cells(&session), vec![(2, 2)]);
}

#[test]
fn release_interrupts_a_drag_mid_gesture() {
    let mut session = DrawingSession::default();
    session.pointer_down((0, 0));
    session.pointer_hover(Some((0, 1)));
    session.pointer_up();
    session.pointer_hover(Some((0, 2)));
    session.pointer_hover(Some((0, 3)));

    assert_eq!(painted_cells(&session), vec![(0, 0), (0, 1)]);
}
