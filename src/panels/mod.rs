mod board_panel;
mod controls_panel;

pub use board_panel::board_panel;
pub use controls_panel::controls_panel;
