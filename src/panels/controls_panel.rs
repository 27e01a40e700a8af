use egui::Slider;

use crate::PixelApp;
use crate::board;
use crate::color::{format_hex, parse_hex};
use crate::tool::PenMode;

/// The side panel with every control: color selection, tool buttons, size
/// slider, clear and grid-lines toggle.
pub fn controls_panel(app: &mut PixelApp, ctx: &egui::Context) {
    egui::SidePanel::left("controls_panel")
        .resizable(false)
        .default_width(170.0)
        .show(ctx, |ui| {
            ui.heading("Controls");
            ui.separator();

            color_controls(app, ui);
            ui.separator();

            tool_buttons(app, ui);
            ui.separator();

            size_slider(app, ui);
            ui.separator();

            if ui.button("Clear").clicked() {
                app.session.clear_board();
            }

            if ui
                .selectable_label(app.session.grid_lines_visible(), "Grid Lines")
                .clicked()
            {
                app.session.toggle_grid_lines();
            }
        });
}

fn color_controls(app: &mut PixelApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.label("Color:");
        let mut color = app.session.selected_color();
        let response = ui.color_edit_button_srgba(&mut color);
        // Opening the picker already switches back to the solid pen, like
        // clicking the color well does in the original controls.
        if response.clicked() || response.changed() {
            app.session.select_solid_color(color);
        }
    });

    // Browsers let you type a hex value into the color input; mirror that
    // with a small text field committed on enter.
    let edit = ui.text_edit_singleline(&mut app.hex_entry);
    if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        match parse_hex(app.hex_entry.trim()) {
            Ok(color) => app.session.select_solid_color(color),
            Err(err) => log::warn!("rejected color entry: {err}"),
        }
    }
    if !edit.has_focus() {
        app.hex_entry = format_hex(app.session.selected_color());
    }
}

fn tool_buttons(app: &mut PixelApp, ui: &mut egui::Ui) {
    let tools = *app.session.tools();

    if ui
        .selectable_label(
            tools.is_pen_active() && tools.pen_mode() == PenMode::Solid,
            "Solid Color",
        )
        .clicked()
    {
        let color = app.session.selected_color();
        app.session.select_solid_color(color);
    }

    if ui
        .selectable_label(
            tools.is_pen_active() && tools.pen_mode() == PenMode::Random,
            "Random Color",
        )
        .clicked()
    {
        app.session.select_random_color();
    }

    if ui.selectable_label(tools.is_pen_active(), "Pen").clicked() {
        app.session.select_pen();
    }

    if ui
        .selectable_label(tools.is_eraser_active(), "Eraser")
        .clicked()
    {
        app.session.select_eraser();
    }
}

fn size_slider(app: &mut PixelApp, ui: &mut egui::Ui) {
    // Live preview label; the board itself only changes on commit.
    ui.label(format!("{0} x {0}", app.pending_size));
    let response = ui.add(
        Slider::new(&mut app.pending_size, board::MIN_SIZE..=board::MAX_SIZE).show_value(false),
    );

    // Dragging updates the label only. Releasing the slider, or setting the
    // value without a drag (keyboard, click on the rail), commits the resize.
    let committed = response.drag_stopped() || (response.changed() && !response.dragged());
    if committed && app.pending_size != app.session.board().size() {
        app.session.resize(app.pending_size);
    }
}
