pub mod drag_drop;
pub mod fill_blanks;
pub mod matching;
pub mod quiz;

use crate::ui::layout::two_button_row;
use egui::Ui;

/// Shared footer of the games: before the check it offers reset/check,
/// afterwards a single forward button. Returns (reset, check, forward).
pub(crate) fn game_controls(
    ui: &mut Ui,
    checked: bool,
    can_check: bool,
    forward_label: &str,
) -> (bool, bool, bool) {
    let width = ui.available_width().min(420.0);
    ui.add_space(12.0);
    if checked {
        let clicked = ui
            .vertical_centered(|ui| {
                ui.add_sized([width / 2.0, 36.0], egui::Button::new(forward_label))
                    .clicked()
            })
            .inner;
        (false, false, clicked)
    } else {
        let (reset, check) = two_button_row(ui, width, ("⟲ Sıfırla", true), ("Kontrol Et", can_check));
        (reset, check, false)
    }
}
