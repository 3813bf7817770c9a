use crate::AcademyApp;
use crate::ui::layout::two_button_row;
use eframe::egui;
use egui_commonmark::CommonMarkViewer;

pub fn ui_lesson(app: &mut AcademyApp, ui: &mut egui::Ui, content: &str, is_first: bool, is_last: bool) {
    let panel_width = ui.available_width().min(720.0);

    egui::Frame::default()
        .fill(ui.visuals().window_fill())
        .inner_margin(egui::Margin::symmetric(24, 16))
        .show(ui, |ui| {
            ui.set_width(panel_width);

            // Reserve room for the buttons under the text
            let footer_h = 60.0;
            let text_h = (ui.available_height() - footer_h).max(120.0);

            egui::ScrollArea::vertical()
                .max_height(text_h)
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    CommonMarkViewer::new().show(ui, &mut app.cm_cache, content);
                });

            ui.add_space(12.0);
            let right = if is_last { "Kursu Tamamla ➡" } else { "Devam Et ➡" };
            let (prev, next) = two_button_row(ui, panel_width, ("⬅ Önceki", !is_first), (right, true));
            if prev {
                app.previous_module();
            }
            if next {
                app.complete_lesson();
            }
        });
}
