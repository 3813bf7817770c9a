use crate::AcademyApp;
use egui::{Button, Context, RichText, Ui};

/// Header with the learner, the shortened wallet code and logout.
pub fn top_panel(app: &mut AcademyApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.label(RichText::new("⭐ Stellar Academy").strong().size(18.0));

            let Some(session) = &app.session else {
                return;
            };
            let (name, wallet) = (session.display_name.clone(), session.short_wallet());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🚪 Çıkış").clicked() {
                    app.logout();
                    ctx.request_repaint();
                }
                ui.label(format!("👛 Wallet: {wallet}"));
                ui.label(format!("👤 {name}"));
            });
        });
    });
}

pub fn bottom_panel(app: &mut AcademyApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- THEME BUTTONS -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Koyu tema").clicked() {
                app.set_dark_mode(ctx, true);
            }
            if ui.button("☀ Açık tema").clicked() {
                app.set_dark_mode(ctx, false);
            }
        });
    });
}

/// Two equally sized buttons in a row, centered in the given width.
/// Returns (left clicked, right clicked).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left: (&str, bool),
    right: (&str, bool),
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        ui.add_space(((ui.available_width() - panel_width) / 2.0).max(0.0));
        clicked_left = ui
            .add_enabled_ui(left.1, |ui| ui.add_sized([btn_w, 36.0], Button::new(left.0)))
            .inner
            .clicked();
        clicked_right = ui
            .add_enabled_ui(right.1, |ui| ui.add_sized([btn_w, 36.0], Button::new(right.0)))
            .inner
            .clicked();
    });
    (clicked_left, clicked_right)
}
