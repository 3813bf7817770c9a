use crate::AcademyApp;
use crate::ui::helpers::big_list_button;
use egui::{Align, Context, RichText};

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "📚",
        "Kapsamlı Eğitim",
        "Temel blockchain kavramlarından ileri seviye Stellar geliştirmeye kadar",
    ),
    (
        "🧩",
        "Pratik Projeler",
        "Gerçek dünya projeleri ile öğrendiklerini uygula",
    ),
    (
        "🔐",
        "Güvenli Giriş",
        "Flash bellek tabanlı wallet kimlik doğrulama sistemi",
    ),
];

pub fn ui_landing(app: &mut AcademyApp, ctx: &Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let max_width = 640.0;
        let content_width = ui.available_width().min(max_width);

        let estimated_h = 420.0;
        let vs = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
        ui.add_space(vs / 2.0);

        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(24, 20))
                .show(ui, |ui| {
                    ui.set_width(content_width);
                    ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
                        ui.label(RichText::new("Stellar ve Web3").size(30.0).strong());
                        ui.add_space(8.0);
                        ui.label(
                            "Blockchain teknolojisini öğren, Stellar ağında geliştirme yap ve \
                             Web3'ün geleceğini şekillendir. Flash bellek tabanlı güvenli kimlik \
                             doğrulama ile hemen başla.",
                        );
                        ui.add_space(18.0);

                        let btn_w = (content_width * 0.6).clamp(160.0, 320.0);
                        let enabled = app.login_supported();
                        if big_list_button(ui, "🚀 Blockchain Yolculuğuna Başla", btn_w, 40.0, enabled)
                        {
                            app.open_login();
                        }
                        if !enabled {
                            ui.add_space(6.0);
                            ui.colored_label(egui::Color32::YELLOW, app.unsupported_warning());
                        }

                        if !app.message.is_empty() {
                            ui.add_space(8.0);
                            ui.colored_label(egui::Color32::LIGHT_RED, &app.message);
                        }

                        ui.add_space(24.0);
                        ui.heading("Neden Stellar Academy?");
                        ui.add_space(8.0);
                    });

                    ui.columns(FEATURES.len(), |cols| {
                        for (col, (icon, title, text)) in cols.iter_mut().zip(FEATURES) {
                            col.vertical_centered(|ui| {
                                ui.label(RichText::new(icon).size(24.0));
                                ui.label(RichText::new(title).strong());
                                ui.small(text);
                            });
                        }
                    });
                });
        });

        ui.add_space(vs / 2.0);
    });
}
