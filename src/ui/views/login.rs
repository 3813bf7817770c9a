use crate::AcademyApp;
use crate::login::LoginStep;
use egui::{Color32, Context, RichText, TextEdit};

pub fn ui_login_window(app: &mut AcademyApp, ctx: &Context) {
    let mut open = true;
    let title = match app.login.step {
        LoginStep::Registration { .. } => "Kullanıcı Kaydı",
        _ => "Flash Bellek Girişi",
    };

    egui::Window::new(title)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_width(360.0);
            match app.login.step.clone() {
                LoginStep::Initial { .. } => initial(app, ui),
                LoginStep::Registration { .. } => registration(app, ui),
                LoginStep::Success(_) => {
                    ui.label(RichText::new("🎉 Giriş başarılı!").strong());
                }
                step => progress(ui, &step),
            }

            if let Some(err) = app.login_error() {
                ui.add_space(8.0);
                ui.colored_label(Color32::LIGHT_RED, format!("❌ {err}"));
            }
        });

    if !open {
        app.close_login();
    }
}

fn initial(app: &mut AcademyApp, ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("💾").size(32.0));
        ui.label(RichText::new("Flash bellek dizinini seçin").strong());
        ui.small("Flash belleğinizin kök dizinini seçin (örn: F:\\)");
        ui.add_space(12.0);

        let supported = app.login_supported();
        if ui
            .add_enabled(supported, egui::Button::new("📁 Flash Bellek Seçin"))
            .clicked()
        {
            app.start_login();
        }
        if !supported {
            ui.colored_label(Color32::YELLOW, app.unsupported_warning());
        }
    });
}

fn progress(ui: &mut egui::Ui, step: &LoginStep) {
    ui.vertical_centered(|ui| {
        ui.add_space(8.0);
        ui.spinner();
        ui.add_space(8.0);
        ui.label(step.status_text());
        if matches!(step, LoginStep::Validating) {
            ui.small("Sunucu ile iletişim kuruluyor");
        }
    });
}

fn registration(app: &mut AcademyApp, ui: &mut egui::Ui) {
    ui.label("Hesabınızı oluşturmak için bilgilerinizi girin");
    ui.add_space(8.0);

    let busy = app.login.submitting;
    ui.add_enabled_ui(!busy, |ui| {
        egui::Grid::new("registration_grid")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("Ad");
                ui.add(TextEdit::singleline(&mut app.login.name).hint_text("Adınızı girin"));
                ui.end_row();
                ui.label("Soyad");
                ui.add(TextEdit::singleline(&mut app.login.surname).hint_text("Soyadınızı girin"));
                ui.end_row();
            });
    });

    ui.add_space(10.0);
    if busy {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Hesabınız oluşturuluyor...");
        });
        return;
    }

    ui.horizontal(|ui| {
        if ui.button("⬅ Geri").clicked() {
            app.cancel_registration();
        }
        if ui.button("Kayıt Ol").clicked() {
            app.submit_registration();
        }
    });
}
