use crate::AcademyApp;
use crate::dashboard::DashboardTab;
use crate::model::CourseLevel;
use crate::view_models::CourseCard;
use egui::{Color32, Context, ProgressBar, RichText};

pub fn ui_dashboard(app: &mut AcademyApp, ctx: &Context) {
    let first_name = app
        .session
        .as_ref()
        .map(|s| s.first_name().to_string())
        .unwrap_or_default();

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(format!("Hoş geldin, {first_name}! 👋"));
        ui.label("Stellar blockchain yolculuğuna devam etmeye hazır mısın?");
        ui.add_space(10.0);

        if !app.message.is_empty() {
            ui.horizontal(|ui| {
                ui.colored_label(Color32::YELLOW, &app.message);
                if ui.small_button("✖").clicked() {
                    app.message.clear();
                }
            });
            ui.add_space(6.0);
        }

        let Some(current_tab) = app.dashboard.as_ref().map(|d| d.tab) else {
            return;
        };
        ui.horizontal(|ui| {
            for tab in DashboardTab::ALL {
                if ui.selectable_label(current_tab == tab, tab.label()).clicked() {
                    if let Some(d) = app.dashboard.as_mut() {
                        d.tab = tab;
                    }
                }
            }
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| match current_tab {
                DashboardTab::Courses => courses_tab(app, ui),
                DashboardTab::Progress => progress_tab(app, ui),
                DashboardTab::Achievements => achievements_tab(app, ui),
            });
    });
}

fn level_color(level: CourseLevel) -> Color32 {
    match level {
        CourseLevel::Beginner => Color32::from_rgb(134, 239, 172),
        CourseLevel::Intermediate => Color32::from_rgb(253, 224, 71),
        CourseLevel::Advanced => Color32::from_rgb(252, 165, 165),
    }
}

fn courses_tab(app: &mut AcademyApp, ui: &mut egui::Ui) {
    ui.label(RichText::new("Eğitim Kursları").size(20.0).strong());
    ui.add_space(8.0);

    let cards: Vec<CourseCard> = app.course_cards();
    let mut start = None;

    for card in &cards {
        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::symmetric(12, 10))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&card.title).strong().size(16.0));
                    ui.colored_label(level_color(card.level), card.level.label());
                });
                ui.label(&card.description);
                ui.small(card.meta_line());
                ui.add(ProgressBar::new(card.progress as f32 / 100.0).text(format!("%{}", card.progress)));
                if ui
                    .add_enabled(card.enabled, egui::Button::new(card.button_label()))
                    .clicked()
                {
                    start = Some(card.id.clone());
                }
            });
        ui.add_space(6.0);
    }

    if let Some(id) = start {
        app.open_course(&id);
    }
}

fn progress_tab(app: &mut AcademyApp, ui: &mut egui::Ui) {
    let Some(dashboard) = &app.dashboard else {
        return;
    };
    ui.label(RichText::new("Öğrenme İlerlemen").size(20.0).strong());
    ui.label("Kurs tamamlama durumun ve genel ilerleme istatistiklerin");
    ui.add_space(10.0);

    ui.columns(2, |cols| {
        cols[0].vertical_centered(|ui| {
            ui.label(
                RichText::new(format!(
                    "{}/{}",
                    dashboard.completed_count(),
                    dashboard.total_courses()
                ))
                .size(24.0)
                .color(Color32::from_rgb(134, 239, 172)),
            );
            ui.label("Tamamlanan Kurs");
        });
        cols[1].vertical_centered(|ui| {
            ui.label(
                RichText::new(format!(
                    "{}/{}",
                    dashboard.earned_count(),
                    dashboard.achievements().len()
                ))
                .size(24.0)
                .color(Color32::from_rgb(253, 224, 71)),
            );
            ui.label("Kazanılan Başarım");
        });
    });

    ui.add_space(12.0);
    ui.label(RichText::new("Kurs İlerlemeleri").strong());
    egui::Grid::new("course_progress_grid")
        .num_columns(2)
        .striped(true)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            for course in dashboard.courses() {
                ui.label(&course.title);
                ui.add(
                    ProgressBar::new(course.progress as f32 / 100.0)
                        .desired_width(200.0)
                        .text(format!("%{}", course.progress)),
                );
                ui.end_row();
            }
        });
}

fn achievements_tab(app: &mut AcademyApp, ui: &mut egui::Ui) {
    let Some(dashboard) = &app.dashboard else {
        return;
    };
    ui.label(RichText::new("Başarımlar").size(20.0).strong());
    ui.label("Öğrenme yolculuğunda kazandığın rozetler ve başarımlar");
    ui.add_space(10.0);

    for achievement in dashboard.achievements() {
        let earned = dashboard.is_earned(achievement);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let icon = if earned { "🏆" } else { "🔒" };
                ui.label(RichText::new(icon).size(22.0));
                ui.vertical(|ui| {
                    ui.label(RichText::new(&achievement.title).strong());
                    ui.small(&achievement.description);
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if earned {
                        ui.colored_label(Color32::from_rgb(253, 224, 71), "✔ Kazanıldı");
                    } else {
                        ui.colored_label(Color32::GRAY, "Kilitli");
                    }
                });
            });
        });
        ui.add_space(6.0);
    }
}
