use crate::AcademyApp;
use crate::model::{GameKind, ModuleBody};
use crate::ui::views::{games, lesson};
use crate::view_models::{ModuleNavInfo, module_icon};
use egui::{Color32, Context, ProgressBar, RichText};

pub fn ui_course(app: &mut AcademyApp, ctx: &Context) {
    let Some(seq) = app.dashboard.as_ref().and_then(|d| d.current()) else {
        app.back_to_dashboard();
        return;
    };
    let Some(module) = seq.current_module().cloned() else {
        app.back_to_dashboard();
        return;
    };
    let title = seq.title().to_string();
    let index = seq.current_index();
    let total = seq.modules().len();
    let percent = seq.progress_percent();
    let completed = seq.is_completed(index);
    let is_last = seq.is_last();
    let infos: Vec<ModuleNavInfo> = app.module_nav_infos();

    egui::TopBottomPanel::top("course_header").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("⬅").on_hover_text("Kurslara dön").clicked() {
                app.back_to_dashboard();
            }
            ui.vertical(|ui| {
                ui.label(RichText::new(&title).strong().size(16.0));
                ui.small(format!("Modül {} / {}", index + 1, total));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⟲ Baştan Başla").clicked() {
                    app.restart_course();
                }
                ui.add(ProgressBar::new(percent as f32 / 100.0).desired_width(120.0));
                ui.label(format!("İlerleme %{percent}"));
            });
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(module_icon(module.kind())).size(22.0));
            ui.heading(&module.title);
            if completed {
                ui.colored_label(Color32::from_rgb(134, 239, 172), "✔ Tamamlandı");
            }
        });
        ui.add_space(6.0);

        let mut jump = None;
        egui::ScrollArea::horizontal()
            .id_salt("module_nav")
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    for info in &infos {
                        let button = egui::Button::new(info.label()).selected(info.current);
                        if ui.add(button).on_hover_text(info.hover_text()).clicked() {
                            jump = Some(info.idx);
                        }
                    }
                });
            });
        if let Some(idx) = jump {
            app.select_module(idx);
            return;
        }
        ui.separator();

        match &module.body {
            ModuleBody::Lesson { content } => {
                lesson::ui_lesson(app, ui, content, index == 0, is_last);
            }
            _ => {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| match module.game_kind() {
                        Some(GameKind::FillBlanks) => games::fill_blanks::ui_fill_blanks(app, ui),
                        Some(GameKind::DragDrop) => games::drag_drop::ui_drag_drop(app, ui),
                        Some(GameKind::Quiz) => games::quiz::ui_quiz(app, ui),
                        Some(GameKind::Matching) => games::matching::ui_matching(app, ui),
                        None => {
                            ui.label("Bu modül için oyun bulunamadı.");
                        }
                    });
            }
        }
    });
}
