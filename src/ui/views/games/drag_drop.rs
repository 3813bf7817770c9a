use super::game_controls;
use crate::AcademyApp;
use crate::games::ActiveGame;
use crate::ui::helpers::{score_block, verdict};
use egui::{Frame, Id, RichText, Ui};

pub fn ui_drag_drop(app: &mut AcademyApp, ui: &mut Ui) {
    let mut finished = None;
    {
        let Some(ActiveGame::DragDrop(game)) = app.game.as_mut() else {
            return;
        };
        let checked = game.is_checked();

        ui.heading("Sürükle ve Bırak Oyunu");
        ui.label("Kavramları doğru kategorilere sürükleyin.");
        ui.add_space(8.0);

        // Pool
        ui.label(RichText::new("Kavramlar:").strong());
        let mut dropped: Option<(String, String)> = None;
        let mut removed: Option<String> = None;

        ui.horizontal_wrapped(|ui| {
            for item in game.available_items() {
                if checked {
                    ui.label(&item.text);
                } else {
                    ui.dnd_drag_source(Id::new(("drag_item", &item.id)), item.id.clone(), |ui| {
                        ui.label(RichText::new(&item.text).background_color(ui.visuals().faint_bg_color));
                    });
                }
            }
        });
        ui.add_space(10.0);

        // Zones, two per row
        let zones = game.zones().to_vec();
        for row in zones.chunks(2) {
            ui.columns(2, |cols| {
                for (col, zone) in cols.iter_mut().zip(row) {
                    let (_, payload) = col.dnd_drop_zone::<String, ()>(Frame::group(col.style()), |ui| {
                        ui.set_min_height(90.0);
                        ui.set_width(ui.available_width());
                        ui.label(RichText::new(&zone.title).strong());
                        ui.small(&zone.description);
                        ui.add_space(4.0);
                        for item in game.items_in_zone(&zone.id) {
                            ui.horizontal(|ui| {
                                ui.label(&item.text);
                                if checked {
                                    verdict(ui, game.is_correct_placement(&zone.id, &item.id));
                                } else if ui.small_button("✖").on_hover_text("Geri al").clicked() {
                                    removed = Some(item.id.clone());
                                }
                            });
                        }
                    });
                    if let Some(item_id) = payload {
                        dropped = Some((item_id.as_ref().clone(), zone.id.clone()));
                    }
                }
            });
            ui.add_space(6.0);
        }

        if let Some((item_id, zone_id)) = dropped {
            game.place(&item_id, &zone_id);
        }
        if let Some(item_id) = removed {
            game.remove(&item_id);
        }

        ui.label(format!(
            "Yerleştirilen: {} / {}",
            game.items().len() - game.available_items().len(),
            game.items().len()
        ));

        if let Some(score) = game.score() {
            ui.add_space(6.0);
            ui.label(RichText::new("Sonuçlar:").strong());
            score_block(ui, score, "Doğruluk oranı");
        }

        let (reset, check, done) = game_controls(ui, checked, true, "Tamamla");
        if reset {
            game.reset();
        }
        if check {
            game.check();
        }
        if done {
            finished = game.finish();
        }
    }

    if let Some(score) = finished {
        app.finish_game(score);
    }
}
