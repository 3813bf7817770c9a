use super::game_controls;
use crate::AcademyApp;
use crate::games::ActiveGame;
use crate::ui::helpers::{score_block, tile, verdict};
use egui::{RichText, Ui};

pub fn ui_matching(app: &mut AcademyApp, ui: &mut Ui) {
    let mut finished = None;
    {
        let Some(ActiveGame::Matching(game)) = app.game.as_mut() else {
            return;
        };
        let checked = game.is_checked();

        ui.heading("Kavram Eşleştirme Oyunu");
        ui.label(
            "Sol taraftaki terimleri sağ taraftaki tanımlarla eşleştirin. Bir terim ve tanım \
             seçtikten sonra \"Eşleştir\" butonuna tıklayın.",
        );
        ui.add_space(8.0);

        let terms = game.terms().to_vec();
        let definitions: Vec<_> = game.definitions().into_iter().cloned().collect();
        let mut pick_term = None;
        let mut pick_definition = None;

        ui.columns(2, |cols| {
            cols[0].label(RichText::new("Terimler:").strong());
            for term in &terms {
                let matched = game.matched_definition(&term.id).is_some();
                let selected = game.selected_term() == Some(term.id.as_str());
                let width = cols[0].available_width();
                if tile(&mut cols[0], &term.term, width, selected, !matched && !checked) {
                    pick_term = Some(term.id.clone());
                }
            }

            cols[1].label(RichText::new("Tanımlar:").strong());
            for def in &definitions {
                let used = game.is_definition_used(&def.id);
                let selected = game.selected_definition() == Some(def.id.as_str());
                let width = cols[1].available_width();
                if tile(&mut cols[1], &def.definition, width, selected, !used && !checked) {
                    pick_definition = Some(def.id.clone());
                }
            }
        });

        if let Some(id) = pick_term {
            game.select_term(&id);
        }
        if let Some(id) = pick_definition {
            game.select_definition(&id);
        }

        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            if ui
                .add_enabled(game.can_match() && !checked, egui::Button::new("🔗 Eşleştir"))
                .clicked()
            {
                game.make_match();
            }
        });

        if game.match_count() > 0 {
            ui.add_space(8.0);
            ui.label(RichText::new("Eşleştirmeler:").strong());
            let mut unmatch = None;
            for term in &terms {
                let Some(def) = game.matched_definition(&term.id) else {
                    continue;
                };
                ui.horizontal_wrapped(|ui| {
                    ui.label(format!("{} ↔ {}", term.term, def.definition));
                    if checked {
                        verdict(ui, game.is_correct_match(&term.id));
                    } else if ui.small_button("✖").on_hover_text("Eşleştirmeyi kaldır").clicked() {
                        unmatch = Some(term.id.clone());
                    }
                });
            }
            if let Some(id) = unmatch {
                game.remove_match(&id);
            }
        }

        ui.label(format!("Eşleştirilen: {} / {}", game.match_count(), terms.len()));

        if let (Some(correct), Some(score)) = (game.correct_count(), game.finish()) {
            ui.add_space(6.0);
            ui.label(RichText::new("Sonuçlar:").strong());
            score_block(
                ui,
                score,
                &format!("Doğru eşleştirme: {correct} / {}", terms.len()),
            );
        }

        let (reset, check, done) = game_controls(ui, checked, game.match_count() > 0, "Tamamla");
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
