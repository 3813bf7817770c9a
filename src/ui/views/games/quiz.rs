use super::game_controls;
use crate::AcademyApp;
use crate::games::{ActiveGame, GameStep};
use crate::ui::helpers::verdict;
use crate::ui::layout::two_button_row;
use egui::{RichText, Ui};

pub fn ui_quiz(app: &mut AcademyApp, ui: &mut Ui) {
    let mut finished = None;
    {
        let Some(ActiveGame::Quiz(game)) = app.game.as_mut() else {
            return;
        };
        let Some(question) = game.current_question().cloned() else {
            return;
        };
        let revealed = game.is_revealed();

        ui.heading("Stellar Bilgi Testi");
        ui.label(format!(
            "Soru {} / {}",
            game.current_index() + 1,
            game.total_questions()
        ));
        ui.add_space(8.0);
        ui.label(RichText::new(&question.question).size(16.0).strong());
        ui.add_space(8.0);

        for (i, option) in question.options.iter().enumerate() {
            ui.horizontal(|ui| {
                let selected = game.selected() == Some(i);
                if ui
                    .add_enabled(!revealed, egui::RadioButton::new(selected, option))
                    .clicked()
                {
                    game.select(i);
                }
                if revealed && (i == question.correct_answer || selected) {
                    verdict(ui, i == question.correct_answer);
                }
            });
        }

        if revealed {
            ui.add_space(8.0);
            ui.label(RichText::new("Açıklama:").strong());
            ui.label(&question.explanation);
            ui.add_space(6.0);
            ui.label(format!(
                "Skor: {} / {}",
                game.correct_answers(),
                game.total_questions()
            ));
        }

        ui.add_space(12.0);
        let width = ui.available_width().min(420.0);
        let forward = if game.is_last_question() { "Tamamla" } else { "Sonraki Soru" };
        if revealed {
            let (_, _, next) = game_controls(ui, true, true, forward);
            if next {
                if let Some(GameStep::Finished(score)) = game.next_question() {
                    finished = Some(score);
                }
            }
        } else {
            let (reset, submit) = two_button_row(
                ui,
                width,
                ("⟲ Sıfırla", true),
                ("Cevapla", game.selected().is_some()),
            );
            if reset {
                game.reset();
            }
            if submit {
                game.submit();
            }
        }
    }

    if let Some(score) = finished {
        app.finish_game(score);
    }
}
