use super::game_controls;
use crate::AcademyApp;
use crate::games::{ActiveGame, GameStep};
use crate::ui::helpers::verdict;
use egui::{RichText, TextEdit, Ui};

pub fn ui_fill_blanks(app: &mut AcademyApp, ui: &mut Ui) {
    let mut finished = None;
    {
        let Some(ActiveGame::FillBlanks(game)) = app.game.as_mut() else {
            return;
        };
        let Some(question) = game.current_question().cloned() else {
            return;
        };

        ui.heading("Boşluk Doldurma Oyunu");
        ui.label(format!(
            "Soru {} / {}",
            game.current_index() + 1,
            game.total_questions()
        ));
        ui.add_space(10.0);

        let checked = game.is_checked();
        let results = game.blank_results();
        let segments = question.segments();

        ui.horizontal_wrapped(|ui| {
            for (i, segment) in segments.iter().enumerate() {
                ui.label(RichText::new(*segment).size(16.0));
                if i >= question.blanks.len() {
                    continue;
                }
                match game.answer_mut(i) {
                    Some(answer) => {
                        ui.add(TextEdit::singleline(answer).desired_width(110.0));
                    }
                    None => {
                        let text = game.answers().get(i).cloned().unwrap_or_default();
                        ui.add_enabled(false, TextEdit::singleline(&mut text.as_str()).desired_width(110.0));
                    }
                }
                if checked {
                    verdict(ui, results.get(i).copied().unwrap_or(false));
                }
            }
        });

        ui.add_space(10.0);
        if question.blanks.iter().any(|b| b.hint.is_some()) {
            ui.label(RichText::new("💡 İpuçları:").strong());
            for (i, blank) in question.blanks.iter().enumerate() {
                let Some(hint) = &blank.hint else {
                    continue;
                };
                ui.horizontal(|ui| {
                    if ui.small_button(format!("Boşluk {}", i + 1)).clicked() {
                        game.toggle_hint(i);
                    }
                    if game.is_hint_shown(i) {
                        ui.label(hint);
                    }
                });
            }
        }

        if checked && !results.iter().all(|ok| *ok) {
            ui.add_space(8.0);
            ui.label(RichText::new("Doğru Cevaplar:").strong());
            let answers: Vec<&str> = question.blanks.iter().map(|b| b.answer.as_str()).collect();
            ui.label(answers.join(", "));
        }
        if checked {
            ui.add_space(6.0);
            ui.label(format!(
                "Skor: {} / {}",
                game.correct_questions(),
                game.total_questions()
            ));
        }

        let forward = if game.is_last_question() { "Tamamla" } else { "Sonraki Soru" };
        let (reset, check, next) = game_controls(ui, checked, true, forward);
        if reset {
            game.reset();
        }
        if check {
            game.check();
        }
        if next {
            if let Some(GameStep::Finished(score)) = game.next_question() {
                finished = Some(score);
            }
        }
    }

    if let Some(score) = finished {
        app.finish_game(score);
    }
}
