use super::{GameStep, percent};
use crate::model::BlankQuestion;

/// Multi-question fill-in-the-blanks game. A question counts only when every
/// one of its blanks is right.
#[derive(Clone, Debug)]
pub struct FillBlanksGame {
    questions: Vec<BlankQuestion>,
    current: usize,
    answers: Vec<String>,
    hints_shown: Vec<bool>,
    // None until the question is checked
    results: Vec<Option<bool>>,
}

/// Lowercased characters; `None` stands for a capital `I`, which is `ı` in
/// Turkish and `i` elsewhere.
fn fold_tr(text: &str) -> Vec<Option<char>> {
    text.trim()
        .chars()
        .flat_map(|c| match c {
            'I' => vec![None],
            'İ' => vec![Some('i')],
            c => c.to_lowercase().map(Some).collect(),
        })
        .collect()
}

fn same_letter(a: Option<char>, b: Option<char>) -> bool {
    match (a, b) {
        (None, Some(c)) | (Some(c), None) => c == 'i' || c == 'ı',
        _ => a == b,
    }
}

/// Case-insensitive after trimming, with Turkish dotted/dotless I.
pub fn blank_matches(answer: &str, expected: &str) -> bool {
    let (answer, expected) = (fold_tr(answer), fold_tr(expected));
    answer.len() == expected.len()
        && answer.iter().zip(&expected).all(|(a, e)| same_letter(*a, *e))
}

impl FillBlanksGame {
    pub fn new(questions: Vec<BlankQuestion>) -> Self {
        let results = vec![None; questions.len()];
        let mut game = Self {
            questions,
            current: 0,
            answers: Vec::new(),
            hints_shown: Vec::new(),
            results,
        };
        game.clear_inputs();
        game
    }

    fn clear_inputs(&mut self) {
        let blanks = self.current_question().map(|q| q.blanks.len()).unwrap_or(0);
        self.answers = vec![String::new(); blanks];
        self.hints_shown = vec![false; blanks];
    }

    pub fn current_question(&self) -> Option<&BlankQuestion> {
        self.questions.get(self.current)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn answer_mut(&mut self, blank: usize) -> Option<&mut String> {
        if self.is_checked() {
            return None;
        }
        self.answers.get_mut(blank)
    }

    pub fn set_answer(&mut self, blank: usize, value: &str) {
        if let Some(slot) = self.answer_mut(blank) {
            *slot = value.to_string();
        }
    }

    pub fn toggle_hint(&mut self, blank: usize) {
        if let Some(shown) = self.hints_shown.get_mut(blank) {
            *shown = !*shown;
        }
    }

    pub fn is_hint_shown(&self, blank: usize) -> bool {
        self.hints_shown.get(blank).copied().unwrap_or(false)
    }

    pub fn is_checked(&self) -> bool {
        matches!(self.results.get(self.current), Some(Some(_)))
    }

    /// Per-blank correctness of the current answers.
    pub fn blank_results(&self) -> Vec<bool> {
        match self.current_question() {
            Some(q) => q
                .blanks
                .iter()
                .zip(&self.answers)
                .map(|(blank, answer)| blank_matches(answer, &blank.answer))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Grades the current question, returns whether all of its blanks are
    /// correct. Checking twice does not count the question twice.
    pub fn check(&mut self) -> bool {
        if let Some(Some(result)) = self.results.get(self.current) {
            return *result;
        }
        let passed = match self.current_question() {
            Some(q) => {
                q.blanks.len() == self.answers.len()
                    && self.blank_results().iter().all(|ok| *ok)
            }
            None => return false,
        };
        self.results[self.current] = Some(passed);
        passed
    }

    pub fn correct_questions(&self) -> usize {
        self.results.iter().filter(|r| **r == Some(true)).count()
    }

    pub fn score(&self) -> u8 {
        percent(self.correct_questions(), self.questions.len())
    }

    /// Moves past a checked question. The score is only reported once the
    /// last question has been checked.
    pub fn next_question(&mut self) -> Option<GameStep> {
        if !self.is_checked() {
            return None;
        }
        if self.is_last_question() {
            return Some(GameStep::Finished(self.score()));
        }
        self.current += 1;
        self.clear_inputs();
        Some(GameStep::NextQuestion)
    }

    /// Clears the current question so it can be answered again.
    pub fn reset(&mut self) {
        if let Some(slot) = self.results.get_mut(self.current) {
            *slot = None;
        }
        self.clear_inputs();
    }
}
