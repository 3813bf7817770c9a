use super::{GameStep, percent};
use crate::model::QuizQuestion;

#[derive(Clone, Debug)]
pub struct QuizGame {
    questions: Vec<QuizQuestion>,
    current: usize,
    selected: Option<usize>,
    answered: Vec<Option<bool>>,
}

impl QuizGame {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        let answered = vec![None; questions.len()];
        Self {
            questions,
            current: 0,
            selected: None,
            answered,
        }
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
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

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Whether the current answer has been submitted and the explanation is due.
    pub fn is_revealed(&self) -> bool {
        matches!(self.answered.get(self.current), Some(Some(_)))
    }

    pub fn select(&mut self, option: usize) {
        if self.is_revealed() {
            return;
        }
        if let Some(q) = self.current_question() {
            if option < q.options.len() {
                self.selected = Some(option);
            }
        }
    }

    /// Submits the selected option; `None` when nothing is selected yet.
    pub fn submit(&mut self) -> Option<bool> {
        if let Some(Some(result)) = self.answered.get(self.current) {
            return Some(*result);
        }
        let selected = self.selected?;
        let correct = self.current_question()?.correct_answer == selected;
        self.answered[self.current] = Some(correct);
        Some(correct)
    }

    pub fn correct_answers(&self) -> usize {
        self.answered.iter().filter(|a| **a == Some(true)).count()
    }

    pub fn score(&self) -> u8 {
        percent(self.correct_answers(), self.questions.len())
    }

    pub fn next_question(&mut self) -> Option<GameStep> {
        if !self.is_revealed() {
            return None;
        }
        if self.is_last_question() {
            return Some(GameStep::Finished(self.score()));
        }
        self.current += 1;
        self.selected = None;
        Some(GameStep::NextQuestion)
    }

    /// Starts the quiz over from the first question.
    pub fn reset(&mut self) {
        self.current = 0;
        self.selected = None;
        self.answered = vec![None; self.questions.len()];
    }
}
