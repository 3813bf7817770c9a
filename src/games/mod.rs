//! The four scored mini-games.
//!
//! Every game follows the same shape: learner input is collected
//! incrementally, an explicit check freezes it and computes the share of
//! correct items, and a finish step hands the rounded percentage to the
//! course sequencer.

pub mod drag_drop;
pub mod fill_blanks;
pub mod matching;
pub mod quiz;

pub use drag_drop::DragDropGame;
pub use fill_blanks::FillBlanksGame;
pub use matching::MatchingGame;
pub use quiz::QuizGame;

use crate::model::{Module, ModuleBody};

/// `correct / total * 100`, rounded half up. An empty game scores 0.
pub fn percent(correct: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let correct = correct.min(total);
    ((correct * 200 + total) / (total * 2)) as u8
}

/// Outcome of moving past a checked question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStep {
    NextQuestion,
    Finished(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreTier {
    Good,
    Fair,
    Poor,
}

impl ScoreTier {
    pub fn for_percent(percent: u8) -> Self {
        if percent >= 80 {
            ScoreTier::Good
        } else if percent >= 60 {
            ScoreTier::Fair
        } else {
            ScoreTier::Poor
        }
    }
}

/// Live state of the game shown by the current module.
#[derive(Clone, Debug)]
pub enum ActiveGame {
    FillBlanks(FillBlanksGame),
    DragDrop(DragDropGame),
    Quiz(QuizGame),
    Matching(MatchingGame),
}

impl ActiveGame {
    /// Fresh game for a module; lessons have none.
    pub fn for_module(module: &Module) -> Option<Self> {
        match &module.body {
            ModuleBody::Lesson { .. } => None,
            ModuleBody::FillBlanks { questions } => {
                Some(ActiveGame::FillBlanks(FillBlanksGame::new(questions.clone())))
            }
            ModuleBody::DragDrop { items, zones } => Some(ActiveGame::DragDrop(DragDropGame::new(
                items.clone(),
                zones.clone(),
            ))),
            ModuleBody::Quiz { questions } => {
                Some(ActiveGame::Quiz(QuizGame::new(questions.clone())))
            }
            ModuleBody::Matching { pairs } => Some(ActiveGame::Matching(MatchingGame::shuffled(
                pairs.clone(),
                &mut rand::thread_rng(),
            ))),
        }
    }

    pub fn reset(&mut self) {
        match self {
            ActiveGame::FillBlanks(g) => g.reset(),
            ActiveGame::DragDrop(g) => g.reset(),
            ActiveGame::Quiz(g) => g.reset(),
            ActiveGame::Matching(g) => g.reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent(4, 6), 67);
        assert_eq!(percent(1, 8), 13); // 12.5
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(3, 4), 75);
        assert_eq!(percent(5, 5), 100);
        assert_eq!(percent(0, 5), 0);
    }

    #[test]
    fn percent_of_empty_game_is_zero() {
        assert_eq!(percent(0, 0), 0);
    }

    #[test]
    fn tiers_follow_thresholds() {
        assert_eq!(ScoreTier::for_percent(80), ScoreTier::Good);
        assert_eq!(ScoreTier::for_percent(79), ScoreTier::Fair);
        assert_eq!(ScoreTier::for_percent(60), ScoreTier::Fair);
        assert_eq!(ScoreTier::for_percent(59), ScoreTier::Poor);
    }
}
