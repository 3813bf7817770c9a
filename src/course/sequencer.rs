use super::gate::CompletionOutcome;
use crate::games::percent;
use crate::model::{CourseContent, Module};
use std::collections::HashMap;

/// Position and completion state of one course attempt. Never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseProgress {
    pub completed_ids: Vec<String>, // insertion order, no duplicates
    pub current_index: usize,
    pub final_success_rate: Option<u8>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    Moved(usize),
    Finished(CompletionOutcome),
}

/// Walks the modules of a course in order and aggregates game scores.
#[derive(Clone, Debug)]
pub struct CourseSequencer {
    course_id: String,
    title: String,
    modules: Vec<Module>,
    progress: CourseProgress,
    game_scores: HashMap<String, u8>,
}

impl CourseSequencer {
    pub fn new(content: CourseContent) -> Self {
        Self {
            course_id: content.course_id,
            title: content.title,
            modules: content.modules,
            progress: CourseProgress::default(),
            game_scores: HashMap::new(),
        }
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn progress(&self) -> &CourseProgress {
        &self.progress
    }

    pub fn current_index(&self) -> usize {
        self.progress.current_index
    }

    pub fn current_module(&self) -> Option<&Module> {
        self.modules.get(self.progress.current_index)
    }

    pub fn is_last(&self) -> bool {
        self.progress.current_index + 1 >= self.modules.len()
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.modules
            .get(index)
            .map(|m| self.progress.completed_ids.contains(&m.id))
            .unwrap_or(false)
    }

    pub fn game_score(&self, module_id: &str) -> Option<u8> {
        self.game_scores.get(module_id).copied()
    }

    /// Share of completed modules, rounded.
    pub fn progress_percent(&self) -> u8 {
        percent(self.progress.completed_ids.len(), self.modules.len())
    }

    /// Completes the current module and moves on. A score is kept only for
    /// game modules; the last module closes the attempt instead of moving.
    pub fn advance(&mut self, score: Option<u8>) -> Option<Advance> {
        let module = self.modules.get(self.progress.current_index)?;
        let id = module.id.clone();

        if let (true, Some(score)) = (module.is_game(), score) {
            self.game_scores.insert(id.clone(), score.min(100));
        }

        if !self.progress.completed_ids.contains(&id) {
            self.progress.completed_ids.push(id);
        }

        if self.is_last() {
            let rate = self.compute_final_score();
            self.progress.final_success_rate = Some(rate);
            log::info!(
                "course {} finished with success rate {}%",
                self.course_id,
                rate
            );
            Some(Advance::Finished(CompletionOutcome::evaluate(rate)))
        } else {
            self.progress.current_index += 1;
            Some(Advance::Moved(self.progress.current_index))
        }
    }

    /// Jumps to any module, completed or not. Out of range is ignored.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.modules.len() {
            self.progress.current_index = index;
        }
    }

    pub fn previous(&mut self) {
        if self.progress.current_index > 0 {
            self.progress.current_index -= 1;
        }
    }

    pub fn next(&mut self) {
        if !self.is_last() {
            self.progress.current_index += 1;
        }
    }

    /// Rounded mean of the recorded game scores. A course without games
    /// rates 100; games that were never scored rate 0.
    pub fn compute_final_score(&self) -> u8 {
        let games: Vec<&Module> = self.modules.iter().filter(|m| m.is_game()).collect();
        if games.is_empty() {
            return 100;
        }
        let scores: Vec<u32> = games
            .iter()
            .filter_map(|m| self.game_scores.get(&m.id))
            .map(|s| u32::from(*s))
            .collect();
        if scores.is_empty() {
            return 0;
        }
        let k = scores.len() as u32;
        let sum: u32 = scores.iter().sum();
        ((sum * 2 + k) / (k * 2)) as u8
    }

    pub fn final_success_rate(&self) -> Option<u8> {
        self.progress.final_success_rate
    }

    /// Throws the attempt away and starts again from the first module.
    pub fn restart(&mut self) {
        self.progress = CourseProgress::default();
        self.game_scores.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ModuleBody, QuizQuestion};

    fn lesson(id: &str) -> Module {
        Module {
            id: id.to_string(),
            title: id.to_string(),
            body: ModuleBody::Lesson {
                content: String::new(),
            },
        }
    }

    fn game(id: &str) -> Module {
        Module {
            id: id.to_string(),
            title: id.to_string(),
            body: ModuleBody::Quiz {
                questions: Vec::<QuizQuestion>::new(),
            },
        }
    }

    fn course(modules: Vec<Module>) -> CourseSequencer {
        CourseSequencer::new(CourseContent {
            course_id: "test".into(),
            title: "Test".into(),
            modules,
        })
    }

    #[test]
    fn advance_moves_and_completes() {
        let mut seq = course(vec![lesson("a"), game("b"), lesson("c")]);
        assert_eq!(seq.advance(None), Some(Advance::Moved(1)));
        assert!(seq.is_completed(0));
        assert!(!seq.is_completed(1));
        assert_eq!(seq.advance(Some(90)), Some(Advance::Moved(2)));
        assert_eq!(seq.game_score("b"), Some(90));
        assert_eq!(seq.progress_percent(), 67);
    }

    #[test]
    fn recompleting_does_not_duplicate() {
        let mut seq = course(vec![lesson("a"), lesson("b")]);
        seq.advance(None);
        seq.jump_to(0);
        seq.advance(None);
        assert_eq!(seq.progress().completed_ids, vec!["a".to_string()]);
    }

    #[test]
    fn lesson_scores_are_ignored_and_game_scores_overwrite() {
        let mut seq = course(vec![lesson("a"), game("b"), game("c")]);
        seq.advance(Some(10));
        assert_eq!(seq.game_score("a"), None);
        seq.advance(Some(40));
        seq.jump_to(1);
        seq.advance(Some(100));
        assert_eq!(seq.game_score("b"), Some(100));
    }

    #[test]
    fn final_score_is_rounded_mean() {
        let mut seq = course(vec![game("a"), game("b"), game("c")]);
        seq.advance(Some(100));
        seq.advance(Some(75));
        let outcome = seq.advance(Some(50));
        // 225 / 3 = 75
        assert_eq!(
            outcome,
            Some(Advance::Finished(CompletionOutcome::evaluate(75)))
        );
        assert_eq!(seq.final_success_rate(), Some(75));

        let mut seq = course(vec![game("a"), game("b")]);
        seq.advance(Some(80));
        seq.advance(Some(79));
        // 79.5 rounds up
        assert_eq!(seq.compute_final_score(), 80);
    }

    fn finish(seq: &mut CourseSequencer, last_score: u8) -> CompletionOutcome {
        seq.jump_to(seq.modules().len() - 1);
        match seq.advance(Some(last_score)) {
            Some(Advance::Finished(outcome)) => outcome,
            other => panic!("expected completion, got {other:?}"),
        }
    }

    #[test]
    fn raising_a_game_score_never_turns_pass_into_fail() {
        for first in (0..=100u8).step_by(5) {
            for last in (0..=100u8).step_by(5) {
                let mut seq = course(vec![game("a"), lesson("b"), game("c")]);
                seq.advance(Some(first));
                seq.advance(None);
                let mut passed = finish(&mut seq, last).passed;

                for higher in (first..=100).step_by(5) {
                    seq.jump_to(0);
                    assert_eq!(seq.advance(Some(higher)), Some(Advance::Moved(1)));
                    let now = finish(&mut seq, last).passed;
                    assert!(now || !passed, "{first}->{higher} with {last} dropped to fail");
                    passed = now;
                }
            }
        }

        let mut seq = course(vec![game("a"), lesson("b"), game("c")]);
        seq.advance(Some(60));
        seq.advance(None);
        assert!(finish(&mut seq, 100).passed);
        seq.jump_to(0);
        seq.advance(Some(90));
        assert!(finish(&mut seq, 100).passed);
    }

    #[test]
    fn unscored_games_are_left_out_of_the_mean() {
        let mut seq = course(vec![game("a"), game("b")]);
        seq.jump_to(1);
        assert_eq!(seq.advance(Some(90)), Some(Advance::Finished(CompletionOutcome::evaluate(90))));
    }

    #[test]
    fn no_games_rates_100_and_unscored_games_rate_0() {
        let mut seq = course(vec![lesson("a"), lesson("b")]);
        seq.advance(None);
        match seq.advance(None) {
            Some(Advance::Finished(outcome)) => {
                assert_eq!(outcome.success_rate, 100);
                assert!(outcome.passed);
            }
            other => panic!("unexpected {other:?}"),
        }

        let mut seq = course(vec![lesson("a"), game("b")]);
        seq.advance(None);
        assert_eq!(
            seq.advance(None),
            Some(Advance::Finished(CompletionOutcome::evaluate(0)))
        );
    }

    #[test]
    fn gate_at_79_and_80() {
        let mut seq = course(vec![game("only")]);
        match seq.advance(Some(79)) {
            Some(Advance::Finished(outcome)) => assert!(!outcome.passed),
            other => panic!("unexpected {other:?}"),
        }
        match seq.advance(Some(80)) {
            Some(Advance::Finished(outcome)) => assert!(outcome.passed),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn jump_to_out_of_range_is_ignored() {
        let mut seq = course(vec![lesson("a"), lesson("b"), lesson("c")]);
        seq.jump_to(2);
        assert_eq!(seq.current_index(), 2);
        seq.jump_to(3);
        assert_eq!(seq.current_index(), 2);
        seq.next();
        assert_eq!(seq.current_index(), 2);
        seq.jump_to(0);
        seq.previous();
        assert_eq!(seq.current_index(), 0);
    }

    #[test]
    fn empty_course_never_advances() {
        let mut seq = course(Vec::new());
        assert_eq!(seq.advance(Some(50)), None);
        assert_eq!(seq.compute_final_score(), 100);
    }

    #[test]
    fn scores_above_100_are_clamped() {
        let mut seq = course(vec![game("a")]);
        seq.advance(Some(250));
        assert_eq!(seq.game_score("a"), Some(100));
        assert_eq!(seq.final_success_rate(), Some(100));
    }

    #[test]
    fn restart_discards_attempt() {
        let mut seq = course(vec![game("a"), lesson("b")]);
        seq.advance(Some(30));
        seq.restart();
        assert_eq!(seq.current_index(), 0);
        assert!(seq.progress().completed_ids.is_empty());
        assert_eq!(seq.game_score("a"), None);
    }
}
