use super::percent;
use crate::model::MatchPair;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::BTreeMap;

/// Term to definition matching. A match is right when a term is paired with
/// its own definition.
#[derive(Clone, Debug)]
pub struct MatchingGame {
    pairs: Vec<MatchPair>,
    definition_order: Vec<usize>,
    selected_term: Option<String>,
    selected_definition: Option<String>,
    matches: BTreeMap<String, String>, // term id -> definition id
    correct: Option<usize>,
}

impl MatchingGame {
    pub fn new(pairs: Vec<MatchPair>) -> Self {
        let definition_order = (0..pairs.len()).collect();
        Self {
            pairs,
            definition_order,
            selected_term: None,
            selected_definition: None,
            matches: BTreeMap::new(),
            correct: None,
        }
    }

    /// Same game with the definition column shuffled once.
    pub fn shuffled<R: Rng + ?Sized>(pairs: Vec<MatchPair>, rng: &mut R) -> Self {
        let mut game = Self::new(pairs);
        game.definition_order.shuffle(rng);
        game
    }

    pub fn terms(&self) -> &[MatchPair] {
        &self.pairs
    }

    /// Definitions in display order.
    pub fn definitions(&self) -> Vec<&MatchPair> {
        self.definition_order
            .iter()
            .filter_map(|i| self.pairs.get(*i))
            .collect()
    }

    pub fn is_checked(&self) -> bool {
        self.correct.is_some()
    }

    pub fn selected_term(&self) -> Option<&str> {
        self.selected_term.as_deref()
    }

    pub fn selected_definition(&self) -> Option<&str> {
        self.selected_definition.as_deref()
    }

    pub fn matched_definition(&self, term_id: &str) -> Option<&MatchPair> {
        let def = self.matches.get(term_id)?;
        self.pairs.iter().find(|p| &p.id == def)
    }

    pub fn is_definition_used(&self, definition_id: &str) -> bool {
        self.matches.values().any(|d| d == definition_id)
    }

    pub fn is_correct_match(&self, term_id: &str) -> bool {
        self.matches.get(term_id).map(String::as_str) == Some(term_id)
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Toggles the term selection; matched terms cannot be picked.
    pub fn select_term(&mut self, term_id: &str) {
        if self.is_checked() || self.matches.contains_key(term_id) {
            return;
        }
        if self.selected_term.as_deref() == Some(term_id) {
            self.selected_term = None;
        } else {
            self.selected_term = Some(term_id.to_string());
        }
    }

    pub fn select_definition(&mut self, definition_id: &str) {
        if self.is_checked() || self.is_definition_used(definition_id) {
            return;
        }
        if self.selected_definition.as_deref() == Some(definition_id) {
            self.selected_definition = None;
        } else {
            self.selected_definition = Some(definition_id.to_string());
        }
    }

    pub fn can_match(&self) -> bool {
        self.selected_term.is_some() && self.selected_definition.is_some()
    }

    /// Pairs the selected term with the selected definition.
    pub fn make_match(&mut self) -> bool {
        if self.is_checked() {
            return false;
        }
        match (self.selected_term.take(), self.selected_definition.take()) {
            (Some(term), Some(def)) => {
                self.matches.insert(term, def);
                true
            }
            (term, def) => {
                self.selected_term = term;
                self.selected_definition = def;
                false
            }
        }
    }

    pub fn remove_match(&mut self, term_id: &str) {
        if !self.is_checked() {
            self.matches.remove(term_id);
        }
    }

    /// Grades the matches and returns the raw number of correct ones.
    pub fn check(&mut self) -> usize {
        let correct = self
            .matches
            .iter()
            .filter(|(term, def)| term == def)
            .count();
        self.correct = Some(correct);
        correct
    }

    pub fn correct_count(&self) -> Option<usize> {
        self.correct
    }

    /// Percentage handed to the sequencer.
    pub fn finish(&self) -> Option<u8> {
        self.correct.map(|c| percent(c, self.pairs.len()))
    }

    pub fn reset(&mut self) {
        self.matches.clear();
        self.selected_term = None;
        self.selected_definition = None;
        self.correct = None;
    }
}
