use super::percent;
use crate::model::{DragItem, DropZone};
use std::collections::BTreeMap;

/// Single-round categorization game: every item goes to at most one zone.
#[derive(Clone, Debug)]
pub struct DragDropGame {
    items: Vec<DragItem>,
    zones: Vec<DropZone>,
    placements: BTreeMap<String, String>, // item -> zone
    score: Option<u8>,
}

impl DragDropGame {
    pub fn new(items: Vec<DragItem>, zones: Vec<DropZone>) -> Self {
        Self {
            items,
            zones,
            placements: BTreeMap::new(),
            score: None,
        }
    }

    pub fn items(&self) -> &[DragItem] {
        &self.items
    }

    pub fn zones(&self) -> &[DropZone] {
        &self.zones
    }

    pub fn is_checked(&self) -> bool {
        self.score.is_some()
    }

    /// Items still waiting in the pool.
    pub fn available_items(&self) -> Vec<&DragItem> {
        self.items
            .iter()
            .filter(|item| !self.placements.contains_key(&item.id))
            .collect()
    }

    pub fn items_in_zone(&self, zone_id: &str) -> Vec<&DragItem> {
        self.items
            .iter()
            .filter(|item| self.placements.get(&item.id).map(String::as_str) == Some(zone_id))
            .collect()
    }

    pub fn zone_of(&self, item_id: &str) -> Option<&str> {
        self.placements.get(item_id).map(String::as_str)
    }

    /// Drops an item into a zone, moving it if it was placed elsewhere.
    /// Unknown ids and input after the check are ignored.
    pub fn place(&mut self, item_id: &str, zone_id: &str) {
        if self.is_checked() {
            return;
        }
        let known_item = self.items.iter().any(|i| i.id == item_id);
        let known_zone = self.zones.iter().any(|z| z.id == zone_id);
        if known_item && known_zone {
            self.placements
                .insert(item_id.to_string(), zone_id.to_string());
        }
    }

    /// Sends a placed item back to the pool.
    pub fn remove(&mut self, item_id: &str) {
        if !self.is_checked() {
            self.placements.remove(item_id);
        }
    }

    pub fn is_correct_placement(&self, zone_id: &str, item_id: &str) -> bool {
        self.items
            .iter()
            .any(|item| item.id == item_id && item.category == zone_id)
    }

    pub fn correct_count(&self) -> usize {
        self.placements
            .iter()
            .filter(|(item, zone)| self.is_correct_placement(zone, item))
            .count()
    }

    /// Scores against every defined item, placed or not.
    pub fn check(&mut self) -> u8 {
        let score = percent(self.correct_count(), self.items.len());
        self.score = Some(score);
        score
    }

    pub fn score(&self) -> Option<u8> {
        self.score
    }

    /// Score to report, once checked.
    pub fn finish(&self) -> Option<u8> {
        self.score
    }

    pub fn reset(&mut self) {
        self.placements.clear();
        self.score = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZONES: [&str; 4] = ["accounts", "assets", "operations", "network"];

    fn game() -> DragDropGame {
        let mut items = Vec::new();
        for zone in ZONES {
            for n in 0..3 {
                items.push(DragItem {
                    id: format!("{zone}-{n}"),
                    text: format!("{zone} {n}"),
                    category: zone.to_string(),
                });
            }
        }
        let zones = ZONES
            .iter()
            .map(|z| DropZone {
                id: z.to_string(),
                title: z.to_string(),
                description: String::new(),
            })
            .collect();
        DragDropGame::new(items, zones)
    }

    fn wrong_zone(zone: &str) -> &'static str {
        let idx = ZONES.iter().position(|z| *z == zone).unwrap();
        ZONES[(idx + 1) % ZONES.len()]
    }

    #[test]
    fn all_correct_scores_100() {
        let mut g = game();
        let ids: Vec<(String, String)> =
            g.items().iter().map(|i| (i.id.clone(), i.category.clone())).collect();
        for (id, zone) in &ids {
            g.place(id, zone);
        }
        assert_eq!(g.check(), 100);
        assert_eq!(g.finish(), Some(100));
    }

    #[test]
    fn half_wrong_scores_50() {
        let mut g = game();
        let ids: Vec<(String, String)> =
            g.items().iter().map(|i| (i.id.clone(), i.category.clone())).collect();
        for (n, (id, zone)) in ids.iter().enumerate() {
            if n % 2 == 0 {
                g.place(id, zone);
            } else {
                g.place(id, wrong_zone(zone));
            }
        }
        assert_eq!(g.check(), 50);
    }

    #[test]
    fn unplaced_items_still_count_in_denominator() {
        let mut g = game();
        g.place("accounts-0", "accounts");
        g.place("accounts-1", "accounts");
        g.place("assets-0", "assets");
        // 3 of 12
        assert_eq!(g.check(), 25);
        assert_eq!(g.available_items().len(), 9);
    }

    #[test]
    fn placing_again_moves_the_item() {
        let mut g = game();
        g.place("ledger-x", "network");
        g.place("network-0", "assets");
        g.place("network-0", "network");
        assert_eq!(g.zone_of("network-0"), Some("network"));
        assert!(g.items_in_zone("assets").is_empty());
        assert_eq!(g.items_in_zone("network").len(), 1);
        assert_eq!(g.zone_of("ledger-x"), None);
    }

    #[test]
    fn input_frozen_after_check_and_reset_clears() {
        let mut g = game();
        g.place("assets-1", "assets");
        g.check();
        g.place("assets-2", "assets");
        g.remove("assets-1");
        assert_eq!(g.zone_of("assets-2"), None);
        assert_eq!(g.zone_of("assets-1"), Some("assets"));

        g.reset();
        assert!(!g.is_checked());
        assert_eq!(g.available_items().len(), 12);
        assert_eq!(g.finish(), None);
    }
}
