// src/ui/helpers.rs
use crate::games::ScoreTier;
use egui::{Button, Color32, RichText, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

pub fn tier_color(tier: ScoreTier) -> Color32 {
    match tier {
        ScoreTier::Good => Color32::from_rgb(74, 222, 128),
        ScoreTier::Fair => Color32::from_rgb(250, 204, 21),
        ScoreTier::Poor => Color32::from_rgb(248, 113, 113),
    }
}

/// Big percentage colored by tier, with a caption underneath.
pub fn score_block(ui: &mut Ui, percent: u8, caption: &str) {
    let color = tier_color(ScoreTier::for_percent(percent));
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(format!("%{percent}")).size(32.0).strong().color(color));
        ui.label(caption);
    });
}

/// ✅ / ❌ marker used after a check.
pub fn verdict(ui: &mut Ui, correct: bool) {
    if correct {
        ui.colored_label(Color32::from_rgb(74, 222, 128), "✅");
    } else {
        ui.colored_label(Color32::from_rgb(248, 113, 113), "❌");
    }
}

/// Selectable tile with a highlighted state, used by the games.
pub fn tile(ui: &mut Ui, label: &str, width: f32, selected: bool, enabled: bool) -> bool {
    let mut button = Button::new(label).min_size(Vec2::new(width, 32.0)).wrap();
    if selected {
        button = button.fill(ui.visuals().selection.bg_fill);
    }
    ui.add_enabled(enabled, button).clicked()
}
