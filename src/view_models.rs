// src/view_models.rs

use crate::model::{CourseLevel, GameKind, ModuleKind};

#[derive(Clone, Debug)]
pub struct CourseCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub level: CourseLevel,
    pub duration: String,
    pub module_count: usize,
    pub progress: u8,
    pub enabled: bool,
}

impl CourseCard {
    pub fn button_label(&self) -> &'static str {
        if !self.enabled {
            "🔒 Çok Yakında"
        } else if self.progress > 0 {
            "▶ Yeniden Başla"
        } else {
            "▶ Başla"
        }
    }

    pub fn meta_line(&self) -> String {
        format!(
            "{} · {} modül · {}",
            self.level.label(),
            self.module_count,
            self.duration
        )
    }
}

#[derive(Clone, Debug)]
pub struct ModuleNavInfo {
    pub idx: usize,
    pub number: usize, // 1-based
    pub title: String,
    pub kind: ModuleKind,
    pub completed: bool,
    pub current: bool,
    pub score: Option<u8>,
}

impl ModuleNavInfo {
    pub fn label(&self) -> String {
        if self.completed {
            format!("✅ {}", self.number)
        } else {
            format!("{}", self.number)
        }
    }

    pub fn hover_text(&self) -> String {
        match self.score {
            Some(score) => format!("{} · %{}", self.title, score),
            None => self.title.clone(),
        }
    }
}

pub fn module_icon(kind: ModuleKind) -> &'static str {
    match kind {
        ModuleKind::Lesson => "📖",
        ModuleKind::Game(GameKind::Quiz) => "🏆",
        ModuleKind::Game(_) => "🎮",
    }
}
