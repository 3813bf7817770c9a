use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum GameKind {
    FillBlanks,
    DragDrop,
    Quiz,
    Matching,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    Lesson,
    Game(GameKind),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Blank {
    pub answer: String,
    #[serde(default)]
    pub hint: Option<String>,
}

/// Sentence with `_____` placeholders, one per blank.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BlankQuestion {
    pub id: String,
    pub text: String,
    pub blanks: Vec<Blank>,
}

impl BlankQuestion {
    pub const PLACEHOLDER: &'static str = "_____";

    /// Text fragments around the placeholders (always `blanks.len() + 1` when the
    /// content is well formed).
    pub fn segments(&self) -> Vec<&str> {
        self.text.split(Self::PLACEHOLDER).collect()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DragItem {
    pub id: String,
    pub text: String,
    pub category: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DropZone {
    pub id: String,
    pub title: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub explanation: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MatchPair {
    pub id: String,
    pub term: String,
    pub definition: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ModuleBody {
    Lesson {
        content: String,
    },
    FillBlanks {
        questions: Vec<BlankQuestion>,
    },
    DragDrop {
        items: Vec<DragItem>,
        zones: Vec<DropZone>,
    },
    Quiz {
        questions: Vec<QuizQuestion>,
    },
    Matching {
        pairs: Vec<MatchPair>,
    },
}

impl ModuleBody {
    pub fn kind(&self) -> ModuleKind {
        match self {
            ModuleBody::Lesson { .. } => ModuleKind::Lesson,
            ModuleBody::FillBlanks { .. } => ModuleKind::Game(GameKind::FillBlanks),
            ModuleBody::DragDrop { .. } => ModuleKind::Game(GameKind::DragDrop),
            ModuleBody::Quiz { .. } => ModuleKind::Game(GameKind::Quiz),
            ModuleBody::Matching { .. } => ModuleKind::Game(GameKind::Matching),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Module {
    pub id: String,
    pub title: String,
    pub body: ModuleBody,
}

impl Module {
    pub fn kind(&self) -> ModuleKind {
        self.body.kind()
    }

    pub fn is_game(&self) -> bool {
        matches!(self.kind(), ModuleKind::Game(_))
    }

    pub fn game_kind(&self) -> Option<GameKind> {
        match self.kind() {
            ModuleKind::Game(kind) => Some(kind),
            ModuleKind::Lesson => None,
        }
    }
}

/// Lessons and games of one course, in order.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CourseContent {
    pub course_id: String,
    pub title: String,
    pub modules: Vec<Module>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    pub fn label(&self) -> &'static str {
        match self {
            CourseLevel::Beginner => "Başlangıç",
            CourseLevel::Intermediate => "Orta",
            CourseLevel::Advanced => "İleri",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub level: CourseLevel,
    pub module_count: usize,
    #[serde(default)]
    pub progress: u8, // 0 or 100
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AchievementRule {
    FirstCourse,
    AllCourses,
    Untracked,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Achievement {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub rule: AchievementRule,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Catalog {
    pub courses: Vec<Course>,
    pub achievements: Vec<Achievement>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Landing,
    Dashboard,
    Course,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Landing
    }
}
