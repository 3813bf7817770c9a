//! Course catalog, completed courses and achievements of the signed-in
//! learner. Lives only as long as the session.

use crate::course::{CompletionOutcome, CourseSequencer};
use crate::data::read_course_embedded;
use crate::model::{Achievement, AchievementRule, Catalog, Course};

pub const COMING_SOON: &str =
    "🚧 Bu kurs çok yakında açılacak! Şu an sadece 'Stellar Blockchain Temelleri' kursu aktif.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CourseStart {
    Started,
    ComingSoon,
    /// Enabled in the catalog but its content could not be loaded.
    Unavailable,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Courses,
    Progress,
    Achievements,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [
        DashboardTab::Courses,
        DashboardTab::Progress,
        DashboardTab::Achievements,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Courses => "📚 Kurslar",
            DashboardTab::Progress => "📊 İlerleme",
            DashboardTab::Achievements => "🏆 Başarımlar",
        }
    }
}

pub struct Dashboard {
    courses: Vec<Course>,
    achievements: Vec<Achievement>,
    completed: Vec<String>,
    current: Option<CourseSequencer>,
    pub tab: DashboardTab,
}

impl Dashboard {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            courses: catalog.courses,
            achievements: catalog.achievements,
            completed: Vec::new(),
            current: None,
            tab: DashboardTab::default(),
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn completed_courses(&self) -> &[String] {
        &self.completed
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn total_courses(&self) -> usize {
        self.courses.len()
    }

    pub fn is_completed(&self, course_id: &str) -> bool {
        self.completed.iter().any(|c| c == course_id)
    }

    pub fn is_earned(&self, achievement: &Achievement) -> bool {
        match achievement.rule {
            AchievementRule::FirstCourse => !self.completed.is_empty(),
            AchievementRule::AllCourses => {
                let mut enabled = self.courses.iter().filter(|c| c.enabled).peekable();
                enabled.peek().is_some() && enabled.all(|c| self.is_completed(&c.id))
            }
            AchievementRule::Untracked => false,
        }
    }

    pub fn earned_count(&self) -> usize {
        self.achievements.iter().filter(|a| self.is_earned(a)).count()
    }

    pub fn current(&self) -> Option<&CourseSequencer> {
        self.current.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut CourseSequencer> {
        self.current.as_mut()
    }

    /// Opens a fresh attempt of `course_id`. Courses that are not enabled
    /// only yield the coming-soon notice.
    pub fn start_course(&mut self, course_id: &str) -> CourseStart {
        let enabled = self
            .courses
            .iter()
            .any(|c| c.id == course_id && c.enabled);
        if !enabled {
            return CourseStart::ComingSoon;
        }

        match read_course_embedded(course_id) {
            Some(Ok(content)) => {
                log::info!("starting course {course_id}");
                self.current = Some(CourseSequencer::new(content));
                CourseStart::Started
            }
            Some(Err(err)) => {
                log::error!("course {course_id} failed to load: {err}");
                CourseStart::Unavailable
            }
            None => {
                log::error!("course {course_id} has no content");
                CourseStart::Unavailable
            }
        }
    }

    /// Back to the catalog without completing; nothing is recorded.
    pub fn leave_course(&mut self) {
        self.current = None;
    }

    /// Closes the current course with its final success rate. A passing rate
    /// marks the course completed (once) and sets its progress to 100.
    pub fn complete_course(&mut self, success_rate: u8) -> Option<CompletionOutcome> {
        let sequencer = self.current.take()?;
        let outcome = CompletionOutcome::evaluate(success_rate);
        let course_id = sequencer.course_id();

        if outcome.passed && !self.is_completed(course_id) {
            self.completed.push(course_id.to_string());
            if let Some(course) = self.courses.iter_mut().find(|c| c.id == course_id) {
                course.progress = 100;
            }
            log::info!("course {course_id} completed with {success_rate}%");
        }
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_catalog_embedded;

    fn dashboard() -> Dashboard {
        Dashboard::new(read_catalog_embedded().unwrap())
    }

    #[test]
    fn disabled_courses_are_coming_soon() {
        let mut d = dashboard();
        assert_eq!(d.start_course("smart-contracts"), CourseStart::ComingSoon);
        assert_eq!(d.start_course("nope"), CourseStart::ComingSoon);
        assert!(d.current().is_none());
    }

    #[test]
    fn passing_completion_is_recorded_once() {
        let mut d = dashboard();
        assert_eq!(d.start_course("stellar-basics"), CourseStart::Started);
        assert!(d.complete_course(85).unwrap().passed);

        assert_eq!(d.start_course("stellar-basics"), CourseStart::Started);
        d.complete_course(100);

        assert_eq!(d.completed_courses(), ["stellar-basics".to_string()]);
        let course = d.courses().iter().find(|c| c.id == "stellar-basics").unwrap();
        assert_eq!(course.progress, 100);
        assert!(d.current().is_none());
    }

    #[test]
    fn failing_completion_changes_nothing() {
        let mut d = dashboard();
        d.start_course("stellar-basics");
        let outcome = d.complete_course(79).unwrap();
        assert!(!outcome.passed);
        assert_eq!(d.completed_count(), 0);
        assert!(d.current().is_none());
        assert!(d.courses().iter().all(|c| c.progress == 0));
    }

    #[test]
    fn leaving_keeps_progress_untouched() {
        let mut d = dashboard();
        d.start_course("stellar-basics");
        d.leave_course();
        assert!(d.current().is_none());
        assert_eq!(d.complete_course(100), None);
        assert_eq!(d.completed_count(), 0);
    }

    #[test]
    fn achievements_follow_completed_courses() {
        let mut d = dashboard();
        assert_eq!(d.earned_count(), 0);

        d.start_course("stellar-basics");
        d.complete_course(90);

        let earned: Vec<_> = d
            .achievements()
            .iter()
            .filter(|a| d.is_earned(a))
            .map(|a| a.rule)
            .collect();
        assert_eq!(
            earned,
            vec![AchievementRule::FirstCourse, AchievementRule::AllCourses]
        );
    }
}
