use super::*;
use crate::course::Advance;
use crate::dashboard::{COMING_SOON, CourseStart};

impl AcademyApp {
    pub fn open_course(&mut self, course_id: &str) {
        let Some(dashboard) = self.dashboard.as_mut() else {
            return;
        };
        match dashboard.start_course(course_id) {
            CourseStart::Started => {
                self.message.clear();
                self.completion = None;
                self.state = AppState::Course;
                self.sync_game();
            }
            CourseStart::ComingSoon => self.message = COMING_SOON.to_string(),
            CourseStart::Unavailable => {
                self.message = "Kurs içeriği yüklenemedi.".to_string();
            }
        }
    }

    /// Leaves the course without recording anything.
    pub fn back_to_dashboard(&mut self) {
        if let Some(dashboard) = self.dashboard.as_mut() {
            dashboard.leave_course();
        }
        self.game = None;
        self.completion = None;
        self.state = AppState::Dashboard;
    }

    pub fn restart_course(&mut self) {
        if let Some(seq) = self.dashboard.as_mut().and_then(|d| d.current_mut()) {
            seq.restart();
        }
        self.completion = None;
        self.sync_game();
    }

    pub fn select_module(&mut self, index: usize) {
        if let Some(seq) = self.dashboard.as_mut().and_then(|d| d.current_mut()) {
            seq.jump_to(index);
        }
        self.sync_game();
    }

    pub fn previous_module(&mut self) {
        if let Some(seq) = self.dashboard.as_mut().and_then(|d| d.current_mut()) {
            seq.previous();
        }
        self.sync_game();
    }

    /// Lesson "continue": completes the module without a score.
    pub fn complete_lesson(&mut self) {
        self.advance_course(None);
    }

    /// Hands a finished game's percentage to the sequencer.
    pub fn finish_game(&mut self, score: u8) {
        self.advance_course(Some(score));
    }

    fn advance_course(&mut self, score: Option<u8>) {
        let advanced = self
            .dashboard
            .as_mut()
            .and_then(|d| d.current_mut())
            .and_then(|seq| seq.advance(score));

        match advanced {
            Some(Advance::Moved(_)) => self.sync_game(),
            Some(Advance::Finished(outcome)) => {
                self.game = None;
                self.completion = Some(outcome);
            }
            None => {}
        }
    }

    /// Fresh game state for whatever module is now current.
    fn sync_game(&mut self) {
        self.game = self
            .dashboard
            .as_ref()
            .and_then(|d| d.current())
            .and_then(|seq| seq.current_module())
            .and_then(ActiveGame::for_module);
    }
}
