use super::*;

impl AcademyApp {
    pub fn course_cards(&self) -> Vec<CourseCard> {
        let Some(dashboard) = &self.dashboard else {
            return Vec::new();
        };
        dashboard
            .courses()
            .iter()
            .map(|c| CourseCard {
                id: c.id.clone(),
                title: c.title.clone(),
                description: c.description.clone(),
                level: c.level,
                duration: c.duration.clone(),
                module_count: c.module_count,
                progress: c.progress,
                enabled: c.enabled,
            })
            .collect()
    }

    pub fn module_nav_infos(&self) -> Vec<ModuleNavInfo> {
        let Some(seq) = self.dashboard.as_ref().and_then(|d| d.current()) else {
            return Vec::new();
        };
        seq.modules()
            .iter()
            .enumerate()
            .map(|(idx, module)| ModuleNavInfo {
                idx,
                number: idx + 1,
                title: module.title.clone(),
                kind: module.kind(),
                completed: seq.is_completed(idx),
                current: idx == seq.current_index(),
                score: seq.game_score(&module.id),
            })
            .collect()
    }
}
