// src/data.rs

use crate::model::{Catalog, CourseContent};
use serde_yaml;

/// Loads the course catalog and achievements from the embedded YAML.
pub fn read_catalog_embedded() -> Result<Catalog, serde_yaml::Error> {
    let file_content = include_str!("data/catalog.yaml");
    serde_yaml::from_str(file_content)
}

/// Loads the lessons and games of a course, if the course has content.
pub fn read_course_embedded(course_id: &str) -> Option<Result<CourseContent, serde_yaml::Error>> {
    let file_content = match course_id {
        "stellar-basics" => include_str!("data/stellar_basics.yaml"),
        _ => return None,
    };
    Some(serde_yaml::from_str(file_content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GameKind, ModuleBody, ModuleKind};

    #[test]
    fn catalog_has_exactly_one_enabled_course() {
        let catalog = read_catalog_embedded().unwrap();
        assert_eq!(catalog.courses.len(), 4);
        let enabled: Vec<_> = catalog.courses.iter().filter(|c| c.enabled).collect();
        assert_eq!(enabled.len(), 1);
        assert_eq!(enabled[0].id, "stellar-basics");
        assert!(catalog.courses.iter().all(|c| c.progress == 0));
    }

    #[test]
    fn stellar_basics_alternates_lessons_and_games() {
        let content = read_course_embedded("stellar-basics").unwrap().unwrap();
        let kinds: Vec<ModuleKind> = content.modules.iter().map(|m| m.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                ModuleKind::Lesson,
                ModuleKind::Game(GameKind::FillBlanks),
                ModuleKind::Lesson,
                ModuleKind::Game(GameKind::DragDrop),
                ModuleKind::Lesson,
                ModuleKind::Game(GameKind::Quiz),
                ModuleKind::Lesson,
                ModuleKind::Game(GameKind::Matching),
            ]
        );
    }

    #[test]
    fn blank_placeholders_match_blank_count() {
        let content = read_course_embedded("stellar-basics").unwrap().unwrap();
        for module in &content.modules {
            if let ModuleBody::FillBlanks { questions } = &module.body {
                for q in questions {
                    assert_eq!(q.segments().len(), q.blanks.len() + 1, "{}", q.id);
                }
            }
        }
    }

    #[test]
    fn drag_items_belong_to_known_zones() {
        let content = read_course_embedded("stellar-basics").unwrap().unwrap();
        let module = content.modules.iter().find(|m| m.id == "drag-drop-1").unwrap();
        match &module.body {
            ModuleBody::DragDrop { items, zones } => {
                assert_eq!(items.len(), 12);
                assert_eq!(zones.len(), 4);
                for item in items {
                    assert!(zones.iter().any(|z| z.id == item.category), "{}", item.id);
                }
            }
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn unknown_course_has_no_content() {
        assert!(read_course_embedded("smart-contracts").is_none());
    }
}
