use crate::domain::common::{lenient, Highlights, TagList};
use serde::{Deserialize, Serialize};

/// Portfolio project card data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub technologies: TagList,
    #[serde(default)]
    pub highlights: Highlights,
    pub link: Option<String>,
    pub github: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::deserialize_flag",
        serialize_with = "lenient::serialize_flag"
    )]
    pub is_featured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_highlights_and_flag() {
        let project: Project = serde_json::from_value(json!({
            "id": 1,
            "title": "Resume Parser",
            "highlights": "[\"a\",\"b\"]",
            "is_featured": 1
        }))
        .unwrap();

        assert!(project.is_featured);
        assert_eq!(project.highlights.items(), ["a", "b"]);
    }

    #[test]
    fn test_missing_highlights_and_malformed_flag() {
        let project: Project = serde_json::from_value(json!({
            "id": 2,
            "title": "CLI",
            "is_featured": "n/a"
        }))
        .unwrap();

        assert!(!project.is_featured);
        assert_eq!(project.highlights, Highlights::Absent);
        assert!(project.highlights.items().is_empty());
    }

    #[test]
    fn test_malformed_highlights_do_not_fail_the_payload() {
        let project: Project = serde_json::from_value(json!({
            "id": 3,
            "title": "Broken",
            "highlights": "not json"
        }))
        .unwrap();

        assert!(matches!(project.highlights, Highlights::Malformed { .. }));
        assert!(project.highlights.items().is_empty());
    }

    #[test]
    fn test_serializes_wire_shape() {
        let project = Project {
            id: 9,
            title: "Site".to_string(),
            description: None,
            technologies: TagList::parse("Rust, Leptos"),
            highlights: Highlights::Items(vec!["Fast".to_string()]),
            link: None,
            github: None,
            is_featured: true,
        };
        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["is_featured"], json!(1));
        assert_eq!(value["technologies"], json!("Rust, Leptos"));
        assert_eq!(value["highlights"], json!("[\"Fast\"]"));
    }
}
