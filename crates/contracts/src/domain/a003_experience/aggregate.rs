use crate::domain::common::{lenient, TagList};
use crate::shared::text;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Responsibility {
    pub id: i64,
    pub description: String,
}

/// A position held, with its owned responsibilities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub technologies: TagList,
    #[serde(default, deserialize_with = "lenient::null_as_empty")]
    pub responsibilities: Vec<Responsibility>,
}

impl Experience {
    pub fn date_span(&self) -> Option<String> {
        text::span(self.start_date.as_deref(), self.end_date.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_technologies_split_on_ingest() {
        let experience: Experience = serde_json::from_value(json!({
            "id": 3,
            "title": "AI Engineer Intern",
            "company": "Acme",
            "start_date": "Jan 2025",
            "end_date": "Present",
            "technologies": "Python, LangChain,  FastAPI",
            "responsibilities": [
                {"id": 1, "description": "Built RAG pipelines"},
                {"id": 2, "description": "Shipped APIs"}
            ]
        }))
        .unwrap();

        assert_eq!(experience.technologies.as_slice(), ["Python", "LangChain", "FastAPI"]);
        assert_eq!(experience.responsibilities.len(), 2);
        assert_eq!(experience.responsibilities[0].description, "Built RAG pipelines");
        assert_eq!(experience.date_span().as_deref(), Some("Jan 2025 – Present"));
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let experience: Experience = serde_json::from_value(json!({
            "id": 4,
            "title": "Freelance",
            "company": "Self",
            "responsibilities": null
        }))
        .unwrap();

        assert!(experience.technologies.is_empty());
        assert!(experience.responsibilities.is_empty());
        assert_eq!(experience.date_span(), None);
    }
}
