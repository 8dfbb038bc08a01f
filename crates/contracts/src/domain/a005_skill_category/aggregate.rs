use crate::domain::common::lenient;
use crate::enums::{SkillCategoryKind, SkillIcon};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    /// 0..=100, only used for bar width
    #[serde(default, deserialize_with = "lenient::deserialize_percent")]
    pub proficiency: u8,
}

/// Group of skills. `kind` and `icon` are resolved once on ingest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SkillCategoryRecord")]
pub struct SkillCategory {
    pub id: i64,
    pub name: String,
    pub icon: SkillIcon,
    #[serde(skip_serializing)]
    pub kind: SkillCategoryKind,
    pub skills: Vec<Skill>,
}

#[derive(Deserialize)]
struct SkillCategoryRecord {
    id: i64,
    name: String,
    #[serde(default)]
    icon: SkillIcon,
    #[serde(default, deserialize_with = "lenient::null_as_empty")]
    skills: Vec<Skill>,
}

impl From<SkillCategoryRecord> for SkillCategory {
    fn from(record: SkillCategoryRecord) -> Self {
        Self {
            kind: SkillCategoryKind::from_name(&record.name),
            id: record.id,
            name: record.name,
            icon: record.icon,
            skills: record.skills,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_and_icon_resolved_on_ingest() {
        let categories: Vec<SkillCategory> = serde_json::from_value(json!([
            {"id": 1, "name": "Languages", "icon": "code", "skills": [
                {"id": 1, "name": "X", "proficiency": 80}
            ]},
            {"id": 2, "name": "AI & LLM", "icon": "ai", "skills": []},
            {"id": 3, "name": "Tooling", "icon": "spaceship"}
        ]))
        .unwrap();

        assert_eq!(categories[0].kind, SkillCategoryKind::Languages);
        assert_eq!(categories[0].skills[0].proficiency, 80);
        assert_eq!(categories[1].kind, SkillCategoryKind::AiAndLlm);
        assert_eq!(categories[1].icon, SkillIcon::Ai);
        assert_eq!(categories[2].kind, SkillCategoryKind::Other);
        assert_eq!(categories[2].icon, SkillIcon::Code);
        assert!(categories[2].skills.is_empty());
    }

    #[test]
    fn test_malformed_proficiency_reads_as_zero() {
        let skill: Skill =
            serde_json::from_value(json!({"id": 5, "name": "Go", "proficiency": "expert"})).unwrap();
        assert_eq!(skill.proficiency, 0);
        let skill: Skill = serde_json::from_value(json!({"id": 6, "name": "C"})).unwrap();
        assert_eq!(skill.proficiency, 0);
    }
}
