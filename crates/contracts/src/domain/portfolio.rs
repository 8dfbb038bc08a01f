use crate::domain::a001_profile::aggregate::Profile;
use crate::domain::a002_education::aggregate::Education;
use crate::domain::a003_experience::aggregate::Experience;
use crate::domain::a004_project::aggregate::Project;
use crate::domain::a005_skill_category::aggregate::SkillCategory;
use crate::domain::a006_certification::aggregate::Certification;
use crate::domain::common::lenient;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Body of `GET /api/portfolio`.
///
/// Created once per page session and never mutated afterwards. The profile
/// may be absent and any list may be empty; `null` lists decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default, deserialize_with = "lenient::null_as_empty")]
    pub education: Vec<Education>,
    #[serde(default, deserialize_with = "lenient::null_as_empty")]
    pub experiences: Vec<Experience>,
    #[serde(default, deserialize_with = "lenient::null_as_empty")]
    pub projects: Vec<Project>,
    #[serde(default, deserialize_with = "lenient::null_as_empty")]
    pub skill_categories: Vec<SkillCategory>,
    #[serde(default, deserialize_with = "lenient::null_as_empty")]
    pub certifications: Vec<Certification>,
}

impl Portfolio {
    /// Only the first education entry is surfaced on the page.
    pub fn primary_education(&self) -> Option<&Education> {
        self.education.first()
    }
}

/// Split into (featured, other), keeping the received order inside each group.
pub fn partition_projects(projects: &[Project]) -> (Vec<&Project>, Vec<&Project>) {
    projects.iter().partition(|p| p.is_featured)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::SkillCategoryKind;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "profile": {
                "id": 1,
                "name": "Naveen S",
                "title": "AI Engineer",
                "tagline": "Building useful AI systems",
                "about": "Para one.\n\nPara two.",
                "email": "naveen@example.com",
                "github": "https://github.com/example"
            },
            "education": [
                {"id": 1, "institution": "First University", "degree": "B.Tech", "cgpa": "8.9"},
                {"id": 2, "institution": "Second School", "degree": "HSC"}
            ],
            "experiences": [
                {"id": 1, "title": "Intern", "company": "Acme", "technologies": "Rust, SQL",
                 "responsibilities": [{"id": 1, "description": "Did things"}]}
            ],
            "projects": [
                {"id": 1, "title": "One", "is_featured": 1, "highlights": "[\"a\",\"b\"]"},
                {"id": 2, "title": "Two", "is_featured": 0},
                {"id": 3, "title": "Three", "is_featured": 1}
            ],
            "skill_categories": [
                {"id": 1, "name": "Languages", "icon": "code",
                 "skills": [{"id": 1, "name": "X", "proficiency": 80}]}
            ],
            "certifications": [
                {"id": 1, "title": "Cloud Practitioner", "issuer": "AWS", "date": "2024"}
            ]
        })
    }

    #[test]
    fn test_full_payload_decodes() {
        let portfolio: Portfolio = serde_json::from_value(sample()).unwrap();

        let profile = portfolio.profile.as_ref().unwrap();
        assert_eq!(profile.about_paragraphs(), vec!["Para one.", "Para two."]);
        assert_eq!(portfolio.primary_education().unwrap().institution, "First University");
        assert_eq!(portfolio.experiences[0].technologies.as_slice(), ["Rust", "SQL"]);
        assert_eq!(portfolio.skill_categories[0].kind, SkillCategoryKind::Languages);
        assert_eq!(portfolio.certifications[0].issuer, "AWS");
    }

    #[test]
    fn test_partition_preserves_relative_order() {
        let portfolio: Portfolio = serde_json::from_value(sample()).unwrap();
        let (featured, other) = partition_projects(&portfolio.projects);

        let featured_ids: Vec<i64> = featured.iter().map(|p| p.id).collect();
        let other_ids: Vec<i64> = other.iter().map(|p| p.id).collect();
        assert_eq!(featured_ids, vec![1, 3]);
        assert_eq!(other_ids, vec![2]);
    }

    #[test]
    fn test_absent_profile_and_null_lists() {
        let portfolio: Portfolio = serde_json::from_value(json!({
            "profile": null,
            "education": null,
            "experiences": [],
            "projects": []
        }))
        .unwrap();

        assert!(portfolio.profile.is_none());
        assert!(portfolio.education.is_empty());
        assert!(portfolio.primary_education().is_none());
        assert!(portfolio.skill_categories.is_empty());
        assert!(portfolio.certifications.is_empty());
        let (featured, other) = partition_projects(&portfolio.projects);
        assert!(featured.is_empty() && other.is_empty());
    }

    #[test]
    fn test_empty_object_is_an_empty_portfolio() {
        let portfolio: Portfolio = serde_json::from_str("{}").unwrap();
        assert_eq!(portfolio, Portfolio::default());
    }
}
