use contracts::domain::a004_project::aggregate::Project;
use contracts::domain::common::Highlights;
use contracts::domain::portfolio::partition_projects;

/// Everything a project card needs, with semi-structured fields already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCardModel {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub highlights: Vec<String>,
    pub technologies: Vec<String>,
    pub link: Option<String>,
    pub github: Option<String>,
}

impl From<&Project> for ProjectCardModel {
    fn from(project: &Project) -> Self {
        if let Highlights::Malformed { reason, .. } = &project.highlights {
            log::warn!(
                "Project {} ({}) has malformed highlights, showing none: {}",
                project.id,
                project.title,
                reason
            );
        }

        Self {
            id: project.id,
            title: project.title.clone(),
            description: project.description.clone(),
            highlights: project.highlights.items().to_vec(),
            technologies: project.technologies.as_slice().to_vec(),
            link: project.link.clone(),
            github: project.github.clone(),
        }
    }
}

impl ProjectCardModel {
    /// Compact technology line for "other" cards: "Rust • Leptos"
    pub fn technology_line(&self) -> String {
        self.technologies.join(" • ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectsModel {
    pub featured: Vec<ProjectCardModel>,
    pub other: Vec<ProjectCardModel>,
}

impl ProjectsModel {
    pub fn new(projects: &[Project]) -> Self {
        let (featured, other) = partition_projects(projects);
        Self {
            featured: featured.into_iter().map(ProjectCardModel::from).collect(),
            other: other.into_iter().map(ProjectCardModel::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn projects() -> Vec<Project> {
        serde_json::from_value(json!([
            {"id": 1, "title": "One", "is_featured": 1, "highlights": "[\"a\",\"b\"]",
             "technologies": "Rust, Leptos"},
            {"id": 2, "title": "Two", "is_featured": 0},
            {"id": 3, "title": "Three", "is_featured": 1, "highlights": "{broken"}
        ]))
        .unwrap()
    }

    #[test]
    fn test_partition_into_featured_and_other() {
        let model = ProjectsModel::new(&projects());
        let featured: Vec<i64> = model.featured.iter().map(|p| p.id).collect();
        let other: Vec<i64> = model.other.iter().map(|p| p.id).collect();
        assert_eq!(featured, vec![1, 3]);
        assert_eq!(other, vec![2]);
    }

    #[test]
    fn test_highlights_in_order() {
        let model = ProjectsModel::new(&projects());
        assert_eq!(model.featured[0].highlights, vec!["a", "b"]);
        assert_eq!(model.featured[0].technology_line(), "Rust • Leptos");
    }

    #[test]
    fn test_missing_or_malformed_highlights_render_none() {
        let model = ProjectsModel::new(&projects());
        assert!(model.other[0].highlights.is_empty());
        assert!(model.featured[1].highlights.is_empty());
        assert_eq!(model.featured[1].title, "Three");
    }

    #[test]
    fn test_empty_projects() {
        assert_eq!(ProjectsModel::new(&[]), ProjectsModel::default());
    }
}
