use contracts::domain::a005_skill_category::aggregate::{Skill, SkillCategory};
use contracts::domain::a006_certification::aggregate::Certification;
use contracts::enums::SkillIcon;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillBar {
    pub name: String,
    pub percent: u8,
}

impl SkillBar {
    pub fn label(&self) -> String {
        format!("{}%", self.percent)
    }

    /// Inline style for the bar fill
    pub fn width_style(&self) -> String {
        format!("width: {}%", self.percent)
    }
}

impl From<&Skill> for SkillBar {
    fn from(skill: &Skill) -> Self {
        Self {
            name: skill.name.clone(),
            percent: skill.proficiency,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillLayout {
    Bars(Vec<SkillBar>),
    Chips { class: &'static str, names: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCategoryModel {
    pub id: i64,
    pub name: String,
    pub icon: SkillIcon,
    pub layout: SkillLayout,
}

impl From<&SkillCategory> for SkillCategoryModel {
    fn from(category: &SkillCategory) -> Self {
        let layout = if category.kind.shows_proficiency() {
            SkillLayout::Bars(category.skills.iter().map(SkillBar::from).collect())
        } else {
            SkillLayout::Chips {
                class: category.kind.chip_class(),
                names: category.skills.iter().map(|s| s.name.clone()).collect(),
            }
        };

        Self {
            id: category.id,
            name: category.name.clone(),
            icon: category.icon,
            layout,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillsModel {
    pub categories: Vec<SkillCategoryModel>,
    pub certifications: Vec<Certification>,
}

impl SkillsModel {
    pub fn new(categories: &[SkillCategory], certifications: &[Certification]) -> Self {
        Self {
            categories: categories.iter().map(SkillCategoryModel::from).collect(),
            certifications: certifications.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn category(name: &str) -> SkillCategory {
        serde_json::from_value(json!({
            "id": 1,
            "name": name,
            "icon": "code",
            "skills": [{"id": 1, "name": "X", "proficiency": 80}]
        }))
        .unwrap()
    }

    #[test]
    fn test_languages_render_as_bars() {
        let model = SkillCategoryModel::from(&category("Languages"));
        match model.layout {
            SkillLayout::Bars(bars) => {
                assert_eq!(bars.len(), 1);
                assert_eq!(bars[0].name, "X");
                assert_eq!(bars[0].width_style(), "width: 80%");
                assert_eq!(bars[0].label(), "80%");
            }
            other => panic!("expected bars, got {:?}", other),
        }
    }

    #[test]
    fn test_other_categories_render_as_chips() {
        let model = SkillCategoryModel::from(&category("Frameworks"));
        assert_eq!(
            model.layout,
            SkillLayout::Chips { class: "skill-chip", names: vec!["X".to_string()] }
        );

        let model = SkillCategoryModel::from(&category("AI & LLM"));
        assert_eq!(
            model.layout,
            SkillLayout::Chips { class: "skill-chip skill-chip--accent", names: vec!["X".to_string()] }
        );
    }

    #[test]
    fn test_certifications_pass_through() {
        let certifications: Vec<Certification> = serde_json::from_value(json!([
            {"id": 1, "title": "A", "issuer": "B"}
        ]))
        .unwrap();
        let model = SkillsModel::new(&[], &certifications);
        assert!(model.categories.is_empty());
        assert_eq!(model.certifications.len(), 1);
    }
}
