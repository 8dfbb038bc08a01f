/// Layout family of a skill category, fixed when the payload is ingested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SkillCategoryKind {
    /// Rendered as proficiency bars.
    Languages,
    /// Rendered as accent coloured chips.
    AiAndLlm,
    #[default]
    Other,
}

impl SkillCategoryKind {
    pub const LANGUAGES_NAME: &'static str = "Languages";
    pub const AI_AND_LLM_NAME: &'static str = "AI & LLM";

    /// Exact, case sensitive match on the category name.
    pub fn from_name(name: &str) -> Self {
        match name {
            Self::LANGUAGES_NAME => SkillCategoryKind::Languages,
            Self::AI_AND_LLM_NAME => SkillCategoryKind::AiAndLlm,
            _ => SkillCategoryKind::Other,
        }
    }

    pub fn shows_proficiency(&self) -> bool {
        matches!(self, SkillCategoryKind::Languages)
    }

    /// CSS modifier for chip layouts.
    pub fn chip_class(&self) -> &'static str {
        match self {
            SkillCategoryKind::AiAndLlm => "skill-chip skill-chip--accent",
            SkillCategoryKind::Languages | SkillCategoryKind::Other => "skill-chip",
        }
    }
}
