pub mod skill_category_kind;
pub mod skill_icon;

pub use skill_category_kind::SkillCategoryKind;
pub use skill_icon::SkillIcon;
