pub mod a001_profile;
pub mod a003_experience;
pub mod a004_project;
pub mod a005_skill_category;
pub mod a007_contact;
