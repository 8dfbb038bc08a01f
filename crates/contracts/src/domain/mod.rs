pub mod a001_profile;
pub mod a002_education;
pub mod a003_experience;
pub mod a004_project;
pub mod a005_skill_category;
pub mod a006_certification;
pub mod a007_contact_message;
pub mod common;
pub mod portfolio;
