use crate::shared::text;
use serde::{Deserialize, Serialize};

/// Identity and contact details of the portfolio owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub tagline: Option<String>,
    /// Long-form bio, paragraphs separated by a blank line
    pub about: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub leetcode: Option<String>,
}

impl Profile {
    pub fn about_paragraphs(&self) -> Vec<String> {
        self.about.as_deref().map(text::paragraphs).unwrap_or_default()
    }

    pub fn initials(&self) -> String {
        text::initials(&self.name)
    }

    pub fn email_href(&self) -> Option<String> {
        self.email.as_ref().map(|email| format!("mailto:{}", email))
    }

    pub fn phone_href(&self) -> Option<String> {
        self.phone.as_ref().map(|phone| format!("tel:{}", phone))
    }
}
