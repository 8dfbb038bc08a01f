use crate::shared::text;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: i64,
    pub institution: String,
    pub degree: String,
    pub cgpa: Option<String>,
    pub start_year: Option<String>,
    pub end_year: Option<String>,
    pub location: Option<String>,
}

impl Education {
    pub fn year_span(&self) -> Option<String> {
        text::span(self.start_year.as_deref(), self.end_year.as_deref())
    }
}
