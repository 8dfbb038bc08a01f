use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub id: i64,
    pub title: String,
    pub issuer: String,
    pub date: Option<String>,
    pub link: Option<String>,
}
