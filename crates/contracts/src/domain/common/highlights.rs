use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HighlightsError {
    #[error("highlights is not a JSON array of strings: {0}")]
    Malformed(String),
}

/// Project highlights, stored by the backend as a JSON encoded string array.
///
/// Decoding happens once when the payload is ingested. A value that does not
/// decode is kept as [`Highlights::Malformed`] so the rest of the project can
/// still be shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Highlights {
    #[default]
    Absent,
    Items(Vec<String>),
    Malformed { raw: String, reason: String },
}

impl Highlights {
    pub fn parse(raw: &str) -> Result<Vec<String>, HighlightsError> {
        serde_json::from_str::<Vec<String>>(raw)
            .map_err(|e| HighlightsError::Malformed(e.to_string()))
    }

    /// Empty and blank strings count as absent.
    pub fn decode(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
            return Highlights::Absent;
        };
        match Self::parse(raw) {
            Ok(items) => Highlights::Items(items),
            Err(HighlightsError::Malformed(reason)) => Highlights::Malformed {
                raw: raw.to_string(),
                reason,
            },
        }
    }

    /// Decoded entries; absent and malformed values yield none.
    pub fn items(&self) -> &[String] {
        match self {
            Highlights::Items(items) => items,
            Highlights::Absent | Highlights::Malformed { .. } => &[],
        }
    }
}

impl From<Option<String>> for Highlights {
    fn from(raw: Option<String>) -> Self {
        Self::decode(raw.as_deref())
    }
}

impl From<Highlights> for Option<String> {
    fn from(highlights: Highlights) -> Self {
        match highlights {
            Highlights::Absent => None,
            Highlights::Items(items) => serde_json::to_string(&items).ok(),
            Highlights::Malformed { raw, .. } => Some(raw),
        }
    }
}
