use serde::{Deserialize, Serialize};

/// Comma separated tag field (`technologies`), split once on ingest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub struct TagList(Vec<String>);

impl TagList {
    /// Split on commas and trim every tag. Blank tags are dropped.
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tags joined with a separator, e.g. `" • "` for compact cards.
    pub fn join(&self, separator: &str) -> String {
        self.0.join(separator)
    }
}

impl From<Option<String>> for TagList {
    fn from(raw: Option<String>) -> Self {
        raw.as_deref().map(Self::parse).unwrap_or_default()
    }
}

impl From<TagList> for Option<String> {
    fn from(tags: TagList) -> Self {
        if tags.is_empty() {
            None
        } else {
            Some(tags.join(", "))
        }
    }
}

impl IntoIterator for TagList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
