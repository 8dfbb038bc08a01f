use serde::{Deserialize, Serialize};

/// Icon shown next to a skill category heading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum SkillIcon {
    #[default]
    Code,
    Framework,
    Database,
    Ai,
    Core,
    Tools,
}

impl SkillIcon {
    /// Wire key used by the backend
    pub fn key(&self) -> &'static str {
        match self {
            SkillIcon::Code => "code",
            SkillIcon::Framework => "framework",
            SkillIcon::Database => "database",
            SkillIcon::Ai => "ai",
            SkillIcon::Core => "core",
            SkillIcon::Tools => "tools",
        }
    }

    pub fn all() -> Vec<SkillIcon> {
        vec![
            SkillIcon::Code,
            SkillIcon::Framework,
            SkillIcon::Database,
            SkillIcon::Ai,
            SkillIcon::Core,
            SkillIcon::Tools,
        ]
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "code" => Some(SkillIcon::Code),
            "framework" => Some(SkillIcon::Framework),
            "database" => Some(SkillIcon::Database),
            "ai" => Some(SkillIcon::Ai),
            "core" => Some(SkillIcon::Core),
            "tools" => Some(SkillIcon::Tools),
            _ => None,
        }
    }
}

impl From<Option<String>> for SkillIcon {
    fn from(key: Option<String>) -> Self {
        key.as_deref()
            .and_then(SkillIcon::from_key)
            .unwrap_or_default()
    }
}

impl From<SkillIcon> for Option<String> {
    fn from(icon: SkillIcon) -> Self {
        Some(icon.key().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for icon in SkillIcon::all() {
            assert_eq!(SkillIcon::from_key(icon.key()), Some(icon));
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_code() {
        assert_eq!(SkillIcon::from(Some("rocket-ship".to_string())), SkillIcon::Code);
        assert_eq!(SkillIcon::from(None), SkillIcon::Code);
        assert_eq!(SkillIcon::from(Some("tools".to_string())), SkillIcon::Tools);
    }
}
