//! Display models derived from the profile slice of the portfolio.
//!
//! Every builder takes `Option<&Profile>` and returns `None` when the profile
//! is absent; the matching section then renders nothing.

use contracts::domain::a001_profile::aggregate::Profile;
use contracts::domain::a002_education::aggregate::Education;

/// Shown in the stats row when the primary education has no CGPA.
pub const FALLBACK_CGPA: &str = "8.45";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: String,
    /// Opens in a new tab
    pub external: bool,
}

/// LinkedIn, GitHub and email, each only when present.
pub fn social_links(profile: &Profile) -> Vec<SocialLink> {
    let mut links = Vec::new();
    if let Some(href) = profile.linkedin.clone() {
        links.push(SocialLink { label: "LinkedIn", icon: "linkedin", href, external: true });
    }
    if let Some(href) = profile.github.clone() {
        links.push(SocialLink { label: "GitHub", icon: "github", href, external: true });
    }
    if let Some(href) = profile.email_href() {
        links.push(SocialLink { label: "Email", icon: "mail", href, external: false });
    }
    links
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroModel {
    pub name: String,
    pub title: String,
    pub tagline: Option<String>,
    pub links: Vec<SocialLink>,
}

impl HeroModel {
    pub fn build(profile: Option<&Profile>) -> Option<Self> {
        let profile = profile?;
        Some(Self {
            name: profile.name.clone(),
            title: profile.title.clone(),
            tagline: profile.tagline.clone(),
            links: social_links(profile),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationSummary {
    pub institution: String,
    pub degree: String,
    /// "CGPA: 8.9 | 2021 – 2025", parts omitted when missing
    pub detail: Option<String>,
    pub location: Option<String>,
}

impl EducationSummary {
    fn from_education(education: &Education) -> Self {
        let mut parts = Vec::new();
        if let Some(cgpa) = &education.cgpa {
            parts.push(format!("CGPA: {}", cgpa));
        }
        if let Some(years) = education.year_span() {
            parts.push(years);
        }
        Self {
            institution: education.institution.clone(),
            degree: education.degree.clone(),
            detail: (!parts.is_empty()).then(|| parts.join(" | ")),
            location: education.location.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub value: String,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutModel {
    pub paragraphs: Vec<String>,
    pub initials: String,
    pub stats: Vec<Stat>,
    /// First education entry only
    pub education: Option<EducationSummary>,
}

impl AboutModel {
    pub fn build(
        profile: Option<&Profile>,
        primary: Option<&Education>,
        experience_count: usize,
        project_count: usize,
    ) -> Option<Self> {
        let profile = profile?;
        let cgpa = primary
            .and_then(|e| e.cgpa.clone())
            .unwrap_or_else(|| FALLBACK_CGPA.to_string());

        Some(Self {
            paragraphs: profile.about_paragraphs(),
            initials: profile.initials(),
            stats: vec![
                Stat { value: experience_count.to_string(), label: "Roles" },
                Stat { value: project_count.to_string(), label: "Projects" },
                Stat { value: cgpa, label: "CGPA" },
            ],
            education: primary.map(EducationSummary::from_education),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactCard {
    pub label: &'static str,
    pub icon: &'static str,
    pub value: String,
    pub href: String,
    pub external: bool,
}

/// Email, phone, LinkedIn and GitHub cards, each only when present.
pub fn contact_cards(profile: Option<&Profile>) -> Option<Vec<ContactCard>> {
    let profile = profile?;
    let mut cards = Vec::new();
    if let (Some(value), Some(href)) = (profile.email.clone(), profile.email_href()) {
        cards.push(ContactCard { label: "Email", icon: "mail", value, href, external: false });
    }
    if let (Some(value), Some(href)) = (profile.phone.clone(), profile.phone_href()) {
        cards.push(ContactCard { label: "Phone", icon: "phone", value, href, external: false });
    }
    if let Some(href) = profile.linkedin.clone() {
        cards.push(ContactCard {
            label: "LinkedIn",
            icon: "linkedin",
            value: display_url(&href),
            href,
            external: true,
        });
    }
    if let Some(href) = profile.github.clone() {
        cards.push(ContactCard {
            label: "GitHub",
            icon: "github",
            value: display_url(&href),
            href,
            external: true,
        });
    }
    Some(cards)
}

/// "https://www.linkedin.com/in/someone/" -> "linkedin.com/in/someone"
pub fn display_url(url: &str) -> String {
    let without_scheme = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    without_scheme
        .strip_prefix("www.")
        .unwrap_or(without_scheme)
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile {
            id: 1,
            name: "Naveen S".to_string(),
            title: "AI Engineer".to_string(),
            tagline: Some("Building things".to_string()),
            about: Some("Para one.\n\nPara two.".to_string()),
            email: Some("n@example.com".to_string()),
            phone: None,
            linkedin: Some("https://www.linkedin.com/in/someone/".to_string()),
            github: None,
            leetcode: None,
        }
    }

    fn education(cgpa: Option<&str>) -> Education {
        Education {
            id: 1,
            institution: "Uni".to_string(),
            degree: "B.Tech".to_string(),
            cgpa: cgpa.map(str::to_string),
            start_year: Some("2021".to_string()),
            end_year: Some("2025".to_string()),
            location: None,
        }
    }

    #[test]
    fn test_absent_profile_blanks_profile_sections() {
        assert!(HeroModel::build(None).is_none());
        assert!(AboutModel::build(None, Some(&education(None)), 2, 3).is_none());
        assert!(contact_cards(None).is_none());
    }

    #[test]
    fn test_about_model() {
        let profile = profile();
        let about = AboutModel::build(Some(&profile), Some(&education(Some("9.1"))), 2, 5)
            .unwrap();

        assert_eq!(about.paragraphs, vec!["Para one.", "Para two."]);
        assert_eq!(about.initials, "NS");
        assert_eq!(about.stats[1].value, "5");
        assert_eq!(about.stats[2].value, "9.1");
        let summary = about.education.unwrap();
        assert_eq!(summary.detail.as_deref(), Some("CGPA: 9.1 | 2021 – 2025"));
    }

    #[test]
    fn test_about_falls_back_to_fixed_cgpa() {
        let profile = profile();
        let about = AboutModel::build(Some(&profile), None, 0, 0).unwrap();
        assert_eq!(about.stats[2].value, FALLBACK_CGPA);
        assert!(about.education.is_none());

        let about = AboutModel::build(Some(&profile), Some(&education(None)), 0, 0).unwrap();
        assert_eq!(about.stats[2].value, FALLBACK_CGPA);
        assert_eq!(about.education.unwrap().detail.as_deref(), Some("2021 – 2025"));
    }

    #[test]
    fn test_links_only_for_present_fields() {
        let hero = HeroModel::build(Some(&profile())).unwrap();
        let labels: Vec<&str> = hero.links.iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["LinkedIn", "Email"]);
        assert_eq!(hero.links[1].href, "mailto:n@example.com");
        assert!(!hero.links[1].external);

        let cards = contact_cards(Some(&profile())).unwrap();
        let labels: Vec<&str> = cards.iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["Email", "LinkedIn"]);
        assert_eq!(cards[1].value, "linkedin.com/in/someone");
    }

    #[test]
    fn test_display_url() {
        assert_eq!(display_url("https://github.com/someone"), "github.com/someone");
        assert_eq!(display_url("github.com/someone/"), "github.com/someone");
    }
}
