use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

const BUNDLED: &str = include_str!("../assets/content.json");

/// Element ids of the page sections.
pub mod section_id {
    pub const HOME: &str = "home";
    pub const ABOUT: &str = "about";
    pub const EXPERIENCE: &str = "experience";
    pub const SKILLS: &str = "skills";
    pub const PROJECTS: &str = "projects";
    pub const EDUCATION: &str = "education";
    pub const RESPONSIBILITIES: &str = "responsibilities";
    pub const CERTIFICATIONS: &str = "certifications";
    pub const CONTACT: &str = "contact";
}

/// Ids of the sections rendered by the portfolio page, in document order.
pub const SECTION_IDS: [&str; 9] = [
    section_id::HOME,
    section_id::ABOUT,
    section_id::EXPERIENCE,
    section_id::SKILLS,
    section_id::PROJECTS,
    section_id::EDUCATION,
    section_id::RESPONSIBILITIES,
    section_id::CERTIFICATIONS,
    section_id::CONTACT,
];

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("malformed portfolio content: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("nav link {0:?} does not point at a page section")]
    UnknownSection(String),
    #[error("nav link {0:?} listed twice")]
    DuplicateLink(String),
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Portfolio {
    pub profile: Profile,
    pub nav: Vec<NavLink>,
    pub about: About,
    pub experience: Vec<Experience>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub positions: Vec<Position>,
    pub certifications: Vec<Certification>,
    pub cta: Blurb,
    pub contact: Blurb,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Profile {
    pub name: String,
    pub brand: String,
    pub role: String,
    /// Lead-in, highlighted word, tail.
    pub headline: (String, String, String),
    pub summary: String,
    pub photo: String,
    pub resume_url: String,
    pub email: String,
    pub github_url: String,
    pub github_label: String,
    pub linkedin_url: String,
    pub linkedin_label: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct NavLink {
    pub id: String,
    pub label: String,
    pub icon: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct About {
    pub paragraphs: Vec<String>,
    pub traits: Vec<String>,
    pub focus_areas: Vec<FocusArea>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct FocusArea {
    pub icon: String,
    pub title: String,
    pub text: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Experience {
    pub role: String,
    pub period: String,
    pub duration: String,
    pub organization: String,
    pub highlights: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct SkillGroup {
    pub icon: String,
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Project {
    pub name: String,
    pub tagline: String,
    pub image: String,
    #[serde(default)]
    pub featured: bool,
    pub highlights: Vec<String>,
    pub technologies: Vec<String>,
    pub source_url: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Education {
    pub degree: String,
    pub period: String,
    pub score: String,
    pub institution: String,
    #[serde(default)]
    pub coursework: Vec<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Position {
    pub icon: String,
    pub title: String,
    pub organization: String,
    pub period: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub period: String,
    pub summary: String,
    pub url: Option<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Blurb {
    pub heading: String,
    pub text: String,
}

impl Portfolio {
    /// Decode and check the content compiled into the binary.
    pub fn bundled() -> Result<Self, ContentError> {
        Self::parse(BUNDLED)
    }

    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio = serde_json::from_str(raw)?;
        portfolio.check_nav()?;
        Ok(portfolio)
    }

    fn check_nav(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for link in &self.nav {
            if !SECTION_IDS.contains(&link.id.as_str()) {
                return Err(ContentError::UnknownSection(link.id.clone()));
            }
            if !seen.insert(link.id.as_str()) {
                return Err(ContentError::DuplicateLink(link.id.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_nav(nav: &str) -> String {
        let mut value: serde_json::Value = serde_json::from_str(BUNDLED).unwrap();
        value["nav"] = serde_json::from_str(nav).unwrap();
        value.to_string()
    }

    #[test]
    fn test_bundled_content_decodes() {
        let portfolio = Portfolio::bundled().unwrap();
        assert_eq!(portfolio.profile.brand, "Anzer.dev");
        assert_eq!(portfolio.nav.first().map(|link| link.id.as_str()), Some("home"));
        assert_eq!(portfolio.projects.len(), 3);
        assert!(portfolio.projects[0].featured);
        assert!(!portfolio.projects[1].featured);
        assert!(portfolio.education[2].coursework.is_empty());
        assert!(portfolio.certifications[2].url.is_none());
    }

    #[test]
    fn test_nav_follows_section_order() {
        let portfolio = Portfolio::bundled().unwrap();
        let positions: Vec<usize> = portfolio
            .nav
            .iter()
            .filter_map(|link| SECTION_IDS.iter().position(|id| *id == link.id))
            .collect();
        assert_eq!(positions.len(), portfolio.nav.len());
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_section_ids_are_unique() {
        let unique: HashSet<&str> = SECTION_IDS.iter().copied().collect();
        assert_eq!(unique.len(), SECTION_IDS.len());
        assert_eq!(SECTION_IDS.first(), Some(&section_id::HOME));
        assert_eq!(SECTION_IDS.last(), Some(&section_id::CONTACT));
    }

    #[test]
    fn test_rejects_link_to_missing_section() {
        let raw = with_nav(r#"[{"id": "blog", "label": "Blog", "icon": "x"}]"#);
        assert!(matches!(
            Portfolio::parse(&raw),
            Err(ContentError::UnknownSection(id)) if id == "blog"
        ));
    }

    #[test]
    fn test_rejects_duplicate_link() {
        let raw = with_nav(
            r#"[{"id": "about", "label": "A", "icon": "x"}, {"id": "about", "label": "B", "icon": "y"}]"#,
        );
        assert!(matches!(
            Portfolio::parse(&raw),
            Err(ContentError::DuplicateLink(id)) if id == "about"
        ));
    }

    #[test]
    fn test_malformed_json_is_reported() {
        let err = Portfolio::parse("{").unwrap_err();
        assert!(matches!(err, ContentError::Malformed(_)));
        assert!(err.to_string().starts_with("malformed portfolio content"));
    }
}
