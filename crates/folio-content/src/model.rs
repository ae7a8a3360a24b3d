//! Portfolio data model.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;

use folio_types::error::{FolioError, Result};

/// The whole portfolio document.
#[derive(Debug, Clone, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
}

/// Biography and contact details.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub location: String,
    /// Paragraphs of biography.
    #[serde(default)]
    pub bio: Vec<String>,
    pub email: String,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub years_experience: u32,
    /// Open to new opportunities.
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub interests: Vec<String>,
}

/// A single skill.
#[derive(Debug, Clone, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: String,
    /// Proficiency, 0-100.
    #[serde(default)]
    pub level: u8,
}

/// A showcased project.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub featured: bool,
}

/// One position in the work history.
#[derive(Debug, Clone, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl Portfolio {
    /// Parse and validate a portfolio document.
    pub fn from_toml(text: &str) -> Result<Self> {
        let portfolio: Self = toml::from_str(text)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Load a portfolio document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let portfolio = Self::from_toml(&text)?;
        log::info!(
            "Loaded portfolio content from {} ({} skills, {} projects)",
            path.display(),
            portfolio.skills.len(),
            portfolio.projects.len(),
        );
        Ok(portfolio)
    }

    /// The embedded portfolio document.
    pub fn builtin() -> Result<Self> {
        Self::from_toml(crate::BUILTIN_CONTENT)
    }

    fn validate(&self) -> Result<()> {
        if self.profile.name.trim().is_empty() {
            return Err(FolioError::Content("profile.name is empty".to_string()));
        }
        if let Some(skill) = self.skills.iter().find(|s| s.level > 100) {
            return Err(FolioError::Content(format!(
                "skill '{}' has level {} (max 100)",
                skill.name, skill.level
            )));
        }
        if let Some(p) = self.projects.iter().find(|p| p.title.trim().is_empty()) {
            return Err(FolioError::Content(format!(
                "project with empty title: {}",
                p.description
            )));
        }
        Ok(())
    }

    /// Skill categories in first-seen order.
    pub fn skill_categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for skill in &self.skills {
            if !seen.contains(&skill.category.as_str()) {
                seen.push(skill.category.as_str());
            }
        }
        seen
    }

    /// Skills belonging to `category`.
    pub fn skills_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Skill> + 'a {
        self.skills.iter().filter(move |s| s.category == category)
    }

    /// Distinct technologies across projects and experience, sorted.
    pub fn technologies(&self) -> BTreeSet<&str> {
        self.projects
            .iter()
            .flat_map(|p| p.technologies.iter())
            .chain(self.experience.iter().flat_map(|e| e.technologies.iter()))
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [profile]
        name = "Test Person"
        title = "Engineer"
        email = "test@example.com"

        [[skills]]
        name = "Rust"
        category = "Languages"
        level = 90

        [[skills]]
        name = "Docker"
        category = "Tools"

        [[skills]]
        name = "Go"
        category = "Languages"

        [[projects]]
        title = "Thing"
        description = "Does a thing"
        technologies = ["Rust", "WASM"]

        [[experience]]
        role = "Dev"
        company = "Acme"
        period = "2020 - now"
        technologies = ["Rust", "Postgres"]
    "#;

    #[test]
    fn builtin_content_parses() {
        let p = Portfolio::builtin().unwrap();
        assert!(!p.profile.name.is_empty());
        assert!(!p.skills.is_empty());
        assert!(!p.projects.is_empty());
        assert!(!p.experience.is_empty());
    }

    #[test]
    fn minimal_document() {
        let p = Portfolio::from_toml(MINIMAL).unwrap();
        assert_eq!(p.profile.name, "Test Person");
        assert_eq!(p.skills.len(), 3);
        assert_eq!(p.skills[1].level, 0);
        assert!(!p.profile.available);
    }

    #[test]
    fn categories_in_first_seen_order() {
        let p = Portfolio::from_toml(MINIMAL).unwrap();
        assert_eq!(p.skill_categories(), vec!["Languages", "Tools"]);
        let langs: Vec<&str> = p.skills_in("Languages").map(|s| s.name.as_str()).collect();
        assert_eq!(langs, vec!["Rust", "Go"]);
    }

    #[test]
    fn technologies_are_distinct() {
        let p = Portfolio::from_toml(MINIMAL).unwrap();
        let techs: Vec<&str> = p.technologies().into_iter().collect();
        assert_eq!(techs, vec!["Postgres", "Rust", "WASM"]);
    }

    #[test]
    fn level_over_100_rejected() {
        let doc = MINIMAL.replace("level = 90", "level = 150");
        let err = Portfolio::from_toml(&doc).unwrap_err();
        assert!(format!("{err}").contains("Rust"));
    }

    #[test]
    fn empty_name_rejected() {
        let doc = MINIMAL.replace("Test Person", " ");
        assert!(Portfolio::from_toml(&doc).is_err());
    }

    #[test]
    fn missing_profile_rejected() {
        assert!(Portfolio::from_toml("[[skills]]\nname = \"x\"\ncategory = \"y\"").is_err());
    }

    #[test]
    fn resolve_falls_back_to_builtin() {
        let p = crate::resolve_content(Some(Path::new("/nonexistent/portfolio.toml"))).unwrap();
        assert_eq!(p.profile.name, Portfolio::builtin().unwrap().profile.name);
    }
}
