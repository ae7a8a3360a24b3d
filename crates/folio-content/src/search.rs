//! Case-insensitive substring search over skills and projects.

use crate::model::{Portfolio, Project, Skill};

/// Matches for one search term.
#[derive(Debug, Default)]
pub struct SearchResults<'a> {
    pub skills: Vec<&'a Skill>,
    pub projects: Vec<&'a Project>,
}

impl SearchResults<'_> {
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty() && self.projects.is_empty()
    }

    pub fn len(&self) -> usize {
        self.skills.len() + self.projects.len()
    }
}

impl Portfolio {
    /// Find skills whose name or category, and projects whose title,
    /// description, or technologies contain `term` (case-insensitive).
    ///
    /// A blank term matches nothing.
    pub fn search(&self, term: &str) -> SearchResults<'_> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return SearchResults::default();
        }
        let hit = |text: &str| text.to_lowercase().contains(&needle);

        let skills = self
            .skills
            .iter()
            .filter(|s| hit(&s.name) || hit(&s.category))
            .collect();
        let projects = self
            .projects
            .iter()
            .filter(|p| {
                hit(&p.title) || hit(&p.description) || p.technologies.iter().any(|t| hit(t))
            })
            .collect();
        SearchResults { skills, projects }
    }
}
