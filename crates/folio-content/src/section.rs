//! Page sections the `nav` command may scroll to.

use std::str::FromStr;

use folio_types::error::FolioError;

/// An in-page anchor. The set is closed; anything else is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl Section {
    /// Every section in page order.
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Contact,
    ];

    /// Section identifier as typed by the user.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// In-page anchor, e.g. `#projects`.
    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }

    /// Comma-separated list of valid identifiers.
    pub fn valid_ids() -> String {
        Self::ALL.map(Section::id).join(", ")
    }
}

impl FromStr for Section {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().trim_start_matches('#').to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|section| section.id() == lower)
            .ok_or_else(|| {
                FolioError::Usage(format!(
                    "nav <section> -- unknown section '{s}' (valid: {})",
                    Self::valid_ids()
                ))
            })
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
