//! Presentation theme flag.

use serde::Deserialize;

/// The page-wide light/dark presentation flag.
///
/// Command bodies may read it, but never style output with concrete colors:
/// colors are resolved from semantic roles at render time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Whether this is the dark theme.
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dark => write!(f, "dark"),
            Self::Light => write!(f, "light"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_dark() {
        assert!(Theme::default().is_dark());
    }

    #[test]
    fn toggled_flips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn display_lowercase() {
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!(Theme::Light.to_string(), "light");
    }

    #[test]
    fn deserializes_from_lowercase() {
        #[derive(Deserialize)]
        struct Wrap {
            theme: Theme,
        }
        let w: Wrap = toml::from_str("theme = \"light\"").unwrap();
        assert_eq!(w.theme, Theme::Light);
    }
}
