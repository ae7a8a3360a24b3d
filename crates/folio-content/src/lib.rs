//! Portfolio content -- the static tables the terminal commands render.
//!
//! Content is a TOML document embedded at compile time. A host may swap it
//! for an external file; either way it is parsed and validated once and is
//! read-only afterwards.

mod model;
mod search;
mod section;

pub use model::{Experience, Portfolio, Profile, Project, Skill};
pub use search::SearchResults;
pub use section::Section;

use std::path::Path;

use folio_types::error::Result;

/// The embedded portfolio document.
pub const BUILTIN_CONTENT: &str = include_str!("../../../content/portfolio.toml");

/// Load content from `path`, or the embedded document when `path` is `None`.
///
/// A file that fails to load falls back to the embedded content with a
/// warning; only a broken embedded document is an error.
pub fn resolve_content(path: Option<&Path>) -> Result<Portfolio> {
    if let Some(path) = path {
        match Portfolio::load(path) {
            Ok(portfolio) => return Ok(portfolio),
            Err(e) => {
                log::warn!(
                    "Content '{}' unusable ({e}) -- falling back to built-in content",
                    path.display()
                );
            },
        }
    }
    Portfolio::builtin()
}
