//! The Gamma categories and the patterns this crate uses to illustrate them.
//!
//! The overview is plain configuration data: a TOML document embedded at
//! compile time, which can also be swapped for a file on disk.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{PatternError, Result};

const EMBEDDED_CATALOG: &str = include_str!("catalog.toml");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GammaCategory {
    Creational,
    Structural,
    Behavioral,
}

impl GammaCategory {
    pub const ALL: [GammaCategory; 3] = [
        GammaCategory::Creational,
        GammaCategory::Structural,
        GammaCategory::Behavioral,
    ];

    /// Position in [`GammaCategory::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for GammaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GammaCategory::Creational => "Creational",
            GammaCategory::Structural => "Structural",
            GammaCategory::Behavioral => "Behavioral",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PatternEntry {
    pub name: String,
    pub summary: String,
    /// Path of the module illustrating the pattern, relative to the crate root.
    pub module: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryEntry {
    pub category: GammaCategory,
    pub summary: String,
    #[serde(default)]
    pub points: Vec<String>,
    #[serde(default)]
    pub patterns: Vec<PatternEntry>,
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    categories: Vec<CategoryEntry>,
}

/// A validated catalog: each [`GammaCategory`] appears exactly once, stored
/// at its position in [`GammaCategory::ALL`].
///
/// Deserializing a `Catalog` directly goes through the same validation as
/// [`Catalog::from_toml_str`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawCatalog")]
pub struct Catalog {
    categories: [CategoryEntry; 3],
}

impl TryFrom<RawCatalog> for Catalog {
    type Error = PatternError;

    fn try_from(raw: RawCatalog) -> Result<Self> {
        let mut entries = raw.categories;
        let creational = take_category(&mut entries, GammaCategory::Creational)?;
        let structural = take_category(&mut entries, GammaCategory::Structural)?;
        let behavioral = take_category(&mut entries, GammaCategory::Behavioral)?;
        Ok(Catalog {
            categories: [creational, structural, behavioral],
        })
    }
}

fn take_category(
    entries: &mut Vec<CategoryEntry>,
    category: GammaCategory,
) -> Result<CategoryEntry> {
    let positions: Vec<usize> = entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.category == category)
        .map(|(pos, _)| pos)
        .collect();

    match positions.as_slice() {
        [] => Err(PatternError::MissingCategory(category)),
        [pos] => Ok(entries.remove(*pos)),
        _ => Err(PatternError::DuplicateCategory(category)),
    }
}

impl Catalog {
    /// The catalog shipped with the crate.
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_CATALOG)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        // Parse the raw form first so validation failures keep their own
        // error variants instead of becoming TOML errors.
        let raw: RawCatalog = toml::from_str(content)?;
        let catalog = Catalog::try_from(raw)?;
        debug!(
            categories = catalog.categories.len(),
            patterns = catalog.patterns().count(),
            "pattern catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|err| PatternError::io(path, err))?;
        Self::from_toml_str(&content)
    }

    pub fn categories(&self) -> &[CategoryEntry] {
        &self.categories
    }

    pub fn category(&self, category: GammaCategory) -> &CategoryEntry {
        &self.categories[category.index()]
    }

    /// Every pattern, paired with the category it belongs to.
    pub fn patterns(&self) -> impl Iterator<Item = (GammaCategory, &PatternEntry)> {
        self.categories.iter().flat_map(|entry| {
            entry
                .patterns
                .iter()
                .map(move |pattern| (entry.category, pattern))
        })
    }

    /// Case-insensitive lookup by pattern name.
    pub fn find_pattern(&self, name: &str) -> Option<(GammaCategory, &PatternEntry)> {
        self.patterns()
            .find(|(_, pattern)| pattern.name.eq_ignore_ascii_case(name.trim()))
    }
}
