use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::GammaCategory;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Failed to parse pattern catalog: {0}")]
    CatalogParse(#[from] toml::de::Error),

    #[error("Pattern catalog is missing the {0} category")]
    MissingCategory(GammaCategory),

    #[error("Pattern catalog lists the {0} category more than once")]
    DuplicateCategory(GammaCategory),

    #[error("Unknown drink: '{0}'")]
    UnknownDrink(String),

    #[error("Drink index {index} is out of range (0-{})", .available.saturating_sub(1))]
    DrinkIndexOutOfRange { index: usize, available: usize },

    #[error("Journal entry {index} is out of range (journal has {len} entries)")]
    EntryOutOfRange { index: usize, len: usize },

    #[error("{device} does not support {operation}")]
    Unsupported {
        device: &'static str,
        operation: &'static str,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PatternError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn unsupported(device: &'static str, operation: &'static str) -> Self {
        Self::Unsupported { device, operation }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drink_index_message_shows_valid_range() {
        let err = PatternError::DrinkIndexOutOfRange {
            index: 5,
            available: 2,
        };
        assert_eq!(err.to_string(), "Drink index 5 is out of range (0-1)");
    }

    #[test]
    fn test_io_error_names_path() {
        let err = PatternError::io(
            "journal.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(err.to_string(), "I/O error on journal.txt: missing");
    }
}
