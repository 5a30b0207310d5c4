//! Configuration loading from TOML files

mod books;
mod constants;
mod grandmaster;

pub use books::{default_books, parse_book_catalog, BookCatalog, BookDefinition};
pub use constants::{
    BonusPolicy, CritConstants, CritDamageConstants, CritScaleConstants, FormulaConstants,
    NonCritModel, SecondaryConstants, SmoothScaleConstants, UpgradeConstants,
};
pub use grandmaster::{default_grandmaster_table, GrandmasterTable};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

const CONSTANTS_FILE: &str = "constants.toml";
const BOOKS_FILE: &str = "books.toml";
const GRANDMASTER_FILE: &str = "grandmaster.toml";

/// Everything the engine needs, loaded once and never mutated
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub constants: FormulaConstants,
    pub books: BookCatalog,
    pub grandmaster: GrandmasterTable,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            constants: FormulaConstants::default(),
            books: default_books(),
            grandmaster: default_grandmaster_table(),
        }
    }
}

impl EngineConfig {
    /// Load a config directory.
    ///
    /// Each of `constants.toml`, `books.toml` and `grandmaster.toml` is
    /// optional; a missing file keeps the built-in default for that part.
    pub fn load_dir(dir: &Path) -> Result<Self, ConfigError> {
        let mut config = EngineConfig::default();

        let constants_path = dir.join(CONSTANTS_FILE);
        if constants_path.exists() {
            config.constants = load_toml(&constants_path)?;
        }

        let books_path = dir.join(BOOKS_FILE);
        if books_path.exists() {
            config.books = load_toml(&books_path)?;
        }

        let table_path = dir.join(GRANDMASTER_FILE);
        if table_path.exists() {
            config.grandmaster = load_toml(&table_path)?;
        }

        config.validate()?;
        tracing::info!(
            dir = %dir.display(),
            books = config.books.books.len(),
            max_level = config.grandmaster.max_level,
            "loaded engine config"
        );
        Ok(config)
    }

    /// Check cross-file invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.constants.validate()?;
        self.books.validate()?;
        self.grandmaster.validate()?;
        Ok(())
    }

    /// Maximum supported upgrade level
    pub fn max_level(&self) -> u32 {
        self.grandmaster.max_level
    }
}
