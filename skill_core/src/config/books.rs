//! Upgrade book catalog loading

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One kind of upgrade book as listed in game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDefinition {
    pub id: String,
    pub name: String,
    /// Grandmaster levels granted per book
    pub unit_level: u32,
    /// Listed damage bonus per book, in percent
    pub unit_percent: f64,
}

/// Container for the book catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookCatalog {
    pub books: Vec<BookDefinition>,
}

impl BookCatalog {
    /// Find a book by id
    pub fn get(&self, id: &str) -> Option<&BookDefinition> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.books.is_empty() {
            return Err(ConfigError::ValidationError(
                "book catalog is empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for book in &self.books {
            if !seen.insert(book.id.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate book id '{}'",
                    book.id
                )));
            }
            if book.unit_level == 0 {
                return Err(ConfigError::ValidationError(format!(
                    "book '{}' has a unit level of 0",
                    book.id
                )));
            }
            if !(book.unit_percent.is_finite() && book.unit_percent >= 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "book '{}' has an invalid unit percent {}",
                    book.id, book.unit_percent
                )));
            }
        }
        Ok(())
    }
}

/// Parse a book catalog from a TOML string
pub fn parse_book_catalog(content: &str) -> Result<BookCatalog, ConfigError> {
    let catalog: BookCatalog = super::parse_toml(content)?;
    catalog.validate()?;
    Ok(catalog)
}

/// The four books shipped with the game
pub fn default_books() -> BookCatalog {
    let toml = include_str!("../../config/books.toml");
    parse_book_catalog(toml).unwrap_or_else(|_| BookCatalog {
        books: vec![
            book("green", "Green Book", 1, 1.90),
            book("blue", "Blue Book", 2, 3.80),
            book("purple", "Purple Book", 6, 11.40),
            book("legendary", "Legendary Book", 18, 33.0),
        ],
    })
}

fn book(id: &str, name: &str, unit_level: u32, unit_percent: f64) -> BookDefinition {
    BookDefinition {
        id: id.to_string(),
        name: name.to_string(),
        unit_level,
        unit_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_books_loads_all() {
        let catalog = default_books();
        assert_eq!(catalog.books.len(), 4);

        let levels: Vec<u32> = catalog.books.iter().map(|b| b.unit_level).collect();
        assert_eq!(levels, vec![1, 2, 6, 18]);

        let legendary = catalog.get("legendary").unwrap();
        assert_eq!(legendary.name, "Legendary Book");
        assert!((legendary.unit_percent - 33.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_rejects_duplicate_ids() {
        let toml = r#"
[[books]]
id = "green"
name = "Green Book"
unit_level = 1
unit_percent = 1.9

[[books]]
id = "green"
name = "Another Green Book"
unit_level = 1
unit_percent = 1.9
"#;
        assert!(matches!(
            parse_book_catalog(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_parse_rejects_zero_level() {
        let toml = r#"
[[books]]
id = "dud"
name = "Dud"
unit_level = 0
unit_percent = 0.0
"#;
        assert!(parse_book_catalog(toml).is_err());
    }
}
