//! UpgradeSession - book counts owned by one calculator session

use super::item::UpgradeItem;
use crate::config::BookCatalog;
use crate::error::CalcError;
use serde::{Deserialize, Serialize};

/// Outcome of changing a book count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Increment {
    /// The count changed (or stayed at zero on a decrement)
    Applied { count: u32, level: u32 },
    /// The change would have exceeded the level cap; nothing changed
    Rejected { attempted_level: u32, max_level: u32 },
}

impl Increment {
    pub fn is_applied(&self) -> bool {
        matches!(self, Increment::Applied { .. })
    }
}

/// Mutable book counts for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeSession {
    items: Vec<UpgradeItem>,
    max_level: u32,
}

impl UpgradeSession {
    /// A session with every book at zero
    pub fn new(catalog: &BookCatalog, max_level: u32) -> Self {
        UpgradeSession {
            items: catalog.books.iter().map(UpgradeItem::from_definition).collect(),
            max_level,
        }
    }

    pub fn items(&self) -> &[UpgradeItem] {
        &self.items
    }

    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    /// Current uncapped total level
    pub fn level(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, item| acc.saturating_add(item.level()))
    }

    /// Count of one book
    pub fn count(&self, id: &str) -> Option<u32> {
        self.items.iter().find(|i| i.id == id).map(|i| i.count)
    }

    /// Add `delta` books of `id` (negative to remove).
    ///
    /// Counts never drop below zero. An increment that would push the total
    /// level past the cap is rejected and leaves the session untouched.
    pub fn increment(&mut self, id: &str, delta: i64) -> Result<Increment, CalcError> {
        let index = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| CalcError::UnknownBook(id.to_string()))?;

        let item = &self.items[index];
        let new_count = i64::from(item.count)
            .saturating_add(delta)
            .clamp(0, i64::from(u32::MAX)) as u32;
        let other_levels = self.level() - item.level();
        let attempted_level =
            other_levels.saturating_add(item.unit_level.saturating_mul(new_count));

        if attempted_level > self.max_level && new_count > item.count {
            tracing::debug!(
                book = id,
                attempted_level,
                max_level = self.max_level,
                "rejected upgrade increment above level cap"
            );
            return Ok(Increment::Rejected {
                attempted_level,
                max_level: self.max_level,
            });
        }

        self.items[index].count = new_count;
        tracing::trace!(
            book = id,
            count = new_count,
            level = attempted_level,
            "book count changed"
        );
        Ok(Increment::Applied {
            count: new_count,
            level: attempted_level,
        })
    }

    /// Set every count back to zero
    pub fn reset(&mut self) {
        for item in &mut self.items {
            item.count = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_books;

    fn session() -> UpgradeSession {
        UpgradeSession::new(&default_books(), 306)
    }

    #[test]
    fn test_new_session_is_empty() {
        let s = session();
        assert_eq!(s.items().len(), 4);
        assert_eq!(s.level(), 0);
        assert_eq!(s.count("green"), Some(0));
    }

    #[test]
    fn test_add_then_remove() {
        let mut s = session();
        assert!(s.increment("green", 1).unwrap().is_applied());
        assert_eq!(s.level(), 1);
        assert!(s.increment("green", -1).unwrap().is_applied());
        assert_eq!(s.level(), 0);
        assert_eq!(s.count("green"), Some(0));
    }

    #[test]
    fn test_count_never_negative() {
        let mut s = session();
        let outcome = s.increment("blue", -3).unwrap();
        assert_eq!(outcome, Increment::Applied { count: 0, level: 0 });
        assert_eq!(s.count("blue"), Some(0));
    }

    #[test]
    fn test_increment_to_exact_cap() {
        // 17 legendary = 306
        let mut s = session();
        let outcome = s.increment("legendary", 17).unwrap();
        assert_eq!(outcome, Increment::Applied { count: 17, level: 306 });
    }

    #[test]
    fn test_increment_past_cap_rejected() {
        let mut s = session();
        s.increment("legendary", 17).unwrap();
        let before = s.clone();

        let outcome = s.increment("green", 1).unwrap();
        assert_eq!(
            outcome,
            Increment::Rejected { attempted_level: 307, max_level: 306 }
        );
        assert_eq!(s, before);

        // Rejecting again is still a no-op
        assert!(!s.increment("green", 1).unwrap().is_applied());
        assert_eq!(s, before);
    }

    #[test]
    fn test_huge_delta_rejected_without_overflow() {
        let mut s = session();
        s.increment("green", 1).unwrap();
        let before = s.clone();

        let outcome = s.increment("green", i64::MAX).unwrap();
        assert!(matches!(outcome, Increment::Rejected { max_level: 306, .. }));
        assert_eq!(s, before);

        assert!(s.increment("green", i64::MIN).unwrap().is_applied());
        assert_eq!(s.count("green"), Some(0));
    }

    #[test]
    fn test_decrement_allowed_at_cap() {
        let mut s = session();
        s.increment("legendary", 17).unwrap();
        assert!(s.increment("legendary", -1).unwrap().is_applied());
        assert_eq!(s.level(), 288);
    }

    #[test]
    fn test_unknown_book() {
        let mut s = session();
        assert_eq!(
            s.increment("red", 1),
            Err(CalcError::UnknownBook("red".to_string()))
        );
    }

    #[test]
    fn test_reset() {
        let mut s = session();
        s.increment("purple", 3).unwrap();
        s.reset();
        assert_eq!(s.level(), 0);
    }
}
