//! Session persistence - form text and book counts as JSON

use serde::{Deserialize, Serialize};
use skill_core::{CalcError, InputForm, Increment, UpgradeSession};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to access session file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse session JSON: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Saved books exceed the Grandmaster cap (level {attempted_level} > {max_level})")]
    OverCap { attempted_level: u32, max_level: u32 },
    #[error(transparent)]
    Calc(#[from] CalcError),
}

/// What gets written to disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedSession {
    pub form: InputForm,
    /// Book id to count
    pub books: BTreeMap<String, u32>,
}

impl SavedSession {
    pub fn capture(form: &InputForm, session: &UpgradeSession) -> Self {
        SavedSession {
            form: form.clone(),
            books: session
                .items()
                .iter()
                .filter(|item| item.count > 0)
                .map(|item| (item.id.clone(), item.count))
                .collect(),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SessionError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        tracing::info!(path = %path.display(), "session saved");
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, SessionError> {
        let content = fs::read_to_string(path)?;
        let saved: SavedSession = serde_json::from_str(&content)?;
        tracing::info!(path = %path.display(), books = saved.books.len(), "session loaded");
        Ok(saved)
    }

    /// Apply saved counts to a fresh session, going through the level cap
    pub fn restore_books(&self, session: &mut UpgradeSession) -> Result<(), SessionError> {
        for (id, count) in &self.books {
            if let Increment::Rejected {
                attempted_level,
                max_level,
            } = session.increment(id, i64::from(*count))?
            {
                return Err(SessionError::OverCap {
                    attempted_level,
                    max_level,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skill_core::{DamageEngine, InputField};

    #[test]
    fn test_save_and_load() {
        let engine = DamageEngine::default();
        let mut session = engine.new_session();
        session.increment("purple", 2).unwrap();
        let mut form = InputForm::default();
        form.set(InputField::CritPoints, "1711");
        form.onrush_active = true;

        let path = std::env::temp_dir().join("skill_tui_session_roundtrip.json");
        SavedSession::capture(&form, &session).save(&path).unwrap();

        let loaded = SavedSession::load(&path).unwrap();
        assert_eq!(loaded.form, form);

        let mut restored = engine.new_session();
        loaded.restore_books(&mut restored).unwrap();
        assert_eq!(restored.count("purple"), Some(2));
        assert_eq!(restored.level(), 12);
    }

    #[test]
    fn test_restore_over_cap() {
        let engine = DamageEngine::default();
        let mut saved = SavedSession::default();
        saved.books.insert("legendary".to_string(), 18);

        let mut session = engine.new_session();
        assert!(matches!(
            saved.restore_books(&mut session),
            Err(SessionError::OverCap { attempted_level: 324, max_level: 306 })
        ));
        assert_eq!(session.level(), 0);
    }

    #[test]
    fn test_restore_unknown_book() {
        let engine = DamageEngine::default();
        let mut saved = SavedSession::default();
        saved.books.insert("red".to_string(), 1);

        let mut session = engine.new_session();
        assert!(matches!(
            saved.restore_books(&mut session),
            Err(SessionError::Calc(CalcError::UnknownBook(_)))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("skill_tui_no_such_session.json");
        let _ = std::fs::remove_file(&path);
        assert!(matches!(SavedSession::load(&path), Err(SessionError::IoError(_))));
    }
}
