use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::parser;
use crate::state::dataset::Dataset;

/// What a session substitutes when parsing yields no values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmptyInputPolicy {
    /// Keep the explicit empty dataset.
    LeaveEmpty,
    /// Fall back to the built-in sample dataset.
    SampleData,
}

/// Session-scoped owner of the current dataset.
///
/// The dataset is replaced wholesale on every re-parse and never mutated in
/// place. Statistics are derived from it on demand and are not cached here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub dataset: Dataset,
    pub policy: EmptyInputPolicy,
}

impl Session {
    pub fn new(policy: EmptyInputPolicy) -> Self {
        let dataset = match policy {
            EmptyInputPolicy::LeaveEmpty => Dataset::new(),
            EmptyInputPolicy::SampleData => Dataset::sample(),
        };
        Self { dataset, policy }
    }

    /// Re-parse `raw` and replace the current dataset with the result,
    /// applying the empty-input policy when nothing parses.
    pub fn replace_from_text(&mut self, raw: &str) {
        let parsed = parser::parse_numbers(raw);
        self.dataset = if parsed.is_empty() && self.policy == EmptyInputPolicy::SampleData {
            Dataset::sample()
        } else {
            parsed
        };
    }

    /// Save the session to a JSON file.
    pub fn save_snapshot(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize session: {e}"))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to save session: {e}"))?;
        tracing::info!("Session saved to {:?}", path);
        Ok(())
    }

    /// Load a session from a JSON file.
    pub fn load_snapshot(path: &Path) -> Result<Self, String> {
        let json =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read file: {e}"))?;
        let session: Session =
            serde_json::from_str(&json).map_err(|e| format!("Failed to parse session: {e}"))?;
        tracing::info!("Session loaded from {:?}", path);
        Ok(session)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(EmptyInputPolicy::LeaveEmpty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replacement_is_wholesale() {
        let mut session = Session::new(EmptyInputPolicy::LeaveEmpty);
        session.replace_from_text("1\n2");
        session.replace_from_text("9");
        assert_eq!(session.dataset.values(), &[9.0]);
    }

    #[test]
    fn leave_empty_policy_keeps_the_empty_dataset() {
        let mut session = Session::new(EmptyInputPolicy::LeaveEmpty);
        assert!(session.dataset.is_empty());
        session.replace_from_text("not a number\n");
        assert!(session.dataset.is_empty());
    }

    #[test]
    fn sample_policy_substitutes_on_an_empty_parse() {
        let mut session = Session::new(EmptyInputPolicy::SampleData);
        assert_eq!(session.dataset.len(), 20);

        session.replace_from_text("junk\n");
        assert_eq!(session.dataset.values(), Dataset::sample().values());

        session.replace_from_text("4");
        assert_eq!(session.dataset.values(), &[4.0]);
    }

    #[test]
    fn snapshot_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut session = Session::new(EmptyInputPolicy::SampleData);
        session.replace_from_text("1\n2\n3");
        session.save_snapshot(&path).unwrap();

        let loaded = Session::load_snapshot(&path).unwrap();
        assert_eq!(loaded.dataset, session.dataset);
        assert_eq!(loaded.policy, session.policy);
    }

    #[test]
    fn loading_a_missing_snapshot_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Session::load_snapshot(&dir.path().join("absent.json")).is_err());
    }
}
