//! Holder of the last-committed selection.

use tracing::{debug, info};

use crate::settings::Settings;

/// Committed settings plus a revision that only moves on a real change.
///
/// The settings are replaced wholesale on commit and never mutated in place.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    current: Settings,
    revision: u64,
}

impl SettingsStore {
    pub fn new(initial: Settings) -> Self {
        Self {
            current: initial,
            revision: 0,
        }
    }

    pub fn get(&self) -> &Settings {
        &self.current
    }

    /// Bumped once per commit that changed at least one field.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the committed settings with `draft` if any field differs.
    ///
    /// Returns `true` when the store changed.
    pub fn commit(&mut self, draft: Settings) -> bool {
        let changed = self.current.changed_fields(&draft);
        if changed.is_empty() {
            debug!("commit skipped: draft equals committed settings");
            return false;
        }
        info!(
            fields = ?changed,
            country = %draft.country.code,
            currency = %draft.currency,
            language = %draft.language,
            "settings committed"
        );
        self.current = draft;
        self.revision += 1;
        true
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_with_changes_bumps_revision() {
        let mut store = SettingsStore::default();
        let mut draft = store.get().clone();
        draft.language = "de".into();
        assert!(store.commit(draft));
        assert_eq!(store.get().language, "de");
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn commit_without_changes_keeps_revision() {
        let mut store = SettingsStore::default();
        let draft = store.get().clone();
        assert!(!store.commit(draft));
        assert_eq!(store.revision(), 0);
    }
}
