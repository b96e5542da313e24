use crate::settings::{Settings, SettingsField};
use crate::ui::mvi::UiState;
use crate::ui::picker::PickerState;

/// Focusable rows of the dialog, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogFocus {
    Field(SettingsField),
    Save,
    Cancel,
}

impl DialogFocus {
    pub const ORDER: [DialogFocus; 5] = [
        Self::Field(SettingsField::Country),
        Self::Field(SettingsField::Currency),
        Self::Field(SettingsField::Language),
        Self::Save,
        Self::Cancel,
    ];

    fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SettingsDialogState {
    #[default]
    Hidden,
    Visible {
        /// Settings as they were when the dialog opened.
        committed: Settings,
        /// Tentative edits. Dropped on close, whether saved or not.
        draft: Settings,
        focus: DialogFocus,
        /// Open select list for one field, if any.
        picker: Option<PickerState>,
        /// When true, next Escape will discard changes. Set on first Escape when dirty.
        confirm_discard: bool,
    },
}

impl UiState for SettingsDialogState {}

impl SettingsDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn draft(&self) -> Option<&Settings> {
        match self {
            Self::Visible { draft, .. } => Some(draft),
            Self::Hidden => None,
        }
    }

    pub fn focus(&self) -> Option<DialogFocus> {
        match self {
            Self::Visible { focus, .. } => Some(*focus),
            Self::Hidden => None,
        }
    }

    pub fn picker(&self) -> Option<&PickerState> {
        match self {
            Self::Visible { picker, .. } => picker.as_ref(),
            Self::Hidden => None,
        }
    }

    /// Fields where the draft differs from what was committed at open time.
    pub fn dirty_fields(&self) -> Vec<SettingsField> {
        match self {
            Self::Visible {
                committed, draft, ..
            } => committed.changed_fields(draft),
            Self::Hidden => Vec::new(),
        }
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty_fields().is_empty()
    }

    pub fn confirm_discard(&self) -> bool {
        matches!(
            self,
            Self::Visible {
                confirm_discard: true,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_is_default() {
        assert_eq!(SettingsDialogState::default(), SettingsDialogState::Hidden);
        assert!(SettingsDialogState::Hidden.draft().is_none());
        assert!(!SettingsDialogState::Hidden.is_dirty());
    }

    #[test]
    fn focus_wraps_both_ways() {
        assert_eq!(DialogFocus::Cancel.next(), DialogFocus::Field(SettingsField::Country));
        assert_eq!(DialogFocus::Field(SettingsField::Country).prev(), DialogFocus::Cancel);
        assert_eq!(DialogFocus::Field(SettingsField::Language).next(), DialogFocus::Save);
    }
}
