use crate::catalog::{self, PickerOption};
use crate::settings::{FieldValue, SettingsField};
use crate::ui::mvi::UiState;

/// Rows of options shown at once.
pub const MAX_VISIBLE_ROWS: usize = 10;

/// An open select list for one field.
///
/// `highlighted` indexes into [`PickerState::filtered`], not into `options`.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerState {
    pub field: SettingsField,
    pub options: Vec<PickerOption>,
    pub query: String,
    pub highlighted: usize,
}

impl PickerState {
    /// Open the list for `current`'s field with `current` highlighted.
    pub fn open(current: &FieldValue) -> Self {
        let field = current.field();
        let options = catalog::options(field);
        let highlighted = options
            .iter()
            .position(|option| &option.value == current)
            .unwrap_or(0);
        Self {
            field,
            options,
            query: String::new(),
            highlighted,
        }
    }

    /// Options matching the current query, in catalog order.
    pub fn filtered(&self) -> Vec<&PickerOption> {
        self.options
            .iter()
            .filter(|option| option.matches(&self.query))
            .collect()
    }

    pub fn match_count(&self) -> usize {
        self.filtered().len()
    }

    /// The option Enter would select, if any matches.
    pub fn highlighted_option(&self) -> Option<&PickerOption> {
        self.filtered().get(self.highlighted).copied()
    }

    /// First filtered index to draw so that the highlight stays in view.
    pub fn scroll_offset(&self) -> usize {
        self.highlighted.saturating_sub(MAX_VISIBLE_ROWS.saturating_sub(1))
    }
}

impl Default for PickerState {
    /// Empty list. Exists for the `UiState` bound; never shown.
    fn default() -> Self {
        Self {
            field: SettingsField::Country,
            options: Vec::new(),
            query: String::new(),
            highlighted: 0,
        }
    }
}

impl UiState for PickerState {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn open_highlights_current_value() {
        let current = Settings::default().get(SettingsField::Currency);
        let picker = PickerState::open(&current);
        assert_eq!(picker.field, SettingsField::Currency);
        assert_eq!(
            picker.highlighted_option().map(|o| o.label.as_str()),
            Some("USD - US Dollar")
        );
    }

    #[test]
    fn unknown_current_value_highlights_first() {
        let picker = PickerState::open(&FieldValue::Language("xx".into()));
        assert_eq!(picker.highlighted, 0);
    }

    #[test]
    fn scroll_keeps_highlight_visible() {
        let mut picker = PickerState::open(&FieldValue::Language("ar".into()));
        assert_eq!(picker.scroll_offset(), 0);
        picker.highlighted = MAX_VISIBLE_ROWS + 3;
        assert_eq!(picker.scroll_offset(), 4);
    }
}
