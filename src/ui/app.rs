use tracing::{debug, info};

use crate::settings::{FieldValue, Settings, SettingsField, SettingsStore};
use crate::ui::mvi::Reducer;
use crate::ui::picker::{PickerIntent, PickerState};
use crate::ui::settings::{DialogFocus, SettingsDialogState, SettingsIntent, SettingsReducer};
use crate::ui::trigger::TriggerButton;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Application state and dialog controller.
///
/// Owns the committed settings, the dialog (and with it the draft), and the
/// memoized trigger button. Every mutation runs on the UI thread from a
/// single input event.
pub struct App {
    should_quit: bool,
    store: SettingsStore,
    /// State of the settings dialog (MVI pattern). Holds the draft while visible.
    dialog: SettingsDialogState,
    trigger: TriggerButton,
}

impl App {
    pub fn new(initial: Settings) -> Self {
        Self {
            should_quit: false,
            store: SettingsStore::new(initial),
            dialog: SettingsDialogState::default(),
            trigger: TriggerButton::new(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// The last-committed selection.
    pub fn settings(&self) -> &Settings {
        self.store.get()
    }

    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    pub fn dialog(&self) -> &SettingsDialogState {
        &self.dialog
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog.is_visible()
    }

    pub fn is_picker_open(&self) -> bool {
        self.dialog.picker().is_some()
    }

    pub fn picker(&self) -> Option<&PickerState> {
        self.dialog.picker()
    }

    pub fn trigger(&self) -> &TriggerButton {
        &self.trigger
    }

    /// Render pass for the trigger button. Cheap unless settings were committed.
    pub fn render_trigger(&mut self) -> &str {
        self.trigger.render(&self.store)
    }

    // ========================================================================
    // Dialog controller
    // ========================================================================

    /// Show the dialog with a draft copied from the committed settings.
    pub fn open_dialog(&mut self) {
        let committed = self.store.get().clone();
        self.dispatch_settings(SettingsIntent::Open { committed });
    }

    /// Commit the draft if any field differs, then close.
    pub fn save_dialog(&mut self) {
        let Some(draft) = self.dialog.draft().cloned() else {
            return;
        };
        if !self.store.commit(draft) {
            debug!("save without changes");
        }
        self.dispatch_settings(SettingsIntent::Close);
    }

    /// Drop the draft and close. Committed settings are untouched.
    pub fn cancel_dialog(&mut self) {
        if self.dialog.is_dirty() {
            info!(fields = ?self.dialog.dirty_fields(), "draft discarded");
        }
        self.dispatch_settings(SettingsIntent::Close);
    }

    /// Escape: asks for confirmation once if the draft has changes.
    pub fn request_close_dialog(&mut self) {
        self.dispatch_settings(SettingsIntent::RequestClose);
    }

    pub fn focus_next(&mut self) {
        self.dispatch_settings(SettingsIntent::FocusNext);
    }

    pub fn focus_prev(&mut self) {
        self.dispatch_settings(SettingsIntent::FocusPrev);
    }

    /// Enter on the focused row: open its picker, save, or cancel.
    pub fn activate_focused(&mut self) {
        match self.dialog.focus() {
            Some(DialogFocus::Field(_)) => self.dispatch_settings(SettingsIntent::OpenPicker),
            Some(DialogFocus::Save) => self.save_dialog(),
            Some(DialogFocus::Cancel) => self.cancel_dialog(),
            None => {}
        }
    }

    // ========================================================================
    // Field pickers: current value in, change callback out
    // ========================================================================

    /// Value a picker for `field` displays: the draft's, while the dialog is open.
    pub fn picker_current(&self, field: SettingsField) -> Option<FieldValue> {
        self.dialog.draft().map(|draft| draft.get(field))
    }

    /// Picker change callback. Writes the draft only, never the committed settings.
    pub fn on_picker_change(&mut self, value: FieldValue) {
        self.dispatch_settings(SettingsIntent::Change(value));
    }

    pub fn picker_input(&mut self, intent: PickerIntent) {
        self.dispatch_settings(SettingsIntent::Picker(intent));
    }

    pub fn picker_select(&mut self) {
        self.dispatch_settings(SettingsIntent::SelectHighlighted);
    }

    pub fn close_picker(&mut self) {
        self.dispatch_settings(SettingsIntent::ClosePicker);
    }

    /// Dispatch an intent to the settings dialog reducer.
    fn dispatch_settings(&mut self, intent: SettingsIntent) {
        dispatch_mvi!(self, dialog, SettingsReducer, intent);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activate_on_field_opens_picker() {
        let mut app = App::default();
        app.open_dialog();
        app.activate_focused();
        assert_eq!(app.picker().map(|p| p.field), Some(SettingsField::Country));
    }

    #[test]
    fn activate_on_cancel_closes_without_commit() {
        let mut app = App::default();
        app.open_dialog();
        app.on_picker_change(FieldValue::Language("fr".into()));
        app.focus_prev(); // wraps to Cancel
        app.activate_focused();
        assert!(!app.is_dialog_open());
        assert_eq!(app.settings().language, "en");
    }

    #[test]
    fn activate_on_save_commits() {
        let mut app = App::default();
        app.open_dialog();
        app.on_picker_change(FieldValue::Language("fr".into()));
        for _ in 0..3 {
            app.focus_next();
        }
        app.activate_focused();
        assert!(!app.is_dialog_open());
        assert_eq!(app.settings().language, "fr");
    }

    #[test]
    fn picker_current_is_none_while_hidden() {
        let app = App::default();
        assert!(app.picker_current(SettingsField::Currency).is_none());
    }

    #[test]
    fn save_while_hidden_is_noop() {
        let mut app = App::default();
        app.save_dialog();
        app.cancel_dialog();
        assert!(!app.is_dialog_open());
        assert_eq!(app.store().revision(), 0);
    }
}
