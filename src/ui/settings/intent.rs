use crate::settings::{FieldValue, Settings};
use crate::ui::mvi::Intent;
use crate::ui::picker::PickerIntent;

#[derive(Debug, Clone)]
pub enum SettingsIntent {
    /// Show the dialog with a fresh draft copied from `committed`.
    Open { committed: Settings },
    /// Hide the dialog and drop the draft.
    Close,
    /// User pressed Escape. If dirty and not yet confirming, sets confirm_discard flag.
    /// If clean or already confirming, transitions to Hidden.
    RequestClose,
    /// Picker change callback: write one field of the draft.
    Change(FieldValue),
    FocusNext,
    FocusPrev,
    /// Open the select list for the focused field. No-op on the button rows.
    OpenPicker,
    ClosePicker,
    /// Write the picker's highlighted option into the draft and close it.
    SelectHighlighted,
    Picker(PickerIntent),
}

impl Intent for SettingsIntent {}
