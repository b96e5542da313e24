use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerIntent {
    /// Append a character to the search query.
    Input(char),
    /// Remove the last character of the search query.
    Backspace,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    Home,
    End,
}

impl Intent for PickerIntent {}
