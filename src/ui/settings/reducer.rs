use tracing::debug;

use crate::ui::mvi::Reducer;
use crate::ui::picker::{PickerReducer, PickerState};
use crate::ui::settings::intent::SettingsIntent;
use crate::ui::settings::state::{DialogFocus, SettingsDialogState};

pub struct SettingsReducer;

impl Reducer for SettingsReducer {
    type State = SettingsDialogState;
    type Intent = SettingsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SettingsIntent::Open { committed } => {
                debug!("settings dialog opened");
                SettingsDialogState::Visible {
                    draft: committed.clone(),
                    committed,
                    focus: DialogFocus::ORDER[0],
                    picker: None,
                    confirm_discard: false,
                }
            }
            SettingsIntent::Close => SettingsDialogState::Hidden,
            SettingsIntent::RequestClose => {
                let dirty = state.is_dirty();
                match state {
                    SettingsDialogState::Visible {
                        committed,
                        draft,
                        focus,
                        picker,
                        confirm_discard: false,
                    } if dirty => {
                        // First Escape with unsaved changes: ask for confirmation
                        SettingsDialogState::Visible {
                            committed,
                            draft,
                            focus,
                            picker,
                            confirm_discard: true,
                        }
                    }
                    _ => {
                        // Clean state or already confirming: close
                        SettingsDialogState::Hidden
                    }
                }
            }
            SettingsIntent::Change(value) => match state {
                SettingsDialogState::Visible {
                    committed,
                    mut draft,
                    focus,
                    picker,
                    ..
                } => {
                    debug!(field = ?value.field(), code = value.code(), "draft changed");
                    draft.set(value);
                    SettingsDialogState::Visible {
                        committed,
                        draft,
                        focus,
                        picker,
                        confirm_discard: false,
                    }
                }
                other => other,
            },
            SettingsIntent::FocusNext => move_focus(state, DialogFocus::next),
            SettingsIntent::FocusPrev => move_focus(state, DialogFocus::prev),
            SettingsIntent::OpenPicker => match state {
                SettingsDialogState::Visible {
                    committed,
                    draft,
                    focus: DialogFocus::Field(field),
                    ..
                } => {
                    let picker = PickerState::open(&draft.get(field));
                    SettingsDialogState::Visible {
                        committed,
                        draft,
                        focus: DialogFocus::Field(field),
                        picker: Some(picker),
                        confirm_discard: false,
                    }
                }
                other => other,
            },
            SettingsIntent::ClosePicker => match state {
                SettingsDialogState::Visible {
                    committed,
                    draft,
                    focus,
                    confirm_discard,
                    ..
                } => SettingsDialogState::Visible {
                    committed,
                    draft,
                    focus,
                    picker: None,
                    confirm_discard,
                },
                other => other,
            },
            SettingsIntent::SelectHighlighted => {
                let selected = state
                    .picker()
                    .and_then(|picker| picker.highlighted_option())
                    .map(|option| option.value.clone());
                match selected {
                    Some(value) => {
                        let state = Self::reduce(state, SettingsIntent::Change(value));
                        Self::reduce(state, SettingsIntent::ClosePicker)
                    }
                    None => state,
                }
            }
            SettingsIntent::Picker(picker_intent) => match state {
                SettingsDialogState::Visible {
                    committed,
                    draft,
                    focus,
                    picker: Some(picker),
                    confirm_discard,
                } => SettingsDialogState::Visible {
                    committed,
                    draft,
                    focus,
                    picker: Some(PickerReducer::reduce(picker, picker_intent)),
                    confirm_discard,
                },
                other => other,
            },
        }
    }
}

fn move_focus(
    state: SettingsDialogState,
    step: fn(DialogFocus) -> DialogFocus,
) -> SettingsDialogState {
    match state {
        SettingsDialogState::Visible {
            committed,
            draft,
            focus,
            picker: None,
            ..
        } => SettingsDialogState::Visible {
            committed,
            draft,
            focus: step(focus),
            picker: None,
            confirm_discard: false,
        },
        other => other,
    }
}
