use crate::ui::mvi::Reducer;
use crate::ui::picker::intent::PickerIntent;
use crate::ui::picker::state::PickerState;

/// Rows skipped by PageUp/PageDown.
pub const PAGE_SIZE: usize = 10;

pub struct PickerReducer;

impl Reducer for PickerReducer {
    type State = PickerState;
    type Intent = PickerIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PickerIntent::Input(ch) => {
                state.query.push(ch);
                state.highlighted = 0;
            }
            PickerIntent::Backspace => {
                if state.query.pop().is_some() {
                    state.highlighted = 0;
                }
            }
            PickerIntent::MoveUp => {
                let last = state.match_count().saturating_sub(1);
                state.highlighted = if state.highlighted == 0 {
                    last
                } else {
                    state.highlighted - 1
                };
            }
            PickerIntent::MoveDown => {
                state.highlighted = if state.highlighted + 1 >= state.match_count() {
                    0
                } else {
                    state.highlighted + 1
                };
            }
            PickerIntent::PageUp => {
                state.highlighted = state.highlighted.saturating_sub(PAGE_SIZE);
            }
            PickerIntent::PageDown => {
                let last = state.match_count().saturating_sub(1);
                state.highlighted = (state.highlighted + PAGE_SIZE).min(last);
            }
            PickerIntent::Home => state.highlighted = 0,
            PickerIntent::End => state.highlighted = state.match_count().saturating_sub(1),
        }
        state
    }
}
