mod intent;
mod reducer;
mod render;
mod state;

pub use intent::PickerIntent;
pub use reducer::{PickerReducer, PAGE_SIZE};
pub use render::render_picker;
pub use state::{PickerState, MAX_VISIBLE_ROWS};
