mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_settings_dialog;
pub use intent::SettingsIntent;
pub use reducer::SettingsReducer;
pub use state::{DialogFocus, SettingsDialogState};
