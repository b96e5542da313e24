//! Shared test helpers.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use region_selector::catalog::{self, Country};
use region_selector::settings::{FieldValue, Settings};
use region_selector::ui::App;

/// {US, "USD - US Dollar", en}
pub fn initial_settings() -> Settings {
    Settings {
        country: Country::new("US", "United States of America"),
        currency: "USD - US Dollar".to_string(),
        language: "en".to_string(),
    }
}

/// App after its first frame, the way the runtime leaves it.
pub fn make_app() -> App {
    let mut app = App::new(initial_settings());
    app.render_trigger();
    app
}

pub fn country(code: &str) -> FieldValue {
    FieldValue::Country(catalog::find_country(code).expect("country in catalog"))
}

pub fn currency(code: &str) -> FieldValue {
    FieldValue::Currency(catalog::find_currency(code).expect("currency in catalog"))
}

pub fn language(code: &str) -> FieldValue {
    FieldValue::Language(catalog::find_language(code).expect("language in catalog"))
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}
