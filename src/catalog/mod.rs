//! Static option tables backing the field pickers.
//!
//! The tables are fixed enumerations; pickers can only ever produce values
//! that appear here.

mod country;
mod currency;
mod language;

pub use country::Country;
pub use currency::currency_label;

use crate::settings::{FieldValue, SettingsField};

/// One selectable row in a picker.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerOption {
    pub value: FieldValue,
    pub label: String,
}

impl PickerOption {
    /// Case-insensitive substring match against the label and the value's code.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.label.to_lowercase().contains(&query) || self.value.code().to_lowercase() == query
    }
}

/// All options for a field, in display order.
pub fn options(field: SettingsField) -> Vec<PickerOption> {
    match field {
        SettingsField::Country => country::COUNTRIES
            .iter()
            .map(|(code, name)| PickerOption {
                value: FieldValue::Country(Country::new(*code, *name)),
                label: format!("{} ({})", name, code),
            })
            .collect(),
        SettingsField::Currency => currency::CURRENCIES
            .iter()
            .map(|(code, name)| {
                let label = currency_label(code, name);
                PickerOption {
                    value: FieldValue::Currency(label.clone()),
                    label,
                }
            })
            .collect(),
        SettingsField::Language => language::LANGUAGES
            .iter()
            .map(|(code, name)| PickerOption {
                value: FieldValue::Language(code.to_string()),
                label: format!("{} - {}", code, name),
            })
            .collect(),
    }
}

/// Look up a country by its alpha-2 code (case-insensitive).
pub fn find_country(code: &str) -> Option<Country> {
    country::COUNTRIES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code.trim()))
        .map(|(c, name)| Country::new(*c, *name))
}

/// Resolve a currency given either its code (`"EUR"`) or its full label
/// (`"EUR - Euro"`). Returns the canonical label.
pub fn find_currency(code_or_label: &str) -> Option<String> {
    let wanted = code_or_label.trim();
    let code = wanted.split(" - ").next().unwrap_or(wanted).trim();
    currency::CURRENCIES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(c, name)| currency_label(c, name))
}

/// Resolve a language code (case-insensitive) to its canonical lowercase form.
pub fn find_language(code: &str) -> Option<String> {
    language::LANGUAGES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code.trim()))
        .map(|(c, _)| c.to_string())
}

pub fn language_name(code: &str) -> Option<&'static str> {
    language::LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}
