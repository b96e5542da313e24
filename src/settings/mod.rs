//! Committed user selection and the field vocabulary shared by the dialog,
//! the pickers and the trigger button.

mod store;

pub use store::SettingsStore;

use serde::{Deserialize, Serialize};

use crate::catalog::Country;

/// The three fields a user can edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsField {
    Country,
    Currency,
    Language,
}

impl SettingsField {
    /// All fields in dialog order.
    pub const ALL: [SettingsField; 3] = [Self::Country, Self::Currency, Self::Language];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Country => "Country",
            Self::Currency => "Currency",
            Self::Language => "Language",
        }
    }
}

/// A value produced by a picker's change callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Country(Country),
    /// Currency label, e.g. `"EUR - Euro"`.
    Currency(String),
    /// ISO 639-1 code, e.g. `"en"`.
    Language(String),
}

impl FieldValue {
    pub fn field(&self) -> SettingsField {
        match self {
            Self::Country(_) => SettingsField::Country,
            Self::Currency(_) => SettingsField::Currency,
            Self::Language(_) => SettingsField::Language,
        }
    }

    /// Short code identifying the value inside its catalog.
    pub fn code(&self) -> &str {
        match self {
            Self::Country(country) => &country.code,
            Self::Currency(label) => label.split(" - ").next().unwrap_or(label),
            Self::Language(code) => code,
        }
    }
}

/// A fully populated selection. Used both for the committed settings and for
/// the dialog's draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub country: Country,
    pub currency: String,
    pub language: String,
}

impl Default for Settings {
    /// Built-in fallback used when no defaults are configured.
    fn default() -> Self {
        Self {
            country: Country::new("US", "United States of America"),
            currency: "USD - US Dollar".to_string(),
            language: "en".to_string(),
        }
    }
}

impl Settings {
    /// Current value of a single field.
    pub fn get(&self, field: SettingsField) -> FieldValue {
        match field {
            SettingsField::Country => FieldValue::Country(self.country.clone()),
            SettingsField::Currency => FieldValue::Currency(self.currency.clone()),
            SettingsField::Language => FieldValue::Language(self.language.clone()),
        }
    }

    /// Write one field. The other two are untouched.
    pub fn set(&mut self, value: FieldValue) {
        match value {
            FieldValue::Country(country) => self.country = country,
            FieldValue::Currency(currency) => self.currency = currency,
            FieldValue::Language(language) => self.language = language,
        }
    }

    /// Fields whose values differ, compared structurally one by one.
    pub fn changed_fields(&self, other: &Settings) -> Vec<SettingsField> {
        SettingsField::ALL
            .into_iter()
            .filter(|field| match field {
                SettingsField::Country => self.country != other.country,
                SettingsField::Currency => self.currency != other.currency,
                SettingsField::Language => self.language != other.language,
            })
            .collect()
    }

    /// Text shown on the trigger button.
    pub fn summary(&self) -> String {
        format!(
            "{} - ({} - {})",
            self.country.name, self.currency, self.language
        )
    }

    /// Display text for one field inside the dialog.
    pub fn display(&self, field: SettingsField) -> String {
        match field {
            SettingsField::Country => self.country.name.clone(),
            SettingsField::Currency => self.currency.clone(),
            SettingsField::Language => match crate::catalog::language_name(&self.language) {
                Some(name) => format!("{} - {}", self.language, name),
                None => self.language.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_fully_populated() {
        let settings = Settings::default();
        assert_eq!(settings.country.code, "US");
        assert_eq!(settings.currency, "USD - US Dollar");
        assert_eq!(settings.language, "en");
    }

    #[test]
    fn default_settings_exist_in_catalog() {
        let settings = Settings::default();
        assert_eq!(
            crate::catalog::find_country(&settings.country.code),
            Some(settings.country.clone())
        );
        assert_eq!(
            crate::catalog::find_currency(&settings.currency),
            Some(settings.currency.clone())
        );
        assert_eq!(
            crate::catalog::find_language(&settings.language),
            Some(settings.language.clone())
        );
    }

    #[test]
    fn set_replaces_only_one_field() {
        let mut settings = Settings::default();
        settings.set(FieldValue::Currency("EUR - Euro".into()));
        assert_eq!(settings.currency, "EUR - Euro");
        assert_eq!(settings.country.code, "US");
        assert_eq!(settings.language, "en");
    }

    #[test]
    fn changed_fields_compares_country_structurally() {
        let a = Settings::default();
        let mut b = a.clone();
        assert!(a.changed_fields(&b).is_empty());

        // Same code, different name still counts as a change.
        b.country = Country::new("US", "USA");
        assert_eq!(a.changed_fields(&b), vec![SettingsField::Country]);

        b.language = "de".into();
        assert_eq!(
            a.changed_fields(&b),
            vec![SettingsField::Country, SettingsField::Language]
        );
    }

    #[test]
    fn summary_matches_button_format() {
        assert_eq!(
            Settings::default().summary(),
            "United States of America - (USD - US Dollar - en)"
        );
    }

    #[test]
    fn field_value_code() {
        assert_eq!(FieldValue::Currency("EUR - Euro".into()).code(), "EUR");
        assert_eq!(FieldValue::Language("fr".into()).code(), "fr");
        assert_eq!(
            FieldValue::Country(Country::new("DE", "Germany")).field(),
            SettingsField::Country
        );
    }
}
