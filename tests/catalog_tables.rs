use region_selector::catalog::{self, find_country, find_currency, find_language};
use region_selector::settings::SettingsField;

#[test]
fn test_tables_cover_full_iso_lists() {
    // ISO 3166-1 assigned alpha-2 codes, ISO 639-1 codes.
    assert_eq!(catalog::options(SettingsField::Country).len(), 249);
    assert_eq!(catalog::options(SettingsField::Language).len(), 183);
    // ISO 4217 list one, including funds, precious metals and XTS/XXX.
    assert_eq!(catalog::options(SettingsField::Currency).len(), 180);
}

#[test]
fn test_every_region_is_selectable() {
    for code in ["PK", "BD", "RU", "KZ", "CU", "GH", "AQ", "AX", "SS"] {
        assert!(find_country(code).is_some(), "missing country {code}");
    }
    for code in ["RUB", "PKR", "BDT", "GHS", "KZT", "CUP", "XAU"] {
        assert!(find_currency(code).is_some(), "missing currency {code}");
    }
    for code in ["ur", "bn", "kk", "yo", "zu"] {
        assert!(find_language(code).is_some(), "missing language {code}");
    }
}

#[test]
fn test_country_names_are_common_official_names() {
    let name = |code: &str| find_country(code).map(|country| country.name);
    assert_eq!(name("DE").as_deref(), Some("Germany"));
    assert_eq!(name("ES").as_deref(), Some("Spain"));
    assert_eq!(name("FR").as_deref(), Some("France"));
    assert_eq!(name("US").as_deref(), Some("United States of America"));
    assert_eq!(name("RU").as_deref(), Some("Russian Federation"));
}

#[test]
fn test_currency_labels_use_iso_names() {
    assert_eq!(find_currency("rub").as_deref(), Some("RUB - Russian Ruble"));
    assert_eq!(find_currency("GBP").as_deref(), Some("GBP - Pound Sterling"));
    assert_eq!(find_currency("JPY - Yen").as_deref(), Some("JPY - Yen"));
}
