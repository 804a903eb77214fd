//! Country preference resolution

use phonerecall::{
    detect_country_from_locale, find_country, flag_for, list_countries, CountryPreference,
    KvBackend, RecallConfig, FALLBACK_COUNTRY,
};

use super::*;

const COUNTRY_KEY: &str = "memory-phonenumbers-country";

#[test]
fn falls_back_stored_then_locale_then_default() {
    let backend = Arc::new(MemoryBackend::new());
    let pref = CountryPreference::with_locale(
        Arc::clone(&backend),
        COUNTRY_KEY,
        detect_country_from_locale(None, Some("de_DE.UTF-8")),
        cc(FALLBACK_COUNTRY),
    );
    assert_eq!(pref.get(), cc("DE"));

    pref.set(cc("FR"));
    assert_eq!(pref.get(), cc("FR"));
    assert_eq!(backend.get(COUNTRY_KEY).unwrap().as_deref(), Some("FR"));

    backend.remove(COUNTRY_KEY).unwrap();
    let no_locale = CountryPreference::with_locale(
        Arc::clone(&backend),
        COUNTRY_KEY,
        detect_country_from_locale(Some("C"), None),
        cc(FALLBACK_COUNTRY),
    );
    assert_eq!(no_locale.get(), cc("US"));
}

#[test]
fn configured_default_country_is_used() {
    let config = RecallConfig {
        default_country: "ch".to_string(),
        ..RecallConfig::default()
    };
    assert_eq!(config.fallback_country().unwrap(), cc("CH"));
}

#[test]
fn country_list_is_sorted_and_complete() {
    let countries = list_countries();
    assert!(countries.len() > 200);
    assert!(countries.iter().any(|c| c.code == cc("FR") && c.name == "France"));
    for info in countries {
        assert_eq!(info.flag, flag_for(info.code.as_str()));
        assert_eq!(find_country(info.code), info);
    }
}

#[test]
fn country_code_rejects_unknown() {
    assert!(CountryCode::parse("XX").is_err());
    assert_eq!(CountryCode::parse("fr").unwrap(), cc("FR"));
}
