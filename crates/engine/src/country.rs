//! Preferred dialing country
//!
//! The country selects how local numbers are read and which numbers are
//! rendered in national form. Resolution order:
//!
//! 1. the code stored under `<namespace>-country`
//! 2. the region of the process locale (`LC_ALL`, then `LANG`)
//! 3. the configured default (`US` unless overridden)
//!
//! Neither reading nor writing the preference can fail from the caller's
//! point of view: backend errors are logged and the next source is used.

use phonerecall_phone::CountryCode;
use phonerecall_storage::KvBackend;

/// Persisted country preference with locale fallback
pub struct CountryPreference<B: KvBackend> {
    backend: B,
    key: String,
    locale: Option<CountryCode>,
    fallback: CountryCode,
}

impl<B: KvBackend> CountryPreference<B> {
    /// Create a preference reading the locale from the environment
    pub fn new(backend: B, key: impl Into<String>, fallback: CountryCode) -> Self {
        let lc_all = std::env::var("LC_ALL").ok();
        let lang = std::env::var("LANG").ok();
        let locale = detect_country_from_locale(lc_all.as_deref(), lang.as_deref());
        Self::with_locale(backend, key, locale, fallback)
    }

    /// Create a preference with an explicit locale country
    pub fn with_locale(
        backend: B,
        key: impl Into<String>,
        locale: Option<CountryCode>,
        fallback: CountryCode,
    ) -> Self {
        Self {
            backend,
            key: key.into(),
            locale,
            fallback,
        }
    }

    /// Current country: stored, else locale, else fallback
    pub fn get(&self) -> CountryCode {
        self.stored()
            .or(self.locale)
            .unwrap_or(self.fallback)
    }

    /// Persist `code` as the preferred country
    ///
    /// A failed write is logged; the previous preference stays in effect.
    pub fn set(&self, code: CountryCode) {
        match self.backend.set(&self.key, code.as_str()) {
            Ok(()) => tracing::debug!(
                target: "phonerecall::country",
                country = %code,
                "Stored preferred country"
            ),
            Err(e) => tracing::warn!(
                target: "phonerecall::country",
                country = %code,
                error = %e,
                "Failed to store preferred country"
            ),
        }
    }

    /// Country detected from the locale, if any
    pub fn locale_country(&self) -> Option<CountryCode> {
        self.locale
    }

    /// Country used when nothing else applies
    pub fn fallback(&self) -> CountryCode {
        self.fallback
    }

    fn stored(&self) -> Option<CountryCode> {
        let raw = match self.backend.get(&self.key) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(
                    target: "phonerecall::country",
                    key = %self.key,
                    error = %e,
                    "Failed to read preferred country"
                );
                return None;
            }
        };
        match CountryCode::parse(&raw) {
            Ok(code) => Some(code),
            Err(e) => {
                tracing::warn!(
                    target: "phonerecall::country",
                    key = %self.key,
                    error = %e,
                    "Ignoring stored country"
                );
                None
            }
        }
    }
}

impl<B: KvBackend> std::fmt::Debug for CountryPreference<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountryPreference")
            .field("key", &self.key)
            .field("locale", &self.locale)
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

/// Region of a POSIX or BCP 47 locale string
///
/// The first non-empty variable wins, as in POSIX: `LC_ALL` overrides
/// `LANG` even when it carries no region. `fr_FR.UTF-8`, `fr-FR` and
/// `zh_Hant_TW` all resolve; `C`, `POSIX` and bare languages do not.
pub fn detect_country_from_locale(lc_all: Option<&str>, lang: Option<&str>) -> Option<CountryCode> {
    let raw = [lc_all, lang]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|v| !v.is_empty())?;
    let raw = raw.split('@').next().unwrap_or(raw);
    let raw = raw.split('.').next().unwrap_or(raw);
    raw.split(['_', '-'])
        .skip(1)
        .find(|part| part.len() == 2 && part.bytes().all(|b| b.is_ascii_alphabetic()))
        .and_then(|part| CountryCode::parse(part).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonerecall_core::{Error, Result};
    use phonerecall_storage::MemoryBackend;
    use std::sync::Arc;

    const KEY: &str = "test-country";

    fn cc(code: &str) -> CountryCode {
        CountryCode::parse(code).unwrap()
    }

    struct Broken;

    impl KvBackend for Broken {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(Error::storage("unavailable"))
        }
        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::storage("unavailable"))
        }
        fn remove(&self, _key: &str) -> Result<bool> {
            Err(Error::storage("unavailable"))
        }
    }

    #[test]
    fn test_detect_prefers_lc_all() {
        assert_eq!(
            detect_country_from_locale(Some("fr_FR.UTF-8"), Some("en_US.UTF-8")),
            Some(cc("FR"))
        );
    }

    #[test]
    fn test_detect_uses_lang_when_lc_all_missing() {
        assert_eq!(detect_country_from_locale(None, Some("de_DE.UTF-8")), Some(cc("DE")));
        assert_eq!(detect_country_from_locale(Some("  "), Some("de_DE")), Some(cc("DE")));
    }

    #[test]
    fn test_detect_forms() {
        assert_eq!(detect_country_from_locale(Some("en-GB"), None), Some(cc("GB")));
        assert_eq!(detect_country_from_locale(Some("ca_ES@valencia"), None), Some(cc("ES")));
        assert_eq!(detect_country_from_locale(Some("zh_Hant_TW"), None), Some(cc("TW")));
        assert_eq!(detect_country_from_locale(Some("pt_br.utf8"), None), Some(cc("BR")));
    }

    #[test]
    fn test_detect_without_region() {
        assert_eq!(detect_country_from_locale(None, None), None);
        assert_eq!(detect_country_from_locale(Some("C"), None), None);
        assert_eq!(detect_country_from_locale(Some("POSIX"), Some("fr_FR")), None);
        assert_eq!(detect_country_from_locale(Some("en"), None), None);
        assert_eq!(detect_country_from_locale(Some("xx_ZZ"), None), None);
    }

    #[test]
    fn test_fallback_chain() {
        let backend = Arc::new(MemoryBackend::new());
        let us = cc("US");

        let bare = CountryPreference::with_locale(Arc::clone(&backend), KEY, None, us);
        assert_eq!(bare.get(), us);

        let localized =
            CountryPreference::with_locale(Arc::clone(&backend), KEY, Some(cc("DE")), us);
        assert_eq!(localized.get(), cc("DE"));

        localized.set(cc("FR"));
        assert_eq!(localized.get(), cc("FR"));
        assert_eq!(bare.get(), cc("FR"));
        assert_eq!(backend.get(KEY).unwrap().as_deref(), Some("FR"));
    }

    #[test]
    fn test_invalid_stored_value_is_skipped() {
        let backend = MemoryBackend::with_entries([(KEY, "ZZ")]);
        let pref = CountryPreference::with_locale(backend, KEY, Some(cc("JP")), cc("US"));
        assert_eq!(pref.get(), cc("JP"));
    }

    #[test]
    fn test_stored_value_is_case_insensitive() {
        let backend = MemoryBackend::with_entries([(KEY, "gb\n")]);
        let pref = CountryPreference::with_locale(backend, KEY, None, cc("US"));
        assert_eq!(pref.get(), cc("GB"));
    }

    #[test]
    fn test_backend_failures_are_swallowed() {
        let pref = CountryPreference::with_locale(Broken, KEY, Some(cc("IT")), cc("US"));
        pref.set(cc("FR"));
        assert_eq!(pref.get(), cc("IT"));
    }
}
