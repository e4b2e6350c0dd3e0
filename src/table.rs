// SPDX-License-Identifier: PMPL-1.0-or-later

//! The locale table: locale code -> [`LocaleRecord`].
//!
//! A table is filled during startup and then only read. Registration
//! validates each record; lookups never fail, they report absence with
//! `None` and leave the fallback decision to the caller.

use crate::i18n;
use crate::locales;
use crate::types::LocaleRecord;
use crate::validate::ValidationError;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct LocaleTable {
    records: BTreeMap<String, LocaleRecord>,
    default_locale: String,
    strict: bool,
}

impl Default for LocaleTable {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleTable {
    /// An empty table that falls back to English and validates strictly.
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            default_locale: locales::BASE_LOCALE.to_string(),
            strict: true,
        }
    }

    /// A table holding every builtin locale.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for record in locales::all() {
            table.insert_unchecked(record);
        }
        table
    }

    pub fn with_default_locale(mut self, code: impl Into<String>) -> Self {
        self.default_locale = code.into();
        self
    }

    /// Whether [`register`](Self::register) restricts dictionary keys to the
    /// host vocabulary.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Validate `record` and store it under its locale code.
    ///
    /// A record already registered under the same code is replaced and
    /// returned; the latest registration wins.
    pub fn register(
        &mut self,
        record: LocaleRecord,
    ) -> Result<Option<LocaleRecord>, ValidationError> {
        record.validate(self.strict)?;
        if !i18n::is_valid_iso639_1(record.primary_subtag()) {
            log::warn!(
                "locale {} does not start with an ISO 639-1 language code",
                record.locale_code
            );
        }
        Ok(self.insert_unchecked(record))
    }

    fn insert_unchecked(&mut self, record: LocaleRecord) -> Option<LocaleRecord> {
        let code = record.locale_code.clone();
        let previous = self.records.insert(code.clone(), record);
        if previous.is_some() {
            log::debug!("replaced locale {}", code);
        } else {
            log::debug!("registered locale {}", code);
        }
        previous
    }

    /// The record registered under `code`, or `None`.
    pub fn lookup(&self, code: &str) -> Option<&LocaleRecord> {
        self.records.get(code)
    }

    /// The record registered under the language part of a region code
    /// (`pt` for `pt-BR`). `None` for codes without a region.
    fn lookup_base_language(&self, code: &str) -> Option<&LocaleRecord> {
        let base = i18n::primary_subtag(code);
        if base == code {
            None
        } else {
            self.lookup(base)
        }
    }

    /// The record for `code`, else its base language's, else the default
    /// locale's.
    ///
    /// `None` only when none of them is registered.
    pub fn lookup_or_default(&self, code: &str) -> Option<&LocaleRecord> {
        self.lookup(code)
            .or_else(|| self.lookup_base_language(code))
            .or_else(|| {
                log::debug!(
                    "locale {} not registered, using {}",
                    code,
                    self.default_locale
                );
                self.lookup(&self.default_locale)
            })
    }

    /// Translate a host UI phrase.
    ///
    /// Tries the requested locale's dictionary, then its base language's
    /// (`pt` for `pt-BR`), then the default locale's, then returns `phrase`
    /// unchanged.
    pub fn translate<'a>(&'a self, code: &str, phrase: &'a str) -> &'a str {
        [
            self.lookup(code),
            self.lookup_base_language(code),
            self.lookup(&self.default_locale),
        ]
        .into_iter()
        .flatten()
        .find_map(|record| record.translate(phrase))
        .unwrap_or(phrase)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.records.contains_key(code)
    }

    /// Registered codes in sorted order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Registered records in code order.
    pub fn iter(&self) -> impl Iterator<Item = &LocaleRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locales;

    #[test]
    fn builtin_lookup_returns_matching_code() {
        let table = LocaleTable::builtin();
        for code in locales::BUILTIN_CODES {
            let record = table.lookup(code).expect("builtin should be registered");
            assert_eq!(record.locale_code, *code);
        }
        assert_eq!(table.len(), locales::BUILTIN_CODES.len());
    }

    #[test]
    fn unknown_code_is_none() {
        let table = LocaleTable::builtin();
        assert!(table.lookup("__unknown__").is_none());
        assert!(!table.contains("__unknown__"));
    }

    #[test]
    fn croatian_example() {
        let mut table = LocaleTable::new();
        table.register(locales::croatian()).expect("hr is valid");
        let hr = table.lookup("hr").expect("hr registered");
        assert_eq!(hr.dictionary["Pan"], "Pomicanje");
        assert_eq!(hr.format.months[0], "Siječanj");
    }

    #[test]
    fn reregistering_replaces() {
        let mut table = LocaleTable::new();
        assert_eq!(table.register(locales::croatian()), Ok(None));

        let mut revised = locales::croatian();
        revised
            .dictionary
            .insert("Pan".to_string(), "Pomak".to_string());
        let previous = table.register(revised).expect("revised hr is valid");

        assert_eq!(previous, Some(locales::croatian()));
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("hr").and_then(|r| r.translate("Pan")), Some("Pomak"));
    }

    #[test]
    fn invalid_record_is_rejected_and_table_unchanged() {
        let mut table = LocaleTable::builtin();
        let mut broken = locales::croatian();
        broken.format.months.truncate(11);
        broken.dictionary.insert("Pan".to_string(), "X".to_string());

        assert!(table.register(broken).is_err());
        assert_eq!(table.lookup("hr").and_then(|r| r.translate("Pan")), Some("Pomicanje"));
    }

    #[test]
    fn lenient_table_accepts_extra_phrases() {
        let mut record = locales::croatian();
        record
            .dictionary
            .insert("Custom button".to_string(), "Gumb".to_string());

        assert!(LocaleTable::new().register(record.clone()).is_err());
        assert!(LocaleTable::new().with_strict(false).register(record).is_ok());
    }

    #[test]
    fn lookup_or_default_falls_back_to_base() {
        let table = LocaleTable::builtin();
        assert_eq!(table.lookup_or_default("hr").map(|r| r.locale_code.as_str()), Some("hr"));
        assert_eq!(table.lookup_or_default("de").map(|r| r.locale_code.as_str()), Some("en"));
        assert!(LocaleTable::new().lookup_or_default("de").is_none());
    }

    #[test]
    fn translate_fallback_chain() {
        let mut table = LocaleTable::builtin().with_strict(false);
        let mut base = locales::english();
        base.dictionary.insert(
            "Click to enter Colorscale title".to_string(),
            "Click to enter Colourscale title".to_string(),
        );
        table.register(base).expect("en is valid");

        // Requested locale has it.
        assert_eq!(table.translate("hr", "Zoom"), "Zumiranje");
        // hr leaves "Draw line" out; en has no entry either.
        assert_eq!(table.translate("hr", "Draw line"), "Draw line");
        // Unregistered locale goes to the base dictionary.
        assert_eq!(
            table.translate("de", "Click to enter Colorscale title"),
            "Click to enter Colourscale title"
        );
        // Present in hr, so the base entry is not used.
        assert_eq!(
            table.translate("hr", "Click to enter Colorscale title"),
            "Kliknite za unos Colorscale naziva"
        );
    }

    fn portuguese(code: &str, pan: &str) -> LocaleRecord {
        let mut record = locales::croatian();
        record.locale_code = code.to_string();
        record.dictionary.clear();
        record.dictionary.insert("Pan".to_string(), pan.to_string());
        record
    }

    #[test]
    fn registers_region_code_as_written() {
        let mut table = LocaleTable::new();
        table
            .register(portuguese("pt-BR", "Mover"))
            .expect("pt-BR is a valid code");
        assert!(table.contains("pt-BR"));
        assert!(table.lookup("pt-br").is_none());
        assert_eq!(table.translate("pt-BR", "Pan"), "Mover");
    }

    #[test]
    fn region_code_falls_back_to_base_language() {
        let mut table = LocaleTable::builtin();
        table.register(portuguese("pt", "Arrastar")).expect("pt is valid");
        table.register(portuguese("pt-BR", "Mover")).expect("pt-BR is valid");
        let mut portugal = portuguese("pt-PT", "Deslocar");
        portugal.dictionary.clear();
        table.register(portugal).expect("pt-PT is valid");

        assert_eq!(table.translate("pt-BR", "Pan"), "Mover");
        // Registered but without the phrase.
        assert_eq!(table.translate("pt-PT", "Pan"), "Arrastar");
        // Not registered at all.
        assert_eq!(table.translate("pt-AO", "Pan"), "Arrastar");
        assert_eq!(
            table.lookup_or_default("pt-AO").map(|r| r.locale_code.as_str()),
            Some("pt")
        );
        // No base record either: default locale.
        assert_eq!(
            table.lookup_or_default("de-AT").map(|r| r.locale_code.as_str()),
            Some("en")
        );
        assert_eq!(table.translate("hr-BA", "Pan"), "Pomicanje");
    }

    #[test]
    fn codes_are_sorted() {
        let table = LocaleTable::builtin();
        let codes: Vec<&str> = table.codes().collect();
        assert_eq!(codes, vec!["en", "hr"]);
    }

    #[test]
    fn custom_default_locale() {
        let table = LocaleTable::builtin().with_default_locale("hr");
        assert_eq!(table.default_locale(), "hr");
        assert_eq!(table.translate("de", "Pan"), "Pomicanje");
    }
}
