// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for plotly-locales
//!
//! A [`LocaleRecord`] has the same shape as the object the Plotly host library
//! accepts through `Plotly.register`: a `moduleType` tag, the locale code under
//! `name`, a phrase `dictionary`, and a `format` block of calendar names and
//! date/number tokens.

use crate::i18n;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tag the host library dispatches locale modules on.
pub const MODULE_TYPE_LOCALE: &str = "locale";

/// One language's UI dictionary and formatting conventions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleRecord {
    pub module_type: String,
    /// Locale code (`"hr"`, `"en-US"`). The host schema carries it as `name`.
    #[serde(rename = "name")]
    pub locale_code: String,
    /// Canonical English UI phrase -> translated phrase.
    #[serde(default)]
    pub dictionary: BTreeMap<String, String>,
    pub format: LocaleFormat,
}

/// Calendar names and date/number tokens.
///
/// Day arrays start on Sunday, month arrays on January. Optional fields are
/// omitted from serialized output when unset, so a record parsed from the
/// host schema serializes back to the same document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleFormat {
    pub days: Vec<String>,
    pub short_days: Vec<String>,
    pub months: Vec<String>,
    pub short_months: Vec<String>,
    pub date: String,
    pub decimal: String,
    /// Empty means no digit grouping.
    #[serde(default)]
    pub thousands: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub periods: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grouping: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Vec<String>>,
}

impl LocaleRecord {
    pub fn new(
        locale_code: impl Into<String>,
        dictionary: BTreeMap<String, String>,
        format: LocaleFormat,
    ) -> Self {
        Self {
            module_type: MODULE_TYPE_LOCALE.to_string(),
            locale_code: locale_code.into(),
            dictionary,
            format,
        }
    }

    /// Human-readable name for the locale.
    ///
    /// Prefers the language's own name ("Hrvatski"), then the English name,
    /// then the raw code for languages the ISO table does not describe.
    pub fn name(&self) -> String {
        let primary = self.primary_subtag();
        i18n::native_name(primary)
            .or_else(|| i18n::language_name(primary))
            .map(str::to_string)
            .unwrap_or_else(|| self.locale_code.clone())
    }

    /// Language part of the code: `"en"` for `"en-US"`.
    pub fn primary_subtag(&self) -> &str {
        i18n::primary_subtag(&self.locale_code)
    }

    /// The translation for `phrase`, if this record carries one.
    pub fn translate(&self, phrase: &str) -> Option<&str> {
        self.dictionary.get(phrase).map(String::as_str)
    }
}
