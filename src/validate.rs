// SPDX-License-Identifier: PMPL-1.0-or-later

//! Record validation.
//!
//! Runs when a record is registered, so a malformed locale is rejected at
//! startup and never reaches the host library at render time.

use crate::types::{LocaleFormat, LocaleRecord, MODULE_TYPE_LOCALE};
use crate::vocabulary;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Directive letters the host library's date formatter understands.
const DATE_DIRECTIVES: &str = "aAbBcdefgGHIjLmMpqQsSuUVwWxXyYZ%";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(
        "locale code {0:?} must be a lowercase 2-3 letter language subtag, \
         optionally followed by '-' subtags of 1-8 ASCII letters or digits"
    )]
    InvalidCode(String),

    #[error("locale {locale}: moduleType must be \"locale\", found {found:?}")]
    ModuleType { locale: String, found: String },

    #[error("locale {locale}: format.{field} must have {expected} entries, found {found}")]
    Length {
        locale: String,
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("locale {locale}: format.{field}[{index}] is empty")]
    EmptyName {
        locale: String,
        field: &'static str,
        index: usize,
    },

    #[error("locale {locale}: format.decimal must be exactly one character, found {found:?}")]
    Decimal { locale: String, found: String },

    #[error("locale {locale}: format.thousands must be empty or one character, found {found:?}")]
    Thousands { locale: String, found: String },

    #[error("locale {locale}: format.decimal and format.thousands are both {separator:?}")]
    SeparatorClash { locale: String, separator: String },

    #[error("locale {locale}: format.{field} has unknown directive {directive:?} in {pattern:?}")]
    Directive {
        locale: String,
        field: &'static str,
        pattern: String,
        directive: String,
    },

    #[error("locale {locale}: format.grouping sizes must be positive")]
    Grouping { locale: String },

    #[error("locale {locale}: dictionary phrase {phrase:?} is not used by the host library")]
    UnknownPhrase { locale: String, phrase: String },

    #[error("locale {locale}: dictionary phrase {phrase:?} has an empty translation")]
    EmptyTranslation { locale: String, phrase: String },
}

impl LocaleRecord {
    /// Check the record against the host schema.
    ///
    /// `strict` additionally requires every dictionary key to be a phrase from
    /// [`vocabulary::UI_PHRASES`] and every translation to be non-empty.
    pub fn validate(&self, strict: bool) -> Result<(), ValidationError> {
        validate_code(&self.locale_code)?;
        let locale = self.locale_code.as_str();

        if self.module_type != MODULE_TYPE_LOCALE {
            return Err(ValidationError::ModuleType {
                locale: locale.to_string(),
                found: self.module_type.clone(),
            });
        }

        validate_format(locale, &self.format)?;

        if strict {
            for (phrase, translation) in &self.dictionary {
                if !vocabulary::is_known_phrase(phrase) {
                    return Err(ValidationError::UnknownPhrase {
                        locale: locale.to_string(),
                        phrase: phrase.clone(),
                    });
                }
                if translation.trim().is_empty() {
                    return Err(ValidationError::EmptyTranslation {
                        locale: locale.to_string(),
                        phrase: phrase.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

fn code_regex() -> &'static Regex {
    static CODE: OnceLock<Regex> = OnceLock::new();
    // Language subtag in lowercase, region/script subtags in any case:
    // "hr", "pt-BR", "zh-Hant-TW".
    CODE.get_or_init(|| {
        Regex::new(r"^[a-z]{2,3}(-[A-Za-z0-9]{1,8})*$").expect("code regex is valid")
    })
}

fn validate_code(code: &str) -> Result<(), ValidationError> {
    if code_regex().is_match(code) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCode(code.to_string()))
    }
}

fn validate_format(locale: &str, format: &LocaleFormat) -> Result<(), ValidationError> {
    check_names(locale, "days", &format.days, 7)?;
    check_names(locale, "shortDays", &format.short_days, 7)?;
    check_names(locale, "months", &format.months, 12)?;
    check_names(locale, "shortMonths", &format.short_months, 12)?;
    if let Some(periods) = &format.periods {
        check_names(locale, "periods", periods, 2)?;
    }
    if let Some(currency) = &format.currency {
        check_length(locale, "currency", currency.len(), 2)?;
    }

    if format.decimal.chars().count() != 1 {
        return Err(ValidationError::Decimal {
            locale: locale.to_string(),
            found: format.decimal.clone(),
        });
    }
    if format.thousands.chars().count() > 1 {
        return Err(ValidationError::Thousands {
            locale: locale.to_string(),
            found: format.thousands.clone(),
        });
    }
    if format.thousands == format.decimal {
        return Err(ValidationError::SeparatorClash {
            locale: locale.to_string(),
            separator: format.decimal.clone(),
        });
    }

    check_pattern(locale, "date", &format.date)?;
    if let Some(pattern) = &format.date_time {
        check_pattern(locale, "dateTime", pattern)?;
    }
    if let Some(pattern) = &format.time {
        check_pattern(locale, "time", pattern)?;
    }

    if let Some(grouping) = &format.grouping {
        if grouping.iter().any(|&size| size == 0) {
            return Err(ValidationError::Grouping {
                locale: locale.to_string(),
            });
        }
    }
    Ok(())
}

fn check_length(
    locale: &str,
    field: &'static str,
    found: usize,
    expected: usize,
) -> Result<(), ValidationError> {
    if found == expected {
        Ok(())
    } else {
        Err(ValidationError::Length {
            locale: locale.to_string(),
            field,
            expected,
            found,
        })
    }
}

fn check_names(
    locale: &str,
    field: &'static str,
    names: &[String],
    expected: usize,
) -> Result<(), ValidationError> {
    check_length(locale, field, names.len(), expected)?;
    match names.iter().position(|name| name.trim().is_empty()) {
        Some(index) => Err(ValidationError::EmptyName {
            locale: locale.to_string(),
            field,
            index,
        }),
        None => Ok(()),
    }
}

fn directive_regex() -> &'static Regex {
    static DIRECTIVE: OnceLock<Regex> = OnceLock::new();
    // A '%', an optional padding modifier, then the directive character (or
    // nothing, when the pattern ends on a bare '%').
    DIRECTIVE.get_or_init(|| Regex::new(r"%[-_0]?(.?)").expect("directive regex is valid"))
}

/// First directive in `pattern` the host formatter would not understand.
pub fn unknown_directive(pattern: &str) -> Option<String> {
    directive_regex().captures_iter(pattern).find_map(|caps| {
        let directive = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        match directive.chars().next() {
            Some(c) if DATE_DIRECTIVES.contains(c) => None,
            _ => Some(caps[0].to_string()),
        }
    })
}

fn check_pattern(locale: &str, field: &'static str, pattern: &str) -> Result<(), ValidationError> {
    match unknown_directive(pattern) {
        Some(directive) => Err(ValidationError::Directive {
            locale: locale.to_string(),
            field,
            pattern: pattern.to_string(),
            directive,
        }),
        None => Ok(()),
    }
}
