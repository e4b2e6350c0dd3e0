// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale records compiled into the binary.
//!
//! Each language lives in its own file as `const` tables; the fixed-size
//! arrays in [`StaticFormat`] make a wrong day or month count a compile error
//! for builtin data. Records loaded from disk get the same guarantee from
//! [`crate::validate`] instead.
//!
//! ## Adding a new language
//!
//! 1. Create `xx.rs` with `CODE`, `DICTIONARY` and `FORMAT`
//! 2. Add a constructor below and list it in [`all`]

mod en;
mod hr;

use crate::types::{LocaleFormat, LocaleRecord};
use std::collections::BTreeMap;

/// Code of the locale the host library falls back to.
pub const BASE_LOCALE: &str = en::CODE;

/// Codes of every builtin locale, in registration order.
pub const BUILTIN_CODES: &[&str] = &[en::CODE, hr::CODE];

/// `const`-friendly mirror of [`LocaleFormat`].
pub(crate) struct StaticFormat {
    pub days: [&'static str; 7],
    pub short_days: [&'static str; 7],
    pub months: [&'static str; 12],
    pub short_months: [&'static str; 12],
    pub date: &'static str,
    pub decimal: &'static str,
    pub thousands: &'static str,
    pub periods: Option<[&'static str; 2]>,
    pub date_time: Option<&'static str>,
    pub time: Option<&'static str>,
    pub grouping: Option<&'static [u32]>,
    pub currency: Option<[&'static str; 2]>,
}

impl StaticFormat {
    fn to_format(&self) -> LocaleFormat {
        LocaleFormat {
            days: owned(&self.days),
            short_days: owned(&self.short_days),
            months: owned(&self.months),
            short_months: owned(&self.short_months),
            date: self.date.to_string(),
            decimal: self.decimal.to_string(),
            thousands: self.thousands.to_string(),
            periods: self.periods.as_ref().map(|p| owned(p)),
            date_time: self.date_time.map(str::to_string),
            time: self.time.map(str::to_string),
            grouping: self.grouping.map(<[u32]>::to_vec),
            currency: self.currency.as_ref().map(|c| owned(c)),
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn build(code: &str, dictionary: &[(&str, &str)], format: &StaticFormat) -> LocaleRecord {
    let dictionary: BTreeMap<String, String> = dictionary
        .iter()
        .map(|&(k, v)| (k.to_string(), v.to_string()))
        .collect();
    LocaleRecord::new(code, dictionary, format.to_format())
}

pub fn english() -> LocaleRecord {
    build(en::CODE, en::DICTIONARY, &en::FORMAT)
}

pub fn croatian() -> LocaleRecord {
    build(hr::CODE, hr::DICTIONARY, &hr::FORMAT)
}

/// Every builtin record, base locale first.
pub fn all() -> Vec<LocaleRecord> {
    vec![english(), croatian()]
}

/// The builtin record for `code`, if one is compiled in.
pub fn builtin(code: &str) -> Option<LocaleRecord> {
    match code {
        en::CODE => Some(english()),
        hr::CODE => Some(croatian()),
        _ => None,
    }
}
