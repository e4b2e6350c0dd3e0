// SPDX-License-Identifier: PMPL-1.0-or-later

//! Rendering a locale's tokens for inspection.
//!
//! `plotly-locales show` uses this to print a sample date and number the way
//! a locale describes them, so a translator can check the names and
//! separators before shipping the record. It covers the common date
//! directives only; anything else is echoed unchanged.

use crate::types::LocaleFormat;
use chrono::{Datelike, NaiveDateTime, Timelike};
use std::fmt::Write;

const DEFAULT_TIME: &str = "%H:%M:%S";
const DEFAULT_DATE_TIME: &str = "%x, %X";
const DEFAULT_PERIODS: [&str; 2] = ["AM", "PM"];
const DEFAULT_GROUPING: [u32; 1] = [3];

/// Expand `pattern` for `when` with the locale's names.
///
/// `%x`, `%X` and `%c` expand to the locale's `date`, `time` and `dateTime`
/// patterns, one level deep.
pub fn render_date(format: &LocaleFormat, pattern: &str, when: &NaiveDateTime) -> String {
    let mut out = String::new();
    expand(format, pattern, when, false, &mut out);
    out
}

fn expand(format: &LocaleFormat, pattern: &str, when: &NaiveDateTime, nested: bool, out: &mut String) {
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let pad = match chars.peek() {
            Some(&p @ ('-' | '_' | '0')) => {
                chars.next();
                Some(p)
            }
            _ => None,
        };
        let Some(directive) = chars.next() else {
            out.push('%');
            out.extend(pad);
            break;
        };

        let weekday = when.weekday().num_days_from_sunday() as usize;
        let month = when.month0() as usize;
        match directive {
            'a' => out.push_str(name(&format.short_days, weekday)),
            'A' => out.push_str(name(&format.days, weekday)),
            'b' => out.push_str(name(&format.short_months, month)),
            'B' => out.push_str(name(&format.months, month)),
            'd' => number(out, when.day(), 2, pad.unwrap_or('0')),
            'e' => number(out, when.day(), 2, pad.unwrap_or('_')),
            'm' => number(out, when.month(), 2, pad.unwrap_or('0')),
            'Y' => {
                let _ = write!(out, "{}", when.year());
            }
            'y' => number(out, when.year().rem_euclid(100) as u32, 2, pad.unwrap_or('0')),
            'H' => number(out, when.hour(), 2, pad.unwrap_or('0')),
            'I' => number(out, hour12(when.hour()), 2, pad.unwrap_or('0')),
            'M' => number(out, when.minute(), 2, pad.unwrap_or('0')),
            'S' => number(out, when.second(), 2, pad.unwrap_or('0')),
            'L' => number(out, (when.nanosecond() / 1_000_000).min(999), 3, pad.unwrap_or('0')),
            'j' => number(out, when.ordinal(), 3, pad.unwrap_or('0')),
            'p' => {
                let index = usize::from(when.hour() >= 12);
                match &format.periods {
                    Some(periods) => out.push_str(name(periods, index)),
                    None => out.push_str(DEFAULT_PERIODS[index]),
                }
            }
            'x' if !nested => expand(format, &format.date, when, true, out),
            'X' if !nested => {
                let time = format.time.as_deref().unwrap_or(DEFAULT_TIME);
                expand(format, time, when, true, out);
            }
            'c' if !nested => {
                let date_time = format.date_time.as_deref().unwrap_or(DEFAULT_DATE_TIME);
                expand(format, date_time, when, true, out);
            }
            '%' => out.push('%'),
            other => {
                out.push('%');
                out.extend(pad);
                out.push(other);
            }
        }
    }
}

fn name(names: &[String], index: usize) -> &str {
    names.get(index).map(String::as_str).unwrap_or("")
}

fn hour12(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

fn number(out: &mut String, value: u32, width: usize, pad: char) {
    let _ = match pad {
        '-' => write!(out, "{}", value),
        '_' => write!(out, "{:>width$}", value, width = width),
        _ => write!(out, "{:0width$}", value, width = width),
    };
}

/// Format `value` with `decimals` fraction digits using the locale's
/// separators and grouping (default groups of three).
pub fn render_number(format: &LocaleFormat, value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let digits = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits.as_str(), None),
    };

    let mut out = String::new();
    if value < 0.0 && digits.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        out.push('-');
    }
    let sizes = format.grouping.as_deref().unwrap_or(&DEFAULT_GROUPING);
    out.push_str(&group(int_part, &format.thousands, sizes));
    if let Some(frac_part) = frac_part {
        out.push_str(&format.decimal);
        out.push_str(frac_part);
    }
    out
}

/// Split `digits` into groups from the right; the last size repeats.
fn group(digits: &str, separator: &str, sizes: &[u32]) -> String {
    if separator.is_empty() || sizes.is_empty() {
        return digits.to_string();
    }
    let mut groups = Vec::new();
    let mut end = digits.len();
    let mut index = 0;
    while end > 0 {
        let size = sizes[index.min(sizes.len() - 1)].max(1) as usize;
        let start = end.saturating_sub(size);
        groups.push(&digits[start..end]);
        end = start;
        index += 1;
    }
    groups.reverse();
    groups.join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locales;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, s))
            .expect("valid timestamp")
    }

    #[test]
    fn croatian_date_pattern() {
        let hr = locales::croatian().format;
        let when = at(2024, 3, 5, 14, 7, 9);
        assert_eq!(render_date(&hr, &hr.date, &when), "05.03.2024.");
        assert_eq!(render_date(&hr, "%A, %e. %B", &when), "Utorak,  5. Ožujak");
        assert_eq!(render_date(&hr, "%a %b", &when), "Uto Ožu");
    }

    #[test]
    fn english_compound_directives() {
        let en = locales::english().format;
        let when = at(2024, 3, 5, 14, 7, 9);
        assert_eq!(render_date(&en, "%x", &when), "3/5/2024");
        assert_eq!(render_date(&en, "%X", &when), "2:07:09 PM");
        assert_eq!(render_date(&en, "%c", &when), "3/5/2024, 2:07:09 PM");
    }

    #[test]
    fn padding_modifiers() {
        let en = locales::english().format;
        let when = at(2024, 1, 9, 0, 5, 0);
        assert_eq!(render_date(&en, "%d|%-d|%_d|%e|%0e", &when), "09|9| 9| 9|09");
        assert_eq!(render_date(&en, "%I%p %j %y", &when), "12AM 009 24");
    }

    #[test]
    fn defaults_when_locale_omits_time_fields() {
        let hr = locales::croatian().format;
        let when = at(2024, 3, 5, 9, 30, 0);
        assert_eq!(render_date(&hr, "%X %p", &when), "09:30:00 AM");
    }

    #[test]
    fn unsupported_directives_echo() {
        let en = locales::english().format;
        let when = at(2024, 3, 5, 0, 0, 0);
        assert_eq!(render_date(&en, "%U %-W 100%% %", &when), "%U %-W 100% %");
    }

    #[test]
    fn croatian_numbers_have_no_grouping() {
        let hr = locales::croatian().format;
        assert_eq!(render_number(&hr, 1234567.891, 2), "1234567,89");
        assert_eq!(render_number(&hr, -0.5, 1), "-0,5");
    }

    #[test]
    fn english_numbers_group_by_three() {
        let en = locales::english().format;
        assert_eq!(render_number(&en, 1234567.891, 2), "1,234,567.89");
        assert_eq!(render_number(&en, -1234.5, 1), "-1,234.5");
        assert_eq!(render_number(&en, 999.0, 0), "999");
        assert_eq!(render_number(&en, -0.001, 0), "0");
    }

    #[test]
    fn irregular_grouping() {
        let mut format = locales::english().format;
        format.grouping = Some(vec![3, 2]);
        assert_eq!(render_number(&format, 12345678.0, 0), "1,23,45,678");
    }

    #[test]
    fn non_finite_numbers() {
        let en = locales::english().format;
        assert_eq!(render_number(&en, f64::NAN, 2), "NaN");
        assert_eq!(render_number(&en, f64::INFINITY, 2), "inf");
    }
}
