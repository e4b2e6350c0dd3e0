// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console formatting for locale tables and records

use crate::preview;
use crate::report::FileCheck;
use crate::table::LocaleTable;
use crate::types::LocaleRecord;
use crate::vocabulary;
use chrono::NaiveDateTime;
use colored::*;

const SAMPLE_NUMBER: f64 = 1234567.891;

pub struct ReportFormatter;

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_table(&self, table: &LocaleTable) {
        println!("{}", "REGISTERED LOCALES".bold().cyan());
        for record in table.iter() {
            let coverage = vocabulary::coverage(record);
            let marker = if record.locale_code == table.default_locale() {
                "*".green().to_string()
            } else {
                " ".to_string()
            };
            println!(
                "  {} {:8} {:16} {:>3}/{} phrases ({:.0}%)",
                marker,
                record.locale_code.bold(),
                record.name(),
                coverage.translated,
                coverage.total,
                coverage.percent()
            );
        }
        println!();
        println!("  {} default locale", "*".green());
    }

    pub fn print_record(&self, record: &LocaleRecord, sample: &NaiveDateTime) {
        let format = &record.format;
        println!(
            "{} {} ({})",
            "LOCALE".bold().cyan(),
            record.locale_code.bold(),
            record.name()
        );
        println!();

        println!("{}", "CALENDAR".bold().yellow());
        println!("  Days:         {}", format.days.join(", "));
        println!("  Short days:   {}", format.short_days.join(", "));
        println!("  Months:       {}", format.months.join(", "));
        println!("  Short months: {}", format.short_months.join(", "));
        println!();

        println!("{}", "FORMATS".bold().yellow());
        println!(
            "  Date:      {:14} {}",
            format.date,
            preview::render_date(format, &format.date, sample).green()
        );
        if let Some(time) = &format.time {
            println!(
                "  Time:      {:14} {}",
                time,
                preview::render_date(format, time, sample).green()
            );
        }
        if let Some(date_time) = &format.date_time {
            println!(
                "  Date/time: {:14} {}",
                date_time,
                preview::render_date(format, date_time, sample).green()
            );
        }
        let thousands = if format.thousands.is_empty() {
            "(none)".to_string()
        } else {
            format!("{:?}", format.thousands)
        };
        println!(
            "  Number:    decimal {:?}, thousands {}  {}",
            format.decimal,
            thousands,
            preview::render_number(format, SAMPLE_NUMBER, 2).green()
        );
        println!();

        let coverage = vocabulary::coverage(record);
        println!("{}", "DICTIONARY".bold().yellow());
        println!(
            "  {}/{} phrases translated ({:.0}%)",
            coverage.translated,
            coverage.total,
            coverage.percent()
        );
        if !coverage.is_complete() {
            println!("  Falls back for:");
            for phrase in &coverage.missing {
                println!("    - {}", phrase.dimmed());
            }
        }
    }

    pub fn print_checks(&self, checks: &[FileCheck]) {
        for check in checks {
            match &check.outcome {
                Ok((code, coverage)) => println!(
                    "  [{}] {} ({}, {}/{} phrases)",
                    "OK".green(),
                    check.path.display(),
                    code,
                    coverage.translated,
                    coverage.total
                ),
                Err(message) => println!(
                    "  [{}] {}: {}",
                    "ERR".red(),
                    check.path.display(),
                    message
                ),
            }
        }
        let failed = checks.iter().filter(|c| !c.passed()).count();
        println!();
        if failed == 0 {
            println!("{}", format!("{} locale files valid", checks.len()).green());
        } else {
            println!(
                "{}",
                format!("{} of {} locale files invalid", failed, checks.len())
                    .bold()
                    .red()
            );
        }
    }
}
