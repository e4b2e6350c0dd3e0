// SPDX-License-Identifier: PMPL-1.0-or-later

//! plotly-locales: validated locale records for the Plotly charting library.
//!
//! A locale record carries the translations for Plotly's UI phrases plus the
//! day names, month names and date/number tokens its formatters use. This
//! crate keeps those records in a [`LocaleTable`](table::LocaleTable) that is
//! filled and validated once at startup and read-only afterwards.
//!
//! LAYOUT:
//! 1. **locales**: compiled-in records (English base, Croatian).
//! 2. **table** / **global**: registration, lookup, phrase fallback, and the
//!    init-once process-wide table.
//! 3. **validate** / **vocabulary**: the schema every record must satisfy.
//! 4. **storage**: JSON, YAML and Plotly `locale()` module files.
//! 5. **preview** / **report**: console output for the `plotly-locales` binary.

pub mod config;
pub mod global;
pub mod i18n;
pub mod locales;
pub mod preview;
pub mod report;
pub mod storage;
pub mod table;
pub mod types;
pub mod validate;
pub mod vocabulary;

pub use table::LocaleTable;
pub use types::{LocaleFormat, LocaleRecord};
pub use validate::ValidationError;
