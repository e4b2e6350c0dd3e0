// SPDX-License-Identifier: PMPL-1.0-or-later

//! Process-wide locale table.
//!
//! Build a [`LocaleTable`] on the startup thread, publish it once with
//! [`init`], then read it from anywhere through [`table`]. There is no
//! teardown; the table lives until the process exits.

use crate::table::LocaleTable;
use anyhow::{anyhow, Result};
use std::sync::OnceLock;

static TABLE: OnceLock<LocaleTable> = OnceLock::new();

/// Publish `built` as the process-wide table.
///
/// Fails if a table was already published, including the builtin table
/// installed by an earlier call to [`table`].
pub fn init(built: LocaleTable) -> Result<&'static LocaleTable> {
    let count = built.len();
    TABLE
        .set(built)
        .map_err(|_| anyhow!("locale table already initialised"))?;
    log::info!("published locale table with {} locales", count);
    Ok(table())
}

/// The published table, or the builtin table when [`init`] was never called.
pub fn table() -> &'static LocaleTable {
    TABLE.get_or_init(LocaleTable::builtin)
}
