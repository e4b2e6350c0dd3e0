// SPDX-License-Identifier: PMPL-1.0-or-later

//! Reading and writing locale record files

mod format;

pub use format::RecordFormat;

use crate::types::LocaleRecord;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Format implied by a file's extension.
pub fn format_for_path(path: &Path) -> Option<RecordFormat> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(RecordFormat::parse)
}

/// Read one record, choosing the format from the file extension.
///
/// The record is parsed but not validated; registration does that.
pub fn load_file(path: &Path) -> Result<LocaleRecord> {
    let format = format_for_path(path)
        .ok_or_else(|| anyhow!("unrecognised locale file extension: {}", path.display()))?;
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading locale file {}", path.display()))?;
    let record = format
        .deserialize(&raw)
        .with_context(|| format!("loading {}", path.display()))?;
    log::debug!("loaded locale {} from {}", record.locale_code, path.display());
    Ok(record)
}

/// Read every recognised locale file directly inside `dir`, in file name order.
///
/// Files with other extensions are skipped; a recognised file that fails to
/// parse is an error.
pub fn load_dir(dir: &Path) -> Result<Vec<LocaleRecord>> {
    if !dir.is_dir() {
        return Err(anyhow!("locale directory not found: {}", dir.display()));
    }

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| format!("listing {}", dir.display()))?;
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        if format_for_path(path).is_some() {
            paths.push(path.to_path_buf());
        } else {
            log::warn!("skipping {}: not a locale file", path.display());
        }
    }
    paths.sort();

    let records = paths
        .iter()
        .map(|path| load_file(path))
        .collect::<Result<Vec<_>>>()?;
    log::info!("loaded {} locale files from {}", records.len(), dir.display());
    Ok(records)
}

/// File name a record is exported under: `plotly-locale-hr.json`.
pub fn file_name(record: &LocaleRecord, format: RecordFormat) -> String {
    format!("plotly-locale-{}.{}", record.locale_code, format.extension())
}

/// Write `record` into `directory` (created if missing) and return the path.
pub fn write_record(
    record: &LocaleRecord,
    directory: &Path,
    format: RecordFormat,
) -> Result<PathBuf> {
    fs::create_dir_all(directory)
        .with_context(|| format!("creating {}", directory.display()))?;
    let path = directory.join(file_name(record, format));
    let content = format.serialize(record)?;
    fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
    log::info!("wrote locale {} to {}", record.locale_code, path.display());
    Ok(path)
}
