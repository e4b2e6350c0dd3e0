// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console reports for the command line

pub mod formatter;

use crate::storage;
use crate::vocabulary::{self, Coverage};
use std::path::{Path, PathBuf};

pub use formatter::ReportFormatter;

/// Result of validating one locale file.
#[derive(Debug)]
pub struct FileCheck {
    pub path: PathBuf,
    pub outcome: Result<(String, Coverage), String>,
}

impl FileCheck {
    pub fn passed(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Load and validate each file without registering anything.
pub fn check_files(paths: &[PathBuf], strict: bool) -> Vec<FileCheck> {
    paths
        .iter()
        .map(|path| FileCheck {
            path: path.clone(),
            outcome: check_file(path, strict),
        })
        .collect()
}

fn check_file(path: &Path, strict: bool) -> Result<(String, Coverage), String> {
    let record = storage::load_file(path).map_err(|err| format!("{:#}", err))?;
    record.validate(strict).map_err(|err| err.to_string())?;
    let coverage = vocabulary::coverage(&record);
    Ok((record.locale_code, coverage))
}
