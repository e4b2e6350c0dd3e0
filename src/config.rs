// SPDX-License-Identifier: PMPL-1.0-or-later

//! Startup configuration and table construction.
//!
//! Settings come from an optional YAML file, then the environment, then the
//! command line:
//!
//! ```yaml
//! default_locale: en
//! strict: true
//! builtins: true
//! locale_dirs:
//!   - locales
//! ```

use crate::locales;
use crate::storage;
use crate::table::LocaleTable;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_LOCALE_ENV: &str = "PLOTLY_LOCALES_DEFAULT";
pub const LOCALE_DIR_ENV: &str = "PLOTLY_LOCALES_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Locale used when a requested one is not registered.
    pub default_locale: String,
    /// Directories of locale files registered after the builtins.
    pub locale_dirs: Vec<PathBuf>,
    /// Restrict dictionary keys to the host vocabulary.
    pub strict: bool,
    /// Register the compiled-in locales first.
    pub builtins: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_locale: locales::BASE_LOCALE.to_string(),
            locale_dirs: Vec::new(),
            strict: true,
            builtins: true,
        }
    }
}

impl Config {
    /// Read a YAML config file.
    ///
    /// Relative `locale_dirs` are resolved against the file's directory, so a
    /// config works the same from any working directory. Directories from the
    /// environment or command line stay relative to the working directory.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let mut config: Config = serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;
        if let Some(base) = path.parent() {
            config.locale_dirs = config
                .locale_dirs
                .into_iter()
                .map(|dir| base.join(dir))
                .collect();
        }
        Ok(config)
    }

    /// Apply `PLOTLY_LOCALES_DEFAULT` and `PLOTLY_LOCALES_DIR` from the process
    /// environment.
    pub fn apply_env(&mut self) {
        self.apply_vars(|key| env::var_os(key));
    }

    /// Apply overrides from `lookup`. Directories in the locale dir variable
    /// use the platform path separator and are appended to the configured ones.
    pub fn apply_vars(&mut self, lookup: impl Fn(&str) -> Option<OsString>) {
        if let Some(code) = lookup(DEFAULT_LOCALE_ENV) {
            let code = code.to_string_lossy().trim().to_string();
            if !code.is_empty() {
                self.default_locale = code;
            }
        }
        if let Some(dirs) = lookup(LOCALE_DIR_ENV) {
            self.locale_dirs.extend(
                env::split_paths(&dirs).filter(|path| !path.as_os_str().is_empty()),
            );
        }
    }

    /// Build the table this configuration describes.
    ///
    /// Files are registered after the builtins, so a file for an existing code
    /// replaces the compiled-in record. Any invalid file aborts startup.
    pub fn build_table(&self) -> Result<LocaleTable> {
        let mut table = LocaleTable::new()
            .with_default_locale(self.default_locale.clone())
            .with_strict(self.strict);

        if self.builtins {
            for record in locales::all() {
                table.register(record)?;
            }
        }

        for dir in &self.locale_dirs {
            for record in storage::load_dir(dir)? {
                let code = record.locale_code.clone();
                if table
                    .register(record)
                    .with_context(|| format!("registering locale from {}", dir.display()))?
                    .is_some()
                {
                    log::info!("{} overrides locale {}", dir.display(), code);
                }
            }
        }

        if !table.contains(&self.default_locale) {
            log::warn!(
                "default locale {} is not registered; unknown locales will have no fallback",
                self.default_locale
            );
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.default_locale, "en");
        assert!(config.strict);
        assert!(config.builtins);
        assert!(config.locale_dirs.is_empty());
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config: Config = serde_yaml::from_str("default_locale: hr\n").expect("yaml");
        assert_eq!(config.default_locale, "hr");
        assert!(config.strict);
    }

    #[test]
    fn unknown_yaml_field_rejected() {
        assert!(serde_yaml::from_str::<Config>("default_lokale: hr\n").is_err());
    }

    #[test]
    fn env_overrides() {
        let mut config = Config {
            locale_dirs: vec![PathBuf::from("base")],
            ..Config::default()
        };
        let joined = env::join_paths(["one", "two"]).expect("join");
        config.apply_vars(|key| match key {
            DEFAULT_LOCALE_ENV => Some(OsString::from(" hr ")),
            LOCALE_DIR_ENV => Some(joined.clone()),
            _ => None,
        });
        assert_eq!(config.default_locale, "hr");
        assert_eq!(
            config.locale_dirs,
            vec![PathBuf::from("base"), PathBuf::from("one"), PathBuf::from("two")]
        );
    }

    #[test]
    fn blank_env_default_ignored() {
        let mut config = Config::default();
        config.apply_vars(|key| (key == DEFAULT_LOCALE_ENV).then(|| OsString::from("  ")));
        assert_eq!(config.default_locale, "en");
    }

    #[test]
    fn builds_builtin_table() {
        let table = Config::default().build_table().expect("builtins are valid");
        assert!(table.contains("en"));
        assert!(table.contains("hr"));
    }

    #[test]
    fn builtins_can_be_disabled() {
        let config = Config {
            builtins: false,
            ..Config::default()
        };
        assert!(config.build_table().expect("empty table").is_empty());
    }
}
