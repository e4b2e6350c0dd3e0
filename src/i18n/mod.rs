// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language code metadata.
//!
//! Plotly names its locale modules after ISO 639-1 codes, optionally with a
//! region subtag (`"hr"`, `"pt-BR"`). This module validates the language part
//! and supplies the display names shown by `plotly-locales list`.

mod iso639;

pub use iso639::{is_valid_iso639_1, language_name, native_name};

/// Language part of a locale code: `"pt"` for `"pt-BR"`.
pub fn primary_subtag(code: &str) -> &str {
    code.split(['-', '_']).next().unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_subtag_strips_region() {
        assert_eq!(primary_subtag("pt-BR"), "pt");
        assert_eq!(primary_subtag("zh-Hant-TW"), "zh");
        assert_eq!(primary_subtag("hr"), "hr");
    }
}
