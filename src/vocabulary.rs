// SPDX-License-Identifier: PMPL-1.0-or-later

//! The host library's UI vocabulary.
//!
//! Plotly looks up modebar labels, title placeholders, hover labels and
//! notifier messages by their English text. A locale dictionary may only use
//! these phrases as keys; a phrase a locale leaves out is rendered through the
//! fallback chain in [`crate::table::LocaleTable::translate`].

use crate::types::LocaleRecord;

/// Every phrase the host library passes through its translation hook.
pub const UI_PHRASES: &[&str] = &[
    // Modebar buttons
    "Autoscale",
    "Box Select",
    "Compare data on hover",
    "Download plot",
    "Download plot as a png",
    "Draw circle",
    "Draw closed freeform",
    "Draw line",
    "Draw open freeform",
    "Draw rectangle",
    "Edit in Chart Studio",
    "Erase active shape",
    "Lasso Select",
    "Orbital rotation",
    "Pan",
    "Produced with Plotly.js",
    "Reset",
    "Reset axes",
    "Reset camera to default",
    "Reset camera to last save",
    "Reset view",
    "Reset views",
    "Show closest data on hover",
    "Toggle Spike Lines",
    "Toggle show closest data on hover",
    "Turntable rotation",
    "Zoom",
    "Zoom in",
    "Zoom out",
    // Editable title placeholders
    "Click to enter Colorscale title",
    "Click to enter Component A title",
    "Click to enter Component B title",
    "Click to enter Component C title",
    "Click to enter Plot title",
    "Click to enter X axis title",
    "Click to enter Y axis title",
    "Click to enter radial axis title",
    // Notifier
    "Double-click on legend to isolate one trace",
    "Double-click to zoom back out",
    "IE only supports svg.  Changing format to svg.",
    "Snapshot succeeded",
    "Sorry, there was a problem downloading your snapshot!",
    "Taking snapshot - this may take a few seconds",
    // Hover labels
    "close:",
    "high:",
    "incoming flow count:",
    "kde:",
    "lat:",
    "lon:",
    "low:",
    "lower fence:",
    "max:",
    "mean:",
    "median:",
    "min:",
    "new text",
    "open:",
    "outgoing flow count:",
    "q1:",
    "q3:",
    "source:",
    "target:",
    "trace",
    "upper fence:",
];

/// Whether the host library ever looks `phrase` up.
pub fn is_known_phrase(phrase: &str) -> bool {
    UI_PHRASES.contains(&phrase)
}

/// How much of the vocabulary a locale translates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coverage {
    pub translated: usize,
    pub total: usize,
    /// Vocabulary phrases the locale leaves to the fallback chain.
    pub missing: Vec<&'static str>,
}

impl Coverage {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.translated as f64 * 100.0 / self.total as f64
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

pub fn coverage(record: &LocaleRecord) -> Coverage {
    let missing: Vec<&'static str> = UI_PHRASES
        .iter()
        .copied()
        .filter(|phrase| !record.dictionary.contains_key(*phrase))
        .collect();
    Coverage {
        translated: UI_PHRASES.len() - missing.len(),
        total: UI_PHRASES.len(),
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locales;

    #[test]
    fn vocabulary_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for phrase in UI_PHRASES {
            assert!(seen.insert(*phrase), "duplicate phrase {:?}", phrase);
        }
    }

    #[test]
    fn croatian_keys_are_all_known() {
        let hr = locales::croatian();
        for key in hr.dictionary.keys() {
            assert!(is_known_phrase(key), "hr uses unknown phrase {:?}", key);
        }
    }

    #[test]
    fn croatian_coverage_reports_drawing_tools_missing() {
        let report = coverage(&locales::croatian());
        assert_eq!(report.translated, locales::croatian().dictionary.len());
        assert!(report.missing.contains(&"Draw line"));
        assert!(!report.missing.contains(&"Pan"));
        assert!(!report.is_complete());
    }

    #[test]
    fn english_base_translates_nothing() {
        let report = coverage(&locales::english());
        assert_eq!(report.translated, 0);
        assert_eq!(report.percent(), 0.0);
    }
}
