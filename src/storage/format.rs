// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization of locale records

use crate::types::LocaleRecord;
use anyhow::{anyhow, Context, Result};
use clap::ValueEnum;

const JS_MODULE_HEAD: &str = "export function locale()";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordFormat {
    Json,
    Yaml,
    /// `export function locale() { return {...}; }`, the shape Plotly's
    /// locale bundles are distributed in.
    Js,
}

impl RecordFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(RecordFormat::Json),
            "yaml" | "yml" => Some(RecordFormat::Yaml),
            "js" | "mjs" | "javascript" => Some(RecordFormat::Js),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            RecordFormat::Json => "json",
            RecordFormat::Yaml => "yaml",
            RecordFormat::Js => "js",
        }
    }

    pub fn serialize(&self, record: &LocaleRecord) -> Result<String> {
        match self {
            RecordFormat::Json => Ok(serde_json::to_string_pretty(record)?),
            RecordFormat::Yaml => Ok(serde_yaml::to_string(record)?),
            RecordFormat::Js => Ok(format!(
                "{} {{ return {}; }}\n",
                JS_MODULE_HEAD,
                serde_json::to_string(record)?
            )),
        }
    }

    pub fn deserialize(&self, text: &str) -> Result<LocaleRecord> {
        match self {
            RecordFormat::Json => {
                serde_json::from_str(text).context("parsing locale record as json")
            }
            RecordFormat::Yaml => {
                serde_yaml::from_str(text).context("parsing locale record as yaml")
            }
            RecordFormat::Js => {
                let body = js_module_body(text)?;
                serde_json::from_str(&quote_bare_keys(body))
                    .context(
                        "parsing object literal in locale module \
                         (only double-quoted strings and identifier keys are supported)",
                    )
            }
        }
    }
}

/// The object literal returned by a `locale()` module.
fn js_module_body(text: &str) -> Result<&str> {
    let rest = text
        .trim()
        .strip_prefix(JS_MODULE_HEAD)
        .ok_or_else(|| anyhow!("locale module must start with `{}`", JS_MODULE_HEAD))?;
    let rest = rest
        .trim_start()
        .strip_prefix('{')
        .and_then(|r| r.trim_end().strip_suffix('}'))
        .ok_or_else(|| anyhow!("locale module has no function body"))?;
    let body = rest
        .trim()
        .strip_prefix("return")
        .ok_or_else(|| anyhow!("locale module body must be a single return statement"))?;
    Ok(body.trim().trim_end_matches(';').trim_end())
}

/// Quote identifier keys (`{Pan:"x"}` -> `{"Pan":"x"}`) so a JavaScript
/// object literal with double-quoted strings parses as JSON.
fn quote_bare_keys(literal: &str) -> String {
    let chars: Vec<char> = literal.chars().collect();
    let mut out = String::with_capacity(literal.len() + 64);
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '"' {
            // Copy the string literal through, escapes included.
            out.push(c);
            i += 1;
            while i < chars.len() {
                out.push(chars[i]);
                if chars[i] == '\\' && i + 1 < chars.len() {
                    out.push(chars[i + 1]);
                    i += 2;
                    continue;
                }
                i += 1;
                if chars[i - 1] == '"' {
                    break;
                }
            }
            continue;
        }
        if c.is_ascii_alphabetic() || c == '_' || c == '$' {
            let start = i;
            while i < chars.len() && is_ident_char(chars[i]) {
                i += 1;
            }
            let ident: String = chars[start..i].iter().collect();
            let mut j = i;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            if j < chars.len() && chars[j] == ':' {
                out.push('"');
                out.push_str(&ident);
                out.push('"');
            } else {
                out.push_str(&ident);
            }
            continue;
        }
        out.push(c);
        i += 1;
    }
    out
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locales;

    #[test]
    fn parse_names() {
        assert_eq!(RecordFormat::parse("YML"), Some(RecordFormat::Yaml));
        assert_eq!(RecordFormat::parse("mjs"), Some(RecordFormat::Js));
        assert_eq!(RecordFormat::parse("toml"), None);
    }

    #[test]
    fn round_trips_in_every_format() {
        let hr = locales::croatian();
        for format in [RecordFormat::Json, RecordFormat::Yaml, RecordFormat::Js] {
            let text = format.serialize(&hr).expect("serialize");
            let back = format.deserialize(&text).expect("deserialize");
            assert_eq!(back, hr, "{:?} round trip", format);
        }
    }

    #[test]
    fn json_uses_host_field_names() {
        let text = RecordFormat::Json
            .serialize(&locales::english())
            .expect("serialize");
        let value: serde_json::Value = serde_json::from_str(&text).expect("json");
        assert_eq!(value["moduleType"], "locale");
        assert_eq!(value["name"], "en");
        assert_eq!(value["format"]["shortMonths"][0], "Jan");
        assert_eq!(value["format"]["dateTime"], "%x, %X");
        assert!(value.get("localeCode").is_none());
    }

    #[test]
    fn optional_format_fields_are_omitted() {
        let text = RecordFormat::Json
            .serialize(&locales::croatian())
            .expect("serialize");
        assert!(!text.contains("periods"));
        assert!(!text.contains("grouping"));
    }

    #[test]
    fn reads_plotly_distributed_module() {
        let source = r#"export function locale() { return {moduleType:"locale",name:"hr",dictionary:{Pan:"Pomicanje","Zoom in":"Povećaj zumiranje","a \"quoted\" key:":"x:y"},format:{days:["Nedjelja","Ponedjeljak","Utorak","Srijeda","Četvrtak","Petak","Subota"],shortDays:["Ned","Pon","Uto","Sri","Čet","Pet","Sub"],months:["Siječanj","Veljača","Ožujak","Travanj","Svibanj","Lipanj","Srpanj","Kolovoz","Rujan","Listopad","Studeni","Prosinac"],shortMonths:["Sij","Velj","Ožu","Tra","Svi","Lip","Srp","Kol","Ruj","Lis","Stu","Pro"],date:"%d.%m.%Y.",decimal:",",thousands:""}} }"#;
        let record = RecordFormat::Js.deserialize(source).expect("module parses");
        assert_eq!(record.locale_code, "hr");
        assert_eq!(record.translate("Pan"), Some("Pomicanje"));
        assert_eq!(record.translate("Zoom in"), Some("Povećaj zumiranje"));
        assert_eq!(record.translate("a \"quoted\" key:"), Some("x:y"));
        assert_eq!(record.format.months[0], "Siječanj");
        assert_eq!(record.format, locales::croatian().format);
    }

    #[test]
    fn rejects_non_module_text() {
        assert!(RecordFormat::Js.deserialize("const x = 1;").is_err());
        assert!(RecordFormat::Js
            .deserialize("export function locale() { console.log(1) }")
            .is_err());
    }

    #[test]
    fn single_quoted_module_names_the_limitation() {
        let err = RecordFormat::Js
            .deserialize("export function locale() { return {moduleType:'locale',name:'hr'}; }")
            .expect_err("single quotes are not JSON");
        assert!(format!("{:#}", err).contains("only double-quoted strings"));
    }

    #[test]
    fn bare_keys_quoted_outside_strings_only() {
        assert_eq!(
            quote_bare_keys(r#"{a:"b:c",d_1 : [true,null]}"#),
            r#"{"a":"b:c","d_1" : [true,null]}"#
        );
    }
}
