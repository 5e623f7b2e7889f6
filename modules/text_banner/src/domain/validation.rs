//! Admin form parsing
//!
//! Turns the raw submitted fields into a `BannerSubmission` keyed by
//! `LanguageId`. Field names are resolved once here; nothing downstream
//! assembles keys from strings.

use crate::contract::{
    parse_flag, BannerColors, BannerError, BannerSubmission, LanguageId, LanguageSettings,
};
use std::collections::{BTreeMap, HashMap};

/// Submitted form field names
pub mod fields {
    pub const BACKGROUND_COLOR: &str = "backgroundColor";
    pub const BACKGROUND_HOVER_COLOR: &str = "backgroundHoverColor";
    pub const FOREGROUND_COLOR: &str = "foregroundColor";
    pub const ENABLED: &str = "enabled";
}

/// Per-language form field, submitted as `<field>_<languageId>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LanguageField {
    Link,
    Text,
    Enabled,
}

/// Build a submission for `languages` from raw form values.
///
/// Missing text fields submit as empty strings. `enabled` is read once for
/// the whole form and fans out to every language unless an `enabled_<id>`
/// field overrides it. Fields addressed to languages outside `languages`
/// are ignored.
pub fn parse_submission(
    form: &HashMap<String, String>,
    languages: &[LanguageId],
) -> Result<BannerSubmission, BannerError> {
    if languages.is_empty() {
        return Err(BannerError::validation(
            "languages",
            "the shop has no languages to configure",
        ));
    }

    let enabled = parse_enabled(fields::ENABLED, form.get(fields::ENABLED))?;

    let mut per_language: BTreeMap<LanguageId, LanguageSettings> = languages
        .iter()
        .map(|&language| {
            (
                language,
                LanguageSettings {
                    enabled,
                    ..LanguageSettings::default()
                },
            )
        })
        .collect();

    for (name, value) in form {
        let Some((field, language)) = split_language_field(name) else {
            continue;
        };
        let Some(settings) = per_language.get_mut(&language) else {
            tracing::debug!(field = %name, "ignoring field for unknown language");
            continue;
        };
        match field {
            LanguageField::Link => settings.link = value.clone(),
            LanguageField::Text => settings.text = value.clone(),
            LanguageField::Enabled => settings.enabled = parse_enabled(name, Some(value))?,
        }
    }

    let colors = BannerColors {
        background: text_field(form, fields::BACKGROUND_COLOR),
        background_hover: text_field(form, fields::BACKGROUND_HOVER_COLOR),
        foreground: text_field(form, fields::FOREGROUND_COLOR),
    };

    Ok(BannerSubmission {
        languages: per_language,
        colors,
    })
}

fn text_field(form: &HashMap<String, String>, name: &str) -> String {
    form.get(name).cloned().unwrap_or_default()
}

fn parse_enabled(field: &str, value: Option<&String>) -> Result<bool, BannerError> {
    let Some(value) = value else {
        return Ok(false);
    };
    parse_flag(value).ok_or_else(|| {
        BannerError::validation(field, format!("'{value}' is not a boolean value"))
    })
}

fn split_language_field(name: &str) -> Option<(LanguageField, LanguageId)> {
    let (prefix, id) = name.rsplit_once('_')?;
    let field = match prefix {
        "link" => LanguageField::Link,
        "text" => LanguageField::Text,
        "enabled" => LanguageField::Enabled,
        _ => return None,
    };
    let id = id.parse::<u32>().ok()?;
    Some((field, LanguageId::new(id)))
}
