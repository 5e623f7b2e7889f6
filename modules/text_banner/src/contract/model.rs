//! Contract models for the text banner module
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use std::collections::BTreeMap;
use std::fmt;

/// Storefront language identifier, one per shop language
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LanguageId(u32);

impl LanguageId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for LanguageId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque host-supplied token (shop, currency, customer group, ...) that
/// partitions rendered output. Never inspected by this module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ShopContext(String);

impl ShopContext {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Type of the value stored under a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Flag,
}

/// The six persisted banner keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigKey {
    Link,
    Text,
    BackgroundColor,
    BackgroundHoverColor,
    ForegroundColor,
    Enabled,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 6] = [
        ConfigKey::Link,
        ConfigKey::Text,
        ConfigKey::BackgroundColor,
        ConfigKey::BackgroundHoverColor,
        ConfigKey::ForegroundColor,
        ConfigKey::Enabled,
    ];

    /// Name under which the key is persisted
    pub const fn name(self) -> &'static str {
        match self {
            ConfigKey::Link => "TEXTBANNER_LINK",
            ConfigKey::Text => "TEXTBANNER_TEXT",
            ConfigKey::BackgroundColor => "TEXTBANNER_BGCOLOR",
            ConfigKey::BackgroundHoverColor => "TEXTBANNER_BGCOLORHOVER",
            ConfigKey::ForegroundColor => "TEXTBANNER_FGCOLOR",
            ConfigKey::Enabled => "TEXTBANNER_ENABLED",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }

    /// Whether the key holds one value per language
    pub const fn is_per_language(self) -> bool {
        matches!(
            self,
            ConfigKey::Link | ConfigKey::Text | ConfigKey::Enabled
        )
    }

    pub const fn kind(self) -> ValueKind {
        match self {
            ConfigKey::Enabled => ValueKind::Flag,
            _ => ValueKind::Text,
        }
    }

    /// Scope this key is addressed with for the given language
    pub const fn scope_for(self, language: LanguageId) -> Scope {
        if self.is_per_language() {
            Scope::Language(language)
        } else {
            Scope::Global
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Storage scope of a single value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scope {
    Global,
    Language(LanguageId),
}

/// Typed value read from the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Text(String),
    Flag(bool),
}

impl ConfigValue {
    /// Value reported for a key that has never been written
    pub fn absent(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Text => ConfigValue::Text(String::new()),
            ValueKind::Flag => ConfigValue::Flag(false),
        }
    }

    /// Decode a raw stored string. Unrecognized flag spellings read as `false`.
    pub fn decode(kind: ValueKind, raw: &str) -> Self {
        match kind {
            ValueKind::Text => ConfigValue::Text(raw.to_string()),
            ValueKind::Flag => ConfigValue::Flag(parse_flag(raw).unwrap_or(false)),
        }
    }

    /// Raw representation written to the store
    pub fn encode(&self) -> String {
        match self {
            ConfigValue::Text(text) => text.clone(),
            ConfigValue::Flag(true) => "1".to_string(),
            ConfigValue::Flag(false) => "0".to_string(),
        }
    }

    pub fn into_text(self) -> String {
        match self {
            ConfigValue::Text(text) => text,
            ConfigValue::Flag(flag) => ConfigValue::Flag(flag).encode(),
        }
    }

    pub fn as_flag(&self) -> bool {
        match self {
            ConfigValue::Flag(flag) => *flag,
            ConfigValue::Text(text) => parse_flag(text).unwrap_or(false),
        }
    }
}

/// Parse a boolean form/store value. Returns `None` for unrecognized spellings.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "" | "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

/// Per-language banner settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageSettings {
    pub link: String,
    pub text: String,
    pub enabled: bool,
}

/// Shop-wide banner colors, free-form CSS color strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BannerColors {
    pub background: String,
    pub background_hover: String,
    pub foreground: String,
}

impl BannerColors {
    pub fn new(
        background: impl Into<String>,
        background_hover: impl Into<String>,
        foreground: impl Into<String>,
    ) -> Self {
        Self {
            background: background.into(),
            background_hover: background_hover.into(),
            foreground: foreground.into(),
        }
    }
}

/// Everything needed to render the banner for one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerSnapshot {
    pub language: LanguageId,
    pub settings: LanguageSettings,
    pub colors: BannerColors,
}

/// A validated admin submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BannerSubmission {
    pub languages: BTreeMap<LanguageId, LanguageSettings>,
    pub colors: BannerColors,
}

/// Values used to populate the admin form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminFormValues {
    pub languages: BTreeMap<LanguageId, LanguageSettings>,
    pub colors: BannerColors,
}

/// Per-request storefront context handed to the render hooks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub language: LanguageId,
    pub shop_context: ShopContext,
}

impl RequestContext {
    pub fn new(language: LanguageId, shop_context: ShopContext) -> Self {
        Self {
            language,
            shop_context,
        }
    }
}

/// Host extension points this module attaches to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hook {
    DisplayBanner,
    DisplayHeader,
    ActionObjectLanguageAddAfter,
}

impl Hook {
    pub const ALL: [Hook; 3] = [
        Hook::DisplayBanner,
        Hook::DisplayHeader,
        Hook::ActionObjectLanguageAddAfter,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Hook::DisplayBanner => "displayBanner",
            Hook::DisplayHeader => "displayHeader",
            Hook::ActionObjectLanguageAddAfter => "actionObjectLanguageAddAfter",
        }
    }
}

/// Result of the admin configuration page action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminOutcome {
    /// No submission was made
    Idle,
    /// Settings were saved; carries the confirmation message
    Saved(String),
    /// Saving failed; carries the message shown to the admin
    Failed(String),
}
