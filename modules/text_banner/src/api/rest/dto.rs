//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Per-language banner values
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LanguageSettingsDto {
    /// Shop language ID
    #[schema(example = 1)]
    pub language_id: u32,

    /// Banner link, empty for a non-clickable banner
    #[schema(example = "/summer-sale")]
    pub link: String,

    /// Banner text
    #[schema(example = "Summer sale: 20% off everything")]
    pub text: String,

    /// Whether the banner is shown for this language
    pub enabled: bool,
}

/// Shop-wide banner colors
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BannerColorsDto {
    #[schema(example = "#1d4ed8")]
    pub background_color: String,
    #[schema(example = "#1e40af")]
    pub background_hover_color: String,
    #[schema(example = "#ffffff")]
    pub foreground_color: String,
}

/// Values shown in the admin form
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BannerSettingsResponse {
    pub languages: Vec<LanguageSettingsDto>,
    pub colors: BannerColorsDto,
}

/// Result of a successful submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveSettingsResponse {
    #[schema(example = "The settings have been updated.")]
    pub message: String,
}

/// Query parameters for fragment rendering
#[derive(Debug, Clone, Deserialize)]
pub struct FragmentQuery {
    /// Language to render for
    pub lang: u32,
    /// Opaque shop context token
    #[serde(default)]
    pub context: String,
}
