//! Contract model to DTO conversions

use super::dto::{BannerColorsDto, BannerSettingsResponse, FragmentQuery, LanguageSettingsDto};
use crate::contract::{
    AdminFormValues, BannerColors, LanguageId, LanguageSettings, RequestContext, ShopContext,
};

impl From<BannerColors> for BannerColorsDto {
    fn from(colors: BannerColors) -> Self {
        Self {
            background_color: colors.background,
            background_hover_color: colors.background_hover,
            foreground_color: colors.foreground,
        }
    }
}

impl From<(LanguageId, LanguageSettings)> for LanguageSettingsDto {
    fn from((language, settings): (LanguageId, LanguageSettings)) -> Self {
        Self {
            language_id: language.get(),
            link: settings.link,
            text: settings.text,
            enabled: settings.enabled,
        }
    }
}

impl From<AdminFormValues> for BannerSettingsResponse {
    fn from(values: AdminFormValues) -> Self {
        Self {
            languages: values.languages.into_iter().map(Into::into).collect(),
            colors: values.colors.into(),
        }
    }
}

impl From<FragmentQuery> for RequestContext {
    fn from(query: FragmentQuery) -> Self {
        RequestContext::new(LanguageId::new(query.lang), ShopContext::new(query.context))
    }
}
