//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to read and write the banner settings.
//! NO HTTP - direct function calls for performance.

use super::{
    error::BannerError,
    model::{AdminFormValues, BannerColors, BannerSnapshot, LanguageId, LanguageSettings},
};
use async_trait::async_trait;
use std::collections::HashMap;

/// Text banner API for inter-module communication
#[async_trait]
pub trait TextBannerApi: Send + Sync {
    /// Per-language settings, defaulted when never written
    async fn load_for_language(&self, language: LanguageId)
        -> Result<LanguageSettings, BannerError>;

    /// Shop-wide colors, defaulted when never written
    async fn load_global(&self) -> Result<BannerColors, BannerError>;

    /// Language settings and colors together
    async fn snapshot(&self, language: LanguageId) -> Result<BannerSnapshot, BannerError>;

    /// Current values for the admin form
    async fn form_values(&self, languages: &[LanguageId])
        -> Result<AdminFormValues, BannerError>;

    /// Persist a raw admin form submission
    async fn save_submission(
        &self,
        form: &HashMap<String, String>,
        languages: &[LanguageId],
    ) -> Result<(), BannerError>;

    /// Seed defaults for a language without touching existing values
    async fn initialize_for_new_language(&self, language: LanguageId) -> Result<(), BannerError>;

    /// Remove every banner key in every scope
    async fn teardown(&self) -> Result<(), BannerError>;
}
