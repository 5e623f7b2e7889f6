//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    AdminFormValues, BannerColors, BannerError, BannerSnapshot, LanguageId, LanguageSettings,
    TextBannerApi,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl TextBannerApi for NativeClient {
    async fn load_for_language(
        &self,
        language: LanguageId,
    ) -> Result<LanguageSettings, BannerError> {
        self.service.load_for_language(language).await
    }

    async fn load_global(&self) -> Result<BannerColors, BannerError> {
        self.service.load_global().await
    }

    async fn snapshot(&self, language: LanguageId) -> Result<BannerSnapshot, BannerError> {
        self.service.snapshot(language).await
    }

    async fn form_values(
        &self,
        languages: &[LanguageId],
    ) -> Result<AdminFormValues, BannerError> {
        self.service.form_values(languages).await
    }

    async fn save_submission(
        &self,
        form: &HashMap<String, String>,
        languages: &[LanguageId],
    ) -> Result<(), BannerError> {
        self.service.save_submission(form, languages).await
    }

    async fn initialize_for_new_language(&self, language: LanguageId) -> Result<(), BannerError> {
        self.service.initialize_for_new_language(language).await
    }

    async fn teardown(&self) -> Result<(), BannerError> {
        self.service.teardown().await
    }
}
