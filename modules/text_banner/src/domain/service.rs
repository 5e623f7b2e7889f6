//! Domain service - banner settings orchestration

use crate::cache::{RenderCache, RenderCacheKey};
use crate::config::Config;
use crate::contract::{
    AdminFormValues, BannerColors, BannerError, BannerSnapshot, BannerSubmission, ConfigKey,
    ConfigValue, LanguageId, LanguageSettings, RequestContext, Scope,
};
use crate::presenter;
use super::events::{BannerEvent, EventPublisher};
use super::store::{SettingWrite, SettingsStore};
use super::validation::parse_submission;
use std::collections::HashMap;
use std::sync::Arc;

/// Domain service for banner settings
pub struct Service {
    store: Arc<dyn SettingsStore>,
    cache: Arc<RenderCache>,
    event_publisher: Arc<dyn EventPublisher>,
    template_name: String,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        store: Arc<dyn SettingsStore>,
        cache: Arc<RenderCache>,
        event_publisher: Arc<dyn EventPublisher>,
        config: &Config,
    ) -> Self {
        Self {
            store,
            cache,
            event_publisher,
            template_name: config.template_name.clone(),
        }
    }

    pub fn template_name(&self) -> &str {
        &self.template_name
    }

    pub fn cache(&self) -> &Arc<RenderCache> {
        &self.cache
    }

    // ===== Reads =====

    /// Link, text and enabled flag for a language; `""`/`false` when unset
    pub async fn load_for_language(
        &self,
        language: LanguageId,
    ) -> Result<LanguageSettings, BannerError> {
        let scope = Scope::Language(language);
        Ok(LanguageSettings {
            link: self.read(ConfigKey::Link, scope).await?.into_text(),
            text: self.read(ConfigKey::Text, scope).await?.into_text(),
            enabled: self.read(ConfigKey::Enabled, scope).await?.as_flag(),
        })
    }

    /// Shop-wide colors; `""` when unset
    pub async fn load_global(&self) -> Result<BannerColors, BannerError> {
        Ok(BannerColors {
            background: self
                .read(ConfigKey::BackgroundColor, Scope::Global)
                .await?
                .into_text(),
            background_hover: self
                .read(ConfigKey::BackgroundHoverColor, Scope::Global)
                .await?
                .into_text(),
            foreground: self
                .read(ConfigKey::ForegroundColor, Scope::Global)
                .await?
                .into_text(),
        })
    }

    pub async fn snapshot(&self, language: LanguageId) -> Result<BannerSnapshot, BannerError> {
        Ok(BannerSnapshot {
            language,
            settings: self.load_for_language(language).await?,
            colors: self.load_global().await?,
        })
    }

    /// Current values for the admin form.
    ///
    /// A language that cannot be read is shown with defaults so one bad row
    /// does not hide the whole form.
    pub async fn form_values(
        &self,
        languages: &[LanguageId],
    ) -> Result<AdminFormValues, BannerError> {
        let mut values = AdminFormValues {
            colors: self.load_global().await?,
            ..AdminFormValues::default()
        };
        for &language in languages {
            let settings = match self.load_for_language(language).await {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!(%language, error = %e, "showing defaults for unreadable language");
                    LanguageSettings::default()
                }
            };
            values.languages.insert(language, settings);
        }
        Ok(values)
    }

    // ===== Writes =====

    /// Parse and persist a raw admin form submission
    pub async fn save_submission(
        &self,
        form: &HashMap<String, String>,
        languages: &[LanguageId],
    ) -> Result<(), BannerError> {
        let submission = parse_submission(form, languages)?;
        self.save(&submission).await
    }

    /// Persist a submission as one batch: link/text/enabled per language plus the three colors.
    pub async fn save(&self, submission: &BannerSubmission) -> Result<(), BannerError> {
        let mut writes = Vec::with_capacity(submission.languages.len() * 3 + 3);
        for (&language, settings) in &submission.languages {
            let scope = Scope::Language(language);
            writes.push(SettingWrite::new(
                ConfigKey::Link,
                scope,
                ConfigValue::Text(settings.link.clone()),
            ));
            writes.push(SettingWrite::new(
                ConfigKey::Text,
                scope,
                ConfigValue::Text(settings.text.clone()),
            ));
            writes.push(SettingWrite::new(
                ConfigKey::Enabled,
                scope,
                ConfigValue::Flag(settings.enabled),
            ));
        }
        let colors = &submission.colors;
        for (key, value) in [
            (ConfigKey::BackgroundColor, &colors.background),
            (ConfigKey::BackgroundHoverColor, &colors.background_hover),
            (ConfigKey::ForegroundColor, &colors.foreground),
        ] {
            writes.push(SettingWrite::new(
                key,
                Scope::Global,
                ConfigValue::Text(value.clone()),
            ));
        }

        let result = self.store.apply(&writes).await;
        // A failed batch may still have landed partially.
        self.cache.invalidate(&self.template_name);
        if let Err(e) = result {
            tracing::error!(error = ?e, writes = writes.len(), "failed to save banner settings");
            return Err(BannerError::persistence("failed to save banner settings"));
        }

        tracing::info!(
            languages = submission.languages.len(),
            "banner settings updated"
        );
        self.publish(BannerEvent::settings_saved(
            submission.languages.keys().copied(),
            &self.template_name,
        ))
        .await;
        Ok(())
    }

    /// Seed empty/disabled values for a language. Existing values are kept,
    /// so calling this repeatedly is harmless. Missing global colors are
    /// seeded too.
    pub async fn initialize_for_new_language(
        &self,
        language: LanguageId,
    ) -> Result<(), BannerError> {
        let mut writes = Vec::new();
        for key in ConfigKey::ALL {
            let scope = key.scope_for(language);
            let existing = self
                .store
                .fetch(key, scope)
                .await
                .map_err(|e| persistence_error("read", key, e))?;
            if existing.is_none() {
                writes.push(SettingWrite::new(key, scope, ConfigValue::absent(key.kind())));
            }
        }

        if writes.is_empty() {
            tracing::debug!(%language, "banner settings already initialized");
            return Ok(());
        }

        let result = self.store.apply(&writes).await;
        self.cache.invalidate(&self.template_name);
        if let Err(e) = result {
            tracing::error!(%language, error = ?e, "failed to initialize banner settings");
            return Err(BannerError::persistence(format!(
                "failed to initialize banner settings for language {language}"
            )));
        }

        tracing::info!(%language, seeded = writes.len(), "banner settings initialized");
        self.publish(BannerEvent::language_initialized(language, writes.len()))
            .await;
        Ok(())
    }

    /// Initialize every given language
    pub async fn install(&self, languages: &[LanguageId]) -> Result<(), BannerError> {
        for &language in languages {
            self.initialize_for_new_language(language).await?;
        }
        Ok(())
    }

    /// Delete all six keys in every scope.
    ///
    /// Every key is attempted even if an earlier delete fails; the first
    /// failure is reported.
    pub async fn teardown(&self) -> Result<(), BannerError> {
        let mut first_error = None;
        for key in ConfigKey::ALL {
            if let Err(e) = self.store.delete(key).await {
                let error = persistence_error("delete", key, e);
                first_error.get_or_insert(error);
            }
        }
        self.cache.invalidate(&self.template_name);

        if let Some(error) = first_error {
            return Err(error);
        }
        tracing::info!("banner settings removed");
        self.publish(BannerEvent::settings_removed()).await;
        Ok(())
    }

    // ===== Rendering =====

    /// Banner markup for the request, read through the render cache
    pub async fn render_banner(&self, ctx: &RequestContext) -> Result<String, BannerError> {
        let key = RenderCacheKey::new(
            self.template_name.as_str(),
            ctx.language,
            ctx.shop_context.clone(),
        );
        if let Some(html) = self.cache.get(&key) {
            return Ok(html);
        }

        let snapshot = self.snapshot(ctx.language).await?;
        let html = presenter::render_banner(&snapshot)?;
        self.cache.put(key, html.clone());
        Ok(html)
    }

    /// Styling block for the language, `None` while the banner is disabled there
    pub async fn render_styling(
        &self,
        language: LanguageId,
    ) -> Result<Option<String>, BannerError> {
        let enabled = self
            .read(ConfigKey::Enabled, Scope::Language(language))
            .await?
            .as_flag();
        if !enabled {
            return Ok(None);
        }
        let colors = self.load_global().await?;
        presenter::render_styling(&colors).map(Some)
    }

    // ===== Helper Methods =====

    async fn read(&self, key: ConfigKey, scope: Scope) -> Result<ConfigValue, BannerError> {
        self.store
            .get(key, scope)
            .await
            .map_err(|e| persistence_error("read", key, e))
    }

    async fn publish(&self, event: BannerEvent) {
        if let Err(e) = self.event_publisher.publish(event).await {
            // Log error but don't fail the operation
            tracing::warn!(error = %e, "failed to publish banner event");
        }
    }
}

fn persistence_error(operation: &str, key: ConfigKey, error: anyhow::Error) -> BannerError {
    tracing::error!(%key, error = ?error, "settings {operation} failed");
    BannerError::persistence(format!("failed to {operation} {key}"))
}
