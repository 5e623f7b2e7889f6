//! Module declaration and host lifecycle implementation
//!
//! Every method here is a hook boundary: failures are logged and turned
//! into the output the host can live with (`false`, `""`, or an admin
//! error message). Nothing propagates into the host's page rendering.

use crate::api::native::NativeClient;
use crate::cache::RenderCache;
use crate::config::Config;
use crate::contract::{
    AdminFormValues, AdminOutcome, BannerError, Hook, LanguageId, RequestContext, ShopHost,
    TextBannerApi,
};
use crate::domain::{EventPublisher, Service, SettingsStore};
use std::collections::HashMap;
use std::sync::Arc;

/// Confirmation shown after a successful admin submission
pub const SETTINGS_UPDATED_MESSAGE: &str = "The settings have been updated.";

/// Text banner module
pub struct TextBannerModule {
    config: Config,
    service: Arc<Service>,
    host: Arc<dyn ShopHost>,
}

impl TextBannerModule {
    pub fn new(config: Config, service: Arc<Service>, host: Arc<dyn ShopHost>) -> Self {
        Self {
            config,
            service,
            host,
        }
    }

    /// Build the service and its render cache from a store
    pub fn with_store(
        config: Config,
        store: Arc<dyn SettingsStore>,
        event_publisher: Arc<dyn EventPublisher>,
        host: Arc<dyn ShopHost>,
    ) -> Self {
        let cache = Arc::new(RenderCache::new(config.cache_capacity));
        let service = Arc::new(Service::new(store, cache, event_publisher, &config));
        Self::new(config, service, host)
    }

    pub fn service(&self) -> &Arc<Service> {
        &self.service
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn host(&self) -> &Arc<dyn ShopHost> {
        &self.host
    }

    /// In-process client for other modules
    pub fn client(&self) -> Arc<dyn TextBannerApi> {
        Arc::new(NativeClient::new(self.service.clone()))
    }

    // ===== Lifecycle =====

    /// Register hooks and seed defaults for every shop language
    pub async fn install(&self) -> bool {
        match self.try_install().await {
            Ok(()) => {
                tracing::info!("text banner installed");
                true
            }
            Err(e) => {
                tracing::error!(error = ?e, "text banner install failed");
                false
            }
        }
    }

    async fn try_install(&self) -> anyhow::Result<()> {
        for hook in Hook::ALL {
            self.host.register_hook(hook).await?;
        }
        let languages = self.host.languages().await?;
        self.service.install(&languages).await?;
        Ok(())
    }

    /// Remove every banner key and the module's assets.
    ///
    /// Each step runs even when the previous one failed.
    pub async fn uninstall(&self) -> bool {
        let mut ok = true;
        if let Err(e) = self.service.teardown().await {
            tracing::error!(error = %e, "text banner settings removal failed");
            ok = false;
        }
        if let Err(e) = self.host.delete_module_assets().await {
            tracing::error!(error = ?e, "text banner asset removal failed");
            ok = false;
        }
        self.service.cache().clear();
        ok
    }

    /// `actionObjectLanguageAddAfter`
    pub async fn on_language_added(&self, language: LanguageId) -> bool {
        match self.service.initialize_for_new_language(language).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(%language, error = %e, "text banner hook error");
                false
            }
        }
    }

    // ===== Render hooks =====

    /// `displayHeader`: styling block plus stylesheet registration while the
    /// banner is enabled for the request language
    pub async fn display_header(&self, ctx: &RequestContext) -> String {
        match self.try_display_header(ctx).await {
            Ok(html) => html,
            Err(e) => {
                tracing::error!(language = %ctx.language, error = %e, "text banner hook error");
                String::new()
            }
        }
    }

    async fn try_display_header(&self, ctx: &RequestContext) -> Result<String, BannerError> {
        let Some(styling) = self.service.render_styling(ctx.language).await? else {
            return Ok(String::new());
        };
        self.host
            .add_stylesheet(&self.config.stylesheet_path, &self.config.stylesheet_media);
        Ok(styling)
    }

    /// `displayTop`: banner markup, cached per template, language and shop context
    pub async fn display_top(&self, ctx: &RequestContext) -> String {
        match self.service.render_banner(ctx).await {
            Ok(html) => html,
            Err(e) => {
                tracing::error!(language = %ctx.language, error = %e, "text banner hook error");
                String::new()
            }
        }
    }

    /// `displayBanner` renders the same fragment as `displayTop`
    pub async fn display_banner(&self, ctx: &RequestContext) -> String {
        self.display_top(ctx).await
    }

    // ===== Admin =====

    /// Handle the configuration page action. `None` means the form was not submitted.
    pub async fn admin_content(&self, form: Option<&HashMap<String, String>>) -> AdminOutcome {
        let Some(form) = form else {
            return AdminOutcome::Idle;
        };
        match self.try_save(form).await {
            Ok(()) => AdminOutcome::Saved(SETTINGS_UPDATED_MESSAGE.to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "text banner settings were not saved");
                AdminOutcome::Failed(e.to_string())
            }
        }
    }

    async fn try_save(&self, form: &HashMap<String, String>) -> Result<(), BannerError> {
        let languages = self.host.languages().await.map_err(|e| {
            tracing::error!(error = ?e, "failed to list shop languages");
            BannerError::persistence("failed to list shop languages")
        })?;
        self.service.save_submission(form, &languages).await
    }

    /// Values to populate the admin form; defaults when nothing can be read
    pub async fn admin_form_values(&self) -> AdminFormValues {
        let languages = match self.host.languages().await {
            Ok(languages) => languages,
            Err(e) => {
                tracing::error!(error = ?e, "failed to list shop languages");
                return AdminFormValues::default();
            }
        };
        match self.service.form_values(&languages).await {
            Ok(values) => values,
            Err(e) => {
                tracing::error!(error = %e, "failed to load banner form values");
                AdminFormValues {
                    languages: languages
                        .into_iter()
                        .map(|language| (language, Default::default()))
                        .collect(),
                    ..AdminFormValues::default()
                }
            }
        }
    }
}
