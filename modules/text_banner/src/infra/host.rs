//! Standalone host
//!
//! Serves a fixed language list and records hook and stylesheet
//! registrations. Used when the module runs outside a shop platform and in
//! tests.

use crate::contract::{Hook, LanguageId, ShopHost};
use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};

#[derive(Default)]
pub struct StaticShopHost {
    languages: RwLock<Vec<LanguageId>>,
    hooks: Mutex<Vec<Hook>>,
    stylesheets: Mutex<Vec<(String, String)>>,
}

impl StaticShopHost {
    pub fn new(languages: Vec<LanguageId>) -> Self {
        Self {
            languages: RwLock::new(languages),
            ..Self::default()
        }
    }

    /// Register a language added after startup
    pub fn add_language(&self, language: LanguageId) {
        let mut languages = self.languages.write();
        if !languages.contains(&language) {
            languages.push(language);
        }
    }

    pub fn registered_hooks(&self) -> Vec<Hook> {
        self.hooks.lock().clone()
    }

    /// Stylesheets queued so far as (path, media)
    pub fn stylesheets(&self) -> Vec<(String, String)> {
        self.stylesheets.lock().clone()
    }
}

#[async_trait]
impl ShopHost for StaticShopHost {
    async fn languages(&self) -> anyhow::Result<Vec<LanguageId>> {
        Ok(self.languages.read().clone())
    }

    async fn register_hook(&self, hook: Hook) -> anyhow::Result<()> {
        tracing::debug!(hook = hook.name(), "hook registered");
        let mut hooks = self.hooks.lock();
        if !hooks.contains(&hook) {
            hooks.push(hook);
        }
        Ok(())
    }

    fn add_stylesheet(&self, path: &str, media: &str) {
        self.stylesheets
            .lock()
            .push((path.to_string(), media.to_string()));
    }

    async fn delete_module_assets(&self) -> anyhow::Result<()> {
        // No assets on disk outside a shop platform.
        Ok(())
    }
}
