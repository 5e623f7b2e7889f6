//! Host platform collaborator
//!
//! The embedding shop implements this trait; the module never reaches the
//! platform any other way.

use super::model::{Hook, LanguageId};
use async_trait::async_trait;

#[async_trait]
pub trait ShopHost: Send + Sync {
    /// All languages the shop knows about, active or not
    async fn languages(&self) -> anyhow::Result<Vec<LanguageId>>;

    /// Attach the module to a host extension point
    async fn register_hook(&self, hook: Hook) -> anyhow::Result<()>;

    /// Queue a stylesheet for the page being rendered
    fn add_stylesheet(&self, path: &str, media: &str);

    /// Remove static assets owned by the module
    async fn delete_module_assets(&self) -> anyhow::Result<()>;
}
