//! Settings store trait for data access
//!
//! Implementations are in infra/memory.rs and infra/storage/repositories.rs

use crate::contract::{ConfigKey, ConfigValue, Scope};
use anyhow::Result;
use async_trait::async_trait;

/// One pending write in a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingWrite {
    pub key: ConfigKey,
    pub scope: Scope,
    pub value: ConfigValue,
}

impl SettingWrite {
    pub fn new(key: ConfigKey, scope: Scope, value: ConfigValue) -> Self {
        Self { key, scope, value }
    }
}

/// Key/value persistence for banner settings
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Raw stored value, `None` when the key was never written for this scope
    async fn fetch(&self, key: ConfigKey, scope: Scope) -> Result<Option<String>>;

    /// Create or replace a value
    async fn set(&self, key: ConfigKey, scope: Scope, value: &ConfigValue) -> Result<()>;

    /// Remove a key in every scope
    async fn delete(&self, key: ConfigKey) -> Result<()>;

    /// Typed read; absent keys yield `""` or `false`
    async fn get(&self, key: ConfigKey, scope: Scope) -> Result<ConfigValue> {
        Ok(match self.fetch(key, scope).await? {
            Some(raw) => ConfigValue::decode(key.kind(), &raw),
            None => ConfigValue::absent(key.kind()),
        })
    }

    /// Write a batch. Stores that support transactions override this to make
    /// the batch all-or-nothing.
    async fn apply(&self, writes: &[SettingWrite]) -> Result<()> {
        for write in writes {
            self.set(write.key, write.scope, &write.value).await?;
        }
        Ok(())
    }
}
