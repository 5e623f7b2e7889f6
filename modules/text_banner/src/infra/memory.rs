//! In-memory settings store
//!
//! Used in mock mode and by tests. Values are kept raw, exactly as the SQL
//! store would persist them.

use crate::contract::{ConfigKey, ConfigValue, Scope};
use crate::domain::store::SettingsStore;
use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Default)]
pub struct InMemorySettingsStore {
    values: RwLock<HashMap<(ConfigKey, Scope), String>>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored (key, scope) pairs
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn fetch(&self, key: ConfigKey, scope: Scope) -> Result<Option<String>> {
        Ok(self.values.read().get(&(key, scope)).cloned())
    }

    async fn set(&self, key: ConfigKey, scope: Scope, value: &ConfigValue) -> Result<()> {
        self.values.write().insert((key, scope), value.encode());
        Ok(())
    }

    async fn delete(&self, key: ConfigKey) -> Result<()> {
        self.values.write().retain(|(stored, _), _| *stored != key);
        Ok(())
    }
}
