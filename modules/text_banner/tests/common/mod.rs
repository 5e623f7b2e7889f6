//! Common test utilities: store and publisher mocks plus fixtures

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use text_banner::contract::{ConfigKey, ConfigValue, LanguageId, RequestContext, Scope, ShopContext};
use text_banner::domain::{BannerEvent, EventPublisher, SettingWrite, SettingsStore};
use text_banner::infra::InMemorySettingsStore;

pub const EN: LanguageId = LanguageId::new(1);
pub const FR: LanguageId = LanguageId::new(2);
pub const SHOP: &str = "shop-1";

pub fn print_test_header(test_name: &str, purpose: &str) {
    println!("\n🧪 TEST: {}", test_name);
    println!("📋 PURPOSE: {}", purpose);
}

pub fn request(language: LanguageId) -> RequestContext {
    RequestContext::new(language, ShopContext::new(SHOP))
}

pub fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// In-memory store that can be switched into failing mode.
///
/// Counts `apply` batches so tests can tell whether a write reached the store.
#[derive(Default)]
pub struct FlakyStore {
    inner: InMemorySettingsStore,
    failing: AtomicBool,
    batches: AtomicUsize,
}

impl FlakyStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn fail(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn batches(&self) -> usize {
        self.batches.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            anyhow::bail!("database is unavailable");
        }
        Ok(())
    }
}

#[async_trait]
impl SettingsStore for FlakyStore {
    async fn fetch(&self, key: ConfigKey, scope: Scope) -> anyhow::Result<Option<String>> {
        self.check()?;
        self.inner.fetch(key, scope).await
    }

    async fn set(&self, key: ConfigKey, scope: Scope, value: &ConfigValue) -> anyhow::Result<()> {
        self.check()?;
        self.inner.set(key, scope, value).await
    }

    async fn delete(&self, key: ConfigKey) -> anyhow::Result<()> {
        self.check()?;
        self.inner.delete(key).await
    }

    async fn apply(&self, writes: &[SettingWrite]) -> anyhow::Result<()> {
        self.batches.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        for write in writes {
            self.inner.set(write.key, write.scope, &write.value).await?;
        }
        Ok(())
    }
}

/// Publisher that keeps every event it receives
#[derive(Default)]
pub struct RecordingPublisher {
    events: Mutex<Vec<BannerEvent>>,
}

impl RecordingPublisher {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<BannerEvent> {
        self.events.lock().clone()
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, event: BannerEvent) -> anyhow::Result<()> {
        self.events.lock().push(event);
        Ok(())
    }
}
