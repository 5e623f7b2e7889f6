//! Domain events for the text banner module
//!
//! Published after the store has been written and the render cache
//! invalidated. Subscribers (audit log, CDN purge, ...) receive them through
//! an `EventPublisher`.

use crate::contract::LanguageId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain event types for banner settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum BannerEvent {
    /// Admin submission was persisted
    SettingsSaved(SettingsSavedEvent),
    /// Defaults were seeded for a language
    LanguageInitialized(LanguageInitializedEvent),
    /// All banner keys were removed
    SettingsRemoved(SettingsRemovedEvent),
}

/// Event data for a saved submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsSavedEvent {
    /// Languages written by the submission
    pub languages: Vec<u32>,
    /// Template whose cached output was dropped
    pub template: String,
    pub timestamp: DateTime<Utc>,
}

/// Event data for language initialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInitializedEvent {
    pub language: u32,
    /// Number of keys that had to be seeded
    pub seeded_keys: usize,
    pub timestamp: DateTime<Utc>,
}

/// Event data for teardown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsRemovedEvent {
    pub timestamp: DateTime<Utc>,
}

/// Event publisher trait for publishing domain events
#[async_trait::async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: BannerEvent) -> anyhow::Result<()>;
}

/// No-op event publisher for testing or when events are disabled
pub struct NoOpEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for NoOpEventPublisher {
    async fn publish(&self, _event: BannerEvent) -> anyhow::Result<()> {
        Ok(())
    }
}

impl BannerEvent {
    pub fn settings_saved<I>(languages: I, template: &str) -> Self
    where
        I: IntoIterator<Item = LanguageId>,
    {
        BannerEvent::SettingsSaved(SettingsSavedEvent {
            languages: languages.into_iter().map(LanguageId::get).collect(),
            template: template.to_string(),
            timestamp: Utc::now(),
        })
    }

    pub fn language_initialized(language: LanguageId, seeded_keys: usize) -> Self {
        BannerEvent::LanguageInitialized(LanguageInitializedEvent {
            language: language.get(),
            seeded_keys,
            timestamp: Utc::now(),
        })
    }

    pub fn settings_removed() -> Self {
        BannerEvent::SettingsRemoved(SettingsRemovedEvent {
            timestamp: Utc::now(),
        })
    }
}
