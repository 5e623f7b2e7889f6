//! Domain layer - business logic and services

pub mod events;
pub mod service;
pub mod store;
pub mod validation;

pub use events::{BannerEvent, EventPublisher, NoOpEventPublisher};
pub use service::Service;
pub use store::{SettingWrite, SettingsStore};
