//! Contract layer - public API for inter-module communication
//!
//! This layer contains transport-agnostic models, the native client trait and
//! the host collaborator trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod host;
pub mod model;

pub use client::TextBannerApi;
pub use error::BannerError;
pub use host::ShopHost;
pub use model::{
    parse_flag, AdminFormValues, AdminOutcome, BannerColors, BannerSnapshot, BannerSubmission,
    ConfigKey, ConfigValue, Hook, LanguageId, LanguageSettings, RequestContext, Scope,
    ShopContext, ValueKind,
};
