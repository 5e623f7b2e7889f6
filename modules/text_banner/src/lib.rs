//! Text Banner Module
//!
//! Storefront announcement banner: per-language link, text and enabled flag
//! plus shop-wide colors, rendered into the page header and top area through
//! host hooks.

// Public exports
pub mod contract;
pub use contract::{
    client::TextBannerApi, error::BannerError, host::ShopHost, AdminFormValues, AdminOutcome,
    BannerColors, BannerSnapshot, ConfigKey, Hook, LanguageId, LanguageSettings, RequestContext,
    Scope, ShopContext,
};

pub mod config;
pub use config::Config;

pub mod module;
pub use module::{TextBannerModule, SETTINGS_UPDATED_MESSAGE};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod cache;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
#[doc(hidden)]
pub mod presenter;
