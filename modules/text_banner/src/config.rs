//! Configuration for the text banner module

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Text banner configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Template name used to partition the render cache
    #[serde(default = "default_template_name")]
    pub template_name: String,

    /// Stylesheet registered with the host while the banner is shown
    #[serde(default = "default_stylesheet_path")]
    pub stylesheet_path: String,

    /// Media query for the stylesheet
    #[serde(default = "default_stylesheet_media")]
    pub stylesheet_media: String,

    /// Maximum number of rendered fragments kept in memory
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_name: default_template_name(),
            stylesheet_path: default_stylesheet_path(),
            stylesheet_media: default_stylesheet_media(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

impl Config {
    /// Layered load: defaults, then the YAML file (if any), then `TEXT_BANNER_*` env vars.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        let config = figment.merge(Env::prefixed("TEXT_BANNER_")).extract()?;
        Ok(config)
    }
}

fn default_template_name() -> String {
    "textbanner.tpl".to_string()
}

fn default_stylesheet_path() -> String {
    "modules/textbanner/textbanner.css".to_string()
}

fn default_stylesheet_media() -> String {
    "all".to_string()
}

fn default_cache_capacity() -> usize {
    256
}
