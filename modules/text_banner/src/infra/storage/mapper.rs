//! Conversions between SeaORM rows and contract models

use super::entity::{self, GLOBAL_ID_LANG};
use crate::contract::{ConfigKey, ConfigValue, LanguageId, Scope};
use anyhow::{anyhow, Result};
use sea_orm::ActiveValue::Set;

pub fn scope_to_id_lang(scope: Scope) -> i64 {
    match scope {
        Scope::Global => GLOBAL_ID_LANG,
        Scope::Language(language) => i64::from(language.get()),
    }
}

pub fn id_lang_to_scope(id_lang: i64) -> Result<Scope> {
    if id_lang == GLOBAL_ID_LANG {
        return Ok(Scope::Global);
    }
    let id = u32::try_from(id_lang).map_err(|_| anyhow!("invalid id_lang {id_lang}"))?;
    Ok(Scope::Language(LanguageId::new(id)))
}

/// Active model for an upsert of one value
pub fn to_active_model(key: ConfigKey, scope: Scope, value: &ConfigValue) -> entity::ActiveModel {
    entity::ActiveModel {
        name: Set(key.name().to_string()),
        id_lang: Set(scope_to_id_lang(scope)),
        value: Set(value.encode()),
        updated_at: Set(chrono::Utc::now()),
    }
}

/// Typed view of a stored row
pub fn from_model(model: &entity::Model) -> Result<(ConfigKey, Scope, ConfigValue)> {
    let key = ConfigKey::from_name(&model.name)
        .ok_or_else(|| anyhow!("unknown configuration key {}", model.name))?;
    let scope = id_lang_to_scope(model.id_lang)?;
    Ok((key, scope, ConfigValue::decode(key.kind(), &model.value)))
}
