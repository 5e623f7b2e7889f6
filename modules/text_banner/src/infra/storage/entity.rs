//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Banner configuration table entity
///
/// One row per (key, language). Global keys use `GLOBAL_ID_LANG`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "text_banner_configuration")]
pub struct Model {
    /// Persisted key name (part of composite primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,

    /// Language ID or `GLOBAL_ID_LANG` (part of composite primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id_lang: i64,

    /// Raw value; flags are stored as "1" / "0"
    pub value: String,

    /// Last update timestamp
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// `id_lang` of shop-wide values
pub const GLOBAL_ID_LANG: i64 = -1;
