//! SeaORM settings store implementation

use crate::contract::{ConfigKey, ConfigValue, Scope};
use crate::domain::store::{SettingWrite, SettingsStore};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    sea_query::OnConflict, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};
use std::sync::Arc;

use super::{entity, mapper};

pub struct SeaOrmSettingsStore {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmSettingsStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Every stored banner value, ordered by key and language
    pub async fn list_all(&self) -> Result<Vec<(ConfigKey, Scope, ConfigValue)>> {
        let rows = entity::Entity::find()
            .order_by_asc(entity::Column::Name)
            .order_by_asc(entity::Column::IdLang)
            .all(&*self.db)
            .await?;

        rows.iter().map(mapper::from_model).collect()
    }
}

async fn upsert<C: ConnectionTrait>(
    conn: &C,
    key: ConfigKey,
    scope: Scope,
    value: &ConfigValue,
) -> Result<()> {
    let active = mapper::to_active_model(key, scope, value);
    entity::Entity::insert(active)
        .on_conflict(
            OnConflict::columns([entity::Column::Name, entity::Column::IdLang])
                .update_columns([entity::Column::Value, entity::Column::UpdatedAt])
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;
    Ok(())
}

#[async_trait]
impl SettingsStore for SeaOrmSettingsStore {
    async fn fetch(&self, key: ConfigKey, scope: Scope) -> Result<Option<String>> {
        let row = entity::Entity::find_by_id((
            key.name().to_string(),
            mapper::scope_to_id_lang(scope),
        ))
        .one(&*self.db)
        .await?;

        Ok(row.map(|model| model.value))
    }

    async fn set(&self, key: ConfigKey, scope: Scope, value: &ConfigValue) -> Result<()> {
        upsert(&*self.db, key, scope, value).await
    }

    async fn delete(&self, key: ConfigKey) -> Result<()> {
        entity::Entity::delete_many()
            .filter(entity::Column::Name.eq(key.name()))
            .exec(&*self.db)
            .await?;

        Ok(())
    }

    /// All writes share one transaction; an error rolls the batch back.
    async fn apply(&self, writes: &[SettingWrite]) -> Result<()> {
        let txn = self.db.begin().await?;
        for write in writes {
            if let Err(e) = upsert(&txn, write.key, write.scope, &write.value).await {
                if let Err(rollback) = txn.rollback().await {
                    tracing::warn!(error = %rollback, "settings batch rollback failed");
                }
                return Err(e);
            }
        }
        txn.commit().await?;
        Ok(())
    }
}
