//! Database migrations for the text banner module

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250601_000001_create_text_banner_configuration::Migration)]
    }
}

mod m20250601_000001_create_text_banner_configuration {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(TextBannerConfiguration::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(TextBannerConfiguration::Name)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(TextBannerConfiguration::IdLang)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(TextBannerConfiguration::Value)
                                .text()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(TextBannerConfiguration::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .primary_key(
                            Index::create()
                                .col(TextBannerConfiguration::Name)
                                .col(TextBannerConfiguration::IdLang),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(
                    Table::drop()
                        .table(TextBannerConfiguration::Table)
                        .to_owned(),
                )
                .await
        }
    }

    #[derive(DeriveIden)]
    enum TextBannerConfiguration {
        Table,
        Name,
        IdLang,
        Value,
        UpdatedAt,
    }
}
