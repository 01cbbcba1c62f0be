use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Places::Table)
                    .if_not_exists()
                    .col(string(Places::Id).primary_key())
                    .col(string(Places::Title))
                    .col(text(Places::Description))
                    .col(double(Places::Price))
                    .col(double(Places::Latitude))
                    .col(double(Places::Longitude))
                    .col(string(Places::OwnerId))
                    .col(timestamp_with_time_zone(Places::CreatedAt))
                    .col(timestamp_with_time_zone(Places::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_places_owner_id")
                            .from(Places::Table, Places::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Places::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Places {
    Table,
    Id,
    Title,
    Description,
    Price,
    Latitude,
    Longitude,
    OwnerId,
    CreatedAt,
    UpdatedAt,
}
