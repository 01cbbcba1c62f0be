use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000001_create_users_table::Users, m20250601_000002_create_places_table::Places,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(string(Bookings::Id).primary_key())
                    .col(string(Bookings::PlaceId))
                    .col(string(Bookings::UserId))
                    .col(date(Bookings::CheckInDate))
                    .col(date(Bookings::CheckOutDate))
                    .col(double(Bookings::TotalPrice))
                    .col(string(Bookings::Status))
                    .col(timestamp_with_time_zone(Bookings::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_place_id")
                            .from(Bookings::Table, Bookings::PlaceId)
                            .to(Places::Table, Places::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_user_id")
                            .from(Bookings::Table, Bookings::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bookings {
    Table,
    Id,
    PlaceId,
    UserId,
    CheckInDate,
    CheckOutDate,
    TotalPrice,
    Status,
    CreatedAt,
}
