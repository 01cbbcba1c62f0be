use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000002_create_places_table::Places,
    m20250601_000003_create_amenities_table::Amenities,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlaceAmenity::Table)
                    .if_not_exists()
                    .col(string(PlaceAmenity::PlaceId))
                    .col(string(PlaceAmenity::AmenityId))
                    .primary_key(
                        Index::create()
                            .col(PlaceAmenity::PlaceId)
                            .col(PlaceAmenity::AmenityId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_place_amenity_place_id")
                            .from(PlaceAmenity::Table, PlaceAmenity::PlaceId)
                            .to(Places::Table, Places::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_place_amenity_amenity_id")
                            .from(PlaceAmenity::Table, PlaceAmenity::AmenityId)
                            .to(Amenities::Table, Amenities::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlaceAmenity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlaceAmenity {
    Table,
    PlaceId,
    AmenityId,
}
