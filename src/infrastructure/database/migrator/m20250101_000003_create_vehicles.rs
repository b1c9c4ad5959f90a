//! Create vehicles table

use sea_orm_migration::prelude::*;

use super::m20250101_000002_create_drivers::Drivers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vehicles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Vehicles::DriverId).integer())
                    .col(ColumnDef::new(Vehicles::VehicleType).string().not_null())
                    .col(ColumnDef::new(Vehicles::LicensePlate).string().not_null())
                    .col(
                        ColumnDef::new(Vehicles::Status)
                            .string()
                            .not_null()
                            .default("AVAILABLE"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicles_driver")
                            .from(Vehicles::Table, Vehicles::DriverId)
                            .to(Drivers::Table, Drivers::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vehicles_driver")
                    .table(Vehicles::Table)
                    .col(Vehicles::DriverId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Vehicles {
    Table,
    Id,
    DriverId,
    VehicleType,
    LicensePlate,
    Status,
}
