//! Create drivers table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Drivers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Drivers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Drivers::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Drivers::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Drivers::Email).string().not_null())
                    .col(ColumnDef::new(Drivers::PhoneNumber).string())
                    .col(ColumnDef::new(Drivers::LicenseNumber).string().not_null())
                    .col(ColumnDef::new(Drivers::DateOfBirth).date())
                    .col(ColumnDef::new(Drivers::PlaceOfBirth).string())
                    .col(ColumnDef::new(Drivers::Address).string())
                    .col(ColumnDef::new(Drivers::Status).string())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Drivers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Drivers {
    Table,
    Id,
    Username,
    PasswordHash,
    Email,
    PhoneNumber,
    LicenseNumber,
    DateOfBirth,
    PlaceOfBirth,
    Address,
    Status,
}
