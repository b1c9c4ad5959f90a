//! Create feedback table
//!
//! One row per reservation, enforced by a unique key.

use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_customers::Customers;
use super::m20250101_000004_create_reservations::Reservations;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Feedback::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Feedback::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Feedback::CustomerId).integer().not_null())
                    .col(
                        ColumnDef::new(Feedback::ReservationId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Feedback::Rating).integer().not_null())
                    .col(ColumnDef::new(Feedback::Comments).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_feedback_customer")
                            .from(Feedback::Table, Feedback::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_feedback_reservation")
                            .from(Feedback::Table, Feedback::ReservationId)
                            .to(Reservations::Table, Reservations::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_feedback_customer")
                    .table(Feedback::Table)
                    .col(Feedback::CustomerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Feedback::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Feedback {
    Table,
    Id,
    CustomerId,
    ReservationId,
    Rating,
    Comments,
}
