//! Create payment_methods table

use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_customers::Customers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PaymentMethods::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PaymentMethods::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PaymentMethods::CustomerId).integer().not_null())
                    .col(ColumnDef::new(PaymentMethods::MethodType).string().not_null())
                    .col(ColumnDef::new(PaymentMethods::Details).string_len(255))
                    .col(
                        ColumnDef::new(PaymentMethods::PrimaryMethod)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(PaymentMethods::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_methods_customer")
                            .from(PaymentMethods::Table, PaymentMethods::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_payment_methods_customer")
                    .table(PaymentMethods::Table)
                    .col(PaymentMethods::CustomerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PaymentMethods::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum PaymentMethods {
    Table,
    Id,
    CustomerId,
    MethodType,
    Details,
    PrimaryMethod,
    CreatedAt,
}
