//! Create customers table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Customers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Customers::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Customers::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Customers::FirstName).string())
                    .col(ColumnDef::new(Customers::LastName).string())
                    .col(ColumnDef::new(Customers::Email).string().not_null())
                    .col(ColumnDef::new(Customers::PhoneNumber).string())
                    .col(ColumnDef::new(Customers::Status).string())
                    .col(ColumnDef::new(Customers::PaymentMethod1).string())
                    .col(ColumnDef::new(Customers::PaymentMethod2).string())
                    .col(ColumnDef::new(Customers::DetailPaymentMethod1).string())
                    .col(ColumnDef::new(Customers::DetailPaymentMethod2).string())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Customers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Customers {
    Table,
    Id,
    Username,
    PasswordHash,
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Status,
    #[iden = "payment_method1"]
    PaymentMethod1,
    #[iden = "payment_method2"]
    PaymentMethod2,
    #[iden = "detail_payment_method1"]
    DetailPaymentMethod1,
    #[iden = "detail_payment_method2"]
    DetailPaymentMethod2,
}
