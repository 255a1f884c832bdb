//! Create `car` table.
//! Every column is required; `id` is assigned by the database.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Car::Table)
                    .if_not_exists()
                    .col(pk_auto(Car::Id))
                    .col(string_len(Car::Marca, 128).not_null())
                    .col(string_len(Car::Cor, 64).not_null())
                    .col(string_len(Car::Placa, 16).not_null())
                    .to_owned(),
            )
            .await?;

        // Plates are not unique; the index only serves lookups.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_car_placa")
                    .table(Car::Table)
                    .col(Car::Placa)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Car::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Car {
    Table,
    Id,
    Marca,
    Cor,
    Placa,
}
