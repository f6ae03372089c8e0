use sea_orm_migration::prelude::*;
use sea_orm_migration::schema::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Goods::Table)
                    .if_not_exists()
                    .col(integer(Goods::Id).primary_key())
                    .col(string_len(Goods::Name, 32))
                    .col(string_len(Goods::Description, 128))
                    .col(integer(Goods::Price))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Goods::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Goods {
    Table,
    Id,
    Name,
    Description,
    Price,
}
