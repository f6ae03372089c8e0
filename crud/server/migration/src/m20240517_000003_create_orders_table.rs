use sea_orm_migration::prelude::*;
use sea_orm_migration::schema::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Orders {
    Table,
    Id,
    IdUser,
    IdGood,
    DataOrder,
    Status,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Goods {
    Table,
    Id,
}

const FK_ORDERS_TO_USERS: &str = "fk-orders-id_user";
const FK_ORDERS_TO_GOODS: &str = "fk-orders-id_good";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite cannot add foreign keys after the fact, they have to be part of CREATE TABLE.
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(integer(Orders::Id).primary_key())
                    .col(integer(Orders::IdUser))
                    .col(integer(Orders::IdGood))
                    .col(string_len(Orders::DataOrder, 32))
                    .col(boolean(Orders::Status))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ORDERS_TO_USERS)
                            .from(Orders::Table, Orders::IdUser)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ORDERS_TO_GOODS)
                            .from(Orders::Table, Orders::IdGood)
                            .to(Goods::Table, Goods::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}
