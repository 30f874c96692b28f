use sea_orm_migration::{prelude::*, schema::*};

use super::m20260610_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Slot::Table)
                    .if_not_exists()
                    .col(string(Slot::Id).primary_key())
                    .col(date(Slot::Date))
                    .col(string(Slot::Time))
                    .col(string(Slot::Court))
                    .col(integer(Slot::Price))
                    .col(string(Slot::Duration))
                    .col(boolean(Slot::Booked).default(false))
                    .col(integer_null(Slot::BookedBy))
                    .col(timestamp_null(Slot::BookedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_slot_booked_by")
                            .from(Slot::Table, Slot::BookedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Slot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Slot {
    Table,
    Id,
    Date,
    Time,
    Court,
    Price,
    Duration,
    Booked,
    BookedBy,
    BookedAt,
}
