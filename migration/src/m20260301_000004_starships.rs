use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000003_characters::Characters;

static IDX_STARSHIPS_PILOT_ID: &str = "idx-starships-pilot_id";
static FK_STARSHIPS_PILOT_ID: &str = "fk-starships-pilot_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Starships::Table)
                    .if_not_exists()
                    .col(pk_auto(Starships::Id))
                    .col(string_len_uniq(Starships::Name, 100))
                    .col(string_len_null(Starships::Model, 100))
                    .col(integer_null(Starships::PilotId))
                    .col(string_len_null(Starships::CostInCredits, 50))
                    .col(string_len_null(Starships::Length, 50))
                    .col(string_len_null(Starships::MaxSpeed, 50))
                    .col(string_len_null(Starships::Crew, 50))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_STARSHIPS_PILOT_ID)
                            .from(Starships::Table, Starships::PilotId)
                            .to(Characters::Table, Characters::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STARSHIPS_PILOT_ID)
                    .table(Starships::Table)
                    .col(Starships::PilotId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STARSHIPS_PILOT_ID)
                    .table(Starships::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Starships::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Starships {
    Table,
    Id,
    Name,
    Model,
    PilotId,
    CostInCredits,
    Length,
    MaxSpeed,
    Crew,
}
