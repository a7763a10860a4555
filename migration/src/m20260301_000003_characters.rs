use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000002_planets::Planets;

static IDX_CHARACTERS_HOMEWORLD_ID: &str = "idx-characters-homeworld_id";
static FK_CHARACTERS_HOMEWORLD_ID: &str = "fk-characters-homeworld_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Characters::Table)
                    .if_not_exists()
                    .col(pk_auto(Characters::Id))
                    .col(string_len_uniq(Characters::Name, 100))
                    .col(string_len_null(Characters::Height, 50))
                    .col(string_len_null(Characters::BirthYear, 50))
                    .col(string_len_null(Characters::Gender, 50))
                    .col(integer_null(Characters::HomeworldId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CHARACTERS_HOMEWORLD_ID)
                            .from(Characters::Table, Characters::HomeworldId)
                            .to(Planets::Table, Planets::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTERS_HOMEWORLD_ID)
                    .table(Characters::Table)
                    .col(Characters::HomeworldId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHARACTERS_HOMEWORLD_ID)
                    .table(Characters::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Characters::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Characters {
    Table,
    Id,
    Name,
    Height,
    BirthYear,
    Gender,
    HomeworldId,
}
