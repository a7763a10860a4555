use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260301_000001_users::Users, m20260301_000002_planets::Planets,
    m20260301_000003_characters::Characters, m20260301_000004_starships::Starships,
};

static IDX_FAVORITES_USER_ID: &str = "idx-favorites-user_id";
static IDX_FAVORITES_PLANET_ID: &str = "idx-favorites-planet_id";
static IDX_FAVORITES_CHARACTER_ID: &str = "idx-favorites-character_id";
static IDX_FAVORITES_STARSHIP_ID: &str = "idx-favorites-starship_id";
static FK_FAVORITES_USER_ID: &str = "fk-favorites-user_id";
static FK_FAVORITES_PLANET_ID: &str = "fk-favorites-planet_id";
static FK_FAVORITES_CHARACTER_ID: &str = "fk-favorites-character_id";
static FK_FAVORITES_STARSHIP_ID: &str = "fk-favorites-starship_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorites::Id))
                    .col(integer(Favorites::UserId))
                    .col(integer_null(Favorites::PlanetId))
                    .col(integer_null(Favorites::CharacterId))
                    .col(integer_null(Favorites::StarshipId))
                    // Favorites are owned by the user, remove them along with it
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_USER_ID)
                            .from(Favorites::Table, Favorites::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_PLANET_ID)
                            .from(Favorites::Table, Favorites::PlanetId)
                            .to(Planets::Table, Planets::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_CHARACTER_ID)
                            .from(Favorites::Table, Favorites::CharacterId)
                            .to(Characters::Table, Characters::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_STARSHIP_ID)
                            .from(Favorites::Table, Favorites::StarshipId)
                            .to(Starships::Table, Starships::Id),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            (IDX_FAVORITES_USER_ID, Favorites::UserId),
            (IDX_FAVORITES_PLANET_ID, Favorites::PlanetId),
            (IDX_FAVORITES_CHARACTER_ID, Favorites::CharacterId),
            (IDX_FAVORITES_STARSHIP_ID, Favorites::StarshipId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Favorites::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            IDX_FAVORITES_STARSHIP_ID,
            IDX_FAVORITES_CHARACTER_ID,
            IDX_FAVORITES_PLANET_ID,
            IDX_FAVORITES_USER_ID,
        ] {
            manager
                .drop_index(Index::drop().name(name).table(Favorites::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Favorites {
    Table,
    Id,
    UserId,
    PlanetId,
    CharacterId,
    StarshipId,
}
