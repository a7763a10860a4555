use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(pk_auto(Planets::Id))
                    .col(string_len_uniq(Planets::Name, 100))
                    .col(string_len_null(Planets::Diameter, 50))
                    .col(string_len_null(Planets::RotationPeriod, 50))
                    .col(string_len_null(Planets::Gravity, 50))
                    .col(string_len_null(Planets::Population, 50))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planets::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Planets {
    Table,
    Id,
    Name,
    Diameter,
    RotationPeriod,
    Gravity,
    Population,
}
