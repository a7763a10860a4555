pub use sea_orm_migration::prelude::*;

mod m20260301_000001_users;
mod m20260301_000002_planets;
mod m20260301_000003_characters;
mod m20260301_000004_starships;
mod m20260301_000005_favorites;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_users::Migration),
            Box::new(m20260301_000002_planets::Migration),
            Box::new(m20260301_000003_characters::Migration),
            Box::new(m20260301_000004_starships::Migration),
            Box::new(m20260301_000005_favorites::Migration),
        ]
    }
}
