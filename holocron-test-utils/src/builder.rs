//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Configuration methods are chained together and every queued operation runs during the final
//! `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Sets up an in-memory SQLite database with the requested tables & fixture rows. Methods can be
/// chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_catalog_tables: bool,

    // Database fixtures to insert
    users: Vec<String>,
    planets: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_catalog_tables: false,
            users: Vec::new(),
            planets: Vec::new(),
        }
    }

    /// Add every catalog table to the test database.
    ///
    /// Creates users, planets, characters, starships & favorites in foreign key order.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holocron_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holocron_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Planet)
    ///     .with_table(Character)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with the provided email during `build()`.
    pub fn with_user(mut self, email: impl Into<String>) -> Self {
        self.users.push(email.into());
        self
    }

    /// Insert a planet with the provided name during `build()`.
    pub fn with_planet(mut self, name: impl Into<String>) -> Self {
        self.planets.push(name.into());
        self
    }

    /// Build the test context by creating all configured tables & fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (catalog tables if specified, then custom tables)
    /// 2. Inserts database fixtures (users, then planets)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database connection, table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_catalog_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::Character),
                schema.create_table_from_entity(entity::prelude::Starship),
                schema.create_table_from_entity(entity::prelude::Favorite),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for email in self.users {
            setup.user().insert_user(&email).await?;
        }

        for name in self.planets {
            setup.catalog().insert_planet(&name).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_builder_creates_catalog_tables() {
        let result = TestBuilder::new().with_catalog_tables().build().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_builder_chains_methods() {
        let result = TestBuilder::new()
            .with_catalog_tables()
            .with_user("luke@rebellion.org")
            .with_planet("Tatooine")
            .build()
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_builder_fails_fixtures_without_tables() {
        let result = TestBuilder::new().with_planet("Tatooine").build().await;
        assert!(result.is_err());
    }
}
