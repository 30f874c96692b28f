use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Fluent builder for test contexts over an in-memory SQLite database.
///
/// Each `with_table` call registers an entity whose table is created when
/// `build()` runs; most booking tests just use `with_booking_tables()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_booking_tables()
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements derived from the registered entities, executed
    /// in registration order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a builder with no tables registered.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Registers an entity whose table the built context will contain.
    ///
    /// The CREATE TABLE statement is derived from the entity with SQLite
    /// syntax. Register referenced tables before the tables holding foreign
    /// keys to them.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to derive the table from
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Registers the tables booking operations need: `user`, then `slot`.
    ///
    /// The slot table carries a foreign key to the user table, hence the
    /// order.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_booking_tables(self) -> Self {
        self.with_table(User).with_table(Slot)
    }

    /// Connects the in-memory database and creates the registered tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with the schema in place
    /// - `Err(TestError::Database)` - Connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
