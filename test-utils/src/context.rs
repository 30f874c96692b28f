use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection,
};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Test environment holding an in-memory database and, on demand, a session.
///
/// Both resources are created lazily on first access and live as long as the
/// context, so a test can pass around plain references without worrying about
/// setup order.
pub struct TestContext {
    /// Connection to the in-memory SQLite instance, once `database()` has run.
    pub db: Option<DatabaseConnection>,

    /// Session backed by the same in-memory database, once `session()` has run.
    pub session: Option<Session>,
}

impl TestContext {
    /// Creates an empty context with neither database nor session initialized.
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Returns the in-memory SQLite connection, connecting on first call.
    ///
    /// The pool is pinned to a single connection: with `sqlite::memory:` every
    /// additional pooled connection would open its own empty database. Tests
    /// that spawn concurrent tasks therefore all see the same data.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the shared connection
    /// - `Err(TestError::Database)` - Connection failed
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let mut opt = ConnectOptions::new("sqlite::memory:");
                opt.max_connections(1).sqlx_logging(false);

                let db = Database::connect(opt).await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref)
            }
        }
    }

    /// Applies the given CREATE TABLE statements to the test database.
    ///
    /// Statements run in order, so callers must list referenced tables before
    /// the tables that point at them. Normally invoked through
    /// `TestBuilder::build()`.
    ///
    /// # Arguments
    /// - `stmts` - CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - Schema applied
    /// - `Err(TestError::Database)` - A statement failed
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Returns the test session, creating it on first call.
    ///
    /// The session store lives in the same in-memory database as the rest of
    /// the test data; its table is migrated before the first session is
    /// handed out.
    ///
    /// # Returns
    /// - `Ok(&Session)` - Reference to the session
    /// - `Err(TestError::Database)` - Store migration or connection failed
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        match self.session {
            Some(ref session) => Ok(session),
            None => {
                let db = self.database().await?;

                let pool = db.get_sqlite_connection_pool();
                let session_store = SqliteStore::new(pool.clone());

                session_store
                    .migrate()
                    .await
                    .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

                let session = Session::new(
                    None,
                    Arc::new(session_store),
                    Some(Expiry::OnInactivity(Duration::days(7))),
                );

                let session_ref = self.session.insert(session);

                Ok(&*session_ref)
            }
        }
    }

    /// Returns the database and session together.
    ///
    /// Initializes whichever of the two does not exist yet, then hands back
    /// immutable references to both; going through the individual accessors
    /// instead would trip over the borrow checker.
    ///
    /// # Returns
    /// - `Ok((&DatabaseConnection, &Session))` - Both resources, initialized
    /// - `Err(TestError::Database)` - Initialization failed
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.database().await?;
        self.session().await?;

        Ok((self.db.as_ref().unwrap(), self.session.as_ref().unwrap()))
    }
}
