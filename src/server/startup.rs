use axum::http::{header, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use uuid::Uuid;

use crate::server::{
    config::Config,
    data::slot::SlotRepository,
    error::{config::ConfigError, AppError},
    model::slot::NewSlotParam,
};

/// Hourly booking windows seeded per court and day: morning and evening blocks.
const SEED_TIMES: [&str; 10] = [
    "06:00", "07:00", "08:00", "09:00", "10:00", "16:00", "17:00", "18:00", "19:00", "20:00",
];

/// Courts and their per-slot prices.
const SEED_COURTS: [(&str, i32); 3] = [("Court 1", 1000), ("Court 2", 1200), ("Court 3", 1500)];

/// Connects to the SQLite database and runs pending migrations.
///
/// Establishes a connection pool to the SQLite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the application database.
///
/// Creates the session store table if it does not exist yet and returns the
/// session middleware layer. Sessions expire after 24 hours of inactivity;
/// the signed session cookie is the credential clients present on guarded
/// endpoints.
///
/// # Arguments
/// - `db` - Database connection whose SQLx pool backs the session store
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Session middleware ready to be layered onto the router
/// - `Err(AppError)` - Failed to migrate the session store table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::hours(24))))
}

/// Builds the CORS layer from the configured allowed origins.
///
/// A wildcard entry allows any origin without credentials. An explicit origin
/// list enables credentialed requests so the session cookie is sent by
/// browsers; tower-http rejects the wildcard/credentials combination.
///
/// # Arguments
/// - `config` - Application configuration containing the allowed origins
///
/// # Returns
/// - `Ok(CorsLayer)` - CORS middleware ready to be layered onto the router
/// - `Err(AppError::ConfigErr)` - An origin could not be parsed into a header value
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    if config.allowed_origins.iter().any(|origin| origin == "*") {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| ConfigError::InvalidOrigin(origin.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}

/// Seeds the slot table with the default schedule when it is empty.
///
/// Creates slots for today and tomorrow across the configured times and
/// courts, all starting `Available`. Runs once: a non-empty table is left
/// untouched, so restarting the server never duplicates or resets slots.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(())` - Table already populated, or seed slots inserted
/// - `Err(AppError)` - Database error during count or insert
pub async fn seed_slots(db: &DatabaseConnection) -> Result<(), AppError> {
    let repo = SlotRepository::new(db);

    if repo.count().await? > 0 {
        return Ok(());
    }

    let today = chrono::Utc::now().date_naive();
    let dates = [today, today + chrono::Duration::days(1)];

    let mut params = Vec::with_capacity(dates.len() * SEED_TIMES.len() * SEED_COURTS.len());
    for date in dates {
        for time in SEED_TIMES {
            for (court, price) in SEED_COURTS {
                params.push(NewSlotParam {
                    id: Uuid::new_v4().to_string(),
                    date,
                    time: time.to_string(),
                    court: court.to_string(),
                    price,
                    duration: "1 hour".to_string(),
                });
            }
        }
    }

    let seeded = params.len();
    repo.create_many(params).await?;

    tracing::info!("Seeded {} initial slots", seeded);

    Ok(())
}
