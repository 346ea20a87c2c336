use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::entities::error::{DataCreatorError, ErrorType};

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

#[derive(Debug, Clone, Copy)]
pub struct ConnectionOptions {
    pub busy_timeout: Duration,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self { busy_timeout: Duration::from_secs(5) }
    }
}

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {}; PRAGMA foreign_keys = ON;",
            self.busy_timeout.as_millis()
        ))
        .map_err(r2d2::Error::QueryError)
    }
}

pub fn create_pool(database_url: &str) -> Result<DbPool, DataCreatorError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    r2d2::Pool::builder()
        .connection_customizer(Box::new(ConnectionOptions::default()))
        .build(manager)
        .map_err(|err| {
            DataCreatorError::new(
                500,
                ErrorType::DatabaseError,
                format!("Could not build connection pool for {}: {}", database_url, err),
            )
        })
}

pub fn run_migrations(pool: &DbPool) -> Result<(), DataCreatorError> {
    let mut pooled = pool.get()?;
    let conn: &mut SqliteConnection = &mut pooled;
    let applied = conn.run_pending_migrations(MIGRATIONS).map_err(|err| {
        DataCreatorError::new(500, ErrorType::DatabaseError, format!("Migrations failed: {}", err))
    })?;
    for migration in applied {
        tracing::info!("applied migration {}", migration);
    }
    Ok(())
}

/// Pool on `database_url` with the bookkeeping schema in place.
pub fn init_pool(database_url: &str) -> Result<DbPool, DataCreatorError> {
    let pool = create_pool(database_url)?;
    run_migrations(&pool)?;
    Ok(pool)
}
