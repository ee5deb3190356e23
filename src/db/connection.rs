use diesel::{
    r2d2::{ConnectionManager, CustomizeConnection, Error as ManagerError, PoolError},
    SqliteConnection,
};
use r2d2::Pool;
use tracing::info;

use super::bootstrap::{apply_pragmas, apply_schema};

pub type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;

pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

/// Sets pragmas and creates the tables on every connection the pool opens.
/// The tables are needed for `:memory:` databases, where each connection
/// starts empty.
#[derive(Debug, Clone, Copy)]
struct SchemaBootstrap {
    busy_timeout_ms: u64,
}

impl CustomizeConnection<SqliteConnection, ManagerError> for SchemaBootstrap {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), ManagerError> {
        apply_pragmas(conn, self.busy_timeout_ms).map_err(ManagerError::QueryError)?;
        apply_schema(conn).map_err(ManagerError::QueryError)
    }
}

/// Writers wait up to `busy_timeout_ms` for a competing connection's lock
/// instead of failing with "database is locked".
pub fn init_pool(
    database_url: &str,
    max_size: u32,
    busy_timeout_ms: u64,
) -> Result<SqlitePool, PoolError> {
    info!(database_url, max_size, busy_timeout_ms, "opening sqlite pool");
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .max_size(max_size)
        .connection_customizer(Box::new(SchemaBootstrap { busy_timeout_ms }))
        .build(manager)
}

/// Single-connection pool over a private in-memory database.
pub fn in_memory_pool() -> Result<SqlitePool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
    Pool::builder()
        .max_size(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connection_customizer(Box::new(SchemaBootstrap {
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }))
        .build(manager)
}
