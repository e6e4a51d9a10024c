mod schema;
mod transaction_repo;
mod user_repo;

use crate::schema::SchemaRepo;
use crate::transaction_repo::TransactionRepo;
use crate::user_repo::UserRepo;
use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub struct SQLxRepo {
    pool: SqlitePool,
}

impl SQLxRepo {
    pub fn new(pool: SqlitePool) -> SQLxRepo {
        SQLxRepo { pool }
    }
}

/// Opens the database file, creating it if needed. Foreign keys are enforced on
/// every pooled connection.
pub async fn connect(database_file: &Path, max_pool_size: u32) -> Result<SqlitePool, anyhow::Error> {
    let options = SqliteConnectOptions::new()
        .filename(database_file)
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_pool_size)
        .connect_with(options)
        .await
        .with_context(|| format!("Unable to open database {}", database_file.display()))?;
    info!(database_file = %database_file.display(), "Connected to database");
    Ok(pool)
}

pub async fn create_repos(
    database_file: &Path,
    max_pool_size: u32,
) -> Result<
    (
        Arc<dyn UserRepo>,
        Arc<dyn TransactionRepo>,
        Arc<dyn SchemaRepo>,
    ),
    anyhow::Error,
> {
    let pool = connect(database_file, max_pool_size).await?;
    let repo = Arc::new(SQLxRepo::new(pool));
    Ok((repo.clone(), repo.clone(), repo))
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .map_or(false, |e| e.is_unique_violation())
}

fn is_foreign_key_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .map_or(false, |e| e.is_foreign_key_violation())
}
