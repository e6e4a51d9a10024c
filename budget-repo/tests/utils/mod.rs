pub mod generator;
pub mod test_user;

use budget_repo::schema::SchemaRepo;
use budget_repo::transaction_repo::TransactionRepo;
use budget_repo::user_repo::UserRepo;
use sqlx::SqlitePool;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;
use uuid::Uuid;

#[derive(Debug)]
pub enum RepoType {
    SQLx,
    Mem,
}

pub type Repos = (
    Arc<dyn UserRepo>,
    Arc<dyn TransactionRepo>,
    Arc<dyn SchemaRepo>,
);

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .try_init();
}

/// A database file that no other test touches.
pub fn test_database_file() -> PathBuf {
    env::temp_dir().join(format!("budget-test-{}.db", Uuid::new_v4()))
}

#[allow(dead_code)]
pub async fn sqlx_pool() -> SqlitePool {
    init_tracing();
    budget_repo::sqlx_repo::connect(&test_database_file(), 1)
        .await
        .unwrap()
}

/// Builds repos on an initialized, empty schema.
pub async fn build_repos(repo_type: RepoType) -> Repos {
    init_tracing();

    let repos: Repos = match repo_type {
        RepoType::SQLx => budget_repo::sqlx_repo::create_repos(&test_database_file(), 1)
            .await
            .unwrap(),
        RepoType::Mem => budget_repo::mem_repo::create_repos(),
    };
    repos.2.reset_schema().await.unwrap();
    repos
}
