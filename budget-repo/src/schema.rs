use async_trait::async_trait;
use thiserror::Error;

/// DDL for the `users` and `transactions` tables. Running it drops both tables
/// before recreating them, so every row is lost.
pub const SCHEMA: &str = include_str!("../schema.sql");

#[async_trait]
pub trait SchemaRepo: Sync + Send {
    /// Drops `transactions` and `users` if they exist and creates them empty.
    /// Id sequences restart at 1.
    async fn reset_schema(&self) -> Result<(), SchemaError>;
}

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
