use crate::schema::{SchemaError, SchemaRepo, SCHEMA};
use crate::sqlx_repo::SQLxRepo;
use anyhow::Context;
use async_trait::async_trait;
use sqlx::Executor;
use tracing::{info, instrument};

#[async_trait]
impl SchemaRepo for SQLxRepo {
    #[instrument(skip(self))]
    async fn reset_schema(&self) -> Result<(), SchemaError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Unable to begin schema transaction")?;
        (&mut *tx)
            .execute(SCHEMA)
            .await
            .context("Unable to apply schema")?;
        tx.commit().await.context("Unable to commit schema")?;
        info!("Schema reset");
        Ok(())
    }
}
