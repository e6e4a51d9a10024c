use crate::mem_repo::{MemRepo, State};
use crate::schema::{SchemaError, SchemaRepo};
use async_trait::async_trait;
use tracing::info;

#[async_trait]
impl SchemaRepo for MemRepo {
    async fn reset_schema(&self) -> Result<(), SchemaError> {
        let mut write_guard = self.write_lock()?;
        *write_guard = State::empty();
        info!("Schema reset");
        Ok(())
    }
}
