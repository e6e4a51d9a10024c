use crate::sqlx_repo::{is_foreign_key_violation, SQLxRepo};
use crate::transaction_repo::TransactionRepoError::{TransactionNotFound, UserNotFound};
use crate::transaction_repo::{
    NewTransaction, PageOptions, Transaction, TransactionRepo, TransactionRepoError,
};
use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{query, query_as, query_scalar, QueryBuilder, Sqlite};
use tracing::instrument;

#[derive(sqlx::FromRow)]
struct TransactionEntry {
    id: i64,
    user_id: i64,
    date: NaiveDate,
    amount: f64,
    #[sqlx(rename = "type")]
    transaction_type: String,
    category: String,
    description: Option<String>,
}

impl From<TransactionEntry> for Transaction {
    fn from(value: TransactionEntry) -> Self {
        Transaction::new(
            value.id,
            value.user_id,
            value.date,
            value.amount,
            value.transaction_type,
            value.category,
            value.description,
        )
    }
}

const TRANSACTION_COLUMNS: &str = "id, user_id, date, amount, type, category, description";

impl SQLxRepo {
    #[instrument(skip(self))]
    async fn get_transaction_entries(
        &self,
        user_id: i64,
        page_options: Option<PageOptions>,
    ) -> Result<Vec<TransactionEntry>, TransactionRepoError> {
        let mut query_builder: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT {} FROM transactions WHERE user_id = ",
            TRANSACTION_COLUMNS
        ));
        query_builder.push_bind(user_id);
        query_builder.push(" ORDER BY date DESC, id DESC");
        if let Some(po) = page_options {
            query_builder
                .push(" LIMIT ")
                .push_bind(po.limit)
                .push(" OFFSET ")
                .push_bind(po.offset);
        }
        let transaction_entries: Vec<TransactionEntry> = query_builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .with_context(|| format!("Unable to get transactions for user {}", user_id))?;
        Ok(transaction_entries)
    }
}

#[async_trait]
impl TransactionRepo for SQLxRepo {
    #[instrument(skip(self, new_transaction))]
    async fn create_transaction(
        &self,
        user_id: i64,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError> {
        let result = query_scalar::<_, i64>(
            "INSERT INTO transactions (user_id, date, amount, type, category, description) VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(user_id)
        .bind(new_transaction.date)
        .bind(new_transaction.amount)
        .bind(&new_transaction.transaction_type)
        .bind(&new_transaction.category)
        .bind(&new_transaction.description)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(id) => Ok(new_transaction.to_transaction(id, user_id)),
            Err(e) if is_foreign_key_violation(&e) => Err(UserNotFound(user_id)),
            Err(e) => Err(anyhow::Error::new(e)
                .context("Unable to insert transaction")
                .into()),
        }
    }

    #[instrument(skip(self))]
    async fn get_transaction(
        &self,
        user_id: i64,
        transaction_id: i64,
    ) -> Result<Transaction, TransactionRepoError> {
        let transaction_entry: Option<TransactionEntry> = query_as(&format!(
            "SELECT {} FROM transactions WHERE id = ? AND user_id = ?",
            TRANSACTION_COLUMNS
        ))
        .bind(transaction_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Unable to get transaction {}", transaction_id))?;
        transaction_entry
            .map(Transaction::from)
            .ok_or(TransactionNotFound(transaction_id))
    }

    #[instrument(skip(self))]
    async fn get_transactions(
        &self,
        user_id: i64,
        page_options: Option<PageOptions>,
    ) -> Result<Vec<Transaction>, TransactionRepoError> {
        let transactions = self
            .get_transaction_entries(user_id, page_options)
            .await?
            .into_iter()
            .map(|transaction_entry| transaction_entry.into())
            .collect();

        Ok(transactions)
    }

    #[instrument(skip(self, updated_transaction))]
    async fn update_transaction(
        &self,
        user_id: i64,
        transaction_id: i64,
        updated_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError> {
        let result = query(
            "UPDATE transactions SET date = ?, amount = ?, type = ?, category = ?, description = ? WHERE user_id = ? AND id = ?",
        )
        .bind(updated_transaction.date)
        .bind(updated_transaction.amount)
        .bind(&updated_transaction.transaction_type)
        .bind(&updated_transaction.category)
        .bind(&updated_transaction.description)
        .bind(user_id)
        .bind(transaction_id)
        .execute(&self.pool)
        .await
        .with_context(|| format!("Unable to update transaction {}", transaction_id))?;

        if result.rows_affected() == 0 {
            Err(TransactionNotFound(transaction_id))
        } else {
            Ok(updated_transaction.to_transaction(transaction_id, user_id))
        }
    }

    #[instrument(skip(self))]
    async fn delete_transaction(
        &self,
        user_id: i64,
        transaction_id: i64,
    ) -> Result<Transaction, TransactionRepoError> {
        let transaction_entry: TransactionEntry = query_as(&format!(
            "DELETE FROM transactions WHERE user_id = ? AND id = ? RETURNING {}",
            TRANSACTION_COLUMNS
        ))
        .bind(user_id)
        .bind(transaction_id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Unable to delete transaction {}", transaction_id))?
        .ok_or(TransactionNotFound(transaction_id))?;
        Ok(transaction_entry.into())
    }
}
