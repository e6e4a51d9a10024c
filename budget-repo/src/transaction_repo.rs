use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::cmp::Ordering::Equal;
use thiserror::Error;

#[derive(Clone, Copy, Debug)]
pub struct PageOptions {
    pub offset: u32,
    pub limit: u32,
}

#[async_trait]
pub trait TransactionRepo: Sync + Send {
    async fn create_transaction(
        &self,
        user_id: i64,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError>;

    async fn get_transaction(
        &self,
        user_id: i64,
        transaction_id: i64,
    ) -> Result<Transaction, TransactionRepoError>;

    /// Newest first: ordered by date, then id, both descending.
    async fn get_transactions(
        &self,
        user_id: i64,
        page_options: Option<PageOptions>,
    ) -> Result<Vec<Transaction>, TransactionRepoError>;

    async fn update_transaction(
        &self,
        user_id: i64,
        transaction_id: i64,
        updated_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError>;

    async fn delete_transaction(
        &self,
        user_id: i64,
        transaction_id: i64,
    ) -> Result<Transaction, TransactionRepoError>;
}

#[derive(Error, Debug)]
pub enum TransactionRepoError {
    #[error("Transaction with id {0} not found")]
    TransactionNotFound(i64),
    #[error("User {0} not found")]
    UserNotFound(i64),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Transaction {
    pub id: i64,
    pub user_id: i64,
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub category: String,
    pub description: Option<String>,
}

impl Transaction {
    pub fn new(
        id: i64,
        user_id: i64,
        date: NaiveDate,
        amount: f64,
        transaction_type: String,
        category: String,
        description: Option<String>,
    ) -> Transaction {
        Transaction {
            id,
            user_id,
            date,
            amount,
            transaction_type,
            category,
            description,
        }
    }
}

impl PartialOrd for Transaction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let date_ordering = self.date.partial_cmp(&other.date);
        if let Some(Equal) = date_ordering {
            self.id.partial_cmp(&other.id)
        } else {
            date_ordering
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub category: String,
    pub description: Option<String>,
}

impl NewTransaction {
    pub fn new(
        date: NaiveDate,
        amount: f64,
        transaction_type: String,
        category: String,
        description: Option<String>,
    ) -> NewTransaction {
        NewTransaction {
            date,
            amount,
            transaction_type,
            category,
            description,
        }
    }

    pub fn to_transaction(self, id: i64, user_id: i64) -> Transaction {
        Transaction::new(
            id,
            user_id,
            self.date,
            self.amount,
            self.transaction_type,
            self.category,
            self.description,
        )
    }
}
