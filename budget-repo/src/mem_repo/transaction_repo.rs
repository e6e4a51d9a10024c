use crate::mem_repo::MemRepo;
use crate::transaction_repo::TransactionRepoError::{TransactionNotFound, UserNotFound};
use crate::transaction_repo::{
    NewTransaction, PageOptions, Transaction, TransactionRepo, TransactionRepoError,
};
use async_trait::async_trait;
use std::collections::hash_map::Entry;
use std::collections::HashSet;

#[async_trait]
impl TransactionRepo for MemRepo {
    async fn create_transaction(
        &self,
        user_id: i64,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError> {
        let mut write_guard = self.write_lock()?;

        if !write_guard.users.contains_key(&user_id) {
            return Err(UserNotFound(user_id));
        }

        let id = write_guard.next_transaction_id;
        write_guard.next_transaction_id += 1;

        let transaction = new_transaction.to_transaction(id, user_id);

        write_guard.transactions.insert(id, transaction.clone());
        write_guard
            .user_transactions
            .entry(user_id)
            .or_insert_with(HashSet::new)
            .insert(id);

        Ok(transaction)
    }

    async fn get_transaction(
        &self,
        user_id: i64,
        transaction_id: i64,
    ) -> Result<Transaction, TransactionRepoError> {
        let read_guard = self.read_lock()?;

        let Some(transaction_ids) = read_guard.user_transactions.get(&user_id) else {
            return Err(TransactionNotFound(transaction_id));
        };
        if !transaction_ids.contains(&transaction_id) {
            return Err(TransactionNotFound(transaction_id));
        }

        let transaction = read_guard
            .transactions
            .get(&transaction_id)
            .cloned()
            .ok_or(TransactionNotFound(transaction_id))?;
        Ok(transaction)
    }

    async fn get_transactions(
        &self,
        user_id: i64,
        page_options: Option<PageOptions>,
    ) -> Result<Vec<Transaction>, TransactionRepoError> {
        let read_guard = self.read_lock()?;

        let Some(transaction_ids) = read_guard.user_transactions.get(&user_id) else {
            return Ok(Vec::new());
        };

        let mut transactions: Vec<Transaction> = transaction_ids
            .iter()
            .filter_map(|id| read_guard.transactions.get(id))
            .cloned()
            .collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));

        if let Some(page_options) = page_options {
            transactions = transactions
                .into_iter()
                .skip(page_options.offset as usize)
                .take(page_options.limit as usize)
                .collect();
        }

        Ok(transactions)
    }

    async fn update_transaction(
        &self,
        user_id: i64,
        transaction_id: i64,
        updated_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError> {
        let mut write_guard = self.write_lock()?;

        let Some(transaction_ids) = write_guard.user_transactions.get(&user_id) else {
            return Err(TransactionNotFound(transaction_id));
        };
        if !transaction_ids.contains(&transaction_id) {
            return Err(TransactionNotFound(transaction_id));
        };

        let entry = write_guard.transactions.entry(transaction_id);
        if let Entry::Occupied(mut e) = entry {
            let transaction = updated_transaction.to_transaction(transaction_id, user_id);
            e.insert(transaction.clone());
            Ok(transaction)
        } else {
            Err(TransactionNotFound(transaction_id))
        }
    }

    async fn delete_transaction(
        &self,
        user_id: i64,
        transaction_id: i64,
    ) -> Result<Transaction, TransactionRepoError> {
        let mut write_guard = self.write_lock()?;

        let Some(transaction_ids) = write_guard.user_transactions.get_mut(&user_id) else {
            return Err(TransactionNotFound(transaction_id));
        };
        if !transaction_ids.remove(&transaction_id) {
            return Err(TransactionNotFound(transaction_id));
        }

        write_guard
            .transactions
            .remove(&transaction_id)
            .ok_or(TransactionNotFound(transaction_id))
    }
}
