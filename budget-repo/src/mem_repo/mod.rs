use crate::schema::SchemaRepo;
use crate::transaction_repo::{Transaction, TransactionRepo};
use crate::user_repo::{User, UserRepo};
use anyhow::anyhow;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

mod schema;
mod transaction_repo;
mod user_repo;

struct State {
    users: HashMap<i64, User>,
    transactions: HashMap<i64, Transaction>,
    user_transactions: HashMap<i64, HashSet<i64>>,
    next_user_id: i64,
    next_transaction_id: i64,
}

impl State {
    fn empty() -> State {
        State {
            users: HashMap::new(),
            transactions: HashMap::new(),
            user_transactions: HashMap::new(),
            next_user_id: 1,
            next_transaction_id: 1,
        }
    }
}

/// Keeps users and transactions behind one lock so the `user_id` reference
/// can be checked on every write.
pub struct MemRepo {
    state: RwLock<State>,
}

impl MemRepo {
    pub fn new() -> MemRepo {
        MemRepo {
            state: RwLock::new(State::empty()),
        }
    }

    fn read_lock(&self) -> Result<RwLockReadGuard<'_, State>, anyhow::Error> {
        self.state
            .read()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<'_, State>, anyhow::Error> {
        self.state
            .write()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }
}

impl Default for MemRepo {
    fn default() -> Self {
        MemRepo::new()
    }
}

pub fn create_repos() -> (
    Arc<dyn UserRepo>,
    Arc<dyn TransactionRepo>,
    Arc<dyn SchemaRepo>,
) {
    let repo = Arc::new(MemRepo::new());
    (repo.clone(), repo.clone(), repo)
}
