use crate::password;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[async_trait]
pub trait UserRepo: Sync + Send {
    async fn create_user(&self, new_user: NewUser) -> Result<User, UserRepoError>;
    async fn get_user(&self, user_id: i64) -> Result<User, UserRepoError>;
    async fn get_user_by_username(&self, username: &str) -> Result<User, UserRepoError>;
    async fn update_password(&self, user_id: i64, password: &str) -> Result<(), UserRepoError>;
    async fn delete_user(&self, user_id: i64) -> Result<(), UserRepoError>;
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
}

impl User {
    pub fn new(id: i64, username: String, password: String) -> User {
        User {
            id,
            username,
            password,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NewUser {
    pub username: String,
    /// Stored verbatim. Use [`NewUser::with_hashed_password`] to store an
    /// Argon2 hash instead.
    pub password: String,
}

impl NewUser {
    pub fn new(username: String, password: String) -> NewUser {
        NewUser { username, password }
    }

    pub fn with_hashed_password(
        username: String,
        password: &str,
    ) -> Result<NewUser, argon2::Error> {
        let password_hash = password::encode_password(password)?;
        Ok(NewUser::new(username, password_hash))
    }

    pub fn to_user(self, id: i64) -> User {
        User::new(id, self.username, self.password)
    }
}

#[derive(Error, Debug)]
pub enum UserRepoError {
    #[error("User {0} not found")]
    UserNotFound(i64),
    #[error("User {0} not found")]
    UsernameNotFound(String),
    #[error("Username {0} is already taken")]
    UsernameTaken(String),
    #[error("User {0} still has transactions")]
    UserHasTransactions(i64),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
