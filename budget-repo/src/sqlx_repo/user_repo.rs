use crate::sqlx_repo::{is_foreign_key_violation, is_unique_violation, SQLxRepo};
use crate::user_repo::UserRepoError::{
    UserHasTransactions, UserNotFound, UsernameNotFound, UsernameTaken,
};
use crate::user_repo::{NewUser, User, UserRepo, UserRepoError};
use anyhow::Context;
use async_trait::async_trait;
use sqlx::{query, query_as, query_scalar};
use tracing::instrument;

#[derive(sqlx::FromRow)]
struct UserEntry {
    id: i64,
    username: String,
    password: String,
}

impl From<UserEntry> for User {
    fn from(value: UserEntry) -> Self {
        User::new(value.id, value.username, value.password)
    }
}

#[async_trait]
impl UserRepo for SQLxRepo {
    #[instrument(skip(self, new_user), fields(username = %new_user.username))]
    async fn create_user(&self, new_user: NewUser) -> Result<User, UserRepoError> {
        let result = query_scalar::<_, i64>(
            "INSERT INTO users (username, password) VALUES (?, ?) RETURNING id",
        )
        .bind(&new_user.username)
        .bind(&new_user.password)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(id) => Ok(new_user.to_user(id)),
            Err(e) if is_unique_violation(&e) => Err(UsernameTaken(new_user.username)),
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("Unable to create user {}", new_user.username))
                .into()),
        }
    }

    #[instrument(skip(self))]
    async fn get_user(&self, user_id: i64) -> Result<User, UserRepoError> {
        let user: Option<UserEntry> =
            query_as("SELECT id, username, password FROM users WHERE id = ?")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("Unable to get user {}", user_id))?;
        user.map(User::from).ok_or(UserNotFound(user_id))
    }

    #[instrument(skip(self))]
    async fn get_user_by_username(&self, username: &str) -> Result<User, UserRepoError> {
        let user: Option<UserEntry> =
            query_as("SELECT id, username, password FROM users WHERE username = ?")
                .bind(username)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("Unable to get user {}", username))?;
        user.map(User::from)
            .ok_or_else(|| UsernameNotFound(username.to_owned()))
    }

    #[instrument(skip(self, password))]
    async fn update_password(&self, user_id: i64, password: &str) -> Result<(), UserRepoError> {
        let result = query("UPDATE users SET password = ? WHERE id = ?")
            .bind(password)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Unable to update password for {}", user_id))?;
        if result.rows_affected() == 1 {
            Ok(())
        } else {
            Err(UserNotFound(user_id))
        }
    }

    #[instrument(skip(self))]
    async fn delete_user(&self, user_id: i64) -> Result<(), UserRepoError> {
        let result = query("DELETE FROM users WHERE id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await;

        match result {
            Ok(r) if r.rows_affected() == 1 => Ok(()),
            Ok(_) => Err(UserNotFound(user_id)),
            Err(e) if is_foreign_key_violation(&e) => Err(UserHasTransactions(user_id)),
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("Unable to delete user {}", user_id))
                .into()),
        }
    }
}
