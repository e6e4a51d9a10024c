use crate::mem_repo::MemRepo;
use crate::user_repo::UserRepoError::{
    UserHasTransactions, UserNotFound, UsernameNotFound, UsernameTaken,
};
use crate::user_repo::{NewUser, User, UserRepo, UserRepoError};
use async_trait::async_trait;

#[async_trait]
impl UserRepo for MemRepo {
    async fn create_user(&self, new_user: NewUser) -> Result<User, UserRepoError> {
        let mut write_guard = self.write_lock()?;

        if write_guard
            .users
            .values()
            .any(|u| u.username == new_user.username)
        {
            return Err(UsernameTaken(new_user.username));
        }

        let id = write_guard.next_user_id;
        write_guard.next_user_id += 1;

        let user = new_user.to_user(id);
        write_guard.users.insert(id, user.clone());

        Ok(user)
    }

    async fn get_user(&self, user_id: i64) -> Result<User, UserRepoError> {
        let read_guard = self.read_lock()?;

        read_guard
            .users
            .get(&user_id)
            .cloned()
            .ok_or(UserNotFound(user_id))
    }

    async fn get_user_by_username(&self, username: &str) -> Result<User, UserRepoError> {
        let read_guard = self.read_lock()?;

        read_guard
            .users
            .values()
            .find(|u| u.username == username)
            .cloned()
            .ok_or_else(|| UsernameNotFound(username.to_owned()))
    }

    async fn update_password(&self, user_id: i64, password: &str) -> Result<(), UserRepoError> {
        let mut write_guard = self.write_lock()?;

        let Some(user) = write_guard.users.get_mut(&user_id) else {
            return Err(UserNotFound(user_id));
        };
        user.password = password.to_owned();
        Ok(())
    }

    async fn delete_user(&self, user_id: i64) -> Result<(), UserRepoError> {
        let mut write_guard = self.write_lock()?;

        if !write_guard.users.contains_key(&user_id) {
            return Err(UserNotFound(user_id));
        }
        if write_guard
            .user_transactions
            .get(&user_id)
            .map_or(false, |ids| !ids.is_empty())
        {
            return Err(UserHasTransactions(user_id));
        }

        write_guard.users.remove(&user_id);
        write_guard.user_transactions.remove(&user_id);
        Ok(())
    }
}
