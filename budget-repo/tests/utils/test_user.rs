use budget_repo::user_repo::{NewUser, UserRepo};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestUser {
    pub id: i64,
    pub username: String,
    repo: Arc<dyn UserRepo>,
}

#[allow(dead_code)]
impl TestUser {
    pub async fn new(user_repo: &Arc<dyn UserRepo>) -> TestUser {
        let username = "test-user-".to_owned() + &Uuid::new_v4().to_string();
        let new_user = NewUser::new(username.clone(), "not a real hash".to_owned());
        let user = user_repo.create_user(new_user).await.unwrap();
        info!(user_id = user.id, %username, "Created user");
        TestUser {
            id: user.id,
            username,
            repo: user_repo.clone(),
        }
    }

    pub async fn delete(&self) {
        self.repo.delete_user(self.id).await.unwrap()
    }
}
