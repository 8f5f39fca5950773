//! In-memory user store.
//!
//! Users live for the lifetime of the process. Login uniqueness is enforced
//! under the write lock so concurrent registrations cannot both claim a login.

use std::collections::HashMap;

use anyhow::anyhow;
use tokio::sync::RwLock;
use tracing::{debug, instrument};
use uuid::Uuid;

use craftplace_core::AppError;

use super::model::User;

#[derive(Debug, Default)]
pub struct UserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument(skip(self, user), fields(user_id = %user.id()))]
    pub async fn add(&self, user: User) -> Result<(), AppError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.login() == user.login()) {
            return Err(AppError::conflict(anyhow!("login is already taken")));
        }
        if users.contains_key(&user.id()) {
            return Err(AppError::conflict(anyhow!("user already exists")));
        }

        users.insert(user.id(), user);
        debug!("User stored");
        Ok(())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Option<User> {
        self.users.read().await.get(&id).cloned()
    }

    pub async fn get_by_login(&self, login: &str) -> Option<User> {
        let login = login.trim();
        self.users
            .read()
            .await
            .values()
            .find(|u| u.login() == login)
            .cloned()
    }

    #[instrument(skip(self))]
    pub async fn update_login(&self, id: Uuid, new_login: &str) -> Result<(), AppError> {
        let mut users = self.users.write().await;
        let new_login = new_login.trim();

        if users
            .values()
            .any(|u| u.id() != id && u.login() == new_login)
        {
            return Err(AppError::conflict(anyhow!("login is already taken")));
        }

        let user = users
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(anyhow!("user not found")))?;
        user.set_login(new_login)
    }

    #[instrument(skip(self, hashed_password))]
    pub async fn update_password(&self, id: Uuid, hashed_password: String) -> Result<(), AppError> {
        let mut users = self.users.write().await;

        let user = users
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(anyhow!("user not found")))?;
        user.set_hashed_password(hashed_password);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn test_user(login: &str) -> User {
        User::new(Uuid::new_v4(), "test-user", login, "hashed-password".to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_add_and_get() {
        let repo = UserRepository::new();
        let user = test_user("ulogin");
        let id = user.id();

        repo.add(user.clone()).await.unwrap();

        assert_eq!(repo.get_by_id(id).await, Some(user.clone()));
        assert_eq!(repo.get_by_login("ulogin").await, Some(user));
    }

    #[tokio::test]
    async fn test_duplicate_login_conflicts() {
        let repo = UserRepository::new();
        let original = test_user("ulogin");
        repo.add(original.clone()).await.unwrap();

        let duplicate = test_user("ulogin");
        let duplicate_id = duplicate.id();
        let err = repo.add(duplicate).await.unwrap_err();
        assert_eq!(err.status, StatusCode::CONFLICT);
        assert!(repo.get_by_id(duplicate_id).await.is_none());
        assert_eq!(repo.get_by_login("ulogin").await, Some(original));
    }

    #[tokio::test]
    async fn test_update_login() {
        let repo = UserRepository::new();
        let user = test_user("ulogin");
        let id = user.id();
        repo.add(user).await.unwrap();

        repo.update_login(id, "newlogin").await.unwrap();

        assert!(repo.get_by_login("ulogin").await.is_none());
        assert_eq!(repo.get_by_login("newlogin").await.unwrap().id(), id);
    }

    #[tokio::test]
    async fn test_update_login_to_taken_login_conflicts() {
        let repo = UserRepository::new();
        let first = test_user("first");
        let first_id = first.id();
        repo.add(first).await.unwrap();
        repo.add(test_user("second")).await.unwrap();

        let err = repo.update_login(first_id, "second").await.unwrap_err();
        assert_eq!(err.status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let repo = UserRepository::new();

        let err = repo
            .update_password(Uuid::new_v4(), "hash".to_string())
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }
}
