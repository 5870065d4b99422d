use std::sync::Arc;

use models::api;

use crate::error::ApiError;
use crate::store::{SeededStore, UserStore};

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Service over the built-in demo data set.
    pub fn seeded() -> Self {
        Self::new(Arc::new(SeededStore))
    }

    pub fn list(&self) -> Vec<api::users::User> {
        self.store.list().into_iter().map(Into::into).collect()
    }

    pub fn get_by_username(&self, username: &str) -> Result<api::users::User, ApiError> {
        self.store
            .find_by_username(username)
            .map(Into::into)
            .ok_or_else(|| ApiError::UserNotFound(username.to_string()))
    }

    pub fn create(&self, payload: api::users::User) -> Result<api::users::User, ApiError> {
        if self.store.find_by_username(&payload.username).is_some() {
            return Err(ApiError::UserAlreadyExists(payload.username));
        }

        let user = self.store.insert(payload.into());

        Ok(user.into())
    }
}
