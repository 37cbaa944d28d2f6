use super::UserStoreError;
use crate::domain::{Email, NewUser, User, UserId};

// The interface every credential store implements. `add_user` owns the
// contact-address uniqueness check: it must test and insert atomically.
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    async fn add_user(&mut self, user: NewUser) -> Result<User, UserStoreError>;
    async fn get_user_by_email(&self, email: &Email) -> Result<User, UserStoreError>;
    async fn get_user_by_id(&self, id: UserId) -> Result<User, UserStoreError>;
}
