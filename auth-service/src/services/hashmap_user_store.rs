use std::collections::HashMap;

use crate::domain::{Email, NewUser, User, UserId, UserStore, UserStoreError};

/// In-memory credential store. Ids are assigned sequentially from 1.
#[derive(Default)]
pub struct HashmapUserStore {
    users: HashMap<UserId, User>,
    ids_by_email: HashMap<Email, UserId>,
    last_id: i64,
}

impl HashmapUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_user_count(&self) -> usize {
        self.users.len()
    }
}

#[async_trait::async_trait]
impl UserStore for HashmapUserStore {
    async fn add_user(&mut self, user: NewUser) -> Result<User, UserStoreError> {
        if self.ids_by_email.contains_key(&user.email) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        self.last_id += 1;
        let id = UserId::new(self.last_id);
        let user = User::from_new(id, user);
        self.ids_by_email.insert(user.email.clone(), id);
        self.users.insert(id, user.clone());
        Ok(user)
    }

    async fn get_user_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        let id = self
            .ids_by_email
            .get(email)
            .ok_or(UserStoreError::UserNotFound)?;
        self.get_user_by_id(*id).await
    }

    async fn get_user_by_id(&self, id: UserId) -> Result<User, UserStoreError> {
        self.users
            .get(&id)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }
}
