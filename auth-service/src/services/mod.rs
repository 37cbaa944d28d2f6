pub mod auth;
pub mod hashmap_user_store;
pub mod token_service;

pub use auth::*;
pub use hashmap_user_store::*;
pub use token_service::*;
