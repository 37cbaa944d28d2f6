use auth_contract::{token_prefix, IdentityClaims, TokenRejection};

use crate::app_state::AppState;
use crate::domain::{
    Email, NewUser, Password, PasswordHash, SessionToken, User, UserId, UserStoreError,
};
use crate::errors::{LoginError, RegisterError, VerifyTokenError};
use crate::utils::demo_user;

/// Registration, login and local token verification against the
/// credential store held in `AppState`.
pub struct AuthService;

impl AuthService {
    pub async fn register(
        state: &AppState,
        username: String,
        email: Email,
        password: Password,
    ) -> Result<User, RegisterError> {
        // hash before taking the write lock
        let password_hash = PasswordHash::from_password(&password)
            .await
            .map_err(|e| {
                log::error!("failed to hash password: {}", e);
                RegisterError::InternalServerError
            })?;

        let user = NewUser::new(username, email, password_hash);
        let result = state.user_store.write().await.add_user(user).await;
        let user = result.map_err(|e| match e {
            UserStoreError::UserAlreadyExists => RegisterError::DuplicateIdentity,
            _ => RegisterError::InternalServerError,
        })?;

        log::info!("User registered: {} (id {})", user.email, user.id);
        Ok(user)
    }

    /// Registers the well-known demo account unless it already exists.
    pub async fn seed_demo_user(state: &AppState) -> Result<(), RegisterError> {
        let email = Email::parse(demo_user::EMAIL.to_owned()).or(Err(RegisterError::InvalidEmail))?;
        let password =
            Password::parse(demo_user::PASSWORD.to_owned()).or(Err(RegisterError::MissingFields))?;

        match Self::register(state, demo_user::USERNAME.to_owned(), email, password).await {
            Ok(_) => Ok(()),
            Err(RegisterError::DuplicateIdentity) => {
                log::info!("Demo user {} already present", demo_user::EMAIL);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    pub async fn login(
        state: &AppState,
        email: &Email,
        password: &Password,
    ) -> Result<SessionToken, LoginError> {
        let user = match state.user_store.read().await.get_user_by_email(email).await {
            Ok(user) => user,
            Err(UserStoreError::UserNotFound) => return Err(LoginError::InvalidCredentials),
            Err(_) => return Err(LoginError::InternalServerError),
        };

        let matches = user.password_hash.verify(password).await.map_err(|e| {
            log::error!("failed to verify password for user {}: {}", user.id, e);
            LoginError::InternalServerError
        })?;
        if !matches {
            return Err(LoginError::InvalidCredentials);
        }

        let token = state.token_service.issue(user.id).map_err(|e| {
            log::error!("failed to issue token for user {}: {}", user.id, e);
            LoginError::InternalServerError
        })?;

        log::info!("User logged in: {}", user.email);
        Ok(token)
    }

    /// Validate `token` and build claims from the current credential record.
    pub async fn verify_token(
        state: &AppState,
        token: &str,
    ) -> Result<IdentityClaims, VerifyTokenError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(TokenRejection::Missing.into());
        }

        let claims = state.token_service.decode(token).map_err(|rejection| {
            log::info!("Rejected token {}...: {}", token_prefix(token), rejection);
            rejection
        })?;

        let user = state
            .user_store
            .read()
            .await
            .get_user_by_id(UserId::new(claims.sub))
            .await
            .map_err(|e| match e {
                UserStoreError::UserNotFound => {
                    log::info!(
                        "Token {}... names unknown subject {}",
                        token_prefix(token),
                        claims.sub
                    );
                    VerifyTokenError::Rejected(TokenRejection::Invalid)
                }
                _ => VerifyTokenError::InternalServerError,
            })?;

        Ok(user.claims())
    }
}
