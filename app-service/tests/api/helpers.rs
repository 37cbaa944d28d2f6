use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use app_service::app_state::{AppState, TokenVerifierType};
use app_service::errors::AuthorityError;
use app_service::services::{HttpTokenVerifier, TokenVerifier};
use app_service::utils::{Config, VERIFY_TOKEN_PATH};
use app_service::Application;
use async_trait::async_trait;
use auth_contract::IdentityClaims;
use auth_service::app_state::AppState as AuthAppState;
use auth_service::services::HashmapUserStore;
use auth_service::utils::Config as AuthConfig;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::post;
use axum::Router;
use reqwest::{redirect, Client, Response};
use tokio::net::TcpListener;
use tokio::sync::RwLock;

pub const AUTH_SECRET: &str = "delegation-test-secret";

pub fn claims(user_id: i64, username: &str, email: &str) -> IdentityClaims {
    IdentityClaims {
        user_id,
        username: username.to_owned(),
        email: email.to_owned(),
    }
}

/// Verifier with canned answers. Unknown tokens are rejected as invalid.
#[derive(Default)]
pub struct FakeVerifier {
    outcomes: HashMap<String, Result<IdentityClaims, AuthorityError>>,
    calls: AtomicUsize,
}

impl FakeVerifier {
    pub fn with(mut self, token: &str, outcome: Result<IdentityClaims, AuthorityError>) -> Self {
        self.outcomes.insert(token.to_owned(), outcome);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenVerifier for FakeVerifier {
    async fn verify(&self, token: &str) -> Result<IdentityClaims, AuthorityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcomes.get(token).cloned().unwrap_or_else(|| {
            Err(AuthorityError::Rejected {
                status: StatusCode::UNAUTHORIZED,
                message: "Invalid token".to_owned(),
            })
        })
    }
}

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
}

impl TestApp {
    pub async fn new(verifier: TokenVerifierType) -> Self {
        Self::with_config(verifier, Config::new("http://auth.invalid")).await
    }

    pub async fn with_config(verifier: TokenVerifierType, config: Config) -> Self {
        let app_state = AppState::new(verifier, Arc::new(config));
        let app = Application::build(app_state, "127.0.0.1:0")
            .await
            .expect("Failed to build app");
        let address = app.address.clone();
        tokio::spawn(app.run());

        TestApp {
            address,
            http_client: no_redirect_client(),
        }
    }

    /// App service delegating over HTTP to `auth_service_url`.
    pub async fn delegating_to(auth_service_url: &str, timeout: Duration) -> Self {
        let config = Config::new(auth_service_url).with_verify_timeout(timeout);
        let verifier = HttpTokenVerifier::from_config(&config).expect("Failed to build verifier");
        Self::with_config(Arc::new(verifier), config).await
    }

    pub async fn get_protected(&self, token: Option<&str>) -> Response {
        let mut request = self
            .http_client
            .get(format!("{}/protected", &self.address))
            .header("Accept", "application/json");
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("Failed to execute request.")
    }

    pub async fn get_path(&self, path: &str) -> Response {
        self.http_client
            .get(format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.http_client
            .post(format!("{}{}", &self.address, path))
            .header("Accept", "application/json")
            .form(form)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

/// A real identity authority with an empty in-memory store.
pub struct AuthServer {
    pub address: String,
    http_client: Client,
}

impl AuthServer {
    pub async fn spawn() -> Self {
        let store = Arc::new(RwLock::new(HashmapUserStore::new()));
        let app_state = AuthAppState::from_config(AuthConfig::new(AUTH_SECRET), store);
        let app = auth_service::Application::build(app_state, "127.0.0.1:0")
            .await
            .expect("Failed to build auth service");
        let address = app.address.clone();
        tokio::spawn(app.run());

        AuthServer {
            address,
            http_client: no_redirect_client(),
        }
    }

    pub async fn register(&self, username: &str, email: &str, password: &str) -> Response {
        self.http_client
            .post(format!("{}/register", &self.address))
            .form(&[("username", username), ("email", email), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn login(&self, email: &str, password: &str) -> Response {
        self.http_client
            .post(format!("{}/login", &self.address))
            .form(&[("email", email), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Token from a successful login redirect, or `None` when login failed.
    pub async fn login_for_token(&self, email: &str, password: &str) -> Option<String> {
        let response = self.login(email, password).await;
        let location = response.headers().get("location")?.to_str().ok()?;
        location.strip_prefix("/user?token=").map(str::to_owned)
    }
}

fn no_redirect_client() -> Client {
    Client::builder()
        .redirect(redirect::Policy::none())
        .build()
        .expect("Failed to build http client")
}

/// Base URL of a server answering every `/verify-token` call with `status`
/// and a non-JSON `body`. Any other path gets axum's empty 404.
pub async fn stub_authority(status: StatusCode, body: &'static str) -> String {
    let router = Router::new().route(
        VERIFY_TOKEN_PATH,
        post(move || async move { (status, Html(body)) }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await });
    format!("http://{}", address)
}

/// Base URL of a port nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", address)
}

/// Base URL of a listener that accepts connections and never answers.
pub async fn hanging_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    format!("http://{}", address)
}
