use std::sync::Arc;

use auth_service::app_state::AppState;
use auth_service::services::HashmapUserStore;
use auth_service::utils::Config;
use auth_service::Application;
use reqwest::{redirect, Client, Response};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

pub const TEST_SECRET: &str = "integration-test-secret";

#[derive(Serialize)]
pub struct RegisterBody<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct LoginBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
    pub app_state: AppState,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(Config::new(TEST_SECRET)).await
    }

    pub async fn with_config(config: Config) -> Self {
        let user_store = Arc::new(RwLock::new(HashmapUserStore::new()));
        let app_state = AppState::from_config(config, user_store);

        let app = Application::build(app_state.clone(), "127.0.0.1:0")
            .await
            .expect("Failed to build app");
        let address = app.address.clone();

        tokio::spawn(app.run());

        // redirects are asserted on, not followed
        let http_client = Client::builder()
            .redirect(redirect::Policy::none())
            .build()
            .expect("Failed to build http client");

        TestApp {
            address,
            http_client,
            app_state,
        }
    }

    pub async fn get_root(&self) -> Response {
        self.http_client
            .get(format!("{}/", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_path(&self, path: &str) -> Response {
        self.http_client
            .get(format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn register<Body: Serialize + ?Sized>(&self, body: &Body) -> Response {
        self.http_client
            .post(format!("{}/register", &self.address))
            .form(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn login<Body: Serialize + ?Sized>(&self, body: &Body) -> Response {
        self.http_client
            .post(format!("{}/login", &self.address))
            .form(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn verify_token<Body: Serialize + ?Sized>(&self, body: &Body) -> Response {
        self.http_client
            .post(format!("{}/verify-token", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Registers and logs in, returning the issued token.
    pub async fn register_and_login(&self, username: &str, email: &str, password: &str) -> String {
        let response = self
            .register(&RegisterBody {
                username,
                email,
                password,
            })
            .await;
        assert_eq!(response.status().as_u16(), 303);

        let response = self.login(&LoginBody { email, password }).await;
        assert_eq!(response.status().as_u16(), 303);
        token_from_location(&response)
    }
}

/// Pulls the token out of a `/user?token=...` redirect.
pub fn token_from_location(response: &Response) -> String {
    let location = response
        .headers()
        .get("location")
        .expect("No location header")
        .to_str()
        .expect("Location is not ascii");
    location
        .strip_prefix("/user?token=")
        .expect("Unexpected redirect target")
        .to_owned()
}

pub fn get_random_email() -> String {
    format!("{}@example.com", Uuid::new_v4())
}
