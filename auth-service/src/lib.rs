use std::{error::Error, future::Future, future::IntoFuture, pin::Pin};

use app_state::AppState;
use axum::extract::Request;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use utils::auth::{optional_session, require_session};

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validation;
pub mod views;

type ServerFuture = Pin<Box<dyn Future<Output = Result<(), std::io::Error>> + Send>>;

pub fn app_router(app_state: AppState) -> Router {
    let home = Router::new()
        .route("/", get(routes::index))
        .route_layer(from_fn_with_state(app_state.clone(), optional_session));

    let user = Router::new()
        .route("/user", get(routes::user))
        .route_layer(from_fn_with_state(app_state.clone(), require_session));

    Router::new()
        .merge(home)
        .merge(user)
        .route("/register", get(routes::register_page).post(routes::register))
        .route("/login", get(routes::login_page).post(routes::login))
        .route("/verify-token", post(routes::verify_token))
        // span carries the path only; query strings may hold tokens
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                path = %request.uri().path(),
            )
        }))
        .with_state(app_state)
}

// This struct encapsulates our application-related logic.
pub struct Application {
    http_future: ServerFuture,
    // address is exposed as a public field,
    // so we have access to it in tests.
    pub address: String,
}

impl Application {
    pub async fn build(app_state: AppState, address: &str) -> Result<Self, Box<dyn Error>> {
        let router = app_router(app_state);

        let listener = TcpListener::bind(address).await?;
        let address = format!("http://{}", listener.local_addr()?);
        let http_future = axum::serve(listener, router).into_future();

        Ok(Self {
            http_future: Box::pin(http_future),
            address,
        })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        log::info!("auth service listening on {}", &self.address);
        self.http_future.await
    }
}
