use std::{error::Error, future::Future, future::IntoFuture, pin::Pin};

use app_state::AppState;
use axum::extract::Request;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use utils::auth::{optional_identity, require_identity};

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod routes;
pub mod services;
pub mod utils;
pub mod views;

type ServerFuture = Pin<Box<dyn Future<Output = Result<(), std::io::Error>> + Send>>;

pub fn app_router(app_state: AppState) -> Router {
    let home = Router::new()
        .route("/", get(routes::index).post(routes::index))
        .route_layer(from_fn_with_state(app_state.clone(), optional_identity));

    let protected = Router::new()
        .route("/protected", get(routes::protected).post(routes::protected))
        .route_layer(from_fn_with_state(app_state.clone(), require_identity));

    Router::new()
        .merge(home)
        .merge(protected)
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

pub struct Application {
    http_future: ServerFuture,
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
        log::info!("app service listening on {}", &self.address);
        self.http_future.await
    }
}
