use std::sync::Arc;

use app_service::app_state::AppState;
use app_service::services::HttpTokenVerifier;
use app_service::utils::Config;
use app_service::Application;

#[tokio::main]
async fn main() {
    env_logger::init();
    let config = Config::from_env().expect("Failed to load config");
    let verifier = HttpTokenVerifier::from_config(&config).expect("Failed to build http client");
    log::info!(
        "Delegating token checks to {} (timeout {:?})",
        config.auth_service_url(),
        config.verify_timeout()
    );

    let listen_addr = config.listen_addr().to_owned();
    let app_state = AppState::new(Arc::new(verifier), Arc::new(config));

    let app = Application::build(app_state, &listen_addr)
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}
