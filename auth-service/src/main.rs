use std::sync::Arc;

use auth_service::app_state::AppState;
use auth_service::services::{AuthService, HashmapUserStore};
use auth_service::utils::Config;
use auth_service::Application;
use tokio::sync::RwLock;

#[tokio::main]
async fn main() {
    env_logger::init();
    let config = Config::from_env().expect("Failed to load config");
    let listen_addr = config.listen_addr().to_owned();
    let seed = config.seed_demo_user();

    let user_store = Arc::new(RwLock::new(HashmapUserStore::new()));
    let app_state = AppState::from_config(config, user_store);

    if seed {
        AuthService::seed_demo_user(&app_state)
            .await
            .expect("Failed to seed demo user");
    }

    let app = Application::build(app_state, &listen_addr)
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}
