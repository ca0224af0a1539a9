use sea_orm::Database;
use tracing::info;

use vaxcamp_server::config::ServerConfig;
use vaxcamp_server::router::build_router;
use vaxcamp_server::state::AppState;

#[tokio::main]
async fn main() {
    vaxcamp_core::tracing::init_tracing();

    let config = ServerConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("vaxcamp server listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
