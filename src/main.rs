use craftplace::craftplace_config::ServerConfig;
use craftplace::logging::init_tracing;
use craftplace::router::init_router;
use craftplace::state::init_app_state;
use dotenvy::dotenv;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    let state = match init_app_state() {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "Failed to initialize application state");
            std::process::exit(1);
        }
    };
    let app = init_router(state);

    let server_config = ServerConfig::from_env();
    let address = server_config.address();

    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(address = %address, error = %e, "Failed to bind listener");
            std::process::exit(1);
        }
    };

    info!(address = %address, "Server running");
    info!("Swagger UI available at http://{}/swagger-ui", address);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}
