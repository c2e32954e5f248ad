use actor_framework::tracing::setup_tracing;
use favorites_service::config::Config;
use favorites_service::gateway::{self, AppState};
use favorites_service::lifecycle::ServiceSystem;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::init()?;
    setup_tracing(&config.log_level);

    info!(address = %config.gateway_address, "Starting favorites service");

    let system = ServiceSystem::new(config.system());
    if config.seed_demo_data {
        if let Err(e) = system.seed().await {
            error!(error = %e, "Seeding failed");
            return Err(e.into());
        }
    }

    let app = gateway::router(AppState::from_system(&system));
    let listener = tokio::net::TcpListener::bind(&config.gateway_address).await?;
    info!(address = %listener.local_addr()?, "Gateway listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The router and its client clones are gone, so the actors can drain.
    system.shutdown().await?;
    info!("Favorites service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl-C");
    }
    info!("Shutdown signal received");
}
