//! Event Hotels HTTP API server.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use event_hotels::adapters::auth::JwtSessionValidator;
use event_hotels::adapters::http::{app_router, HotelAppState};
use event_hotels::adapters::postgres::{
    PostgresEnrollmentReader, PostgresHotelReader, PostgresSessionReader, PostgresTicketReader,
};
use event_hotels::config::{AppConfig, ServerConfig};

/// JSON logs in production, human-readable otherwise. `RUST_LOG` wins over
/// `server.log_level`.
fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let json = server.is_production();

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer()))
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);
    info!(environment = ?config.server.environment, "Starting event-hotels");

    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Migrations applied");
    }

    let mut validator =
        JwtSessionValidator::new(&config.auth.jwt_secret, config.auth.leeway_secs);
    if config.auth.require_session {
        validator = validator.with_session_reader(Arc::new(PostgresSessionReader::new(pool.clone())));
    }

    let state = HotelAppState {
        session_validator: Arc::new(validator),
        enrollment_reader: Arc::new(PostgresEnrollmentReader::new(pool.clone())),
        ticket_reader: Arc::new(PostgresTicketReader::new(pool.clone())),
        hotel_reader: Arc::new(PostgresHotelReader::new(pool)),
    };

    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutting down");
}
