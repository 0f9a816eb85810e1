use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{RestConfig, bind_addr_from_env_value};

/// Main entry point for the paramguard demo server
///
/// Serves the demo router: one validated POST endpoint per built-in field, plus `/health` and
/// `/api-docs/openapi.json`.
///
/// # Environment Variables
/// - `PARAMGUARD_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configured address is invalid or cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("paramguard_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = RestConfig::new(bind_addr_from_env_value(
        std::env::var("PARAMGUARD_REST_ADDR").ok(),
    )?);

    tracing::info!("++ Starting paramguard REST on {}", cfg.bind_addr());

    let listener = tokio::net::TcpListener::bind(cfg.bind_addr()).await?;
    axum::serve(listener, api_rest::app()).await?;

    Ok(())
}
