use linkcut::config::{self, Config};
use linkcut::server;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    init_tracing(&config);

    config.print_summary();

    server::run(config).await
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` takes priority over the configured log level. The output
/// format (`text` or `json`) comes from `LOG_FORMAT`.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
