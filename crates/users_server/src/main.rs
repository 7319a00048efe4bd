//! Users API server
//!
//! Minimal in-memory users resource exposed over HTTP

use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;
use users_server::{ServerConfig, start_server};

#[tokio::main]
async fn main() -> miette::Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .with_cause_chain()
                .color(true)
                .build(),
        )
    }))?;
    miette::set_panic_hook();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("users_server=debug,users_core=debug,tower_http=debug")
        }))
        .with_file(true)
        .with_line_number(true)
        .with_timer(tracing_subscriber::fmt::time::LocalTime::rfc_3339())
        .pretty()
        .init();

    // Load config from conventional locations, falling back to defaults
    let config = ServerConfig::load_default().await.into_diagnostic()?;

    // Start server
    start_server(config).await.into_diagnostic()?;

    Ok(())
}
