//! Payroll Calculation Engine HTTP server.
//!
//! Loads the payroll configuration directory and serves the calculation API.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;

#[derive(Parser, Debug)]
#[command(name = "payroll-engine", version, about = "Payroll calculation engine API server")]
struct Args {
    /// Directory containing company.yaml and loan_catalog.yaml.
    #[arg(long, default_value = "./config/default")]
    config: PathBuf,

    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = ConfigLoader::load(&args.config)?;
    info!(
        company = %config.company().name,
        loans = config.loan_catalog().loans.len(),
        "Loaded payroll configuration"
    );

    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!("payroll-engine listening on {}", args.bind);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
