#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use std::process::ExitCode;

use leptos::config::get_configuration;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "neighborhood failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;

    let addr = config.bind_addr(leptos_options.site_addr);
    let site_root = config.site_root_or(&leptos_options.site_root);

    let app = routes::app(leptos_options, &site_root);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, site_root = %site_root.display(), "neighborhood listening");
    axum::serve(listener, app).await?;
    Ok(())
}
