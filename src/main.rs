//! A web server for the pest detection API. It accepts uploaded plant images and answers with
//! detection results.

mod api;

use axum::handler::{Handler, HandlerWithoutStateExt};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// The address to listen on when `ADDRESS` isn't set.
const DEFAULT_ADDRESS: &str = "127.0.0.1:8000";

/// # Errors
///
/// See implementation.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let address = dotenvy::var("ADDRESS").unwrap_or_else(|_| DEFAULT_ADDRESS.to_owned());

    tracing::info!("Listening to {address}...");

    let listener = TcpListener::bind(&address).await?;

    tracing::info!("Ready!");

    let service = api::handle
        .layer(TraceLayer::new_for_http())
        .into_make_service();

    axum::serve(listener, service).await?;

    Ok(())
}
