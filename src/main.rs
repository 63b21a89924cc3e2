#![warn(clippy::pedantic, clippy::all, clippy::nursery)]
#![allow(clippy::single_match_else)]

use crate::{
    api::HttpStudentsApi,
    config::RuntimeConfiguration,
    error::{BindSnafu, RollcallResult, ServeSnafu},
    routes::router,
    state::RollcallState,
};
use snafu::ResultExt;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[macro_use]
extern crate tracing;

mod api;
mod config;
mod controller;
mod data;
mod error;
mod maud_conveniences;
mod routes;
mod state;
mod view;

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    warn!("signal received, starting graceful shutdown");
}

async fn run(config: RuntimeConfiguration) -> RollcallResult<()> {
    let api_config = config.api_config();
    let api = HttpStudentsApi::new(&api_config)?;
    info!(collection = api_config.collection_url(), "Using students service");

    let state = RollcallState::new(Arc::new(api), config.ui_config());
    let app = router(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    let server_ip = config.server_ip();
    let listener = TcpListener::bind(server_ip).await.context(BindSnafu {
        address: server_ip,
    })?;

    info!(?server_ip, "Listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context(ServeSnafu)
}

#[tokio::main]
async fn main() {
    //a missing .env is fine, everything has a default
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            panic!("unable to load env vars: {e}");
        }
    }

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .finish(),
    )
    .expect("unable to set tracing subscriber");

    info!("`tracing` online");

    let config = RuntimeConfiguration::new().expect("unable to create config");
    if let Err(e) = run(config).await {
        error!(?e, "Error running rollcall");
        std::process::exit(1);
    }
}
