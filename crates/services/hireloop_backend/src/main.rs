// File: services/hireloop_backend/src/main.rs
use std::sync::Arc;

use hireloop_backend::{app_state::AppState, booking_sink, build_app};
use hireloop_common::{init_from_config, log_result, Context, HireloopError};
use hireloop_config::load_config;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), HireloopError> {
    let config = Arc::new(load_config()?);
    init_from_config(&config.logging);

    let (sink, receiver) = booking_sink::channel();
    let _consumer = booking_sink::spawn_booking_log(receiver);

    let state = AppState::from_config(config.clone(), Arc::new(sink))?;
    let app = build_app(&state);

    let addr = format!("{}:{}", state.config.server.host, state.config.server.port);
    let listener = log_result(
        TcpListener::bind(&addr).await,
        &format!("Starting server at http://{}", addr),
        "Failed to bind listener",
    )
    .with_context(|| format!("binding {}", addr))?;
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .context("serving HTTP")?;
    Ok(())
}
