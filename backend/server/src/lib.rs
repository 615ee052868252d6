//! Documentation of the integer collections demo.
//!
//! A small web app that fills and shows two Redis collections of consecutive integers:
//! a sorted set and a list.
//!
//!
//!
//! # General Infrastructure
//! - User talks to this server over plain HTML forms
//! - Every mutation goes to the **write** Redis target
//! - Every view reads from the **read** Redis target
//! - The two targets can be the same instance or two replicated deployments
//! - No state lives in this process between requests, Redis holds everything
//!
//!
//!
//! # Routes
//!
//! | Method   | Path                    | Does                                   |
//! |----------|-------------------------|----------------------------------------|
//! | GET      | `/`                     | landing page                           |
//! | GET/POST | `/add_sorted_set`       | form / seed 100 integers, redirect     |
//! | GET/POST | `/delete_sorted_set`    | form / delete, redirect or JSON error  |
//! | GET      | `/view_asc_sorted_set`  | sorted set, ascending                  |
//! | GET      | `/view_desc_sorted_set` | sorted set, descending                 |
//! | GET/POST | `/add_list`             | form / append 100 integers, redirect   |
//! | GET/POST | `/delete_list`          | form / delete, redirect                |
//! | GET      | `/view_asc_list`        | list, insertion order                  |
//! | GET      | `/view_desc_list`       | list, reversed                         |
//!
//!
//!
//! # Notes
//!
//! ## Errors
//! Deleting the sorted set and viewing it answer with `{"error": "..."}` on failure.
//! Everything else answers with a plain text 500. Both are logged.
//!
//! ## Concurrency
//! Seeding and clearing the same key from two requests races in Redis. Last writer wins.
//!
//!
//!
//! # Setup
//!
//! Run locally against one Redis for both targets.
//! ```sh
//! REDIS_READ_PORT=6379 RUST_LOG=info cargo run --bin integers-server
//! ```
//!
//! Extra debug output of every fetched collection.
//! ```sh
//! RUST_LOG=debug cargo run --bin integers-server --features integers/verbose
//! ```
//!
//! Live tests against a real Redis.
//! ```sh
//! REDIS_TEST_URL=redis://127.0.0.1:6379 cargo test -- --ignored
//! ```
use std::sync::Arc;

use axum::{Router, routing::get};
use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

pub mod collections;
pub mod config;
pub mod database;
pub mod error;
pub mod query;
pub mod routes;
pub mod state;
#[cfg(test)]
mod testing;
pub mod views;

use config::Config;
use error::AppError;
use routes::{
    add_list_form, add_list_handler, add_sorted_set_form, add_sorted_set_handler,
    delete_list_form, delete_list_handler, delete_sorted_set_form, delete_sorted_set_handler,
    home_handler, view_asc_list_handler, view_asc_sorted_set_handler, view_desc_list_handler,
    view_desc_sorted_set_handler,
};
use state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route(
            "/add_sorted_set",
            get(add_sorted_set_form).post(add_sorted_set_handler),
        )
        .route(
            "/delete_sorted_set",
            get(delete_sorted_set_form).post(delete_sorted_set_handler),
        )
        .route("/view_asc_sorted_set", get(view_asc_sorted_set_handler))
        .route("/view_desc_sorted_set", get(view_desc_sorted_set_handler))
        .route("/add_list", get(add_list_form).post(add_list_handler))
        .route("/delete_list", get(delete_list_form).post(delete_list_handler))
        .route("/view_asc_list", get(view_asc_list_handler))
        .route("/view_desc_list", get(view_desc_list_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server() -> Result<(), AppError> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Loading config...");
    let state = AppState::new(Config::load()?);

    info!(
        "Write target {}:{}, read target {}:{}",
        state.config.write.host, state.config.write.port, state.config.read.host, state.config.read.port
    );

    let app = router(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
