//! Fondos is a dashboard for an investor's funds.
//!
//! This library serves HTML pages for a client of a funds REST API: the
//! client's balance and notification preference, the fund catalogue, the
//! active subscriptions and the transaction history. Subscribing to a fund and
//! cancelling a subscription are forwarded to the API, which owns every
//! business rule.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod actions;
mod alert;
mod api;
mod app_state;
mod config;
mod dashboard;
mod endpoints;
mod error;
mod funds_page;
mod html;
mod internal_server_error;
mod logging;
mod models;
mod navigation;
mod not_found;
mod routing;
mod store;
mod subscription;

#[cfg(test)]
mod test_utils;

pub use api::ApiClient;
pub use app_state::AppState;
pub use config::{DEFAULT_NOTIFICATION_DELAY, DashboardConfig};
pub use error::Error;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
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
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
