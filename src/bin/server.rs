use std::{fs::OpenOptions, net::SocketAddr, path::PathBuf, sync::Arc, time::Duration};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{
    EnvFilter, Layer, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use fondos_dashboard::{
    ApiClient, AppState, DashboardConfig, build_router, graceful_shutdown, logging_middleware,
};

/// The web server for the funds dashboard.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The base URL of the funds REST API.
    #[arg(long, env = "FONDOS_API_URL", default_value = "http://localhost:8000")]
    api_url: String,

    /// The port to serve the dashboard from.
    #[arg(short, long, env = "FONDOS_PORT", default_value_t = 3000)]
    port: u16,

    /// The client whose funds are shown.
    #[arg(long, env = "FONDOS_CLIENT_ID", default_value = "C123456")]
    client_id: String,

    /// The number of transactions shown in the history tab.
    #[arg(long, env = "FONDOS_HISTORY_LIMIT", default_value_t = 10)]
    history_limit: u32,

    /// How long the outcome of a subscribe or cancel is kept, in milliseconds.
    #[arg(long, env = "FONDOS_NOTIFICATION_DELAY_MS", default_value_t = 1000)]
    notification_delay_ms: u64,

    /// Write debug logs to this file in addition to stdout.
    #[arg(long, env = "FONDOS_LOG_FILE")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    setup_logging(args.log_file.as_ref());

    let api_client = ApiClient::new(&args.api_url).expect("Could not create the funds API client");
    let config = DashboardConfig {
        client_id: args.client_id,
        history_limit: args.history_limit,
        notification_delay: Duration::from_millis(args.notification_delay_ms),
    };
    tracing::info!("Using the funds API at {}", api_client.base_url());

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = build_router(AppState::new(api_client, config))
        .layer(middleware::from_fn(logging_middleware));
    let router = add_tracing_layer(router);

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    tracing::info!("HTTP server listening on {}", addr);
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .expect("Could not start the server");
}

fn setup_logging(log_file: Option<&PathBuf>) {
    let stdout_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")));

    let debug_log = log_file.map(|path| {
        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .expect("Could not create log file");

        tracing_subscriber::fmt::layer()
            .pretty()
            .with_ansi(false)
            .with_writer(Arc::new(log_file))
            .with_filter(LevelFilter::DEBUG)
    });

    tracing_subscriber::registry()
        .with(stdout_log)
        .with(debug_log)
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // Failed funds API calls are already logged where they are handled.
        .on_failure(());

    router.layer(tracing_layer)
}
