//! Implements a struct that holds the state of the dashboard server.

use std::sync::{Arc, Mutex};

use crate::{api::ApiClient, config::DashboardConfig, store::SharedStore};

/// The state of the dashboard server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The client for the funds REST API.
    pub api_client: ApiClient,

    /// The client-side state mirrored from the funds API.
    pub store: SharedStore,

    /// The config that controls which client is shown and for how long notifications live.
    pub config: DashboardConfig,
}

impl AppState {
    /// Create a new [AppState] with an empty store.
    pub fn new(api_client: ApiClient, config: DashboardConfig) -> Self {
        Self {
            api_client,
            store: Arc::new(Mutex::new(Default::default())),
            config,
        }
    }
}
