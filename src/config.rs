//! Settings that control what the dashboard reads and how long notifications live.

use std::time::Duration;

use crate::api::{clients::DEFAULT_CLIENT_ID, transactions::DEFAULT_HISTORY_LIMIT};

/// The default time a subscribe or cancel outcome is kept before it is cleared.
pub const DEFAULT_NOTIFICATION_DELAY: Duration = Duration::from_millis(1000);

/// The config for the dashboard views and actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// The client whose balance, subscriptions and history are shown.
    pub client_id: String,

    /// The maximum number of transactions to request for the history tab.
    pub history_limit: u32,

    /// How long the outcome of a subscribe or cancel is kept before it is cleared.
    pub notification_delay: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            client_id: DEFAULT_CLIENT_ID.to_owned(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            notification_delay: DEFAULT_NOTIFICATION_DELAY,
        }
    }
}
