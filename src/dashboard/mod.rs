//! Dashboard module
//!
//! The client's balance and notification preference, the fund catalogue with
//! subscribe and cancel buttons, and tabs with the active subscriptions and
//! the transaction history.

mod cards;
mod client_panel;
mod handlers;
mod preferences;
mod tabs;

pub(crate) use cards::category_badge;
pub(crate) use handlers::dashboard_content;
pub use handlers::{get_dashboard_content, get_dashboard_page, get_dashboard_tab};
pub use preferences::update_preferences_endpoint;
pub use tabs::DashboardTab;
