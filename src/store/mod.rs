//! The client-side state of the dashboard.
//!
//! Each of the three resources the dashboard reads (client, funds and
//! transactions) has a container holding its data, a loading flag and the last
//! error. Containers only change through [Phase] transitions applied by their
//! `reduce` method, see [crate::actions::Dispatcher] for the code that applies them.

use std::sync::{Arc, Mutex};

mod client;
mod error;
mod fund;
mod transaction;

pub use client::{ClientEvent, ClientState};
pub use error::{CANCEL_ERROR, ErrorPayload, SUBSCRIBE_ERROR, UNKNOWN_ERROR};
pub use fund::{FundEvent, FundState};
pub use transaction::{LastOperation, TransactionEvent, TransactionState};

/// The stage of an action that calls the funds API.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase<T> {
    /// The request has been sent.
    Pending,
    /// The request succeeded with the payload.
    Fulfilled(T),
    /// The request failed.
    Rejected(ErrorPayload),
}

impl<T> From<Result<T, ErrorPayload>> for Phase<T> {
    fn from(result: Result<T, ErrorPayload>) -> Self {
        match result {
            Ok(payload) => Phase::Fulfilled(payload),
            Err(error) => Phase::Rejected(error),
        }
    }
}

/// All state containers of the dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    pub client: ClientState,
    pub funds: FundState,
    pub transactions: TransactionState,
}

/// The store shared between request handlers.
pub type SharedStore = Arc<Mutex<Store>>;

impl Store {
    /// The error to show in the banner: client first, then funds, then transactions.
    pub fn first_error(&self) -> Option<&ErrorPayload> {
        self.client
            .error
            .as_ref()
            .or(self.funds.error.as_ref())
            .or(self.transactions.error.as_ref())
    }

    /// Whether the client or the fund catalogue is being fetched.
    pub fn is_loading(&self) -> bool {
        self.client.loading || self.funds.loading
    }

    /// Whether the client has an active subscription to `fund_id`.
    pub fn is_subscribed(&self, fund_id: &str) -> bool {
        self.transactions
            .active_subscriptions
            .iter()
            .any(|subscription| subscription.fund_id == fund_id)
    }

    /// The client's balance, or zero when the client has not been loaded.
    pub fn balance(&self) -> f64 {
        self.client
            .client_info
            .as_ref()
            .map_or(0.0, |client| client.balance)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{Subscription, SubscriptionStatus};

    use super::{ErrorPayload, Store};

    #[test]
    fn first_error_prefers_client_then_funds() {
        let mut store = Store::default();
        store.transactions.error = Some("transactions".into());
        assert_eq!(store.first_error(), Some(&ErrorPayload::from("transactions")));

        store.funds.error = Some("funds".into());
        assert_eq!(store.first_error(), Some(&ErrorPayload::from("funds")));

        store.client.error = Some("client".into());
        assert_eq!(store.first_error(), Some(&ErrorPayload::from("client")));
    }

    #[test]
    fn is_loading_ignores_transactions() {
        let mut store = Store::default();
        store.transactions.loading = true;
        assert!(!store.is_loading());

        store.funds.loading = true;
        assert!(store.is_loading());
    }

    #[test]
    fn is_subscribed_scans_active_subscriptions() {
        let mut store = Store::default();
        store
            .transactions
            .active_subscriptions
            .push(Subscription {
                subscription_id: "S1".to_owned(),
                client_id: None,
                fund_id: "2".to_owned(),
                fund_name: None,
                amount_subscribed: 125_000.0,
                status: SubscriptionStatus::Active,
                subscription_date: "2025-03-10T14:30:00".to_owned(),
            });

        assert!(store.is_subscribed("2"));
        assert!(!store.is_subscribed("1"));
    }

    #[test]
    fn balance_defaults_to_zero() {
        assert_eq!(Store::default().balance(), 0.0);
    }
}
