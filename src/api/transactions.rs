//! Endpoints under `/transacciones`.

use serde::Serialize;

use crate::{
    api::{ApiClient, ApiError},
    models::{Subscription, Transaction},
};

/// The number of transactions requested when no limit is given.
pub const DEFAULT_HISTORY_LIMIT: u32 = 10;

const SUBSCRIPTIONS: [&str; 2] = ["transacciones", "subscriptions"];
const HISTORY: [&str; 2] = ["transacciones", "history"];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubscriptionRequest<'a> {
    fund_id: &'a str,
}

/// Subscribe the client to the fund with `fund_id`.
///
/// Returns the transaction the backend recorded for the subscription.
pub async fn subscribe_to_fund(api: &ApiClient, fund_id: &str) -> Result<Transaction, ApiError> {
    let request = SubscriptionRequest { fund_id };

    api.post(&SUBSCRIPTIONS, &request).await
}

/// Cancel the client's subscription to the fund with `fund_id`.
///
/// Returns the transaction the backend recorded for the cancellation.
pub async fn cancel_subscription(api: &ApiClient, fund_id: &str) -> Result<Transaction, ApiError> {
    let path = ["transacciones", "subscriptions", fund_id];

    api.delete(&path).await
}

/// Get the most recent transactions, at most `limit` or [DEFAULT_HISTORY_LIMIT] if `None`.
pub async fn get_transaction_history(
    api: &ApiClient,
    limit: Option<u32>,
) -> Result<Vec<Transaction>, ApiError> {
    let limit = limit.unwrap_or(DEFAULT_HISTORY_LIMIT);

    api.get_with_query(&HISTORY, &[("limit", limit)]).await
}

/// Get the client's active subscriptions.
pub async fn get_active_subscriptions(api: &ApiClient) -> Result<Vec<Subscription>, ApiError> {
    api.get(&SUBSCRIPTIONS).await
}
