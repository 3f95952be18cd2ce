//! Endpoints for subscribing to a fund and cancelling a subscription.
//!
//! A successful operation refreshes the client, the active subscriptions and
//! the transaction history, then answers with the re-rendered dashboard
//! content and a success alert. A rejected operation answers with an error
//! alert carrying the backend's message.

use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use maud::html;
use serde::Deserialize;

use crate::{
    Error,
    actions::Dispatcher,
    alert::Alert,
    dashboard::{DashboardTab, dashboard_content},
    routing::get_internal_server_error_redirect,
    store::LastOperation,
};

#[derive(Debug, Deserialize)]
pub struct SubscribeForm {
    pub fund_id: String,
    /// The tab to show in the refreshed dashboard.
    #[serde(default)]
    pub tab: DashboardTab,
}

#[derive(Debug, Default, Deserialize)]
pub struct CancelForm {
    #[serde(default)]
    pub tab: DashboardTab,
}

/// Subscribe the client to the fund in the form.
pub async fn subscribe_endpoint(
    State(dispatcher): State<Dispatcher>,
    Form(form): Form<SubscribeForm>,
) -> Response {
    let outcome = dispatcher.subscribe_to_fund(&form.fund_id).await;

    operation_response(&dispatcher, outcome, form.tab).await
}

/// Cancel the client's subscription to `fund_id`.
pub async fn cancel_subscription_endpoint(
    State(dispatcher): State<Dispatcher>,
    Path(fund_id): Path<String>,
    Form(form): Form<CancelForm>,
) -> Response {
    let outcome = dispatcher.cancel_subscription(&fund_id).await;

    operation_response(&dispatcher, outcome, form.tab).await
}

async fn operation_response(
    dispatcher: &Dispatcher,
    outcome: Result<LastOperation, Error>,
    tab: DashboardTab,
) -> Response {
    let last_operation = match outcome {
        Ok(last_operation) => last_operation,
        Err(error) => {
            tracing::error!("could not record the operation: {error}");
            return get_internal_server_error_redirect();
        }
    };

    if !last_operation.is_success() {
        return Alert::ErrorSimple {
            message: last_operation.message(),
        }
        .into_response();
    }

    let store = match dispatcher
        .refresh_after_mutation()
        .await
        .and_then(|_| dispatcher.snapshot())
    {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not refresh the dashboard: {error}");
            return get_internal_server_error_redirect();
        }
    };

    let alert = Alert::SuccessSimple {
        message: last_operation.message(),
    };

    html!(
        (dashboard_content(&store, tab))
        (alert.into_oob_html())
    )
    .into_response()
}
