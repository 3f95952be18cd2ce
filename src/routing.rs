//! Application router configuration.

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, patch, post},
};
use axum_htmx::HxRedirect;
use tower_http::services::ServeDir;

use crate::{
    AppState,
    alert::dismiss_alert_endpoint,
    dashboard::{
        get_dashboard_content, get_dashboard_page, get_dashboard_tab, update_preferences_endpoint,
    },
    endpoints,
    funds_page::{get_fund_page, get_funds_page},
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    subscription::{cancel_subscription_endpoint, subscribe_endpoint},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::DASHBOARD_CONTENT, get(get_dashboard_content))
        .route(endpoints::DASHBOARD_TAB, get(get_dashboard_tab))
        .route(endpoints::FUNDS_VIEW, get(get_funds_page))
        .route(endpoints::FUND_VIEW, get(get_fund_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    // These routes are called by htmx and answer with fragments and alerts.
    let api_routes = Router::new()
        .route(endpoints::SUBSCRIPTIONS_API, post(subscribe_endpoint))
        .route(
            endpoints::CANCEL_SUBSCRIPTION,
            post(cancel_subscription_endpoint),
        )
        .route(endpoints::PREFERENCES_API, patch(update_preferences_endpoint))
        .route(endpoints::DISMISS_ALERT, post(dismiss_alert_endpoint));

    page_routes
        .merge(api_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}

/// Get a response that will redirect the client to the internal server error 500 page.
///
/// **Note**: This redirect is intended to be served as a response to a POST request initiated by HTMX.
/// Route handlers using GET should use `axum::response::Redirect` to redirect via a response.
pub(crate) fn get_internal_server_error_redirect() -> Response {
    (
        HxRedirect(endpoints::INTERNAL_ERROR_VIEW.to_owned()),
        StatusCode::INTERNAL_SERVER_ERROR,
    )
        .into_response()
}
