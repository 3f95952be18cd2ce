//! The dashboard's endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/funds/{fund_id}', use [format_endpoint].

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The page shell of the dashboard.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The dashboard content: client panel, fund cards and the selected tab.
pub const DASHBOARD_CONTENT: &str = "/dashboard/content";
/// The tab bar and the selected tab panel of the dashboard.
pub const DASHBOARD_TAB: &str = "/dashboard/tab";
/// The fund catalogue.
pub const FUNDS_VIEW: &str = "/funds";
/// The detail page of a single fund.
pub const FUND_VIEW: &str = "/funds/{fund_id}";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to subscribe to a fund.
pub const SUBSCRIPTIONS_API: &str = "/api/subscriptions";
/// The route to cancel the subscription to a fund.
pub const CANCEL_SUBSCRIPTION: &str = "/api/subscriptions/{fund_id}/cancel";
/// The route to change the client's notification preferences.
pub const PREFERENCES_API: &str = "/api/preferences";
/// The route to dismiss the current alert.
pub const DISMISS_ALERT: &str = "/api/alerts/dismiss";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/funds/{fund_id}', '{fund_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: &str) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map_or(endpoint_path.len(), |end| param_start + end + 1);

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::DASHBOARD_VIEW);
        assert_endpoint_is_valid_uri(endpoints::DASHBOARD_CONTENT);
        assert_endpoint_is_valid_uri(endpoints::DASHBOARD_TAB);
        assert_endpoint_is_valid_uri(endpoints::FUNDS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::INTERNAL_ERROR_VIEW);
        assert_endpoint_is_valid_uri(endpoints::STATIC);

        assert_endpoint_is_valid_uri(endpoints::SUBSCRIPTIONS_API);
        assert_endpoint_is_valid_uri(endpoints::PREFERENCES_API);
        assert_endpoint_is_valid_uri(endpoints::DISMISS_ALERT);
    }

    #[test]
    fn parameterized_endpoints_are_valid_once_formatted() {
        assert_endpoint_is_valid_uri(&format_endpoint(endpoints::FUND_VIEW, "3"));
        assert_endpoint_is_valid_uri(&format_endpoint(endpoints::CANCEL_SUBSCRIPTION, "3"));
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint("/funds/{fund_id}", "1");

        assert_eq!(formatted_path, "/funds/1");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint("/funds", "1");

        assert_eq!(formatted_path, "/funds");
    }

    #[test]
    fn parameter_in_middle() {
        let formatted_path = format_endpoint("/api/subscriptions/{fund_id}/cancel", "4");

        assert_eq!(formatted_path, "/api/subscriptions/4/cancel");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }
}
