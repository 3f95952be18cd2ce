//! Alert system for displaying success and error messages to users.
//!
//! Alerts are rendered into the `#alert-container` element of the page shell,
//! either as the target of a failed htmx request or as an out-of-band swap
//! next to the regular content of a successful one. `static/app.js` hides them
//! after a few seconds.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{actions::Dispatcher, endpoints};

/// How long an alert stays on screen before it is dismissed automatically.
pub const ALERT_AUTO_HIDE_MS: u32 = 6000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    Success { message: String, details: String },
    SuccessSimple { message: String },
    Error { message: String, details: String },
    ErrorSimple { message: String },
}

impl Alert {
    fn is_error(&self) -> bool {
        matches!(self, Alert::Error { .. } | Alert::ErrorSimple { .. })
    }

    /// Render the alert on its own, for responses that target `#alert-container`.
    pub fn into_html(self) -> Markup {
        let container_style = if self.is_error() {
            "flex items-start justify-between gap-4 p-4 rounded-lg shadow-lg \
            text-white bg-red-600 dark:bg-red-700"
        } else {
            "flex items-start justify-between gap-4 p-4 rounded-lg shadow-lg \
            text-white bg-green-600 dark:bg-green-700"
        };

        let (message, details) = match self {
            Alert::Success { message, details } | Alert::Error { message, details } => {
                (message, Some(details))
            }
            Alert::SuccessSimple { message } | Alert::ErrorSimple { message } => (message, None),
        };

        html! {
            div
                role="alert"
                class=(container_style)
                data-auto-hide-ms=(ALERT_AUTO_HIDE_MS)
            {
                div
                {
                    p class="font-medium" { (message) }

                    @if let Some(details) = details.filter(|details| !details.is_empty())
                    {
                        p class="mt-1 text-sm" { (details) }
                    }
                }

                button
                    type="button"
                    aria-label="Dismiss"
                    class="text-white/80 hover:text-white"
                    hx-post=(endpoints::DISMISS_ALERT)
                    hx-target="#alert-container"
                    hx-swap="innerHTML"
                {
                    "✕"
                }
            }
        }
    }

    /// Render the alert as an out-of-band swap into `#alert-container`.
    ///
    /// Use this to send an alert along with the regular content of a response.
    pub fn into_oob_html(self) -> Markup {
        html! {
            div id="alert-container" hx-swap-oob="innerHTML"
            {
                (self.into_html())
            }
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        let status_code = if self.is_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::OK
        };

        (status_code, self.into_html()).into_response()
    }
}

/// Dismiss the current alert.
///
/// Clears the error of the last subscribe or cancel and answers with an
/// empty body, which empties `#alert-container`.
pub async fn dismiss_alert_endpoint(State(dispatcher): State<Dispatcher>) -> Response {
    match dispatcher.clear_error() {
        Ok(()) => StatusCode::OK.into_response(),
        Err(error) => error.into_alert_response(),
    }
}
