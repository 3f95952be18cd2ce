//! Changing how the client is notified about their operations.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use maud::html;
use serde::Deserialize;

use crate::{
    actions::Dispatcher, alert::Alert, dashboard::client_panel::client_panel,
    models::NotificationChannel,
};

#[derive(Debug, Deserialize)]
pub struct PreferencesForm {
    pub preferred_notification: NotificationChannel,
}

/// Update the preferred notification channel and respond with the
/// re-rendered client panel plus a success alert.
pub async fn update_preferences_endpoint(
    State(dispatcher): State<Dispatcher>,
    Form(form): Form<PreferencesForm>,
) -> Response {
    if let Err(error) = dispatcher
        .update_preferences(form.preferred_notification)
        .await
    {
        return error.into_alert_response();
    }

    let store = match dispatcher.snapshot() {
        Ok(store) => store,
        Err(error) => return error.into_alert_response(),
    };

    let alert = Alert::Success {
        message: "Preferences saved".to_owned(),
        details: format!(
            "Notifications will be sent by {}",
            form.preferred_notification.label()
        ),
    };

    html!(
        (client_panel(store.client.client_info.as_ref()))
        (alert.into_oob_html())
    )
    .into_response()
}
