use maud::{Markup, html};

use crate::{
    endpoints,
    html::{CARD_STYLE, FORM_LABEL_STYLE, FORM_SELECT_STYLE, format_cop},
    models::{Client, NotificationChannel},
};

/// The client's balance, notification preference and ID.
///
/// This is also the response of the preferences endpoint, which swaps the
/// whole panel.
pub(crate) fn client_panel(client: Option<&Client>) -> Markup {
    let Some(client) = client else {
        return html! {
            div id="client-panel" class=(CARD_STYLE)
            {
                p class="text-gray-500 dark:text-gray-400" { "Loading client information..." }
            }
        };
    };

    html! {
        div id="client-panel" class=(CARD_STYLE)
        {
            h3 class="text-sm text-gray-600 dark:text-gray-400" { "Available balance" }
            p class="mb-4 text-3xl font-bold" data-balance { (format_cop(client.balance)) }

            label for="preferred_notification" class=(FORM_LABEL_STYLE) { "Notify me by" }
            select
                id="preferred_notification"
                name="preferred_notification"
                class=(FORM_SELECT_STYLE)
                hx-patch=(endpoints::PREFERENCES_API)
                hx-trigger="change"
                hx-target="#client-panel"
                hx-swap="outerHTML"
                hx-target-error="#alert-container"
            {
                @for channel in [NotificationChannel::Email, NotificationChannel::Sms] {
                    option
                        value=(channel)
                        selected[channel == client.preferred_notification]
                    {
                        (channel.label())
                    }
                }
            }

            p class="mt-2 text-sm text-gray-600 dark:text-gray-400" data-contact
            {
                (client.preferred_notification.label()) ": "
                (client.contact_detail().unwrap_or("Not specified"))
            }

            p class="mt-4 text-xs text-gray-500 dark:text-gray-400" { "ID: " (client.client_id) }
        }
    }
}
