//! Card components for the fund catalogue on the dashboard.
//!
//! Each card shows the fund's name, category and minimum amount, and either
//! a subscribe or a cancel button depending on whether the client already
//! holds the fund.

use maud::{Markup, html};

use crate::{
    endpoints::{self, format_endpoint},
    html::{BADGE_STYLE, BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, CARD_STYLE, format_cop},
    models::{Fund, FundCategory},
    store::Store,
};

/// A small pill with the fund category, e.g. "FPV".
pub(crate) fn category_badge(category: FundCategory) -> Markup {
    let colours = match category {
        FundCategory::Fpv => {
            "text-purple-700 border-purple-700 dark:text-purple-300 dark:border-purple-300"
        }
        FundCategory::Fic => "text-teal-700 border-teal-700 dark:text-teal-300 dark:border-teal-300",
    };

    html! {
        span class={ (BADGE_STYLE) " " (colours) } data-category=(category) { (category) }
    }
}

/// Renders the grid of fund cards.
pub(super) fn fund_cards_view(store: &Store) -> Markup {
    let funds = &store.funds.funds;

    if funds.is_empty() {
        return html! {
            p class="p-4 text-center text-gray-500 dark:text-gray-400" data-no-funds
            {
                "No funds available or there was an error loading them."
            }
        };
    }

    let balance = store.balance();

    html! {
        div class="grid grid-cols-1 md:grid-cols-2 gap-4" data-fund-cards
        {
            @for fund in funds {
                (fund_card(fund, balance, store.is_subscribed(&fund.fund_id)))
            }
        }
    }
}

fn fund_card(fund: &Fund, balance: f64, is_subscribed: bool) -> Markup {
    html! {
        div class={ (CARD_STYLE) " flex flex-col justify-between gap-4" } data-fund-id=(fund.fund_id)
        {
            div
            {
                div class="flex items-start justify-between gap-2"
                {
                    h4 class="text-lg font-semibold" { (fund.name) }
                    (category_badge(fund.category))
                }

                p class="mt-2 text-sm text-gray-600 dark:text-gray-400"
                {
                    "Minimum amount: " (format_cop(fund.minimum_amount))
                }
            }

            @if is_subscribed {
                (cancel_form(fund))
            } @else {
                (subscribe_form(fund, balance))
            }
        }
    }
}

fn subscribe_form(fund: &Fund, balance: f64) -> Markup {
    let is_affordable = fund.is_affordable(balance);
    let title = (!is_affordable).then(|| {
        format!(
            "Insufficient balance. You need {}",
            format_cop(fund.minimum_amount)
        )
    });

    html! {
        form
            hx-post=(endpoints::SUBSCRIPTIONS_API)
            hx-include="#active-tab"
            hx-target="#dashboard-content"
            hx-target-error="#alert-container"
            hx-disabled-elt="find button"
        {
            input type="hidden" name="fund_id" value=(fund.fund_id);

            button
                type="submit"
                class={ (BUTTON_PRIMARY_STYLE) " w-full" }
                disabled[!is_affordable]
                title=[title]
            {
                "Subscribe"
            }
        }
    }
}

fn cancel_form(fund: &Fund) -> Markup {
    html! {
        form
            hx-post=(format_endpoint(endpoints::CANCEL_SUBSCRIPTION, &fund.fund_id))
            hx-include="#active-tab"
            hx-target="#dashboard-content"
            hx-target-error="#alert-container"
            hx-disabled-elt="find button"
        {
            button type="submit" class={ (BUTTON_DELETE_STYLE) " w-full" }
            {
                "Cancel subscription"
            }
        }
    }
}
