//! The tab bar of the dashboard and its two panels: active subscriptions and transaction history.

use std::fmt::Display;

use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    endpoints::{self, format_endpoint},
    html::{BADGE_STYLE, format_cop, format_date, format_date_time, reloading_block},
    models::{Subscription, Transaction, TransactionType},
    store::Store,
};

/// The panel shown next to the fund cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardTab {
    #[default]
    Subscriptions,
    History,
}

impl DashboardTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardTab::Subscriptions => "subscriptions",
            DashboardTab::History => "history",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            DashboardTab::Subscriptions => "Active Subscriptions",
            DashboardTab::History => "Transaction History",
        }
    }
}

impl Display for DashboardTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The query string of the dashboard content and tab endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct TabQuery {
    #[serde(default)]
    pub tab: DashboardTab,
}

/// The tab bar and the panel for `active_tab`.
///
/// Includes the hidden `#active-tab` input that the subscribe and cancel
/// forms send along so the refreshed dashboard keeps the selected tab.
pub fn tab_panel(store: &Store, active_tab: DashboardTab) -> Markup {
    html! {
        input type="hidden" id="active-tab" name="tab" value=(active_tab);

        div class="border-b border-gray-200 dark:border-gray-700"
        {
            ul class="flex -mb-px text-sm font-medium text-center" role="tablist"
            {
                @for tab in [DashboardTab::Subscriptions, DashboardTab::History] {
                    li class="flex-1" role="presentation" { (tab_button(tab, tab == active_tab)) }
                }
            }
        }

        div class="p-4" role="tabpanel" data-tab=(active_tab)
        {
            @match active_tab {
                DashboardTab::Subscriptions => (subscriptions_list(&store.transactions.active_subscriptions)),
                DashboardTab::History => {
                    @if store.transactions.loading {
                        (reloading_block(
                            &format!("{}?tab={}", endpoints::DASHBOARD_TAB, DashboardTab::History),
                            "#dashboard-tabs",
                        ))
                    } @else {
                        (transaction_history(&store.transactions.transactions))
                    }
                }
            }
        }
    }
}

fn tab_button(tab: DashboardTab, is_active: bool) -> Markup {
    let style = if is_active {
        "inline-block w-full p-4 text-blue-600 border-b-2 border-blue-600 \
        rounded-t-lg dark:text-blue-500 dark:border-blue-500"
    } else {
        "inline-block w-full p-4 border-b-2 border-transparent rounded-t-lg \
        hover:text-gray-600 hover:border-gray-300 dark:hover:text-gray-300"
    };

    html! {
        button
            type="button"
            role="tab"
            class=(style)
            aria-selected=(is_active)
            hx-get={ (endpoints::DASHBOARD_TAB) "?tab=" (tab) }
            hx-target="#dashboard-tabs"
            hx-swap="innerHTML"
            hx-target-error="#alert-container"
        {
            (tab.title())
        }
    }
}

fn subscriptions_list(subscriptions: &[Subscription]) -> Markup {
    if subscriptions.is_empty() {
        return html! {
            p class="p-2 text-sm text-center text-gray-500 dark:text-gray-400" { "No active subscriptions." }
        };
    }

    html! {
        ul class="divide-y divide-gray-200 dark:divide-gray-700" data-subscriptions
        {
            @for subscription in subscriptions {
                li class="flex items-start justify-between gap-4 py-3" data-fund-id=(subscription.fund_id)
                {
                    div
                    {
                        div class="flex items-center gap-2"
                        {
                            span class="text-sm font-semibold" { (subscription.display_name()) }
                            span class={ (BADGE_STYLE) " text-blue-700 border-blue-700 dark:text-blue-300 dark:border-blue-300" }
                            {
                                (subscription.status)
                            }
                        }
                        p class="text-sm" { "Amount: " (format_cop(subscription.amount_subscribed)) }
                        p class="text-xs text-gray-500 dark:text-gray-400"
                        {
                            "Subscribed since: " (format_date(&subscription.subscription_date))
                        }
                    }

                    form
                        hx-post=(format_endpoint(endpoints::CANCEL_SUBSCRIPTION, &subscription.fund_id))
                        hx-include="#active-tab"
                        hx-target="#dashboard-content"
                        hx-target-error="#alert-container"
                        hx-disabled-elt="find button"
                    {
                        button
                            type="submit"
                            aria-label="Cancel subscription"
                            title="Cancel subscription"
                            class="text-red-600 hover:text-red-500 dark:text-red-400"
                        {
                            "✕"
                        }
                    }
                }
            }
        }
    }
}

fn transaction_history(transactions: &[Transaction]) -> Markup {
    if transactions.is_empty() {
        return html! {
            p class="p-2 text-sm text-center text-gray-500 dark:text-gray-400" { "No transactions to show." }
        };
    }

    html! {
        ul class="divide-y divide-gray-200 dark:divide-gray-700" data-transactions
        {
            @for transaction in transactions {
                @let is_subscription = transaction.transaction_type == TransactionType::Subscription;

                li class="py-3" data-transaction-id=(transaction.transaction_id)
                {
                    div class="flex items-center justify-between gap-2"
                    {
                        span class="text-sm font-semibold"
                        {
                            @if is_subscription { "+ " } @else { "- " }
                            (transaction.display_name())
                        }

                        @if is_subscription {
                            span class={ (BADGE_STYLE) " text-green-700 border-green-700 dark:text-green-400 dark:border-green-400" }
                            {
                                (transaction.transaction_type.label())
                            }
                        } @else {
                            span class={ (BADGE_STYLE) " text-red-700 border-red-700 dark:text-red-400 dark:border-red-400" }
                            {
                                (transaction.transaction_type.label())
                            }
                        }
                    }
                    p class="text-sm" { (format_cop(transaction.amount)) }
                    p class="text-xs text-gray-500 dark:text-gray-400"
                    {
                        (format_date_time(&transaction.transaction_date))
                    }
                }
            }
        }
    }
}
