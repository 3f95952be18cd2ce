//! The fund catalogue and the detail page of a single fund.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    actions::Dispatcher,
    dashboard::category_badge,
    endpoints::{self, format_endpoint},
    html::{
        CARD_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, base, error_banner, format_cop, link,
    },
    models::Fund,
    navigation::NavBar,
    not_found::NotFoundError,
    store::Store,
};

/// Display every fund the backend offers.
///
/// A failed read is shown as an error banner above an empty table.
pub async fn get_funds_page(State(dispatcher): State<Dispatcher>) -> Result<Response, Error> {
    match dispatcher.fetch_all_funds().await {
        Ok(_) | Err(Error::ApiRequestFailed(_)) => {}
        Err(error) => return Err(error),
    }

    let store = dispatcher.snapshot()?;

    Ok(funds_view(&store).into_response())
}

/// Display a single fund.
///
/// Renders the 404 page if the backend does not know the fund, and the fund
/// catalogue with an error banner if the request failed for another reason.
pub async fn get_fund_page(
    State(dispatcher): State<Dispatcher>,
    Path(fund_id): Path<String>,
) -> Response {
    match dispatcher.fetch_fund_details(&fund_id).await {
        Ok(fund) => fund_view(&fund).into_response(),
        Err(Error::FundNotFound(fund_id)) => {
            tracing::debug!("fund {fund_id} does not exist");
            NotFoundError.into_response()
        }
        Err(Error::ApiRequestFailed(_)) => match dispatcher.snapshot() {
            Ok(store) => funds_view(&store).into_response(),
            Err(error) => error.into_response(),
        },
        Err(error) => error.into_response(),
    }
}

fn funds_view(store: &Store) -> Markup {
    let nav_bar = NavBar::new(endpoints::FUNDS_VIEW).into_html();
    let error = store.funds.error.as_ref().map(|error| error.to_string());

    let table_row = |fund: &Fund| {
        html!(
            tr class=(TABLE_ROW_STYLE) data-fund-id=(fund.fund_id)
            {
                td class=(TABLE_CELL_STYLE)
                {
                    a href=(format_endpoint(endpoints::FUND_VIEW, &fund.fund_id)) class=(LINK_STYLE)
                    {
                        (fund.name)
                    }
                }

                td class=(TABLE_CELL_STYLE) { (category_badge(fund.category)) }

                td class=(TABLE_CELL_STYLE) { (format_cop(fund.minimum_amount)) }
            }
        )
    };

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="relative w-full max-w-screen-md"
            {
                h1 class="mb-4 text-xl font-bold" { "Funds" }

                @if let Some(error) = error {
                    (error_banner(&error))
                }

                div class="dark:bg-gray-800"
                {
                    table class="w-full text-sm text-left rtl:text-right
                        text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Name" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Minimum amount" }
                            }
                        }

                        tbody
                        {
                            @for fund in &store.funds.funds {
                                (table_row(fund))
                            }

                            @if store.funds.funds.is_empty() {
                                tr
                                {
                                    td
                                        colspan="3"
                                        class="px-6 py-4 text-center
                                            text-gray-500 dark:text-gray-400"
                                    {
                                        "No funds available or there was an error loading them."
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    );

    base("Funds", &content)
}

fn fund_view(fund: &Fund) -> Markup {
    let nav_bar = NavBar::new(endpoints::FUNDS_VIEW).into_html();
    let dashboard_link = link(endpoints::DASHBOARD_VIEW, "dashboard");

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class={ (CARD_STYLE) " max-w-md" } data-fund-id=(fund.fund_id)
            {
                div class="flex items-start justify-between gap-2 mb-4"
                {
                    h1 class="text-xl font-bold" { (fund.name) }
                    (category_badge(fund.category))
                }

                dl class="text-sm"
                {
                    dt class="text-gray-500 dark:text-gray-400" { "Fund ID" }
                    dd class="mb-2" { (fund.fund_id) }

                    dt class="text-gray-500 dark:text-gray-400" { "Minimum amount" }
                    dd class="mb-2" data-minimum-amount { (format_cop(fund.minimum_amount)) }
                }

                p class="text-sm"
                {
                    "Subscribe or cancel from the " (dashboard_link) "."
                }

                p class="mt-4 text-sm" { (link(endpoints::FUNDS_VIEW, "Back to all funds")) }
            }
        }
    );

    base(&fund.name, &content)
}
