//! Dashboard HTTP handlers and view rendering.
//!
//! The page shell is served immediately and loads its content with htmx, so
//! the four reads against the funds API happen in a separate request that
//! can show a spinner while it is in flight.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_htmx::HxRequest;
use maud::{Markup, html};

use crate::{
    Error,
    actions::Dispatcher,
    dashboard::{
        cards::fund_cards_view,
        client_panel::client_panel,
        tabs::{DashboardTab, TabQuery, tab_panel},
    },
    endpoints,
    html::{PAGE_CONTAINER_STYLE, base, error_banner, loading_block, reloading_block},
    navigation::NavBar,
    store::Store,
};

/// Display the dashboard shell, which loads the dashboard content on page load.
pub async fn get_dashboard_page() -> Response {
    dashboard_view(NavBar::new(endpoints::DASHBOARD_VIEW)).into_response()
}

/// Load the client, funds, active subscriptions and history, then render
/// the dashboard content.
///
/// Requests that did not come from htmx are redirected to the dashboard page.
pub async fn get_dashboard_content(
    HxRequest(is_htmx_request): HxRequest,
    State(dispatcher): State<Dispatcher>,
    Query(query): Query<TabQuery>,
) -> Result<Response, Error> {
    if !is_htmx_request {
        return Ok(Redirect::to(endpoints::DASHBOARD_VIEW).into_response());
    }

    dispatcher.load_dashboard().await?;
    let store = dispatcher.snapshot()?;

    Ok(dashboard_content(&store, query.tab).into_response())
}

/// Render the tab bar and the selected tab from the current state without
/// fetching anything.
pub async fn get_dashboard_tab(
    HxRequest(is_htmx_request): HxRequest,
    State(dispatcher): State<Dispatcher>,
    Query(query): Query<TabQuery>,
) -> Result<Response, Error> {
    if !is_htmx_request {
        return Ok(Redirect::to(endpoints::DASHBOARD_VIEW).into_response());
    }

    let store = dispatcher.snapshot()?;

    Ok(tab_panel(&store, query.tab).into_response())
}

fn dashboard_view(nav_bar: NavBar) -> Markup {
    let nav_bar = nav_bar.into_html();
    let content_url = format!(
        "{}?tab={}",
        endpoints::DASHBOARD_CONTENT,
        DashboardTab::default()
    );

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div
                id="dashboard-content"
                class="w-full max-w-screen-xl"
                hx-get=(content_url)
                hx-trigger="load"
                hx-target-error="#alert-container"
            {
                (loading_block())
            }
        }
    );

    base("Dashboard", &content)
}

/// The inner HTML of `#dashboard-content`.
///
/// Also the response of the subscribe and cancel endpoints, which refresh
/// the whole content after a successful operation.
pub(crate) fn dashboard_content(store: &Store, active_tab: DashboardTab) -> Markup {
    if store.is_loading() {
        let content_url = format!("{}?tab={active_tab}", endpoints::DASHBOARD_CONTENT);
        return reloading_block(&content_url, "#dashboard-content");
    }

    let error = store.first_error().map(|error| error.to_string());

    html!(
        @if let Some(error) = error {
            (error_banner(&error))
        }

        div class="grid grid-cols-1 lg:grid-cols-3 gap-6 w-full"
        {
            aside class="lg:col-span-1 flex flex-col gap-6"
            {
                (client_panel(store.client.client_info.as_ref()))

                section
                    id="dashboard-tabs"
                    class="w-full bg-white rounded-lg shadow dark:bg-gray-800"
                {
                    (tab_panel(store, active_tab))
                }
            }

            section class="lg:col-span-2"
            {
                h3 class="mb-4 text-xl font-semibold" { "Available Funds" }
                (fund_cards_view(store))
            }
        }
    )
}
