use maud::{DOCTYPE, Markup, html};

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};
use time::{
    OffsetDateTime, PrimitiveDateTime, format_description::well_known::Rfc3339,
    macros::format_description,
};

// Link styles
pub const LINK_STYLE: &str = "text-blue-600 hover:text-blue-500 \
    dark:text-blue-500 dark:hover:text-blue-400 underline";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "px-4 py-2 text-sm font-medium bg-blue-500 \
    dark:bg-blue-600 disabled:bg-gray-400 disabled:cursor-not-allowed \
    dark:disabled:bg-gray-600 hover:enabled:bg-blue-600 \
    hover:enabled:dark:bg-blue-700 text-white rounded";

pub const BUTTON_DELETE_STYLE: &str = "px-4 py-2 text-sm font-medium \
    text-red-600 border border-red-600 rounded hover:bg-red-50 \
    dark:text-red-400 dark:border-red-400 dark:hover:bg-red-900/20";

// Form styles
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
pub const FORM_SELECT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-gray-900 dark:text-white bg-gray-50 dark:bg-gray-700 border \
    border-gray-300 dark:border-gray-600 focus:ring-blue-600 \
    focus:border-blue-600 focus:dark:border-blue-500 focus:dark:ring-blue-500";

// Card styles
pub const CARD_STYLE: &str = "w-full p-6 bg-white rounded-lg shadow \
    dark:bg-gray-800 dark:border dark:border-gray-700";

// Badge styles
pub const BADGE_STYLE: &str = "inline-flex items-center px-2.5 py-0.5 \
    text-xs font-semibold rounded-full border";

// Table styles
pub const TABLE_HEADER_STYLE: &str = "text-xs text-gray-700 uppercase \
    bg-gray-50 dark:bg-gray-700 dark:text-gray-400";
pub const TABLE_ROW_STYLE: &str = "bg-white border-b dark:bg-gray-800 dark:border-gray-700";
pub const TABLE_CELL_STYLE: &str = "px-6 py-4";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col items-center px-6 py-8 mx-auto lg:py-5 text-gray-900 dark:text-white";

pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Fondos" }

                script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                script src="https://cdn.jsdelivr.net/npm/htmx.org@2.0.8/dist/htmx.min.js" {}
                script src="https://cdn.jsdelivr.net/npm/htmx-ext-response-targets@2.0.4" {}

                style
                {
                    r#"
                    .htmx-indicator {
                        display: none;
                    }

                    .htmx-request .htmx-indicator,
                    .htmx-request.htmx-indicator {
                        display: inline;
                    }
                    "#
                }

                script src="/static/app.js" defer {}
            }

            body
                hx-ext="response-targets"
                class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)

                // Alert container for out-of-band swaps
                div
                    id="alert-container"
                    class="hidden w-full max-w-md px-4"
                    style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
                {}
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-blue-600 dark:text-blue-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-white bg-blue-600
                            hover:bg-blue-800 focus:ring-4 focus:outline-hidden
                            focus:ring-blue-300 font-medium rounded text-sm px-5
                            py-2.5 text-center dark:focus:ring-blue-900 my-4"
                    {
                        "Back to Dashboard"
                    }
                }
            }
        }
    );

    base(title, &content)
}

/// A red banner for an error that should stay on screen, e.g. a failed read.
pub fn error_banner(message: &str) -> Markup {
    html! {
        div
            id="error-banner"
            role="alert"
            class="w-full p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50
                dark:bg-gray-800 dark:text-red-400"
        {
            span class="font-medium" { "Error: " }
            (message)
        }
    }
}

pub fn loading_spinner() -> Markup {
    // Spinner SVG adapted from https://flowbite.com/docs/components/spinner/
    html! {
        svg
            aria-hidden="true"
            role="status"
            class="inline w-8 h-8 text-gray-200 animate-spin dark:text-gray-600 fill-blue-600"
            viewBox="0 0 100 101"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        {
            path
                d="M100 50.5908C100 78.2051 77.6142 100.591 50 100.591C22.3858 100.591 0 78.2051 0 50.5908C0 22.9766 22.3858 0.59082 50 0.59082C77.6142 0.59082 100 22.9766 100 50.5908ZM9.08144 50.5908C9.08144 73.1895 27.4013 91.5094 50 91.5094C72.5987 91.5094 90.9186 73.1895 90.9186 50.5908C90.9186 27.9921 72.5987 9.67226 50 9.67226C27.4013 9.67226 9.08144 27.9921 9.08144 50.5908Z"
                fill="currentColor" {}
            path
                d="M93.9676 39.0409C96.393 38.4038 97.8624 35.9116 97.0079 33.5539C95.2932 28.8227 92.871 24.3692 89.8167 20.348C85.8452 15.1192 80.8826 10.7238 75.2124 7.41289C69.5422 4.10194 63.2754 1.94025 56.7698 1.05124C51.7666 0.367541 46.6976 0.446843 41.7345 1.27873C39.2613 1.69328 37.813 4.19778 38.4501 6.62326C39.0873 9.04874 41.5694 10.4717 44.0505 10.1071C47.8511 9.54855 51.7191 9.52689 55.5402 10.0491C60.8642 10.7766 65.9928 12.5457 70.6331 15.2552C75.2735 17.9648 79.3347 21.5619 82.5849 25.841C84.9175 28.9121 86.7997 32.2913 88.1811 35.8758C89.083 38.2158 91.5421 39.6781 93.9676 39.0409Z"
                fill="currentFill" {}
        }
    }
}

/// A spinner centred in a block, shown while data is in flight.
pub fn loading_block() -> Markup {
    html! {
        div class="flex justify-center items-center w-full p-8" data-loading
        {
            (loading_spinner())
            span class="sr-only" { "Loading..." }
        }
    }
}

/// The delay before a [reloading_block] requests its content again.
pub const RELOAD_DELAY: &str = "300ms";

/// A [loading_block] that requests `url` after [RELOAD_DELAY] and swaps the
/// response into the inner HTML of `target`.
///
/// The dashboard state is shared between requests, so a response can find
/// data that another request is still loading.
pub fn reloading_block(url: &str, target: &str) -> Markup {
    html! {
        div
            hx-get=(url)
            hx-trigger={ "load delay:" (RELOAD_DELAY) }
            hx-target=(target)
            hx-swap="innerHTML"
            hx-target-error="#alert-container"
        {
            (loading_block())
        }
    }
}

/// Format `amount` in Colombian pesos rounded to whole pesos, e.g. "$500,000 COP".
pub fn format_cop(amount: f64) -> String {
    static FORMATTER: OnceLock<Formatter> = OnceLock::new();

    let formatter = FORMATTER.get_or_init(|| {
        Formatter::new()
            .separator(',')
            .unwrap()
            .precision(Precision::Decimals(0))
    });

    let amount = amount.round();

    if amount < 0.0 {
        format!("-${} COP", formatter.fmt_string(amount.abs()))
    } else if amount > 0.0 {
        format!("${} COP", formatter.fmt_string(amount))
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "$0 COP".to_owned()
    }
}

/// Format an ISO 8601 timestamp from the funds API as a date, e.g. "2025-03-10".
///
/// Returns `timestamp` unchanged if it cannot be parsed.
pub fn format_date(timestamp: &str) -> String {
    match parse_timestamp(timestamp) {
        Some(date_time) => date_time
            .format(format_description!("[year]-[month]-[day]"))
            .unwrap_or_else(|_| timestamp.to_owned()),
        None => timestamp.to_owned(),
    }
}

/// Format an ISO 8601 timestamp from the funds API as a date and time, e.g. "2025-03-10 14:30".
///
/// Returns `timestamp` unchanged if it cannot be parsed.
pub fn format_date_time(timestamp: &str) -> String {
    match parse_timestamp(timestamp) {
        Some(date_time) => date_time
            .format(format_description!("[year]-[month]-[day] [hour]:[minute]"))
            .unwrap_or_else(|_| timestamp.to_owned()),
        None => timestamp.to_owned(),
    }
}

/// The backend sends naive local timestamps, but accept RFC 3339 as well.
fn parse_timestamp(timestamp: &str) -> Option<PrimitiveDateTime> {
    if let Ok(date_time) = OffsetDateTime::parse(timestamp, &Rfc3339) {
        return Some(PrimitiveDateTime::new(date_time.date(), date_time.time()));
    }

    PrimitiveDateTime::parse(
        timestamp,
        format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
        ),
    )
    .ok()
}

/// A link with blue text for use in a <p> tag.
pub fn link(url: &str, text: &str) -> Markup {
    html! (
        a href=(url) class=(LINK_STYLE)
        {
          (text)
        }
    )
}
