//! Shared page layout, styles and formatting helpers for the HTML views.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

// Link styles
pub const LINK_STYLE: &str = "text-blue-600 hover:text-blue-500 \
    dark:text-blue-500 dark:hover:text-blue-400 underline";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-2 bg-blue-500 \
    dark:bg-blue-600 disabled:bg-blue-700 hover:enabled:bg-blue-600 \
    hover:enabled:dark:bg-blue-700 text-white rounded";

pub const BUTTON_DELETE_STYLE: &str = "text-red-600 hover:text-red-500 \
    dark:text-red-500 dark:hover:text-red-400 underline bg-transparent \
    border-none cursor-pointer";

// Form styles
pub const FORM_CONTAINER_STYLE: &str = "flex flex-col items-center px-6 py-8 \
    mx-auto lg:py-0 max-w-md text-gray-900 dark:text-white";
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-gray-900 dark:text-white disabled:text-gray-500 bg-gray-50 \
    dark:bg-gray-700 border border-gray-300 dark:border-gray-600 \
    dark:placeholder-gray-400 focus:ring-blue-600 focus:border-blue-600 \
    focus:dark:border-blue-500 focus:dark:ring-blue-500";

// Table styles
pub const TABLE_HEADER_STYLE: &str = "text-xs text-gray-700 uppercase \
    bg-gray-50 dark:bg-gray-700 dark:text-gray-400";

pub const TABLE_ROW_STYLE: &str = "bg-white border-b dark:bg-gray-800 dark:border-gray-700";

pub const TABLE_CELL_STYLE: &str = "px-6 py-4";

// Card style
pub const CARD_STYLE: &str = "w-full p-6 bg-white border border-gray-200 \
    rounded-lg shadow dark:bg-gray-800 dark:border-gray-700";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col items-center px-6 py-8 mx-auto lg:py-5 text-gray-900 dark:text-white";

const POSITIVE_AMOUNT_STYLE: &str = "text-green-600 dark:text-green-400";
const NEGATIVE_AMOUNT_STYLE: &str = "text-red-600 dark:text-red-400";

pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
    /// JavaScript source code.
    ScriptSource(PreEscaped<String>),
}

pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Pocketbook" }

                script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                script src="https://cdn.jsdelivr.net/npm/htmx.org@2.0.8/dist/htmx.min.js" {}
                script src="https://cdn.jsdelivr.net/npm/htmx-ext-response-targets@2.0.4" {}

                style
                {
                    r#"
                    #alert-container.hidden {
                        display: none;
                    }
                    "#
                }

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::ScriptSource(text) => script { (text) }
                        HeadElement::ScriptLink(path) => script src=(path) {}
                    }
                }

                script src="/static/app.js" defer {}
            }

            body
                hx-ext="response-targets"
                class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)

                // Alert container for HTMX responses
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
                        "Back to Homepage"
                    }
                }
            }
        }
    );

    base(title, &[], &content)
}

/// Text colour for a transaction amount: green for income, red otherwise.
pub fn amount_style(amount: f64) -> &'static str {
    if amount > 0.0 {
        POSITIVE_AMOUNT_STYLE
    } else {
        NEGATIVE_AMOUNT_STYLE
    }
}

/// Text colour for a balance: green unless it is negative.
pub fn balance_style(balance: f64) -> &'static str {
    if balance < 0.0 {
        NEGATIVE_AMOUNT_STYLE
    } else {
        POSITIVE_AMOUNT_STYLE
    }
}

/// Amounts from this many cents upwards are no longer exact in an `f64`, and
/// numfmt switches to scientific notation not far above it.
const MAX_EXACT_CENTS: f64 = 9_007_199_254_740_992.0;

/// Format `number` as US dollars, e.g. "$1,150.00" or "-$200.00".
///
/// The amount is rounded to the nearest cent first. Anything that rounds to
/// zero cents, including small negative amounts, is shown as "$0.00".
pub fn format_currency(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Option<Formatter>> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .ok()
            .map(|formatter| formatter.precision(Precision::Decimals(0)))
    });

    static NEGATIVE_FMT: OnceLock<Option<Formatter>> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .ok()
            .map(|formatter| formatter.precision(Precision::Decimals(0)))
    });

    let cents = (number.abs() * 100.0).round();

    if cents == 0.0 {
        return "$0.00".to_owned();
    }

    if cents.is_nan() || cents >= MAX_EXACT_CENTS {
        return format_currency_fallback(number);
    }

    let (prefix, formatter) = if number < 0.0 {
        ("-$", negative_fmt)
    } else {
        ("$", positive_fmt)
    };
    let dollars = (cents / 100.0).trunc();

    let dollars_text = match formatter {
        // numfmt formats zero as "0" without the prefix.
        Some(formatter) if dollars >= 1.0 => whole_dollars(formatter.fmt_string(dollars)),
        _ => format!("{prefix}{}", group_thousands(&format!("{dollars:.0}"))),
    };

    format!("{dollars_text}.{:02}", (cents % 100.0) as u8)
}

/// Drop any fraction numfmt appends to a whole number, e.g. "$12.0" -> "$12".
fn whole_dollars(mut formatted_string: String) -> String {
    if let Some(point) = formatted_string.find('.') {
        formatted_string.truncate(point);
    }

    formatted_string
}

/// Insert a comma between every group of three digits, e.g. "1234" -> "1,234".
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

/// Used for values numfmt cannot format, e.g. NaN or amounts too large to
/// hold exact cents.
fn format_currency_fallback(number: f64) -> String {
    let prefix = if number < 0.0 { "-$" } else { "$" };
    let text = format!("{:.2}", number.abs());

    match text.split_once('.') {
        Some((dollars, cents)) => format!("{prefix}{}.{cents}", group_thousands(dollars)),
        None => format!("{prefix}{text}"),
    }
}
