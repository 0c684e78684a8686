//! Alert messages shown to the user after an HTMX request.
//!
//! Alerts are swapped into the `#alert-container` element that every page
//! provides. `static/app.js` shows the container, lets the user dismiss the
//! alert and removes alerts that have a `data-dismiss-after` attribute once
//! that many milliseconds have passed.

use maud::{Markup, html};

/// How long a success alert stays on screen, in milliseconds.
pub const SUCCESS_DISMISS_AFTER_MS: u32 = 3000;

/// An alert message with a short summary and longer details.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// Confirms that an action worked. Removed automatically.
    Success {
        /// The summary.
        message: String,
        /// Extra information, may be empty.
        details: String,
    },
    /// Explains why an action failed. Stays until the user dismisses it.
    Error {
        /// The summary.
        message: String,
        /// What went wrong and how to fix it, may be empty.
        details: String,
    },
}

impl Alert {
    /// Render the alert as an HTML fragment.
    pub fn into_html(self) -> Markup {
        let (style, icon, message, details, dismiss_after) = match self {
            Alert::Success { message, details } => (
                "text-green-800 border-green-300 bg-green-50 \
                dark:bg-gray-800 dark:text-green-400 dark:border-green-800",
                "✓",
                message,
                details,
                Some(SUCCESS_DISMISS_AFTER_MS),
            ),
            Alert::Error { message, details } => (
                "text-red-800 border-red-300 bg-red-50 \
                dark:bg-gray-800 dark:text-red-400 dark:border-red-800",
                "!",
                message,
                details,
                None,
            ),
        };

        html! {
            div
                class={ "alert flex items-start gap-3 p-4 mb-4 text-sm border rounded-lg shadow " (style) }
                role="alert"
                data-dismiss-after=[dismiss_after]
            {
                span class="font-bold" aria-hidden="true" { (icon) }

                div class="flex-1"
                {
                    p class="font-medium" { (message) }

                    @if !details.is_empty() {
                        p class="mt-1" { (details) }
                    }
                }

                button
                    type="button"
                    class="alert-dismiss ms-auto font-bold"
                    aria-label="Dismiss"
                {
                    "×"
                }
            }
        }
    }
}
