//! Alert system for displaying success and error messages to users.
//!
//! Alerts are rendered into the `#alert-container` element of the base page,
//! either directly or with an htmx out-of-band swap.

use maud::{Markup, html};

/// A notification for the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    Success { message: String, details: String },
    Error { message: String, details: String },
}

impl Alert {
    /// The alert as a standalone fragment.
    pub fn into_html(self) -> Markup {
        self.render(false)
    }

    /// The alert wrapped in the alert container so htmx swaps it out of band.
    pub fn into_oob_html(self) -> Markup {
        self.render(true)
    }

    fn render(self, out_of_band: bool) -> Markup {
        let (container_style, message, details) = match self {
            Alert::Success { message, details } => (
                "p-4 mb-4 text-green-800 border border-green-300 rounded-lg \
                bg-green-50 dark:bg-gray-800 dark:text-green-400 dark:border-green-800",
                message,
                details,
            ),
            Alert::Error { message, details } => (
                "p-4 mb-4 text-red-800 border border-red-300 rounded-lg \
                bg-red-50 dark:bg-gray-800 dark:text-red-400 dark:border-red-800",
                message,
                details,
            ),
        };

        let alert = html! {
            div class=(container_style) role="alert"
            {
                div class="flex items-center justify-between"
                {
                    h3 class="text-lg font-medium" { (message) }

                    button
                        type="button"
                        class="ms-auto -mx-1.5 -my-1.5 rounded-lg p-1.5 inline-flex items-center justify-center h-8 w-8"
                        onclick="this.closest('[role=alert]').remove()"
                        aria-label="Close"
                    {
                        "×"
                    }
                }

                @if !details.is_empty() {
                    div class="mt-2 mb-2 text-sm" { (details) }
                }
            }
        };

        if out_of_band {
            html! {
                div
                    id="alert-container"
                    hx-swap-oob="true"
                    class="w-full max-w-md px-4"
                    style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
                {
                    (alert)
                }
            }
        } else {
            alert
        }
    }
}
