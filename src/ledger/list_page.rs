//! The page listing every income and expense entry.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error, endpoints,
    html::{
        PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
        format_currency,
    },
    ledger::{
        LedgerState,
        adapters::LedgerAdapters,
        records::{EntryKind, LedgerEntry},
    },
    navigation::NavBar,
    services::Session,
};

/// Display the ledger list.
///
/// Income entries come first, then expense entries, each in the order the
/// backend sent them.
///
/// # Errors
///
/// Returns an error page if either list cannot be loaded.
pub async fn get_list_page(
    State(state): State<LedgerState>,
    session: Session,
) -> Result<Response, Error> {
    let adapters = LedgerAdapters::new(state.ledger_service.as_ref(), &session);

    let (income, expenses) = tokio::try_join!(adapters.income_list(), adapters.expense_list())?;

    let entries: Vec<LedgerEntry> = income.into_iter().chain(expenses).collect();

    Ok(list_view(&entries).into_response())
}

fn list_view(entries: &[LedgerEntry]) -> Markup {
    let nav_bar = NavBar::new(endpoints::LIST_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="mb-4 text-2xl font-bold" { "Ledger" }

            @if entries.is_empty() {
                p class="text-gray-500 dark:text-gray-400" { "Nothing recorded yet." }
            } @else {
                div class="relative overflow-x-auto w-full max-w-screen-lg shadow-md rounded"
                {
                    table id="ledger-entries" class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Detail" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                            }
                        }

                        tbody
                        {
                            @for entry in entries {
                                (entry_row(entry))
                            }
                        }
                    }
                }
            }
        }
    };

    base("Ledger", &[], &content)
}

fn entry_row(entry: &LedgerEntry) -> Markup {
    let amount_style = match entry.kind {
        EntryKind::Income => "text-green-600 dark:text-green-400",
        EntryKind::Expense => "text-red-600 dark:text-red-400",
    };

    html! {
        tr class=(TABLE_ROW_STYLE) data-kind=(entry.kind.as_str())
        {
            td class=(TABLE_CELL_STYLE) { (entry.date) }
            td class=(TABLE_CELL_STYLE) { (entry.kind.label()) }
            td class=(TABLE_CELL_STYLE) { (entry.category) }
            td class=(TABLE_CELL_STYLE) { (entry.detail) }
            td class={ (TABLE_CELL_STYLE) " " (amount_style) } { (format_currency(entry.amount)) }
        }
    }
}
