//! Table views for budget data.

use maud::{Markup, html};
use serde_json::Value;

use crate::{
    api_client::BudgetSummaryRow,
    html::{TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, TABLE_STYLE, format_currency},
    transaction::Transaction,
};

const TRANSACTION_COLUMNS: [&str; 10] = [
    "Transaction ID",
    "Date",
    "Subsidiary",
    "Sector",
    "User ID",
    "Allocated Budget",
    "Spent Amount",
    "Remaining Budget",
    "Revenue Generated",
    "Transaction Type",
];

/// The column names of `rows` in the order they first appear.
///
/// The budget API decides the columns, so rows are not assumed to share the
/// same keys.
fn column_names(rows: &[BudgetSummaryRow]) -> Vec<&str> {
    let mut columns: Vec<&str> = Vec::new();

    for key in rows.iter().flat_map(|row| row.keys()) {
        if !columns.contains(&key.as_str()) {
            columns.push(key);
        }
    }

    columns
}

/// The text to show for a JSON value in a table cell.
fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(value) => value.to_string(),
    }
}

fn no_data_row(column_count: usize) -> Markup {
    html! {
        tr class=(TABLE_ROW_STYLE)
        {
            td colspan=(column_count.max(1)) class={(TABLE_CELL_STYLE) " text-center"} { "No data" }
        }
    }
}

/// Render rows of opaque budget data as a table, one column per key.
pub(super) fn summary_table(rows: &[BudgetSummaryRow]) -> Markup {
    let columns = column_names(rows);

    html! {
        div class="overflow-x-auto rounded-lg shadow"
        {
            table class=(TABLE_STYLE)
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        @for column in &columns {
                            th scope="col" class=(TABLE_CELL_STYLE) { (column) }
                        }
                    }
                }

                tbody
                {
                    @for row in rows {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            @for column in &columns {
                                td class=(TABLE_CELL_STYLE) { (cell_text(row.get(*column))) }
                            }
                        }
                    }

                    @if rows.is_empty() {
                        (no_data_row(columns.len()))
                    }
                }
            }
        }
    }
}

/// Render transactions as a table with amounts formatted as currency.
pub(super) fn transactions_table(transactions: &[Transaction]) -> Markup {
    html! {
        div class="overflow-x-auto rounded-lg shadow"
        {
            table class=(TABLE_STYLE)
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        @for column in TRANSACTION_COLUMNS {
                            th scope="col" class=(TABLE_CELL_STYLE) { (column) }
                        }
                    }
                }

                tbody
                {
                    @for transaction in transactions {
                        tr class=(TABLE_ROW_STYLE) data-transaction-id=(transaction.id)
                        {
                            td class=(TABLE_CELL_STYLE) { (transaction.id) }
                            td class=(TABLE_CELL_STYLE) { (transaction.date) }
                            td class=(TABLE_CELL_STYLE) { (transaction.subsidiary) }
                            td class=(TABLE_CELL_STYLE) { (transaction.sector) }
                            td class=(TABLE_CELL_STYLE) { (transaction.user_id) }
                            td class=(TABLE_CELL_STYLE) { (format_currency(transaction.allocated_budget)) }
                            td class=(TABLE_CELL_STYLE) { (format_currency(transaction.spent_amount)) }
                            td class=(TABLE_CELL_STYLE) { (format_currency(transaction.remaining_budget)) }
                            td class=(TABLE_CELL_STYLE) { (format_currency(transaction.revenue_generated)) }
                            td class=(TABLE_CELL_STYLE) { (transaction.transaction_type) }
                        }
                    }

                    @if transactions.is_empty() {
                        (no_data_row(TRANSACTION_COLUMNS.len()))
                    }
                }
            }
        }
    }
}
