//! The admin forms for adding, updating and deleting transactions.

use maud::{Markup, html};
use time::{Date, OffsetDateTime};

use crate::{
    endpoints,
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, FORM_CHECKBOX_STYLE, FORM_CONTAINER_STYLE,
        FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, SECTION_HEADING_STYLE, SUBSECTION_HEADING_STYLE,
        submit_button,
    },
    transaction::{Sector, Subsidiary, TransactionType},
};

const FORM_GRID_STYLE: &str = "w-full space-y-4";

const ADD_FORM: &str = "add-transaction-form";
const UPDATE_FORM: &str = "update-transaction-form";
const DELETE_FORM: &str = "delete-transaction-form";

/// The "Admin Actions" section with all three transaction forms.
pub fn admin_actions() -> Markup {
    let today = OffsetDateTime::now_utc().date();

    html! {
        section id="admin-actions"
        {
            h2 class=(SECTION_HEADING_STYLE) { "Admin Actions: Manage Transactions" }

            div class="grid gap-6 xl:grid-cols-3"
            {
                (add_transaction_form(today))
                (update_transaction_form(today))
                (delete_transaction_form())
            }
        }
    }
}

/// The element ID for the input `name` in the form `form`.
///
/// The forms share input names, so IDs are prefixed to stay unique on the page.
fn input_id(form: &str, name: &str) -> String {
    format!("{form}-{name}")
}

fn text_input(form: &str, name: &str, label: &str, required: bool) -> Markup {
    let id = input_id(form, name);

    html! {
        div
        {
            label for=(id) class=(FORM_LABEL_STYLE) { (label) }

            input
                name=(name)
                id=(id)
                type="text"
                required[required]
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}

fn date_input(form: &str, name: &str, label: &str, value: Date, required: bool) -> Markup {
    let id = input_id(form, name);

    html! {
        div
        {
            label for=(id) class=(FORM_LABEL_STYLE) { (label) }

            input
                name=(name)
                id=(id)
                type="date"
                value=(value)
                required[required]
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}

/// A dollar amount input that only accepts values of zero or more.
fn amount_input(form: &str, name: &str, label: &str, required: bool) -> Markup {
    let id = input_id(form, name);

    html! {
        div
        {
            label for=(id) class=(FORM_LABEL_STYLE) { (label) }

            input
                name=(name)
                id=(id)
                type="number"
                min="0"
                step="any"
                value="0"
                required[required]
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}

fn select_input(form: &str, name: &str, label: &str, options: &[&str]) -> Markup {
    let id = input_id(form, name);

    html! {
        div
        {
            label for=(id) class=(FORM_LABEL_STYLE) { (label) }

            select name=(name) id=(id) class=(FORM_TEXT_INPUT_STYLE)
            {
                @for option_name in options {
                    option value=(option_name) { (option_name) }
                }
            }
        }
    }
}

/// A checkbox that opts a field into an update, followed by the field's input.
fn update_toggle(field: &str, label: &str, input: Markup) -> Markup {
    let checkbox_name = format!("update_{field}");
    let id = input_id(UPDATE_FORM, &checkbox_name);

    html! {
        div class="space-y-2"
        {
            div class="flex items-center gap-2"
            {
                input
                    type="checkbox"
                    name=(checkbox_name)
                    id=(id)
                    value="true"
                    class=(FORM_CHECKBOX_STYLE);

                label for=(id) class="text-sm font-medium" { "Update " (label) }
            }

            (input)
        }
    }
}

fn subsidiary_names() -> [&'static str; 3] {
    Subsidiary::ALL.map(Subsidiary::as_str)
}

fn sector_names() -> [&'static str; 5] {
    Sector::ALL.map(Sector::as_str)
}

fn transaction_type_names() -> [&'static str; 2] {
    TransactionType::ALL.map(TransactionType::as_str)
}

fn add_transaction_form(today: Date) -> Markup {
    html! {
        div class=(FORM_CONTAINER_STYLE)
        {
            form
                id=(ADD_FORM)
                hx-post=(endpoints::TRANSACTIONS_API)
                hx-target="#alert-container"
                hx-target-error="#alert-container"
                class=(FORM_GRID_STYLE)
            {
                h3 class=(SUBSECTION_HEADING_STYLE) { "Add a Transaction" }

                (text_input(ADD_FORM, "transaction_id", "Transaction ID", true))
                (date_input(ADD_FORM, "date", "Date", today, true))
                (select_input(ADD_FORM, "subsidiary", "Subsidiary", &subsidiary_names()))
                (select_input(ADD_FORM, "sector", "Sector", &sector_names()))
                (text_input(ADD_FORM, "user_id", "User ID", true))
                (amount_input(ADD_FORM, "allocated_budget", "Allocated Budget", true))
                (amount_input(ADD_FORM, "spent_amount", "Spent Amount", true))
                (amount_input(ADD_FORM, "revenue_generated", "Revenue Generated", true))
                (select_input(ADD_FORM, "transaction_type", "Transaction Type", &transaction_type_names()))

                (submit_button("Add Transaction", BUTTON_PRIMARY_STYLE))
            }
        }
    }
}

fn update_transaction_form(today: Date) -> Markup {
    // Unticked fields are never sent, so their inputs must not block submission.
    let toggles = [
        update_toggle(
            "date",
            "Date",
            date_input(UPDATE_FORM, "new_date", "New Date", today, false),
        ),
        update_toggle(
            "subsidiary",
            "Subsidiary",
            select_input(UPDATE_FORM, "new_subsidiary", "New Subsidiary", &subsidiary_names()),
        ),
        update_toggle(
            "sector",
            "Sector",
            select_input(UPDATE_FORM, "new_sector", "New Sector", &sector_names()),
        ),
        update_toggle(
            "allocated_budget",
            "Allocated Budget",
            amount_input(UPDATE_FORM, "new_allocated_budget", "New Allocated Budget", false),
        ),
        update_toggle(
            "spent_amount",
            "Spent Amount",
            amount_input(UPDATE_FORM, "new_spent_amount", "New Spent Amount", false),
        ),
        update_toggle(
            "revenue_generated",
            "Revenue Generated",
            amount_input(
                UPDATE_FORM,
                "new_revenue_generated",
                "New Revenue Generated",
                false,
            ),
        ),
        update_toggle(
            "transaction_type",
            "Transaction Type",
            select_input(
                UPDATE_FORM,
                "new_transaction_type",
                "New Transaction Type",
                &transaction_type_names(),
            ),
        ),
    ];

    html! {
        div class=(FORM_CONTAINER_STYLE)
        {
            form
                id=(UPDATE_FORM)
                hx-put=(endpoints::TRANSACTIONS_API)
                hx-target="#alert-container"
                hx-target-error="#alert-container"
                class=(FORM_GRID_STYLE)
            {
                h3 class=(SUBSECTION_HEADING_STYLE) { "Update a Transaction" }

                // Not required: submitting without an ID does nothing.
                (text_input(UPDATE_FORM, "transaction_id", "Transaction ID to Update", false))

                @for toggle in toggles {
                    (toggle)
                }

                (submit_button("Update Transaction", BUTTON_PRIMARY_STYLE))
            }
        }
    }
}

fn delete_transaction_form() -> Markup {
    html! {
        div class=(FORM_CONTAINER_STYLE)
        {
            form
                id=(DELETE_FORM)
                hx-delete=(endpoints::TRANSACTIONS_API)
                hx-target="#alert-container"
                hx-target-error="#alert-container"
                class=(FORM_GRID_STYLE)
            {
                h3 class=(SUBSECTION_HEADING_STYLE) { "Delete a Transaction" }

                (text_input(DELETE_FORM, "transaction_id", "Transaction ID to Delete", true))

                (submit_button("Delete Transaction", BUTTON_DELETE_STYLE))
            }
        }
    }
}
