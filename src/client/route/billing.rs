use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::{BillingApi, ResourceGateway},
        component::{
            page::{ErrorPage, LoadingPage},
            Field, FieldError, Page, StatusBadge,
        },
        constant::SITE_NAME,
        model::{error::AppError, fetch::Fetch},
        service::{
            billing::{prepend_transaction, top_up},
            validation::{FieldErrors, TopUpForm},
        },
        store::Notifier,
    },
    model::billing::{InvoiceDto, TransactionDto, TransactionKind, TransactionStatus},
};

#[derive(Clone, PartialEq)]
struct Ledger {
    invoices: Vec<InvoiceDto>,
    transactions: Vec<TransactionDto>,
}

impl Ledger {
    /// Completed credits and payments minus refunds.
    fn balance(&self) -> f64 {
        self.transactions
            .iter()
            .filter(|t| t.status == TransactionStatus::Completed)
            .map(|t| match t.kind {
                TransactionKind::Payment | TransactionKind::Credit => t.amount,
                TransactionKind::Refund => -t.amount,
            })
            .sum()
    }
}

#[component]
pub fn Billing() -> Element {
    let gateway = use_context::<ResourceGateway>();
    let notifier = use_context::<Notifier>();

    let mut ledger = use_signal(Fetch::<Ledger>::default);
    let mut form = use_signal(TopUpForm::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut is_paying = use_signal(|| false);

    let future = {
        let gateway = gateway.clone();
        use_resource(move || {
            let gateway = gateway.clone();
            async move {
                let invoices = gateway.get_invoices().await?;
                let transactions = gateway.get_transactions().await?;
                Ok::<_, AppError>(Ledger {
                    invoices,
                    transactions,
                })
            }
        })
    };

    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch billing data: {}", err);
            }
            ledger.set(result.clone().into());
        }
    });

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let amount = match form().parse() {
            Ok(amount) => amount,
            Err(amount_errors) => {
                errors.set(amount_errors);
                return;
            }
        };
        errors.set(FieldErrors::new());

        let gateway = gateway.clone();
        let notifier = notifier.clone();
        is_paying.set(true);
        spawn(async move {
            if let Ok(transaction) = top_up(&gateway, &notifier, amount).await {
                if let Some(current) = ledger.write().data_mut() {
                    prepend_transaction(&mut current.transactions, transaction);
                }
                form.set(TopUpForm::default());
            }
            is_paying.set(false);
        });
    };

    rsx! {
        Title { "Billing | {SITE_NAME}" }
        match ledger() {
            Fetch::Loading => rsx! { LoadingPage {} },
            Fetch::Error(err) => rsx! { ErrorPage { status: err.status(), message: err.to_string() } },
            Fetch::Fetched(data) => rsx! {
                Page {
                    class: "flex flex-col gap-6",
                    h1 { class: "text-2xl font-bold", "Billing" }
                    div {
                        class: "grid gap-6 lg:grid-cols-3",
                        div {
                            class: "card bg-base-200",
                            form {
                                class: "card-body",
                                onsubmit: submit,
                                h2 { class: "card-title", "Add Funds" }
                                p { class: "text-sm opacity-70", {format!("Balance: ${:.2}", data.balance())} }
                                Field {
                                    label: "Amount (USD)",
                                    input {
                                        r#type: "number",
                                        class: "input w-full",
                                        min: "1",
                                        step: "0.01",
                                        value: form().amount,
                                        oninput: move |evt| form.write().amount = evt.value(),
                                    }
                                    FieldError { errors: errors(), field: "amount" }
                                }
                                button {
                                    r#type: "submit",
                                    class: "btn btn-primary",
                                    disabled: is_paying(),
                                    if is_paying() {
                                        span { class: "loading loading-spinner loading-sm mr-2" }
                                    }
                                    "Pay with PayPal"
                                }
                            }
                        }
                        div {
                            class: "card bg-base-200 lg:col-span-2",
                            div {
                                class: "card-body",
                                h2 { class: "card-title", "Invoices" }
                                InvoiceTable { invoices: data.invoices.clone() }
                            }
                        }
                    }
                    div {
                        class: "card bg-base-200",
                        div {
                            class: "card-body",
                            h2 { class: "card-title", "Transactions" }
                            TransactionTable { transactions: data.transactions.clone() }
                        }
                    }
                }
            },
        }
    }
}

#[component]
fn InvoiceTable(invoices: Vec<InvoiceDto>) -> Element {
    rsx! {
        if invoices.is_empty() {
            p { class: "opacity-50 py-4", "No invoices" }
        } else {
            table {
                class: "table",
                thead {
                    tr {
                        th { "Invoice" }
                        th { "Amount" }
                        th { "Status" }
                        th { "Due" }
                    }
                }
                tbody {
                    for invoice in invoices {
                        tr {
                            key: "{invoice.id}",
                            td { "{invoice.id}" }
                            td { {format!("${:.2}", invoice.amount)} }
                            td { StatusBadge { status: invoice.status.as_str() } }
                            td { {invoice.due_date.format("%Y-%m-%d").to_string()} }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TransactionTable(transactions: Vec<TransactionDto>) -> Element {
    rsx! {
        if transactions.is_empty() {
            p { class: "opacity-50 py-4", "No transactions" }
        } else {
            table {
                class: "table",
                thead {
                    tr {
                        th { "Transaction" }
                        th { "Type" }
                        th { "Amount" }
                        th { "Status" }
                        th { "Date" }
                    }
                }
                tbody {
                    for transaction in transactions {
                        tr {
                            key: "{transaction.id}",
                            td { "{transaction.id}" }
                            td { {transaction.kind.as_str()} }
                            td { {format!("${:.2}", transaction.amount)} }
                            td { StatusBadge { status: transaction.status.as_str() } }
                            td { {transaction.created_at.format("%Y-%m-%d %H:%M").to_string()} }
                        }
                    }
                }
            }
        }
    }
}
