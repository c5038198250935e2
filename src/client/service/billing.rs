//! Balance top-ups through the payment provider.

use dioxus_logger::tracing;

use crate::{
    client::{
        api::{BillingApi, ResourceGateway},
        model::error::AppError,
        store::Notifier,
    },
    model::billing::TransactionDto,
};

/// Creates and immediately captures a payment order for `amount`.
///
/// The provider's approval step happens between the two calls in the browser
/// checkout; the simulated backend approves every order.
pub async fn top_up(
    gateway: &ResourceGateway,
    notifier: &Notifier,
    amount: f64,
) -> Result<TransactionDto, AppError> {
    let order = gateway.create_payment_order(amount).await?;
    tracing::debug!("Created payment order {}", order.id);

    let transaction = gateway.capture_payment_order(&order.id).await?;
    tracing::info!("Captured payment order {} as {}", order.id, transaction.id);
    notifier.success("Payment completed successfully!");

    Ok(transaction)
}

/// Puts a newly captured transaction at the front of a view's list.
pub fn prepend_transaction(transactions: &mut Vec<TransactionDto>, transaction: TransactionDto) {
    transactions.retain(|t| t.id != transaction.id);
    transactions.insert(0, transaction);
}
