use chrono::Utc;

use crate::{
    client::{
        api::{mock::PendingOrder, BillingApi, MockBackend},
        model::error::AppError,
    },
    model::billing::{
        InvoiceDto, PaymentGateway, PaymentOrderDto, TransactionDto, TransactionKind,
        TransactionStatus,
    },
};

/// Smallest top-up the payment provider accepts.
const MIN_TOP_UP: f64 = 1.0;

impl BillingApi for MockBackend {
    async fn get_invoices(&self) -> Result<Vec<InvoiceDto>, AppError> {
        self.read(|db| Ok(db.invoices.clone()))
    }

    async fn get_invoice(&self, id: &str) -> Result<InvoiceDto, AppError> {
        self.read(|db| {
            db.invoices
                .iter()
                .find(|i| i.id == id)
                .cloned()
                .ok_or_else(|| AppError::NotFound("Invoice not found".to_string()))
        })
    }

    async fn get_transactions(&self) -> Result<Vec<TransactionDto>, AppError> {
        self.read(|db| Ok(db.transactions.clone()))
    }

    async fn create_payment_order(&self, amount: f64) -> Result<PaymentOrderDto, AppError> {
        self.write(|db| {
            // NaN fails this comparison too
            if !(amount >= MIN_TOP_UP) {
                return Err(AppError::Rejected(format!(
                    "Amount must be at least {:.2}",
                    MIN_TOP_UP
                )));
            }

            let id = format!("ORDER-{}", db.allocate_id());
            db.orders.push(PendingOrder {
                id: id.clone(),
                amount,
            });

            Ok(PaymentOrderDto { id })
        })
    }

    async fn capture_payment_order(&self, order_id: &str) -> Result<TransactionDto, AppError> {
        self.write(|db| {
            let user_id = db.session_user()?.id.clone();
            let index = db
                .orders
                .iter()
                .position(|o| o.id == order_id)
                .ok_or_else(|| AppError::NotFound("Payment order not found".to_string()))?;
            let order = db.orders.remove(index);

            let transaction = TransactionDto {
                id: format!("TX-{}", db.allocate_id()),
                user_id,
                amount: order.amount,
                kind: TransactionKind::Payment,
                status: TransactionStatus::Completed,
                gateway: PaymentGateway::Paypal,
                gateway_transaction_id: Some(order.id),
                created_at: Utc::now(),
            };

            db.transactions.insert(0, transaction.clone());
            Ok(transaction)
        })
    }
}
