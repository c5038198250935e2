use crate::{
    client::{
        api::{
            helper::{parse_response, send_request, serialize_json, Api},
            HttpBackend, ResourceGateway,
        },
        model::error::AppError,
    },
    model::billing::{
        CaptureOrderDto, CreateOrderDto, InvoiceDto, PaymentOrderDto, TransactionDto,
    },
};

#[allow(async_fn_in_trait)]
pub trait BillingApi {
    async fn get_invoices(&self) -> Result<Vec<InvoiceDto>, AppError>;

    async fn get_invoice(&self, id: &str) -> Result<InvoiceDto, AppError>;

    async fn get_transactions(&self) -> Result<Vec<TransactionDto>, AppError>;

    /// Opens a payment-provider order for a balance top-up.
    async fn create_payment_order(&self, amount: f64) -> Result<PaymentOrderDto, AppError>;

    /// Captures an approved order, yielding the booked transaction.
    async fn capture_payment_order(&self, order_id: &str) -> Result<TransactionDto, AppError>;
}

impl BillingApi for HttpBackend {
    async fn get_invoices(&self) -> Result<Vec<InvoiceDto>, AppError> {
        let response = send_request(self.get(Api::Management, "/invoices")).await?;
        parse_response(response, Api::Management).await
    }

    async fn get_invoice(&self, id: &str) -> Result<InvoiceDto, AppError> {
        let path = format!("/invoices/{}", id);

        let response = send_request(self.get(Api::Management, &path)).await?;
        parse_response(response, Api::Management).await
    }

    async fn get_transactions(&self) -> Result<Vec<TransactionDto>, AppError> {
        let response = send_request(self.get(Api::Management, "/transactions")).await?;
        parse_response(response, Api::Management).await
    }

    async fn create_payment_order(&self, amount: f64) -> Result<PaymentOrderDto, AppError> {
        let body = serialize_json(&CreateOrderDto { amount })?;

        let response =
            send_request(self.post(Api::Management, "/payments/paypal/create-order").body(body)).await?;
        parse_response(response, Api::Management).await
    }

    async fn capture_payment_order(&self, order_id: &str) -> Result<TransactionDto, AppError> {
        let body = serialize_json(&CaptureOrderDto {
            order_id: order_id.to_string(),
        })?;

        let response =
            send_request(self.post(Api::Management, "/payments/paypal/capture-order").body(body)).await?;
        parse_response(response, Api::Management).await
    }
}

impl BillingApi for ResourceGateway {
    async fn get_invoices(&self) -> Result<Vec<InvoiceDto>, AppError> {
        dispatch!(self, get_invoices())
    }

    async fn get_invoice(&self, id: &str) -> Result<InvoiceDto, AppError> {
        dispatch!(self, get_invoice(id))
    }

    async fn get_transactions(&self) -> Result<Vec<TransactionDto>, AppError> {
        dispatch!(self, get_transactions())
    }

    async fn create_payment_order(&self, amount: f64) -> Result<PaymentOrderDto, AppError> {
        dispatch!(self, create_payment_order(amount))
    }

    async fn capture_payment_order(&self, order_id: &str) -> Result<TransactionDto, AppError> {
        dispatch!(self, capture_payment_order(order_id))
    }
}
