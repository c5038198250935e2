use super::*;

/// Tests that top-ups below the minimum are refused.
///
/// Expected: Err(Rejected) for 0.5 and for NaN
#[tokio::test]
async fn rejects_small_amounts() {
    let (gateway, _store, _log) = logged_in_gateway().await;

    assert!(matches!(
        gateway.create_payment_order(0.5).await,
        Err(AppError::Rejected(_))
    ));
    assert!(matches!(
        gateway.create_payment_order(f64::NAN).await,
        Err(AppError::Rejected(_))
    ));
}

/// Tests capturing an approved order.
///
/// Verifies that the captured payment is booked as a completed PayPal payment
/// and placed at the front of the transaction list.
///
/// Expected: Ok with the transaction first in the list
#[tokio::test]
async fn capture_prepends_transaction() {
    let (gateway, _store, _log) = logged_in_gateway().await;

    let order = gateway.create_payment_order(25.0).await.unwrap();
    let transaction = gateway.capture_payment_order(&order.id).await.unwrap();
    let transactions = gateway.get_transactions().await.unwrap();

    assert_eq!(transactions[0], transaction);
    assert_eq!(transaction.amount, 25.0);
    assert_eq!(transaction.kind, TransactionKind::Payment);
    assert_eq!(transaction.status, TransactionStatus::Completed);
    assert_eq!(transaction.gateway, PaymentGateway::Paypal);
    assert_eq!(transaction.gateway_transaction_id, Some(order.id));
    assert_eq!(transaction.user_id, ADMIN_ID);
}

/// Tests that an order can only be captured once.
///
/// Expected: Ok the first time, Err(NotFound) the second
#[tokio::test]
async fn order_is_captured_once() {
    let (gateway, _store, _log) = logged_in_gateway().await;
    let order = gateway.create_payment_order(10.0).await.unwrap();

    gateway.capture_payment_order(&order.id).await.unwrap();
    let second = gateway.capture_payment_order(&order.id).await;

    assert_eq!(
        second,
        Err(AppError::NotFound("Payment order not found".to_string()))
    );
}

/// Tests invoice lookup.
///
/// Expected: seeded invoice by id, NotFound otherwise
#[tokio::test]
async fn looks_up_invoices() {
    let (gateway, _store, _log) = mock_gateway();

    let invoices = gateway.get_invoices().await.unwrap();
    let first = gateway.get_invoice(&invoices[0].id).await.unwrap();

    assert_eq!(first, invoices[0]);
    assert!(matches!(
        gateway.get_invoice("INV-999").await,
        Err(AppError::NotFound(_))
    ));
}
