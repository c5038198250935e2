use super::*;

fn transaction(id: &str) -> TransactionDto {
    TransactionDto {
        id: id.to_string(),
        user_id: "1".to_string(),
        amount: 10.0,
        kind: TransactionKind::Payment,
        status: TransactionStatus::Completed,
        gateway: PaymentGateway::Paypal,
        gateway_transaction_id: None,
        created_at: Utc::now(),
    }
}

/// Tests a top-up against the simulated backend.
///
/// Verifies that the order is created and captured in one go and that the
/// resulting transaction is listed first.
///
/// Expected: completed PayPal payment for the amount
#[tokio::test]
async fn top_up_captures_order() {
    let (gateway, notifier, log) = mock_gateway().await;
    log.clear();

    let transaction = top_up(&gateway, &notifier, 25.0).await.unwrap();

    assert_eq!(transaction.amount, 25.0);
    assert_eq!(transaction.kind, TransactionKind::Payment);
    assert_eq!(transaction.status, TransactionStatus::Completed);
    assert!(transaction.gateway_transaction_id.is_some());
    assert_eq!(log.successes(), vec!["Payment completed successfully!"]);

    let mut transactions = gateway.get_transactions().await.unwrap();
    assert_eq!(transactions[0].id, transaction.id);

    prepend_transaction(&mut transactions, transaction.clone());
    assert_eq!(
        transactions.iter().filter(|t| t.id == transaction.id).count(),
        1
    );
}

/// Tests a top-up below the minimum.
///
/// Expected: rejected with one notification, no success
#[tokio::test]
async fn top_up_rejects_small_amount() {
    let (gateway, notifier, log) = mock_gateway().await;
    log.clear();

    let result = top_up(&gateway, &notifier, 0.5).await;

    assert!(result.is_err());
    assert_eq!(log.errors(), vec!["Amount must be at least 1.00"]);
    assert!(log.successes().is_empty());
}

/// Tests prepending to a view's list.
///
/// Expected: new transaction first, existing order kept
#[test]
fn prepends_transactions() {
    let mut transactions = vec![transaction("TX-2"), transaction("TX-1")];

    prepend_transaction(&mut transactions, transaction("TX-3"));

    let ids: Vec<_> = transactions.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["TX-3", "TX-2", "TX-1"]);
}
