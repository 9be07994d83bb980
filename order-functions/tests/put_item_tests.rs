mod common;

use aws_sdk_dynamodb::types::AttributeValue;
use common::{order_event, order_event_text, raw, FakeOrderTable, LONG_NUMBER_EVENT};
use order_functions::handlers::{handle_put_item, put_order_item, PutItemOutput, WriteStatus};
use order_functions::types::HandlerError;
use order_storage::order_record::to_order_item;
use pretty_assertions::assert_eq;

fn wire(output: &PutItemOutput) -> String {
    serde_json::to_string(output).unwrap()
}

#[tokio::test]
async fn test_echoes_event_and_writes_one_record() {
    let table = FakeOrderTable::default();

    let output = handle_put_item(&table, order_event("acct1", "vendor9")).await;

    assert_eq!(wire(&output), order_event_text("acct1", "vendor9"));

    let writes = table.writes();
    assert_eq!(writes.len(), 1);
    let record = &writes[0];
    assert_eq!(record.account_id, "acct1");
    assert_eq!(record.vendor_id, "vendor9");
    assert_eq!(record.order_date, "2023-11-05");
    assert_eq!(record.city, "Seattle");
    assert_eq!(record.details.coffee_type, "latte");
    assert_eq!(record.details.coffee_size, "medium");
    assert_eq!(record.details.unit_price.as_str(), "4.5");
    assert_eq!(record.details.quantity.as_str(), "2");
}

#[tokio::test]
async fn test_extra_fields_are_echoed_byte_for_byte() {
    let table = FakeOrderTable::default();
    let text = r#"{"source": "web", "order": {"vendorid": "vendor9", "note": "extra hot", "accountid": "acct1", "orderdate": "2023-11-05", "city": "Seattle", "details": {"quantity": 2, "unitprice": 4.50, "coffeesize": "medium", "coffeetype": "latte"}}}"#;

    let output = handle_put_item(&table, raw(text)).await;

    assert_eq!(wire(&output), text);
    assert_eq!(table.writes().len(), 1);
}

#[tokio::test]
async fn test_long_numbers_reach_the_record_unrounded() {
    let table = FakeOrderTable::default();

    let output = handle_put_item(&table, raw(LONG_NUMBER_EVENT)).await;

    assert_eq!(wire(&output), LONG_NUMBER_EVENT);

    let item = to_order_item(&table.writes()[0]);
    let Some(AttributeValue::M(details)) = item.get("details") else {
        panic!("details should be a map: {item:?}");
    };
    assert_eq!(
        details.get("unitprice"),
        Some(&AttributeValue::N("4.123456789012345678901".to_string()))
    );
    assert_eq!(
        details.get("quantity"),
        Some(&AttributeValue::N("123456789012345678901234".to_string()))
    );
}

#[tokio::test]
async fn test_backend_failure_returns_failed() {
    let table = FakeOrderTable::failing("ProvisionedThroughputExceededException");

    let err = put_order_item(&table, &order_event("acct1", "vendor9"))
        .await
        .unwrap_err();
    assert!(matches!(err, HandlerError::OrderStorage(_)));

    let output = handle_put_item(&table, order_event("acct1", "vendor9")).await;
    assert!(matches!(output, PutItemOutput::Status(WriteStatus::Failed)));
    assert_eq!(wire(&output), r#""FAILED""#);
    assert!(table.writes().is_empty());
}

#[tokio::test]
async fn test_malformed_order_returns_failed_without_writing() {
    let table = FakeOrderTable::default();
    let missing_type = raw(
        r#"{"order": {"vendorid": "vendor9", "accountid": "acct1", "orderdate": "2023-11-05", "city": "Seattle", "details": {"coffeesize": "medium", "unitprice": 4.5, "quantity": 2}}}"#,
    );

    let err = put_order_item(&table, &missing_type).await.unwrap_err();
    assert!(matches!(err, HandlerError::InvalidOrder(_)));
    assert!(err.is_client_error());

    assert_eq!(wire(&handle_put_item(&table, missing_type).await), r#""FAILED""#);
    assert_eq!(wire(&handle_put_item(&table, raw("{}")).await), r#""FAILED""#);
    assert!(table.writes().is_empty());
}
