use std::sync::Arc;

use aws_sdk_dynamodb::Client as DynamoDbClient;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use order_functions::{
    handlers::{handle_put_item, PutItemOutput},
    types::Environment,
};
use order_storage::order_record::OrderRecordStorage;
use serde_json::value::RawValue;
use tracing::{info, info_span, Instrument};

async fn function_handler(
    storage: &OrderRecordStorage,
    event: LambdaEvent<Box<RawValue>>,
) -> Result<PutItemOutput, Error> {
    let (payload, context) = event.into_parts();
    let span = info_span!("put_item", request_id = %context.request_id);

    Ok(handle_put_item(storage, payload).instrument(span).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let environment = Environment::from_env();
    environment.init_tracing();

    let dynamodb_client = Arc::new(DynamoDbClient::from_conf(
        environment.dynamodb_client_config().await,
    ));
    let storage = OrderRecordStorage::new(dynamodb_client, environment.table_name());

    info!(table = storage.table_name(), "Starting order record function");

    run(service_fn(|event| function_handler(&storage, event))).await
}
