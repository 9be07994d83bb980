use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use chrono::Utc;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use order_functions::{
    handlers::{handle_put_object, WriteStatus},
    types::{BillingPeriodSource, Environment},
};
use order_storage::invoice::InvoiceStorage;
use serde_json::value::RawValue;
use tracing::{info, info_span, Instrument};

async fn function_handler(
    storage: &InvoiceStorage,
    period_source: BillingPeriodSource,
    event: LambdaEvent<Box<RawValue>>,
) -> Result<WriteStatus, Error> {
    let (payload, context) = event.into_parts();
    let span = info_span!("put_object", request_id = %context.request_id);

    Ok(handle_put_object(storage, payload, period_source, Utc::now())
        .instrument(span)
        .await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let environment = Environment::from_env();
    environment.init_tracing();

    let s3_client = Arc::new(S3Client::from_conf(environment.s3_client_config().await));
    let storage = InvoiceStorage::new(s3_client, environment.bucket_name());
    let period_source = environment.billing_period_source();

    info!(
        bucket = storage.bucket_name(),
        %period_source,
        "Starting order invoice function"
    );

    run(service_fn(|event| {
        function_handler(&storage, period_source, event)
    }))
    .await
}
