use std::sync::Arc;
use std::time::Duration;

use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use aws_sdk_s3::Client as S3Client;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use order_functions::{handlers::handle_invoice_url_request, types::Environment};
use order_storage::invoice::InvoiceStorage;
use tracing::{info, info_span, Instrument};

async fn function_handler(
    storage: &InvoiceStorage,
    expires_in: Duration,
    event: LambdaEvent<ApiGatewayProxyRequest>,
) -> Result<ApiGatewayProxyResponse, Error> {
    let (request, context) = event.into_parts();
    let span = info_span!("get_invoice_url", request_id = %context.request_id);

    Ok(handle_invoice_url_request(storage, request, expires_in)
        .instrument(span)
        .await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let environment = Environment::from_env();
    environment.init_tracing();

    let s3_client = Arc::new(S3Client::from_conf(environment.s3_client_config().await));
    let storage = InvoiceStorage::new(s3_client, environment.bucket_name());
    let expires_in = environment.presigned_url_expiry();

    info!(
        bucket = storage.bucket_name(),
        expires_in_secs = expires_in.as_secs(),
        "Starting invoice URL function"
    );

    run(service_fn(|event| {
        function_handler(&storage, expires_in, event)
    }))
    .await
}
