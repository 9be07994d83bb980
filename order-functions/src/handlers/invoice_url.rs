//! Presigned invoice download URLs

use std::time::Duration;

use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use aws_lambda_events::encodings::Body;
use http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use http::{HeaderMap, HeaderValue, StatusCode};
use order_storage::invoice::{json_object_key, InvoiceStore};
use serde_json::{json, Value};
use tracing::info;

use crate::types::{HandlerError, HandlerResult};

/// Query string parameter naming the invoice to download
pub const OBJECT_KEY_PARAM: &str = "objectKey";

/// Presigns a GET URL for the invoice named by the `objectKey` parameter
///
/// The stored object key is the parameter value with `.json` appended.
/// Returns the URL itself.
///
/// # Errors
///
/// Returns `HandlerError::MissingParameter` if `objectKey` is absent or empty
/// Returns `HandlerError::InvoiceStorage` if presigning fails
pub async fn presign_invoice_url<S: InvoiceStore + ?Sized>(
    store: &S,
    request: &ApiGatewayProxyRequest,
    expires_in: Duration,
) -> HandlerResult<String> {
    let object_key = request
        .query_string_parameters
        .first(OBJECT_KEY_PARAM)
        .filter(|key| !key.is_empty())
        .ok_or(HandlerError::MissingParameter(OBJECT_KEY_PARAM))?;

    let key = json_object_key(object_key);
    info!(%key, expires_in_secs = expires_in.as_secs(), "Presigning invoice URL");

    Ok(store.presign_get(&key, expires_in).await?)
}

/// API Gateway adapter for [`presign_invoice_url`]
///
/// Answers `200` with the URL as a JSON string, `400` for a missing
/// `objectKey` and `500` when presigning fails. Every response carries the
/// CORS headers the browser client needs.
pub async fn handle_invoice_url_request<S: InvoiceStore + ?Sized>(
    store: &S,
    request: ApiGatewayProxyRequest,
    expires_in: Duration,
) -> ApiGatewayProxyResponse {
    match presign_invoice_url(store, &request, expires_in).await {
        Ok(url) => json_response(StatusCode::OK, &Value::String(url)),
        Err(err) => {
            err.log("get_invoice_url");
            if err.is_client_error() {
                json_response(
                    StatusCode::BAD_REQUEST,
                    &json!({ "error": err.to_string() }),
                )
            } else {
                json_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    &json!({ "error": "Failed to generate invoice URL" }),
                )
            }
        }
    }
}

fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type,X-Amz-Date,X-Api-Key"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("OPTIONS,POST"),
    );
    headers
}

fn json_response(status: StatusCode, body: &Value) -> ApiGatewayProxyResponse {
    ApiGatewayProxyResponse {
        status_code: i64::from(status.as_u16()),
        headers: cors_headers(),
        body: Some(Body::Text(body.to_string())),
        ..Default::default()
    }
}
