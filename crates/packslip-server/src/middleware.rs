use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use uuid::Uuid;

/// Header carrying the request ID, inbound and outbound.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID for the in-flight request, available as an extension to
/// every handler.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Tags each request with an ID and echoes it on the response.
///
/// An inbound `x-request-id` header is honored so callers can correlate
/// their own traces; otherwise a fresh UUID v4 is minted. Handlers read
/// the ID from the [`RequestId`] extension to stamp response metadata.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    req.extensions_mut().insert(RequestId(id.clone()));

    let mut res = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    res
}
