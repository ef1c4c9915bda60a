use axum::{
    body::{Bytes, to_bytes},
    extract::Request,
    http::{HeaderMap, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::AppError;

const MAX_ERROR_BODY_BYTES: usize = 16 * 1024;

/// Rewrites plain-text error responses (extractor rejections, 405s) into the
/// JSON error envelope. JSON and HTML responses pass through untouched, which
/// keeps the 404 page intact.
pub async fn json_error_middleware(req: Request, next: Next) -> Response {
    let response = next.run(req).await;
    let status = response.status();

    if !status.is_client_error() && !status.is_server_error() {
        return response;
    }

    if has_content_type(&response, &["application/json", "+json", "text/html"]) {
        return response;
    }

    let (parts, body) = response.into_parts();
    let message = match to_bytes(body, MAX_ERROR_BODY_BYTES).await {
        Ok(bytes) => body_bytes_to_message(status, bytes),
        Err(_) => default_message(status),
    };

    let mut new_response = AppError::from_status(status, message).into_response();
    copy_headers(&parts.headers, &mut new_response);
    new_response
}

fn has_content_type(response: &Response, needles: &[&str]) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            let value = value.to_ascii_lowercase();
            needles.iter().any(|needle| value.contains(needle))
        })
        .unwrap_or(false)
}

fn body_bytes_to_message(status: StatusCode, bytes: Bytes) -> String {
    let message = String::from_utf8_lossy(&bytes).trim().to_string();
    if message.is_empty() {
        return default_message(status);
    }
    message
}

fn default_message(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Request failed")
        .to_string()
}

fn copy_headers(src: &HeaderMap, dest: &mut Response) {
    for (name, value) in src {
        if name == header::CONTENT_TYPE || name == header::CONTENT_LENGTH {
            continue;
        }
        dest.headers_mut().insert(name.clone(), value.clone());
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::{self, Body},
        http::{Request, StatusCode},
        middleware,
        response::{Html, IntoResponse},
        routing::get,
    };
    use tower::ServiceExt;

    use super::json_error_middleware;

    fn app() -> Router {
        Router::new()
            .route(
                "/text",
                get(|| async { (StatusCode::BAD_REQUEST, "id must be an integer") }),
            )
            .route(
                "/empty",
                get(|| async { StatusCode::METHOD_NOT_ALLOWED.into_response() }),
            )
            .route(
                "/html",
                get(|| async { (StatusCode::NOT_FOUND, Html("<h1>missing</h1>")) }),
            )
            .layer(middleware::from_fn(json_error_middleware))
    }

    async fn call(uri: &str) -> (StatusCode, String, Vec<u8>) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .expect("request should succeed");
        let status = response.status();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should read");
        (status, content_type, bytes.to_vec())
    }

    #[tokio::test]
    async fn plain_text_errors_become_validation_envelopes() {
        let (status, _, bytes) = call("/text").await;
        let json: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["kind"], "validation_error");
        assert_eq!(json["error"]["message"], "id must be an integer");
    }

    #[tokio::test]
    async fn empty_bodies_use_the_canonical_reason() {
        let (status, _, bytes) = call("/empty").await;
        let json: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(json["error"]["kind"], "request_rejected");
        assert_eq!(json["error"]["message"], "Method Not Allowed");
    }

    #[tokio::test]
    async fn html_errors_pass_through() {
        let (status, content_type, bytes) = call("/html").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(content_type.starts_with("text/html"));
        assert_eq!(bytes, b"<h1>missing</h1>");
    }
}
