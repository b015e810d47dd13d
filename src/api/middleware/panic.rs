//! Turns handler panics into the generic 500 error response.

use std::any::Any;

use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::CatchPanicLayer;

use crate::error::AppError;

type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Catches panics below this layer and answers with [`AppError::unexpected`].
///
/// The panic message is logged; the client only sees the generic body.
pub fn layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(panic_response as PanicHandler)
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");

    tracing::error!(panic = detail, "Handler panicked");
    AppError::unexpected().into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, http::StatusCode, routing::get};
    use axum_test::TestServer;
    use serde_json::Value;

    async fn exploding_handler() -> &'static str {
        panic!("boom")
    }

    #[tokio::test]
    async fn test_panic_renders_generic_error() {
        let app = Router::new()
            .route("/explode", get(exploding_handler))
            .layer(layer());
        let server = TestServer::new(app).unwrap();

        let response = server.get("/explode").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let json = response.json::<Value>();
        assert_eq!(json["error"]["code"], "internal_error");
        assert_eq!(
            json["error"]["message"],
            "Internal Server Error. Please Try Again Later."
        );
    }
}
