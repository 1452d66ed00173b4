use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{response::ErrorResponse, store::StoreError};

#[derive(Debug, Error)]
pub enum AppError {
    /// 404 with a JSON `{ "error": .. }` body.
    #[error("{0}")]
    NotFound(String),

    /// 404 with a plain-text body.
    #[error("{0}")]
    NotFoundText(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{message}")]
    Store {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    /// Wraps a store failure with the fixed message the caller should see.
    pub fn store(message: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::Store { message, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) | AppError::NotFoundText(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Store { message, source } => {
                tracing::error!(error = %source, "{message}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        match self {
            AppError::NotFoundText(text) => (status, text).into_response(),
            other => (status, axum::Json(ErrorResponse::new(other.to_string()))).into_response(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use axum::{body::to_bytes, http::header, response::IntoResponse};

    use super::*;

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn store_error_hides_cause_behind_fixed_message() {
        let err = AppError::store("Ошибка при очистке корзины")(StoreError::Backend(
            "connection reset".into(),
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_string(response).await;
        assert_eq!(body, r#"{"error":"Ошибка при очистке корзины"}"#);
    }

    #[tokio::test]
    async fn not_found_text_is_plain() {
        let response = AppError::NotFoundText("Product not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(body_string(response).await, "Product not found");
    }

    #[tokio::test]
    async fn bad_request_is_json_error() {
        let response = AppError::BadRequest("Товар уже в избранном".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_string(response).await,
            r#"{"error":"Товар уже в избранном"}"#
        );
    }
}
