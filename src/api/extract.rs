//! Request Extractors
//!
//! `ValidJson` wraps axum's `Json` so malformed bodies are reported as
//! validation failures (400) with the usual error body.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::ProductError;

/// JSON body extractor whose rejection is `ProductError::Validation`.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ProductError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(invalid_body(rejection)),
        }
    }
}

fn invalid_body(rejection: JsonRejection) -> ProductError {
    ProductError::Validation(rejection.body_text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateProductRequest;
    use axum::body::Body;

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/products")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_extracts() {
        let ValidJson(req) = ValidJson::<CreateProductRequest>::from_request(
            json_request(r#"{"name":"Smartphone","type":"Electronics"}"#),
            &(),
        )
        .await
        .unwrap();
        assert_eq!(req.name, "Smartphone");
    }

    #[tokio::test]
    async fn test_wrong_field_type_is_validation_error() {
        let result = ValidJson::<CreateProductRequest>::from_request(
            json_request(r#"{"name":5,"type":"x"}"#),
            &(),
        )
        .await;
        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_malformed_json_is_validation_error() {
        let result =
            ValidJson::<CreateProductRequest>::from_request(json_request("not json"), &()).await;
        assert!(matches!(result, Err(ProductError::Validation(_))));
    }
}
