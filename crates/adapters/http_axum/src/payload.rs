//! Request body extractor accepting JSON or urlencoded forms.

use axum::Form;
use axum::Json;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use serde_json::{Map, Value};

/// Untyped request payload, handed to the domain for validation.
///
/// - `application/x-www-form-urlencoded` bodies become an object of strings.
/// - A request without `Content-Type` and without a body becomes `{}`.
/// - Anything else is parsed as JSON.
#[derive(Debug)]
pub struct Payload(pub Value);

impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_ascii_lowercase);

        match content_type.as_deref() {
            Some(ct) if ct.starts_with("application/x-www-form-urlencoded") => {
                let Form(fields) = Form::<Vec<(String, String)>>::from_request(req, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                let object: Map<String, Value> = fields
                    .into_iter()
                    .map(|(key, value)| (key, Value::String(value)))
                    .collect();
                Ok(Self(Value::Object(object)))
            }
            None => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                if bytes.is_empty() {
                    Ok(Self(Value::Object(Map::new())))
                } else {
                    Err(StatusCode::UNSUPPORTED_MEDIA_TYPE.into_response())
                }
            }
            Some(_) => {
                let Json(value) = Json::<Value>::from_request(req, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                Ok(Self(value))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde_json::json;

    async fn extract(req: Request) -> Result<Payload, Response> {
        Payload::from_request(req, &()).await
    }

    #[tokio::test]
    async fn should_parse_json_body() {
        let req = Request::builder()
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"name":"Jive","location":"Norwich"}"#))
            .unwrap();
        let Payload(value) = extract(req).await.unwrap();
        assert_eq!(value, json!({"name": "Jive", "location": "Norwich"}));
    }

    #[tokio::test]
    async fn should_parse_urlencoded_body_as_strings() {
        let req = Request::builder()
            .method("POST")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("name=Jive&location=Norwich&cuisine=Mexican"))
            .unwrap();
        let Payload(value) = extract(req).await.unwrap();
        assert_eq!(
            value,
            json!({"name": "Jive", "location": "Norwich", "cuisine": "Mexican"})
        );
    }

    #[tokio::test]
    async fn should_treat_missing_body_as_empty_object() {
        let req = Request::builder().body(Body::empty()).unwrap();
        let Payload(value) = extract(req).await.unwrap();
        assert_eq!(value, json!({}));
    }

    #[tokio::test]
    async fn should_reject_body_without_content_type() {
        let req = Request::builder().body(Body::from("name=Jive")).unwrap();
        let rejection = extract(req).await.unwrap_err();
        assert_eq!(rejection.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn should_reject_malformed_json() {
        let req = Request::builder()
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let rejection = extract(req).await.unwrap_err();
        assert_eq!(rejection.status(), StatusCode::BAD_REQUEST);
    }
}
