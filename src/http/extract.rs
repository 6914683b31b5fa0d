use async_trait::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request};
use axum::response::{IntoResponse, Response};
use axum::Form;
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use serde::de::DeserializeOwned;

/// Why a request body could not be turned into the expected shape. Carries
/// the parser's own message.
#[derive(Debug)]
pub struct BodyRejection(pub String);

impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response { (StatusCode::BAD_REQUEST, self.0).into_response() }
}

/// Reads the body as JSON when `Content-Type` mentions `application/json`,
/// as a form when it is urlencoded or multipart, and as an empty object
/// otherwise. Multipart file parts are skipped.
#[derive(Debug)]
pub struct JsonOrForm<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonOrForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.contains("application/json") {
            return read_json(req, state).await.map(Self);
        }
        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| BodyRejection(e.body_text()))?;
            return Ok(Self(value));
        }
        let mut fields = serde_json::Map::new();
        if content_type.starts_with("multipart/form-data") {
            let mut multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| BodyRejection(e.body_text()))?;
            while let Some(field) = multipart.next_field().await.map_err(|e| BodyRejection(e.body_text()))? {
                let Some(name) = field.name().map(str::to_owned) else { continue };
                if field.file_name().is_some() {
                    continue;
                }
                let text = field.text().await.map_err(|e| BodyRejection(e.body_text()))?;
                fields.insert(name, serde_json::Value::String(text));
            }
        }
        serde_json::from_value(serde_json::Value::Object(fields))
            .map(Self)
            .map_err(|e| BodyRejection(e.to_string()))
    }
}

/// Parses the body as JSON whatever the declared content type.
#[derive(Debug)]
pub struct LenientJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        read_json(req, state).await.map(Self)
    }
}

async fn read_json<T, S>(req: Request, state: &S) -> Result<T, BodyRejection>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    let bytes = Bytes::from_request(req, state)
        .await
        .map_err(|e| BodyRejection(e.body_text()))?;
    serde_json::from_slice(&bytes).map_err(|e| BodyRejection(e.to_string()))
}
