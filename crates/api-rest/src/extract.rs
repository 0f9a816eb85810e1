//! Request parameter extraction.
//!
//! [`FormParams`] reads a request body the way form submissions are read: url-encoded and
//! multipart bodies become a [`ParamMap`] of value lists, anything else becomes an empty map so
//! the validator can report which parameters are missing.

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Form,
};
use paramguard_core::{params_from_pairs, ParamMap};

use crate::response::ApiError;

const URLENCODED: &str = "application/x-www-form-urlencoded";
const MULTIPART: &str = "multipart/form-data";

/// Form parameters grouped by name.
///
/// Multipart file parts are skipped. Requests without a form content type extract as an empty
/// map rather than being rejected.
#[derive(Debug)]
pub struct FormParams(pub ParamMap);

#[async_trait]
impl<S> FromRequest<S> for FormParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(mime_essence)
            .unwrap_or_default();

        if content_type.eq_ignore_ascii_case(URLENCODED) {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|err| ApiError::new(err.status(), err.body_text()))?;
            return Ok(FormParams(params_from_pairs(pairs)));
        }

        if content_type.eq_ignore_ascii_case(MULTIPART) {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|err| ApiError::new(err.status(), err.body_text()))?;
            return read_multipart(multipart).await.map(FormParams);
        }

        tracing::debug!(content_type, "no form body; extracting empty parameters");
        Ok(FormParams(ParamMap::new()))
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<ParamMap, ApiError> {
    let mut pairs = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::new(err.status(), err.body_text()))?
    {
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|err| ApiError::new(err.status(), err.body_text()))?;
        pairs.push((name, value));
    }
    Ok(params_from_pairs(pairs))
}

/// `multipart/form-data; boundary=x` -> `multipart/form-data`
fn mime_essence(value: &str) -> &str {
    value.split(';').next().unwrap_or_default().trim()
}
