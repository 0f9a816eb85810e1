//! Registration of validated endpoints.
//!
//! An endpoint is declared once with the parameter names its handler takes and the fields that
//! check them:
//!
//! ```ignore
//! let route = EndpointSpec::new(["sha"])
//!     .field(Field::git_sha())
//!     .post(|params: ValidatedParams| {
//!         format!("validated_{}", params.get_str("sha").unwrap_or_default())
//!     });
//! let app: Router = Router::new().route("/deploy", route);
//! ```
//!
//! Each request's form body is extracted with [`FormParams`] and validated before the handler
//! runs. The handler's return value is wrapped as `{"code": 200, "message": ...}`; parameter
//! errors become `{"code": 400, "message": ...}` through [`ApiError`].

use std::sync::Arc;

use axum::{
    routing::{post, MethodRouter},
    Json,
};
use paramguard_core::{Field, ParamMap, ValidatedParams, Validator};
use serde::Serialize;

use crate::extract::FormParams;
use crate::response::{ApiResult, Envelope};

/// Parameter names and fields for one endpoint.
#[derive(Clone, Debug, Default)]
pub struct EndpointSpec {
    params: Vec<String>,
    fields: Vec<Field>,
}

impl EndpointSpec {
    /// Declares the handler's parameter names.
    pub fn new<I, S>(params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            params: params.into_iter().map(Into::into).collect(),
            fields: Vec::new(),
        }
    }

    /// Adds a field; fields are applied in the order they are added.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn validator(self) -> Validator {
        Validator::new(self.params, self.fields)
    }

    /// Builds a POST route that validates the form body before calling `handler`.
    pub fn post<S, H, R>(self, handler: H) -> MethodRouter<S>
    where
        S: Clone + Send + Sync + 'static,
        H: Fn(ValidatedParams) -> R + Send + Sync + 'static,
        R: Serialize + Send + 'static,
    {
        validated_post(self.validator(), handler)
    }
}

/// Builds a POST route that validates the form body with `validator` before calling `handler`.
///
/// The validator is built once here and shared by every request.
pub fn validated_post<S, H, R>(validator: Validator, handler: H) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
    H: Fn(ValidatedParams) -> R + Send + Sync + 'static,
    R: Serialize + Send + 'static,
{
    tracing::info!(
        params = ?validator.expected_params(),
        fields = validator.fields().len(),
        "registering validated endpoint"
    );

    let validator = Arc::new(validator);
    let handler = Arc::new(handler);

    post(move |FormParams(data): FormParams| {
        let validator = Arc::clone(&validator);
        let handler = Arc::clone(&handler);
        async move { dispatch(&validator, handler.as_ref(), data) }
    })
}

/// Validates submitted parameters and calls `handler` with the result.
///
/// # Errors
///
/// Returns an [`ApiError`](crate::ApiError) with status 400 for any parameter error.
pub fn dispatch<H, R>(
    validator: &Validator,
    handler: &H,
    data: ParamMap,
) -> ApiResult<Json<Envelope<R>>>
where
    H: Fn(ValidatedParams) -> R + ?Sized,
{
    let validated = validator.validate(data)?;
    Ok(Json(Envelope::ok(handler(validated))))
}
