//! # paramguard core
//!
//! Validation of textual request parameters for endpoint handlers.
//!
//! A handler declares the parameter names it takes and the [`Field`]s that check them. For each
//! request a [`Validator`]:
//! - runs every field over the raw data, filling in defaults,
//! - collapses single-element value lists to scalars,
//! - checks that the resulting names are exactly the handler's parameters.
//!
//! Failures are reported as [`ParameterError`]s whose messages are safe to return to clients.
//!
//! **No HTTP concerns**: extracting form data and rendering responses belong in `api-rest`.

pub mod error;
pub mod field;
pub mod fields;
pub mod params;
pub mod validator;

pub use error::{FieldError, FieldResult, ParameterError, ParameterResult};
pub use field::{Field, FieldRule};
pub use fields::{AzkabanProjectRule, FnRule, GitShaRule, KubernetesNameRule, PatternRule};
pub use params::{params_from_pairs, ParamMap, ParamValue, ValidatedParams};
pub use validator::Validator;
