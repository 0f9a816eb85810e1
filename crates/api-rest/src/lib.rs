//! # API REST
//!
//! axum adapter for paramguard.
//!
//! Handles:
//! - extracting url-encoded and multipart form parameters and validating them before a handler runs
//! - the `{code, message}` JSON envelopes and the 400 error boundary
//! - REST configuration and the demo router with its OpenAPI document
//!
//! Uses `paramguard-core` for fields and validation.

#![warn(rust_2018_idioms)]

pub mod config;
pub mod endpoint;
pub mod extract;
pub mod response;
pub mod routes;

pub use config::{bind_addr_from_env_value, ConfigError, RestConfig, DEFAULT_BIND_ADDR};
pub use endpoint::{dispatch, validated_post, EndpointSpec};
pub use extract::FormParams;
pub use response::{ApiError, ApiResult, Envelope, MessageBody};
pub use routes::{app, ApiDoc};
