use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ParameterError, ParameterResult};
use crate::field::FieldRule;

static KUBERNETES_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9.-]{1,253}$").expect("static regex is valid"));

/// A Kubernetes resource name: 1 to 253 lowercase alphanumerics, `-` or `.`.
#[derive(Clone, Copy, Debug, Default)]
pub struct KubernetesNameRule;

impl FieldRule for KubernetesNameRule {
    fn canonical_name(&self) -> &str {
        "kubernetes_name"
    }

    fn validate_value(&self, value: &str) -> ParameterResult<String> {
        if KUBERNETES_NAME_REGEX.is_match(value) {
            return Ok(value.to_string());
        }

        tracing::debug!(rule = "kubernetes_name", len = value.len(), "rejected value");
        Err(ParameterError::Invalid(format!(
            "The value '{}' must be under 253 characters and consist of lower case alphanumeric characters, -, and .",
            value
        )))
    }
}
