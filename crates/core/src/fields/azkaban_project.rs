use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ParameterError, ParameterResult};
use crate::field::FieldRule;

// `/` is outside the character class, so names containing `//` never match.
static PROJECT_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").expect("static regex is valid"));

const PROJECT_NAME_MESSAGE: &str =
    "Project names must start with a letter, followed by any number of letters, digits, '-' or '_'.";

/// An Azkaban project name: a letter followed by letters, digits, `-` or `_`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AzkabanProjectRule;

impl FieldRule for AzkabanProjectRule {
    fn canonical_name(&self) -> &str {
        "azkaban_project"
    }

    fn validate_value(&self, value: &str) -> ParameterResult<String> {
        if PROJECT_NAME_REGEX.is_match(value) {
            return Ok(value.to_string());
        }

        tracing::debug!(rule = "azkaban_project", "rejected value");
        Err(ParameterError::Invalid(PROJECT_NAME_MESSAGE.to_string()))
    }
}
