use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ParameterError, ParameterResult};
use crate::field::FieldRule;

static GIT_SHA_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-f]{40}$").expect("static regex is valid"));

/// A full Git commit SHA: exactly 40 lowercase hex characters.
#[derive(Clone, Copy, Debug, Default)]
pub struct GitShaRule;

impl FieldRule for GitShaRule {
    fn canonical_name(&self) -> &str {
        "sha"
    }

    fn validate_value(&self, value: &str) -> ParameterResult<String> {
        if GIT_SHA_REGEX.is_match(value) {
            return Ok(value.to_string());
        }

        tracing::debug!(rule = "git_sha", "rejected value");
        Err(ParameterError::Invalid(format!(
            "The Git SHA '{}' is malformed.",
            value
        )))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Field, ParameterError};

    fn malformed(value: &str) -> ParameterError {
        ParameterError::Invalid(format!("The Git SHA '{}' is malformed.", value))
    }

    #[test]
    fn test_accepts_mixed_hex() {
        let sha = "1c81bb510335c461fa4d31f8245507ccfb7c7ae3";
        assert_eq!(Field::git_sha().validate(Some(sha)).as_deref(), Ok(sha));
    }

    #[test]
    fn test_accepts_letters_only_and_digits_only() {
        for sha in [
            "acbdfeaccbfdfbebfdacbefdbdaceacdbfdbacdb",
            "2398052789243758923768904532768590420704",
        ] {
            assert_eq!(Field::git_sha().validate(Some(sha)).as_deref(), Ok(sha));
        }
    }

    #[test]
    fn test_rejects_wrong_length() {
        for sha in [
            "1c81bb510335c461fa4d31f8245507ccfb7c7ae",
            "1c81bb510335c461fa4d31f8245507ccfb7c7ae34",
        ] {
            assert_eq!(Field::git_sha().validate(Some(sha)), Err(malformed(sha)));
        }
    }

    #[test]
    fn test_rejects_branch_name() {
        assert_eq!(
            Field::git_sha().validate(Some("master")),
            Err(malformed("master"))
        );
    }

    #[test]
    fn test_rejects_non_hex_and_uppercase() {
        for sha in [
            "1g81bb510335c461fa4d31f8245507ccfb7c7ae3",
            "1C81BB510335C461FA4D31F8245507CCFB7C7AE3",
            " 1c81bb510335c461fa4d31f8245507ccfb7c7ae3",
        ] {
            assert_eq!(Field::git_sha().validate(Some(sha)), Err(malformed(sha)));
        }
    }
}
