use std::fmt;

use regex::Regex;

use crate::error::{FieldError, FieldResult, ParameterError, ParameterResult};
use crate::field::FieldRule;

/// A rule backed by a user-supplied regular expression.
///
/// The failure message may contain `{value}`, which is replaced by the rejected input verbatim.
#[derive(Clone, Debug)]
pub struct PatternRule {
    name: String,
    pattern: Regex,
    message: String,
}

impl PatternRule {
    /// Compiles `pattern` for a field called `name`.
    ///
    /// The pattern is used as written; anchor it with `^...$` to match the whole value.
    ///
    /// # Errors
    ///
    /// - [`FieldError::EmptyName`] if `name` is empty.
    /// - [`FieldError::Pattern`] if `pattern` does not compile.
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        message: impl Into<String>,
    ) -> FieldResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(FieldError::EmptyName);
        }
        let pattern = Regex::new(pattern).map_err(|source| FieldError::Pattern {
            name: name.clone(),
            source,
        })?;

        Ok(Self {
            name,
            pattern,
            message: message.into(),
        })
    }
}

impl FieldRule for PatternRule {
    fn canonical_name(&self) -> &str {
        &self.name
    }

    fn validate_value(&self, value: &str) -> ParameterResult<String> {
        if self.pattern.is_match(value) {
            return Ok(value.to_string());
        }

        tracing::debug!(rule = %self.name, "rejected value");
        Err(ParameterError::Invalid(self.message.replace("{value}", value)))
    }
}

/// A rule backed by a closure.
pub struct FnRule<F> {
    name: String,
    check: F,
}

impl<F> FnRule<F>
where
    F: Fn(&str) -> ParameterResult<String> + Send + Sync,
{
    /// # Errors
    ///
    /// Returns [`FieldError::EmptyName`] if `name` is empty.
    pub fn new(name: impl Into<String>, check: F) -> FieldResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(FieldError::EmptyName);
        }
        Ok(Self { name, check })
    }
}

impl<F> FieldRule for FnRule<F>
where
    F: Fn(&str) -> ParameterResult<String> + Send + Sync,
{
    fn canonical_name(&self) -> &str {
        &self.name
    }

    fn validate_value(&self, value: &str) -> ParameterResult<String> {
        (self.check)(value)
    }
}

impl<F> fmt::Debug for FnRule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Field;

    #[test]
    fn test_pattern_rule_interpolates_value() {
        let rule = PatternRule::new("team", r"^[a-z]+$", "The team '{value}' is not known.")
            .expect("pattern compiles");
        let field = Field::new(rule);

        assert_eq!(field.name(), "team");
        assert_eq!(field.validate(Some("data")).as_deref(), Ok("data"));
        assert_eq!(
            field.validate(Some("Data1")),
            Err(ParameterError::Invalid(
                "The team 'Data1' is not known.".into()
            ))
        );
    }

    #[test]
    fn test_pattern_rule_rejects_bad_pattern() {
        let err = PatternRule::new("team", r"^[a-z+$", "bad").expect_err("should not compile");
        assert!(matches!(err, FieldError::Pattern { ref name, .. } if name == "team"));
    }

    #[test]
    fn test_rules_reject_empty_name() {
        assert!(matches!(
            PatternRule::new("", r"^a$", "bad"),
            Err(FieldError::EmptyName)
        ));
        assert!(matches!(
            FnRule::new("", |v: &str| Ok(v.to_string())),
            Err(FieldError::EmptyName)
        ));
    }

    #[test]
    fn test_fn_rule_delegates_to_closure() {
        let rule = FnRule::new("field", |value: &str| {
            if value == "value" {
                Ok(value.to_string())
            } else {
                Err(ParameterError::Invalid("The value is not valid.".into()))
            }
        })
        .expect("name is set");
        let field = Field::new(rule).with_default("value");

        assert_eq!(field.validate(Some("value")).as_deref(), Ok("value"));
        assert_eq!(field.validate(None).as_deref(), Ok("value"));
        assert_eq!(
            field.validate(Some("other")),
            Err(ParameterError::Invalid("The value is not valid.".into()))
        );
    }
}
