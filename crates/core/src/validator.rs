//! Applies fields to raw request data and reconciles the result with a handler's parameters.

use std::collections::HashSet;

use crate::error::{ParameterError, ParameterResult};
use crate::field::Field;
use crate::params::{ParamMap, ParamValue, ValidatedParams};

/// Validates request parameters for a single handler.
///
/// A validator is built once per endpoint and is immutable afterwards, so it can be shared
/// across concurrent requests behind an `Arc`.
#[derive(Clone, Debug)]
pub struct Validator {
    fields: Vec<Field>,
    expected_params: Vec<String>,
}

impl Validator {
    /// Creates a validator for a handler that takes `expected_params`, applying `fields` in
    /// order.
    pub fn new<I, S>(expected_params: I, fields: Vec<Field>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields,
            expected_params: expected_params.into_iter().map(Into::into).collect(),
        }
    }

    /// The handler's parameter names, in declaration order.
    pub fn expected_params(&self) -> &[String] {
        &self.expected_params
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Runs every field over `data` and delists the result.
    ///
    /// For each field:
    /// - if its name is present, the sole value is passed through [`Field::validate`] (an empty
    ///   list resolves to the default or is reported missing there);
    /// - if its name is absent and it has a default, the default is inserted directly;
    /// - otherwise the data is left alone.
    ///
    /// Names without a matching field pass through unchecked. The first failing field stops
    /// processing.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParameterError`] raised by a field, or
    /// [`ParameterError::Invalid`] if a field was supplied more than once.
    pub fn apply(&self, mut data: ParamMap) -> ParameterResult<ValidatedParams> {
        for field in &self.fields {
            let validated = match data.get(field.name()) {
                Some(value) => field.validate(sole_value(field, value)?)?,
                None => match field.default_value() {
                    Some(default) => default.to_string(),
                    None => continue,
                },
            };
            data.insert(field.name(), validated);
        }

        Ok(Self::delist(data))
    }

    /// Collapses every one-element list in `data` to its sole value.
    pub fn delist(data: ParamMap) -> ParamMap {
        tracing::trace!(params = data.len(), "delisting parameters");
        data.delist()
    }

    /// Applies the fields, then checks that the resulting names are exactly the expected ones.
    ///
    /// Order and duplicates are ignored; extra and missing names both fail.
    ///
    /// # Errors
    ///
    /// - Any error from [`Validator::apply`].
    /// - [`ParameterError::Unrecognized`] if the key sets differ.
    pub fn validate(&self, data: ParamMap) -> ParameterResult<ValidatedParams> {
        let validated = self.apply(data)?;

        if !self.matches_expected(&validated) {
            tracing::debug!(
                supplied = validated.len(),
                expected = self.expected_params.len(),
                "parameter names do not match handler"
            );
            return Err(ParameterError::Unrecognized(
                self.format_error_message(&validated),
            ));
        }

        Ok(validated)
    }

    fn matches_expected(&self, data: &ParamMap) -> bool {
        let supplied: HashSet<&str> = data.keys().collect();
        let expected: HashSet<&str> = self.expected_params.iter().map(String::as_str).collect();
        supplied == expected
    }

    fn format_error_message(&self, data: &ParamMap) -> String {
        let supplied = data.keys().collect::<Vec<_>>().join(", ");
        let expected = self.expected_params.join(", ");

        format!(
            "Unrecognized keyword arguments: [{}]. Expected keyword arguments: [{}].",
            supplied, expected
        )
    }
}

fn sole_value<'a>(field: &Field, value: &'a ParamValue) -> ParameterResult<Option<&'a str>> {
    match value {
        ParamValue::Single(value) => Ok(Some(value.as_str())),
        ParamValue::List(values) => match values.as_slice() {
            [] => Ok(None),
            [value] => Ok(Some(value.as_str())),
            _ => Err(ParameterError::Invalid(format!(
                "The '{}' field must be supplied exactly once.",
                field.name()
            ))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FnRule;

    fn field() -> Field {
        Field::new(
            FnRule::new("field", |value: &str| {
                if value == "value" {
                    Ok(value.to_string())
                } else {
                    Err(ParameterError::Invalid("The value is not valid.".into()))
                }
            })
            .expect("name is set"),
        )
    }

    fn data<const N: usize>(entries: [(&str, ParamValue); N]) -> ParamMap {
        entries.into_iter().collect()
    }

    fn list(values: &[&str]) -> ParamValue {
        ParamValue::List(values.iter().map(|v| v.to_string()).collect())
    }

    #[test]
    fn test_validate_valid_field() {
        let actual = Validator::new(["field"], vec![field()])
            .validate(data([("field", list(&["value"]))]))
            .expect("should validate");

        assert_eq!(actual, data([("field", "value".into())]));
    }

    #[test]
    fn test_validate_passes_through_unfielded_params() {
        let actual = Validator::new(["field", "no_validate_field"], vec![field()])
            .validate(data([
                ("field", list(&["value"])),
                ("no_validate_field", list(&["no_validate_value"])),
            ]))
            .expect("should validate");

        assert_eq!(
            actual,
            data([
                ("field", "value".into()),
                ("no_validate_field", "no_validate_value".into()),
            ])
        );
    }

    #[test]
    fn test_validate_empty_list_uses_default() {
        let actual = Validator::new(["field"], vec![field().with_default("default_value")])
            .validate(data([("field", list(&[]))]))
            .expect("should validate");

        assert_eq!(actual, data([("field", "default_value".into())]));
    }

    #[test]
    fn test_apply_empty_list_without_default_is_missing() {
        let err = Validator::new(["field"], vec![field()])
            .apply(data([("field", list(&[]))]))
            .expect_err("should be missing");

        assert_eq!(
            err,
            ParameterError::Missing("The 'field' field must be supplied.".into())
        );
    }

    #[test]
    fn test_apply_absent_field_gets_default_without_rule() {
        let validator = Validator::new(
            ["field"],
            vec![Field::git_sha().with_name("field").with_default("HEAD")],
        );

        let actual = validator.apply(ParamMap::new()).expect("should apply");

        assert_eq!(actual, data([("field", "HEAD".into())]));
    }

    #[test]
    fn test_apply_absent_field_without_default_is_untouched() {
        let actual = Validator::new(["field"], vec![field()])
            .apply(data([("other", list(&["x"]))]))
            .expect("should apply");

        assert_eq!(actual, data([("other", "x".into())]));
    }

    #[test]
    fn test_validate_without_fields_only_delists() {
        let actual = Validator::new(["field"], Vec::new())
            .validate(data([("field", list(&["value"]))]))
            .expect("should validate");

        assert_eq!(actual, data([("field", "value".into())]));
    }

    #[test]
    fn test_apply_rejects_repeated_field() {
        let err = Validator::new(["field"], vec![field()])
            .apply(data([("field", list(&["value", "value"]))]))
            .expect_err("should reject");

        assert_eq!(
            err,
            ParameterError::Invalid("The 'field' field must be supplied exactly once.".into())
        );
    }

    #[test]
    fn test_apply_keeps_multi_value_lists_without_field() {
        let actual = Validator::new(Vec::<String>::new(), Vec::new())
            .apply(data([("tags", list(&["a", "b"]))]))
            .expect("should apply");

        assert_eq!(actual.get("tags"), Some(&list(&["a", "b"])));
    }

    #[test]
    fn test_apply_stops_at_first_failing_field() {
        let validator = Validator::new(
            ["field", "sha"],
            vec![field(), Field::git_sha().with_default("unused")],
        );

        let err = validator
            .apply(data([("field", list(&["bad"]))]))
            .expect_err("should fail");

        assert_eq!(err, ParameterError::Invalid("The value is not valid.".into()));
    }

    #[test]
    fn test_delist_handles_all_shapes() {
        assert_eq!(
            Validator::delist(data([("field", list(&["value"]))])),
            data([("field", "value".into())])
        );
        assert_eq!(
            Validator::delist(data([("field", "value".into())])),
            data([("field", "value".into())])
        );
        assert_eq!(Validator::delist(ParamMap::new()), ParamMap::new());
    }

    #[test]
    fn test_expected_params_keep_declaration_order() {
        let validator = Validator::new(["field", "no_validate_field"], Vec::new());
        assert_eq!(validator.expected_params(), ["field", "no_validate_field"]);
    }

    #[test]
    fn test_validate_rejects_extra_param() {
        let err = Validator::new(["field"], vec![field()])
            .validate(data([
                ("field", list(&["value"])),
                ("extra_field", list(&["extra_value"])),
            ]))
            .expect_err("should reject");

        assert_eq!(
            err,
            ParameterError::Unrecognized(
                "Unrecognized keyword arguments: [field, extra_field]. Expected keyword arguments: [field].".into()
            )
        );
    }

    #[test]
    fn test_validate_rejects_no_params() {
        let err = Validator::new(["field"], vec![field()])
            .validate(ParamMap::new())
            .expect_err("should reject");

        assert_eq!(
            err.to_string(),
            "Unrecognized keyword arguments: []. Expected keyword arguments: [field]."
        );
    }

    #[test]
    fn test_defaulted_field_must_be_declared() {
        let validator = Validator::new(["sha"], vec![
            Field::git_sha(),
            Field::kubernetes_name().with_default("default"),
        ]);

        let err = validator
            .validate(data([(
                "sha",
                list(&["ee81358f199c0ea27d9e8960f32524c2f14331a0"]),
            )]))
            .expect_err("defaulted field is not a handler parameter");

        assert_eq!(
            err.to_string(),
            "Unrecognized keyword arguments: [sha, kubernetes_name]. Expected keyword arguments: [sha]."
        );
    }

    #[test]
    fn test_set_comparison_ignores_order_and_duplicates() {
        let validator = Validator::new(["b", "a", "a"], Vec::new());
        let actual = validator
            .validate(data([("a", "1".into()), ("b", "2".into())]))
            .expect("same set of names");

        assert_eq!(actual.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
