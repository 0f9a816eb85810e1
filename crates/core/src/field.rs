//! Named validation rules.
//!
//! A [`Field`] pairs a parameter name and an optional default with a [`FieldRule`]. The rule
//! only ever sees non-empty input: the "use the default, else report the value as missing"
//! branch lives once in [`Field::validate`] and is shared by every rule.

use std::fmt;
use std::sync::Arc;

use crate::error::{ParameterError, ParameterResult};
use crate::fields::{AzkabanProjectRule, GitShaRule, KubernetesNameRule};

/// A value-specific validation rule.
pub trait FieldRule: Send + Sync {
    /// Parameter name used when the field is not given an explicit one.
    fn canonical_name(&self) -> &str;

    /// Checks a non-empty raw value.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Invalid`] when the value breaks the rule.
    fn validate_value(&self, value: &str) -> ParameterResult<String>;
}

/// A named rule with an optional default value.
///
/// Fields are declared once per endpoint and shared read-only across requests.
#[derive(Clone)]
pub struct Field {
    name: String,
    default: Option<String>,
    rule: Arc<dyn FieldRule>,
}

impl Field {
    /// Wraps `rule`, naming the field after the rule's canonical name.
    pub fn new(rule: impl FieldRule + 'static) -> Self {
        let rule: Arc<dyn FieldRule> = Arc::new(rule);
        Self {
            name: rule.canonical_name().to_string(),
            default: None,
            rule,
        }
    }

    /// A 40 character lowercase hex Git SHA, named `sha`.
    pub fn git_sha() -> Self {
        Self::new(GitShaRule)
    }

    /// An Azkaban project name, named `azkaban_project`.
    pub fn azkaban_project() -> Self {
        Self::new(AzkabanProjectRule)
    }

    /// A Kubernetes resource name, named `kubernetes_name`.
    pub fn kubernetes_name() -> Self {
        Self::new(KubernetesNameRule)
    }

    /// Overrides the parameter name. An empty name keeps the canonical one.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.is_empty() {
            self.name = name;
        }
        self
    }

    /// Sets the value used when the parameter is absent or empty.
    ///
    /// An empty default is treated as no default.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        let default = default.into();
        self.default = (!default.is_empty()).then_some(default);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Validates a raw value.
    ///
    /// An absent or empty value resolves to the default without consulting the rule. With no
    /// default configured it is reported as missing.
    ///
    /// # Errors
    ///
    /// - [`ParameterError::Missing`] if the value is absent or empty and there is no default.
    /// - [`ParameterError::Invalid`] if the rule rejects the value.
    pub fn validate(&self, value: Option<&str>) -> ParameterResult<String> {
        match (value.filter(|v| !v.is_empty()), &self.default) {
            (Some(value), _) => self.rule.validate_value(value),
            (None, Some(default)) => Ok(default.clone()),
            (None, None) => Err(ParameterError::Missing(format!(
                "The '{}' field must be supplied.",
                self.name
            ))),
        }
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("default", &self.default)
            .field("rule", &self.rule.canonical_name())
            .finish()
    }
}
