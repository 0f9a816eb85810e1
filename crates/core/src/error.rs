/// Errors raised while validating request parameters.
///
/// The `Display` output of every variant is exactly the carried message, so it
/// can be forwarded to clients unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParameterError {
    /// A value was supplied but failed the field's rule.
    #[error("{0}")]
    Invalid(String),
    /// A field had no value and no default.
    #[error("{0}")]
    Missing(String),
    /// The validated keys do not exactly match the handler's declared parameters.
    #[error("{0}")]
    Unrecognized(String),
}

impl ParameterError {
    /// Name of the error kind, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            ParameterError::Invalid(_) => "InvalidParameterException",
            ParameterError::Missing(_) => "MissingParameterException",
            ParameterError::Unrecognized(_) => "UnrecognizedParameterException",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ParameterError::Invalid(msg)
            | ParameterError::Missing(msg)
            | ParameterError::Unrecognized(msg) => msg,
        }
    }
}

pub type ParameterResult<T> = std::result::Result<T, ParameterError>;

/// Errors raised while declaring fields, outside the request path.
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    #[error("invalid pattern for field '{name}': {source}")]
    Pattern {
        name: String,
        #[source]
        source: regex::Error,
    },
    #[error("field name cannot be empty")]
    EmptyName,
}

pub type FieldResult<T> = std::result::Result<T, FieldError>;
