//! Domain errors for the JSLy site configuration.

use thiserror::Error;

/// Errors raised while building the site configuration.
///
/// Every failure is fatal at startup: the hosting application should refuse
/// to run rather than render with a partially valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A field failed to parse or broke a validation rule.
    #[error("invalid configuration: {field}: {reason}")]
    InvalidConfiguration {
        /// Dotted path of the offending field
        field: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl ConfigError {
    /// Build an `InvalidConfiguration` error for a dotted field path.
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Dotted path of the offending field, e.g. `theme.radius`.
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidConfiguration { field, .. } => field,
        }
    }

    /// Human-readable reason for the rejection.
    pub fn reason(&self) -> &str {
        match self {
            Self::InvalidConfiguration { reason, .. } => reason,
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        // The loader extracts from inside the `jsly` section; drop that prefix
        // so paths line up with the ones produced by validation.
        let path: Vec<&str> = err
            .path
            .iter()
            .map(String::as_str)
            .skip_while(|segment| *segment == "jsly")
            .collect();
        let field = if path.is_empty() {
            "jsly".to_string()
        } else {
            path.join(".")
        };
        Self::invalid(field, err.kind.to_string())
    }
}

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_field_and_reason() {
        let err = ConfigError::invalid("theme.radius", "out of range [0,1]");
        assert_eq!(
            err.to_string(),
            "invalid configuration: theme.radius: out of range [0,1]"
        );
        assert_eq!(err.field(), "theme.radius");
        assert_eq!(err.reason(), "out of range [0,1]");
    }

    #[test]
    fn test_from_figment_error_strips_section_prefix() {
        let mut err = figment::Error::from("bad value".to_string());
        err.path = vec!["jsly".into(), "theme".into(), "color".into()];

        let converted = ConfigError::from(err);
        assert_eq!(converted.field(), "theme.color");
        assert!(converted.reason().contains("bad value"));
    }

    #[test]
    fn test_from_figment_error_without_path() {
        let err = figment::Error::from("missing".to_string());
        let converted = ConfigError::from(err);
        assert_eq!(converted.field(), "jsly");
    }
}
