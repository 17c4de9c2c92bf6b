//! Error types for dialect lookup and resource construction.

use thiserror::Error;

/// A dialect identifier that is not one of the known meta-schema URIs.
///
/// Custom dialects are not registered globally; pass their specification as
/// the default to [`specification_with`](crate::specification_with) instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dialect: {uri}")]
pub struct UnknownDialect {
    /// The unrecognized meta-schema URI, exactly as given.
    pub uri: String,
}

impl UnknownDialect {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }
}

/// Errors while building a [`Resource`](crate::Resource) from raw contents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    #[error(transparent)]
    UnknownDialect(#[from] UnknownDialect),

    #[error("cannot determine specification: contents are {actual} with no $schema and no default")]
    CannotDetermineSpecification { actual: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_dialect_display() {
        let err = UnknownDialect::new("urn:example:dialect");
        assert_eq!(err.to_string(), "unknown dialect: urn:example:dialect");
    }

    #[test]
    fn resource_error_wraps_unknown_dialect() {
        let err: ResourceError = UnknownDialect::new("urn:x").into();
        assert_eq!(err.to_string(), "unknown dialect: urn:x");
        assert_eq!(
            err,
            ResourceError::UnknownDialect(UnknownDialect {
                uri: "urn:x".into()
            })
        );
    }

    #[test]
    fn cannot_determine_display() {
        let err = ResourceError::CannotDetermineSpecification { actual: "object" };
        assert_eq!(
            err.to_string(),
            "cannot determine specification: contents are object with no $schema and no default"
        );
    }
}
