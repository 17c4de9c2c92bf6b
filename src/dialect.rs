//! The catalog of known dialects and lookup by meta-schema URI.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownDialect;
use crate::specification::{
    Specification, DRAFT201909, DRAFT202012, DRAFT3, DRAFT4, DRAFT6, DRAFT7,
};

/// A JSON Schema dialect known to this crate.
///
/// Serializes as its meta-schema URI, so it can be used directly in
/// configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dialect {
    #[default]
    #[serde(rename = "https://json-schema.org/draft/2020-12/schema")]
    Draft202012,
    #[serde(rename = "https://json-schema.org/draft/2019-09/schema")]
    Draft201909,
    #[serde(rename = "http://json-schema.org/draft-07/schema#")]
    Draft7,
    #[serde(rename = "http://json-schema.org/draft-06/schema#")]
    Draft6,
    #[serde(rename = "http://json-schema.org/draft-04/schema#")]
    Draft4,
    #[serde(rename = "http://json-schema.org/draft-03/schema#")]
    Draft3,
}

impl Dialect {
    /// All known dialects, newest first.
    pub const ALL: [Dialect; 6] = [
        Dialect::Draft202012,
        Dialect::Draft201909,
        Dialect::Draft7,
        Dialect::Draft6,
        Dialect::Draft4,
        Dialect::Draft3,
    ];

    /// The canonical meta-schema URI, scheme and trailing `#` as published.
    pub fn uri(&self) -> &'static str {
        match self {
            Dialect::Draft202012 => "https://json-schema.org/draft/2020-12/schema",
            Dialect::Draft201909 => "https://json-schema.org/draft/2019-09/schema",
            Dialect::Draft7 => "http://json-schema.org/draft-07/schema#",
            Dialect::Draft6 => "http://json-schema.org/draft-06/schema#",
            Dialect::Draft4 => "http://json-schema.org/draft-04/schema#",
            Dialect::Draft3 => "http://json-schema.org/draft-03/schema#",
        }
    }

    pub fn specification(&self) -> &'static Specification {
        match self {
            Dialect::Draft202012 => &DRAFT202012,
            Dialect::Draft201909 => &DRAFT201909,
            Dialect::Draft7 => &DRAFT7,
            Dialect::Draft6 => &DRAFT6,
            Dialect::Draft4 => &DRAFT4,
            Dialect::Draft3 => &DRAFT3,
        }
    }

    /// Exact, byte-for-byte lookup; no normalization of scheme or `#`.
    pub fn from_uri(uri: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|dialect| dialect.uri() == uri)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri())
    }
}

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_uri(s).ok_or_else(|| UnknownDialect::new(s))
    }
}

/// Retrieve the specification registered under `dialect_id`.
///
/// Falls back to `default` when the URI is unknown. Callers that want
/// forgiving matching (trailing `#`, `https` vs `http`) normalize first.
///
/// # Errors
///
/// Returns `UnknownDialect` if `dialect_id` is not a known meta-schema URI
/// and no default was given.
pub fn specification_with(
    dialect_id: &str,
    default: Option<&'static Specification>,
) -> Result<&'static Specification, UnknownDialect> {
    if let Some(dialect) = Dialect::from_uri(dialect_id) {
        return Ok(dialect.specification());
    }

    match default {
        Some(specification) => {
            tracing::debug!(
                dialect = dialect_id,
                fallback = specification.name(),
                "unknown dialect, using default specification"
            );
            Ok(specification)
        }
        None => Err(UnknownDialect::new(dialect_id)),
    }
}
