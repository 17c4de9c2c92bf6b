//! Specification records, one per supported JSON Schema dialect.

use std::fmt;

use crate::extract::{subresources_of, AnchorsIn, IdOf, SubresourcesOf};
use crate::resource::{Anchor, Resource};
use crate::types::Schema;

/// How one dialect identifies, nests and anchors schemas.
///
/// Declare additional dialects as `static` items with
/// [`Specification::new`]; lookup only needs a `&'static Specification`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Specification {
    name: &'static str,
    id_of: IdOf,
    subresources_of: SubresourcesOf,
    anchors_in: AnchorsIn,
}

impl Specification {
    pub const fn new(
        name: &'static str,
        id_of: IdOf,
        subresources_of: SubresourcesOf,
        anchors_in: AnchorsIn,
    ) -> Self {
        Self {
            name,
            id_of,
            subresources_of,
            anchors_in,
        }
    }

    /// Human-readable dialect label, e.g. `"draft-07"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The node's declared canonical URI, if any.
    pub fn id_of<'a>(&self, contents: Schema<'a>) -> Option<&'a str> {
        self.id_of.id_of(contents)
    }

    /// Schemas embedded directly in `contents`.
    ///
    /// Callers walking a document recurse into each result themselves.
    pub fn subresources_of<'a>(&self, contents: Schema<'a>) -> Vec<Schema<'a>> {
        self.subresources_of.subresources_of(contents)
    }

    /// Anchors declared directly on `contents`.
    pub fn anchors_in<'a>(&'static self, contents: Schema<'a>) -> Vec<Anchor<'a>> {
        self.anchors_in.anchors_in(self, contents)
    }

    /// Wrap `contents` as a resource interpreted by this specification.
    pub fn create_resource<'a>(&'static self, contents: Schema<'a>) -> Resource<'a> {
        Resource::new(contents, self)
    }
}

impl fmt::Display for Specification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

const CONDITIONAL_IN_VALUE: &[&str] = &["additionalProperties", "if", "then", "else", "not"];
const COMBINATORS: &[&str] = &["allOf", "anyOf", "oneOf"];
const LEGACY_SUBVALUES: &[&str] = &["definitions", "properties"];

/// JSON Schema 2020-12.
///
/// Finds no sub-schemas and no anchors; only `$id` is read.
pub static DRAFT202012: Specification = Specification::new(
    "draft2020-12",
    IdOf::DollarId,
    SubresourcesOf::NONE,
    AnchorsIn::Disabled,
);

/// JSON Schema 2019-09.
pub static DRAFT201909: Specification = Specification::new(
    "draft2019-09",
    IdOf::DollarId,
    subresources_of(CONDITIONAL_IN_VALUE, COMBINATORS, &["$defs", "properties"]),
    AnchorsIn::DollarAnchor,
);

/// JSON Schema draft-07.
pub static DRAFT7: Specification = Specification::new(
    "draft-07",
    IdOf::LegacyDollarId,
    subresources_of(CONDITIONAL_IN_VALUE, COMBINATORS, LEGACY_SUBVALUES),
    AnchorsIn::LegacyDollarId,
);

/// JSON Schema draft-06.
pub static DRAFT6: Specification = Specification::new(
    "draft-06",
    IdOf::LegacyDollarId,
    subresources_of(&["additionalProperties", "not"], COMBINATORS, LEGACY_SUBVALUES),
    AnchorsIn::LegacyDollarId,
);

/// JSON Schema draft-04.
pub static DRAFT4: Specification = Specification::new(
    "draft-04",
    IdOf::LegacyId,
    subresources_of(&["additionalProperties", "not"], COMBINATORS, LEGACY_SUBVALUES),
    AnchorsIn::LegacyId,
);

/// JSON Schema draft-03.
pub static DRAFT3: Specification = Specification::new(
    "draft-03",
    IdOf::LegacyId,
    subresources_of(&["additionalProperties"], &["extends"], LEGACY_SUBVALUES),
    AnchorsIn::LegacyId,
);
