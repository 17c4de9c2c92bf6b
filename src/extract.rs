//! Dialect-specific extraction strategies.
//!
//! Each JSON Schema draft encodes identity, nesting and anchors a little
//! differently. The strategies here are closed sets of behaviors; a
//! [`Specification`] picks exactly one of each.
//!
//! Every strategy is total: a missing or malformed keyword means "nothing",
//! never an error.

use serde_json::Value;

use crate::resource::Anchor;
use crate::specification::Specification;
use crate::types::Schema;

/// How a dialect declares a node's own URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdOf {
    /// `$id`, read unconditionally (2019-09 and later).
    DollarId,
    /// `$id`, ignored next to `$ref` or when it is a bare `#fragment`
    /// (draft-06, draft-07).
    LegacyDollarId,
    /// `id` with the legacy rules (draft-03, draft-04).
    LegacyId,
}

impl IdOf {
    pub fn id_of<'a>(self, contents: Schema<'a>) -> Option<&'a str> {
        match self {
            IdOf::DollarId => contents.get_str("$id"),
            IdOf::LegacyDollarId => legacy_id(contents, "$id"),
            IdOf::LegacyId => legacy_id(contents, "id"),
        }
    }
}

fn legacy_id<'a>(contents: Schema<'a>, keyword: &str) -> Option<&'a str> {
    if contents.contains("$ref") {
        return None;
    }
    contents
        .get_str(keyword)
        .filter(|id| !id.starts_with('#'))
}

/// How a dialect declares plain-name anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorsIn {
    /// No anchors are discovered (2020-12 handles them elsewhere).
    Disabled,
    /// Non-empty `$anchor` (2019-09).
    DollarAnchor,
    /// `$id` of the form `#name` (draft-06, draft-07).
    LegacyDollarId,
    /// `id` of the form `#name` (draft-03, draft-04).
    LegacyId,
}

impl AnchorsIn {
    /// Anchors declared directly on `contents`.
    ///
    /// Each anchor's resource is `contents` itself, wrapped by
    /// `specification`.
    pub fn anchors_in<'a>(
        self,
        specification: &'static Specification,
        contents: Schema<'a>,
    ) -> Vec<Anchor<'a>> {
        let name = match self {
            AnchorsIn::Disabled => None,
            AnchorsIn::DollarAnchor => contents.get_str("$anchor").filter(|name| !name.is_empty()),
            AnchorsIn::LegacyDollarId => legacy_anchor(contents, "$id"),
            AnchorsIn::LegacyId => legacy_anchor(contents, "id"),
        };

        name.map(|name| Anchor::new(name, specification.create_resource(contents)))
            .into_iter()
            .collect()
    }
}

// "#" alone gives the empty anchor name, which is kept.
fn legacy_anchor<'a>(contents: Schema<'a>, keyword: &str) -> Option<&'a str> {
    contents
        .get_str(keyword)
        .and_then(|id| id.strip_prefix('#'))
}

/// Keywords under which a dialect embeds sub-schemas.
///
/// Built with [`subresources_of`]. The keyword lists are disjoint and
/// their order is the enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubresourcesOf {
    /// Value is itself a sub-schema.
    pub in_value: &'static [&'static str],
    /// Value is an array of sub-schemas.
    pub in_subarray: &'static [&'static str],
    /// Value is an object whose values are sub-schemas.
    pub in_subvalues: &'static [&'static str],
}

/// Build a sub-schema strategy from its three keyword lists.
pub const fn subresources_of(
    in_value: &'static [&'static str],
    in_subarray: &'static [&'static str],
    in_subvalues: &'static [&'static str],
) -> SubresourcesOf {
    SubresourcesOf {
        in_value,
        in_subarray,
        in_subvalues,
    }
}

impl SubresourcesOf {
    /// A strategy that never finds sub-schemas.
    pub const NONE: SubresourcesOf = subresources_of(&[], &[], &[]);

    /// Immediate sub-schemas of `contents`, not recursively flattened.
    ///
    /// Order: `in_value` keywords, then each `in_subarray` array, then each
    /// `in_subvalues` mapping in document order. Values that are not schemas
    /// (and keyword values of the wrong JSON shape) are skipped.
    pub fn subresources_of<'a>(&self, contents: Schema<'a>) -> Vec<Schema<'a>> {
        let Some(map) = contents.as_object() else {
            return Vec::new();
        };

        let mut found = Vec::new();

        for keyword in self.in_value {
            if let Some(schema) = map.get(*keyword).and_then(Schema::from_value) {
                found.push(schema);
            }
        }

        for keyword in self.in_subarray {
            if let Some(Value::Array(items)) = map.get(*keyword) {
                found.extend(items.iter().filter_map(Schema::from_value));
            }
        }

        for keyword in self.in_subvalues {
            if let Some(Value::Object(children)) = map.get(*keyword) {
                found.extend(children.values().filter_map(Schema::from_value));
            }
        }

        found
    }
}
