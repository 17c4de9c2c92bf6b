//! JSON Schema Dialects
//!
//! Dialect-aware discovery of identifiers, embedded schemas and anchors.
//!
//! Every JSON Schema draft spells identity, nesting and anchors a little
//! differently. This library answers three questions about a schema node for
//! any of six dialects, so a reference resolver can build its resource graph:
//! what is the node's own URI, which schemas are embedded directly in it,
//! and which plain-name anchors does it declare.
//!
//! # Example
//!
//! ```
//! use jsonschema_dialects::{specification_with, Schema};
//! use serde_json::json;
//!
//! let document = json!({
//!     "$id": "http://example.com/root",
//!     "definitions": {
//!         "item": { "$id": "#item", "type": "string" }
//!     }
//! });
//!
//! let spec = specification_with("http://json-schema.org/draft-07/schema#", None).unwrap();
//! let root = Schema::from_value(&document).unwrap();
//!
//! assert_eq!(spec.id_of(root), Some("http://example.com/root"));
//!
//! let children = spec.subresources_of(root);
//! assert_eq!(children.len(), 1);
//!
//! // In draft-07 a fragment-only `$id` is an anchor, not an identifier
//! assert_eq!(spec.id_of(children[0]), None);
//! assert_eq!(spec.anchors_in(children[0])[0].name(), "item");
//! ```
//!
//! # Dialects
//!
//! | Meta-schema URI | Name | Identifier | Anchors |
//! |-----------------|------|------------|---------|
//! | `https://json-schema.org/draft/2020-12/schema` | `draft2020-12` | `$id` | none |
//! | `https://json-schema.org/draft/2019-09/schema` | `draft2019-09` | `$id` | `$anchor` |
//! | `http://json-schema.org/draft-07/schema#` | `draft-07` | `$id` (legacy) | `$id: "#name"` |
//! | `http://json-schema.org/draft-06/schema#` | `draft-06` | `$id` (legacy) | `$id: "#name"` |
//! | `http://json-schema.org/draft-04/schema#` | `draft-04` | `id` (legacy) | `id: "#name"` |
//! | `http://json-schema.org/draft-03/schema#` | `draft-03` | `id` (legacy) | `id: "#name"` |
//!
//! Legacy identifiers are ignored when the node also has a `$ref`, or when the
//! value is only a `#fragment`.

mod dialect;
mod error;
mod extract;
mod resource;
mod specification;
mod types;

pub use dialect::{specification_with, Dialect};
pub use error::{ResourceError, UnknownDialect};
pub use extract::{subresources_of, AnchorsIn, IdOf, SubresourcesOf};
pub use resource::{Anchor, Resource};
pub use specification::{
    Specification, DRAFT201909, DRAFT202012, DRAFT3, DRAFT4, DRAFT6, DRAFT7,
};
pub use types::{json_type_name, ObjectSchema, Schema};
