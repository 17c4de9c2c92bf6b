//! Schema resources and the anchors that point at them.

use serde_json::Value;

use crate::dialect::specification_with;
use crate::error::ResourceError;
use crate::specification::Specification;
use crate::types::{json_type_name, Schema};

/// A schema node together with the specification that interprets it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resource<'a> {
    contents: Schema<'a>,
    specification: &'static Specification,
}

impl<'a> Resource<'a> {
    pub fn new(contents: Schema<'a>, specification: &'static Specification) -> Self {
        Self {
            contents,
            specification,
        }
    }

    /// Build a resource, picking the specification from `$schema`.
    ///
    /// Without a `$schema` keyword, `default` is used. An unrecognized
    /// `$schema` also falls back to `default` when one is given.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::UnknownDialect` for an unrecognized `$schema`
    /// with no default, and `ResourceError::CannotDetermineSpecification` when
    /// there is neither a `$schema` nor a default, or `contents` is not a
    /// schema at all.
    pub fn from_contents(
        contents: &'a Value,
        default: Option<&'static Specification>,
    ) -> Result<Self, ResourceError> {
        let cannot_determine = || ResourceError::CannotDetermineSpecification {
            actual: json_type_name(contents),
        };

        let schema = Schema::from_value(contents).ok_or_else(cannot_determine)?;

        let specification = match schema.get_str("$schema") {
            Some(dialect_id) => specification_with(dialect_id, default)?,
            None => default.ok_or_else(cannot_determine)?,
        };

        Ok(specification.create_resource(schema))
    }

    pub fn contents(&self) -> Schema<'a> {
        self.contents
    }

    pub fn specification(&self) -> &'static Specification {
        self.specification
    }

    /// This resource's canonical URI, if it declares one.
    pub fn id(&self) -> Option<&'a str> {
        self.specification.id_of(self.contents)
    }

    /// Resources embedded directly in this one.
    ///
    /// A sub-schema with its own recognized `$schema` switches dialect;
    /// otherwise it inherits this resource's specification.
    pub fn subresources(&self) -> Vec<Resource<'a>> {
        self.specification
            .subresources_of(self.contents)
            .into_iter()
            .map(|contents| self.subresource(contents))
            .collect()
    }

    fn subresource(&self, contents: Schema<'a>) -> Resource<'a> {
        let Some(dialect_id) = contents.get_str("$schema") else {
            return self.specification.create_resource(contents);
        };

        let specification = specification_with(dialect_id, Some(self.specification))
            .unwrap_or(self.specification);
        if specification != self.specification {
            tracing::debug!(
                from = self.specification.name(),
                to = specification.name(),
                "subschema switches dialect"
            );
        }
        specification.create_resource(contents)
    }

    /// Anchors declared directly on this resource.
    pub fn anchors(&self) -> Vec<Anchor<'a>> {
        self.specification.anchors_in(self.contents)
    }
}

/// A named location inside a document.
///
/// An anchor always designates the node that declared it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor<'a> {
    name: &'a str,
    resource: Resource<'a>,
}

impl<'a> Anchor<'a> {
    pub fn new(name: &'a str, resource: Resource<'a>) -> Self {
        Self { name, resource }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn resource(&self) -> Resource<'a> {
        self.resource
    }

    /// The resource this anchor points to.
    pub fn resolve(&self) -> Resource<'a> {
        self.resource
    }
}
