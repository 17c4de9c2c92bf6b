//! Core schema value model.

use serde_json::{Map, Value};

/// A JSON Schema which is a JSON object.
pub type ObjectSchema = Map<String, Value>;

/// Returns the JSON type name for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A JSON Schema node of any kind.
///
/// Borrows from a parsed document; nothing in this crate mutates it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Schema<'a> {
    /// `true` or `false`: always or never valid, no substructure.
    Bool(bool),
    /// A keyword mapping.
    Object(&'a ObjectSchema),
}

impl<'a> Schema<'a> {
    /// Interpret a JSON value as a schema.
    ///
    /// Returns `None` for values that cannot be schemas (null, numbers,
    /// strings, arrays).
    pub fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Schema::Bool(*b)),
            Value::Object(map) => Some(Schema::Object(map)),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&'a ObjectSchema> {
        match self {
            Schema::Object(map) => Some(map),
            Schema::Bool(_) => None,
        }
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Schema::Bool(_))
    }

    /// Value of a keyword; always `None` on boolean schemas.
    pub fn get(&self, keyword: &str) -> Option<&'a Value> {
        self.as_object().and_then(|map| map.get(keyword))
    }

    /// String value of a keyword, ignoring values of any other type.
    pub fn get_str(&self, keyword: &str) -> Option<&'a str> {
        self.get(keyword).and_then(Value::as_str)
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.get(keyword).is_some()
    }

    /// Owned copy of this node.
    pub fn to_value(&self) -> Value {
        match self {
            Schema::Bool(b) => Value::Bool(*b),
            Schema::Object(map) => Value::Object((*map).clone()),
        }
    }
}

impl<'a> From<&'a ObjectSchema> for Schema<'a> {
    fn from(map: &'a ObjectSchema) -> Self {
        Schema::Object(map)
    }
}

impl From<bool> for Schema<'_> {
    fn from(b: bool) -> Self {
        Schema::Bool(b)
    }
}
