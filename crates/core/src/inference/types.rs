//! Schema tree types

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Classification label attached to observed values.
///
/// Not a type-system type: `Date`, `Email` and `Url` are string values
/// whose shape was recognized, and `Array`/`Object` label structured
/// values observed inside a column without describing their contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InferredType {
    /// Missing value: null, undefined field, or empty string
    Null,
    /// Native boolean
    Boolean,
    /// Native number or numeric string
    Number,
    /// String with a leading date shape (ISO or US)
    Date,
    /// String with an email shape
    Email,
    /// String starting with an http(s) scheme
    Url,
    /// Any other string
    String,
    /// JSON array value
    Array,
    /// JSON object value
    Object,
    /// Catch-all; unreachable for values decoded through serde_json
    Unknown,
}

impl InferredType {
    /// Lowercase label, as used in serialized schemas
    pub fn type_name(&self) -> &'static str {
        match self {
            InferredType::Null => "null",
            InferredType::Boolean => "boolean",
            InferredType::Number => "number",
            InferredType::Date => "date",
            InferredType::Email => "email",
            InferredType::Url => "url",
            InferredType::String => "string",
            InferredType::Array => "array",
            InferredType::Object => "object",
            InferredType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for InferredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// One node of an inferred schema tree.
///
/// The structural shape lives in [`SchemaKind`]: a node is exactly one of
/// leaf, object, or array, so "properties and items populated at once"
/// cannot be represented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaNode {
    /// Node identifier
    pub id: Uuid,
    /// Field name, or a structural marker (`record`, `item`, the file stem)
    pub name: String,
    /// Human-readable description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Structural shape of this node
    #[serde(flatten)]
    pub kind: SchemaKind,
}

/// Structural shape of a schema node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SchemaKind {
    /// Scalar field with its classification and a sample value
    Leaf {
        /// Classification of the column this leaf describes
        #[serde(rename = "type")]
        ty: InferredType,
        /// First non-null observed value
        #[serde(skip_serializing_if = "Option::is_none")]
        example: Option<Value>,
    },
    /// Object with named properties in first-seen order
    Object {
        /// Child nodes keyed by field name
        properties: IndexMap<String, SchemaNode>,
        /// Property names present in the sample record
        required: Vec<String>,
    },
    /// Array with a single item schema
    Array {
        /// Schema of the array's elements
        items: Box<SchemaNode>,
    },
}

impl SchemaNode {
    /// Create a leaf node
    pub fn leaf(name: impl Into<String>, ty: InferredType, example: Option<Value>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            kind: SchemaKind::Leaf { ty, example },
        }
    }

    /// Create an object node; `required` is derived from the property keys
    pub fn object(name: impl Into<String>, properties: IndexMap<String, SchemaNode>) -> Self {
        let required = properties.keys().cloned().collect();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            kind: SchemaKind::Object {
                properties,
                required,
            },
        }
    }

    /// Create an array node wrapping an item schema
    pub fn array(name: impl Into<String>, items: SchemaNode) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            kind: SchemaKind::Array {
                items: Box::new(items),
            },
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The node's type label (structural nodes report `object`/`array`)
    pub fn node_type(&self) -> InferredType {
        match &self.kind {
            SchemaKind::Leaf { ty, .. } => *ty,
            SchemaKind::Object { .. } => InferredType::Object,
            SchemaKind::Array { .. } => InferredType::Array,
        }
    }

    /// Properties of an object node, if this is one
    pub fn properties(&self) -> Option<&IndexMap<String, SchemaNode>> {
        match &self.kind {
            SchemaKind::Object { properties, .. } => Some(properties),
            _ => None,
        }
    }

    /// Item schema of an array node, if this is one
    pub fn items(&self) -> Option<&SchemaNode> {
        match &self.kind {
            SchemaKind::Array { items } => Some(items),
            _ => None,
        }
    }
}
