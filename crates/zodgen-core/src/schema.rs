//! Schema node model.
//!
//! A [`Schema`] is either a `$ref` pointer ([`Reference`]) or an inline
//! [`InlineSchema`]. Only the keywords the compiler understands are modelled;
//! anything else in the source document is ignored during deserialization.
//!
//! Property order is preserved ([`IndexMap`]) because it drives the order of
//! the generated object members.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// A schema node: a reference to a named schema or an inline definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Schema {
    /// `{ "$ref": "#/components/schemas/Name" }`
    Reference(Reference),

    /// Any other schema object.
    Inline(Box<InlineSchema>),
}

/// A `$ref` pointer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Reference {
    #[serde(rename = "$ref")]
    pub pointer: String,
}

/// The `type` keyword.
///
/// OpenAPI 3.0 uses a single name; 3.1 also allows a list such as
/// `["string", "null"]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TypeDecl {
    Single(String),
    Many(Vec<String>),
}

/// `exclusiveMinimum` / `exclusiveMaximum`: a 3.0 flag or a 3.1 bound.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ExclusiveBound {
    Flag(bool),
    Value(Number),
}

/// `additionalProperties`: a flag or a schema for the extra values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Flag(bool),
    Schema(Box<Schema>),
}

/// An inline schema object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineSchema {
    #[serde(rename = "type", default)]
    pub schema_type: Option<TypeDecl>,

    #[serde(default)]
    pub format: Option<String>,

    #[serde(rename = "enum", default)]
    pub enum_values: Option<Vec<Value>>,

    #[serde(default)]
    pub items: Option<Box<Schema>>,

    #[serde(default)]
    pub properties: IndexMap<String, Schema>,

    #[serde(default)]
    pub required: Vec<String>,

    #[serde(default)]
    pub all_of: Vec<Schema>,

    #[serde(default)]
    pub any_of: Vec<Schema>,

    #[serde(default)]
    pub one_of: Vec<Schema>,

    #[serde(default)]
    pub additional_properties: Option<AdditionalProperties>,

    #[serde(default)]
    pub minimum: Option<Number>,

    #[serde(default)]
    pub maximum: Option<Number>,

    #[serde(default)]
    pub exclusive_minimum: Option<ExclusiveBound>,

    #[serde(default)]
    pub exclusive_maximum: Option<ExclusiveBound>,

    #[serde(default)]
    pub min_length: Option<Number>,

    #[serde(default)]
    pub max_length: Option<Number>,

    #[serde(default)]
    pub min_items: Option<Number>,

    #[serde(default)]
    pub max_items: Option<Number>,

    /// `Some(Value::Null)` for an explicit `default: null`, `None` when absent.
    #[serde(default, deserialize_with = "present_value")]
    pub default: Option<Value>,

    #[serde(default)]
    pub description: Option<String>,
}

/// Keep an explicit `null` as `Some(Value::Null)`.
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl Schema {
    /// Build a reference node.
    pub fn reference(pointer: impl Into<String>) -> Self {
        Schema::Reference(Reference {
            pointer: pointer.into(),
        })
    }

    /// The inline definition, if this node is not a reference.
    pub fn as_inline(&self) -> Option<&InlineSchema> {
        match self {
            Schema::Inline(inline) => Some(inline),
            Schema::Reference(_) => None,
        }
    }

    /// The raw `description`, references have none.
    pub fn description(&self) -> Option<&str> {
        self.as_inline().and_then(|s| s.description.as_deref())
    }
}

impl From<InlineSchema> for Schema {
    fn from(inline: InlineSchema) -> Self {
        Schema::Inline(Box::new(inline))
    }
}

impl TypeDecl {
    /// The type name used for dispatch.
    ///
    /// For a list the first entry other than `"null"` wins; a list holding
    /// only `"null"` yields `"null"`.
    pub fn primary(&self) -> Option<&str> {
        match self {
            TypeDecl::Single(name) => Some(name.as_str()),
            TypeDecl::Many(names) => names
                .iter()
                .find(|n| n.as_str() != "null")
                .or_else(|| names.first())
                .map(String::as_str),
        }
    }
}

impl InlineSchema {
    /// An empty schema with only `type` set.
    pub fn of_type(name: impl Into<String>) -> Self {
        Self {
            schema_type: Some(TypeDecl::Single(name.into())),
            ..Self::default()
        }
    }

    /// The type name used for dispatch, see [`TypeDecl::primary`].
    pub fn type_name(&self) -> Option<&str> {
        self.schema_type.as_ref().and_then(TypeDecl::primary)
    }

    pub fn is_required(&self, property: &str) -> bool {
        self.required.iter().any(|r| r == property)
    }

    /// Every direct child schema: composition branches, `items`, a
    /// schema-valued `additionalProperties` and each property.
    pub fn children(&self) -> impl Iterator<Item = &Schema> {
        let additional = match &self.additional_properties {
            Some(AdditionalProperties::Schema(schema)) => Some(schema.as_ref()),
            _ => None,
        };

        self.all_of
            .iter()
            .chain(self.any_of.iter())
            .chain(self.one_of.iter())
            .chain(self.items.as_deref())
            .chain(additional)
            .chain(self.properties.values())
    }
}
