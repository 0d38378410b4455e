//! Parsed API document: named schemas plus the path/operation table.

use crate::schema::{Reference, Schema};
use indexmap::IndexMap;
use serde::Deserialize;

/// The parts of an OpenAPI document the compiler consumes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Document {
    /// `openapi` version string, checked by the loader.
    #[serde(default)]
    pub openapi: Option<String>,

    #[serde(default)]
    pub components: Option<Components>,

    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
}

/// `components` section. Only `schemas` is used.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, Schema>,
}

/// HTTP methods in the order operations are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

impl Method {
    pub const ALL: [Method; 8] = [
        Method::Get,
        Method::Put,
        Method::Post,
        Method::Delete,
        Method::Options,
        Method::Head,
        Method::Patch,
        Method::Trace,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Put => "put",
            Method::Post => "post",
            Method::Delete => "delete",
            Method::Options => "options",
            Method::Head => "head",
            Method::Patch => "patch",
            Method::Trace => "trace",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of `paths`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PathItem {
    #[serde(default)]
    pub get: Option<Operation>,
    #[serde(default)]
    pub put: Option<Operation>,
    #[serde(default)]
    pub post: Option<Operation>,
    #[serde(default)]
    pub delete: Option<Operation>,
    #[serde(default)]
    pub options: Option<Operation>,
    #[serde(default)]
    pub head: Option<Operation>,
    #[serde(default)]
    pub patch: Option<Operation>,
    #[serde(default)]
    pub trace: Option<Operation>,

    /// Parameters shared by every operation under this path.
    #[serde(default)]
    pub parameters: Vec<ParameterOrReference>,
}

impl PathItem {
    pub fn operation(&self, method: Method) -> Option<&Operation> {
        match method {
            Method::Get => self.get.as_ref(),
            Method::Put => self.put.as_ref(),
            Method::Post => self.post.as_ref(),
            Method::Delete => self.delete.as_ref(),
            Method::Options => self.options.as_ref(),
            Method::Head => self.head.as_ref(),
            Method::Patch => self.patch.as_ref(),
            Method::Trace => self.trace.as_ref(),
        }
    }

    pub fn operation_mut(&mut self, method: Method) -> Option<&mut Operation> {
        match method {
            Method::Get => self.get.as_mut(),
            Method::Put => self.put.as_mut(),
            Method::Post => self.post.as_mut(),
            Method::Delete => self.delete.as_mut(),
            Method::Options => self.options.as_mut(),
            Method::Head => self.head.as_mut(),
            Method::Patch => self.patch.as_mut(),
            Method::Trace => self.trace.as_mut(),
        }
    }

    /// Declared operations in [`Method::ALL`] order.
    pub fn operations(&self) -> impl Iterator<Item = (Method, &Operation)> {
        Method::ALL
            .into_iter()
            .filter_map(|method| self.operation(method).map(|op| (method, op)))
    }
}

/// A single operation (method × path).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default)]
    pub operation_id: Option<String>,

    #[serde(default)]
    pub parameters: Vec<ParameterOrReference>,
}

/// A parameter entry, which may be a `$ref` (unsupported, skipped).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParameterOrReference {
    Reference(Reference),
    Parameter(Parameter),
}

/// Where a parameter is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
}


/// An inline parameter definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Parameter {
    pub name: String,

    #[serde(rename = "in")]
    pub location: ParameterLocation,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub schema: Option<Schema>,

    #[serde(default)]
    pub description: Option<String>,
}

impl Document {
    /// Named schemas, empty when the document has no `components`.
    pub fn schemas(&self) -> Option<&IndexMap<String, Schema>> {
        self.components.as_ref().map(|c| &c.schemas)
    }
}

#[cfg(test)]
#[path = "document/document_tests.rs"]
mod document_tests;
