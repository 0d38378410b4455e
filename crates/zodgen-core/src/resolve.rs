//! Reference resolution.
//!
//! Replaces every reachable `$ref` with an owned copy of the schema it points
//! to. Named schemas are treated as an arena addressed by name: a stack of
//! names currently being resolved detects cycles, and a per-resolver cache
//! makes sure each named schema is flattened only once.
//!
//! The source [`Document`] is never mutated.

use crate::document::{Document, Method, ParameterOrReference};
use crate::error::{CompileError, CompileResult};
use crate::naming::{COMPONENT_SCHEMAS_POINTER, schema_name_from_ref};
use crate::schema::{AdditionalProperties, InlineSchema, Schema};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Flattens schemas of one document.
pub struct Resolver<'a> {
    schemas: Option<&'a IndexMap<String, Schema>>,
    in_progress: Vec<String>,
    resolved: HashMap<String, InlineSchema>,
}

impl<'a> Resolver<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self {
            schemas: document.schemas(),
            in_progress: Vec::new(),
            resolved: HashMap::new(),
        }
    }

    /// Resolve any node into a reference-free inline schema.
    pub fn resolve(&mut self, schema: &Schema) -> CompileResult<InlineSchema> {
        match schema {
            Schema::Reference(reference) => {
                let name = schema_name_from_ref(&reference.pointer);
                self.resolve_named(name, &reference.pointer)
            }
            Schema::Inline(inline) => self.resolve_inline(inline),
        }
    }

    /// Resolve the named schema `name`; `pointer` is reported when it is missing.
    fn resolve_named(&mut self, name: &str, pointer: &str) -> CompileResult<InlineSchema> {
        if let Some(done) = self.resolved.get(name) {
            return Ok(done.clone());
        }

        if let Some(start) = self.in_progress.iter().position(|n| n == name) {
            let mut chain = self.in_progress[start..].to_vec();
            chain.push(name.to_string());
            return Err(CompileError::CyclicReference { chain });
        }

        let target = self
            .schemas
            .and_then(|schemas| schemas.get(name))
            .ok_or_else(|| CompileError::SchemaNotFound {
                reference: pointer.to_string(),
            })?;

        self.in_progress.push(name.to_string());
        let result = self.resolve(target);
        self.in_progress.pop();

        let inline = result?;
        self.resolved.insert(name.to_string(), inline.clone());
        Ok(inline)
    }

    fn resolve_inline(&mut self, inline: &InlineSchema) -> CompileResult<InlineSchema> {
        if !contains_reference(inline) {
            return Ok(inline.clone());
        }

        let mut out = inline.clone();
        out.all_of = self.resolve_each(&inline.all_of)?;
        out.any_of = self.resolve_each(&inline.any_of)?;
        out.one_of = self.resolve_each(&inline.one_of)?;

        if let Some(items) = &inline.items {
            out.items = Some(Box::new(self.resolve(items)?.into()));
        }

        if let Some(AdditionalProperties::Schema(extra)) = &inline.additional_properties {
            out.additional_properties = Some(AdditionalProperties::Schema(Box::new(
                self.resolve(extra)?.into(),
            )));
        }

        for (name, property) in &inline.properties {
            let resolved = self.resolve(property)?;
            out.properties.insert(name.clone(), resolved.into());
        }

        Ok(out)
    }

    fn resolve_each(&mut self, schemas: &[Schema]) -> CompileResult<Vec<Schema>> {
        schemas
            .iter()
            .map(|schema| self.resolve(schema).map(Schema::from))
            .collect()
    }

    /// Resolve the component called `name`, as if it were referenced.
    pub fn resolve_component(&mut self, name: &str) -> CompileResult<InlineSchema> {
        let pointer = format!("{COMPONENT_SCHEMAS_POINTER}/{name}");
        self.resolve_named(name, &pointer)
    }
}

/// Whether any schema below `inline` is a reference.
pub fn contains_reference(inline: &InlineSchema) -> bool {
    inline.children().any(|child| match child {
        Schema::Reference(_) => true,
        Schema::Inline(nested) => contains_reference(nested),
    })
}

/// Resolve a single node against `document`.
pub fn resolve(document: &Document, schema: &Schema) -> CompileResult<InlineSchema> {
    Resolver::new(document).resolve(schema)
}

/// A copy of `document` with every component schema and every parameter
/// schema flattened.
///
/// Fails on the first missing or cyclic reference.
pub fn resolve_document(document: &Document) -> CompileResult<Document> {
    let mut resolver = Resolver::new(document);
    let mut out = document.clone();

    if let Some(components) = out.components.as_mut() {
        for (name, schema) in components.schemas.iter_mut() {
            *schema = resolver.resolve_component(name)?.into();
        }
    }

    for item in out.paths.values_mut() {
        resolve_parameters(&mut resolver, &mut item.parameters)?;
        for method in Method::ALL {
            if let Some(operation) = item.operation_mut(method) {
                resolve_parameters(&mut resolver, &mut operation.parameters)?;
            }
        }
    }

    tracing::debug!(
        schemas = document.schemas().map_or(0, IndexMap::len),
        paths = document.paths.len(),
        "resolved document references"
    );

    Ok(out)
}

fn resolve_parameters(
    resolver: &mut Resolver<'_>,
    parameters: &mut [ParameterOrReference],
) -> CompileResult<()> {
    for parameter in parameters.iter_mut() {
        if let ParameterOrReference::Parameter(parameter) = parameter {
            if let Some(schema) = parameter.schema.as_mut() {
                *schema = resolver.resolve(schema)?.into();
            }
        }
    }
    Ok(())
}
