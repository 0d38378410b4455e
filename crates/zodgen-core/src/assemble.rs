//! Statement assembly.
//!
//! Walks a document and emits the ordered list of named statements:
//! component schemas first, then path-parameter objects, then
//! query-parameter objects. Each section can be switched off through
//! [`GenerateOptions`].

use crate::builder::{ExpressionBuilder, comment_text};
use crate::config::GenerateOptions;
use crate::document::{
    Document, Method, Operation, Parameter, ParameterLocation, ParameterOrReference, PathItem,
};
use crate::error::CompileResult;
use crate::expr::Expr;
use crate::naming::{
    PATH_PREFIX, QUERY_PREFIX, SCHEMA_PREFIX, sanitize_words, statement_identifier,
};
use crate::resolve::resolve_document;
use crate::schema::{InlineSchema, Schema};
use std::collections::HashSet;

/// Output section a statement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Components,
    Paths,
    Queries,
}

impl Section {
    /// Banner title printed before the first statement of the section.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Components => "COMPONENTS",
            Section::Paths => "PATHS",
            Section::Queries => "QUERIES",
        }
    }

    fn prefix(&self) -> &'static str {
        match self {
            Section::Components => SCHEMA_PREFIX,
            Section::Paths => PATH_PREFIX,
            Section::Queries => QUERY_PREFIX,
        }
    }
}

/// One named, exported validator.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub identifier: String,
    pub expression: Expr,

    /// Single-line comment printed above the statement.
    pub comment: Option<String>,

    /// Set on the first statement of each section only.
    pub section: Option<Section>,
}

impl Statement {
    pub fn new(identifier: impl Into<String>, expression: Expr) -> Self {
        Self {
            identifier: identifier.into(),
            expression,
            comment: None,
            section: None,
        }
    }

    pub fn with_comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }
}

/// Identifiers already handed out in one batch.
#[derive(Debug, Default)]
pub struct IdentifierSet {
    used: HashSet<String>,
}

impl IdentifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `candidate`, or the first of `candidate2`, `candidate3`, …
    /// that is still free.
    pub fn claim(&mut self, candidate: &str) -> String {
        if self.used.insert(candidate.to_string()) {
            return candidate.to_string();
        }

        let unique = (2u32..)
            .map(|n| format!("{candidate}{n}"))
            .find(|name| !self.used.contains(name))
            .unwrap_or_else(|| candidate.to_string());

        tracing::warn!(
            identifier = candidate,
            renamed = %unique,
            "identifier already used in this batch; renaming"
        );
        self.used.insert(unique.clone());
        unique
    }
}

/// Compile `document` into statements.
///
/// References are flattened first; a missing or cyclic reference aborts the
/// run before any statement is produced.
pub fn generate(document: &Document, options: &GenerateOptions) -> CompileResult<Vec<Statement>> {
    let resolved = resolve_document(document)?;
    let builder = ExpressionBuilder::from_options(options);
    let mut identifiers = IdentifierSet::new();
    let mut statements = Vec::new();

    if options.generate_components {
        let drafts = component_statements(&resolved, &builder);
        push_section(&mut statements, &mut identifiers, Section::Components, drafts);
    }

    if options.generate_paths || options.generate_queries {
        let (paths, queries) = operation_statements(&resolved, &builder);
        if options.generate_paths {
            push_section(&mut statements, &mut identifiers, Section::Paths, paths);
        }
        if options.generate_queries {
            push_section(&mut statements, &mut identifiers, Section::Queries, queries);
        }
    }

    tracing::debug!(
        statements = statements.len(),
        nullable_mode = %options.nullable_mode,
        "assembled statements"
    );

    Ok(statements)
}

/// Give each draft a unique identifier and mark the section start.
fn push_section(
    out: &mut Vec<Statement>,
    identifiers: &mut IdentifierSet,
    section: Section,
    drafts: Vec<Statement>,
) {
    for (index, mut statement) in drafts.into_iter().enumerate() {
        statement.identifier = identifiers.claim(&statement.identifier);
        statement.section = (index == 0).then_some(section);
        out.push(statement);
    }
}

fn component_statements(document: &Document, builder: &ExpressionBuilder) -> Vec<Statement> {
    let Some(schemas) = document.schemas() else {
        return Vec::new();
    };

    schemas
        .iter()
        .map(|(name, schema)| {
            Statement::new(
                statement_identifier(Section::Components.prefix(), name),
                builder.build(schema, true),
            )
            .with_comment(comment_text(schema.description()))
        })
        .collect()
}

/// Path-parameter and query-parameter statements, in operation order.
fn operation_statements(
    document: &Document,
    builder: &ExpressionBuilder,
) -> (Vec<Statement>, Vec<Statement>) {
    let mut paths = Vec::new();
    let mut queries = Vec::new();

    for (template, item) in &document.paths {
        for (method, operation) in item.operations() {
            let parameters = effective_parameters(item, operation);
            let parameters = inline_parameters(&parameters, template, method);
            let name = operation_name(operation, method, template);

            let sections = [
                (Section::Paths, ParameterLocation::Path, &mut paths),
                (Section::Queries, ParameterLocation::Query, &mut queries),
            ];
            for (section, location, out) in sections {
                let located: Vec<&Parameter> = parameters
                    .iter()
                    .copied()
                    .filter(|p| p.location == location)
                    .collect();
                if located.is_empty() {
                    continue;
                }
                out.push(Statement::new(
                    statement_identifier(section.prefix(), &name),
                    builder.build_inline(&parameter_schema(&located), true),
                ));
            }
        }
    }

    (paths, queries)
}

/// Shared path-item parameters followed by the operation's own; an operation
/// parameter replaces a shared one with the same name and location.
fn effective_parameters<'a>(
    item: &'a PathItem,
    operation: &'a Operation,
) -> Vec<&'a ParameterOrReference> {
    let mut merged: Vec<&ParameterOrReference> = item.parameters.iter().collect();

    for entry in &operation.parameters {
        let slot = match entry {
            ParameterOrReference::Parameter(own) => merged.iter().position(|shared| {
                matches!(shared, ParameterOrReference::Parameter(p)
                    if p.name == own.name && p.location == own.location)
            }),
            ParameterOrReference::Reference(_) => None,
        };
        match slot {
            Some(index) => merged[index] = entry,
            None => merged.push(entry),
        }
    }

    merged
}

/// Drop reference parameters (with a warning) and parameters without a schema.
fn inline_parameters<'a>(
    parameters: &[&'a ParameterOrReference],
    template: &str,
    method: Method,
) -> Vec<&'a Parameter> {
    parameters
        .iter()
        .copied()
        .filter_map(|entry| match entry {
            ParameterOrReference::Reference(reference) => {
                tracing::warn!(
                    path = template,
                    %method,
                    reference = %reference.pointer,
                    "reference parameters are not supported; skipping"
                );
                None
            }
            ParameterOrReference::Parameter(parameter) if parameter.schema.is_none() => {
                tracing::debug!(
                    path = template,
                    %method,
                    parameter = %parameter.name,
                    "parameter has no schema; skipping"
                );
                None
            }
            ParameterOrReference::Parameter(parameter) => Some(parameter),
        })
        .collect()
}

/// `operationId`, or method and path template when it is missing.
fn operation_name(operation: &Operation, method: Method, template: &str) -> String {
    match &operation.operation_id {
        Some(id) if !id.trim().is_empty() => id.clone(),
        _ => sanitize_words(&format!("{method} {template}")),
    }
}

/// An object schema with one property per parameter.
fn parameter_schema(parameters: &[&Parameter]) -> InlineSchema {
    let mut schema = InlineSchema::of_type("object");

    for parameter in parameters {
        let Some(property) = &parameter.schema else {
            continue;
        };
        let mut property = property.clone();
        if let Schema::Inline(inline) = &mut property {
            if inline.description.is_none() {
                inline.description = parameter.description.clone();
            }
        }

        schema.properties.insert(parameter.name.clone(), property);
        if parameter.required {
            schema.required.push(parameter.name.clone());
        }
    }

    schema
}
