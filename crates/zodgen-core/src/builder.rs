//! Schema → validator expression compiler.
//!
//! [`ExpressionBuilder::build`] turns one schema node into an [`Expr`]:
//!
//! 1. a base is chosen by [`SchemaKind`] (enum, union, raw override, then the
//!    `type` keyword, falling back to `unknown`);
//! 2. when the base is a call, modifiers are chained in a fixed order:
//!    merge → format → constraints → default → nullability.
//!
//! References are not followed here: a `$ref` compiles to the identifier of
//! the statement declaring that schema. Callers wanting a self-contained
//! expression flatten the schema first (see [`crate::resolve`]).
//!
//! Building never fails. Unrecognized input degrades to `unknown()`.

use crate::config::{GenerateOptions, NullableMode};
use crate::expr::{Base, Call, Expr, Literal, Modifier, Property};
use crate::format::{constraint_modifiers, format_modifier};
use crate::naming::{SCHEMA_PREFIX, schema_name_from_ref, statement_identifier};
use crate::schema::{InlineSchema, Schema};
use serde_json::Value;

/// Marker that turns the rest of a description into a verbatim expression.
pub const RAW_EXPRESSION_MARKER: &str = "zod: ";

/// The description text before the raw-expression marker, trimmed.
///
/// Returns `None` when nothing is left.
pub fn comment_text(description: Option<&str>) -> Option<String> {
    let head = description?.split(RAW_EXPRESSION_MARKER).next()?.trim();
    (!head.is_empty()).then(|| head.to_string())
}

/// The raw expression following the marker, trimmed.
///
/// A marker with nothing after it is not an override.
pub fn raw_override(description: Option<&str>) -> Option<String> {
    let payload = description?.split(RAW_EXPRESSION_MARKER).nth(1)?.trim();
    (!payload.is_empty()).then(|| payload.to_string())
}

/// What an inline schema compiles to, before modifiers.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind<'s> {
    Enum(&'s [Value]),
    Union(Vec<&'s Schema>),
    Raw(String),
    Array(Option<&'s Schema>),
    Object,
    Number,
    String,
    Boolean,
    Null,
    Unknown,
}

impl<'s> SchemaKind<'s> {
    /// Classify `schema`. `enum` wins over `anyOf`/`oneOf`, which win over a
    /// raw override, which wins over `type`.
    pub fn of(schema: &'s InlineSchema) -> Self {
        if let Some(values) = &schema.enum_values {
            return SchemaKind::Enum(values);
        }

        if !schema.any_of.is_empty() || !schema.one_of.is_empty() {
            return SchemaKind::Union(schema.any_of.iter().chain(&schema.one_of).collect());
        }

        if let Some(raw) = raw_override(schema.description.as_deref()) {
            return SchemaKind::Raw(raw);
        }

        match schema.type_name() {
            Some("array") => SchemaKind::Array(schema.items.as_deref()),
            Some("object") => SchemaKind::Object,
            Some("integer") | Some("number") => SchemaKind::Number,
            Some("string") => SchemaKind::String,
            Some("boolean") => SchemaKind::Boolean,
            Some("null") => SchemaKind::Null,
            _ => SchemaKind::Unknown,
        }
    }
}

/// Compiles schema nodes with a fixed nullable mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpressionBuilder {
    nullable_mode: NullableMode,
}

impl ExpressionBuilder {
    pub fn new(nullable_mode: NullableMode) -> Self {
        Self { nullable_mode }
    }

    pub fn from_options(options: &GenerateOptions) -> Self {
        Self::new(options.nullable_mode)
    }

    /// Compile `schema`; `required = false` appends the nullability modifier.
    pub fn build(&self, schema: &Schema, required: bool) -> Expr {
        match schema {
            Schema::Reference(reference) => Expr::Identifier(statement_identifier(
                SCHEMA_PREFIX,
                schema_name_from_ref(&reference.pointer),
            )),
            Schema::Inline(inline) => self.build_inline(inline, required),
        }
    }

    /// Compile an inline schema.
    pub fn build_inline(&self, schema: &InlineSchema, required: bool) -> Expr {
        let base = self.base_expression(schema);
        if !matches!(base, Expr::Call(_)) {
            return base;
        }

        let mut call = self.apply_merge(schema, base).into_call();
        self.apply_format(schema, &mut call);
        call.modifiers.extend(constraint_modifiers(schema));

        if let Some(default) = &schema.default {
            call.push(Modifier::literal("default", Literal::from_json(default)));
        }

        if !required {
            call.push(Modifier::bare(self.nullable_mode.modifier_name()));
        }

        Expr::Call(call)
    }

    fn base_expression(&self, schema: &InlineSchema) -> Expr {
        match SchemaKind::of(schema) {
            SchemaKind::Enum(values) => {
                Expr::call(Base::Enum(values.iter().map(enum_label).collect()))
            }
            SchemaKind::Union(branches) => Expr::call(Base::Union(
                branches.into_iter().map(|b| self.build(b, true)).collect(),
            )),
            SchemaKind::Raw(raw) => Expr::Identifier(raw),
            SchemaKind::Array(items) => {
                let item = match items {
                    Some(items) => self.build(items, true),
                    None => Expr::call(Base::Unknown),
                };
                Expr::call(Base::Array(Box::new(item)))
            }
            SchemaKind::Object => Expr::call(Base::Object(
                schema
                    .properties
                    .iter()
                    .map(|(name, child)| Property {
                        name: name.clone(),
                        value: self.build(child, schema.is_required(name)),
                        comment: comment_text(child.description()),
                    })
                    .collect(),
            )),
            SchemaKind::Number => Expr::call(Base::Number),
            SchemaKind::String => Expr::call(Base::String),
            SchemaKind::Boolean => Expr::call(Base::Boolean),
            SchemaKind::Null => Expr::call(Base::Null),
            SchemaKind::Unknown => {
                if schema.additional_properties.is_some() {
                    tracing::debug!("record schemas are not generated; using unknown()");
                } else if let Some(name) = schema.type_name() {
                    tracing::debug!(schema_type = name, "unsupported type; using unknown()");
                }
                Expr::call(Base::Unknown)
            }
        }
    }

    /// `allOf`: chain `merge(branch)` while the accumulator is an object
    /// call, otherwise the branch replaces the accumulator.
    fn apply_merge(&self, schema: &InlineSchema, base: Expr) -> Expr {
        schema.all_of.iter().fold(base, |acc, branch| {
            let branch = self.build(branch, true);
            if acc.is_object_call() {
                acc.into_call().with(Modifier::expr("merge", branch)).into()
            } else {
                branch
            }
        })
    }

    fn apply_format(&self, schema: &InlineSchema, call: &mut Call) {
        let Some(format) = schema.format.as_deref() else {
            return;
        };
        match format_modifier(format) {
            Some(modifier) => call.push(Modifier::bare(modifier)),
            None => tracing::warn!(format, "unsupported format; expression left unmodified"),
        }
    }
}

fn enum_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
