//! Format and constraint keyword tables.

use crate::expr::{Literal, Modifier};
use crate::schema::{ExclusiveBound, InlineSchema};
use serde_json::Number;

/// Modifier for a `format` keyword, `None` when the format is not mapped.
pub fn format_modifier(format: &str) -> Option<&'static str> {
    let modifier = match format {
        "integer" | "int8" | "int16" | "int32" | "int64" | "uint8" | "uint16" | "uint32"
        | "uint64" | "safeint" => "int",
        "date-time" => "datetime",
        "date" => "date",
        "time" => "time",
        "duration" => "duration",
        "ip" => "ip",
        "email" => "email",
        "uuid" => "uuid",
        "cuid" => "cuid",
        "cuid2" => "cuid2",
        "url" | "uri" => "url",
        _ => return None,
    };
    Some(modifier)
}

/// Source keyword of a constraint modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKeyword {
    MinItems,
    MaxItems,
    MinLength,
    MaxLength,
    Minimum,
    Maximum,
}

/// Evaluation order of constraint keywords.
pub const CONSTRAINT_TABLE: [ConstraintKeyword; 6] = [
    ConstraintKeyword::MinItems,
    ConstraintKeyword::MaxItems,
    ConstraintKeyword::MinLength,
    ConstraintKeyword::MaxLength,
    ConstraintKeyword::Minimum,
    ConstraintKeyword::Maximum,
];

impl ConstraintKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstraintKeyword::MinItems => "minItems",
            ConstraintKeyword::MaxItems => "maxItems",
            ConstraintKeyword::MinLength => "minLength",
            ConstraintKeyword::MaxLength => "maxLength",
            ConstraintKeyword::Minimum => "minimum",
            ConstraintKeyword::Maximum => "maximum",
        }
    }

    /// The modifiers this keyword produces on `schema`, with their arguments.
    ///
    /// `minimum`/`maximum` become strict (`gt`/`lt`) when a 3.0 exclusive flag
    /// is set. A 3.1 numeric exclusive bound adds its own strict modifier
    /// after the plain inclusive one.
    pub fn modifiers(&self, schema: &InlineSchema) -> Vec<Modifier> {
        let bounds = match self {
            ConstraintKeyword::MinItems => single("min", &schema.min_items),
            ConstraintKeyword::MaxItems => single("max", &schema.max_items),
            ConstraintKeyword::MinLength => single("min", &schema.min_length),
            ConstraintKeyword::MaxLength => single("max", &schema.max_length),
            ConstraintKeyword::Minimum => {
                bound(&schema.minimum, &schema.exclusive_minimum, "gt", "gte")
            }
            ConstraintKeyword::Maximum => {
                bound(&schema.maximum, &schema.exclusive_maximum, "lt", "lte")
            }
        };
        bounds
            .into_iter()
            .map(|(name, value)| Modifier::literal(name, Literal::Number(value)))
            .collect()
    }
}

fn single(name: &'static str, value: &Option<Number>) -> Vec<(&'static str, Number)> {
    value.iter().map(|v| (name, v.clone())).collect()
}

fn bound(
    plain: &Option<Number>,
    exclusive: &Option<ExclusiveBound>,
    strict: &'static str,
    inclusive: &'static str,
) -> Vec<(&'static str, Number)> {
    match exclusive {
        Some(ExclusiveBound::Value(limit)) => plain
            .iter()
            .map(|value| (inclusive, value.clone()))
            .chain(std::iter::once((strict, limit.clone())))
            .collect(),
        Some(ExclusiveBound::Flag(true)) => single(strict, plain),
        Some(ExclusiveBound::Flag(false)) | None => single(inclusive, plain),
    }
}

/// Constraint modifiers for `schema`, in [`CONSTRAINT_TABLE`] order.
pub fn constraint_modifiers(schema: &InlineSchema) -> Vec<Modifier> {
    CONSTRAINT_TABLE
        .iter()
        .flat_map(|keyword| keyword.modifiers(schema))
        .collect()
}
