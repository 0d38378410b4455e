//! Validator expression IR.
//!
//! A small, target-agnostic representation of a composable validator: a base
//! builder call plus an ordered chain of modifier calls. Nothing here knows
//! about the syntax of the emitted language; see the `zodgen-render` crate.
//!
//! ```text
//! Expr::Call
//!   base:      String
//!   modifiers: [min(2), default("x"), nullish()]
//! ```

use serde_json::{Number, Value};

/// A compiled validator expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A bare identifier: another statement's name or a raw override.
    Identifier(String),

    /// A builder call with its modifier chain.
    Call(Call),
}

/// A base builder call followed by chained modifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub base: Base,
    pub modifiers: Vec<Modifier>,
}

/// The builder a call chain starts from.
#[derive(Debug, Clone, PartialEq)]
pub enum Base {
    String,
    Number,
    Boolean,
    Null,
    Unknown,
    Enum(Vec<String>),
    Array(Box<Expr>),
    Object(Vec<Property>),
    Union(Vec<Expr>),

    /// An identifier that further modifiers are chained onto.
    Named(String),
}

/// One member of an object builder.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    pub value: Expr,

    /// Single-line comment rendered above the member.
    pub comment: Option<String>,
}

/// A chained modifier call such as `.min(2)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Modifier {
    pub name: &'static str,
    pub args: Vec<Arg>,
}

/// A modifier argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Literal(Literal),
    Expr(Expr),
}

/// A literal value in the emitted code.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Literal>),
    Object(Vec<(String, Literal)>),
}

impl Base {
    /// Builder name of the base.
    pub fn name(&self) -> &str {
        match self {
            Base::String => "string",
            Base::Number => "number",
            Base::Boolean => "boolean",
            Base::Null => "null",
            Base::Unknown => "unknown",
            Base::Enum(_) => "enum",
            Base::Array(_) => "array",
            Base::Object(_) => "object",
            Base::Union(_) => "union",
            Base::Named(name) => name,
        }
    }
}

impl Call {
    pub fn new(base: Base) -> Self {
        Self {
            base,
            modifiers: Vec::new(),
        }
    }

    /// Append a modifier.
    pub fn push(&mut self, modifier: Modifier) {
        self.modifiers.push(modifier);
    }

    /// Builder-style [`Call::push`].
    pub fn with(mut self, modifier: Modifier) -> Self {
        self.push(modifier);
        self
    }
}

impl Modifier {
    /// A modifier without arguments, e.g. `.int()`.
    pub fn bare(name: &'static str) -> Self {
        Self {
            name,
            args: Vec::new(),
        }
    }

    /// A modifier taking one literal, e.g. `.min(2)`.
    pub fn literal(name: &'static str, literal: Literal) -> Self {
        Self {
            name,
            args: vec![Arg::Literal(literal)],
        }
    }

    /// A modifier taking one expression, e.g. `.merge(other)`.
    pub fn expr(name: &'static str, expr: Expr) -> Self {
        Self {
            name,
            args: vec![Arg::Expr(expr)],
        }
    }
}

impl Expr {
    /// Start a call chain with no modifiers.
    pub fn call(base: Base) -> Self {
        Expr::Call(Call::new(base))
    }

    pub fn as_call(&self) -> Option<&Call> {
        match self {
            Expr::Call(call) => Some(call),
            Expr::Identifier(_) => None,
        }
    }

    /// Whether this is a chain whose base is an object builder.
    pub fn is_object_call(&self) -> bool {
        matches!(
            self,
            Expr::Call(Call {
                base: Base::Object(_),
                ..
            })
        )
    }

    /// Names of the chained modifiers, in order. Empty for identifiers.
    pub fn modifier_names(&self) -> Vec<&'static str> {
        self.as_call()
            .map(|call| call.modifiers.iter().map(|m| m.name).collect())
            .unwrap_or_default()
    }

    /// Turn an identifier into a call on a named base so it can take modifiers.
    pub fn into_call(self) -> Call {
        match self {
            Expr::Call(call) => call,
            Expr::Identifier(name) => Call::new(Base::Named(name)),
        }
    }
}

impl From<Call> for Expr {
    fn from(call: Call) -> Self {
        Expr::Call(call)
    }
}

impl Literal {
    /// Convert a JSON value; `null` becomes [`Literal::Null`].
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Literal::Null,
            Value::Bool(b) => Literal::Bool(*b),
            Value::Number(n) => Literal::Number(n.clone()),
            Value::String(s) => Literal::String(s.clone()),
            Value::Array(items) => Literal::Array(items.iter().map(Literal::from_json).collect()),
            Value::Object(map) => Literal::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Literal::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Convert back to JSON, for comparing a literal with its source.
    pub fn to_json(&self) -> Value {
        match self {
            Literal::Null => Value::Null,
            Literal::Bool(b) => Value::Bool(*b),
            Literal::Number(n) => Value::Number(n.clone()),
            Literal::String(s) => Value::String(s.clone()),
            Literal::Array(items) => Value::Array(items.iter().map(Literal::to_json).collect()),
            Literal::Object(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}
