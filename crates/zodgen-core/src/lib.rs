//! zodgen-core - OpenAPI schema to zod validator compiler
//!
//! This crate turns the schemas of an API description into an ordered list of
//! named validator expressions:
//! - [`Document`] / [`Schema`] model the consumed part of the input
//! - [`resolve_document`] flattens `$ref`s, rejecting cycles
//! - [`ExpressionBuilder`] compiles one schema node into an [`Expr`]
//! - [`generate`] assembles the [`Statement`]s for a whole document
//!
//! Rendering the statements as source text lives in `zodgen-render`.
//!
//! ```
//! use zodgen_core::prelude::*;
//!
//! let document: Document = serde_json::from_str(
//!     r#"{ "components": { "schemas": { "Name": { "type": "string", "minLength": 2 } } } }"#,
//! )
//! .unwrap();
//!
//! let statements = generate(&document, &GenerateOptions::default()).unwrap();
//! assert_eq!(statements[0].identifier, "schemaName");
//! assert_eq!(statements[0].expression.modifier_names(), vec!["min"]);
//! ```

pub mod assemble;
pub mod builder;
pub mod config;
pub mod document;
pub mod error;
pub mod expr;
pub mod format;
pub mod naming;
pub mod resolve;
pub mod schema;

pub use assemble::{IdentifierSet, Section, Statement, generate};
pub use builder::{ExpressionBuilder, RAW_EXPRESSION_MARKER, SchemaKind};
pub use config::{GenerateOptions, NullableMode};
pub use document::{
    Components, Document, Method, Operation, Parameter, ParameterLocation, ParameterOrReference,
    PathItem,
};
pub use error::{CompileError, CompileResult};
pub use expr::{Arg, Base, Call, Expr, Literal, Modifier, Property};
pub use resolve::{Resolver, resolve, resolve_document};
pub use schema::{InlineSchema, Schema};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CompileError, CompileResult, Document, Expr, ExpressionBuilder, GenerateOptions,
        NullableMode, Schema, Section, Statement, generate,
    };
}
