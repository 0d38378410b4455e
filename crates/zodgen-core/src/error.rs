//! Error types for schema compilation

use thiserror::Error;

/// Result type alias for compilation operations
pub type CompileResult<T> = Result<T, CompileError>;

/// Error type for compilation operations
///
/// Every variant is fatal: generation aborts and no partial output is produced.
/// Recoverable conditions (unknown formats, reference parameters) are logged
/// through `tracing` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// A `$ref` points at a schema that is not declared in `components.schemas`
    #[error("schema for reference {reference} not found")]
    SchemaNotFound { reference: String },

    /// A chain of references leads back to a schema that is still being resolved
    #[error("cyclic reference: {}", chain.join(" -> "))]
    CyclicReference { chain: Vec<String> },
}

impl CompileError {
    /// Short stable name of the error kind, used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            CompileError::SchemaNotFound { .. } => "schema_not_found",
            CompileError::CyclicReference { .. } => "cyclic_reference",
        }
    }
}
