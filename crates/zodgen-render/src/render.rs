//! Render trait

use zodgen_core::Statement;

/// Trait for printing a batch of statements as one source file
pub trait Render: Send + Sync {
    /// Render `statements` in order into a complete file
    fn render(&self, statements: &[Statement]) -> String;

    /// Conventional extension of the produced file, without the dot
    fn file_extension(&self) -> &'static str;
}
