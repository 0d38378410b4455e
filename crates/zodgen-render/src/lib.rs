//! zodgen-render - Source printers for compiled validator statements
//!
//! This crate provides:
//! - [`Render`] trait turning an ordered statement list into source text
//! - [`TypeScriptPrinter`] emitting a zod module

mod render;
mod typescript;

pub use render::Render;
pub use typescript::{IMPORT_HEADER, TypeScriptPrinter};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Render, TypeScriptPrinter};
}
