//! zodgen-cli - Loader, configuration and commands behind the `zodgen` binary
//!
//! Commands:
//! - `zodgen generate` - Compile a document into a zod module
//! - `zodgen check` - Validate a document and its references

pub mod config;
pub mod generate;
pub mod loader;

pub use config::{ConfigFile, GenerateSection, Overrides, Settings};
pub use generate::{CheckReport, Summary, check, run};
pub use loader::{InputFormat, LoadError, LoadResult, load};
