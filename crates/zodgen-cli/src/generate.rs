//! `generate` and `check` command implementations

use crate::config::Settings;
use crate::loader;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use zodgen_core::{CompileError, Document, generate, resolve_document};
use zodgen_render::{Render, TypeScriptPrinter};

/// Outcome of a generate run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub output: PathBuf,
    pub statements: usize,
    pub bytes: usize,
}

/// Outcome of a check run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub openapi: String,
    pub schemas: usize,
    pub paths: usize,
    pub operations: usize,
}

/// Compile `settings.input` and write the module to `settings.output`.
///
/// Nothing is written when loading or compilation fails.
pub fn run(settings: &Settings) -> Result<Summary> {
    let document = loader::load(&settings.input)
        .with_context(|| format!("Failed to load {}", settings.input.display()))?;

    let statements = generate(&document, &settings.options)
        .inspect_err(|err| log_compile_error(&settings.input, err))
        .with_context(|| format!("Failed to compile {}", settings.input.display()))?;

    let printer = if settings.banners {
        TypeScriptPrinter::new()
    } else {
        TypeScriptPrinter::without_banners()
    };
    let source = printer.render(&statements);

    write_output(&settings.output, &source)?;

    tracing::info!(
        input = %settings.input.display(),
        output = %settings.output.display(),
        statements = statements.len(),
        bytes = source.len(),
        "generated validators"
    );

    Ok(Summary {
        output: settings.output.clone(),
        statements: statements.len(),
        bytes: source.len(),
    })
}

/// Write `source`, creating missing parent directories
fn write_output(path: &Path, source: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(path, source).with_context(|| format!("Failed to write {}", path.display()))
}

/// Load `input` and make sure every reference resolves
pub fn check(input: &Path) -> Result<CheckReport> {
    let document =
        loader::load(input).with_context(|| format!("Failed to load {}", input.display()))?;

    resolve_document(&document)
        .inspect_err(|err| log_compile_error(input, err))
        .with_context(|| format!("Unresolvable references in {}", input.display()))?;

    Ok(report(&document))
}

fn log_compile_error(input: &Path, err: &CompileError) {
    tracing::error!(
        input = %input.display(),
        kind = err.kind(),
        error = %err,
        "compilation failed"
    );
}

fn report(document: &Document) -> CheckReport {
    CheckReport {
        openapi: document.openapi.clone().unwrap_or_default(),
        schemas: document.schemas().map_or(0, |s| s.len()),
        paths: document.paths.len(),
        operations: document
            .paths
            .values()
            .map(|item| item.operations().count())
            .sum(),
    }
}

#[cfg(test)]
#[path = "generate/generate_tests.rs"]
mod generate_tests;
