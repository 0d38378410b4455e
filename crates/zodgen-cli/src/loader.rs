//! Document loading and validation

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use zodgen_core::{Document, ParameterLocation, ParameterOrReference};

/// Errors that can occur while loading a document
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid document:\n  - {}", errors.join("\n  - "))]
    Invalid { errors: Vec<String> },
}

/// Result type alias for loading
pub type LoadResult<T> = Result<T, LoadError>;

/// Serialization of a document on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Pick the format from the file extension, falling back to the content
    pub fn detect(path: &Path, content: &str) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                InputFormat::Yaml
            }
            _ if content.trim_start().starts_with('{') => InputFormat::Json,
            _ => InputFormat::Yaml,
        }
    }
}

/// Read, parse and validate the document at `path`
pub fn load(path: impl AsRef<Path>) -> LoadResult<Document> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let format = InputFormat::detect(path, &content);
    tracing::debug!(path = %path.display(), ?format, "loading document");

    from_str(&content, format)
}

/// Parse and validate a document
pub fn from_str(content: &str, format: InputFormat) -> LoadResult<Document> {
    let document: Document = match format {
        InputFormat::Json => serde_json::from_str(content)?,
        InputFormat::Yaml => serde_yaml::from_str(content)?,
    };

    let errors = validate(&document);
    if !errors.is_empty() {
        return Err(LoadError::Invalid { errors });
    }

    Ok(document)
}

/// Structural problems that make a document unusable, empty when valid
pub fn validate(document: &Document) -> Vec<String> {
    let mut errors = Vec::new();

    match document.openapi.as_deref() {
        None => errors.push("missing `openapi` version field".to_string()),
        Some(version) if !version.starts_with("3.") => errors.push(format!(
            "unsupported OpenAPI version '{version}', expected 3.x"
        )),
        Some(_) => {}
    }

    let mut operation_ids: HashMap<&str, String> = HashMap::new();

    for (template, item) in &document.paths {
        if !template.starts_with('/') {
            errors.push(format!("path '{template}' must start with '/'"));
        }

        for (method, operation) in item.operations() {
            let location = format!("{method} {template}");

            if let Some(id) = operation.operation_id.as_deref() {
                match operation_ids.get(id) {
                    Some(first) => errors.push(format!(
                        "operationId '{id}' of {location} is already used by {first}"
                    )),
                    None => {
                        operation_ids.insert(id, location.clone());
                    }
                }
            }

            check_parameters(&operation.parameters, &location, &mut errors);
        }

        check_parameters(&item.parameters, template, &mut errors);
    }

    errors
}

fn check_parameters(parameters: &[ParameterOrReference], owner: &str, errors: &mut Vec<String>) {
    for entry in parameters {
        let ParameterOrReference::Parameter(parameter) = entry else {
            continue;
        };
        if parameter.name.is_empty() {
            errors.push(format!("{owner} has a parameter without a name"));
        } else if parameter.location == ParameterLocation::Path && !parameter.required {
            errors.push(format!(
                "path parameter '{}' of {owner} must be required",
                parameter.name
            ));
        }
    }
}
