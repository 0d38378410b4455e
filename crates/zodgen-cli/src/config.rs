//! `zodgen.toml` parsing and command-line overrides

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use zodgen_core::{GenerateOptions, NullableMode};

/// File looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "zodgen.toml";

/// zodgen.toml structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub generate: GenerateSection,
}

/// `[generate]` table
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct GenerateSection {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub components: Option<bool>,
    pub paths: Option<bool>,
    pub queries: Option<bool>,
    pub nullable_mode: Option<NullableMode>,
    pub banners: Option<bool>,
}

impl ConfigFile {
    /// Load config from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config: {:?}", path.as_ref()))?;

        Self::from_str(&content)
    }

    /// Parse config from string
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    /// Load `explicit` if given, else `zodgen.toml` in `dir` when present
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "using config file");
            return Self::from_file(candidate);
        }

        Ok(Self::default())
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub components: bool,
    pub paths: bool,
    pub queries: bool,
    pub nullable_mode: Option<NullableMode>,
    pub no_banners: bool,
}

impl Overrides {
    fn selects_sections(&self) -> bool {
        self.components || self.paths || self.queries
    }
}

/// Everything a generate run needs
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub options: GenerateOptions,
    pub banners: bool,
}

impl Settings {
    /// Merge file values with command-line overrides.
    ///
    /// Section toggles are a selection: the command line wins when it names
    /// any section, then the file, and with neither every section is on.
    pub fn resolve(file: &ConfigFile, overrides: &Overrides) -> Result<Self> {
        let section = &file.generate;

        let input = overrides
            .input
            .clone()
            .or_else(|| section.input.clone())
            .context("No input document given (use --input or `input` in zodgen.toml)")?;

        let output = overrides
            .output
            .clone()
            .or_else(|| section.output.clone())
            .context("No output file given (use --output or `output` in zodgen.toml)")?;

        let file_selects = section.components.is_some()
            || section.paths.is_some()
            || section.queries.is_some();

        let (components, paths, queries) = if overrides.selects_sections() {
            (overrides.components, overrides.paths, overrides.queries)
        } else if file_selects {
            (
                section.components.unwrap_or(false),
                section.paths.unwrap_or(false),
                section.queries.unwrap_or(false),
            )
        } else {
            (true, true, true)
        };

        let nullable_mode = overrides
            .nullable_mode
            .or(section.nullable_mode)
            .unwrap_or_default();

        let banners = !overrides.no_banners && section.banners.unwrap_or(true);

        Ok(Self {
            input,
            output,
            options: GenerateOptions::none()
                .with_components(components)
                .with_paths(paths)
                .with_queries(queries)
                .with_nullable_mode(nullable_mode),
            banners,
        })
    }
}
