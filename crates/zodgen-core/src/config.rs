//! Generation options

use serde::{Deserialize, Serialize};

/// How a non-required value is marked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NullableMode {
    /// `.nullish()`: the value may be `null` or absent
    #[default]
    Nullish,

    /// `.optional()`: the value may be absent
    Optional,
}

impl NullableMode {
    /// Name of the zero-argument modifier for this mode
    pub fn modifier_name(&self) -> &'static str {
        match self {
            NullableMode::Nullish => "nullish",
            NullableMode::Optional => "optional",
        }
    }
}

impl std::fmt::Display for NullableMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.modifier_name())
    }
}

impl std::str::FromStr for NullableMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nullish" => Ok(NullableMode::Nullish),
            "optional" => Ok(NullableMode::Optional),
            other => Err(format!(
                "unknown nullable mode '{other}', expected 'nullish' or 'optional'"
            )),
        }
    }
}

/// Options for one generation run
///
/// The value is read-only for the whole run and passed explicitly down to
/// the expression builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOptions {
    /// Emit one statement per component schema
    #[serde(default = "default_enabled")]
    pub generate_components: bool,

    /// Emit one statement per operation with path parameters
    #[serde(default = "default_enabled")]
    pub generate_paths: bool,

    /// Emit one statement per operation with query parameters
    #[serde(default = "default_enabled")]
    pub generate_queries: bool,

    /// Modifier used for non-required values
    #[serde(default)]
    pub nullable_mode: NullableMode,
}

fn default_enabled() -> bool {
    true
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            generate_components: default_enabled(),
            generate_paths: default_enabled(),
            generate_queries: default_enabled(),
            nullable_mode: NullableMode::default(),
        }
    }
}

impl GenerateOptions {
    /// Default options: every section, nullish mode
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with every section disabled
    pub fn none() -> Self {
        Self {
            generate_components: false,
            generate_paths: false,
            generate_queries: false,
            nullable_mode: NullableMode::default(),
        }
    }

    /// Create options from JSON bytes
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
    }

    pub fn with_components(mut self, enabled: bool) -> Self {
        self.generate_components = enabled;
        self
    }

    pub fn with_paths(mut self, enabled: bool) -> Self {
        self.generate_paths = enabled;
        self
    }

    pub fn with_queries(mut self, enabled: bool) -> Self {
        self.generate_queries = enabled;
        self
    }

    pub fn with_nullable_mode(mut self, mode: NullableMode) -> Self {
        self.nullable_mode = mode;
        self
    }
}
