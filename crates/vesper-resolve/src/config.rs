use fxhash::FxHashSet;
use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;

/// Settings for one resolver run.
///
/// Every field has a default, so an empty TOML document is a valid config:
///
/// ```toml
/// unused_prefix = "_"
/// initializer_name = "init"
/// globals = ["clock", "len"]
///
/// [lints]
/// shadowing = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    /// Names that resolve without any declaration. Defaults to the standard library globals.
    pub globals: FxHashSet<String>,

    /// Names starting with this are intentionally unused: never reported as
    /// unused, and never readable. Empty disables the convention.
    pub unused_prefix: String,

    /// Method name that makes a class method an initializer.
    pub initializer_name: String,

    pub lints: LintConfig,
}

/// Switches for the advisory diagnostics. Hard errors cannot be turned off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    pub unused: bool,
    pub shadowing: bool,
    pub unreachable: bool,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            unused: true,
            shadowing: true,
            unreachable: true,
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            globals: vesper_stdlib::GLOBAL_NAMES.iter().map(|name| name.to_string()).collect(),
            unused_prefix: "_".to_string(),
            initializer_name: "init".to_string(),
            lints: LintConfig::default(),
        }
    }
}

#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid resolver configuration: {0}")]
    #[diagnostic(
        code(vesper_resolve::config_parse),
        help("check the TOML syntax and the field names")
    )]
    Parse(String),
}

impl ResolverConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    pub fn with_global(mut self, name: impl Into<String>) -> Self {
        self.globals.insert(name.into());
        self
    }

    pub fn is_global(&self, name: &str) -> bool {
        self.globals.contains(name)
    }

    /// Whether `name` carries the intentionally-unused prefix.
    pub fn is_discarded(&self, name: &str) -> bool {
        !self.unused_prefix.is_empty() && name.starts_with(self.unused_prefix.as_str())
    }
}
