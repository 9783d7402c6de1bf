//! Site configuration.
//!
//! Settings live in an optional `hub.toml` at the site root. Every key has a
//! default, so a site that follows the standard layout needs no config file
//! at all and the generator runs with no arguments.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! site_name = "AI Hub"
//! default_description = "A curated, public resource of AI tools and use-cases."
//!
//! [paths]                   # All relative to the site root
//! tools_data = "assets/data.tools.json"
//! use_cases_data = "assets/data.usecases.json"
//! tools_output = "tools"
//! use_cases_output = "use-cases"
//!
//! [render]
//! escape_fields = false     # HTML-escape record text instead of inserting it verbatim
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [paths]
//! tools_output = "catalog"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// File name looked up in the site root.
pub const CONFIG_FILE: &str = "hub.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `hub.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Branding shown in the header, footer and every page title.
    pub site_name: String,
    /// Description meta used when a record has no summary.
    pub default_description: String,
    /// Input and output locations.
    pub paths: PathsConfig,
    /// How record text is inserted into pages.
    pub render: RenderConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "AI Hub".to_string(),
            default_description: "A curated, public resource of AI tools and use-cases."
                .to_string(),
            paths: PathsConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site_name.trim().is_empty() {
            return Err(ConfigError::Validation("site_name must not be empty".into()));
        }
        let paths = [
            ("paths.tools_data", &self.paths.tools_data),
            ("paths.use_cases_data", &self.paths.use_cases_data),
            ("paths.tools_output", &self.paths.tools_output),
            ("paths.use_cases_output", &self.paths.use_cases_output),
        ];
        for (key, value) in paths {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        let outputs = [
            ("paths.tools_output", &self.paths.tools_output),
            ("paths.use_cases_output", &self.paths.use_cases_output),
        ];
        for (key, value) in outputs {
            if !is_single_dir(value) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be one directory directly under the site root, got {value:?}"
                )));
            }
        }
        if Path::new(&self.paths.tools_output) == Path::new(&self.paths.use_cases_output) {
            return Err(ConfigError::Validation(
                "paths.tools_output and paths.use_cases_output must differ".into(),
            ));
        }
        Ok(())
    }
}

/// Whether `value` names exactly one directory below the site root.
fn is_single_dir(value: &str) -> bool {
    let mut components = Path::new(value).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Input and output locations, relative to the site root.
///
/// Pages link to each other and to shared assets with `../`, so each output
/// directory must sit one level below the site root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    pub tools_data: String,
    pub use_cases_data: String,
    pub tools_output: String,
    pub use_cases_output: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            tools_data: "assets/data.tools.json".to_string(),
            use_cases_data: "assets/data.usecases.json".to_string(),
            tools_output: "tools".to_string(),
            use_cases_output: "use-cases".to_string(),
        }
    }
}

/// Absolute locations for one run, resolved against a site root.
#[derive(Debug, Clone, PartialEq)]
pub struct SitePaths {
    pub tools_data: PathBuf,
    pub use_cases_data: PathBuf,
    pub tools_output: PathBuf,
    pub use_cases_output: PathBuf,
}

impl PathsConfig {
    pub fn resolve(&self, root: &Path) -> SitePaths {
        SitePaths {
            tools_data: root.join(&self.tools_data),
            use_cases_data: root.join(&self.use_cases_data),
            tools_output: root.join(&self.tools_output),
            use_cases_output: root.join(&self.use_cases_output),
        }
    }
}

/// Rendering settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Escape `<`, `>`, `&` and quotes in record text. Off by default: record
    /// text is trusted and may carry inline markup.
    pub escape_fields: bool,
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Lay `hub.toml` values over the stock defaults in place.
///
/// Sections such as `[paths]` merge key by key, so overriding one path keeps
/// the other three. Any other value replaces the default outright.
pub fn merge_toml(defaults: &mut toml::Value, overrides: toml::Value) {
    match (defaults, overrides) {
        (toml::Value::Table(section), toml::Value::Table(overrides)) => {
            for (key, value) in overrides {
                match section.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        section.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

/// Read `hub.toml` from the site root as raw TOML.
///
/// A site without the file gets `Ok(None)` and runs on defaults.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let content = match fs::read_to_string(root.join(CONFIG_FILE)) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(toml::from_str(&content)?))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let mut merged = base;
    if let Some(overrides) = overlay {
        merge_toml(&mut merged, overrides);
    }
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `hub.toml` in the site root.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `hub.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# AI Hub page generator configuration
# ===================================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Branding used in the header, the footer and every page <title>.
site_name = "AI Hub"

# Description meta for records that have no summary.
default_description = "A curated, public resource of AI tools and use-cases."

# ---------------------------------------------------------------------------
# Paths (relative to the site root)
# ---------------------------------------------------------------------------
[paths]
# JSON array of tool records.
tools_data = "assets/data.tools.json"

# JSON array of use-case records.
use_cases_data = "assets/data.usecases.json"

# Where tool pages are written, one <slug>.html per tool.
# Pages link back with "../", so keep this one level below the root.
tools_output = "tools"

# Where use-case pages are written, one <slug>.html per use-case.
use_cases_output = "use-cases"

# ---------------------------------------------------------------------------
# Rendering
# ---------------------------------------------------------------------------
[render]
# Record text is inserted verbatim, so it may carry inline HTML.
# Set to true to HTML-escape it instead.
escape_fields = false
"##
}
