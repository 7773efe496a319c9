use std::path::Path;

use serde::Deserialize;

use mdoc::ParseOptions;
use relnote::MergeOptions;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "relnote.toml";

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Recognize `{#id}` heading attributes in fragments.
    #[serde(default = "default_heading_ids")]
    pub heading_ids: bool,

    /// Prefix of the documentation link in inserted package headings.
    #[serde(default = "default_package_url_prefix")]
    pub package_url_prefix: String,

    /// Suffix identifying fragment files.
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

fn default_heading_ids() -> bool {
    true
}

fn default_package_url_prefix() -> String {
    "/pkg/".to_string()
}

fn default_suffix() -> String {
    ".md".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            heading_ids: default_heading_ids(),
            package_url_prefix: default_package_url_prefix(),
            suffix: default_suffix(),
        }
    }
}

impl Config {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            heading_ids: self.heading_ids,
            ..ParseOptions::default()
        }
    }

    pub fn merge_options(&self) -> MergeOptions {
        MergeOptions {
            parse: self.parse_options(),
            package_url_prefix: self.package_url_prefix.clone(),
            suffix: self.suffix.clone(),
        }
    }
}

/// Load the configuration from `explicit`, or from [`DEFAULT_CONFIG_FILE`]
/// if it exists. A missing default file means all defaults.
pub fn load(explicit: Option<&Path>) -> Result<Config, String> {
    let path = match explicit {
        Some(path) => path,
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                return Ok(Config::default());
            }
            default
        }
    };
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
    parse(&content).map_err(|e| format!("{}: {}", path.display(), e))
}

pub fn parse(content: &str) -> Result<Config, String> {
    toml::from_str(content).map_err(|e| format!("TOML parse error: {}", e))
}
