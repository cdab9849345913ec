use crate::domain::chart::ColorFallback;
use serde::Deserialize;
use std::path::Path;

/// Knobs the host shell supplies to the customization core.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct HostSettings {
    /// Feature flags the host knows how to honour.
    #[serde(default = "default_known_features")]
    pub known_features: Vec<String>,
    #[serde(default)]
    pub color_fallback: ColorFallback,
    /// Colour used when a chart declares no palette at all.
    #[serde(default = "default_series_color")]
    pub default_series_color: String,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_known_features() -> Vec<String> {
    ["dataImport", "analytics", "reporting", "templates"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_series_color() -> String {
    "#4F46E5".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            known_features: default_known_features(),
            color_fallback: ColorFallback::default(),
            default_series_color: default_series_color(),
            log_filter: default_log_filter(),
        }
    }
}

impl HostSettings {
    pub fn is_known_feature(&self, name: &str) -> bool {
        self.known_features.iter().any(|f| f == name)
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("DASHBOARD")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("known_features")
}

/// Load host settings from the optional `config/host` file, overridden by
/// `DASHBOARD_*` environment variables.
pub fn load_host_settings() -> anyhow::Result<HostSettings> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/host").required(false))
        .add_source(environment())
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Load host settings from an explicit file; the format follows the extension.
pub fn load_host_settings_from(path: &Path) -> anyhow::Result<HostSettings> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .build()?;

    Ok(settings.try_deserialize()?)
}
