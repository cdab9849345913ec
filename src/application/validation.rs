// Customization validation - Cross-reference checks collected in one pass

use crate::application::tab_registry::{ResolveError, TabRegistry};
use crate::domain::app_config::AppConfig;
use crate::domain::chart::ChartKind;
use crate::infrastructure::config::HostSettings;
use std::collections::HashSet;

/// A single authoring defect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationIssue {
    #[error("display field '{field}' must not be empty")]
    EmptyDisplayField { field: String },

    #[error("tab id '{id}' is declared more than once")]
    DuplicateTabId { id: String },

    #[error("tab '{id}' has no registered component")]
    UnregisteredTabId { id: String },

    #[error("component for tab '{id}' is registered more than once")]
    DuplicateRegistration { id: String },

    #[error("chart '{chart}' has unsupported type '{chart_type}'")]
    UnsupportedChartType { chart: String, chart_type: String },

    #[error("chart '{chart}' declares no data keys")]
    MissingDataKeys { chart: String },

    #[error("chart '{chart}' row {row} has no field '{key}'")]
    ChartFieldMismatch {
        chart: String,
        key: String,
        row: usize,
    },

    #[error("client id '{id}' is declared more than once")]
    DuplicateClientId { id: String },

    #[error("feature flag '{name}' is not known to the host")]
    UnknownFeatureFlag { name: String },
}

/// Every issue found while building a bundle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", render_issues(.issues))]
pub struct ValidationError {
    issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn contains(&self, issue: &ValidationIssue) -> bool {
        self.issues.contains(issue)
    }
}

fn render_issues(issues: &[ValidationIssue]) -> String {
    let plural = if issues.len() == 1 { "" } else { "s" };
    let mut out = format!("customization is invalid ({} issue{})", issues.len(), plural);
    for issue in issues {
        out.push_str(&format!("\n  - {}", issue));
    }
    out
}

impl From<Vec<ValidationIssue>> for ValidationError {
    fn from(issues: Vec<ValidationIssue>) -> Self {
        Self::new(issues)
    }
}

/// Validate `config` against a sealed `registry` and the host's settings.
///
/// Returns every violation found, in a stable order: display fields, tabs,
/// charts (dashboard then analytics, by name), clients, feature flags.
pub fn validate(
    config: &AppConfig,
    registry: &TabRegistry,
    settings: &HostSettings,
) -> Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    // Branding
    for (field, value) in config.display_fields() {
        if value.trim().is_empty() {
            issues.push(ValidationIssue::EmptyDisplayField {
                field: field.to_string(),
            });
        }
    }

    // Tabs: unique and wired
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for tab in &config.dashboard.tabs {
        if !seen.insert(tab.id.as_str()) {
            if reported.insert(tab.id.as_str()) {
                issues.push(ValidationIssue::DuplicateTabId { id: tab.id.clone() });
            }
            continue;
        }
        if let Err(ResolveError::Unregistered(id)) = registry.resolve(&tab.id) {
            issues.push(ValidationIssue::UnregisteredTabId { id });
        }
    }

    // Charts
    for (scope, name, chart) in config.charts() {
        let qualified = scope.qualify(name);

        if ChartKind::parse(&chart.chart_type).is_none() {
            issues.push(ValidationIssue::UnsupportedChartType {
                chart: qualified.clone(),
                chart_type: chart.chart_type.clone(),
            });
        }

        if chart.data_keys.is_empty() {
            issues.push(ValidationIssue::MissingDataKeys {
                chart: qualified.clone(),
            });
        }

        for (row, key) in chart.missing_fields() {
            issues.push(ValidationIssue::ChartFieldMismatch {
                chart: qualified.clone(),
                key: key.to_string(),
                row,
            });
        }

        if let Some(kind) = ChartKind::parse(&chart.chart_type) {
            let slots = if kind.colors_per_row() {
                chart.data.len()
            } else {
                chart.data_keys.len()
            };
            if chart.colors.len() < slots {
                tracing::warn!(
                    "Chart {} has {} colour(s) for {} slot(s); applying {:?} fallback",
                    qualified,
                    chart.colors.len(),
                    slots,
                    settings.color_fallback
                );
            }
        }
    }

    // Clients
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for client in &config.clients {
        if !seen.insert(client.id.as_str()) && reported.insert(client.id.as_str()) {
            issues.push(ValidationIssue::DuplicateClientId {
                id: client.id.clone(),
            });
        }
    }

    // Feature flags
    for name in config.features.keys() {
        if !settings.is_known_feature(name) {
            issues.push(ValidationIssue::UnknownFeatureFlag { name: name.clone() });
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::tab_registry::TabRegistryBuilder;
    use crate::domain::app_config::DashboardConfig;
    use crate::domain::chart::{ChartDefinition, row};
    use crate::domain::client::Client;
    use crate::domain::tab::{IconRef, Tab};
    use crate::presentation::view::{Panel, TabView, ViewFactory};

    #[derive(Default)]
    struct Stub;

    impl TabView for Stub {
        fn render(&self, _config: &AppConfig) -> Panel {
            Panel::new("stub")
        }
    }

    fn config(tab_ids: &[&str]) -> AppConfig {
        AppConfig {
            title: "Title".to_string(),
            company_name: "Company".to_string(),
            logo: "/logo.png".to_string(),
            primary_color: "#4F46E5".to_string(),
            secondary_color: "#818CF8".to_string(),
            user_name: "User".to_string(),
            dashboard: DashboardConfig {
                tabs: tab_ids
                    .iter()
                    .map(|id| Tab::new(*id, *id, "", IconRef::new("Home")))
                    .collect(),
                charts: Default::default(),
            },
            analytics: Default::default(),
            clients: vec![],
            features: Default::default(),
        }
    }

    fn registry_for(config: &AppConfig, ids: &[&str]) -> TabRegistry {
        let mut builder = TabRegistryBuilder::new();
        for id in ids {
            builder.register(id, ViewFactory::of::<Stub>()).unwrap();
        }
        builder.seal(&config.dashboard.tabs)
    }

    #[test]
    fn test_valid_config_passes() {
        let config = config(&["a", "b"]);
        let registry = registry_for(&config, &["a", "b"]);
        assert!(validate(&config, &registry, &HostSettings::default()).is_ok());
    }

    #[test]
    fn test_duplicate_tab_reported_once() {
        let config = config(&["a", "a", "a"]);
        let registry = registry_for(&config, &["a"]);

        let issues = validate(&config, &registry, &HostSettings::default()).unwrap_err();
        assert_eq!(
            issues,
            vec![ValidationIssue::DuplicateTabId { id: "a".to_string() }]
        );
    }

    #[test]
    fn test_collects_every_issue() {
        let mut config = config(&["a", "b"]);
        config.user_name = "  ".to_string();
        config.clients = vec![
            Client::new("x", "X", "Energy"),
            Client::new("x", "X again", "Energy"),
        ];
        config.features.insert("darkMode".to_string(), true);
        config.analytics.charts.insert(
            "growth".to_string(),
            ChartDefinition::new(
                "scatter3d",
                vec!["growth".to_string()],
                vec![],
                vec![row([("year", "2019".into())])],
            ),
        );
        let registry = registry_for(&config, &["a"]);

        let issues = validate(&config, &registry, &HostSettings::default()).unwrap_err();
        assert_eq!(
            issues,
            vec![
                ValidationIssue::EmptyDisplayField {
                    field: "userName".to_string()
                },
                ValidationIssue::UnregisteredTabId { id: "b".to_string() },
                ValidationIssue::UnsupportedChartType {
                    chart: "analytics.growth".to_string(),
                    chart_type: "scatter3d".to_string(),
                },
                ValidationIssue::ChartFieldMismatch {
                    chart: "analytics.growth".to_string(),
                    key: "growth".to_string(),
                    row: 0,
                },
                ValidationIssue::DuplicateClientId { id: "x".to_string() },
                ValidationIssue::UnknownFeatureFlag {
                    name: "darkMode".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_chart_without_data_keys() {
        let mut config = config(&["a"]);
        config.dashboard.charts.insert(
            "empty".to_string(),
            ChartDefinition::new("bar", vec![], vec![], vec![row([("name", "A".into())])]),
        );
        let registry = registry_for(&config, &["a"]);

        let issues = validate(&config, &registry, &HostSettings::default()).unwrap_err();
        assert_eq!(
            issues,
            vec![ValidationIssue::MissingDataKeys {
                chart: "dashboard.empty".to_string()
            }]
        );
    }

    #[test]
    fn test_error_display_lists_issues() {
        let err = ValidationError::new(vec![
            ValidationIssue::DuplicateTabId { id: "a".to_string() },
            ValidationIssue::MissingDataKeys {
                chart: "dashboard.empty".to_string(),
            },
        ]);

        let text = err.to_string();
        assert!(text.starts_with("customization is invalid (2 issues)"));
        assert!(text.contains("tab id 'a' is declared more than once"));
        assert!(text.contains("chart 'dashboard.empty' declares no data keys"));
    }
}
