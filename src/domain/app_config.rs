// Root configuration domain model
use super::chart::{ChartDefinition, ChartScope};
use super::client::Client;
use super::tab::Tab;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Feature-flag name to enabled.
pub type FeatureFlags = BTreeMap<String, bool>;

/// Named chart definitions, ordered by name.
pub type ChartMap = BTreeMap<String, ChartDefinition>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub tabs: Vec<Tab>,
    #[serde(default)]
    pub charts: ChartMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default)]
    pub charts: ChartMap,
}

/// Everything a host shell needs to brand and lay out a dashboard.
///
/// Built once at startup and never mutated afterwards; there are no setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub title: String,
    pub company_name: String,
    pub logo: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub user_name: String,
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Branding fields that must carry display text, with their field names.
    pub fn display_fields(&self) -> [(&'static str, &str); 6] {
        [
            ("title", self.title.as_str()),
            ("companyName", self.company_name.as_str()),
            ("logo", self.logo.as_str()),
            ("primaryColor", self.primary_color.as_str()),
            ("secondaryColor", self.secondary_color.as_str()),
            ("userName", self.user_name.as_str()),
        ]
    }

    /// Absent flags are off.
    pub fn feature_enabled(&self, name: &str) -> bool {
        self.features.get(name).copied().unwrap_or(false)
    }

    pub fn tab(&self, id: &str) -> Option<&Tab> {
        self.dashboard.tabs.iter().find(|t| t.id == id)
    }

    pub fn chart(&self, scope: ChartScope, name: &str) -> Option<&ChartDefinition> {
        match scope {
            ChartScope::Dashboard => self.dashboard.charts.get(name),
            ChartScope::Analytics => self.analytics.charts.get(name),
        }
    }

    /// Dashboard charts first, then analytics charts, each ordered by name.
    pub fn charts(&self) -> impl Iterator<Item = (ChartScope, &str, &ChartDefinition)> {
        let dashboard = self
            .dashboard
            .charts
            .iter()
            .map(|(name, chart)| (ChartScope::Dashboard, name.as_str(), chart));
        let analytics = self
            .analytics
            .charts
            .iter()
            .map(|(name, chart)| (ChartScope::Analytics, name.as_str(), chart));
        dashboard.chain(analytics)
    }
}
