// Customization bundle - The validated package handed to the host shell
use crate::application::chart_resolver::{ChartSpecResolver, RenderSpec};
use crate::application::tab_registry::{ResolveError, TabRegistry, TabRegistryBuilder};
use crate::application::validation::{ValidationError, ValidationIssue, validate};
use crate::domain::app_config::AppConfig;
use crate::domain::chart::ChartScope;
use crate::domain::custom_data::AuxiliaryData;
use crate::infrastructure::config::HostSettings;
use crate::presentation::view::{Panel, ViewFactory};
use std::collections::BTreeMap;

/// A customization as authored: configuration, the tab-to-view mapping and
/// auxiliary reference data.
///
/// `components` is a list rather than a map so a key written twice in the
/// mapping is reported instead of silently overwritten.
#[derive(Clone)]
pub struct Customization {
    pub config: AppConfig,
    pub components: Vec<(String, ViewFactory)>,
    pub data: AuxiliaryData,
}

impl Customization {
    pub fn new(
        config: AppConfig,
        components: Vec<(String, ViewFactory)>,
        data: AuxiliaryData,
    ) -> Self {
        Self {
            config,
            components,
            data,
        }
    }

    /// Validate and assemble the bundle. Either every invariant holds and a
    /// complete bundle is returned, or every violation is returned.
    pub fn build(&self, settings: &HostSettings) -> Result<Bundle, ValidationError> {
        let mut issues = Vec::new();

        let mut builder = TabRegistryBuilder::new();
        for (id, factory) in &self.components {
            if builder.register(id, factory.clone()).is_err() {
                issues.push(ValidationIssue::DuplicateRegistration { id: id.clone() });
            }
        }
        let registry = builder.seal(&self.config.dashboard.tabs);

        if let Err(found) = validate(&self.config, &registry, settings) {
            issues.extend(found);
        }

        let resolver = ChartSpecResolver::from_settings(settings);
        let mut charts = BTreeMap::new();
        for (scope, name, definition) in self.config.charts() {
            let qualified = scope.qualify(name);
            // Unsupported types were already reported by validation.
            if let Ok(spec) = resolver.resolve(&qualified, definition) {
                tracing::debug!("Resolved chart {} as {}", qualified, spec.kind);
                charts.insert(qualified, spec);
            }
        }

        if !issues.is_empty() {
            tracing::warn!(
                "Rejected customization for {}: {} issue(s)",
                self.config.company_name,
                issues.len()
            );
            return Err(ValidationError::new(issues));
        }

        tracing::info!(
            "Built customization for {}: {} tab(s), {} chart(s)",
            self.config.company_name,
            registry.len(),
            charts.len()
        );

        Ok(Bundle {
            config: self.config.clone(),
            registry,
            auxiliary_data: self.data.clone(),
            charts,
        })
    }
}

/// Immutable result of [`Customization::build`].
#[derive(Debug, Clone, PartialEq)]
pub struct Bundle {
    config: AppConfig,
    registry: TabRegistry,
    auxiliary_data: AuxiliaryData,
    charts: BTreeMap<String, RenderSpec>,
}

impl Bundle {
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn registry(&self) -> &TabRegistry {
        &self.registry
    }

    pub fn auxiliary_data(&self) -> &AuxiliaryData {
        &self.auxiliary_data
    }

    /// Resolved charts keyed by qualified name (`dashboard.<name>`, `analytics.<name>`).
    pub fn charts(&self) -> &BTreeMap<String, RenderSpec> {
        &self.charts
    }

    pub fn chart(&self, scope: ChartScope, name: &str) -> Option<&RenderSpec> {
        self.charts.get(&scope.qualify(name))
    }

    /// Resolve `tab_id`, build a fresh view and render it with this bundle's config.
    pub fn render_tab(&self, tab_id: &str) -> Result<Panel, ResolveError> {
        let view = self.registry.resolve(tab_id)?.create();
        Ok(view.render(&self.config))
    }
}
