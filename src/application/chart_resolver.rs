// Chart spec resolver - Turns an authored chart into widget instructions
use crate::application::validation::ValidationIssue;
use crate::domain::chart::{ChartDefinition, ChartKind, ColorFallback, DataRow};
use crate::infrastructure::config::HostSettings;
use serde::{Deserialize, Serialize};

const DEFAULT_SERIES_COLOR: &str = "#4F46E5";

/// Everything a generic chart widget needs to draw one chart.
///
/// Key order is series order (legend, stacking) and row order is render
/// order; values are passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSpec {
    pub chart: String,
    pub kind: ChartKind,
    pub data_keys: Vec<String>,
    /// One colour per slot: per data key, or per row for pie charts.
    pub colors: Vec<String>,
    pub data: Vec<DataRow>,
}

impl RenderSpec {
    /// `(data key, colour)` pairs for series-coloured kinds.
    pub fn series(&self) -> impl Iterator<Item = (&str, &str)> {
        let per_series = !self.kind.colors_per_row();
        self.data_keys
            .iter()
            .zip(self.colors.iter())
            .filter(move |_| per_series)
            .map(|(key, color)| (key.as_str(), color.as_str()))
    }

    /// `(row, colour)` pairs for pie charts.
    pub fn slices(&self) -> impl Iterator<Item = (&DataRow, &str)> {
        let per_row = self.kind.colors_per_row();
        self.data
            .iter()
            .zip(self.colors.iter())
            .filter(move |_| per_row)
            .map(|(row, color)| (row, color.as_str()))
    }

    pub fn color_for(&self, key: &str) -> Option<&str> {
        self.series().find(|(k, _)| *k == key).map(|(_, color)| color)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpecResolver {
    fallback: ColorFallback,
    default_color: String,
}

impl Default for ChartSpecResolver {
    fn default() -> Self {
        Self::new(ColorFallback::Cycle, DEFAULT_SERIES_COLOR)
    }
}

impl ChartSpecResolver {
    pub fn new(fallback: ColorFallback, default_color: impl Into<String>) -> Self {
        Self {
            fallback,
            default_color: default_color.into(),
        }
    }

    pub fn from_settings(settings: &HostSettings) -> Self {
        Self::new(settings.color_fallback, settings.default_series_color.clone())
    }

    /// Resolve `definition`, declared under `chart`, into a [`RenderSpec`].
    ///
    /// Fails only on an unsupported chart type.
    pub fn resolve(
        &self,
        chart: &str,
        definition: &ChartDefinition,
    ) -> Result<RenderSpec, ValidationIssue> {
        let kind = ChartKind::parse(&definition.chart_type).ok_or_else(|| {
            ValidationIssue::UnsupportedChartType {
                chart: chart.to_string(),
                chart_type: definition.chart_type.clone(),
            }
        })?;

        let slots = if kind.colors_per_row() {
            definition.data.len()
        } else {
            definition.data_keys.len()
        };

        Ok(RenderSpec {
            chart: chart.to_string(),
            kind,
            data_keys: definition.data_keys.clone(),
            colors: self.palette(&definition.colors, slots),
            data: definition.data.clone(),
        })
    }

    fn palette(&self, colors: &[String], slots: usize) -> Vec<String> {
        let Some(last) = colors.last() else {
            return vec![self.default_color.clone(); slots];
        };

        (0..slots)
            .map(|slot| match self.fallback {
                ColorFallback::Cycle => colors[slot % colors.len()].clone(),
                ColorFallback::Clamp => colors.get(slot).unwrap_or(last).clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::row;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn deals_by_stage() -> ChartDefinition {
        ChartDefinition::new(
            "bar",
            strings(&["count"]),
            strings(&["#4F46E5"]),
            vec![
                row([("name", "A".into()), ("count", 10.0.into())]),
                row([("name", "B".into()), ("count", 5.0.into())]),
            ],
        )
    }

    #[test]
    fn test_preserves_declaration_order() {
        let spec = ChartSpecResolver::default()
            .resolve("dealsByStage", &deals_by_stage())
            .unwrap();

        assert_eq!(spec.kind, ChartKind::Bar);
        assert_eq!(spec.data_keys, vec!["count"]);
        let names: Vec<_> = spec.data.iter().map(|r| r["name"].to_string()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(spec.color_for("count"), Some("#4F46E5"));
    }

    #[test]
    fn test_cycle_fallback() {
        let definition = ChartDefinition::new(
            "line",
            strings(&["a", "b", "c"]),
            strings(&["#111111", "#222222"]),
            vec![],
        );

        let spec = ChartSpecResolver::default().resolve("c", &definition).unwrap();
        assert_eq!(spec.colors, vec!["#111111", "#222222", "#111111"]);
    }

    #[test]
    fn test_clamp_fallback() {
        let definition = ChartDefinition::new(
            "area",
            strings(&["a", "b", "c"]),
            strings(&["#111111", "#222222"]),
            vec![],
        );

        let resolver = ChartSpecResolver::new(ColorFallback::Clamp, "#000000");
        let spec = resolver.resolve("c", &definition).unwrap();
        assert_eq!(spec.colors, vec!["#111111", "#222222", "#222222"]);
    }

    #[test]
    fn test_empty_palette_uses_default_color() {
        let definition = ChartDefinition::new("bar", strings(&["a", "b"]), vec![], vec![]);

        let spec = ChartSpecResolver::new(ColorFallback::Cycle, "#abcdef")
            .resolve("c", &definition)
            .unwrap();
        assert_eq!(spec.colors, vec!["#abcdef", "#abcdef"]);
    }

    #[test]
    fn test_pie_colors_follow_rows() {
        let definition = ChartDefinition::new(
            "pie",
            strings(&["value"]),
            strings(&["#4F46E5", "#818CF8"]),
            vec![
                row([("name", "Energy".into()), ("value", 40.0.into())]),
                row([("name", "Circular".into()), ("value", 30.0.into())]),
                row([("name", "Built".into()), ("value", 30.0.into())]),
            ],
        );

        let spec = ChartSpecResolver::default()
            .resolve("investmentByTheme", &definition)
            .unwrap();
        assert_eq!(spec.colors, vec!["#4F46E5", "#818CF8", "#4F46E5"]);
        assert_eq!(spec.slices().count(), 3);
        assert_eq!(spec.series().count(), 0);
    }

    #[test]
    fn test_unsupported_type() {
        let mut definition = deals_by_stage();
        definition.chart_type = "scatter3d".to_string();

        let err = ChartSpecResolver::default()
            .resolve("dashboard.dealsByStage", &definition)
            .unwrap_err();
        assert_eq!(
            err,
            ValidationIssue::UnsupportedChartType {
                chart: "dashboard.dealsByStage".to_string(),
                chart_type: "scatter3d".to_string(),
            }
        );
    }
}
