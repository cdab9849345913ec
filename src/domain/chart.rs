// Chart definition domain models
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single data row: field name to value.
pub type DataRow = BTreeMap<String, DataValue>;

/// Build a [`DataRow`] from a fixed list of fields.
pub fn row<const N: usize>(fields: [(&str, DataValue); N]) -> DataRow {
    fields
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Number(f64),
    Text(String),
}

impl DataValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DataValue::Number(n) => Some(*n),
            DataValue::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DataValue::Text(s) => Some(s),
            DataValue::Number(_) => None,
        }
    }
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Number(n) => write!(f, "{}", n),
            DataValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for DataValue {
    fn from(value: f64) -> Self {
        DataValue::Number(value)
    }
}

impl From<i64> for DataValue {
    fn from(value: i64) -> Self {
        DataValue::Number(value as f64)
    }
}

impl From<&str> for DataValue {
    fn from(value: &str) -> Self {
        DataValue::Text(value.to_string())
    }
}

impl From<String> for DataValue {
    fn from(value: String) -> Self {
        DataValue::Text(value)
    }
}

/// Chart kinds the generic chart widget can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Area,
    Pie,
}

impl ChartKind {
    /// Parse the authored `type` string. Matching is exact and lowercase.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "bar" => Some(ChartKind::Bar),
            "line" => Some(ChartKind::Line),
            "area" => Some(ChartKind::Area),
            "pie" => Some(ChartKind::Pie),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Area => "area",
            ChartKind::Pie => "pie",
        }
    }

    /// Pie charts colour categories (rows); every other kind colours series.
    pub fn colors_per_row(&self) -> bool {
        matches!(self, ChartKind::Pie)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a chart gets when its palette is shorter than its colour slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFallback {
    /// Slot `i` takes `colors[i % colors.len()]`.
    #[default]
    Cycle,
    /// Slots past the end of the palette repeat its last colour.
    Clamp,
}

/// Namespace a chart definition is declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChartScope {
    Dashboard,
    Analytics,
}

impl ChartScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartScope::Dashboard => "dashboard",
            ChartScope::Analytics => "analytics",
        }
    }

    /// Qualified chart name, e.g. `analytics.revenueGrowth`.
    pub fn qualify(&self, name: &str) -> String {
        format!("{}.{}", self.as_str(), name)
    }
}

/// A chart as authored in the configuration. `chart_type` is kept as the
/// raw string so unsupported kinds can be reported by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDefinition {
    #[serde(rename = "type")]
    pub chart_type: String,
    pub data_keys: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub data: Vec<DataRow>,
}

impl ChartDefinition {
    pub fn new(
        chart_type: impl Into<String>,
        data_keys: Vec<String>,
        colors: Vec<String>,
        data: Vec<DataRow>,
    ) -> Self {
        Self {
            chart_type: chart_type.into(),
            data_keys,
            colors,
            data,
        }
    }

    /// Every `(row index, key)` pair where a data key is absent from a row.
    pub fn missing_fields(&self) -> Vec<(usize, &str)> {
        let mut missing = Vec::new();
        for (index, row) in self.data.iter().enumerate() {
            for key in &self.data_keys {
                if !row.contains_key(key) {
                    missing.push((index, key.as_str()));
                }
            }
        }
        missing
    }
}
