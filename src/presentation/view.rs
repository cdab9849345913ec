// View contract between the host shell and a customization's tab content
use crate::application::chart_resolver::RenderSpec;
use crate::domain::app_config::AppConfig;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// What a view hands back to the host for the main content area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Panel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "block", rename_all = "camelCase")]
pub enum Block {
    Form {
        fields: Vec<FormField>,
        submit_label: String,
    },
    Table {
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Chart(RenderSpec),
    /// Stand-in the host draws when a chart cannot be shown.
    Placeholder {
        label: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormField {
    pub name: String,
    pub placeholder: String,
    pub input: InputKind,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InputKind {
    Number,
    Text,
    Select { options: Vec<SelectOption> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Content of a tab. The configuration is the only input a view needs;
/// anything else it keeps is its own local state.
pub trait TabView: Send + Sync {
    fn render(&self, config: &AppConfig) -> Panel;
}

/// Constructor for a tab view. The registry stores these, never instances.
#[derive(Clone)]
pub struct ViewFactory {
    name: &'static str,
    ctor: Arc<dyn Fn() -> Box<dyn TabView> + Send + Sync>,
}

impl ViewFactory {
    pub fn of<T: TabView + Default + 'static>() -> Self {
        Self {
            name: std::any::type_name::<T>(),
            ctor: Arc::new(|| Box::new(T::default()) as Box<dyn TabView>),
        }
    }

    pub fn from_fn<F>(name: &'static str, ctor: F) -> Self
    where
        F: Fn() -> Box<dyn TabView> + Send + Sync + 'static,
    {
        Self {
            name,
            ctor: Arc::new(ctor),
        }
    }

    pub fn create(&self) -> Box<dyn TabView> {
        (self.ctor)()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for ViewFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewFactory").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Blank;

    impl TabView for Blank {
        fn render(&self, config: &AppConfig) -> Panel {
            Panel::new(config.title.clone())
        }
    }

    #[test]
    fn test_factory_name_and_block_tags() {
        let factory = ViewFactory::of::<Blank>();
        assert!(factory.name().ends_with("Blank"));

        let custom = ViewFactory::from_fn("blank", || Box::new(Blank));
        assert_eq!(custom.name(), "blank");

        let json = serde_json::to_value(Block::Placeholder {
            label: "Revenue Growth Chart".to_string(),
        })
        .unwrap();
        assert_eq!(json["block"], "placeholder");
        assert_eq!(json["label"], "Revenue Growth Chart");
    }

    #[test]
    fn test_chart_block_keeps_both_tags() {
        let spec = RenderSpec {
            chart: "analytics.revenueGrowth".to_string(),
            kind: crate::domain::chart::ChartKind::Line,
            data_keys: vec!["growth".to_string()],
            colors: vec!["#4F46E5".to_string()],
            data: vec![],
        };

        let json = serde_json::to_value(Block::Chart(spec)).unwrap();
        assert_eq!(json["block"], "chart");
        assert_eq!(json["kind"], "line");
        assert_eq!(json["chart"], "analytics.revenueGrowth");
    }
}
