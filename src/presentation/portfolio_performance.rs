// Portfolio performance view - Analytics charts side by side
use crate::application::chart_resolver::ChartSpecResolver;
use crate::domain::app_config::AppConfig;
use crate::domain::chart::ChartScope;
use crate::presentation::view::{Block, Panel, TabView};

/// Analytics charts shown, with the label used when one is missing.
const PANELS: [(&str, &str); 2] = [
    ("revenueGrowth", "Revenue Growth Chart"),
    ("carbonReduction", "Carbon Reduction Impact Chart"),
];

#[derive(Debug, Default)]
pub struct PortfolioPerformanceView {
    resolver: ChartSpecResolver,
}

impl TabView for PortfolioPerformanceView {
    fn render(&self, config: &AppConfig) -> Panel {
        let mut panel = Panel::new("Portfolio Performance");

        for (name, label) in PANELS {
            let spec = config
                .chart(ChartScope::Analytics, name)
                .and_then(|chart| {
                    self.resolver
                        .resolve(&ChartScope::Analytics.qualify(name), chart)
                        .ok()
                });

            let block = match spec {
                Some(spec) => Block::Chart(spec),
                None => {
                    tracing::debug!("No drawable analytics chart '{}', showing placeholder", name);
                    Block::Placeholder {
                        label: label.to_string(),
                    }
                }
            };
            panel = panel.with_block(block);
        }

        panel
    }
}
