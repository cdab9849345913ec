// Company search view - Filter form with local field state
use crate::domain::app_config::AppConfig;
use crate::presentation::view::{Block, FormField, InputKind, Panel, SelectOption, TabView};

const SECTORS: [(&str, &str); 3] = [
    ("energy", "Energy Transition"),
    ("circular", "Circular Economy"),
    ("built", "Decarbonizing Built Environment"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Revenue,
    GrowthRate,
    Sector,
    Keyword,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub revenue: String,
    pub growth_rate: String,
    pub sector: String,
    pub keyword: String,
}

#[derive(Debug, Default)]
pub struct CompanySearchView {
    params: SearchParams,
}

impl CompanySearchView {
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn set_field(&mut self, field: SearchField, value: impl Into<String>) {
        let value = value.into();
        match field {
            SearchField::Revenue => self.params.revenue = value,
            SearchField::GrowthRate => self.params.growth_rate = value,
            SearchField::Sector => self.params.sector = value,
            SearchField::Keyword => self.params.keyword = value,
        }
    }

    /// Simulated search: logs the current filter and hands it back.
    pub fn search(&self) -> SearchParams {
        tracing::info!(
            revenue = %self.params.revenue,
            growth_rate = %self.params.growth_rate,
            sector = %self.params.sector,
            keyword = %self.params.keyword,
            "Searching companies"
        );
        self.params.clone()
    }
}

impl TabView for CompanySearchView {
    fn render(&self, _config: &AppConfig) -> Panel {
        let mut sectors = vec![SelectOption::new("", "Select Sector")];
        sectors.extend(SECTORS.iter().map(|(value, label)| SelectOption::new(*value, *label)));

        let fields = vec![
            FormField {
                name: "revenue".to_string(),
                placeholder: "Min Revenue (£)".to_string(),
                input: InputKind::Number,
                value: self.params.revenue.clone(),
            },
            FormField {
                name: "growthRate".to_string(),
                placeholder: "Min Growth Rate (%)".to_string(),
                input: InputKind::Number,
                value: self.params.growth_rate.clone(),
            },
            FormField {
                name: "sector".to_string(),
                placeholder: "Select Sector".to_string(),
                input: InputKind::Select { options: sectors },
                value: self.params.sector.clone(),
            },
            FormField {
                name: "keyword".to_string(),
                placeholder: "Keyword".to_string(),
                input: InputKind::Text,
                value: self.params.keyword.clone(),
            },
        ];

        Panel::new("Company Search").with_block(Block::Form {
            fields,
            submit_label: "Search".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_state_is_local() {
        let mut view = CompanySearchView::default();
        view.set_field(SearchField::Sector, "energy");
        view.set_field(SearchField::Keyword, "solar");

        assert_eq!(view.search().sector, "energy");
        assert_eq!(view.params().keyword, "solar");
        assert_eq!(CompanySearchView::default().params(), &SearchParams::default());
    }
}
