// Deal pipeline view - Table of in-flight deals
use crate::domain::app_config::AppConfig;
use crate::presentation::view::{Block, Panel, TabView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub id: u32,
    pub company: String,
    pub stage: String,
    /// Whole pounds.
    pub value: u64,
}

impl Deal {
    pub fn new(id: u32, company: &str, stage: &str, value: u64) -> Self {
        Self {
            id,
            company: company.to_string(),
            stage: stage.to_string(),
            value,
        }
    }
}

#[derive(Debug)]
pub struct DealPipelineView {
    deals: Vec<Deal>,
}

impl Default for DealPipelineView {
    fn default() -> Self {
        Self {
            deals: vec![
                Deal::new(1, "EcoTech Solutions", "Initial Contact", 5_000_000),
                Deal::new(2, "CircularWare", "Proposal", 3_000_000),
                Deal::new(3, "GreenBuild Systems", "Negotiation", 7_000_000),
            ],
        }
    }
}

impl DealPipelineView {
    pub fn deals(&self) -> &[Deal] {
        &self.deals
    }

    /// Move a deal to `stage`. Returns false if no deal has `id`.
    pub fn advance(&mut self, id: u32, stage: &str) -> bool {
        match self.deals.iter_mut().find(|d| d.id == id) {
            Some(deal) => {
                deal.stage = stage.to_string();
                true
            }
            None => false,
        }
    }
}

impl TabView for DealPipelineView {
    fn render(&self, _config: &AppConfig) -> Panel {
        let rows = self
            .deals
            .iter()
            .map(|deal| {
                vec![
                    deal.company.clone(),
                    deal.stage.clone(),
                    format_pounds(deal.value),
                ]
            })
            .collect();

        Panel::new("Deal Pipeline").with_block(Block::Table {
            columns: vec!["Company".into(), "Stage".into(), "Value".into()],
            rows,
        })
    }
}

/// `5000000` -> `£5,000,000`
fn format_pounds(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    out.push('£');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
