// Bridges Fund Management - PE origination dashboard
use crate::application::bundle::Customization;
use crate::domain::app_config::{AnalyticsConfig, AppConfig, DashboardConfig};
use crate::domain::chart::{ChartDefinition, row};
use crate::domain::client::Client;
use crate::domain::custom_data::AuxiliaryData;
use crate::domain::tab::{IconRef, Tab};
use crate::presentation::company_search::CompanySearchView;
use crate::presentation::deal_pipeline::DealPipelineView;
use crate::presentation::portfolio_performance::PortfolioPerformanceView;
use crate::presentation::view::ViewFactory;

const PRIMARY: &str = "#4F46E5";
const SECONDARY: &str = "#818CF8";
const TERTIARY: &str = "#C7D2FE";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn config() -> AppConfig {
    let tabs = vec![
        Tab::new(
            "companySearch",
            "Company Search",
            "Find potential investments",
            IconRef::new("Search"),
        ),
        Tab::new(
            "dealPipeline",
            "Deal Pipeline",
            "Track potential investments",
            IconRef::new("FileText"),
        ),
        Tab::new(
            "portfolioPerformance",
            "Portfolio Performance",
            "Monitor existing investments",
            IconRef::new("BarChart2"),
        ),
    ];

    let mut dashboard = DashboardConfig {
        tabs,
        charts: Default::default(),
    };
    dashboard.charts.insert(
        "dealsByStage".to_string(),
        ChartDefinition::new(
            "bar",
            strings(&["count"]),
            strings(&[PRIMARY]),
            vec![
                row([("name", "Initial Contact".into()), ("count", 10.0.into())]),
                row([("name", "Proposal".into()), ("count", 5.0.into())]),
                row([("name", "Negotiation".into()), ("count", 3.0.into())]),
                row([("name", "Closed".into()), ("count", 2.0.into())]),
            ],
        ),
    );
    dashboard.charts.insert(
        "investmentByTheme".to_string(),
        ChartDefinition::new(
            "pie",
            strings(&["value"]),
            strings(&[PRIMARY, SECONDARY, TERTIARY]),
            vec![
                row([("name", "Energy Transition".into()), ("value", 40.0.into())]),
                row([("name", "Circular Economy".into()), ("value", 30.0.into())]),
                row([
                    ("name", "Decarbonizing Built Environment".into()),
                    ("value", 30.0.into()),
                ]),
            ],
        ),
    );

    let mut analytics = AnalyticsConfig::default();
    analytics.charts.insert(
        "revenueGrowth".to_string(),
        ChartDefinition::new(
            "line",
            strings(&["growth"]),
            strings(&[PRIMARY]),
            vec![
                row([("year", "2019".into()), ("growth", 20.0.into())]),
                row([("year", "2020".into()), ("growth", 18.0.into())]),
                row([("year", "2021".into()), ("growth", 25.0.into())]),
                row([("year", "2022".into()), ("growth", 30.0.into())]),
            ],
        ),
    );
    analytics.charts.insert(
        "carbonReduction".to_string(),
        ChartDefinition::new(
            "bar",
            strings(&["reduction"]),
            strings(&[SECONDARY]),
            vec![
                row([("year", "2019".into()), ("reduction", 1000.0.into())]),
                row([("year", "2020".into()), ("reduction", 1500.0.into())]),
                row([("year", "2021".into()), ("reduction", 2000.0.into())]),
                row([("year", "2022".into()), ("reduction", 2500.0.into())]),
            ],
        ),
    );

    AppConfig {
        title: "Bridges Fund Management - PE Origination".to_string(),
        company_name: "Bridges Fund Management".to_string(),
        logo: "/path/to/bridges-logo.png".to_string(),
        primary_color: PRIMARY.to_string(),
        secondary_color: SECONDARY.to_string(),
        user_name: "Kyle Bentwood".to_string(),
        dashboard,
        analytics,
        clients: vec![
            Client::new("ecotech", "EcoTech Solutions", "Energy Transition"),
            Client::new("circularware", "CircularWare", "Circular Economy"),
            Client::new(
                "greenbuild",
                "GreenBuild Systems",
                "Decarbonizing Built Environment",
            ),
        ],
        features: [
            ("dataImport", true),
            ("analytics", true),
            ("reporting", true),
            ("templates", true),
        ]
        .into_iter()
        .map(|(name, on)| (name.to_string(), on))
        .collect(),
    }
}

pub fn components() -> Vec<(String, ViewFactory)> {
    vec![
        ("companySearch".to_string(), ViewFactory::of::<CompanySearchView>()),
        ("dealPipeline".to_string(), ViewFactory::of::<DealPipelineView>()),
        (
            "portfolioPerformance".to_string(),
            ViewFactory::of::<PortfolioPerformanceView>(),
        ),
    ]
}

pub fn data() -> AuxiliaryData {
    AuxiliaryData::new()
        .with_list(
            "investmentStages",
            [
                "Initial Contact",
                "Proposal",
                "Negotiation",
                "Due Diligence",
                "Closed",
            ],
        )
        .with_list(
            "investmentThemes",
            [
                "Energy Transition",
                "Circular Economy",
                "Decarbonizing Built Environment",
            ],
        )
        .with_list(
            "performanceMetrics",
            [
                "Revenue Growth",
                "Carbon Reduction Impact",
                "Jobs Created",
                "ESG Score",
            ],
        )
}

pub fn customization() -> Customization {
    Customization::new(config(), components(), data())
}
