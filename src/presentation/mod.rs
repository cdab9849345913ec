// Presentation layer - Tab views and the panel model they render into
pub mod company_search;
pub mod deal_pipeline;
pub mod portfolio_performance;
pub mod view;
