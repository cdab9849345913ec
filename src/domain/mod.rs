// Domain layer - Configuration schema a customization is authored against
pub mod app_config;
pub mod chart;
pub mod client;
pub mod custom_data;
pub mod tab;
