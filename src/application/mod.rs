// Application layer - Chart resolution, tab registry and bundle assembly
pub mod bundle;
pub mod chart_resolver;
pub mod tab_registry;
pub mod validation;
