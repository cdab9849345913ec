// Crate root - Validated dashboard customization bundles for a host shell

pub mod application;
pub mod customization;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::bundle::{Bundle, Customization};
pub use application::chart_resolver::{ChartSpecResolver, RenderSpec};
pub use application::tab_registry::{RegistryError, ResolveError, TabRegistry, TabRegistryBuilder};
pub use application::validation::{ValidationError, ValidationIssue};
pub use infrastructure::config::HostSettings;
pub use presentation::view::{Panel, TabView, ViewFactory};
