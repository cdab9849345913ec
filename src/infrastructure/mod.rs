// Infrastructure layer - Host settings and logging
pub mod config;
pub mod logging;
