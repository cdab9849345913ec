// Concrete customizations
pub mod bridges;
