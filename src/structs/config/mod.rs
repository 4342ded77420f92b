pub mod config;
pub mod upstream_config;
pub mod verification_config;
