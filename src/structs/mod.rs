pub mod cli;
pub mod config;
pub mod file_comparison;
pub mod github;
pub mod patch_changes;
pub mod patch_verdict;
pub mod verify_options;
