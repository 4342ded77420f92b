pub mod cherry_pick_verifier;
pub mod github_client;
pub mod path_filter;
pub mod patch_comparator;
pub mod report_generator;
pub mod version_extractor;
