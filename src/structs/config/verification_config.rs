use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct VerificationConfig {
    #[serde(default = "ConfigHelper::default_base_branch")]
    pub base_branch: String,

    #[serde(default = "ConfigHelper::default_pr_branch")]
    pub pr_branch: String,

    #[serde(default = "ConfigHelper::default_ignored_paths")]
    pub ignored_paths: Vec<String>,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            base_branch: ConfigHelper::default_base_branch(),
            pr_branch: ConfigHelper::default_pr_branch(),
            ignored_paths: ConfigHelper::default_ignored_paths(),
        }
    }
}
