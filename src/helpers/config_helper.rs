use crate::config::constants::{DEFAULT_BASE_BRANCH, DEFAULT_PR_BRANCH};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_base_branch() -> String {
        DEFAULT_BASE_BRANCH.to_string()
    }

    pub fn default_pr_branch() -> String {
        DEFAULT_PR_BRANCH.to_string()
    }

    pub fn default_ignored_paths() -> Vec<String> {
        vec![]
    }
}
