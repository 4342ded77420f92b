use serde::{Deserialize, Serialize};
use crate::structs::github::branch_ref::BranchRef;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,

    #[serde(default)]
    pub title: Option<String>,

    pub head: BranchRef,

    #[serde(default)]
    pub html_url: Option<String>,
}
