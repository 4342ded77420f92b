use serde::{Deserialize, Serialize};
use crate::structs::github::compare_file::CompareFile;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareResponse {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub total_commits: u64,

    #[serde(default)]
    pub files: Vec<CompareFile>,
}
