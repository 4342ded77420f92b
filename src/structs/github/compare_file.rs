use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareFile {
    pub filename: String,

    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub additions: u64,

    #[serde(default)]
    pub deletions: u64,

    #[serde(default)]
    pub changes: u64,

    /// Absent for binary or oversized files.
    #[serde(default)]
    pub patch: Option<String>,
}
