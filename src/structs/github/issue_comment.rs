use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueComment {
    pub id: u64,

    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
