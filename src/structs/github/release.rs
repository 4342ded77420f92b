use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    pub tag_name: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub prerelease: bool,

    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}
