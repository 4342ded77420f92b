use serde::{Deserialize, Serialize};
use crate::structs::config::upstream_config::UpstreamConfig;
use crate::structs::config::verification_config::VerificationConfig;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub verification: VerificationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upstream: UpstreamConfig::default(),
            verification: VerificationConfig::default(),
        }
    }
}
