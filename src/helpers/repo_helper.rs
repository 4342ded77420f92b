use std::env;
use crate::config::constants::GITHUB_REPOSITORY_ENV;
use crate::errors::{VerifierError, VerifierResult};

pub struct RepoHelper;

impl RepoHelper {
    /// Resolve the target repository identity from the runtime environment.
    pub fn current_repository() -> VerifierResult<(String, String)> {
        let full_repo = env::var(GITHUB_REPOSITORY_ENV).map_err(|_| {
            VerifierError::config_error(
                &format!("{} is not set", GITHUB_REPOSITORY_ENV),
                Some(GITHUB_REPOSITORY_ENV),
                Some("Run inside GitHub Actions or export GITHUB_REPOSITORY=owner/name"),
            )
        })?;

        Self::parse_repository(&full_repo)
    }

    pub fn parse_repository(full_repo: &str) -> VerifierResult<(String, String)> {
        let parts: Vec<&str> = full_repo.split('/').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            return Err(VerifierError::config_error(
                &format!("Invalid repository format: {}", full_repo),
                Some(GITHUB_REPOSITORY_ENV),
                Some("Expected the \"owner/name\" form"),
            ));
        }

        Ok((parts[0].to_string(), parts[1].to_string()))
    }
}
