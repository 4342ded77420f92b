use std::env;
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::GITHUB_TOKEN_ENV;
use crate::enums::commands::Commands;
use crate::errors::{ErrorHandler, VerifierError, VerifierResult};
use crate::helpers::repo_helper::RepoHelper;
use crate::services::cherry_pick_verifier::CherryPickVerifier;
use crate::services::github_client::GithubClient;
use crate::structs::config::config::Config;
use crate::structs::verify_options::VerifyOptions;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {

    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> VerifierResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command().await,
            Commands::Verify {
                upstream_owner,
                upstream_repo,
                base_branch,
                pr_branch,
                ignored_paths,
                token,
            } => {
                self.verify_command(upstream_owner, upstream_repo, base_branch, pr_branch, ignored_paths, token)
                    .await
            }
            Commands::Validate => self.validate_command().await,
        };

        if let Err(e) = &result {
            ErrorHandler::handle_error(e);
        }

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    async fn init_command(&self) -> VerifierResult<()> {
        log::info!("🚀 Initializing pickcheck configuration...");

        let path = ConfigManager::create_sample_config()?;
        log::info!("✅ Configuration file created at: {}", path.display());
        log::info!("📝 Edit the configuration to point at your upstream repository.");
        log::info!("🔧 Run 'pickcheck validate' to check your configuration.");

        Ok(())
    }

    async fn validate_command(&self) -> VerifierResult<()> {
        log::info!("🔍 Validating pickcheck configuration...");

        let config = ConfigManager::load()?;
        ConfigManager::validate_config(&config)?;

        log::info!("✅ Configuration is valid");
        Ok(())
    }

    async fn verify_command(
        &self,
        upstream_owner: Option<String>,
        upstream_repo: Option<String>,
        base_branch: Option<String>,
        pr_branch: Option<String>,
        ignored_paths: Option<String>,
        token: Option<String>,
    ) -> VerifierResult<()> {
        let config = ConfigManager::load()?;
        let token = Self::resolve_token(token)?;
        let options = Self::build_verify_options(
            &config,
            upstream_owner,
            upstream_repo,
            base_branch,
            pr_branch,
            ignored_paths,
        )?;

        let api = Arc::new(GithubClient::new(token));
        let verifier = CherryPickVerifier::new(api, options);
        verifier.verify().await?;

        Ok(())
    }

    fn resolve_token(flag: Option<String>) -> VerifierResult<String> {
        flag.or_else(|| env::var(GITHUB_TOKEN_ENV).ok())
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                VerifierError::config_error(
                    "GitHub token not provided",
                    Some(GITHUB_TOKEN_ENV),
                    Some("Pass --token or export GITHUB_TOKEN"),
                )
            })
    }

    fn build_verify_options(
        config: &Config,
        upstream_owner: Option<String>,
        upstream_repo: Option<String>,
        base_branch: Option<String>,
        pr_branch: Option<String>,
        ignored_paths: Option<String>,
    ) -> VerifierResult<VerifyOptions> {
        let (repo_owner, repo_name) = RepoHelper::current_repository()?;

        let upstream_owner = upstream_owner
            .or_else(|| config.upstream.owner.clone())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                VerifierError::config_error(
                    "Upstream owner not configured",
                    Some("upstream.owner"),
                    Some("Pass --upstream-owner or set [upstream] owner in the config file"),
                )
            })?;

        let upstream_repo = upstream_repo
            .or_else(|| config.upstream.repo.clone())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                VerifierError::config_error(
                    "Upstream repository not configured",
                    Some("upstream.repo"),
                    Some("Pass --upstream-repo or set [upstream] repo in the config file"),
                )
            })?;

        let ignored_paths = match ignored_paths {
            Some(raw) => Self::parse_ignored_paths(&raw),
            None => config.verification.ignored_paths.clone(),
        };

        Ok(VerifyOptions {
            repo_owner,
            repo_name,
            upstream_owner,
            upstream_repo,
            base_branch: base_branch.unwrap_or_else(|| config.verification.base_branch.clone()),
            pr_branch: pr_branch.unwrap_or_else(|| config.verification.pr_branch.clone()),
            ignored_paths,
        })
    }

    fn parse_ignored_paths(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_ignore_list() {
        assert_eq!(
            CommandRunner::parse_ignored_paths("docs/, CHANGELOG.md ,,src/generated/"),
            vec!["docs/", "CHANGELOG.md", "src/generated/"]
        );
    }

    #[test]
    fn empty_ignore_flag_yields_no_rules() {
        assert!(CommandRunner::parse_ignored_paths("").is_empty());
        assert!(CommandRunner::parse_ignored_paths(" , ").is_empty());
    }

    #[test]
    fn token_flag_wins_over_missing_env() {
        let token = CommandRunner::resolve_token(Some("abc123".to_string())).unwrap();
        assert_eq!(token, "abc123");
    }

    #[test]
    fn explicitly_empty_token_flag_is_rejected() {
        assert!(CommandRunner::resolve_token(Some(String::new())).is_err());
    }
}
