use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{VerifierError, VerifierResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn load() -> VerifierResult<Config> {
        let Some(path) = Self::config_path() else {
            return Ok(Config::default());
        };

        if path.exists() {
            log::info!("📋 Loading config from: {}", path.display());
            return Self::load_from_path(&path);
        }

        Ok(Config::default())
    }

    pub fn load_from_path(path: &Path) -> VerifierResult<Config> {
        let content = fs::read_to_string(path).map_err(|e| VerifierError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn create_sample_config() -> VerifierResult<PathBuf> {
        let sample_config = r#"# Pickcheck Configuration

[upstream]
# Upstream repository whose release tags define the cherry-picked changes
owner = "example-org"
repo = "example-project"

[verification]
# Base branch of the target repository
base_branch = "main"

# Head branch of the cherry-pick PR to verify
pr_branch = "auto-cherry-pick"

# Paths excluded from verification. Entries ending in "/" match directories,
# anything else matches an exact path.
ignored_paths = [".github/", "CHANGELOG.md"]
"#;

        let path = Self::config_path().ok_or_else(|| {
            VerifierError::system_error("resolve config path", "no home directory available")
        })?;

        if path.exists() {
            return Err(VerifierError::config_error(
                &format!("Configuration file already exists at {}", path.display()),
                None,
                Some("Remove the existing file first if you want a fresh sample"),
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, sample_config)?;

        Ok(path)
    }

    pub fn validate_config(config: &Config) -> VerifierResult<()> {
        if config.verification.base_branch.is_empty() {
            return Err(VerifierError::config_error(
                "Base branch must not be empty",
                Some("verification.base_branch"),
                None,
            ));
        }

        if config.verification.pr_branch.is_empty() {
            return Err(VerifierError::config_error(
                "PR branch must not be empty",
                Some("verification.pr_branch"),
                None,
            ));
        }

        if config.upstream.owner.as_deref().unwrap_or("").is_empty()
            || config.upstream.repo.as_deref().unwrap_or("").is_empty()
        {
            log::warn!("⚠️ Upstream repository not configured; --upstream-owner/--upstream-repo will be required");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_full_config() {
        let file = write_config(
            r#"
[upstream]
owner = "acme"
repo = "widgets"

[verification]
base_branch = "develop"
pr_branch = "port-v2"
ignored_paths = ["docs/", "README.md"]
"#,
        );

        let config = ConfigManager::load_from_path(file.path()).unwrap();
        assert_eq!(config.upstream.owner.as_deref(), Some("acme"));
        assert_eq!(config.upstream.repo.as_deref(), Some("widgets"));
        assert_eq!(config.verification.base_branch, "develop");
        assert_eq!(config.verification.pr_branch, "port-v2");
        assert_eq!(config.verification.ignored_paths, vec!["docs/", "README.md"]);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let file = write_config("[upstream]\nowner = \"acme\"\n");

        let config = ConfigManager::load_from_path(file.path()).unwrap();
        assert_eq!(config.verification.base_branch, "main");
        assert_eq!(config.verification.pr_branch, "auto-cherry-pick");
        assert!(config.verification.ignored_paths.is_empty());
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let file = write_config("not valid = [toml");
        assert!(ConfigManager::load_from_path(file.path()).is_err());
    }

    #[test]
    fn default_config_passes_validation() {
        assert!(ConfigManager::validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn empty_branch_fails_validation() {
        let mut config = Config::default();
        config.verification.pr_branch = String::new();
        assert!(ConfigManager::validate_config(&config).is_err());
    }
}
