pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";
pub const GITHUB_API_VERSION: &str = "2022-11-28";
pub const GITHUB_ACCEPT_JSON: &str = "application/vnd.github+json";
pub const GITHUB_ACCEPT_RAW: &str = "application/vnd.github.raw+json";

pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const GITHUB_REPOSITORY_ENV: &str = "GITHUB_REPOSITORY";

pub const DEFAULT_BASE_BRANCH: &str = "main";
pub const DEFAULT_PR_BRANCH: &str = "auto-cherry-pick";

pub const TARGET_VERSION_LABEL: &str = "📦 Target Release Version:";
pub const PREVIOUS_VERSION_LABEL: &str = "📦 Previous Release Version:";

pub const PULL_REQUEST_PAGE_SIZE: u8 = 10;
pub const RELEASE_PAGE_SIZE: u8 = 100;

pub const USER_AGENT: &str = concat!("pickcheck-cli/", env!("CARGO_PKG_VERSION"));

pub const CONFIG_DIR_NAME: &str = ".pickcheck";
pub const CONFIG_FILE_NAME: &str = "config.toml";
