/// Fully resolved inputs for one verification run.
#[derive(Debug, Clone)]
pub struct VerifyOptions {
    pub repo_owner: String,
    pub repo_name: String,
    pub upstream_owner: String,
    pub upstream_repo: String,
    pub base_branch: String,
    pub pr_branch: String,
    pub ignored_paths: Vec<String>,
}
