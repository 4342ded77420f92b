use async_trait::async_trait;
use crate::errors::VerifierResult;
use crate::structs::github::compare_response::CompareResponse;
use crate::structs::github::issue_comment::IssueComment;
use crate::structs::github::pull_request::PullRequest;
use crate::structs::github::release::Release;

/// The GitHub REST surface consumed by the verifier.
#[async_trait]
pub trait GithubApi: Send + Sync {

    /// First open pull request whose head branch matches, if any.
    async fn find_pull_request(&self, owner: &str, repo: &str, head_branch: &str) -> VerifierResult<Option<PullRequest>>;

    async fn list_comments(&self, owner: &str, repo: &str, number: u64) -> VerifierResult<Vec<IssueComment>>;

    async fn create_comment(&self, owner: &str, repo: &str, number: u64, body: &str) -> VerifierResult<IssueComment>;

    /// Unified diff between two refs, with per-file patches and change counts.
    async fn compare_commits(&self, owner: &str, repo: &str, base: &str, head: &str) -> VerifierResult<CompareResponse>;

    async fn get_file_content(&self, owner: &str, repo: &str, path: &str, git_ref: &str) -> VerifierResult<String>;

    async fn list_releases(&self, owner: &str, repo: &str) -> VerifierResult<Vec<Release>>;
}
