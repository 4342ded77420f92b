use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use crate::config::constants::{
    GITHUB_ACCEPT_JSON, GITHUB_ACCEPT_RAW, GITHUB_API_BASE_URL, GITHUB_API_VERSION,
    PULL_REQUEST_PAGE_SIZE, RELEASE_PAGE_SIZE, USER_AGENT,
};
use crate::errors::{VerifierError, VerifierResult};
use crate::structs::github::compare_response::CompareResponse;
use crate::structs::github::issue_comment::IssueComment;
use crate::structs::github::new_comment::NewComment;
use crate::structs::github::pull_request::PullRequest;
use crate::structs::github::release::Release;
use crate::traits::github_api::GithubApi;

pub struct GithubClient {
    client: Client,
    base_url: String,
    token: String,
}

impl GithubClient {

    pub fn new(token: String) -> Self {
        Self {
            client: Client::new(),
            base_url: GITHUB_API_BASE_URL.to_string(),
            token,
        }
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.token))
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .header("User-Agent", USER_AGENT)
    }

    async fn expect_success(operation: &str, response: Response) -> VerifierResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        let reason = if body.is_empty() { status.to_string() } else { body };

        Err(VerifierError::network_error(operation, Some(&url), Some(status.as_u16()), &reason))
    }

    async fn get_json<T: DeserializeOwned>(&self, operation: &str, url: String) -> VerifierResult<T> {
        let response = self
            .authorized(self.client.get(&url))
            .header("Accept", GITHUB_ACCEPT_JSON)
            .send()
            .await?;

        let response = Self::expect_success(operation, response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl GithubApi for GithubClient {

    async fn find_pull_request(&self, owner: &str, repo: &str, head_branch: &str) -> VerifierResult<Option<PullRequest>> {
        let url = format!(
            "{}/repos/{}/{}/pulls?head={}:{}&state=open&per_page={}",
            self.base_url, owner, repo, owner, head_branch, PULL_REQUEST_PAGE_SIZE
        );

        let mut pulls: Vec<PullRequest> = self.get_json("list pull requests", url).await?;
        if pulls.is_empty() {
            return Ok(None);
        }
        Ok(Some(pulls.remove(0)))
    }

    async fn list_comments(&self, owner: &str, repo: &str, number: u64) -> VerifierResult<Vec<IssueComment>> {
        let url = format!("{}/repos/{}/{}/issues/{}/comments", self.base_url, owner, repo, number);
        self.get_json("list PR comments", url).await
    }

    async fn create_comment(&self, owner: &str, repo: &str, number: u64, body: &str) -> VerifierResult<IssueComment> {
        let url = format!("{}/repos/{}/{}/issues/{}/comments", self.base_url, owner, repo, number);
        let request_body = NewComment { body: body.to_string() };

        let response = self
            .authorized(self.client.post(&url))
            .header("Accept", GITHUB_ACCEPT_JSON)
            .json(&request_body)
            .send()
            .await?;

        let response = Self::expect_success("create PR comment", response).await?;
        Ok(response.json::<IssueComment>().await?)
    }

    async fn compare_commits(&self, owner: &str, repo: &str, base: &str, head: &str) -> VerifierResult<CompareResponse> {
        let url = format!("{}/repos/{}/{}/compare/{}...{}", self.base_url, owner, repo, base, head);
        self.get_json("compare commits", url).await
    }

    async fn get_file_content(&self, owner: &str, repo: &str, path: &str, git_ref: &str) -> VerifierResult<String> {
        let url = format!("{}/repos/{}/{}/contents/{}?ref={}", self.base_url, owner, repo, path, git_ref);

        let response = self
            .authorized(self.client.get(&url))
            .header("Accept", GITHUB_ACCEPT_RAW)
            .send()
            .await?;

        let response = Self::expect_success("read file content", response).await?;
        Ok(response.text().await?)
    }

    async fn list_releases(&self, owner: &str, repo: &str) -> VerifierResult<Vec<Release>> {
        let url = format!("{}/repos/{}/{}/releases?per_page={}", self.base_url, owner, repo, RELEASE_PAGE_SIZE);
        self.get_json("list releases", url).await
    }
}
