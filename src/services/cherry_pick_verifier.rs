use std::collections::HashMap;
use std::sync::Arc;
use crate::config::constants::{PREVIOUS_VERSION_LABEL, TARGET_VERSION_LABEL};
use crate::enums::comparison_status::ComparisonStatus;
use crate::errors::{VerifierError, VerifierResult};
use crate::logger::report_logger::ReportLogger;
use crate::services::path_filter::PathFilter;
use crate::services::patch_comparator::PatchComparator;
use crate::services::report_generator::ReportGenerator;
use crate::services::version_extractor::VersionExtractor;
use crate::structs::file_comparison::FileComparison;
use crate::structs::github::compare_file::CompareFile;
use crate::structs::github::issue_comment::IssueComment;
use crate::structs::verify_options::VerifyOptions;
use crate::traits::github_api::GithubApi;

pub struct CherryPickVerifier {
    api: Arc<dyn GithubApi>,
    options: VerifyOptions,
    path_filter: PathFilter,
}

impl CherryPickVerifier {

    pub fn new(api: Arc<dyn GithubApi>, options: VerifyOptions) -> Self {
        let path_filter = PathFilter::new(options.ignored_paths.clone());
        Self { api, options, path_filter }
    }

    /// Run the full verification sequence and return the rendered report.
    ///
    /// Failures before the comparison loop abort the run; per-file retrieval
    /// failures inside the loop degrade to a missing verdict for that file.
    pub async fn verify(&self) -> VerifierResult<String> {
        let opts = &self.options;

        log::info!("🔍 Looking for PR with branch: {} in {}/{}", opts.pr_branch, opts.repo_owner, opts.repo_name);
        let pr = self
            .api
            .find_pull_request(&opts.repo_owner, &opts.repo_name, &opts.pr_branch)
            .await?
            .ok_or_else(|| {
                VerifierError::lookup_error("pull request", &opts.pr_branch, "no open PR found for branch")
            })?;

        let pr_head_sha = pr.head.sha.clone();
        log::info!("🔍 Using PR head SHA: {}", pr_head_sha);

        let comments = self.api.list_comments(&opts.repo_owner, &opts.repo_name, pr.number).await?;

        let target_tag = VersionExtractor::extract_from_comments(&comments, TARGET_VERSION_LABEL)
            .ok_or_else(|| {
                VerifierError::lookup_error("target release version", TARGET_VERSION_LABEL, "not found in PR comments")
            })?;

        let previous_tag = self.resolve_previous_tag(&comments, &target_tag).await?;

        log::info!("🔍 Comparing {}...{} from upstream", previous_tag, target_tag);
        let compare = self
            .api
            .compare_commits(&opts.upstream_owner, &opts.upstream_repo, &previous_tag, &target_tag)
            .await?;

        let mut pr_patches: Option<HashMap<String, String>> = None;
        let mut comparisons: Vec<FileComparison> = Vec::new();

        for file in &compare.files {
            if self.path_filter.is_ignored(&file.filename) {
                continue;
            }

            if let Some(comparison) = self.analyze_file(file, &pr_head_sha, &target_tag, &mut pr_patches).await {
                comparisons.push(comparison);
            }
        }

        let report = ReportGenerator::render(&target_tag, &previous_tag, &comparisons);

        ReportLogger::print_report(&report);

        self.api.create_comment(&opts.repo_owner, &opts.repo_name, pr.number, &report).await?;
        log::info!("✅ Verification comment posted to PR #{}", pr.number);

        Ok(report)
    }

    async fn analyze_file(
        &self,
        file: &CompareFile,
        pr_head_sha: &str,
        target_tag: &str,
        pr_patches: &mut Option<HashMap<String, String>>,
    ) -> Option<FileComparison> {
        let opts = &self.options;
        let path = &file.filename;

        log::info!("🔍 Analyzing changes for file: {}", path);

        let Some(upstream_patch) = file.patch.as_deref() else {
            log::warn!("⚠️  No patch data for file: {}", path);
            return None;
        };

        log::info!("🔍 Getting PR content for {} from {}/{}@{}", path, opts.repo_owner, opts.repo_name, pr_head_sha);
        if let Err(e) = self.api.get_file_content(&opts.repo_owner, &opts.repo_name, path, pr_head_sha).await {
            log::error!("❌ Failed to get PR content: {}", e);

            if self.exists_upstream(path, target_tag).await {
                return Some(FileComparison {
                    path: path.clone(),
                    status: ComparisonStatus::Missing,
                    diff_summary: format!(
                        "File missing in PR (upstream has {} additions, {} deletions)",
                        file.additions, file.deletions
                    ),
                });
            }

            log::warn!("⚠️ File doesn't exist in upstream either, skipping: {}", path);
            return None;
        }

        let pr_patch = self.pr_patch_for(pr_patches, pr_head_sha, path).await;
        let verdict = PatchComparator::compare(upstream_patch, &pr_patch, file.additions, file.deletions);

        let status = if verdict.applied {
            ComparisonStatus::Matched
        } else {
            ComparisonStatus::Partial
        };

        Some(FileComparison {
            path: path.clone(),
            status,
            diff_summary: verdict.summary,
        })
    }

    async fn resolve_previous_tag(&self, comments: &[IssueComment], target_tag: &str) -> VerifierResult<String> {
        if let Some(tag) = VersionExtractor::extract_from_comments(comments, PREVIOUS_VERSION_LABEL) {
            return Ok(tag);
        }

        log::info!("🔍 Previous release version not in PR comments, resolving from upstream releases");
        let releases = self
            .api
            .list_releases(&self.options.upstream_owner, &self.options.upstream_repo)
            .await?;

        VersionExtractor::previous_tag(&releases, target_tag).ok_or_else(|| {
            VerifierError::lookup_error("previous release version", target_tag, "could not determine previous tag")
        })
    }

    async fn exists_upstream(&self, path: &str, target_tag: &str) -> bool {
        self.api
            .get_file_content(&self.options.upstream_owner, &self.options.upstream_repo, path, target_tag)
            .await
            .is_ok()
    }

    /// PR-side patches come from one compare call between the base branch and
    /// the PR head, fetched on first use. A path absent from that diff yields
    /// an empty patch.
    async fn pr_patch_for(
        &self,
        cache: &mut Option<HashMap<String, String>>,
        pr_head_sha: &str,
        path: &str,
    ) -> String {
        if cache.is_none() {
            let opts = &self.options;
            log::info!("🔍 Fetching PR branch diff {}...{}", opts.base_branch, pr_head_sha);

            let patches = match self
                .api
                .compare_commits(&opts.repo_owner, &opts.repo_name, &opts.base_branch, pr_head_sha)
                .await
            {
                Ok(compare) => compare
                    .files
                    .into_iter()
                    .filter_map(|f| f.patch.map(|patch| (f.filename, patch)))
                    .collect(),
                Err(e) => {
                    log::error!("❌ Failed to get PR branch diff: {}", e);
                    HashMap::new()
                }
            };

            *cache = Some(patches);
        }

        cache
            .as_ref()
            .and_then(|patches| patches.get(path))
            .cloned()
            .unwrap_or_default()
    }
}
