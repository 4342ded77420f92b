/// Outcome of comparing an upstream patch against the PR-branch patch for one file.
#[derive(Debug, Clone)]
pub struct PatchVerdict {
    pub applied: bool,
    pub summary: String,
    pub missing_additions: Vec<String>,
    pub missing_deletions: Vec<String>,
    pub extra_additions: usize,
}
