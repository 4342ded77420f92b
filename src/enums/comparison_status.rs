/// Per-file verification outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonStatus {
    /// Every upstream change found in the PR branch.
    Matched,
    /// File present in the PR branch but upstream changes incomplete.
    Partial,
    /// File absent from the PR branch while present upstream.
    Missing,
}

impl ComparisonStatus {
    pub fn exists_in_pr(&self) -> bool {
        !matches!(self, Self::Missing)
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Matched => "🟢",
            Self::Partial => "🟡",
            Self::Missing => "🔴",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Matched => "Perfect",
            Self::Partial => "Partial",
            Self::Missing => "Missing",
        }
    }
}
