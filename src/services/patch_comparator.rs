use crate::structs::patch_changes::PatchChanges;
use crate::structs::patch_verdict::PatchVerdict;

pub struct PatchComparator;

impl PatchComparator {

    /// Decide whether the PR patch contains every upstream addition and
    /// deletion. Matching is by line content after trimming surrounding
    /// whitespace, not by position: cherry-picks commonly shift line numbers
    /// and context, so positional comparison would produce false negatives.
    pub fn compare(upstream_patch: &str, pr_patch: &str, additions: u64, deletions: u64) -> PatchVerdict {
        let upstream = PatchChanges::from_patch(upstream_patch);

        if pr_patch.is_empty() {
            return PatchVerdict {
                applied: false,
                summary: format!("❌ No changes found in PR branch (upstream has +{} -{})", additions, deletions),
                missing_additions: upstream.additions,
                missing_deletions: upstream.deletions,
                extra_additions: 0,
            };
        }

        let pr = PatchChanges::from_patch(pr_patch);

        let missing_additions: Vec<String> = upstream
            .additions
            .iter()
            .filter(|line| !Self::contains_trimmed(&pr.additions, line))
            .cloned()
            .collect();

        let missing_deletions: Vec<String> = upstream
            .deletions
            .iter()
            .filter(|line| !Self::contains_trimmed(&pr.deletions, line))
            .cloned()
            .collect();

        // Informational only, never part of the verdict.
        let extra_additions = pr
            .additions
            .iter()
            .filter(|line| !Self::contains_trimmed(&upstream.additions, line))
            .count();

        let applied = missing_additions.is_empty() && missing_deletions.is_empty();
        let summary = Self::build_summary(
            applied,
            additions,
            deletions,
            missing_additions.len(),
            missing_deletions.len(),
            extra_additions,
        );

        PatchVerdict {
            applied,
            summary,
            missing_additions,
            missing_deletions,
            extra_additions,
        }
    }

    fn contains_trimmed(haystack: &[String], needle: &str) -> bool {
        let needle = needle.trim();
        haystack.iter().any(|line| line.trim() == needle)
    }

    fn build_summary(
        applied: bool,
        additions: u64,
        deletions: u64,
        missing_additions: usize,
        missing_deletions: usize,
        extra_additions: usize,
    ) -> String {
        if applied {
            let mut summary = format!("✅ All changes applied correctly (+{} -{})", additions, deletions);
            if extra_additions > 0 {
                summary.push_str(&format!(" | {} extra additions in PR", extra_additions));
            }
            return summary;
        }

        let mut summary = format!("❌ Cherry-pick incomplete (+{} -{})", additions, deletions);
        if missing_additions > 0 {
            summary.push_str(&format!(" | Missing {} additions", missing_additions));
        }
        if missing_deletions > 0 {
            summary.push_str(&format!(" | Missing {} deletions", missing_deletions));
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UPSTREAM: &str = "\
@@ -10,7 +10,8 @@
 fn unchanged() {}
+fn feature() {}
+    let retries = 3;
-fn obsolete() {}
";

    #[test]
    fn patch_compared_against_itself_is_applied() {
        let verdict = PatchComparator::compare(UPSTREAM, UPSTREAM, 2, 1);
        assert!(verdict.applied);
        assert!(verdict.missing_additions.is_empty());
        assert!(verdict.missing_deletions.is_empty());
        assert!(verdict.summary.contains("✅ All changes applied correctly (+2 -1)"));
    }

    #[test]
    fn empty_pr_patch_is_not_applied() {
        let verdict = PatchComparator::compare(UPSTREAM, "", 2, 1);
        assert!(!verdict.applied);
        assert_eq!(verdict.missing_additions.len(), 2);
        assert_eq!(verdict.missing_deletions.len(), 1);
        assert!(verdict.summary.contains("No changes found in PR branch"));
        assert!(verdict.summary.contains("+2 -1"));
    }

    #[test]
    fn missing_required_addition_flips_verdict() {
        let pr_patch = "\
@@ -10,7 +10,7 @@
 fn unchanged() {}
+fn feature() {}
-fn obsolete() {}
";
        let verdict = PatchComparator::compare(UPSTREAM, pr_patch, 2, 1);
        assert!(!verdict.applied);
        assert_eq!(verdict.missing_additions, vec!["    let retries = 3;"]);
        assert!(verdict.summary.contains("Missing 1 additions"));
    }

    #[test]
    fn missing_deletion_is_reported() {
        let pr_patch = "\
@@ -10,7 +10,8 @@
+fn feature() {}
+    let retries = 3;
";
        let verdict = PatchComparator::compare(UPSTREAM, pr_patch, 2, 1);
        assert!(!verdict.applied);
        assert_eq!(verdict.missing_deletions, vec!["fn obsolete() {}"]);
        assert!(verdict.summary.contains("Missing 1 deletions"));
    }

    #[test]
    fn matching_ignores_surrounding_whitespace() {
        let pr_patch = "\
@@ -20,6 +20,8 @@
+  fn feature() {}
+let retries = 3;
-  fn obsolete() {}
";
        let verdict = PatchComparator::compare(UPSTREAM, pr_patch, 2, 1);
        assert!(verdict.applied);
    }

    #[test]
    fn extra_additions_never_fail_the_verdict() {
        let pr_patch = "\
@@ -10,7 +10,9 @@
+fn feature() {}
+    let retries = 3;
+fn unrelated_extra() {}
-fn obsolete() {}
";
        let verdict = PatchComparator::compare(UPSTREAM, pr_patch, 2, 1);
        assert!(verdict.applied);
        assert_eq!(verdict.extra_additions, 1);
        assert!(verdict.summary.contains("1 extra additions"));
    }

    #[test]
    fn duplicate_upstream_lines_match_a_single_pr_line() {
        let upstream = "@@ -1,1 +1,3 @@\n+repeat()\n+repeat()\n";
        let pr_patch = "@@ -1,1 +1,2 @@\n+repeat()\n";
        let verdict = PatchComparator::compare(upstream, pr_patch, 2, 0);
        assert!(verdict.applied);
    }
}
