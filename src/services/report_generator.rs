use crate::enums::comparison_status::ComparisonStatus;
use crate::enums::overall_status::OverallStatus;
use crate::structs::file_comparison::FileComparison;

pub struct ReportGenerator;

impl ReportGenerator {

    pub fn render(target: &str, previous: &str, comparisons: &[FileComparison]) -> String {
        let mut report = String::new();

        report.push_str("## 🔍 Cherry-Pick Verification Report\n");
        report.push_str(&format!("📦 **Upstream Changes:** `{}...{}`\n\n", previous, target));

        let total_files = comparisons.len();
        let mut files_in_pr = 0;
        let mut changes_matched = 0;

        report.push_str("### 📋 **File-by-File Analysis:**\n\n");

        for comparison in comparisons {
            report.push_str(&format!("#### `{}`\n", comparison.path));
            report.push_str("- **Upstream has changes:** ✅ Yes\n");

            if comparison.status.exists_in_pr() {
                files_in_pr += 1;
                report.push_str("- **File exists in PR:** ✅ Yes\n");

                if comparison.status == ComparisonStatus::Matched {
                    changes_matched += 1;
                    report.push_str("- **Changes match:** ✅ Yes\n");
                } else {
                    report.push_str("- **Changes match:** ❌ No\n");
                }
            } else {
                report.push_str("- **File exists in PR:** ❌ No\n");
            }

            report.push_str(&format!(
                "- **Status:** {} {} - {}\n\n",
                comparison.status.emoji(),
                comparison.status.label(),
                comparison.diff_summary
            ));
        }

        report.push_str("---\n");
        report.push_str("### 📊 **Summary:**\n");
        report.push_str(&format!("- **Total files changed upstream:** {}\n", total_files));
        report.push_str(&format!("- **Files present in PR:** {}/{}\n", files_in_pr, total_files));
        // Denominator is the number of files present in the PR, not the total.
        report.push_str(&format!("- **Files with matching changes:** {}/{}\n", changes_matched, files_in_pr));

        let overall = OverallStatus::from_counts(total_files, files_in_pr, changes_matched);
        report.push_str(&format!("\n{}", overall.banner()));

        report
    }
}
