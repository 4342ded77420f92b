pub struct ReportLogger {}

impl ReportLogger {

    /// Echo the rendered report so operators retain the output even when
    /// posting the PR comment fails afterwards.
    pub fn print_report(report: &str) {
        println!("\n🔍 CHERRY-PICK VERIFICATION REPORT");
        println!("{}", "=".repeat(60));
        println!("{}", report);
        println!("{}", "=".repeat(60));
    }
}
