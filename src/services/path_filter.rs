pub struct PathFilter {
    rules: Vec<String>,
}

impl PathFilter {

    pub fn new(rules: Vec<String>) -> Self {
        Self {
            rules: rules.into_iter().filter(|rule| !rule.is_empty()).collect(),
        }
    }

    /// A rule ending in a path separator matches as a directory prefix,
    /// anything else as an exact path.
    pub fn is_ignored(&self, path: &str) -> bool {
        self.rules.iter().any(|rule| {
            if rule.ends_with('/') {
                path.starts_with(rule.as_str())
            } else {
                path == rule
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(rules: &[&str]) -> PathFilter {
        PathFilter::new(rules.iter().map(|r| r.to_string()).collect())
    }

    #[test]
    fn directory_rule_matches_by_prefix() {
        assert!(filter(&["src/"]).is_ignored("src/a.txt"));
    }

    #[test]
    fn directory_rule_does_not_match_sibling_prefix() {
        assert!(!filter(&["src/"]).is_ignored("src2/a.txt"));
    }

    #[test]
    fn file_rule_matches_exactly() {
        assert!(filter(&["a.txt"]).is_ignored("a.txt"));
        assert!(!filter(&["b.txt"]).is_ignored("a.txt"));
    }

    #[test]
    fn empty_rule_list_ignores_nothing() {
        assert!(!filter(&[]).is_ignored("a.txt"));
    }

    #[test]
    fn empty_rule_entries_are_discarded() {
        assert!(!filter(&[""]).is_ignored("a.txt"));
    }
}
