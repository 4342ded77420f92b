use crate::structs::github::issue_comment::IssueComment;
use crate::structs::github::release::Release;

pub struct VersionExtractor;

impl VersionExtractor {

    /// Scan PR comments in original order; the first non-empty match wins.
    pub fn extract_from_comments(comments: &[IssueComment], label: &str) -> Option<String> {
        comments
            .iter()
            .filter_map(|comment| comment.body.as_deref())
            .find_map(|body| Self::extract_from_text(body, label).filter(|v| !v.is_empty()))
    }

    /// A line qualifies if it starts with the exact label prefix. With two or
    /// more backticks the token between the first pair is returned, otherwise
    /// the last whitespace-separated field on the line.
    pub fn extract_from_text(text: &str, label: &str) -> Option<String> {
        for line in text.lines() {
            if !line.starts_with(label) {
                continue;
            }

            let parts: Vec<&str> = line.split('`').collect();
            if parts.len() >= 3 {
                return Some(parts[1].to_string());
            }

            if let Some(field) = line.split_whitespace().last() {
                return Some(field.to_string());
            }
        }

        None
    }

    /// Tag immediately preceding the target in lexicographic release order.
    pub fn previous_tag(releases: &[Release], target_tag: &str) -> Option<String> {
        let mut tags: Vec<&str> = releases.iter().map(|r| r.tag_name.as_str()).collect();
        tags.sort_unstable();

        let position = tags.iter().position(|tag| *tag == target_tag)?;
        if position == 0 {
            return None;
        }
        Some(tags[position - 1].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET_LABEL: &str = "📦 Target Release Version:";

    fn comment(id: u64, body: &str) -> IssueComment {
        IssueComment {
            id,
            body: Some(body.to_string()),
            created_at: None,
        }
    }

    fn release(tag: &str) -> Release {
        Release {
            tag_name: tag.to_string(),
            name: None,
            prerelease: false,
            published_at: None,
        }
    }

    #[test]
    fn extracts_backtick_quoted_token() {
        let text = "Automated cherry-pick\n📦 Target Release Version: `v1.2.3`\nmore text";
        assert_eq!(
            VersionExtractor::extract_from_text(text, TARGET_LABEL),
            Some("v1.2.3".to_string())
        );
    }

    #[test]
    fn falls_back_to_last_whitespace_field() {
        let text = "📦 Target Release Version: v1.2.3";
        assert_eq!(
            VersionExtractor::extract_from_text(text, TARGET_LABEL),
            Some("v1.2.3".to_string())
        );
    }

    #[test]
    fn single_backtick_uses_last_field() {
        let text = "📦 Target Release Version: `v1.2.3";
        assert_eq!(
            VersionExtractor::extract_from_text(text, TARGET_LABEL),
            Some("`v1.2.3".to_string())
        );
    }

    #[test]
    fn label_must_start_the_line() {
        let text = "note: 📦 Target Release Version: `v1.2.3`";
        assert_eq!(VersionExtractor::extract_from_text(text, TARGET_LABEL), None);
    }

    #[test]
    fn first_matching_comment_wins() {
        let comments = vec![
            comment(1, "unrelated"),
            comment(2, "📦 Target Release Version: `v2.0.0`"),
            comment(3, "📦 Target Release Version: `v9.9.9`"),
        ];
        assert_eq!(
            VersionExtractor::extract_from_comments(&comments, TARGET_LABEL),
            Some("v2.0.0".to_string())
        );
    }

    #[test]
    fn comments_without_body_are_skipped() {
        let comments = vec![
            IssueComment { id: 1, body: None, created_at: None },
            comment(2, "📦 Target Release Version: `v2.0.0`"),
        ];
        assert_eq!(
            VersionExtractor::extract_from_comments(&comments, TARGET_LABEL),
            Some("v2.0.0".to_string())
        );
    }

    #[test]
    fn no_match_yields_none() {
        let comments = vec![comment(1, "nothing relevant here")];
        assert_eq!(VersionExtractor::extract_from_comments(&comments, TARGET_LABEL), None);
    }

    #[test]
    fn previous_tag_is_lexicographic_predecessor() {
        let releases = vec![release("v1.2.0"), release("v1.0.0"), release("v1.1.0")];
        assert_eq!(
            VersionExtractor::previous_tag(&releases, "v1.2.0"),
            Some("v1.1.0".to_string())
        );
    }

    #[test]
    fn previous_tag_of_earliest_release_is_none() {
        let releases = vec![release("v1.0.0"), release("v1.1.0")];
        assert_eq!(VersionExtractor::previous_tag(&releases, "v1.0.0"), None);
    }

    #[test]
    fn previous_tag_of_unknown_target_is_none() {
        let releases = vec![release("v1.0.0")];
        assert_eq!(VersionExtractor::previous_tag(&releases, "v9.0.0"), None);
    }
}
