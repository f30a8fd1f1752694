//! Demo script validation for extracted release items.
//!
//! Demo strings are emitted exactly as extracted. This module only checks
//! that each one parses, and reports problems according to the configured
//! [`DemoPolicy`].

mod script;

pub use script::{DOCKABLE_PREFIX, DemoIssue, DemoScript, DemoStep, TOOLBOX_DOCKABLE, TOOL_PREFIX};

use crate::appdata::ReleaseNotes;
use crate::config::DemoPolicy;
use crate::error::{Result, WelcomeError};

/// A demo script problem tied to the item that carries it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemIssue {
    /// Zero-based index into the item array.
    pub item: usize,
    pub demo: String,
    pub issue: DemoIssue,
}

/// Parse every demo in `notes` and collect the ones that fail.
pub fn find_demo_issues(notes: &ReleaseNotes) -> Vec<ItemIssue> {
    notes
        .demos()
        .enumerate()
        .filter_map(|(item, demo)| {
            let demo = demo?;
            DemoScript::parse(demo).err().map(|issue| ItemIssue {
                item,
                demo: demo.to_string(),
                issue,
            })
        })
        .collect()
}

/// Validate demo scripts according to `policy`.
///
/// # Returns
///
/// * `Ok(())` - No issues, or the policy tolerates them
/// * `Err(WelcomeError::DemoError)` - Issues found under `DemoPolicy::Fail`
pub fn check_demos(notes: &ReleaseNotes, policy: DemoPolicy) -> Result<()> {
    if policy == DemoPolicy::Ignore {
        return Ok(());
    }

    let issues = find_demo_issues(notes);
    if issues.is_empty() {
        return Ok(());
    }

    match policy {
        DemoPolicy::Fail => {
            let details: Vec<String> = issues
                .iter()
                .map(|i| format!("item {} ('{}'): {}", i.item, i.demo, i.issue))
                .collect();
            Err(WelcomeError::DemoError(details.join("; ")))
        }
        _ => {
            for i in &issues {
                tracing::warn!(item = i.item, demo = %i.demo, "malformed demo script: {}", i.issue);
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appdata::ReleaseItem;

    fn notes(demos: &[Option<&str>]) -> ReleaseNotes {
        ReleaseNotes {
            introduction: Vec::new(),
            items: demos
                .iter()
                .enumerate()
                .map(|(i, demo)| ReleaseItem {
                    text: format!("item {}", i),
                    demo: demo.map(str::to_string),
                })
                .collect(),
        }
    }

    #[test]
    fn valid_demos_have_no_issues() {
        let notes = notes(&[Some("toolbox:move"), None, Some("layers,channels")]);
        assert!(find_demo_issues(&notes).is_empty());
        assert!(check_demos(&notes, DemoPolicy::Fail).is_ok());
    }

    #[test]
    fn issues_point_at_item_index() {
        let notes = notes(&[None, Some("layers,"), Some("toolbox:")]);
        let issues = find_demo_issues(&notes);

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].item, 1);
        assert_eq!(issues[0].issue, DemoIssue::EmptyStep(1));
        assert_eq!(issues[1].item, 2);
        assert_eq!(issues[1].demo, "toolbox:");
    }

    #[test]
    fn fail_policy_returns_demo_error() {
        let notes = notes(&[Some("")]);
        let err = check_demos(&notes, DemoPolicy::Fail).unwrap_err();

        assert!(matches!(err, WelcomeError::DemoError(_)));
        assert!(err.to_string().contains("item 0"));
        assert!(err.to_string().contains("demo script is empty"));
    }

    #[test]
    fn warn_and_ignore_policies_succeed() {
        let notes = notes(&[Some(":oops")]);
        assert!(check_demos(&notes, DemoPolicy::Warn).is_ok());
        assert!(check_demos(&notes, DemoPolicy::Ignore).is_ok());
    }
}
