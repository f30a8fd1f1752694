//! Release selection and release-note extraction.

use super::escape::{escape_text, strip_demo};
use super::tree::Element;

/// One highlight of a release: escaped text and its optional demo script.
///
/// Keeping the demo next to the text makes the item and demo arrays of the
/// generated file index-aligned by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseItem {
    pub text: String,
    pub demo: Option<String>,
}

/// Escaped release notes for a single version.
///
/// Empty when the requested version is not in the document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReleaseNotes {
    /// Introduction paragraphs, escaped.
    pub introduction: Vec<String>,
    /// Release highlights, escaped, in document order.
    pub items: Vec<ReleaseItem>,
}

impl ReleaseNotes {
    /// Whether nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.introduction.is_empty() && self.items.is_empty()
    }

    /// Demo scripts, index-aligned with `items`.
    pub fn demos(&self) -> impl Iterator<Item = Option<&str>> {
        self.items.iter().map(|item| item.demo.as_deref())
    }

    /// Number of items carrying a demo script.
    pub fn demo_count(&self) -> usize {
        self.items.iter().filter(|item| item.demo.is_some()).count()
    }
}

/// Find the release entry for `version`.
///
/// First match in document order wins. Later entries with the same version
/// are ignored (and logged at debug level); a missing `releases` container
/// or a missing version is not an error.
pub fn find_release<'a>(root: &'a Element, version: &str) -> Option<&'a Element> {
    let Some(releases) = root.first_child("releases") else {
        tracing::warn!(root = %root.name, "document has no <releases> container");
        return None;
    };

    let mut matching = releases
        .children_named("release")
        .filter(|release| release.attribute("version") == Some(version));

    let selected = matching.next();
    let duplicates = matching.count();
    if duplicates > 0 {
        tracing::debug!(
            version,
            duplicates,
            "ignoring later release entries with the same version"
        );
    }
    selected
}

/// Extract escaped introduction paragraphs and items from a release entry.
///
/// Paragraphs are the `p` children of every `description`; items are the `li`
/// children of every `ul` in those descriptions. Text includes nested markup
/// (`<p>a <em>b</em> c</p>` gives `a b c`), not just the text before the
/// first child element.
pub fn extract_release(release: &Element) -> ReleaseNotes {
    let mut notes = ReleaseNotes::default();

    for description in release.children_named("description") {
        for paragraph in description.children_named("p") {
            notes.introduction.push(escape_text(&paragraph.text_content()));
        }

        for list in description.children_named("ul") {
            for item in list.children_named("li") {
                notes.items.push(ReleaseItem {
                    text: escape_text(&item.text_content()),
                    demo: item.attribute("demo").map(strip_demo),
                });
            }
        }
    }

    notes
}

/// Select the release for `version` and extract its notes.
///
/// An unknown version yields empty notes.
pub fn extract_release_notes(root: &Element, version: &str) -> ReleaseNotes {
    match find_release(root, version) {
        Some(release) => {
            let notes = extract_release(release);
            tracing::debug!(
                version,
                paragraphs = notes.introduction.len(),
                items = notes.items.len(),
                demos = notes.demo_count(),
                "extracted release notes"
            );
            notes
        }
        None => {
            tracing::info!(version, "no release entry matches; emitting empty data");
            ReleaseNotes::default()
        }
    }
}
