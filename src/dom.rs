//! DOM Lookup Adapter
//!
//! Thin helpers over the `dom_query` crate. Every field of a patent record is
//! a lookup that may miss; these helpers turn a miss into the field's default
//! so the extractor never has to special-case absent markup.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

/// Tags whose text never belongs to extracted prose.
const NON_TEXT_PARENTS: &[&str] = &["script", "style", "noscript", "template"];

// === Scoping ===

/// Selection covering the whole document, including `<head>`.
///
/// The parser always synthesizes an `<html>` element, so this is never empty.
#[inline]
#[must_use]
pub fn root(doc: &Document) -> Selection<'_> {
    doc.select("html")
}

/// Whether the parsed document holds anything beyond the empty skeleton
/// (`html`/`head`/`body`) the parser inserts for any input.
#[must_use]
pub fn has_content(doc: &Document) -> bool {
    if doc.select("head *, body *").exists() {
        return true;
    }
    !root(doc).text().trim().is_empty()
}

// === Querying ===

/// First element under `scope` matching `selector`, if any.
#[must_use]
pub fn find_first<'a>(scope: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    let found = scope.select_single(selector);
    found.exists().then_some(found)
}

/// Every element under `scope` matching `selector`, in document order.
#[must_use]
pub fn find_all<'a>(scope: &Selection<'a>, selector: &str) -> Vec<Selection<'a>> {
    scope
        .select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

/// Optional lookup: read the first match with `read`, or fall back to
/// `T::default()` when nothing matches.
#[inline]
pub fn lookup_or_default<T, F>(scope: &Selection, selector: &str, read: F) -> T
where
    T: Default,
    F: FnOnce(&Selection) -> T,
{
    find_first(scope, selector).map_or_else(T::default, |found| read(&found))
}

/// Trimmed text of the first match, or `""`.
#[must_use]
pub fn lookup_text(scope: &Selection, selector: &str) -> String {
    lookup_or_default(scope, selector, trimmed_text)
}

/// Trimmed value of `attr` on the first match, or `""`.
#[must_use]
pub fn lookup_attr(scope: &Selection, selector: &str, attr: &str) -> String {
    lookup_or_default(scope, selector, |found| {
        found
            .attr(attr)
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    })
}

// === Text Content ===

/// All text of the selection and its descendants, trimmed at both ends.
#[must_use]
pub fn trimmed_text(sel: &Selection) -> String {
    sel.text().trim().to_string()
}

/// Text of the selection as separate runs: each text node is trimmed,
/// empty runs are dropped, and the rest are joined with `separator`.
///
/// Text inside `script`/`style`-like elements is skipped. Block boundaries in
/// patent sections always fall between text nodes, so joining with `"\n"`
/// yields one line per paragraph or claim fragment.
#[must_use]
pub fn separated_text(sel: &Selection, separator: &str) -> String {
    visible_text_runs(sel)
        .iter()
        .map(|run| run.trim())
        .filter(|run| !run.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Like [`trimmed_text`], but without text inside `script`/`style`-like
/// elements.
#[must_use]
pub fn visible_text(sel: &Selection) -> String {
    visible_text_runs(sel).concat().trim().to_string()
}

/// Raw text nodes under the first node of `sel`, in document order,
/// excluding those under [`NON_TEXT_PARENTS`].
fn visible_text_runs(sel: &Selection) -> Vec<String> {
    let Some(root_node) = sel.nodes().first() else {
        return Vec::new();
    };

    root_node
        .descendants()
        .into_iter()
        .filter(|node| node.is_text())
        .filter(|node| {
            !node
                .parent()
                .and_then(|parent| parent.node_name())
                .is_some_and(|tag| NON_TEXT_PARENTS.iter().any(|t| tag.eq_ignore_ascii_case(t)))
        })
        .map(|node| node.text().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_first_and_all_respect_document_order() {
        let doc = Document::from(
            r#"<ul><li class="x">one</li><li>skip</li><li class="x">two</li></ul>"#,
        );
        let scope = root(&doc);

        let first = find_first(&scope, "li.x").expect("first match");
        assert_eq!(trimmed_text(&first), "one");

        let all: Vec<String> = find_all(&scope, "li.x").iter().map(trimmed_text).collect();
        assert_eq!(all, vec!["one", "two"]);
    }

    #[test]
    fn test_lookup_defaults_on_miss() {
        let doc = Document::from("<div><p>present</p></div>");
        let scope = root(&doc);

        assert_eq!(lookup_text(&scope, "p"), "present");
        assert_eq!(lookup_text(&scope, "span"), "");
        assert_eq!(lookup_attr(&scope, "meta[name='x']", "content"), "");
        let count: usize = lookup_or_default(&scope, "table", |t| t.length());
        assert_eq!(count, 0);
    }

    #[test]
    fn test_lookup_attr_reads_head_metadata() {
        let doc = Document::from(
            r#"<html><head><meta name="DC.title" content=" A Title  "></head><body></body></html>"#,
        );

        assert_eq!(
            lookup_attr(&root(&doc), "meta[name='DC.title']", "content"),
            "A Title"
        );
    }

    #[test]
    fn test_separated_text_joins_runs() {
        let doc = Document::from(
            "<section><p> First   paragraph. </p>\n  <p>Second <b>bold</b></p><script>var x;</script></section>",
        );
        let section = doc.select("section");

        assert_eq!(
            separated_text(&section, "\n"),
            "First   paragraph.\nSecond\nbold"
        );
    }

    #[test]
    fn test_visible_text_skips_scripts_and_keeps_inline_spacing() {
        let doc = Document::from(
            r#"<div class="abstract"> Text <b>bold</b><script>var x=1;</script><style>p{}</style> end </div>"#,
        );

        assert_eq!(visible_text(&doc.select("div")), "Text bold end");
    }

    #[test]
    fn test_separated_text_of_empty_selection() {
        let doc = Document::from("<div></div>");
        assert_eq!(separated_text(&doc.select("section"), "\n"), "");
        assert_eq!(visible_text(&doc.select("section")), "");
    }

    #[test]
    fn test_has_content() {
        assert!(!has_content(&Document::from("")));
        assert!(!has_content(&Document::from("   \n ")));
        assert!(has_content(&Document::from("<dd>x</dd>")));
        assert!(has_content(&Document::from("just text")));
    }
}
