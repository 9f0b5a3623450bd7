//! Classification hierarchies.
//!
//! Pages list every level of each hierarchy (section, class, group...) as a
//! list item. Only the most specific entry carries the leaf marker, and only
//! those entries end up in the record.

use dom_query::Selection;

use crate::dom;
use crate::patterns::{
    CLASSIFICATION_CODE, CLASSIFICATION_DESCRIPTION, CLASSIFICATION_ITEM, CLASSIFICATION_LEAF,
};
use crate::result::Classification;

/// Leaf classifications in document order.
///
/// An item missing either its code or its description is skipped; a
/// classification is never emitted half-filled.
#[must_use]
pub fn extract_classifications(scope: &Selection) -> Vec<Classification> {
    dom::find_all(scope, CLASSIFICATION_ITEM)
        .iter()
        .filter(|item| dom::find_first(item, CLASSIFICATION_LEAF).is_some())
        .filter_map(parse_leaf)
        .collect()
}

fn parse_leaf(item: &Selection) -> Option<Classification> {
    let code = dom::find_first(item, CLASSIFICATION_CODE)?;
    let description = dom::find_first(item, CLASSIFICATION_DESCRIPTION)?;

    Some(Classification {
        code: dom::trimmed_text(&code),
        description: dom::trimmed_text(&description),
    })
}
