//! Path resolution.
//!
//! The active path is an opaque string; resolution tokenizes it with the
//! `\w+/` scan and walks the tree from the root. Resolution is total:
//! unknown tokens are dropped without a diagnostic and the result degrades
//! to the deepest still-valid ancestor, so a stale or corrupted path never
//! fails outright.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::menu::item::MenuItem;

static TOKEN_SCAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+/").unwrap());

/// Extract `token/` segments left to right. Characters outside the segment
/// shape (including the synthetic `+` prefix) are skipped.
pub fn tokenize(path: &str) -> Vec<&str> {
    TOKEN_SCAN.find_iter(path).map(|m| m.as_str()).collect()
}

/// Resolve an active path into the ordered entry list, always seeded with
/// the root.
pub fn resolve(root: &Arc<MenuItem>, path: &str) -> Vec<Arc<MenuItem>> {
    let mut list = vec![Arc::clone(root)];
    for token in tokenize(path) {
        let last = Arc::clone(&list[list.len() - 1]);
        if last.holds_categories() && last.id.as_str() != token {
            match last.category(token) {
                Some(cat) => list.push(Arc::clone(&cat.entry)),
                None => log::debug!("dropping unknown category segment {token:?}"),
            }
        } else {
            match last
                .list_children()
                .iter()
                .find(|child| child.id.as_str() == token)
            {
                Some(child) => list.push(Arc::clone(child)),
                None => log::debug!("dropping unknown path segment {token:?}"),
            }
        }
    }
    list
}

/// Concatenation of every resolved entry's id, synthetic prefixes included.
pub fn joined_ids(entries: &[Arc<MenuItem>]) -> String {
    entries.iter().map(|entry| entry.id.as_str()).collect()
}

/// Cumulative path up to and including `index`. Used for breadcrumb targets
/// and tab targets.
pub fn path_to(entries: &[Arc<MenuItem>], index: usize) -> String {
    joined_ids(&entries[..=index])
}
