//! View composition for the menu engine.
//!
//! `compose_resolved` turns a resolved path into a renderer-agnostic
//! [`ViewNode`] tree. Front-ends walk the tree and draw it with whatever
//! toolkit they use; nothing in here touches a terminal.

use std::sync::Arc;

use crate::menu::item::MenuItem;
use crate::menu::resolve::{joined_ids, path_to};

/// A composed view fragment. Custom panels return these as well, so a menu
/// entry can contribute arbitrary sub-views below its entry list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewNode {
    /// Vertical sequence of fragments.
    Column(Vec<ViewNode>),
    /// Action / tab bar.
    Bar(BarView),
    /// Clickable entry rows.
    Entries(Vec<EntryRow>),
    /// Plain text block (one string per line).
    Text(Vec<String>),
}

/// Bar shown above the entry list. Carries either tab descriptors (category
/// view) or breadcrumb links (list view), never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarView {
    pub title: String,
    pub tabs: Option<Vec<Tab>>,
    pub link: Option<Link>,
    pub breadcrumbs: Option<Vec<Link>>,
}

/// One selectable tab of a category view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub title: String,
    pub selected: bool,
    /// Active path to assign when the tab is chosen.
    pub path: String,
}

/// A clickable link: breadcrumb ancestors and the optional bar-level action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub title: String,
    pub path: String,
}

impl Link {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
        }
    }
}

/// One row of the entry list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRow {
    pub title: String,
    pub subtitle: Option<String>,
    /// False when the entry has no children, action or custom view; such
    /// rows are shown but cannot be activated.
    pub interactive: bool,
    /// Snapshot of the entry's `visible` predicate. The engine does not
    /// filter on it; renderers decide what to do with hidden rows.
    pub visible: bool,
}

/// Compose the view for a resolved path.
///
/// Category view when the deepest entry or its parent holds categories,
/// list view otherwise. The entry list is omitted when the deepest entry
/// has no children; a custom panel may still stand alone below the bar.
pub(crate) fn compose_resolved(resolved: &[Arc<MenuItem>], bar_link: Option<&Link>) -> ViewNode {
    let Some(active) = resolved.last() else {
        return ViewNode::Column(Vec::new());
    };

    let parent_holds = resolved.len() >= 2 && resolved[resolved.len() - 2].holds_categories();

    let mut nodes = Vec::new();
    if active.holds_categories() || parent_holds {
        let holder_idx = if parent_holds {
            resolved.len() - 2
        } else {
            resolved.len() - 1
        };
        let holder = &resolved[holder_idx];
        let holder_path = path_to(resolved, holder_idx);
        // Selected state compares the category key against the active id
        // with the synthetic `+` prefix stripped.
        let active_key = active.id.key();
        let tabs = holder
            .categories()
            .iter()
            .map(|cat| Tab {
                title: cat.entry.title.clone(),
                selected: cat.key.as_str() == active_key,
                path: format!("{holder_path}{}", cat.key),
            })
            .collect();
        nodes.push(ViewNode::Bar(BarView {
            title: holder.title.clone(),
            tabs: Some(tabs),
            link: bar_link.cloned(),
            breadcrumbs: None,
        }));
    } else {
        // Breadcrumbs list the ancestors only, and only away from the root.
        let breadcrumbs = (resolved.len() > 1).then(|| {
            resolved[..resolved.len() - 1]
                .iter()
                .enumerate()
                .map(|(i, entry)| Link {
                    title: entry.title.clone(),
                    path: path_to(resolved, i),
                })
                .collect()
        });
        nodes.push(ViewNode::Bar(BarView {
            title: active.title.clone(),
            tabs: None,
            link: bar_link.cloned(),
            breadcrumbs,
        }));
    }

    let rows: Vec<EntryRow> = active
        .list_children()
        .iter()
        .map(|child| EntryRow {
            title: child.title.clone(),
            subtitle: child.subtitle.clone(),
            interactive: child.is_interactive(),
            visible: child.is_visible(),
        })
        .collect();
    if !rows.is_empty() {
        nodes.push(ViewNode::Entries(rows));
    }

    if let Some(custom) = &active.custom {
        nodes.push(custom(&joined_ids(resolved)));
    }

    ViewNode::Column(nodes)
}

impl ViewNode {
    /// Depth-first search for the first bar fragment, custom panels included.
    pub fn find_bar(&self) -> Option<&BarView> {
        match self {
            ViewNode::Bar(bar) => Some(bar),
            ViewNode::Column(nodes) => nodes.iter().find_map(Self::find_bar),
            _ => None,
        }
    }

    /// Depth-first search for the first entry list.
    pub fn find_entries(&self) -> Option<&[EntryRow]> {
        match self {
            ViewNode::Entries(rows) => Some(rows),
            ViewNode::Column(nodes) => nodes.iter().find_map(Self::find_entries),
            _ => None,
        }
    }
}
