//! Menu tree model.
//!
//! The tree is built once at startup from a declarative literal and treated
//! as read-only afterwards; only the active path changes at runtime. Whether
//! a node offers ordinary children or a category tab set is decided here, at
//! construction time, as a tagged [`Children`] variant instead of being
//! re-inspected on every render.

use std::fmt;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use futures::future::BoxFuture;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::menu::view::ViewNode;

static SEGMENT_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+/$").unwrap());

/// Side-effecting callback invoked when an entry without children is
/// activated. Receives the full click path and the entry itself.
pub type ActionFn = Arc<dyn Fn(&str, &Arc<MenuItem>) -> BoxFuture<'static, Result<()>> + Send + Sync>;

/// Extra view rendered below the entry list. Receives the click path.
pub type CustomFn = Arc<dyn Fn(&str) -> ViewNode + Send + Sync>;

/// Visibility predicate, true by default. Not enforced by the engine itself;
/// renderers consult it through [`MenuItem::is_visible`].
pub type VisibleFn = Arc<dyn Fn() -> bool + Send + Sync>;

/// A single path segment of shape `token/`. Segments concatenate to form the
/// active path, so the trailing slash is what keeps tokenization unambiguous.
///
/// Category entries carry a synthetic `+token/` form that never appears in
/// the active-path string itself, only in resolved ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment(String);

impl Segment {
    pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if SEGMENT_SHAPE.is_match(&raw) {
            Ok(Self(raw))
        } else {
            Err(anyhow!(
                "invalid path segment {raw:?}, expected shape \"token/\""
            ))
        }
    }

    /// Synthetic id for a category entry addressed by `key`.
    pub fn synthetic(key: &Segment) -> Self {
        Self(format!("+{}", key.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Segment text with the synthetic `+` prefix stripped.
    pub fn key(&self) -> &str {
        self.0.strip_prefix('+').unwrap_or(&self.0)
    }

    pub fn is_synthetic(&self) -> bool {
        self.0.starts_with('+')
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Children of a menu node, fixed at construction time.
#[derive(Clone, Default)]
pub enum Children {
    /// Leaf node.
    #[default]
    None,
    /// Ordinary children reachable by path append.
    List(Vec<Arc<MenuItem>>),
    /// Alternate child set rendered as a tab bar.
    Categories(Vec<Category>),
}

/// One category tab. The entry is pre-materialized with a synthetic
/// `+`-prefixed id so resolution is a plain lookup.
#[derive(Clone)]
pub struct Category {
    pub key: Segment,
    pub entry: Arc<MenuItem>,
}

impl Category {
    /// Wrap an item as a category entry, keyed by the item's declared id.
    pub fn new(mut entry: MenuItem) -> Self {
        let key = entry.id.clone();
        entry.id = Segment::synthetic(&key);
        Self {
            key,
            entry: Arc::new(entry),
        }
    }
}

/// One node of the menu tree.
pub struct MenuItem {
    pub title: String,
    pub id: Segment,
    pub subtitle: Option<String>,
    pub children: Children,
    pub action: Option<ActionFn>,
    pub custom: Option<CustomFn>,
    pub visible: Option<VisibleFn>,
}

impl MenuItem {
    pub fn new(title: impl Into<String>, id: &str) -> Result<Self> {
        Ok(Self {
            title: title.into(),
            id: Segment::parse(id)?,
            subtitle: None,
            children: Children::None,
            action: None,
            custom: None,
            visible: None,
        })
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_items(mut self, items: Vec<MenuItem>) -> Self {
        self.children = Children::List(items.into_iter().map(Arc::new).collect());
        self
    }

    /// Install a category tab set. Each entry's declared id becomes the
    /// category key; the entry itself is re-addressed as `+key/`.
    pub fn with_categories(mut self, entries: Vec<MenuItem>) -> Self {
        self.children = Children::Categories(entries.into_iter().map(Category::new).collect());
        self
    }

    pub fn with_action<F>(mut self, action: F) -> Self
    where
        F: Fn(&str, &Arc<MenuItem>) -> BoxFuture<'static, Result<()>> + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    pub fn with_custom<F>(mut self, custom: F) -> Self
    where
        F: Fn(&str) -> ViewNode + Send + Sync + 'static,
    {
        self.custom = Some(Arc::new(custom));
        self
    }

    pub fn with_visible<F>(mut self, visible: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.visible = Some(Arc::new(visible));
        self
    }

    pub fn holds_categories(&self) -> bool {
        matches!(self.children, Children::Categories(_))
    }

    pub fn categories(&self) -> &[Category] {
        match &self.children {
            Children::Categories(cats) => cats,
            _ => &[],
        }
    }

    pub fn list_children(&self) -> &[Arc<MenuItem>] {
        match &self.children {
            Children::List(items) => items,
            _ => &[],
        }
    }

    pub fn category(&self, token: &str) -> Option<&Category> {
        self.categories().iter().find(|cat| cat.key.as_str() == token)
    }

    pub fn is_visible(&self) -> bool {
        self.visible.as_ref().map_or(true, |f| f())
    }

    /// Whether activation does anything: navigation, an action, or a custom
    /// panel reveal.
    pub fn is_interactive(&self) -> bool {
        !self.list_children().is_empty() || self.action.is_some() || self.custom.is_some()
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("title", &self.title)
            .field("id", &self.id)
            .field("subtitle", &self.subtitle)
            .field("children", &match &self.children {
                Children::None => "none".to_string(),
                Children::List(items) => format!("list({})", items.len()),
                Children::Categories(cats) => format!("categories({})", cats.len()),
            })
            .field("action", &self.action.is_some())
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_shape() {
        assert!(Segment::parse("home/").is_ok());
        assert!(Segment::parse("audit_trail/").is_ok());
        assert!(Segment::parse("home").is_err());
        assert!(Segment::parse("/").is_err());
        assert!(Segment::parse("two/parts/").is_err());
        assert!(Segment::parse("spa ce/").is_err());
    }

    #[test]
    fn test_synthetic_segment() {
        let key = Segment::parse("music/").unwrap();
        let synthetic = Segment::synthetic(&key);
        assert_eq!(synthetic.as_str(), "+music/");
        assert!(synthetic.is_synthetic());
        assert_eq!(synthetic.key(), "music/");
        assert_eq!(key.key(), "music/");
        assert!(!key.is_synthetic());
    }

    #[test]
    fn test_category_rewrites_id() {
        let cat = Category::new(MenuItem::new("Music", "music/").unwrap());
        assert_eq!(cat.key.as_str(), "music/");
        assert_eq!(cat.entry.id.as_str(), "+music/");
    }

    #[test]
    fn test_visibility_defaults_true() {
        let item = MenuItem::new("A", "a/").unwrap();
        assert!(item.is_visible());
        let hidden = MenuItem::new("B", "b/").unwrap().with_visible(|| false);
        assert!(!hidden.is_visible());
    }

    #[test]
    fn test_interactive() {
        let inert = MenuItem::new("A", "a/").unwrap();
        assert!(!inert.is_interactive());
        let parent = MenuItem::new("B", "b/")
            .unwrap()
            .with_items(vec![MenuItem::new("C", "c/").unwrap()]);
        assert!(parent.is_interactive());
        let custom = MenuItem::new("D", "d/")
            .unwrap()
            .with_custom(|_| ViewNode::Text(vec![]));
        assert!(custom.is_interactive());
    }
}
