//! Declarative hierarchical menu / navigation engine.
//!
//! A [`Menu`] owns one piece of state, the active path string, and derives
//! everything else from it: [`resolve`](resolve::resolve) walks the static
//! tree, [`Menu::compose`] produces a renderer-agnostic view tree, and
//! [`Menu::click`] routes entry activation to navigation or async actions.
//! There is no back stack; breadcrumb links reconstruct ancestors by path
//! truncation.

pub mod item;
pub mod resolve;
pub mod router;
pub mod state;
pub mod view;

use std::sync::Arc;

use anyhow::Result;

pub use item::{Category, Children, MenuItem, Segment};
pub use router::ClickOutcome;
pub use state::NavCell;
pub use view::{BarView, EntryRow, Link, Tab, ViewNode};

/// The engine facade. Cheap to clone; clones share the tree and the
/// active-path cell.
#[derive(Clone)]
pub struct Menu {
    root: Arc<MenuItem>,
    bar_link: Option<Link>,
    nav: NavCell,
}

impl Menu {
    /// Build a menu around a root item. The root's id is the home path.
    pub fn new(root: MenuItem) -> Self {
        let root = Arc::new(root);
        let nav = NavCell::new(root.id.as_str());
        Self {
            root,
            bar_link: None,
            nav,
        }
    }

    /// Bar-level link shown alongside the title or tabs.
    pub fn with_bar_link(mut self, link: Link) -> Self {
        self.bar_link = Some(link);
        self
    }

    pub fn root(&self) -> &Arc<MenuItem> {
        &self.root
    }

    /// Force navigation to an explicit path string.
    pub fn set_active_path(&self, path: &str) -> Result<&Self> {
        self.nav.set(path)?;
        Ok(self)
    }

    pub fn active_path_string(&self) -> Result<String> {
        self.nav.get()
    }

    /// Resolve the current path. Read-only introspection for callers that
    /// need to know where the menu is, e.g. to build page titles.
    pub fn active_path(&self) -> Result<Vec<Arc<MenuItem>>> {
        let path = self.nav.get()?;
        Ok(resolve::resolve(&self.root, &path))
    }

    /// Children of the deepest resolved entry, unfiltered.
    pub fn active_children(&self) -> Result<Vec<Arc<MenuItem>>> {
        let resolved = self.active_path()?;
        Ok(resolved[resolved.len() - 1].list_children().to_vec())
    }

    /// Compose the view for the current resolution.
    pub fn compose(&self) -> Result<ViewNode> {
        let resolved = self.active_path()?;
        Ok(view::compose_resolved(&resolved, self.bar_link.as_ref()))
    }

    /// Decide what activating `item` should do, against the current state.
    /// Action outcomes are stamped with the current path generation, so a
    /// navigation that happens before [`Menu::dispatch`] runs already
    /// invalidates their reveal step.
    pub fn route_click(&self, item: &Arc<MenuItem>) -> Result<ClickOutcome> {
        let (active, generation) = self.nav.snapshot()?;
        let resolved = resolve::resolve(&self.root, &active);
        Ok(router::route_click(&resolved, &active, generation, item))
    }

    /// Route and execute a click in one go.
    pub async fn click(&self, item: &Arc<MenuItem>) -> Result<()> {
        let outcome = self.route_click(item)?;
        self.dispatch(outcome).await
    }

    /// Execute an already-routed click.
    pub async fn dispatch(&self, outcome: ClickOutcome) -> Result<()> {
        router::dispatch(&self.nav, outcome).await
    }

    /// Subscribe to active-path changes. Observers run synchronously on
    /// every write.
    pub fn subscribe<F>(&self, observer: F) -> Result<()>
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.nav.subscribe(observer)
    }
}
