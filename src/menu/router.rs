//! Click routing.
//!
//! A click on an entry either appends to the active path (entries with
//! children), runs the entry's async action and optionally reveals its
//! custom panel afterwards, or does nothing at all. Action failures are not
//! caught here; they propagate to the caller and suppress the reveal step.

use std::sync::Arc;

use anyhow::Result;

use crate::menu::item::MenuItem;
use crate::menu::resolve::joined_ids;
use crate::menu::state::NavCell;

/// What activating an entry should do.
#[derive(Clone)]
pub enum ClickOutcome {
    /// Append the entry's id to the active path; no side effect.
    Navigate(String),
    /// Run the entry's action, then navigate to `reveal` (when the entry
    /// has a custom panel) unless the path moved meanwhile. `generation` is
    /// the path generation observed at routing time; any later write
    /// invalidates the reveal.
    Action {
        item: Arc<MenuItem>,
        click_path: String,
        reveal: Option<String>,
        generation: u64,
    },
    /// Entry is visually present but inert.
    Inert,
}

/// Route a click against the current resolution and active path.
/// `generation` must come from the same snapshot as `active_path`; it is
/// stamped into action outcomes so a navigation that lands between routing
/// and dispatch still cancels the reveal.
pub fn route_click(
    resolved: &[Arc<MenuItem>],
    active_path: &str,
    generation: u64,
    item: &Arc<MenuItem>,
) -> ClickOutcome {
    if !item.list_children().is_empty() {
        return ClickOutcome::Navigate(format!("{active_path}{}", item.id));
    }
    if item.action.is_some() || item.custom.is_some() {
        let click_path = format!("{}{}", joined_ids(resolved), item.id);
        let reveal = item
            .custom
            .is_some()
            .then(|| format!("{active_path}{}", item.id));
        return ClickOutcome::Action {
            item: Arc::clone(item),
            click_path,
            reveal,
            generation,
        };
    }
    ClickOutcome::Inert
}

/// Execute a routed click. For actions, "await the action" strictly precedes
/// the reveal navigation, and the reveal is discarded when another write
/// moved the path while the action was in flight.
pub async fn dispatch(nav: &NavCell, outcome: ClickOutcome) -> Result<()> {
    match outcome {
        ClickOutcome::Navigate(path) => nav.set(&path),
        ClickOutcome::Action {
            item,
            click_path,
            reveal,
            generation,
        } => {
            if let Some(action) = &item.action {
                action(&click_path, &item).await?;
            }
            if let Some(reveal) = reveal {
                if nav.generation()? == generation {
                    nav.set(&reveal)?;
                } else {
                    log::debug!("discarding stale reveal to {reveal:?}");
                }
            }
            Ok(())
        }
        ClickOutcome::Inert => Ok(()),
    }
}
