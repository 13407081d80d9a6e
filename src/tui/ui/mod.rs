pub(self) mod bottom;
pub(self) mod components;
pub(self) mod title;

use anyhow::Result;
use ratatui::prelude::*;

use crate::menu::{Menu, ViewNode};

/// Transient UI-loop state: the selection cursor and the error slot.
#[derive(Debug, Default)]
pub struct UiState {
    pub cursor: usize,
    pub error: Option<String>,
}

pub fn render_ui(f: &mut Frame, menu: &Menu, state: &UiState) -> Result<()> {
    let view = menu.compose()?;
    let path = menu.active_path_string()?;

    // Reserve a second bottom line while an error is displayed.
    let bottom_len = if state.error.is_some() { 2 } else { 1 };
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(0),
            Constraint::Length(bottom_len),
        ])
        .split(f.area());

    title::render_title(f, main_chunks[0], &path);
    let cursor = has_visible_children(&view).then_some(state.cursor);
    render_body(f, main_chunks[1], &view, cursor);
    bottom::render_bottom(
        f,
        main_chunks[2],
        state.error.as_deref(),
        &hints(menu, &view)?,
    );

    Ok(())
}

fn has_visible_children(view: &ViewNode) -> bool {
    view.find_entries()
        .map(|rows| rows.iter().any(|row| row.visible))
        .unwrap_or(false)
}

/// Render the composed view. The selection cursor goes to the first entry
/// list of the top-level column only; entry lists inside custom panels are
/// informational.
fn render_body(f: &mut Frame, area: Rect, view: &ViewNode, cursor: Option<usize>) {
    match view {
        ViewNode::Column(nodes) => {
            let mut constraints: Vec<Constraint> = nodes
                .iter()
                .map(|node| Constraint::Length(node_height(node)))
                .collect();
            constraints.push(Constraint::Min(0));
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints(constraints)
                .split(area);

            let mut cursor = cursor;
            for (node, chunk) in nodes.iter().zip(chunks.iter()) {
                if matches!(node, ViewNode::Entries(_)) {
                    render_node(f, *chunk, node, cursor.take());
                } else {
                    render_node(f, *chunk, node, None);
                }
            }
        }
        other => render_node(f, area, other, cursor),
    }
}

fn render_node(f: &mut Frame, area: Rect, node: &ViewNode, cursor: Option<usize>) {
    match node {
        ViewNode::Bar(bar) => components::action_bar::render_action_bar(f, area, bar),
        ViewNode::Entries(rows) => components::entry_row::render_entries(f, area, rows, cursor),
        ViewNode::Text(lines) => {
            let text = lines.join("\n");
            f.render_widget(ratatui::widgets::Paragraph::new(text), area);
        }
        ViewNode::Column(_) => render_body(f, area, node, None),
    }
}

/// Vertical space a fragment needs, with one spacing line after bars and
/// text blocks.
fn node_height(node: &ViewNode) -> u16 {
    match node {
        ViewNode::Bar(bar) => components::action_bar::bar_height(bar) + 1,
        ViewNode::Entries(rows) => rows.iter().filter(|row| row.visible).count() as u16,
        ViewNode::Text(lines) => lines.len() as u16 + 1,
        ViewNode::Column(nodes) => nodes.iter().map(node_height).sum(),
    }
}

/// Bottom hints assembled from what the current view actually offers.
fn hints(menu: &Menu, view: &ViewNode) -> Result<Vec<String>> {
    let mut hints: Vec<String> = Vec::new();
    if has_visible_children(view) {
        hints.push("↑/↓ select".to_string());
        hints.push("enter open".to_string());
    }
    if view.find_bar().and_then(|bar| bar.tabs.as_ref()).is_some() {
        hints.push("←/→ switch tab".to_string());
    }
    if menu.active_path()?.len() > 1 {
        hints.push("backspace back".to_string());
    }
    hints.push("q quit".to_string());
    Ok(hints)
}
