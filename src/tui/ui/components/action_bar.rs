use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::menu::BarView;

/// Rendered height of a bar: one line, plus one for breadcrumbs.
pub fn bar_height(bar: &BarView) -> u16 {
    if bar.breadcrumbs.is_some() {
        2
    } else {
        1
    }
}

/// Render the action / tab bar: bold title, tab set with the selected tab
/// highlighted, bar-level link flushed right, breadcrumb trail on a second
/// line.
pub fn render_action_bar(f: &mut Frame, area: Rect, bar: &BarView) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let link_width = bar
        .link
        .as_ref()
        .map(|link| UnicodeWidthStr::width(link.title.as_str()) + 2)
        .unwrap_or(0);
    let head = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(link_width as u16)])
        .split(rows[0]);

    let mut spans = vec![Span::styled(
        bar.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if let Some(tabs) = &bar.tabs {
        for tab in tabs {
            spans.push(Span::raw("  "));
            let style = if tab.selected {
                Style::default().bg(Color::LightGreen).fg(Color::Black)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {} ", tab.title), style));
        }
    }
    f.render_widget(Paragraph::new(Line::from(spans)), head[0]);

    if let Some(link) = &bar.link {
        let link_span = Span::styled(
            link.title.clone(),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        );
        f.render_widget(
            Paragraph::new(Line::from(link_span)).alignment(Alignment::Right),
            head[1],
        );
    }

    if let Some(breadcrumbs) = &bar.breadcrumbs {
        let mut spans: Vec<Span> = Vec::new();
        for (i, link) in breadcrumbs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" > ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(
                link.title.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), rows[1]);
    }
}
