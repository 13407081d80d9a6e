use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::menu::EntryRow;

// Two-char prefix so rows don't shift while navigating.
pub(crate) const INDICATOR_SELECTED: &str = "> ";
pub(crate) const INDICATOR_UNSELECTED: &str = "  ";

/// Render the entry list. Rows whose `visible` flag is false are skipped
/// here; `cursor` indexes the remaining rows.
pub fn render_entries(f: &mut Frame, area: Rect, rows: &[EntryRow], cursor: Option<usize>) {
    let lines = entry_lines(rows, cursor, area.width);
    f.render_widget(Paragraph::new(lines), area);
}

pub fn entry_lines(rows: &[EntryRow], cursor: Option<usize>, width: u16) -> Vec<Line<'static>> {
    let width = width as usize;
    let mut lines: Vec<Line> = Vec::new();
    for (i, row) in rows.iter().filter(|row| row.visible).enumerate() {
        let selected = cursor == Some(i);
        let prefix = if selected {
            INDICATOR_SELECTED
        } else {
            INDICATOR_UNSELECTED
        };
        let subtitle = row.subtitle.clone().unwrap_or_default();

        // Right-align the subtitle, accounting for the prefix width.
        let inner = width.saturating_sub(2);
        let title_w = UnicodeWidthStr::width(row.title.as_str()) + UnicodeWidthStr::width(prefix);
        let subtitle_w = UnicodeWidthStr::width(subtitle.as_str());
        let pad = if inner > title_w + subtitle_w {
            inner - title_w - subtitle_w
        } else {
            1
        };
        let spacer = " ".repeat(pad);

        let title_style = if row.interactive {
            Style::default()
        } else {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC)
        };
        let spans = vec![
            Span::raw(prefix.to_string()),
            Span::styled(row.title.clone(), title_style),
            Span::raw(spacer),
            Span::styled(subtitle, Style::default().fg(Color::DarkGray)),
        ];
        if selected {
            // Highlight the entire row including the prefix.
            let styled = spans
                .into_iter()
                .map(|sp| Span::styled(sp.content, Style::default().bg(Color::LightGreen)))
                .collect::<Vec<_>>();
            lines.push(Line::from(styled));
        } else {
            lines.push(Line::from(spans));
        }
    }
    lines
}
