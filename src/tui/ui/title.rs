use ratatui::{prelude::*, widgets::*};

/// Gray title bar: crate name and version on the left, the active path
/// centered.
pub fn render_title(f: &mut Frame, area: Rect, active_path: &str) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(18),
            Constraint::Min(10),
            Constraint::Length(2),
        ])
        .split(area);

    let bg_block = Block::default()
        .borders(Borders::NONE)
        .style(Style::default().bg(Color::Gray));
    f.render_widget(bg_block, area);

    let name = Paragraph::new(format!(" komichi v{}", env!("CARGO_PKG_VERSION"))).style(
        Style::default()
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(name, chunks[0]);

    let path = Paragraph::new(active_path.to_string())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(path, chunks[1]);
}
