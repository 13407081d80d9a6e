use ratatui::{prelude::*, widgets::*};

/// Bottom bar: a red error line with a clear hint when an action failed,
/// otherwise the centered hint row for the current view.
pub fn render_bottom(f: &mut Frame, area: Rect, error: Option<&str>, hints: &[String]) {
    let help_block = Block::default().borders(Borders::NONE);

    if let Some(err) = error {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(0)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let err_block = help_block.clone().style(
            Style::default()
                .bg(Color::Red)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
        let p = Paragraph::new(err)
            .alignment(Alignment::Left)
            .block(err_block);
        f.render_widget(p, rows[0]);

        let instr_block = help_block.style(Style::default().bg(Color::Gray).fg(Color::DarkGray));
        let instr = Paragraph::new("press c to clear   press q to quit")
            .alignment(Alignment::Center)
            .block(instr_block);
        f.render_widget(instr, rows[1]);
    } else {
        let help_block = help_block.style(Style::default().bg(Color::Gray).fg(Color::White));
        let help = Paragraph::new(hints.join("   "))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(help_block);
        f.render_widget(help, area);
    }
}
