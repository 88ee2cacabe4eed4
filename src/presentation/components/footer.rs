use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::super::view::UiContext;

pub fn render_footer(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let actions = ctx.help.unwrap_or(" ");
    let actions_widget =
        Paragraph::new(format!("Actions: {actions}")).style(Style::default().fg(Color::Yellow));
    frame.render_widget(actions_widget, rows[0]);

    let mut status = ctx.status_message.to_string();
    if status.trim().is_empty() {
        status = "Ready".to_string();
    }
    status.push_str(&format!(
        " • page {} • {} users",
        ctx.state.page(),
        ctx.state.users().len()
    ));

    let badge = if ctx.state.is_loading() {
        Span::styled("[loading]", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("[ok]", Style::default().fg(Color::Green))
    };

    let status_widget = Paragraph::new(Line::from(vec![
        Span::raw("Status: "),
        Span::raw(status),
        Span::raw(" "),
        badge,
    ]));
    frame.render_widget(status_widget, rows[1]);
}
