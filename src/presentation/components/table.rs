use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::{app::TableCursor, domain::User};

const COLUMNS: [&str; 6] = [
    "ID",
    "First Name",
    "Last Name",
    "Email",
    "Department",
    "Actions",
];
const ACTIONS: &str = "Edit · Delete";

pub fn render_table(
    frame: &mut Frame<'_>,
    area: Rect,
    users: &[User],
    cursor: TableCursor,
    focused: bool,
    loading: bool,
) {
    let mut title = format!("Users ({})", users.len());
    if loading {
        title.push_str(" • Loading...");
    }
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    if users.is_empty() {
        let text = if loading { "Loading..." } else { "No users" };
        frame.render_widget(Paragraph::new(text).block(block), area);
        return;
    }

    let header = Row::new(COLUMNS.iter().map(|title| Cell::from(*title))).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    let rows = users.iter().map(|user| {
        Row::new(vec![
            Cell::from(user.id_label()),
            Cell::from(user.first_name.as_str()),
            Cell::from(user.last_name.as_str()),
            Cell::from(user.email.as_str()),
            Cell::from(user.department.as_str()),
            Cell::from(ACTIONS).style(Style::default().fg(Color::DarkGray)),
        ])
    });
    let widths = [
        Constraint::Length(6),
        Constraint::Fill(2),
        Constraint::Fill(2),
        Constraint::Fill(3),
        Constraint::Fill(2),
        Constraint::Length(ACTIONS.chars().count() as u16),
    ];
    let highlight = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    };
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(highlight)
        .highlight_symbol("» ");

    let mut state = TableState::default()
        .with_offset(cursor.offset())
        .with_selected(cursor.selected());
    frame.render_stateful_widget(table, area, &mut state);
}
