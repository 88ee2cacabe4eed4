use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{domain::UserField, form::FormDraft};

/// Input and message line per field, a spacer, the button, two borders.
pub const FORM_HEIGHT: u16 = UserField::ALL.len() as u16 * 2 + 4;

const LABEL_WIDTH: usize = 12;

pub fn form_header(editing: bool) -> &'static str {
    if editing { "Edit User" } else { "Add User" }
}

pub fn submit_label(editing: bool) -> &'static str {
    if editing { "Update User" } else { "Add User" }
}

pub fn render_form(
    frame: &mut Frame<'_>,
    area: Rect,
    draft: &FormDraft,
    editing: bool,
    focused: Option<UserField>,
) {
    let mut lines = Vec::with_capacity(UserField::ALL.len() * 2 + 2);
    let mut cursor: Option<Position> = None;

    for field in UserField::ALL {
        let is_focused = focused == Some(field);
        let label_style = if is_focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_focused { "» " } else { "  " };
        let input = Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(format!("{:<LABEL_WIDTH$}", field.label()), label_style),
            Span::raw(": "),
            Span::raw(draft.value(field).to_string()),
        ]);
        if is_focused {
            let x = area.x + 1 + input.width() as u16;
            let y = area.y + 1 + lines.len() as u16;
            cursor = Some(Position::new(x.min(area.right().saturating_sub(2)), y));
        }
        lines.push(input);

        let message = draft.error(field).map(|message| {
            Span::styled(
                format!("    {message}"),
                Style::default().fg(Color::Red),
            )
        });
        lines.push(message.map(Line::from).unwrap_or_default());
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", submit_label(editing)),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));

    let title = if editing {
        format!("{} • Enter/Ctrl+S to update", form_header(editing))
    } else {
        form_header(editing).to_string()
    };
    let border_style = if focused.is_some() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );
    frame.render_widget(form, area);

    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}
