use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::{AppState, Focus, TableCursor},
    domain::UserField,
};

use super::components::{FORM_HEIGHT, render_footer, render_form, render_table};

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 2;
/// Borders plus the column header row.
const TABLE_CHROME: u16 = 3;

pub struct UiContext<'a> {
    pub title: &'a str,
    pub state: &'a AppState,
    pub focus: Focus,
    pub focused_field: UserField,
    pub table: TableCursor,
    pub status_message: &'a str,
    pub help: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub form: Rect,
    pub table: Rect,
    pub footer: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(FORM_HEIGHT),
            Constraint::Min(TABLE_CHROME + 1),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);
    ScreenLayout {
        header: chunks[0],
        form: chunks[1],
        table: chunks[2],
        footer: chunks[3],
    }
}

/// Number of user rows the table can show on a screen of `area`.
pub fn table_rows(area: Rect) -> usize {
    screen_layout(area).table.height.saturating_sub(TABLE_CHROME) as usize
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let layout = screen_layout(frame.area());

    render_header(frame, layout.header, &ctx);
    let focused_field = (ctx.focus == Focus::Form).then_some(ctx.focused_field);
    render_form(
        frame,
        layout.form,
        ctx.state.form(),
        ctx.state.is_editing(),
        focused_field,
    );
    render_table(
        frame,
        layout.table,
        ctx.state.users(),
        ctx.table,
        ctx.focus == Focus::Table,
        ctx.state.is_loading(),
    );
    render_footer(frame, layout.footer, &ctx);
}

fn render_header(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let line = match ctx.state.error() {
        Some(error) => Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        None => Line::default(),
    };
    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                ctx.title.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
    );
    frame.render_widget(header, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_gets_the_remaining_height() {
        let area = Rect::new(0, 0, 80, 40);
        let layout = screen_layout(area);
        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.form.height, FORM_HEIGHT);
        assert_eq!(layout.footer.height, FOOTER_HEIGHT);
        assert_eq!(
            layout.table.height,
            40 - HEADER_HEIGHT - FORM_HEIGHT - FOOTER_HEIGHT
        );
        assert_eq!(table_rows(area), (layout.table.height - TABLE_CHROME) as usize);
    }
}
