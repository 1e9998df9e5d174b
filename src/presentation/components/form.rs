use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::{domain::FieldName, form::SessionState};

/// Outer border, one row of bordered inputs, one row for the button.
pub const FORM_HEIGHT: u16 = 6;

pub fn render_form(
    frame: &mut Frame<'_>,
    area: Rect,
    session: &SessionState,
    focused: Option<FieldName>,
    enable_cursor: bool,
) {
    let title = if session.edit_state().is_editing() {
        "Update record"
    } else {
        "New record"
    };
    let outer = Block::default().title(title).borders(Borders::ALL);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(inner);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[0]);

    for field in FieldName::ALL {
        let field_area = columns[field.position()];
        let is_focused = focused == Some(field);
        render_input(frame, field_area, session, field, is_focused);
        if is_focused && enable_cursor {
            place_cursor(frame, field_area, session.draft().get(field));
        }
    }

    render_button(frame, rows[1], session, focused.is_some());
}

fn render_input(
    frame: &mut Frame<'_>,
    area: Rect,
    session: &SessionState,
    field: FieldName,
    is_focused: bool,
) {
    let error = session.errors().get(field);
    let border_style = match (error.is_some(), is_focused) {
        (true, _) => Style::default().fg(Color::Red),
        (false, true) => Style::default().fg(Color::Cyan),
        (false, false) => Style::default(),
    };
    let label_style = if is_focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(format!("{} *", field.label()), label_style));
    if let Some(error) = error {
        block = block.title_bottom(Line::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        ));
    }

    let value = session.draft().get(field);
    let content = if value.is_empty() {
        Span::styled(
            field.placeholder(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::raw(value.to_string())
    };
    frame.render_widget(Paragraph::new(Line::from(content)).block(block), area);
}

fn place_cursor(frame: &mut Frame<'_>, area: Rect, value: &str) {
    let inner_width = area.width.saturating_sub(2);
    if inner_width == 0 {
        return;
    }
    let value_width = u16::try_from(value.width()).unwrap_or(u16::MAX);
    let column = value_width.min(inner_width - 1);
    frame.set_cursor_position((area.x + 1 + column, area.y + 1));
}

fn render_button(frame: &mut Frame<'_>, area: Rect, session: &SessionState, form_focused: bool) {
    let color = if session.edit_state().is_editing() {
        Color::Yellow
    } else {
        Color::Magenta
    };
    let mut style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    if form_focused {
        style = style.add_modifier(Modifier::REVERSED);
    }
    let button = Paragraph::new(Line::from(Span::styled(
        format!("[ {} ]", session.submit_label()),
        style,
    )))
    .alignment(Alignment::Center);
    frame.render_widget(button, area);
}
