use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::form::SessionState;

const HEADERS: [&str; 3] = ["Name", "Email", "Age"];

pub fn render_table(
    frame: &mut Frame<'_>,
    area: Rect,
    session: &SessionState,
    focused: bool,
    selected: usize,
) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .title("Records")
        .borders(Borders::ALL)
        .border_style(border_style);

    if session.is_empty() {
        let placeholder = Paragraph::new(Span::styled(
            "No records yet. Add some!",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let header = Row::new(HEADERS.map(Cell::from)).style(
        Style::default()
            .fg(Color::White)
            .bg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    );
    let editing = session.edit_state().index();
    let rows = session.records().iter().enumerate().map(|(index, record)| {
        let row = Row::new(vec![
            Cell::from(record.name().to_string()),
            Cell::from(record.email().to_string()),
            Cell::from(record.age().to_string()),
        ]);
        if editing == Some(index) {
            row.style(Style::default().fg(Color::Yellow))
        } else {
            row
        }
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(35),
            Constraint::Percentage(50),
            Constraint::Length(5),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(Style::default().bg(Color::DarkGray))
    .highlight_symbol("» ");

    let mut state = TableState::default();
    if focused {
        state.select(Some(selected.min(session.len().saturating_sub(1))));
    }
    frame.render_stateful_widget(table, area, &mut state);
}
