use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::form::{EditState, SessionState};

pub fn render_header(frame: &mut Frame<'_>, area: Rect, title: &str, session: &SessionState) {
    let mode = match session.edit_state() {
        EditState::None => Span::styled("creating", Style::default().fg(Color::Green)),
        EditState::Editing(index) => Span::styled(
            format!("updating row {}", index + 1),
            Style::default().fg(Color::Yellow),
        ),
    };
    let line = Line::from(vec![
        Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  •  {} record(s)  •  ", session.len())),
        mode,
    ]);
    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
