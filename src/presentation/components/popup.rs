use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use textwrap::wrap;

use super::super::view::ConfirmRender;
use super::layout::popup_rect;

const POPUP_WIDTH: u16 = 48;

pub fn render_confirm(frame: &mut Frame<'_>, confirm: &ConfirmRender) {
    let screen = frame.area();
    let width = POPUP_WIDTH.min(screen.width.saturating_sub(2)).max(10);
    let text_width = usize::from(width.saturating_sub(4)).max(1);

    let mut lines: Vec<Line<'static>> = Vec::new();
    lines.push(Line::from(Span::styled(
        "⚠",
        Style::default().fg(Color::Yellow),
    )));
    for chunk in wrap(confirm.text, text_width) {
        lines.push(Line::from(chunk.into_owned()));
    }
    if let Some(subject) = &confirm.subject {
        for chunk in wrap(subject, text_width) {
            lines.push(Line::from(Span::styled(
                chunk.into_owned(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
        }
    }
    lines.push(Line::default());
    lines.push(buttons(confirm));

    let height = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(screen.height);
    let area = popup_rect(screen, width, height.max(3));
    frame.render_widget(Clear, area);

    let popup = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(confirm.title)
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(popup, area);
}

fn buttons(confirm: &ConfirmRender) -> Line<'static> {
    let selected = |active: bool, color: Color| {
        let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
        if active {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    };
    Line::from(vec![
        Span::styled(
            format!(" {} ", confirm.confirm_label),
            selected(confirm.confirm_selected, Color::Red),
        ),
        Span::raw("   "),
        Span::styled(
            format!(" {} ", confirm.cancel_label),
            selected(!confirm.confirm_selected, Color::Blue),
        ),
    ])
}
