use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{app::StatusLevel, domain::FieldName, form::SessionState};

use super::components::{
    FORM_HEIGHT, render_confirm, render_footer, render_form, render_header, render_table,
};

pub struct UiContext<'a> {
    pub title: &'a str,
    pub session: &'a SessionState,
    pub focused_field: Option<FieldName>,
    pub table_focused: bool,
    pub selected_row: usize,
    pub status_message: &'a str,
    pub status_level: StatusLevel,
    pub help: Option<&'a str>,
    pub confirm: Option<ConfirmRender>,
}

pub struct ConfirmRender {
    pub title: &'static str,
    pub text: &'static str,
    pub subject: Option<String>,
    pub confirm_label: &'static str,
    pub cancel_label: &'static str,
    pub confirm_selected: bool,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(FORM_HEIGHT),
            Constraint::Min(4),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let cursor_enabled = ctx.confirm.is_none();
    render_header(frame, chunks[0], ctx.title, ctx.session);
    render_form(
        frame,
        chunks[1],
        ctx.session,
        ctx.focused_field,
        cursor_enabled,
    );
    render_table(
        frame,
        chunks[2],
        ctx.session,
        ctx.table_focused,
        ctx.selected_row,
    );
    render_footer(frame, chunks[3], &ctx);

    if let Some(confirm) = &ctx.confirm {
        render_confirm(frame, confirm);
    }
}
