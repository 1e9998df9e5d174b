use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;

use crate::{
    domain::{FieldName, Record},
    form::{SessionAction, SessionEngine},
    presentation::{self, UiContext},
};

use super::{
    confirm::{ConfirmChoice, ConfirmPrompt},
    focus::Focus,
    input::{KeyAction, edit_text},
    keymap::KeymapContext,
    options::UiOptions,
    status::StatusLine,
    terminal::TerminalGuard,
};

mod surface;

use surface::Surface;

pub(crate) struct App {
    engine: SessionEngine,
    title: String,
    options: UiOptions,
    status: StatusLine,
    focus: Focus,
    selected_row: usize,
    confirm: ConfirmPrompt,
    exit_armed: bool,
    should_quit: bool,
    needs_redraw: bool,
}

impl App {
    pub fn new(engine: SessionEngine, title: String, options: UiOptions) -> Self {
        Self {
            engine,
            title,
            options,
            status: StatusLine::new(),
            focus: Focus::default(),
            selected_row: 0,
            confirm: ConfirmPrompt::default(),
            exit_armed: false,
            should_quit: false,
            needs_redraw: true,
        }
    }

    pub fn run(&mut self) -> Result<Vec<Record>> {
        let mut terminal = TerminalGuard::new()?;
        while !self.should_quit {
            if self.needs_redraw {
                terminal.draw(|frame| self.draw(frame))?;
                self.needs_redraw = false;
            }
            if !event::poll(self.options.tick_rate)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(width, height) => {
                    terminal.resize(Rect::new(0, 0, width, height))?;
                    self.needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(self.engine.state().records().to_vec())
    }

    fn context(&self) -> KeymapContext {
        if self.engine.state().pending_delete().is_some() {
            KeymapContext::Confirm
        } else {
            self.focus.context()
        }
    }

    fn current_help_text(&self) -> Option<String> {
        if !self.options.show_help {
            return None;
        }
        self.options.keymap_store.help_text(self.context())
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let state = self.engine.state();
        let help = self.current_help_text();
        let confirm = state
            .pending_delete()
            .map(|pending| self.confirm.as_render(state.record(pending.index)));
        presentation::draw(
            frame,
            UiContext {
                title: &self.title,
                session: state,
                focused_field: self.focus.field(),
                table_focused: self.focus == Focus::Table,
                selected_row: self.selected_row,
                status_message: self.status.message(),
                status_level: self.status.level(),
                help: help.as_deref(),
                confirm,
            },
        );
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.needs_redraw = true;

        let context = self.context();
        match self.options.keymap_store.classify(context, &key) {
            Some(action) => self.handle_action(action),
            None => {
                if context == KeymapContext::Form
                    && let Some(field) = self.focus.field()
                {
                    self.handle_field_input(field, &key);
                }
            }
        }
    }

    fn handle_action(&mut self, action: KeyAction) {
        if action != KeyAction::Quit {
            self.exit_armed = false;
        }
        match action {
            KeyAction::Submit => self.on_submit(),
            KeyAction::Quit => self.on_exit(),
            KeyAction::CancelEdit => self.on_cancel_edit(),
            KeyAction::FocusStep(delta) => {
                self.focus = self.focus.step(delta, !self.engine.state().is_empty());
            }
            KeyAction::SelectRow(delta) => self.select_row(delta),
            KeyAction::EditRow => self.on_edit_row(),
            KeyAction::DeleteRow => self.on_delete_row(),
            KeyAction::ConfirmAccept => self.resolve_confirm(true),
            KeyAction::ConfirmReject => self.resolve_confirm(false),
            KeyAction::ConfirmToggle => self.confirm.toggle(),
            KeyAction::ConfirmResolve => {
                self.resolve_confirm(self.confirm.choice() == ConfirmChoice::Confirm)
            }
        }
    }

    fn handle_field_input(&mut self, field: FieldName, key: &KeyEvent) {
        let current = self.engine.state().draft().get(field);
        let Some(value) = edit_text(current, key) else {
            return;
        };
        self.exit_armed = false;
        if self.dispatch(SessionAction::EditField { field, value }) {
            self.status.editing(field.label());
        }
    }

    /// Runs `action` through the engine with the UI as observer. Returns
    /// whether the session accepted it.
    fn dispatch(&mut self, action: SessionAction) -> bool {
        let mut surface = Surface {
            status: &mut self.status,
            selected_row: &mut self.selected_row,
            needs_redraw: &mut self.needs_redraw,
        };
        match self.engine.dispatch(action, &mut surface) {
            Ok(()) => true,
            Err(err) => {
                self.status.warn(err.to_string());
                false
            }
        }
    }

    fn on_submit(&mut self) {
        if !self.dispatch(SessionAction::Submit) {
            return;
        }
        let first_error = self.engine.state().errors().first_field();
        self.focus = Focus::Field(first_error.unwrap_or(FieldName::Name));
    }

    fn on_cancel_edit(&mut self) {
        if self.engine.state().edit_state().is_editing() {
            self.dispatch(SessionAction::CancelEdit);
        } else {
            self.status.ready();
        }
    }

    fn select_row(&mut self, delta: i32) {
        let len = self.engine.state().len();
        if len == 0 {
            return;
        }
        let max = len - 1;
        self.selected_row = if delta < 0 {
            self.selected_row.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            self.selected_row.saturating_add(delta as usize).min(max)
        };
    }

    fn on_edit_row(&mut self) {
        if self.dispatch(SessionAction::BeginEdit(self.selected_row)) {
            self.focus = Focus::Field(FieldName::Name);
        }
    }

    fn on_delete_row(&mut self) {
        if self.dispatch(SessionAction::RequestDelete(self.selected_row)) {
            self.confirm.reset();
        }
    }

    fn resolve_confirm(&mut self, accept: bool) {
        let action = if accept {
            SessionAction::ConfirmDelete
        } else {
            SessionAction::CancelDelete
        };
        if !self.dispatch(action) {
            return;
        }
        if !accept {
            self.status.set_raw("Delete cancelled.");
        }
        if self.engine.state().is_empty() {
            self.focus = Focus::default();
        }
    }

    fn on_exit(&mut self) {
        let dirty = !self.engine.state().draft().is_empty();
        if self.options.confirm_exit && dirty && !self.exit_armed {
            self.exit_armed = true;
            self.status.pending_exit();
            return;
        }
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::Draft,
        form::{EditState, SessionState},
    };
    use crossterm::event::{KeyCode, KeyModifiers};

    fn app() -> App {
        App::new(
            SessionEngine::default(),
            "Test".to_string(),
            UiOptions::default(),
        )
    }

    fn app_with(records: &[(&str, &str, &str)]) -> App {
        let records = records
            .iter()
            .map(|(name, email, age)| Record::try_from(Draft::new(*name, *email, *age)).unwrap())
            .collect();
        App::new(
            SessionEngine::new(SessionState::with_records(records)),
            "Test".to_string(),
            UiOptions::default(),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, ch: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL));
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    fn fill_form(app: &mut App, name: &str, email: &str, age: &str) {
        type_text(app, name);
        press(app, KeyCode::Tab);
        type_text(app, email);
        press(app, KeyCode::Tab);
        type_text(app, age);
    }

    #[test]
    fn typing_and_enter_adds_a_record() {
        let mut app = app();
        fill_form(&mut app, "Alice", "a@x.com", "30");
        press(&mut app, KeyCode::Enter);
        let state = app.engine.state();
        assert_eq!(state.len(), 1);
        assert_eq!(state.records()[0].email(), "a@x.com");
        assert!(state.draft().is_empty());
        assert_eq!(app.status.message(), "New record added!");
        assert_eq!(app.focus, Focus::Field(FieldName::Name));
    }

    #[test]
    fn invalid_submit_focuses_first_error() {
        let mut app = app();
        fill_form(&mut app, "Alice", "nope", "30");
        press(&mut app, KeyCode::Enter);
        assert!(app.engine.state().is_empty());
        assert_eq!(app.focus, Focus::Field(FieldName::Email));
        assert_eq!(app.status.message(), "1 issue(s) remaining");
    }

    #[test]
    fn letters_in_table_do_not_reach_the_form() {
        let mut app = app_with(&[("Alice", "a@x.com", "30")]);
        app.focus = Focus::Table;
        press(&mut app, KeyCode::Char('x'));
        assert!(app.engine.state().draft().is_empty());
    }

    #[test]
    fn edit_row_round_trip_updates_in_place() {
        let mut app = app_with(&[("Alice", "a@x.com", "30"), ("Bob", "b@x.com", "40")]);
        app.focus = Focus::Table;
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.engine.state().edit_state(), EditState::Editing(1));
        assert_eq!(app.focus, Focus::Field(FieldName::Name));

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        type_text(&mut app, "41");
        press(&mut app, KeyCode::Enter);

        let state = app.engine.state();
        assert_eq!(state.len(), 2);
        assert_eq!(state.records()[1].age(), 41);
        assert_eq!(state.edit_state(), EditState::None);
        assert_eq!(app.status.message(), "Record updated successfully!");
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut app = app_with(&[("Alice", "a@x.com", "30"), ("Bob", "b@x.com", "40")]);
        app.focus = Focus::Table;
        press(&mut app, KeyCode::Char('d'));
        assert!(app.engine.state().pending_delete().is_some());

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.engine.state().len(), 2);
        assert_eq!(app.status.message(), "Delete cancelled.");

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.engine.state().len(), 1);
        assert_eq!(app.engine.state().records()[0].name(), "Bob");
        assert_eq!(app.status.message(), "Record deleted successfully!");
    }

    #[test]
    fn enter_resolves_with_focused_button() {
        let mut app = app_with(&[("Alice", "a@x.com", "30")]);
        app.focus = Focus::Table;
        press(&mut app, KeyCode::Delete);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.engine.state().len(), 1);
        assert!(app.engine.state().pending_delete().is_none());

        press(&mut app, KeyCode::Delete);
        press(&mut app, KeyCode::Enter);
        assert!(app.engine.state().is_empty());
        assert_eq!(app.focus, Focus::default());
    }

    #[test]
    fn prompt_swallows_form_keys() {
        let mut app = app_with(&[("Alice", "a@x.com", "30")]);
        app.focus = Focus::Table;
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.engine.state().edit_state(), EditState::None);
        assert!(app.engine.state().pending_delete().is_some());
    }

    #[test]
    fn selection_follows_shrinking_store() {
        let mut app = app_with(&[("Alice", "a@x.com", "30"), ("Bob", "b@x.com", "40")]);
        app.focus = Focus::Table;
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_row, 1);
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.selected_row, 0);
    }

    #[test]
    fn quitting_with_unsubmitted_text_needs_confirmation() {
        let mut app = app();
        type_text(&mut app, "Al");
        ctrl(&mut app, 'q');
        assert!(!app.should_quit);
        assert!(app.exit_armed);
        ctrl(&mut app, 'q');
        assert!(app.should_quit);
    }

    #[test]
    fn quitting_clean_form_is_immediate() {
        let mut app = app();
        ctrl(&mut app, 'q');
        assert!(app.should_quit);
    }
}
