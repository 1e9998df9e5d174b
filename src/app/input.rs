use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a bound key asks the runtime to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyAction {
    Submit,
    Quit,
    CancelEdit,
    FocusStep(i32),
    SelectRow(i32),
    EditRow,
    DeleteRow,
    ConfirmAccept,
    ConfirmReject,
    ConfirmToggle,
    ConfirmResolve,
}

/// Applies an unbound key to the text of a field. Returns the new text, or
/// `None` when the key does not edit.
pub(crate) fn edit_text(current: &str, key: &KeyEvent) -> Option<String> {
    match key.code {
        KeyCode::Char(ch) => {
            if key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                return None;
            }
            let mut next = current.to_string();
            next.push(ch);
            Some(next)
        }
        KeyCode::Backspace => {
            let mut next = current.to_string();
            next.pop()?;
            Some(next)
        }
        KeyCode::Delete if !current.is_empty() => Some(String::new()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_appends_characters() {
        assert_eq!(edit_text("Al", &key(KeyCode::Char('i'))), Some("Ali".into()));
        let upper = KeyEvent::new(KeyCode::Char('Z'), KeyModifiers::SHIFT);
        assert_eq!(edit_text("", &upper), Some("Z".into()));
    }

    #[test]
    fn backspace_on_empty_is_not_an_edit() {
        assert_eq!(edit_text("", &key(KeyCode::Backspace)), None);
        assert_eq!(edit_text("ab", &key(KeyCode::Backspace)), Some("a".into()));
    }

    #[test]
    fn delete_clears_the_field() {
        assert_eq!(edit_text("abc", &key(KeyCode::Delete)), Some(String::new()));
        assert_eq!(edit_text("", &key(KeyCode::Delete)), None);
    }

    #[test]
    fn control_characters_are_ignored() {
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(edit_text("x", &ctrl_a), None);
    }
}
