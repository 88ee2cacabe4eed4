use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::UserField;

use super::FormDraft;

/// What the form reports upward. The form itself keeps no state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Changed { field: UserField, value: String },
    Submit,
}

pub fn handle_text_edit(buffer: &mut String, key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(ch) => {
            if key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                return false;
            }
            buffer.push(ch);
            true
        }
        KeyCode::Backspace => buffer.pop().is_some(),
        KeyCode::Delete => {
            let changed = !buffer.is_empty();
            buffer.clear();
            changed
        }
        _ => false,
    }
}

/// Translate a key aimed at the focused input into a form event.
pub fn form_event(draft: &FormDraft, focused: UserField, key: &KeyEvent) -> Option<FormEvent> {
    if key.code == KeyCode::Enter {
        return Some(FormEvent::Submit);
    }
    let mut value = draft.value(focused).to_string();
    handle_text_edit(&mut value, key).then_some(FormEvent::Changed {
        field: focused,
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_appends_to_focused_value() {
        let mut draft = FormDraft::new();
        draft.set_field(UserField::Department, "Sale".into());
        let event = form_event(&draft, UserField::Department, &key(KeyCode::Char('s')));
        assert_eq!(
            event,
            Some(FormEvent::Changed {
                field: UserField::Department,
                value: "Sales".into()
            })
        );
        assert_eq!(draft.value(UserField::Department), "Sale");
    }

    #[test]
    fn enter_submits() {
        let draft = FormDraft::new();
        let event = form_event(&draft, UserField::Email, &key(KeyCode::Enter));
        assert_eq!(event, Some(FormEvent::Submit));
    }

    #[test]
    fn control_chords_and_empty_backspace_are_ignored() {
        let draft = FormDraft::new();
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(form_event(&draft, UserField::FirstName, &ctrl_a), None);
        assert_eq!(
            form_event(&draft, UserField::FirstName, &key(KeyCode::Backspace)),
            None
        );
    }

    #[test]
    fn delete_clears_the_buffer() {
        let mut buffer = "abc".to_string();
        assert!(handle_text_edit(&mut buffer, &key(KeyCode::Delete)));
        assert!(buffer.is_empty());
    }

    #[test]
    fn shifted_characters_are_typed() {
        let mut buffer = String::new();
        let upper = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert!(handle_text_edit(&mut buffer, &upper));
        assert_eq!(buffer, "A");
    }
}
