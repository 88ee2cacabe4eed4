use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use super::pagination::ScrollStep;

/// Which half of the screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Form,
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Quit,
    ToggleFocus,
    Submit,
    NextField,
    PrevField,
    LeaveForm,
    Scroll(ScrollStep),
    EditSelected,
    DeleteSelected,
    Edit(KeyEvent),
    None,
}

pub fn classify(key: &KeyEvent, focus: Focus) -> KeyCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => KeyCommand::Quit,
            KeyCode::Char('c') | KeyCode::Char('C') => KeyCommand::Quit,
            KeyCode::Char('s') | KeyCode::Char('S') => KeyCommand::Submit,
            _ => KeyCommand::None,
        };
    }

    match focus {
        Focus::Form => match key.code {
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => KeyCommand::PrevField,
            KeyCode::Tab | KeyCode::Down => KeyCommand::NextField,
            KeyCode::BackTab | KeyCode::Up => KeyCommand::PrevField,
            KeyCode::Esc => KeyCommand::LeaveForm,
            _ => KeyCommand::Edit(*key),
        },
        Focus::Table => match key.code {
            KeyCode::Tab | KeyCode::BackTab => KeyCommand::ToggleFocus,
            KeyCode::Up | KeyCode::Char('k') => KeyCommand::Scroll(ScrollStep::Up(1)),
            KeyCode::Down | KeyCode::Char('j') => KeyCommand::Scroll(ScrollStep::Down(1)),
            KeyCode::PageUp => KeyCommand::Scroll(ScrollStep::PageUp),
            KeyCode::PageDown => KeyCommand::Scroll(ScrollStep::PageDown),
            KeyCode::Home => KeyCommand::Scroll(ScrollStep::Top),
            KeyCode::End => KeyCommand::Scroll(ScrollStep::Bottom),
            KeyCode::Enter | KeyCode::Char('e') => KeyCommand::EditSelected,
            KeyCode::Delete | KeyCode::Char('d') => KeyCommand::DeleteSelected,
            KeyCode::Char('q') => KeyCommand::Quit,
            _ => KeyCommand::None,
        },
    }
}

/// Wheel movement over the table, wherever the focus is.
pub fn classify_mouse(mouse: &MouseEvent) -> Option<ScrollStep> {
    match mouse.kind {
        MouseEventKind::ScrollDown => Some(ScrollStep::Down(1)),
        MouseEventKind::ScrollUp => Some(ScrollStep::Up(1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn ctrl_s_submits_from_either_side() {
        let ctrl_s = key(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(classify(&ctrl_s, Focus::Form), KeyCommand::Submit);
        assert_eq!(classify(&ctrl_s, Focus::Table), KeyCommand::Submit);
    }

    #[test]
    fn letters_edit_in_form_but_act_in_table() {
        let d = key(KeyCode::Char('d'), KeyModifiers::NONE);
        assert_eq!(classify(&d, Focus::Form), KeyCommand::Edit(d));
        assert_eq!(classify(&d, Focus::Table), KeyCommand::DeleteSelected);
    }

    #[test]
    fn table_navigation_maps_to_scroll_steps() {
        let end = key(KeyCode::End, KeyModifiers::NONE);
        let down = key(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(
            classify(&end, Focus::Table),
            KeyCommand::Scroll(ScrollStep::Bottom)
        );
        assert_eq!(
            classify(&down, Focus::Table),
            KeyCommand::Scroll(ScrollStep::Down(1))
        );
    }

    #[test]
    fn shift_tab_moves_to_previous_field() {
        let back = key(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(classify(&back, Focus::Form), KeyCommand::PrevField);
    }
}
