//! Key translation for the interactive host
//!
//! Maps crossterm key events to terminal actions. Editing keys are applied to
//! the pending input directly via `apply_edit`; everything else is returned to
//! the app to route.

use crate::input::line_editor::LineEditor;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press means to the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Submit the pending input
    Submit,
    RecallPrevious,
    RecallNext,
    /// Edit the pending input
    Edit(EditAction),
    Minimize,
    ToggleTerminal,
    NextPage,
    PreviousPage,
    Quit,
    /// Key has no binding
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    DeleteToStart,
}

/// Translate a key press. `terminal_focused` is true while the terminal is
/// open and not minimized.
pub fn action_for_key(event: &KeyEvent, terminal_focused: bool) -> KeyAction {
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let alt = event.modifiers.contains(KeyModifiers::ALT);

    // Global bindings
    match event.code {
        KeyCode::Char('q') | KeyCode::Char('c') if ctrl => return KeyAction::Quit,
        KeyCode::Char('t') if ctrl => return KeyAction::ToggleTerminal,
        KeyCode::F(2) => return KeyAction::ToggleTerminal,
        _ => {}
    }

    if !terminal_focused {
        return match event.code {
            KeyCode::Tab | KeyCode::Right => KeyAction::NextPage,
            KeyCode::BackTab | KeyCode::Left => KeyAction::PreviousPage,
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::Ignored,
        };
    }

    match event.code {
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Esc => KeyAction::Minimize,
        KeyCode::Up => KeyAction::RecallPrevious,
        KeyCode::Down => KeyAction::RecallNext,

        KeyCode::Char(_) if alt => KeyAction::Ignored,
        KeyCode::Char('u') if ctrl => KeyAction::Edit(EditAction::DeleteToStart),
        KeyCode::Char('a') if ctrl => KeyAction::Edit(EditAction::Home),
        KeyCode::Char('e') if ctrl => KeyAction::Edit(EditAction::End),
        KeyCode::Char(_) if ctrl => KeyAction::Ignored,
        KeyCode::Char(c) => KeyAction::Edit(EditAction::Insert(c)),

        KeyCode::Backspace => KeyAction::Edit(EditAction::Backspace),
        KeyCode::Delete => KeyAction::Edit(EditAction::Delete),
        KeyCode::Left => KeyAction::Edit(EditAction::Left),
        KeyCode::Right => KeyAction::Edit(EditAction::Right),
        KeyCode::Home => KeyAction::Edit(EditAction::Home),
        KeyCode::End => KeyAction::Edit(EditAction::End),
        _ => KeyAction::Ignored,
    }
}

/// Apply an editing action to the input line
pub fn apply_edit(editor: &mut LineEditor, action: EditAction) {
    match action {
        EditAction::Insert(c) => editor.insert_char(c),
        EditAction::Backspace => {
            editor.backspace();
        }
        EditAction::Delete => {
            editor.delete();
        }
        EditAction::Left => editor.move_left(),
        EditAction::Right => editor.move_right(),
        EditAction::Home => editor.move_home(),
        EditAction::End => editor.move_end(),
        EditAction::DeleteToStart => editor.delete_to_start(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_global_bindings() {
        for focused in [true, false] {
            assert_eq!(action_for_key(&ctrl('q'), focused), KeyAction::Quit);
            assert_eq!(action_for_key(&ctrl('c'), focused), KeyAction::Quit);
            assert_eq!(action_for_key(&ctrl('t'), focused), KeyAction::ToggleTerminal);
            assert_eq!(
                action_for_key(&key(KeyCode::F(2)), focused),
                KeyAction::ToggleTerminal
            );
        }
    }

    #[test]
    fn test_focused_bindings() {
        assert_eq!(action_for_key(&key(KeyCode::Enter), true), KeyAction::Submit);
        assert_eq!(action_for_key(&key(KeyCode::Esc), true), KeyAction::Minimize);
        assert_eq!(action_for_key(&key(KeyCode::Up), true), KeyAction::RecallPrevious);
        assert_eq!(action_for_key(&key(KeyCode::Down), true), KeyAction::RecallNext);
        assert_eq!(
            action_for_key(&key(KeyCode::Char('h')), true),
            KeyAction::Edit(EditAction::Insert('h'))
        );
        assert_eq!(
            action_for_key(&KeyEvent::new(KeyCode::Char('H'), KeyModifiers::SHIFT), true),
            KeyAction::Edit(EditAction::Insert('H'))
        );
        assert_eq!(
            action_for_key(&ctrl('u'), true),
            KeyAction::Edit(EditAction::DeleteToStart)
        );
        assert_eq!(action_for_key(&ctrl('x'), true), KeyAction::Ignored);
    }

    #[test]
    fn test_unfocused_bindings() {
        assert_eq!(action_for_key(&key(KeyCode::Enter), false), KeyAction::Ignored);
        assert_eq!(action_for_key(&key(KeyCode::Char('a')), false), KeyAction::Ignored);
        assert_eq!(action_for_key(&key(KeyCode::Tab), false), KeyAction::NextPage);
        assert_eq!(action_for_key(&key(KeyCode::BackTab), false), KeyAction::PreviousPage);
        assert_eq!(action_for_key(&key(KeyCode::Esc), false), KeyAction::Quit);
    }

    #[test]
    fn test_apply_edit() {
        let mut editor = LineEditor::new();
        for c in "helpx".chars() {
            apply_edit(&mut editor, EditAction::Insert(c));
        }
        apply_edit(&mut editor, EditAction::Backspace);
        assert_eq!(editor.text(), "help");

        apply_edit(&mut editor, EditAction::Home);
        apply_edit(&mut editor, EditAction::Delete);
        assert_eq!(editor.text(), "elp");

        apply_edit(&mut editor, EditAction::End);
        apply_edit(&mut editor, EditAction::Left);
        apply_edit(&mut editor, EditAction::DeleteToStart);
        assert_eq!(editor.text(), "p");
    }
}
