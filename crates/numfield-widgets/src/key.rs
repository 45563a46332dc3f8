//! Translation of crossterm key events into host-neutral key intents.
//!
//! Everything downstream of this module (the keystroke filter, the entry
//! state machine) sees only [`KeyIntent`], never raw key codes or modifier
//! bits.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a keystroke means to a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    /// A digit `0`-`9` from the main row or the keypad.
    Digit(u8),
    /// The `.` key.
    DecimalPoint,
    /// The `-` key.
    NegativeSign,
    /// Cursor movement or deletion.
    Navigation(NavigationKey),
    /// Ctrl/Cmd + A, C, V, or X.
    Clipboard(ClipboardAction),
    /// Enter or Tab.
    Commit(CommitKey),
    /// Anything else: letters, symbols, unrecognized combos.
    Other,
}

/// Keys the host handles with its default editing behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKey {
    Backspace,
    Delete,
    Escape,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    /// Function key `F1`..`F24`.
    Function(u8),
}

/// Select-all and clipboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardAction {
    SelectAll,
    Copy,
    Cut,
    Paste,
}

/// The two commit gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitKey {
    Enter,
    /// Tab or Shift+Tab.
    Tab,
}

impl KeyIntent {
    /// Classify a crossterm key event.
    pub fn from_key_event(key: &KeyEvent) -> Self {
        let command = key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER);
        match key.code {
            KeyCode::Char(c) if command => match c.to_ascii_lowercase() {
                'a' => KeyIntent::Clipboard(ClipboardAction::SelectAll),
                'c' => KeyIntent::Clipboard(ClipboardAction::Copy),
                'x' => KeyIntent::Clipboard(ClipboardAction::Cut),
                'v' => KeyIntent::Clipboard(ClipboardAction::Paste),
                _ => KeyIntent::Other,
            },
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::ALT) => KeyIntent::Other,
            KeyCode::Char(c) => Self::from_char(c),
            KeyCode::Enter => KeyIntent::Commit(CommitKey::Enter),
            KeyCode::Tab | KeyCode::BackTab => KeyIntent::Commit(CommitKey::Tab),
            KeyCode::Backspace => KeyIntent::Navigation(NavigationKey::Backspace),
            KeyCode::Delete => KeyIntent::Navigation(NavigationKey::Delete),
            KeyCode::Esc => KeyIntent::Navigation(NavigationKey::Escape),
            KeyCode::Left => KeyIntent::Navigation(NavigationKey::Left),
            KeyCode::Right => KeyIntent::Navigation(NavigationKey::Right),
            KeyCode::Up => KeyIntent::Navigation(NavigationKey::Up),
            KeyCode::Down => KeyIntent::Navigation(NavigationKey::Down),
            KeyCode::Home => KeyIntent::Navigation(NavigationKey::Home),
            KeyCode::End => KeyIntent::Navigation(NavigationKey::End),
            KeyCode::F(n) if (1..=24).contains(&n) => {
                KeyIntent::Navigation(NavigationKey::Function(n))
            }
            _ => KeyIntent::Other,
        }
    }

    /// Classify a bare character, as typed or pasted.
    pub fn from_char(c: char) -> Self {
        match c {
            '0'..='9' => KeyIntent::Digit(c as u8 - b'0'),
            '.' => KeyIntent::DecimalPoint,
            '-' => KeyIntent::NegativeSign,
            _ => KeyIntent::Other,
        }
    }

    /// The character this intent inserts into the text, if any.
    pub fn inserted_char(self) -> Option<char> {
        match self {
            KeyIntent::Digit(d) => Some((b'0' + d) as char),
            KeyIntent::DecimalPoint => Some('.'),
            KeyIntent::NegativeSign => Some('-'),
            _ => None,
        }
    }
}

impl From<&KeyEvent> for KeyIntent {
    fn from(key: &KeyEvent) -> Self {
        KeyIntent::from_key_event(key)
    }
}
