use crossterm::event::{KeyEvent, KeyEventKind};

/// Terminal events delivered to [`Model::on_event`](crate::Model::on_event).
///
/// Each variant wraps the corresponding [`crossterm::event::Event`] payload.
/// Mouse and resize events are not represented: numeric fields only react to
/// keys, pastes, and focus changes, and the runtime re-renders on every frame
/// anyway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A key press or repeat. Releases are filtered out by the runtime.
    Key(KeyEvent),
    /// Terminal window gained focus.
    FocusGained,
    /// Terminal window lost focus.
    FocusLost,
    /// Bracketed paste content.
    Paste(String),
}

impl TerminalEvent {
    /// Convert a crossterm event, dropping the kinds this crate ignores.
    pub fn from_crossterm(event: crossterm::event::Event) -> Option<Self> {
        match event {
            crossterm::event::Event::Key(k) if k.kind != KeyEventKind::Release => {
                Some(TerminalEvent::Key(k))
            }
            crossterm::event::Event::FocusGained => Some(TerminalEvent::FocusGained),
            crossterm::event::Event::FocusLost => Some(TerminalEvent::FocusLost),
            crossterm::event::Event::Paste(s) => Some(TerminalEvent::Paste(s)),
            _ => None,
        }
    }
}
