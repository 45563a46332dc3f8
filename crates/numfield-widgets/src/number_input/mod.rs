//! Single-line numeric input component.
//!
//! [`NumberInput`] pairs a [`NumericEntry`] (value, keystroke rules, focus
//! lifecycle, commit detection) with an on-screen edit buffer. Keys are
//! classified once into [`KeyIntent`]s; the entry decides whether each one
//! may take effect, and only then does the buffer apply its default editing.

mod buffer;
mod commit;
mod config;
mod entry;
mod filter;
mod format;
mod lifecycle;
mod value;

pub use commit::parse_number;
pub use config::{DisplayType, NumberInputConfig, ParseDisplayTypeError};
pub use entry::{KeyOutcome, Notification, NumericEntry, TextHost};
pub use filter::{is_complete, is_in_progress, Verdict};
pub use format::DisplayFormatter;
pub use lifecycle::FocusState;
pub use value::ValueStore;

use buffer::EditBuffer;
use crossterm::event::KeyEvent;
use numfield_core::command::Command;
use numfield_core::component::Component;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::key::{ClipboardAction, KeyIntent, NavigationKey};

/// Style configuration for the number input.
#[derive(Debug, Clone)]
pub struct NumberInputStyle {
    /// Style applied to the prompt string.
    pub prompt: Style,
    /// Style applied to the value.
    pub text: Style,
    /// Style applied to the placeholder text.
    pub placeholder: Style,
    /// Style applied to the cursor cell.
    pub cursor: Style,
    /// Style applied to selected text.
    pub selection: Style,
    /// Replaces every other style while the field is disabled.
    pub disabled: Style,
}

impl Default for NumberInputStyle {
    fn default() -> Self {
        Self {
            prompt: Style::default().fg(Color::Cyan),
            text: Style::default(),
            placeholder: Style::default().fg(Color::DarkGray),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
            selection: Style::default().bg(Color::Blue),
            disabled: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        }
    }
}

/// Messages for the number input component.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A keyboard event to process.
    KeyPress(KeyEvent),
    /// Bracketed paste. Characters the field would reject are dropped.
    Paste(String),
    /// Emitted when the user changes the value.
    Changed(String),
    /// Emitted when the field gains focus.
    Focused,
    /// Emitted when the field loses focus.
    Blurred,
    /// Emitted on Enter or Tab when the value changed since the last commit.
    Committed(f64),
}

impl From<Notification> for Message {
    fn from(notification: Notification) -> Self {
        match notification {
            Notification::InputChanged(value) => Message::Changed(value),
            Notification::FocusGained => Message::Focused,
            Notification::FocusLost => Message::Blurred,
            Notification::Committed(n) => Message::Committed(n),
        }
    }
}

/// A single-line numeric input component.
///
/// # Example
///
/// ```ignore
/// let mut price = NumberInput::new("0.00")
///     .with_prompt("$ ")
///     .with_clear_on_edit(true)
///     .with_allow_negative(false);
///
/// // Focus returns a command carrying `Message::Focused`.
/// let cmd = price.focus();
///
/// // In your parent component's update method, forward key presses and
/// // react to `Message::Committed(n)` coming back.
/// // let cmd = price.update(Message::KeyPress(key));
/// ```
pub struct NumberInput {
    entry: NumericEntry,
    buffer: EditBuffer,
    placeholder: String,
    prompt: String,
    style: NumberInputStyle,
    formatters: Vec<(DisplayType, Box<dyn DisplayFormatter>)>,
    block: Option<Block<'static>>,
}

impl NumberInput {
    /// Create an empty number input with the given placeholder text.
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            entry: NumericEntry::default(),
            buffer: EditBuffer::default(),
            placeholder: placeholder.into(),
            prompt: String::new(),
            style: NumberInputStyle::default(),
            formatters: Vec::new(),
            block: None,
        }
    }

    pub fn with_config(mut self, config: NumberInputConfig) -> Self {
        self.entry.set_config(config);
        self
    }

    /// Set the initial value. The field starts clean, so committing it
    /// unchanged emits nothing.
    pub fn with_value(mut self, value: &str) -> Self {
        self.entry = self.entry.with_value(value);
        self.buffer.reset_to(self.entry.value());
        self
    }

    pub fn with_clear_on_edit(self, on: bool) -> Self {
        self.map_config(|c| c.clear_on_edit = on)
    }

    pub fn with_readonly(self, on: bool) -> Self {
        self.map_config(|c| c.readonly = on)
    }

    pub fn with_disabled(self, on: bool) -> Self {
        self.map_config(|c| c.disabled = on)
    }

    pub fn with_autoselect(self, on: bool) -> Self {
        self.map_config(|c| c.autoselect = on)
    }

    pub fn with_allow_negative(self, on: bool) -> Self {
        self.map_config(|c| c.allow_negative = on)
    }

    pub fn with_allow_decimal(self, on: bool) -> Self {
        self.map_config(|c| c.allow_decimal = on)
    }

    pub fn with_display_type(self, display_type: DisplayType) -> Self {
        self.map_config(|c| c.display_type = display_type)
    }

    /// Set the prompt string displayed before the value.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_style(mut self, style: NumberInputStyle) -> Self {
        self.style = style;
        self
    }

    /// Wrap the input in a block (e.g., with borders and a title).
    pub fn with_block(mut self, block: Block<'static>) -> Self {
        self.block = Some(block);
        self
    }

    /// Register how values render while unfocused for `display_type`.
    /// A later registration for the same type replaces the earlier one.
    pub fn with_formatter(
        mut self,
        display_type: DisplayType,
        formatter: impl DisplayFormatter + 'static,
    ) -> Self {
        self.formatters.retain(|(t, _)| *t != display_type);
        self.formatters.push((display_type, Box::new(formatter)));
        self
    }

    fn map_config(mut self, f: impl FnOnce(&mut NumberInputConfig)) -> Self {
        let mut config = *self.entry.config();
        f(&mut config);
        self.entry.set_config(config);
        self
    }

    pub fn config(&self) -> &NumberInputConfig {
        self.entry.config()
    }

    /// Replace the configuration at runtime. The value is not revalidated.
    pub fn set_config(&mut self, config: NumberInputConfig) {
        self.entry.set_config(config);
    }

    /// Programmatically set the value and move the cursor to the end.
    ///
    /// The value is normalized and marked dirty, so the next Enter or Tab
    /// commits it, but no [`Message::Changed`] is emitted.
    pub fn set_value(&mut self, value: &str) {
        self.entry.set_value(value);
        self.buffer.reset_to(self.entry.value());
    }

    pub fn value(&self) -> &str {
        self.entry.value()
    }

    /// The number the current value commits as.
    pub fn number(&self) -> f64 {
        self.entry.number()
    }

    pub fn is_empty(&self) -> bool {
        !self.entry.has_value()
    }

    pub fn is_dirty(&self) -> bool {
        self.entry.is_dirty()
    }

    /// Whether the value is a finished number (not `"-"`, `"5."`, or `"01"`).
    pub fn is_complete(&self) -> bool {
        self.entry.is_complete()
    }

    pub fn has_negative_symbol(&self) -> bool {
        self.entry.has_negative_symbol()
    }

    /// Whether the next keystroke will wipe the value first.
    pub fn pending_clear(&self) -> bool {
        self.entry.pending_clear()
    }

    /// Return the current cursor position (character index).
    pub fn cursor_position(&self) -> usize {
        self.buffer.cursor()
    }

    /// Whether the whole value is selected.
    pub fn is_selected(&self) -> bool {
        self.buffer.is_selected()
    }

    /// Text held by the field's clipboard (Ctrl+C / Ctrl+X).
    pub fn clipboard(&self) -> &str {
        self.buffer.clipboard()
    }

    /// The underlying state machine.
    pub fn entry(&self) -> &NumericEntry {
        &self.entry
    }

    /// Give keyboard focus to this input.
    ///
    /// Emits [`Message::Focused`], or nothing if the field is disabled or
    /// already focused.
    pub fn focus(&mut self) -> Command<Message> {
        match self.entry.focus(&mut self.buffer) {
            Some(n) => Command::message(n.into()),
            None => Command::none(),
        }
    }

    /// Remove keyboard focus. Emits [`Message::Blurred`] if it was focused.
    pub fn blur(&mut self) -> Command<Message> {
        match self.entry.blur() {
            Some(n) => {
                self.buffer.deselect();
                Command::message(n.into())
            }
            None => Command::none(),
        }
    }

    fn handle_key(&mut self, intent: KeyIntent, pasted: Option<&str>) -> Command<Message> {
        let outcome = self.entry.keydown(intent, &mut self.buffer);
        let mut out = Vec::new();
        if let Some(n) = outcome.notification {
            out.push(n);
        }
        if outcome.verdict.is_accept() {
            let edited = match pasted {
                Some(text) => self.paste(text),
                None => self.apply(intent),
            };
            out.extend(edited);
        }
        Command::batch(out.into_iter().map(|n| Command::message(n.into())))
    }

    /// The buffer's default behavior for an accepted key.
    fn apply(&mut self, intent: KeyIntent) -> Option<Notification> {
        let editable = self.entry.is_editable();
        match intent {
            KeyIntent::Digit(_) | KeyIntent::DecimalPoint | KeyIntent::NegativeSign => {
                let c = intent.inserted_char()?;
                if !editable {
                    return None;
                }
                self.buffer.type_char(c);
                self.push_input()
            }
            KeyIntent::Navigation(NavigationKey::Backspace) => {
                if editable && self.buffer.backspace() {
                    self.push_input()
                } else {
                    None
                }
            }
            KeyIntent::Navigation(NavigationKey::Delete) => {
                if editable && self.buffer.delete() {
                    self.push_input()
                } else {
                    None
                }
            }
            KeyIntent::Navigation(NavigationKey::Left) => {
                self.buffer.move_left();
                None
            }
            KeyIntent::Navigation(NavigationKey::Right) => {
                self.buffer.move_right();
                None
            }
            KeyIntent::Navigation(NavigationKey::Home) => {
                self.buffer.move_home();
                None
            }
            KeyIntent::Navigation(NavigationKey::End) => {
                self.buffer.move_end();
                None
            }
            KeyIntent::Clipboard(ClipboardAction::SelectAll) => {
                self.buffer.select_all();
                None
            }
            KeyIntent::Clipboard(ClipboardAction::Copy) => {
                self.buffer.copy();
                None
            }
            KeyIntent::Clipboard(ClipboardAction::Cut) => {
                if editable && self.buffer.cut() {
                    self.push_input()
                } else {
                    None
                }
            }
            KeyIntent::Clipboard(ClipboardAction::Paste) => {
                let text = self.buffer.clipboard().to_string();
                self.paste(&text)
            }
            // Up, Down, Escape, function keys, commit keys.
            _ => None,
        }
    }

    /// Insert `text` at the cursor one character at a time, dropping every
    /// character the filter would reject at that point.
    fn paste(&mut self, text: &str) -> Option<Notification> {
        if !self.entry.is_editable() {
            return None;
        }
        let mut changed = self.buffer.delete_selection();
        if changed {
            self.entry.input(&self.buffer.text());
        }
        for c in text.chars() {
            let intent = KeyIntent::from_char(c);
            if intent.inserted_char().is_none() || !self.entry.check(intent).is_accept() {
                continue;
            }
            self.buffer.type_char(c);
            self.entry.input(&self.buffer.text());
            self.buffer.sync(self.entry.value());
            changed = true;
        }
        log::trace!("paste {text:?} -> {:?}", self.entry.value());
        changed.then(|| Notification::InputChanged(self.entry.value().to_string()))
    }

    /// Hand the buffer's text to the entry and adopt the normalized result.
    fn push_input(&mut self) -> Option<Notification> {
        let notification = self.entry.input(&self.buffer.text());
        self.buffer.sync(self.entry.value());
        notification
    }

    /// What an unfocused field shows: the registered formatter's rendering
    /// of the value, or the raw value.
    fn display_unfocused(&self) -> String {
        let value = self.entry.value();
        let display_type = self.entry.config().display_type;
        match self.formatters.iter().find(|(t, _)| *t == display_type) {
            Some((_, formatter)) if !value.is_empty() => formatter.format(value),
            _ => value.to_string(),
        }
    }
}

impl Component for NumberInput {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) => {
                if !self.entry.is_focused() {
                    return Command::none();
                }
                self.handle_key(KeyIntent::from_key_event(&key), None)
            }
            Message::Paste(text) => {
                if !self.entry.is_focused() {
                    return Command::none();
                }
                self.handle_key(KeyIntent::Clipboard(ClipboardAction::Paste), Some(&text))
            }
            Message::Changed(_) | Message::Focused | Message::Blurred | Message::Committed(_) => {
                Command::none()
            }
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(area);
            frame.render_widget(block.clone(), area);
            inner
        } else {
            area
        };

        let disabled = self.entry.config().disabled;
        let pick = |style: Style| if disabled { self.style.disabled } else { style };

        let mut spans = Vec::new();
        if !self.prompt.is_empty() {
            spans.push(Span::styled(self.prompt.as_str(), pick(self.style.prompt)));
        }

        if !self.entry.is_focused() {
            let shown = self.display_unfocused();
            if shown.is_empty() {
                spans.push(Span::styled(self.placeholder.as_str(), pick(self.style.placeholder)));
            } else {
                spans.push(Span::styled(shown, pick(self.style.text)));
            }
        } else {
            let chars = self.buffer.chars();
            let cursor = self.buffer.cursor();
            let available = (inner.width as usize)
                .saturating_sub(self.prompt.width())
                .max(1);

            // Keep the cursor cell on screen.
            let offset = (cursor + 1).saturating_sub(available);
            let end = (offset + available).min(chars.len());
            let text_style = if self.buffer.is_selected() {
                self.style.selection
            } else {
                self.style.text
            };

            let before: String = chars[offset..cursor].iter().collect();
            if !before.is_empty() {
                spans.push(Span::styled(before, text_style));
            }
            match chars.get(cursor) {
                Some(c) if cursor < end => {
                    spans.push(Span::styled(c.to_string(), self.style.cursor));
                    let after: String = chars[cursor + 1..end].iter().collect();
                    if !after.is_empty() {
                        spans.push(Span::styled(after, text_style));
                    }
                }
                _ => spans.push(Span::styled(" ", self.style.cursor)),
            }
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), inner);
    }

    fn focused(&self) -> bool {
        self.entry.is_focused()
    }
}
