//! The numeric entry state machine.
//!
//! [`NumericEntry`] holds every piece of per-field state and is the only
//! place that state changes. It knows nothing about terminals: keys arrive as
//! [`KeyIntent`]s and the two things it needs from the surrounding text
//! widget go through [`TextHost`].

use super::commit;
use super::config::NumberInputConfig;
use super::filter::{self, Verdict};
use super::lifecycle::FocusState;
use super::value::ValueStore;
use crate::key::KeyIntent;

/// What an entry asks of the widget displaying its text.
///
/// Both calls are best-effort UI updates with no failure path.
pub trait TextHost {
    /// Select the entire displayed text.
    fn select_all(&mut self);
    /// Replace the displayed text without going through the input path.
    fn set_displayed_text(&mut self, text: &str);
}

/// Outward notifications, in the order the entry produced them.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// The user changed the value.
    InputChanged(String),
    FocusGained,
    FocusLost,
    /// Enter or Tab on a changed value.
    Committed(f64),
}

/// Result of a keydown.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyOutcome {
    pub verdict: Verdict,
    /// Set when the keydown consumed a pending clear and wiped the value.
    pub cleared: bool,
    /// `Committed` when this was a commit key on a dirty value.
    pub notification: Option<Notification>,
}

/// One numeric field's value, flags, focus, and configuration.
///
/// # Lifecycle
///
/// ```text
/// Unfocused --focus--> Focused(clean) --edit--> Focused(dirty)
///     ^                      ^                        |
///     |                      +------Enter / Tab-------+  emits Committed
///     +--------blur (arms pending clear)--------------+
/// ```
///
/// After a blur that leaves a value behind with `clear_on_edit` on, the next
/// keydown, whatever the key, empties the value before it is classified.
#[derive(Debug, Clone, Default)]
pub struct NumericEntry {
    store: ValueStore,
    focus: FocusState,
    config: NumberInputConfig,
}

impl NumericEntry {
    pub fn new(config: NumberInputConfig) -> Self {
        Self {
            store: ValueStore::new(),
            focus: FocusState::default(),
            config,
        }
    }

    /// Start from an initial value. Unlike [`set_value`](Self::set_value),
    /// this does not make the entry dirty.
    pub fn with_value(mut self, raw: &str) -> Self {
        self.store = ValueStore::with_initial(raw);
        self
    }

    pub fn config(&self) -> &NumberInputConfig {
        &self.config
    }

    /// Replace the configuration. The current value is left as it is.
    pub fn set_config(&mut self, config: NumberInputConfig) {
        self.config = config;
    }

    pub fn value(&self) -> &str {
        self.store.get()
    }

    pub fn has_value(&self) -> bool {
        self.store.has_value()
    }

    pub fn is_dirty(&self) -> bool {
        self.store.is_dirty()
    }

    pub fn has_negative_symbol(&self) -> bool {
        self.store.has_negative_symbol()
    }

    pub fn is_focused(&self) -> bool {
        self.focus.is_focused()
    }

    pub fn pending_clear(&self) -> bool {
        self.focus.pending_clear()
    }

    /// Whether the user may change the text.
    pub fn is_editable(&self) -> bool {
        !self.config.readonly && !self.config.disabled
    }

    /// Programmatic assignment. Normalized and marked dirty, but not
    /// reported as an input change.
    pub fn set_value(&mut self, raw: &str) {
        self.store.set(raw);
    }

    /// Gain focus. Refused while disabled; a no-op when already focused.
    pub fn focus(&mut self, host: &mut impl TextHost) -> Option<Notification> {
        if self.config.disabled || !self.focus.gain() {
            return None;
        }
        log::debug!("focus gained (value {:?})", self.store.get());
        if self.config.autoselect && self.store.has_value() {
            host.select_all();
        }
        Some(Notification::FocusGained)
    }

    /// Lose focus, arming a pending clear if `clear_on_edit` is on and a
    /// value remains. A no-op when already unfocused.
    pub fn blur(&mut self) -> Option<Notification> {
        let arm = self.config.clear_on_edit && self.store.has_value();
        if !self.focus.lose(arm) {
            return None;
        }
        log::debug!("focus lost (pending clear: {})", self.focus.pending_clear());
        Some(Notification::FocusLost)
    }

    /// Run a keydown through clear-on-edit, the filter, and commit detection.
    ///
    /// Disabled entries reject everything without touching state.
    pub fn keydown(&mut self, intent: KeyIntent, host: &mut impl TextHost) -> KeyOutcome {
        if self.config.disabled {
            return KeyOutcome {
                verdict: Verdict::Reject,
                cleared: false,
                notification: None,
            };
        }

        let cleared = self.consume_pending_clear(host);

        let verdict = self.check(intent);
        log::trace!("{intent:?} on {:?}: {verdict:?}", self.store.get());

        let notification = match intent {
            KeyIntent::Commit(key) => commit::take_commit(&mut self.store).map(|n| {
                log::debug!("committed {n} via {key:?}");
                Notification::Committed(n)
            }),
            _ => None,
        };

        KeyOutcome {
            verdict,
            cleared,
            notification,
        }
    }

    /// Run the filter alone, as the next keystroke would see it.
    pub fn check(&self, intent: KeyIntent) -> Verdict {
        filter::verdict(
            intent,
            self.store.get(),
            self.store.has_negative_symbol(),
            &self.config,
        )
    }

    /// The input path: the host changed its text after an accepted key.
    ///
    /// Returns the change notification carrying the normalized value, or
    /// `None` when the entry is not editable.
    pub fn input(&mut self, text: &str) -> Option<Notification> {
        if !self.is_editable() {
            return None;
        }
        self.store.set(text);
        Some(Notification::InputChanged(self.store.get().to_string()))
    }

    /// Whether the current value is a finished number under the current
    /// configuration (empty counts).
    pub fn is_complete(&self) -> bool {
        filter::is_complete(self.store.get(), &self.config)
    }

    /// The number the value would commit as.
    pub fn number(&self) -> f64 {
        commit::parse_number(self.store.get())
    }

    fn consume_pending_clear(&mut self, host: &mut impl TextHost) -> bool {
        if !self.focus.take_pending_clear() {
            return false;
        }
        // Readonly fields clear too; only the edit that follows is refused.
        if !(self.config.clear_on_edit && self.store.has_value()) {
            return false;
        }
        log::debug!("clearing {:?} on first edit after blur", self.store.get());
        self.store.set("");
        host.set_displayed_text("");
        true
    }
}
