//! Keyboard focus across a fixed set of number inputs.

use numfield_core::command::Command;
use numfield_core::component::Component;

use crate::number_input::{Message, NumberInput};

/// Tracks which of `N` fields holds focus and moves it, blurring the old
/// field and focusing the new one so each emits its own lifecycle messages.
///
/// Disabled fields are skipped when cycling. Commands carry the index of the
/// field a message came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusRing<const N: usize> {
    focused: Option<usize>,
}

impl<const N: usize> FocusRing<N> {
    /// A ring with no field focused yet.
    pub fn new() -> Self {
        Self { focused: None }
    }

    /// Index of the focused slot, if any.
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.focused == Some(index)
    }

    /// Move focus to `index` (clamped to the last slot). Refused, leaving
    /// focus where it was, if that field will not take focus.
    pub fn focus(
        &mut self,
        index: usize,
        fields: &mut [NumberInput; N],
    ) -> Command<(usize, Message)> {
        if N == 0 {
            return Command::none();
        }
        let index = index.min(N - 1);
        if self.focused == Some(index) || fields[index].config().disabled {
            return Command::none();
        }
        let blurred = match self.focused {
            Some(old) => fields[old].blur().map(move |m| (old, m)),
            None => Command::none(),
        };
        let focused = fields[index].focus().map(move |m| (index, m));
        self.focused = fields[index].focused().then_some(index);
        log::debug!("focus ring: {index} of {N}");
        Command::batch([blurred, focused])
    }

    /// Blur the focused field, leaving nothing focused.
    pub fn release(&mut self, fields: &mut [NumberInput; N]) -> Command<(usize, Message)> {
        match self.focused.take() {
            Some(old) => fields[old].blur().map(move |m| (old, m)),
            None => Command::none(),
        }
    }

    /// Focus the next enabled field, wrapping around after the last.
    pub fn focus_next(&mut self, fields: &mut [NumberInput; N]) -> Command<(usize, Message)> {
        let start = self.focused.map_or(0, |i| i + 1);
        match (0..N).map(|k| (start + k) % N).find(|&i| !fields[i].config().disabled) {
            Some(i) => self.focus(i, fields),
            None => Command::none(),
        }
    }

    /// Focus the previous enabled field, wrapping around before the first.
    pub fn focus_prev(&mut self, fields: &mut [NumberInput; N]) -> Command<(usize, Message)> {
        let start = self.focused.unwrap_or(0) + N;
        match (1..=N).map(|k| (start - k) % N).find(|&i| !fields[i].config().disabled) {
            Some(i) => self.focus(i, fields),
            None => Command::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> [NumberInput; 3] {
        [
            NumberInput::new("a"),
            NumberInput::new("b").with_disabled(true),
            NumberInput::new("c"),
        ]
    }

    #[test]
    fn starts_unfocused() {
        let ring = FocusRing::<3>::new();
        assert_eq!(ring.focused(), None);
        assert!(!ring.is_focused(0));
    }

    #[test]
    fn focus_emits_blur_then_focus() {
        let mut fields = fields();
        let mut ring = FocusRing::new();
        assert_eq!(
            ring.focus(0, &mut fields).into_messages(),
            vec![(0, Message::Focused)]
        );
        assert_eq!(
            ring.focus(2, &mut fields).into_messages(),
            vec![(0, Message::Blurred), (2, Message::Focused)]
        );
        assert!(!fields[0].focused());
        assert!(fields[2].focused());
    }

    #[test]
    fn refocusing_same_field_is_silent() {
        let mut fields = fields();
        let mut ring = FocusRing::new();
        ring.focus(0, &mut fields);
        assert!(ring.focus(0, &mut fields).is_none());
    }

    #[test]
    fn disabled_field_refuses_focus() {
        let mut fields = fields();
        let mut ring = FocusRing::new();
        ring.focus(0, &mut fields);
        assert!(ring.focus(1, &mut fields).is_none());
        assert!(ring.is_focused(0));
        assert!(fields[0].focused());
    }

    #[test]
    fn next_skips_disabled_and_wraps() {
        let mut fields = fields();
        let mut ring = FocusRing::new();
        ring.focus_next(&mut fields);
        assert_eq!(ring.focused(), Some(0));
        ring.focus_next(&mut fields);
        assert_eq!(ring.focused(), Some(2));
        ring.focus_next(&mut fields);
        assert_eq!(ring.focused(), Some(0));
    }

    #[test]
    fn prev_skips_disabled_and_wraps() {
        let mut fields = fields();
        let mut ring = FocusRing::new();
        ring.focus(0, &mut fields);
        ring.focus_prev(&mut fields);
        assert_eq!(ring.focused(), Some(2));
        ring.focus_prev(&mut fields);
        assert_eq!(ring.focused(), Some(0));
    }

    #[test]
    fn focus_clamps() {
        let mut fields = fields();
        let mut ring = FocusRing::new();
        ring.focus(10, &mut fields);
        assert_eq!(ring.focused(), Some(2));
    }

    #[test]
    fn release_blurs() {
        let mut fields = fields();
        let mut ring = FocusRing::new();
        ring.focus(2, &mut fields);
        assert_eq!(
            ring.release(&mut fields).into_messages(),
            vec![(2, Message::Blurred)]
        );
        assert_eq!(ring.focused(), None);
        assert!(ring.release(&mut fields).is_none());
    }

    #[test]
    fn all_disabled_stays_put() {
        let mut fields = [NumberInput::new("").with_disabled(true)];
        let mut ring = FocusRing::new();
        assert!(ring.focus_next(&mut fields).is_none());
        assert_eq!(ring.focused(), None);
    }
}
