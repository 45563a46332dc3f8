/// Focus and the pending "clear on next edit" request.
///
/// The transitions here only flip flags; the entry decides what the flags
/// mean for the value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusState {
    focused: bool,
    pending_clear: bool,
}

impl FocusState {
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn pending_clear(&self) -> bool {
        self.pending_clear
    }

    /// Enter the focused state. Returns `false` if already focused.
    pub(crate) fn gain(&mut self) -> bool {
        !std::mem::replace(&mut self.focused, true)
    }

    /// Leave the focused state, arming a pending clear when
    /// `arm_clear` is set. Returns `false` if already unfocused.
    pub(crate) fn lose(&mut self, arm_clear: bool) -> bool {
        if !std::mem::replace(&mut self.focused, false) {
            return false;
        }
        if arm_clear {
            self.pending_clear = true;
        }
        true
    }

    /// Consume the pending clear, returning whether one was armed.
    pub(crate) fn take_pending_clear(&mut self) -> bool {
        std::mem::take(&mut self.pending_clear)
    }
}
