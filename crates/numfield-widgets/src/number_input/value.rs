/// The text under edit plus the flags derived from or tied to it.
///
/// Every assignment goes through [`set`](ValueStore::set), which repairs a
/// misplaced sign, recomputes the negative-sign flag, and marks the value
/// dirty for the next commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueStore {
    value: String,
    dirty: bool,
    has_negative_symbol: bool,
}

impl ValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store already holding `raw` (normalized), not yet dirty.
    pub fn with_initial(raw: &str) -> Self {
        let mut store = Self::default();
        store.set(raw);
        store.dirty = false;
        store
    }

    /// Normalize and store `raw`, marking the value dirty.
    ///
    /// A `-` anywhere but the first position means the text bypassed the
    /// keystroke filter (a programmatic assignment, or an insertion at the
    /// cursor); all `-` characters are then removed rather than the value
    /// being rejected.
    pub fn set(&mut self, raw: &str) {
        let misplaced_sign = raw.char_indices().any(|(i, c)| c == '-' && i > 0);
        if misplaced_sign {
            let repaired: String = raw.chars().filter(|&c| c != '-').collect();
            log::debug!("repaired misplaced sign: {raw:?} -> {repaired:?}");
            self.value = repaired;
        } else {
            self.value.clear();
            self.value.push_str(raw);
        }
        self.has_negative_symbol = self.value.starts_with('-');
        self.dirty = true;
    }

    /// The stored text; empty when unset.
    pub fn get(&self) -> &str {
        &self.value
    }

    pub fn has_value(&self) -> bool {
        !self.value.is_empty()
    }

    pub fn has_negative_symbol(&self) -> bool {
        self.has_negative_symbol
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag, returning whether it was set.
    pub(crate) fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
