use std::fmt;
use std::str::FromStr;

/// How a committed value is meant to be presented.
///
/// Nothing in the entry logic consults this; it only selects which
/// [`DisplayFormatter`](super::DisplayFormatter), if any, renders the value
/// while the field is unfocused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DisplayType {
    #[default]
    Dollar,
    Time,
}

impl fmt::Display for DisplayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DisplayType::Dollar => "dollar",
            DisplayType::Time => "time",
        })
    }
}

/// Error returned when parsing an unknown [`DisplayType`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown display type `{0}` (expected `dollar` or `time`)")]
pub struct ParseDisplayTypeError(pub String);

impl FromStr for DisplayType {
    type Err = ParseDisplayTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dollar" => Ok(DisplayType::Dollar),
            "time" => Ok(DisplayType::Time),
            _ => Err(ParseDisplayTypeError(s.to_string())),
        }
    }
}

/// Behavior switches for a numeric field.
///
/// Changing any of these at runtime never rewrites the current value: a
/// `"-3.5"` entered while signs and decimals were allowed stays as-is after
/// both are turned off, and only new keystrokes are held to the new rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberInputConfig {
    /// Wipe the value on the first keystroke after a blur that left it non-empty.
    pub clear_on_edit: bool,
    /// Focusable and committable, but the text cannot be edited.
    pub readonly: bool,
    /// Refuses focus and all input.
    pub disabled: bool,
    /// Select the whole value when the field gains focus.
    pub autoselect: bool,
    /// Permit a single leading `-`.
    pub allow_negative: bool,
    /// Permit a single `.`.
    pub allow_decimal: bool,
    pub display_type: DisplayType,
}

impl Default for NumberInputConfig {
    fn default() -> Self {
        Self {
            clear_on_edit: false,
            readonly: false,
            disabled: false,
            autoselect: true,
            allow_negative: true,
            allow_decimal: true,
            display_type: DisplayType::default(),
        }
    }
}
