/// Renders a field's raw value for display while the field is unfocused.
///
/// Register one per [`DisplayType`](super::DisplayType) with
/// [`NumberInput::with_formatter`](super::NumberInput::with_formatter). The
/// formatter only changes what is drawn; the stored value, the keystroke
/// rules, and the committed number all keep using the raw text.
///
/// Any `Fn(&str) -> String + Send` closure is a formatter:
///
/// ```rust,ignore
/// let input = NumberInput::new("0.00")
///     .with_formatter(DisplayType::Dollar, |raw: &str| format!("${raw}"));
/// ```
pub trait DisplayFormatter: Send {
    fn format(&self, raw: &str) -> String;
}

impl<F> DisplayFormatter for F
where
    F: Fn(&str) -> String + Send,
{
    fn format(&self, raw: &str) -> String {
        self(raw)
    }
}
