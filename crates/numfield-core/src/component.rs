use crate::command::Command;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// `Component` mirrors [`Model`](crate::Model) with one difference: its
/// [`view`](Component::view) method receives an `area: Rect`, so a parent form
/// decides where each field is drawn.
///
/// # Composition pattern
///
/// Wrap the child's message type in a variant of the parent message and lift
/// the child's commands with [`Command::map`]:
///
/// ```rust,ignore
/// use numfield_core::{Command, Component, Model};
/// use numfield_widgets::number_input::{self, NumberInput};
///
/// enum Msg {
///     Amount(number_input::Message),
/// }
///
/// fn update(&mut self, msg: Msg) -> Command<Msg> {
///     match msg {
///         Msg::Amount(m) => self.amount.update(m).map(Msg::Amount),
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] for side effects.
    ///
    /// The returned command uses the component's own `Message` type; the
    /// parent lifts it with [`.map()`](Command::map).
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`].
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Whether this component currently has focus.
    ///
    /// A parent queries this to decide which child receives keyboard events.
    fn focused(&self) -> bool {
        false
    }
}
