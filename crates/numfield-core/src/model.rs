use crate::command::Command;
use crate::event::TerminalEvent;
use ratatui::Frame;

/// The top-level application trait, following the [Elm Architecture].
///
/// The runtime drives an **init -> update -> view** cycle:
///
/// 1. [`init`](Model::init) creates the initial state and may return a
///    [`Command`].
/// 2. [`view`](Model::view) renders the current state to a [`ratatui::Frame`].
/// 3. Terminal events are offered to [`on_event`](Model::on_event), which maps
///    the ones the model cares about into messages.
/// 4. [`update`](Model::update) processes each message and optionally returns
///    a [`Command`].
///
/// # Example
///
/// ```rust,ignore
/// use numfield_core::{Command, Model, TerminalEvent};
/// use numfield_widgets::number_input::{self, NumberInput};
/// use ratatui::Frame;
///
/// struct Price { field: NumberInput }
///
/// enum Msg { Field(number_input::Message), Quit }
///
/// impl Model for Price {
///     type Message = Msg;
///     type Flags = ();
///
///     fn init(_: ()) -> (Self, Command<Msg>) {
///         let mut field = NumberInput::new("0.00");
///         let _ = field.focus();
///         (Price { field }, Command::none())
///     }
///
///     fn update(&mut self, msg: Msg) -> Command<Msg> {
///         match msg {
///             Msg::Field(m) => self.field.update(m).map(Msg::Field),
///             Msg::Quit => Command::quit(),
///         }
///     }
///
///     fn view(&self, frame: &mut Frame) {
///         let area = frame.area();
///         self.field.view(frame, area);
///     }
///
///     fn on_event(&self, event: TerminalEvent) -> Option<Msg> {
///         match event {
///             TerminalEvent::Key(key) => Some(Msg::Field(number_input::Message::KeyPress(key))),
///             _ => None,
///         }
///     }
/// }
/// ```
///
/// [Elm Architecture]: https://guide.elm-lang.org/architecture/
pub trait Model: Sized + Send + 'static {
    /// The application's message type.
    type Message: Send + 'static;

    /// Initialization data passed to [`Model::init`].
    ///
    /// Use `()` when no startup data is needed.
    type Flags: Send + 'static;

    /// Create the initial model state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Process a message, mutate state, and return a command for side effects.
    ///
    /// After `update` returns, the runtime re-renders via [`view`](Model::view).
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state to a ratatui [`Frame`].
    fn view(&self, frame: &mut Frame);

    /// Map a terminal event into a message, or drop it with `None`.
    ///
    /// Called with the model's current state, so routing can depend on which
    /// field is focused. The default implementation drops every event.
    fn on_event(&self, event: TerminalEvent) -> Option<Self::Message> {
        let _ = event;
        None
    }
}
