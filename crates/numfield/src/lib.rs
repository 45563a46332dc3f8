//! **numfield** -- constrained numeric text entry for [`ratatui`] apps.
//!
//! This is the umbrella crate that re-exports everything you need to build a
//! numfield application from a single dependency:
//!
//! ```toml
//! [dependencies]
//! numfield = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`numfield_core`] are available at the crate root
//!   ([`Model`], [`Component`], [`Command`], [`Program`], [`run`],
//!   [`run_with`], etc.).
//! * The [`widgets`] module re-exports everything from [`numfield_widgets`]
//!   ([`NumberInput`](widgets::number_input::NumberInput),
//!   [`FocusRing`](widgets::focus::FocusRing), key intents).
//! * [`ratatui`], [`crossterm`], and [`tokio`] are re-exported so downstream
//!   crates do not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use numfield::widgets::number_input::{self, NumberInput};
//! use numfield::{Command, Component, Model, TerminalEvent};
//! use ratatui::Frame;
//!
//! struct Amount {
//!     field: NumberInput,
//! }
//!
//! enum Msg {
//!     Field(number_input::Message),
//! }
//!
//! impl Model for Amount {
//!     type Message = Msg;
//!     type Flags = ();
//!
//!     fn init(_: ()) -> (Self, Command<Msg>) {
//!         let mut field = NumberInput::new("0.00").with_allow_negative(false);
//!         let cmd = field.focus().map(Msg::Field);
//!         (Amount { field }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Command<Msg> {
//!         match msg {
//!             Msg::Field(number_input::Message::Committed(_)) => Command::quit(),
//!             Msg::Field(m) => self.field.update(m).map(Msg::Field),
//!         }
//!     }
//!
//!     fn view(&self, frame: &mut Frame) {
//!         let area = frame.area();
//!         self.field.view(frame, area);
//!     }
//!
//!     fn on_event(&self, event: TerminalEvent) -> Option<Msg> {
//!         match event {
//!             TerminalEvent::Key(key) => Some(Msg::Field(number_input::Message::KeyPress(key))),
//!             TerminalEvent::Paste(text) => Some(Msg::Field(number_input::Message::Paste(text))),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let amount = numfield::run::<Amount>(()).await.unwrap();
//!     println!("{}", amount.field.number());
//! }
//! ```

pub use numfield_core::*;
pub mod widgets {
    pub use numfield_widgets::*;
}

// Re-export dependencies for use in demos and downstream crates
pub use crossterm;
pub use ratatui;
pub use tokio;
