//! Runtime for **numfield** terminal applications.
//!
//! `numfield-core` provides the traits, types, and event loop that host the
//! numeric entry widgets. The design follows the [Elm Architecture]: a program
//! is an **init -> update -> view** cycle, with follow-up messages pushed
//! through [`Command`]s.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level application trait (init / update / view / on_event) |
//! | [`Component`] | Reusable sub-model that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Follow-up message, quit request, or a batch of them |
//! | [`TerminalEvent`] | Key, paste, and focus events offered to the model |
//! | [`Program`] | Wires a [`Model`] to a real terminal and drives the event loop |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for unit-testing a [`Model`] |
//!
//! Everything runs on one task and every update runs to completion before the
//! next event is looked at.
//!
//! [Elm Architecture]: https://guide.elm-lang.org/architecture/

pub mod command;
pub mod component;
pub mod event;
pub mod model;
pub mod runtime;
pub mod testing;

pub use command::Command;
pub use component::Component;
pub use event::TerminalEvent;
pub use model::Model;
pub use runtime::{log_to_file, OutputTarget, Program, ProgramError, ProgramOptions};

/// Run a numfield application with default options.
pub async fn run<M: Model>(flags: M::Flags) -> Result<M, ProgramError> {
    Program::<M>::new(flags)?.run().await
}

/// Run with custom options.
pub async fn run_with<M: Model>(
    flags: M::Flags,
    options: ProgramOptions,
) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run().await
}
