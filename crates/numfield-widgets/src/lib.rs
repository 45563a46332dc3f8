//! Numeric entry widgets for the **numfield** TUI runtime.
//!
//! [`NumberInput`](number_input::NumberInput) implements
//! [`numfield_core::Component`], so it can be embedded inside any
//! [`numfield_core::Model`] and placed freely within [`ratatui`] layouts.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`number_input`] | Numeric text field: keystroke filter, clear-on-edit, commit on Enter/Tab |
//! | [`focus`] | [`FocusRing`](focus::FocusRing) for moving focus across several fields |
//! | [`key`] | Translation of crossterm key events into [`KeyIntent`](key::KeyIntent)s |

pub mod focus;
pub mod key;
pub mod number_input;
