//! # Single Field Example
//!
//! The smallest numfield program: one field, the app quits with the first
//! committed number and prints it.
//!
//! Run with: `cargo run --example single_field`

use numfield::crossterm::event::KeyCode;
use numfield::ratatui::layout::{Constraint, Layout};
use numfield::ratatui::widgets::{Block, Paragraph};
use numfield::ratatui::Frame;
use numfield::widgets::number_input::{self, NumberInput};
use numfield::{Command, Component, Model, TerminalEvent};

struct SingleField {
    field: NumberInput,
    result: Option<f64>,
}

#[derive(Debug)]
enum Msg {
    Field(number_input::Message),
    Quit,
}

impl Model for SingleField {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let mut field = NumberInput::new("type a number")
            .with_prompt("> ")
            .with_block(Block::bordered().title("Amount"));
        let cmd = field.focus().map(Msg::Field);
        (
            SingleField {
                field,
                result: None,
            },
            cmd,
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Field(number_input::Message::Committed(n)) => {
                self.result = Some(n);
                Command::quit()
            }
            Msg::Field(m) => self.field.update(m).map(Msg::Field),
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let [field_area, hint_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(frame.area());
        self.field.view(frame, field_area);
        frame.render_widget(Paragraph::new("Enter to commit, Esc to quit"), hint_area);
    }

    fn on_event(&self, event: TerminalEvent) -> Option<Msg> {
        match event {
            TerminalEvent::Key(key) if key.code == KeyCode::Esc => Some(Msg::Quit),
            TerminalEvent::Key(key) => Some(Msg::Field(number_input::Message::KeyPress(key))),
            TerminalEvent::Paste(text) => Some(Msg::Field(number_input::Message::Paste(text))),
            _ => None,
        }
    }
}

#[numfield::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app = numfield::run::<SingleField>(()).await?;
    match app.result {
        Some(n) => println!("{n}"),
        None => println!("nothing committed"),
    }
    Ok(())
}
