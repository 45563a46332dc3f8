//! # Number Form Example
//!
//! Three numeric fields composed into one form:
//! - Routing child messages through a parent enum with `Command::map`
//! - Tab / Shift+Tab commit the focused field, then move focus with `FocusRing`
//! - `clear_on_edit` on the quantity field: leave it, come back, type, and the
//!   old value is replaced
//! - A disabled field that focus skips over
//! - Logging commits to `number_form.log` (set `RUST_LOG=trace` to see every
//!   keystroke verdict)
//!
//! Run with: `cargo run --example number_form`

use numfield::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use numfield::ratatui::layout::{Alignment, Constraint, Layout};
use numfield::ratatui::style::{Color, Modifier, Style};
use numfield::ratatui::text::{Line, Span};
use numfield::ratatui::widgets::{Block, Borders, Paragraph};
use numfield::ratatui::Frame;
use numfield::widgets::focus::FocusRing;
use numfield::widgets::number_input::{self, DisplayType, NumberInput};
use numfield::{Command, Component, Model, ProgramOptions, TerminalEvent};

const LABELS: [&str; 4] = ["Unit price", "Quantity", "Discount %", "Tax rate %"];

struct NumberForm {
    fields: [NumberInput; 4],
    ring: FocusRing<4>,
    committed: [Option<f64>; 4],
    // Field to restore when the terminal regains focus.
    resume: Option<usize>,
}

#[derive(Debug)]
enum Msg {
    Field(usize, number_input::Message),
    Advance(KeyEvent),
    Retreat(KeyEvent),
    TerminalFocus(bool),
    Quit,
}

impl NumberForm {
    fn total(&self) -> Option<f64> {
        let price = self.committed[0]?;
        let quantity = self.committed[1]?;
        let discount = self.committed[2].unwrap_or(0.0);
        let tax = self.committed[3].unwrap_or(0.0);
        Some(price * quantity * (1.0 - discount / 100.0) * (1.0 + tax / 100.0))
    }

    /// Let the focused field see the Tab (which commits it) before focus moves.
    fn forward_tab(&mut self, key: KeyEvent) -> Command<Msg> {
        match self.ring.focused() {
            Some(i) => self.fields[i]
                .update(number_input::Message::KeyPress(key))
                .map(move |m| Msg::Field(i, m)),
            None => Command::none(),
        }
    }
}

fn lift(cmd: Command<(usize, number_input::Message)>) -> Command<Msg> {
    cmd.map(|(i, m)| Msg::Field(i, m))
}

impl Model for NumberForm {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let mut fields = [
            NumberInput::new("0.00")
                .with_allow_negative(false)
                .with_formatter(DisplayType::Dollar, |raw: &str| format!("$ {raw}")),
            NumberInput::new("1")
                .with_allow_negative(false)
                .with_allow_decimal(false)
                .with_clear_on_edit(true),
            NumberInput::new("0").with_allow_negative(false),
            NumberInput::new("").with_value("8.25").with_disabled(true),
        ];
        let mut ring = FocusRing::new();
        let cmd = lift(ring.focus(0, &mut fields));
        (
            NumberForm {
                fields,
                ring,
                committed: [None, None, None, Some(8.25)],
                resume: None,
            },
            cmd,
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Field(i, m) => {
                if let number_input::Message::Committed(n) = m {
                    log::info!("{} committed: {n}", LABELS[i]);
                    self.committed[i] = Some(n);
                }
                self.fields[i].update(m).map(move |m| Msg::Field(i, m))
            }
            Msg::Advance(key) => {
                let commit = self.forward_tab(key);
                Command::batch([commit, lift(self.ring.focus_next(&mut self.fields))])
            }
            Msg::Retreat(key) => {
                let commit = self.forward_tab(key);
                Command::batch([commit, lift(self.ring.focus_prev(&mut self.fields))])
            }
            Msg::TerminalFocus(false) => {
                self.resume = self.ring.focused();
                lift(self.ring.release(&mut self.fields))
            }
            Msg::TerminalFocus(true) => match self.resume.take() {
                Some(i) => lift(self.ring.focus(i, &mut self.fields)),
                None => Command::none(),
            },
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let area = frame.area();

        let [title_area, form_area, total_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(12),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .areas(area);

        let title = Paragraph::new("Line Item")
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, title_area);

        let rows: [_; 4] = Layout::vertical([Constraint::Length(3); 4]).areas(form_area);
        for (i, row) in rows.into_iter().enumerate() {
            let border = if self.fields[i].focused() {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(LABELS[i]);
            let inner = block.inner(row);
            frame.render_widget(block, row);
            self.fields[i].view(frame, inner);
        }

        let total = match self.total() {
            Some(t) => Line::styled(format!("Total: {t:.2}"), Style::default().fg(Color::Green)),
            None => Line::styled(
                "Commit a price and a quantity",
                Style::default().fg(Color::DarkGray),
            ),
        };
        frame.render_widget(
            Paragraph::new(total)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            total_area,
        );

        let help = Paragraph::new(Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(" commit+next  "),
            Span::styled("Shift+Tab", Style::default().fg(Color::Cyan)),
            Span::raw(" commit+prev  "),
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(" commit  "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(" quit"),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(help, help_area);
    }

    fn on_event(&self, event: TerminalEvent) -> Option<Msg> {
        let focused = self.ring.focused();
        match event {
            TerminalEvent::Key(key) => match (key.code, key.modifiers) {
                (KeyCode::Esc, _) => Some(Msg::Quit),
                (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Some(Msg::Quit),
                (KeyCode::Tab, _) => Some(Msg::Advance(key)),
                (KeyCode::BackTab, _) => Some(Msg::Retreat(key)),
                _ => focused.map(|i| Msg::Field(i, number_input::Message::KeyPress(key))),
            },
            TerminalEvent::Paste(text) => {
                focused.map(|i| Msg::Field(i, number_input::Message::Paste(text)))
            }
            TerminalEvent::FocusGained => Some(Msg::TerminalFocus(true)),
            TerminalEvent::FocusLost => Some(Msg::TerminalFocus(false)),
        }
    }
}

#[numfield::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = ProgramOptions {
        title: Some("numfield".into()),
        focus_reporting: true,
        log_file: Some("number_form.log".into()),
        ..ProgramOptions::default()
    };
    let form = numfield::run_with::<NumberForm>((), options).await?;
    if let Some(total) = form.total() {
        println!("Total: {total:.2}");
    }
    Ok(())
}
