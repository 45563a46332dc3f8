use crate::command::{Action, Command, CommandInner};
use crate::event::TerminalEvent;
use crate::model::Model;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// A headless test harness that drives a [`Model`] without a real terminal.
///
/// Messages produced by [`Command::message`] are queued and flushed with
/// [`drain_messages`](TestProgram::drain_messages); a [`Command::quit`] is
/// recorded and can be checked with [`quit_requested`](TestProgram::quit_requested).
///
/// # Example
///
/// ```rust,ignore
/// use numfield_core::testing::TestProgram;
///
/// let mut prog = TestProgram::<PriceForm>::new(());
/// prog.send_event(TerminalEvent::Key(key(KeyCode::Char('4'))));
/// prog.send_event(TerminalEvent::Key(key(KeyCode::Enter)));
/// prog.drain_messages();
/// assert_eq!(prog.model().committed(), Some(4.0));
/// assert!(prog.render_string(20, 3).contains("4"));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending_messages: Vec<M::Message>,
    quit: bool,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending_messages: Vec::new(),
            quit: false,
        };
        program.collect(init_cmd);
        program
    }

    /// Send a message, triggering a single update cycle.
    ///
    /// Messages returned through commands are queued, not processed; call
    /// [`drain_messages`](TestProgram::drain_messages) to flush them.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect(cmd);
    }

    /// Offer a terminal event to [`Model::on_event`], as the runtime would,
    /// and send the resulting message if there is one.
    ///
    /// Returns `true` if the event was mapped to a message.
    pub fn send_event(&mut self, event: TerminalEvent) -> bool {
        match self.model.on_event(event) {
            Some(msg) => {
                self.send(msg);
                true
            }
            None => false,
        }
    }

    /// Process queued messages until no new ones are produced.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                let cmd = self.model.update(msg);
                self.collect(cmd);
            }
        }
    }

    /// Whether any processed command asked the program to quit.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Get a shared reference to the model for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get a mutable reference to the model for direct test setup.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Render the model to a ratatui [`Buffer`] of the given dimensions.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                self.model.view(frame);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Render the model and return the visible content as a plain string,
    /// one line per row.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        buffer_to_string(&self.render(width, height))
    }

    fn collect(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Action(Action::Message(msg)) => self.pending_messages.push(msg),
            CommandInner::Action(Action::Quit) => self.quit = true,
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect(cmd);
                }
            }
        }
    }
}

/// Flatten a rendered buffer into newline-separated rows.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area: Rect = buf.area;
    let mut output = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            output.push_str(buf[(x, y)].symbol());
        }
        if y + 1 < area.bottom() {
            output.push('\n');
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
    use ratatui::widgets::Paragraph;

    // Sums every number typed as a single digit; `q` quits.
    struct Tally {
        total: i64,
        log: Vec<String>,
    }

    #[derive(Debug)]
    enum TallyMsg {
        Add(i64),
        Echo(String),
        Quit,
    }

    impl Model for Tally {
        type Message = TallyMsg;
        type Flags = i64;

        fn init(start: i64) -> (Self, Command<TallyMsg>) {
            (
                Tally {
                    total: start,
                    log: vec![],
                },
                Command::none(),
            )
        }

        fn update(&mut self, msg: TallyMsg) -> Command<TallyMsg> {
            match msg {
                TallyMsg::Add(n) => {
                    self.total += n;
                    Command::message(TallyMsg::Echo(format!("+{n}")))
                }
                TallyMsg::Echo(s) => {
                    self.log.push(s);
                    Command::none()
                }
                TallyMsg::Quit => Command::quit(),
            }
        }

        fn view(&self, frame: &mut ratatui::Frame) {
            frame.render_widget(Paragraph::new(format!("Total: {}", self.total)), frame.area());
        }

        fn on_event(&self, event: TerminalEvent) -> Option<TallyMsg> {
            match event {
                TerminalEvent::Key(key) => match key.code {
                    KeyCode::Char('q') => Some(TallyMsg::Quit),
                    KeyCode::Char(c) => c.to_digit(10).map(|d| TallyMsg::Add(d as i64)),
                    _ => None,
                },
                _ => None,
            }
        }
    }

    fn key(c: char) -> TerminalEvent {
        TerminalEvent::Key(KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn init_with_flags() {
        let prog = TestProgram::<Tally>::new(42);
        assert_eq!(prog.model().total, 42);
    }

    #[test]
    fn send_updates_model() {
        let mut prog = TestProgram::<Tally>::new(0);
        prog.send(TallyMsg::Add(3));
        prog.send(TallyMsg::Add(4));
        assert_eq!(prog.model().total, 7);
    }

    #[test]
    fn events_route_through_on_event() {
        let mut prog = TestProgram::<Tally>::new(0);
        assert!(prog.send_event(key('5')));
        assert!(!prog.send_event(key('x')));
        assert_eq!(prog.model().total, 5);
    }

    #[test]
    fn chained_messages_wait_for_drain() {
        let mut prog = TestProgram::<Tally>::new(0);
        prog.send(TallyMsg::Add(1));
        assert!(prog.model().log.is_empty());
        prog.drain_messages();
        assert_eq!(prog.model().log, vec!["+1"]);
    }

    #[test]
    fn quit_is_recorded() {
        let mut prog = TestProgram::<Tally>::new(0);
        assert!(!prog.quit_requested());
        prog.send_event(key('q'));
        assert!(prog.quit_requested());
    }

    #[test]
    fn render_after_update() {
        let mut prog = TestProgram::<Tally>::new(-2);
        prog.send(TallyMsg::Add(1));
        assert!(prog.render_string(20, 1).contains("Total: -1"));
    }
}
