//! Main TUI application state and logic

use crate::interpreter::engine::{Interpreter, RunState};
use crate::machine::Word;
use crate::program::Program;
use crate::sink::Sink;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Instant;

/// Which pane is currently focused (scrollable panes only)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Console,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Console,
            FocusedPane::Console => FocusedPane::Source,
        }
    }
}

/// One line of console output.
#[derive(Debug, Clone)]
pub struct ConsoleLine {
    pub text: String,
    pub is_error: bool,
}

/// The sink the TUI injects into the engine: collects console text, leaves
/// the refresh hints to direct state reads at render time.
#[derive(Debug, Default)]
pub struct Console {
    pub lines: Vec<ConsoleLine>,
}

impl Sink for Console {
    fn print(&mut self, text: &str) {
        self.lines.push(ConsoleLine {
            text: text.to_string(),
            is_error: false,
        });
    }

    fn report_error(&mut self, line: usize, message: &str) {
        self.lines.push(ConsoleLine {
            text: format!("line {}: {}", line + 1, message),
            is_error: true,
        });
    }

    fn console_cleared(&mut self) {
        self.lines.clear();
    }
}

/// The main application state
pub struct App {
    /// The execution engine
    pub interpreter: Interpreter<Program>,

    /// Console output collected from the engine
    pub console: Console,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub console_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether play mode (auto-step) is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,
}

impl App {
    pub fn new(interpreter: Interpreter<Program>) -> Self {
        App {
            interpreter,
            console: Console::default(),
            focused_pane: FocusedPane::Source,
            source_scroll: 0,
            console_scroll: 0,
            should_quit: false,
            status_message: String::from("r: reset & run-ready, s: step, space: play"),
            is_playing: false,
            last_play_time: Instant::now(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Play mode: one step per pacing interval
            if self.is_playing {
                let delay = self.interpreter.config().step_delay;
                if self.last_play_time.elapsed() >= delay {
                    if self.interpreter.has_next_line() {
                        self.step_engine();
                    } else {
                        self.is_playing = false;
                        self.status_message = self.end_of_run_message();
                    }
                    self.last_play_time = Instant::now();
                }
            }

            // Poll with timeout so play mode keeps ticking
            if event::poll(std::time::Duration::from_millis(25))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(pane_area);

        // Left column: Source (top) | Console (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[0]);

        // Right column: Registers | Memory | String buffer
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(self.interpreter.registers().iter().count() as u16 + 2),
                Constraint::Min(0),
                Constraint::Length(4),
            ])
            .split(columns[1]);

        let current_line = match self.interpreter.state() {
            RunState::Ready | RunState::Running => Some(self.interpreter.pc()),
            RunState::Halted => Some(self.interpreter.last_line()),
            _ => None,
        };

        super::panes::render_source_pane(
            frame,
            left_rows[0],
            self.interpreter.source().lines(),
            current_line,
            self.interpreter.state() == RunState::Halted,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_console_pane(
            frame,
            left_rows[1],
            &self.console.lines,
            self.focused_pane == FocusedPane::Console,
            &mut self.console_scroll,
        );

        super::panes::render_registers_pane(frame, right_rows[0], self.interpreter.registers());

        super::panes::render_memory_pane(
            frame,
            right_rows[1],
            self.interpreter.memory(),
            self.memory_head(),
        );

        super::panes::render_buffer_pane(frame, right_rows[2], self.interpreter.buffer());

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.interpreter.state(),
            self.is_playing,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.is_playing = false;
                self.interpreter.get_ready_to_run(&mut self.console);
                self.console_scroll = usize::MAX;
                self.status_message = match self.interpreter.state() {
                    RunState::Ready => "Ready".to_string(),
                    _ => self.end_of_run_message(),
                };
            }
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Right => {
                self.is_playing = false;
                if self.interpreter.state() == RunState::Idle {
                    self.interpreter.get_ready_to_run(&mut self.console);
                }
                self.step_engine();
            }
            KeyCode::Char(' ') => {
                if self.interpreter.state() == RunState::Idle {
                    self.interpreter.get_ready_to_run(&mut self.console);
                }
                self.is_playing = !self.is_playing;
                self.status_message = if self.is_playing {
                    "Playing...".to_string()
                } else {
                    "Paused".to_string()
                };
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Source => {
                    self.source_scroll = self.source_scroll.saturating_sub(1);
                }
                FocusedPane::Console => {
                    self.console_scroll = self.console_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Source => {
                    self.source_scroll = self.source_scroll.saturating_add(1);
                }
                FocusedPane::Console => {
                    self.console_scroll = self.console_scroll.saturating_add(1);
                }
            },
            _ => {}
        }
    }

    /// Take one engine step and refresh the status line.
    fn step_engine(&mut self) {
        if !self.interpreter.has_next_line() {
            self.status_message = self.end_of_run_message();
            return;
        }

        let state = self.interpreter.step(&mut self.console);
        self.console_scroll = usize::MAX;
        self.status_message = match state {
            RunState::Running => format!("Stepped (line {})", self.interpreter.pc() + 1),
            _ => self.end_of_run_message(),
        };
    }

    fn end_of_run_message(&self) -> String {
        match self.interpreter.state() {
            RunState::Finished => "Execution finished (r to reset)".to_string(),
            RunState::Halted => format!(
                "Halted on line {} (r to reset)",
                self.interpreter.last_line() + 1
            ),
            RunState::Idle => "Idle (r to reset)".to_string(),
            _ => "Ready".to_string(),
        }
    }

    fn memory_head(&self) -> Word {
        use crate::machine::registers::MH;
        self.interpreter.registers().get(MH)
    }
}
