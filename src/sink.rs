//! Observer protocol between the engine and its frontend
//!
//! The engine owns no console or display state; it calls into a [`Sink`]
//! injected by the frontend. Every callback is a defaulted no-op so a
//! consumer implements only what it observes.
//!
//! Two implementations ship with the crate:
//! - [`NullSink`]: discards everything (headless stepping, benchmarks)
//! - [`EventLog`]: records every callback in order, for assertions in tests

use crate::machine::Word;

/// Callbacks the engine issues while a program runs.
///
/// `print` and `report_error` carry console text; the remaining callbacks are
/// observational refresh hints (current line, a register/memory/buffer cell
/// that just changed) for a visualizing frontend.
pub trait Sink {
    /// Console text (program output and exit messages).
    fn print(&mut self, _text: &str) {}

    /// A fatal user-program error, annotated with the offending line index.
    /// The engine halts after issuing this.
    fn report_error(&mut self, _line: usize, _message: &str) {}

    /// A register was written.
    fn register_changed(&mut self, _name: &str, _value: Word) {}

    /// A main memory cell was written.
    fn memory_changed(&mut self, _address: usize, _value: Word) {}

    /// A string buffer slot was written or blanked.
    fn buffer_changed(&mut self, _index: usize, _ch: char) {}

    /// The console was cleared by a `CLR` instruction.
    fn console_cleared(&mut self) {}

    /// The program counter moved to a new current line.
    fn current_line_changed(&mut self, _line: usize) {}

    /// The memory head register took a new address.
    fn memory_head_changed(&mut self, _address: Word) {}
}

/// A sink that ignores every callback.
#[derive(Debug, Default)]
pub struct NullSink;

impl Sink for NullSink {}

/// One recorded engine callback.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Print(String),
    Error { line: usize, message: String },
    Register { name: String, value: Word },
    Memory { address: usize, value: Word },
    Buffer { index: usize, ch: char },
    ConsoleCleared,
    CurrentLine(usize),
    MemoryHead(Word),
}

/// A sink that records every callback in order.
///
/// Used by the integration tests to assert on console output and refresh
/// hints without a terminal attached.
#[derive(Debug, Default)]
pub struct EventLog {
    pub events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        EventLog { events: Vec::new() }
    }

    /// All `print` texts, in emission order.
    pub fn printed(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Print(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// All reported errors as `(line, message)` pairs.
    pub fn errors(&self) -> Vec<(usize, &str)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Error { line, message } => Some((*line, message.as_str())),
                _ => None,
            })
            .collect()
    }
}

impl Sink for EventLog {
    fn print(&mut self, text: &str) {
        self.events.push(Event::Print(text.to_string()));
    }

    fn report_error(&mut self, line: usize, message: &str) {
        self.events.push(Event::Error {
            line,
            message: message.to_string(),
        });
    }

    fn register_changed(&mut self, name: &str, value: Word) {
        self.events.push(Event::Register {
            name: name.to_string(),
            value,
        });
    }

    fn memory_changed(&mut self, address: usize, value: Word) {
        self.events.push(Event::Memory { address, value });
    }

    fn buffer_changed(&mut self, index: usize, ch: char) {
        self.events.push(Event::Buffer { index, ch });
    }

    fn console_cleared(&mut self) {
        self.events.push(Event::ConsoleCleared);
    }

    fn current_line_changed(&mut self, line: usize) {
        self.events.push(Event::CurrentLine(line));
    }

    fn memory_head_changed(&mut self, address: Word) {
        self.events.push(Event::MemoryHead(address));
    }
}
