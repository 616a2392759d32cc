//! Execution driver for the assembly interpreter
//!
//! The driver owns the run/step/halt protocol:
//!
//! ```text
//! Idle → Ready → Running → Halted (error) | Finished (ran past last line)
//! ```
//!
//! `get_ready_to_run` moves the machine from any state to Ready (or Halted,
//! if the source has no executable line or a label is malformed). Each `step`
//! executes exactly one instruction; `fast_forward` steps until the run ends,
//! pacing with the configured delay so intermediate states stay observable.
//!
//! The program counter lives in the `PC` register and always points at the
//! *next* line to execute; advancing it skips blank, comment, and label lines
//! and always moves at least one line forward.

use crate::interpreter::decode::{decode, is_skippable};
use crate::interpreter::errors::ExecError;
use crate::interpreter::labels::LabelTable;
use crate::machine::buffer::StringBuffer;
use crate::machine::memory::MainMemory;
use crate::machine::registers::{RegisterFile, MH, PC};
use crate::machine::{MachineConfig, Word};
use crate::program::SourceLines;
use crate::sink::Sink;
use std::thread;

/// Console message printed when a run completes normally.
pub const EXIT_NORMAL: &str = "Execution finished";

/// Console message printed when a run halts on an error.
pub const EXIT_WITH_ERROR: &str = "Execution halted with error(s)";

/// Where the driver is in the run protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// No run in progress.
    Idle,
    /// Reset done, before the first step.
    Ready,
    /// At least one step taken, more lines remain.
    Running,
    /// The run stopped on a user-program error.
    Halted,
    /// The run completed past the last line without error.
    Finished,
}

/// The execution engine: one instance per execution session.
///
/// Constructed with its source provider; the observing [`Sink`] is injected
/// per call. Only the driver mutates the register/memory/buffer stores.
pub struct Interpreter<S: SourceLines> {
    source: S,
    config: MachineConfig,
    registers: RegisterFile,
    memory: MainMemory,
    buffer: StringBuffer,
    labels: LabelTable,
    state: RunState,
    last_line: usize,
}

impl<S: SourceLines> Interpreter<S> {
    pub fn new(source: S, config: MachineConfig) -> Self {
        let registers = RegisterFile::new(&config);
        let memory = MainMemory::new(config.memory_len);
        let buffer = StringBuffer::new(config.buffer_capacity);
        Interpreter {
            source,
            config,
            registers,
            memory,
            buffer,
            labels: LabelTable::default(),
            state: RunState::Idle,
            last_line: 0,
        }
    }

    /// Reset for a fresh run: scan labels, clear registers and buffer, reset
    /// the memory head, and move `PC` to the first executable line.
    ///
    /// Halts with `EmptyFile` if no executable line exists. Main memory is
    /// deliberately left untouched.
    pub fn get_ready_to_run(&mut self, sink: &mut dyn Sink) -> RunState {
        match self.try_get_ready(sink) {
            Ok(()) => {
                self.state = RunState::Ready;
                sink.current_line_changed(self.pc());
            }
            Err(err) => self.fail(sink, err),
        }
        self.state
    }

    fn try_get_ready(&mut self, sink: &mut dyn Sink) -> Result<(), ExecError> {
        self.labels = LabelTable::scan(&self.source)?;

        self.registers.clear(sink);
        self.registers.set(MH, 0, sink)?;
        self.buffer.clear(sink);
        self.last_line = 0;

        if self.source.line_count() == 0 || is_skippable(self.source.line(0)) {
            self.advance_pc(sink)?;
        }
        if self.pc() >= self.source.line_count() {
            return Err(ExecError::EmptyFile);
        }
        Ok(())
    }

    /// Execute the instruction at the current line.
    ///
    /// Reads the line at `PC`, records it as the last executed line, advances
    /// `PC` to the next executable line, then decodes and executes. After
    /// execution the memory head is validated so a corrupted `MH` halts
    /// before the next access. Errors are reported to the sink and halt the
    /// run; a no-op outside Ready/Running.
    pub fn step(&mut self, sink: &mut dyn Sink) -> RunState {
        if !matches!(self.state, RunState::Ready | RunState::Running) {
            return self.state;
        }

        match self.try_step(sink) {
            Ok(()) => {
                if self.pc() >= self.source.line_count() {
                    self.state = RunState::Finished;
                    sink.print(EXIT_NORMAL);
                } else {
                    self.state = RunState::Running;
                    sink.current_line_changed(self.pc());
                }
            }
            Err(err) => self.fail(sink, err),
        }
        self.state
    }

    fn try_step(&mut self, sink: &mut dyn Sink) -> Result<(), ExecError> {
        let line = self.pc();
        self.last_line = line;

        // Advance first: a taken branch overwrites PC afterwards.
        self.advance_pc(sink)?;

        let instruction = decode(self.source.line(line), &self.registers, &self.labels)?;
        self.execute(instruction, sink)?;

        let head = self.registers.get(MH);
        if head < 0 || head as usize >= self.memory.len() {
            return Err(ExecError::MemoryHeadOutOfBounds {
                address: head,
                len: self.memory.len(),
            });
        }
        Ok(())
    }

    /// Step until the run halts or finishes, sleeping the configured delay
    /// between steps. The delay is pacing for observation only; correctness
    /// never depends on it. There is no infinite-loop detection: a program
    /// that never runs out of lines fast-forwards until interrupted.
    pub fn fast_forward(&mut self, sink: &mut dyn Sink) -> RunState {
        while self.has_next_line() {
            self.step(sink);
            if self.has_next_line() && !self.config.step_delay.is_zero() {
                thread::sleep(self.config.step_delay);
            }
        }
        self.state
    }

    /// Whether a run is in progress with a line left to execute.
    pub fn has_next_line(&self) -> bool {
        matches!(self.state, RunState::Ready | RunState::Running)
            && self.pc() < self.source.line_count()
    }

    /// Move `PC` forward to the next executable line. Always moves at least
    /// one line, then keeps moving while the line is skippable.
    pub(crate) fn advance_pc(&mut self, sink: &mut dyn Sink) -> Result<(), ExecError> {
        loop {
            let next = self.pc() + 1;
            self.registers.set(PC, next as Word, sink)?;
            if next >= self.source.line_count() || !is_skippable(self.source.line(next)) {
                break;
            }
        }
        Ok(())
    }

    /// Report a user-program error and halt the run.
    fn fail(&mut self, sink: &mut dyn Sink, err: ExecError) {
        let line = err.line().unwrap_or(self.last_line);
        sink.report_error(line, &err.to_string());
        self.state = RunState::Halted;
        sink.print(EXIT_WITH_ERROR);
    }

    // ========== Accessors for frontends ==========

    /// Index of the next line to execute (the `PC` register).
    pub fn pc(&self) -> usize {
        self.registers.get(PC) as usize
    }

    /// Index of the most recently executed instruction, for error reporting.
    pub fn last_line(&self) -> usize {
        self.last_line
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn registers(&self) -> &RegisterFile {
        &self.registers
    }

    pub fn memory(&self) -> &MainMemory {
        &self.memory
    }

    pub fn buffer(&self) -> &StringBuffer {
        &self.buffer
    }

    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    // ========== Store access for opcode handlers ==========

    pub(crate) fn registers_mut(&mut self) -> &mut RegisterFile {
        &mut self.registers
    }

    pub(crate) fn memory_mut(&mut self) -> &mut MainMemory {
        &mut self.memory
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut StringBuffer {
        &mut self.buffer
    }
}
