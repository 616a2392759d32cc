//! Branch and jump opcodes
//!
//! A taken branch sets `PC` to the resolved target line and then advances
//! exactly as normal stepping does (always at least one line). Targets are
//! usually label declarations, which are skippable, so execution resumes at
//! the first instruction after the label.

use crate::interpreter::decode::{Cond, Operand};
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::ExecError;
use crate::machine::registers::PC;
use crate::machine::Word;
use crate::program::SourceLines;
use crate::sink::Sink;

impl<S: SourceLines> Interpreter<S> {
    /// BEQ/BNE/BGT/BLT: branch when the comparison holds.
    pub(crate) fn exec_branch(
        &mut self,
        cond: Cond,
        a: Operand,
        b: Operand,
        target: usize,
        sink: &mut dyn Sink,
    ) -> Result<(), ExecError> {
        let (a, b) = (self.operand_value(a), self.operand_value(b));
        if cond.holds(a, b) {
            self.take_branch(target, sink)?;
        }
        Ok(())
    }

    /// BR: unconditional, same as a taken branch.
    pub(crate) fn exec_jump(
        &mut self,
        target: usize,
        sink: &mut dyn Sink,
    ) -> Result<(), ExecError> {
        self.take_branch(target, sink)
    }

    fn take_branch(&mut self, target: usize, sink: &mut dyn Sink) -> Result<(), ExecError> {
        self.registers_mut().set(PC, target as Word, sink)?;
        self.advance_pc(sink)
    }
}
