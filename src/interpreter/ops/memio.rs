//! Memory opcodes
//!
//! LOAD and STORE address main memory implicitly through the `MH` register;
//! no opcode carries an address literal. The access itself re-validates the
//! head, so a stale out-of-range `MH` can never dereference.

use crate::interpreter::decode::Operand;
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::ExecError;
use crate::machine::registers::{RegId, MH};
use crate::program::SourceLines;
use crate::sink::Sink;

impl<S: SourceLines> Interpreter<S> {
    /// A ← memory[MH]
    pub(crate) fn exec_load(&mut self, dst: RegId, sink: &mut dyn Sink) -> Result<(), ExecError> {
        let address = self.registers().get(MH);
        let value = self.memory().read(address)?;
        self.registers_mut().set(dst, value, sink)
    }

    /// memory[MH] ← value(A)
    pub(crate) fn exec_store(
        &mut self,
        src: Operand,
        sink: &mut dyn Sink,
    ) -> Result<(), ExecError> {
        let address = self.registers().get(MH);
        let value = self.operand_value(src);
        self.memory_mut().write(address, value, sink)
    }
}
