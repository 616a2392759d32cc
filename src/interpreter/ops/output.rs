//! String buffer and console opcodes

use crate::interpreter::decode::Operand;
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::ExecError;
use crate::program::SourceLines;
use crate::sink::Sink;

impl<S: SourceLines> Interpreter<S> {
    /// APND: stage one printable ASCII character.
    pub(crate) fn exec_append(
        &mut self,
        src: Operand,
        sink: &mut dyn Sink,
    ) -> Result<(), ExecError> {
        let value = self.operand_value(src);
        self.buffer_mut().append(value, sink)
    }

    /// DUMP: discard the staged text without printing.
    pub(crate) fn exec_dump(&mut self, sink: &mut dyn Sink) -> Result<(), ExecError> {
        self.buffer_mut().clear(sink);
        Ok(())
    }

    /// PRNT: print the staged text to the console, then clear the buffer.
    pub(crate) fn exec_print(&mut self, sink: &mut dyn Sink) -> Result<(), ExecError> {
        let text = self.buffer().contents();
        sink.print(&text);
        self.buffer_mut().clear(sink);
        Ok(())
    }

    /// CLR: clear the console (a sink side effect only).
    pub(crate) fn exec_clear(&mut self, sink: &mut dyn Sink) -> Result<(), ExecError> {
        sink.console_cleared();
        Ok(())
    }
}
