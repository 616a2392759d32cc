//! Opcode semantics
//!
//! One handler per opcode, implemented as `impl Interpreter` blocks split by
//! concern:
//! - [`arith`]: MOV and the ADD/SUB/ASL/ASR arithmetic group
//! - [`branch`]: conditional branches and the unconditional jump
//! - [`memio`]: LOAD/STORE through the memory head
//! - [`output`]: the string buffer and console opcodes
//!
//! Every handler returns a `Result`: the driver halts on the first error, so
//! a failed instruction performs none of its remaining side effects.

pub mod arith;
pub mod branch;
pub mod memio;
pub mod output;

use crate::interpreter::decode::Instruction;
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::ExecError;
use crate::program::SourceLines;
use crate::sink::Sink;

impl<S: SourceLines> Interpreter<S> {
    /// Dispatch one decoded instruction to its handler.
    pub(crate) fn execute(
        &mut self,
        instruction: Instruction,
        sink: &mut dyn Sink,
    ) -> Result<(), ExecError> {
        match instruction {
            Instruction::Mov { src, dst } => self.exec_mov(src, dst, sink),
            Instruction::Add { a, b, dst } => self.exec_add(a, b, dst, sink),
            Instruction::Sub { a, b, dst } => self.exec_sub(a, b, dst, sink),
            Instruction::Asl { a, b, dst } => self.exec_asl(a, b, dst, sink),
            Instruction::Asr { a, b, dst } => self.exec_asr(a, b, dst, sink),
            Instruction::Branch { cond, a, b, target } => {
                self.exec_branch(cond, a, b, target, sink)
            }
            Instruction::Jump { target } => self.exec_jump(target, sink),
            Instruction::Load { dst } => self.exec_load(dst, sink),
            Instruction::Store { src } => self.exec_store(src, sink),
            Instruction::Append { src } => self.exec_append(src, sink),
            Instruction::Dump => self.exec_dump(sink),
            Instruction::Print => self.exec_print(sink),
            Instruction::Clear => self.exec_clear(sink),
        }
    }
}
