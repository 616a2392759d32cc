//! MOV and the arithmetic opcodes
//!
//! All arithmetic is computed in full precision and range-checked before the
//! result register is written, so a failing instruction leaves the register
//! file untouched.

use crate::interpreter::decode::Operand;
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::ExecError;
use crate::machine::registers::RegId;
use crate::machine::Word;
use crate::program::SourceLines;
use crate::sink::Sink;

impl<S: SourceLines> Interpreter<S> {
    /// The argument-value rule: a register operand reads its current value,
    /// a literal was already range-checked at decode time.
    pub(crate) fn operand_value(&self, operand: Operand) -> Word {
        match operand {
            Operand::Register(id) => self.registers().get(id),
            Operand::Literal(value) => value,
        }
    }

    /// B ← value(A)
    pub(crate) fn exec_mov(
        &mut self,
        src: Operand,
        dst: RegId,
        sink: &mut dyn Sink,
    ) -> Result<(), ExecError> {
        let value = self.operand_value(src);
        self.registers_mut().set(dst, value, sink)
    }

    /// C ← A + B
    pub(crate) fn exec_add(
        &mut self,
        a: Operand,
        b: Operand,
        dst: RegId,
        sink: &mut dyn Sink,
    ) -> Result<(), ExecError> {
        let (a, b) = (self.operand_value(a), self.operand_value(b));
        let result = a.checked_add(b).ok_or_else(|| self.overflow(a.saturating_add(b)))?;
        self.registers_mut().set(dst, result, sink)
    }

    /// C ← A − B
    pub(crate) fn exec_sub(
        &mut self,
        a: Operand,
        b: Operand,
        dst: RegId,
        sink: &mut dyn Sink,
    ) -> Result<(), ExecError> {
        let (a, b) = (self.operand_value(a), self.operand_value(b));
        let result = a.checked_sub(b).ok_or_else(|| self.overflow(a.saturating_sub(b)))?;
        self.registers_mut().set(dst, result, sink)
    }

    /// C ← A << B
    pub(crate) fn exec_asl(
        &mut self,
        a: Operand,
        b: Operand,
        dst: RegId,
        sink: &mut dyn Sink,
    ) -> Result<(), ExecError> {
        let result = self.shifted(self.operand_value(a), self.operand_value(b), true)?;
        self.registers_mut().set(dst, result, sink)
    }

    /// C ← A >> B (arithmetic: the sign bit propagates)
    pub(crate) fn exec_asr(
        &mut self,
        a: Operand,
        b: Operand,
        dst: RegId,
        sink: &mut dyn Sink,
    ) -> Result<(), ExecError> {
        let result = self.shifted(self.operand_value(a), self.operand_value(b), false)?;
        self.registers_mut().set(dst, result, sink)
    }

    /// Arithmetic shift with the amount and result validated. An amount
    /// outside `[0, 63]` can never produce a representable result.
    fn shifted(&self, a: Word, b: Word, left: bool) -> Result<Word, ExecError> {
        let (min, max) = self.registers().range();
        if !(0..=63).contains(&b) {
            return Err(ExecError::NumberOutOfBounds { value: b, min, max });
        }

        let wide: i128 = if left {
            (a as i128) << b
        } else {
            (a as i128) >> b
        };
        if wide < min as i128 || wide > max as i128 {
            return Err(ExecError::NumberOutOfBounds {
                value: wide.clamp(Word::MIN as i128, Word::MAX as i128) as Word,
                min,
                max,
            });
        }
        Ok(wide as Word)
    }

    fn overflow(&self, value: Word) -> ExecError {
        let (min, max) = self.registers().range();
        ExecError::NumberOutOfBounds { value, min, max }
    }
}
