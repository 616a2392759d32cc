//! Instruction decoding
//!
//! One source line decodes to one typed [`Instruction`]. The line is trimmed,
//! uppercased (the whole language is case-insensitive), and split on runs of
//! whitespace; the first token names the opcode and the rest are operands,
//! validated against the opcode's fixed arity.
//!
//! Operands are classified here rather than during execution: register names
//! become [`RegId`]s and branch targets become absolute line indices, so the
//! execute path never hashes a string.

use crate::interpreter::errors::ExecError;
use crate::interpreter::labels::LabelTable;
use crate::machine::registers::{RegId, RegisterFile};
use crate::machine::Word;

/// Whether a line consumes no execution step: blank, `#` comment, or label
/// declaration. Shared by run reset, PC advance, and preprocessing.
pub fn is_skippable(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#') || line.ends_with(':')
}

/// Opcode names and arities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Mov,
    Add,
    Sub,
    Asl,
    Asr,
    Beq,
    Bne,
    Bgt,
    Blt,
    Br,
    Load,
    Store,
    Apnd,
    Dump,
    Prnt,
    Clr,
}

impl Opcode {
    pub fn from_token(token: &str) -> Option<Opcode> {
        match token {
            "MOV" => Some(Opcode::Mov),
            "ADD" => Some(Opcode::Add),
            "SUB" => Some(Opcode::Sub),
            "ASL" => Some(Opcode::Asl),
            "ASR" => Some(Opcode::Asr),
            "BEQ" => Some(Opcode::Beq),
            "BNE" => Some(Opcode::Bne),
            "BGT" => Some(Opcode::Bgt),
            "BLT" => Some(Opcode::Blt),
            "BR" => Some(Opcode::Br),
            "LOAD" => Some(Opcode::Load),
            "STORE" => Some(Opcode::Store),
            "APND" => Some(Opcode::Apnd),
            "DUMP" => Some(Opcode::Dump),
            "PRNT" => Some(Opcode::Prnt),
            "CLR" => Some(Opcode::Clr),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Opcode::Mov => "MOV",
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Asl => "ASL",
            Opcode::Asr => "ASR",
            Opcode::Beq => "BEQ",
            Opcode::Bne => "BNE",
            Opcode::Bgt => "BGT",
            Opcode::Blt => "BLT",
            Opcode::Br => "BR",
            Opcode::Load => "LOAD",
            Opcode::Store => "STORE",
            Opcode::Apnd => "APND",
            Opcode::Dump => "DUMP",
            Opcode::Prnt => "PRNT",
            Opcode::Clr => "CLR",
        }
    }

    /// Fixed operand count.
    pub fn arity(self) -> usize {
        match self {
            Opcode::Dump | Opcode::Prnt | Opcode::Clr => 0,
            Opcode::Br | Opcode::Load | Opcode::Store | Opcode::Apnd => 1,
            Opcode::Mov => 2,
            Opcode::Add
            | Opcode::Sub
            | Opcode::Asl
            | Opcode::Asr
            | Opcode::Beq
            | Opcode::Bne
            | Opcode::Bgt
            | Opcode::Blt => 3,
        }
    }
}

/// A value operand: a declared register or a range-checked literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Register(RegId),
    Literal(Word),
}

/// Branch comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cond {
    Eq,
    Ne,
    Gt,
    Lt,
}

impl Cond {
    pub fn holds(self, a: Word, b: Word) -> bool {
        match self {
            Cond::Eq => a == b,
            Cond::Ne => a != b,
            Cond::Gt => a > b,
            Cond::Lt => a < b,
        }
    }
}

/// A fully decoded instruction with resolved operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Mov { src: Operand, dst: RegId },
    Add { a: Operand, b: Operand, dst: RegId },
    Sub { a: Operand, b: Operand, dst: RegId },
    Asl { a: Operand, b: Operand, dst: RegId },
    Asr { a: Operand, b: Operand, dst: RegId },
    Branch { cond: Cond, a: Operand, b: Operand, target: usize },
    Jump { target: usize },
    Load { dst: RegId },
    Store { src: Operand },
    Append { src: Operand },
    Dump,
    Print,
    Clear,
}

/// Decode one executable source line.
///
/// The caller guarantees the line is not skippable.
pub fn decode(
    line: &str,
    registers: &RegisterFile,
    labels: &LabelTable,
) -> Result<Instruction, ExecError> {
    let line = line.trim().to_uppercase();
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let opcode = Opcode::from_token(tokens[0]).ok_or_else(|| ExecError::UnrecognizedOpcode {
        token: tokens[0].to_string(),
    })?;

    let args = &tokens[1..];
    if args.len() != opcode.arity() {
        return Err(ExecError::WrongNumberOfArguments {
            opcode: opcode.name(),
            expected: opcode.arity(),
            got: args.len(),
        });
    }

    let value = |token: &str| operand(token, registers);
    let out = |token: &str| out_register(token, registers);

    Ok(match opcode {
        Opcode::Mov => Instruction::Mov {
            src: value(args[0])?,
            dst: out(args[1])?,
        },
        Opcode::Add => Instruction::Add {
            a: value(args[0])?,
            b: value(args[1])?,
            dst: out(args[2])?,
        },
        Opcode::Sub => Instruction::Sub {
            a: value(args[0])?,
            b: value(args[1])?,
            dst: out(args[2])?,
        },
        Opcode::Asl => Instruction::Asl {
            a: value(args[0])?,
            b: value(args[1])?,
            dst: out(args[2])?,
        },
        Opcode::Asr => Instruction::Asr {
            a: value(args[0])?,
            b: value(args[1])?,
            dst: out(args[2])?,
        },
        Opcode::Beq | Opcode::Bne | Opcode::Bgt | Opcode::Blt => {
            let cond = match opcode {
                Opcode::Beq => Cond::Eq,
                Opcode::Bne => Cond::Ne,
                Opcode::Bgt => Cond::Gt,
                _ => Cond::Lt,
            };
            Instruction::Branch {
                cond,
                a: value(args[0])?,
                b: value(args[1])?,
                target: target(args[2], labels)?,
            }
        }
        Opcode::Br => Instruction::Jump {
            target: target(args[0], labels)?,
        },
        Opcode::Load => Instruction::Load { dst: out(args[0])? },
        Opcode::Store => Instruction::Store {
            src: value(args[0])?,
        },
        Opcode::Apnd => Instruction::Append {
            src: value(args[0])?,
        },
        Opcode::Dump => Instruction::Dump,
        Opcode::Prnt => Instruction::Print,
        Opcode::Clr => Instruction::Clear,
    })
}

/// The shared argument-value rule: a declared register name, or a signed
/// integer literal bounded by the configured range.
fn operand(token: &str, registers: &RegisterFile) -> Result<Operand, ExecError> {
    if let Some(id) = registers.resolve(token) {
        return Ok(Operand::Register(id));
    }

    let value: Word = token
        .parse()
        .map_err(|_| ExecError::UnrecognizedDataType {
            token: token.to_string(),
        })?;

    let (min, max) = registers.range();
    if value < min || value > max {
        return Err(ExecError::NumberOutOfBounds { value, min, max });
    }
    Ok(Operand::Literal(value))
}

/// Output operands must name a declared register.
fn out_register(token: &str, registers: &RegisterFile) -> Result<RegId, ExecError> {
    registers
        .resolve(token)
        .ok_or_else(|| ExecError::ArgumentIsNotRegister {
            token: token.to_string(),
        })
}

/// A branch target: an integer token is a 1-based line literal, anything else
/// is looked up in the label table.
fn target(token: &str, labels: &LabelTable) -> Result<usize, ExecError> {
    if let Ok(number) = token.parse::<Word>() {
        if number < 1 {
            return Err(ExecError::InvalidLabelReference {
                name: token.to_string(),
            });
        }
        return Ok(number as usize - 1);
    }
    labels.lookup(token)
}
