//! Execution error types for the assembly interpreter
//!
//! This module defines [`ExecError`], which represents every error a user
//! program can provoke during a run (there are no engine-internal faults).
//!
//! All execution errors are fatal: the driver reports them to the sink with
//! the line of the offending instruction and halts the run.

use crate::machine::Word;
use std::fmt;

/// Errors raised by a malformed or semantically invalid user program
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecError {
    /// A reference to an undeclared register
    InvalidRegisterReference { name: String },

    /// A value fell outside the configured numeric range
    NumberOutOfBounds { value: Word, min: Word, max: Word },

    /// The memory head addressed a cell outside main memory
    MemoryHeadOutOfBounds { address: Word, len: usize },

    /// A value appended to the string buffer was not printable ASCII
    BufferValueOutOfAsciiRange { value: Word },

    /// The string buffer cursor reached capacity
    StringBufferOverflow { capacity: usize },

    /// An output operand did not name a declared register
    ArgumentIsNotRegister { token: String },

    /// An operand was neither a register name nor an integer literal
    UnrecognizedDataType { token: String },

    /// The first token of a line matched no known opcode
    UnrecognizedOpcode { token: String },

    /// An instruction had the wrong operand count for its opcode
    WrongNumberOfArguments {
        opcode: &'static str,
        expected: usize,
        got: usize,
    },

    /// A branch target named no declared label (or an unreachable line)
    InvalidLabelReference { name: String },

    /// A label declaration contained whitespace
    LabelContainedSpaces { name: String, line: usize },

    /// The source contained no executable line
    EmptyFile,
}

impl ExecError {
    /// Line index carried by the error itself, when it has one.
    ///
    /// Most errors are reported against the driver's `last_line`; label scan
    /// errors know their own declaration line.
    pub fn line(&self) -> Option<usize> {
        match self {
            ExecError::LabelContainedSpaces { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl fmt::Display for ExecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecError::InvalidRegisterReference { name } => {
                write!(f, "Reference to undeclared register '{}'", name)
            }
            ExecError::NumberOutOfBounds { value, min, max } => {
                write!(f, "Number {} outside the bounds [{}, {}]", value, min, max)
            }
            ExecError::MemoryHeadOutOfBounds { address, len } => {
                write!(
                    f,
                    "Memory head {} outside memory bounds [0, {})",
                    address, len
                )
            }
            ExecError::BufferValueOutOfAsciiRange { value } => {
                write!(
                    f,
                    "Value {} outside the printable ASCII range [32, 126]",
                    value
                )
            }
            ExecError::StringBufferOverflow { capacity } => {
                write!(f, "String buffer full ({} characters)", capacity)
            }
            ExecError::ArgumentIsNotRegister { token } => {
                write!(f, "Expected a register, got '{}'", token)
            }
            ExecError::UnrecognizedDataType { token } => {
                write!(
                    f,
                    "'{}' is neither a register nor an integer literal",
                    token
                )
            }
            ExecError::UnrecognizedOpcode { token } => {
                write!(f, "Unrecognized opcode '{}'", token)
            }
            ExecError::WrongNumberOfArguments {
                opcode,
                expected,
                got,
            } => {
                write!(
                    f,
                    "{} expects {} argument{}, got {}",
                    opcode,
                    expected,
                    if *expected == 1 { "" } else { "s" },
                    got
                )
            }
            ExecError::InvalidLabelReference { name } => {
                write!(f, "Reference to undeclared label '{}'", name)
            }
            ExecError::LabelContainedSpaces { name, line } => {
                write!(
                    f,
                    "Label '{}' declared on line {} contains whitespace",
                    name,
                    line + 1
                )
            }
            ExecError::EmptyFile => {
                write!(f, "Source contains no executable line")
            }
        }
    }
}

impl std::error::Error for ExecError {}
