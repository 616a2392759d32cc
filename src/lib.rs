//! # Introduction
//!
//! stepasm executes an educational line-oriented assembly language one
//! instruction at a time, reporting every register, memory, and buffer change
//! to an observer. A terminal UI built with
//! [ratatui](https://docs.rs/ratatui) visualizes the machine while a program
//! steps.
//!
//! ## Execution pipeline
//!
//! ```text
//! Source lines → Label scan → Driver loop → Decode → Execute → Store → Sink
//! ```
//!
//! 1. [`program`]: the source provider, an ordered, read-only sequence of
//!    text lines.
//! 2. [`interpreter`]: label resolution, instruction decoding, opcode
//!    handlers, and the execution driver with its run/step/halt protocol.
//! 3. [`machine`]: the register file (with the reserved `PC`/`MH` control
//!    registers), fixed-size main memory, and the bounded string buffer.
//! 4. [`sink`]: the observer protocol the engine reports console text and
//!    refresh hints through.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## The language
//!
//! One instruction, `#` comment, blank line, or `name:` label per source
//! line; tokens are whitespace-separated and case-insensitive. Opcodes:
//! `MOV`, `ADD`, `SUB`, `ASL`, `ASR`, `BEQ`, `BNE`, `BGT`, `BLT`, `BR`,
//! `LOAD`, `STORE`, `APND`, `DUMP`, `PRNT`, `CLR`. Branches accept a label
//! or a 1-based line number.

pub mod interpreter;
pub mod machine;
pub mod program;
pub mod sink;
pub mod ui;
