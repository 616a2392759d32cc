//! Assembly execution engine
//!
//! This module provides the core execution logic:
//! - [`labels`]: the single-pass label resolver
//! - [`decode`]: line tokenization into typed instructions
//! - [`ops`]: one handler per opcode
//! - [`engine`]: the execution driver (run/step/halt protocol)
//! - [`errors`]: user-program error types
//!
//! # Execution Model
//!
//! The engine executes one source line per step. Each step reads the line at
//! `PC`, advances `PC` past skippable lines, then decodes and executes the
//! instruction it read. Every handler returns a `Result`; the first error
//! halts the run before any further side effects.

pub mod decode;
pub mod engine;
pub mod errors;
pub mod labels;
pub mod ops;
