//! Machine state for the assembly interpreter
//!
//! This module provides the three stores an executing program mutates:
//! - [`registers`]: named integer registers, including the reserved `PC`
//!   (program counter) and `MH` (memory head) control registers
//! - [`memory`]: fixed-size main memory, addressed indirectly through `MH`
//! - [`buffer`]: the bounded string buffer staged for `PRNT`
//!
//! # Value Domain
//!
//! Register and memory cells hold a [`Word`] (`i64`), but the *usable* domain
//! is the configured `[min_number, max_number]` range. Arithmetic is computed
//! in full `i64` precision and range-checked when a result is stored, so
//! intermediate sums and shifts on boundary values never wrap.

pub mod buffer;
pub mod memory;
pub mod registers;

use std::time::Duration;

/// Integer value type for registers and memory cells.
pub type Word = i64;

/// Machine configuration, loaded once at startup.
///
/// The defaults mirror a classic 16-bit teaching machine: seven
/// general-purpose registers `R0..R6`, a 10000-cell memory, and a 256
/// character string buffer.
#[derive(Debug, Clone)]
pub struct MachineConfig {
    /// Smallest storable value.
    pub min_number: Word,
    /// Largest storable value.
    pub max_number: Word,
    /// Number of general-purpose registers (named `R0..R{n-1}`).
    pub register_count: usize,
    /// Number of main memory cells.
    pub memory_len: usize,
    /// String buffer capacity, in characters.
    pub buffer_capacity: usize,
    /// Inter-step pacing delay used by `fast_forward` (observation only).
    pub step_delay: Duration,
}

impl Default for MachineConfig {
    fn default() -> Self {
        MachineConfig {
            min_number: -32768,
            max_number: 32767,
            register_count: 7,
            memory_len: 10000,
            buffer_capacity: 256,
            step_delay: Duration::from_millis(25),
        }
    }
}
