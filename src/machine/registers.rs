//! Register file with reserved control registers
//!
//! Registers are declared once at construction from the machine config and
//! never auto-created: a lookup by an undeclared name is a fatal
//! [`ExecError::InvalidRegisterReference`].
//!
//! Names resolve to a small index ([`RegId`]) so the per-step execute path
//! works on a plain `Vec` instead of hashing strings. The name index itself
//! is only consulted while decoding.

use super::{MachineConfig, Word};
use crate::interpreter::errors::ExecError;
use crate::sink::Sink;
use rustc_hash::FxHashMap;

/// Index of a declared register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegId(pub(crate) usize);

/// Program counter: index of the next line to execute.
pub const PC: RegId = RegId(0);
/// Memory head: implicit address for LOAD/STORE.
pub const MH: RegId = RegId(1);

/// Named integer registers with a configured value range.
#[derive(Debug, Clone)]
pub struct RegisterFile {
    names: Vec<String>,
    values: Vec<Word>,
    index: FxHashMap<String, RegId>,
    min: Word,
    max: Word,
}

impl RegisterFile {
    /// Declare `PC`, `MH`, and the configured general-purpose registers
    /// `R0..R{n-1}`, all initialized to zero.
    pub fn new(config: &MachineConfig) -> Self {
        let mut names = vec!["PC".to_string(), "MH".to_string()];
        for i in 0..config.register_count {
            names.push(format!("R{}", i));
        }

        let mut index = FxHashMap::default();
        for (i, name) in names.iter().enumerate() {
            index.insert(name.clone(), RegId(i));
        }

        let values = vec![0; names.len()];
        RegisterFile {
            names,
            values,
            index,
            min: config.min_number,
            max: config.max_number,
        }
    }

    /// Resolve a (already uppercased) name, or `None` if undeclared.
    pub fn resolve(&self, name: &str) -> Option<RegId> {
        self.index.get(name).copied()
    }

    /// Resolve a name, failing with `InvalidRegisterReference`.
    pub fn lookup(&self, name: &str) -> Result<RegId, ExecError> {
        self.resolve(name)
            .ok_or_else(|| ExecError::InvalidRegisterReference {
                name: name.to_string(),
            })
    }

    /// Current value of a declared register.
    pub fn get(&self, id: RegId) -> Word {
        self.values[id.0]
    }

    /// Store `value`, failing with `NumberOutOfBounds` outside the configured
    /// range. On success the sink is notified (plus a memory-head hint when
    /// the target is `MH`).
    pub fn set(&mut self, id: RegId, value: Word, sink: &mut dyn Sink) -> Result<(), ExecError> {
        if value < self.min || value > self.max {
            return Err(ExecError::NumberOutOfBounds {
                value,
                min: self.min,
                max: self.max,
            });
        }

        self.values[id.0] = value;
        sink.register_changed(&self.names[id.0], value);
        if id == MH {
            sink.memory_head_changed(value);
        }
        Ok(())
    }

    /// Zero every declared register *except* `MH`, which the driver's
    /// run-reset routine resets separately.
    pub fn clear(&mut self, sink: &mut dyn Sink) {
        for i in 0..self.values.len() {
            if RegId(i) == MH {
                continue;
            }
            self.values[i] = 0;
            sink.register_changed(&self.names[i], 0);
        }
    }

    /// Name of a declared register.
    pub fn name(&self, id: RegId) -> &str {
        &self.names[id.0]
    }

    /// The configured `[min, max]` value range.
    pub fn range(&self) -> (Word, Word) {
        (self.min, self.max)
    }

    /// Iterate `(name, value)` pairs in declaration order (for the UI).
    pub fn iter(&self) -> impl Iterator<Item = (&str, Word)> {
        self.names
            .iter()
            .map(|n| n.as_str())
            .zip(self.values.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::NullSink;

    fn file() -> RegisterFile {
        RegisterFile::new(&MachineConfig::default())
    }

    #[test]
    fn set_get_round_trips_every_register() {
        let mut regs = file();
        let ids: Vec<RegId> = (0..9).map(RegId).collect();
        for (i, id) in ids.iter().enumerate() {
            regs.set(*id, i as Word, &mut NullSink).unwrap();
        }
        for (i, id) in ids.iter().enumerate() {
            assert_eq!(regs.get(*id), i as Word);
        }
    }

    #[test]
    fn out_of_range_set_fails_without_mutating() {
        let mut regs = file();
        regs.set(RegId(2), 17, &mut NullSink).unwrap();
        let err = regs.set(RegId(2), 32768, &mut NullSink).unwrap_err();
        assert!(matches!(err, ExecError::NumberOutOfBounds { value: 32768, .. }));
        assert_eq!(regs.get(RegId(2)), 17);
    }

    #[test]
    fn undeclared_name_is_a_reference_error() {
        let regs = file();
        assert!(regs.resolve("R7").is_none());
        assert!(matches!(
            regs.lookup("X"),
            Err(ExecError::InvalidRegisterReference { .. })
        ));
    }

    #[test]
    fn clear_zeroes_everything_but_the_memory_head() {
        let mut regs = file();
        regs.set(PC, 5, &mut NullSink).unwrap();
        regs.set(MH, 9, &mut NullSink).unwrap();
        regs.set(RegId(3), -4, &mut NullSink).unwrap();

        regs.clear(&mut NullSink);
        assert_eq!(regs.get(PC), 0);
        assert_eq!(regs.get(RegId(3)), 0);
        assert_eq!(regs.get(MH), 9);
    }
}
