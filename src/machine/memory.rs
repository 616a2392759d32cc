//! Fixed-size main memory
//!
//! Memory is addressed only indirectly, through the `MH` register; no opcode
//! carries an address literal. Every access validates the address before
//! dereferencing, so an out-of-range memory head can never touch a cell.
//!
//! Main memory is *not* cleared by a run reset: its contents persist for the
//! lifetime of one execution session.

use super::Word;
use crate::interpreter::errors::ExecError;
use crate::sink::Sink;

/// A fixed-length array of integer cells.
#[derive(Debug, Clone)]
pub struct MainMemory {
    cells: Vec<Word>,
}

impl MainMemory {
    pub fn new(len: usize) -> Self {
        MainMemory {
            cells: vec![0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn check(&self, address: Word) -> Result<usize, ExecError> {
        if address < 0 || address as usize >= self.cells.len() {
            return Err(ExecError::MemoryHeadOutOfBounds {
                address,
                len: self.cells.len(),
            });
        }
        Ok(address as usize)
    }

    /// Read the cell at `address`, failing with `MemoryHeadOutOfBounds`.
    pub fn read(&self, address: Word) -> Result<Word, ExecError> {
        let index = self.check(address)?;
        Ok(self.cells[index])
    }

    /// Write the cell at `address`, failing with `MemoryHeadOutOfBounds`.
    /// Notifies the sink on success.
    pub fn write(
        &mut self,
        address: Word,
        value: Word,
        sink: &mut dyn Sink,
    ) -> Result<(), ExecError> {
        let index = self.check(address)?;
        self.cells[index] = value;
        sink.memory_changed(index, value);
        Ok(())
    }

    /// Direct cell access for the UI's memory window.
    pub fn cell(&self, index: usize) -> Word {
        self.cells[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::NullSink;

    #[test]
    fn read_write_in_bounds() {
        let mut mem = MainMemory::new(16);
        mem.write(3, 42, &mut NullSink).unwrap();
        assert_eq!(mem.read(3).unwrap(), 42);
        assert_eq!(mem.read(0).unwrap(), 0);
    }

    #[test]
    fn out_of_bounds_access_fails_without_mutating() {
        let mut mem = MainMemory::new(4);
        assert!(matches!(
            mem.read(4),
            Err(ExecError::MemoryHeadOutOfBounds { address: 4, len: 4 })
        ));
        assert!(matches!(
            mem.write(-1, 9, &mut NullSink),
            Err(ExecError::MemoryHeadOutOfBounds { address: -1, .. })
        ));
        for i in 0..4 {
            assert_eq!(mem.cell(i), 0);
        }
    }
}
