//! Bounded append-only string buffer
//!
//! `APND` stages one printable ASCII character per instruction; `PRNT` drains
//! the staged text to the console and `DUMP` discards it. The buffer keeps a
//! cursor at the next free slot; draining or clearing blanks every slot and
//! resets the cursor to zero.

use super::Word;
use crate::interpreter::errors::ExecError;
use crate::sink::Sink;

const BLANK: char = ' ';

/// Printable ASCII range accepted by `append`.
const ASCII_MIN: Word = 32;
const ASCII_MAX: Word = 126;

#[derive(Debug, Clone)]
pub struct StringBuffer {
    slots: Vec<char>,
    cursor: usize,
}

impl StringBuffer {
    pub fn new(capacity: usize) -> Self {
        StringBuffer {
            slots: vec![BLANK; capacity],
            cursor: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Next free slot index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The staged text (slots before the cursor).
    pub fn contents(&self) -> String {
        self.slots[..self.cursor].iter().collect()
    }

    /// Raw slot access for the UI's buffer pane.
    pub fn slot(&self, index: usize) -> char {
        self.slots[index]
    }

    /// Append one character, given as its ASCII value.
    ///
    /// Fails with `BufferValueOutOfAsciiRange` outside `[32, 126]` and with
    /// `StringBufferOverflow` when the cursor has reached capacity; neither
    /// failure mutates the buffer.
    pub fn append(&mut self, value: Word, sink: &mut dyn Sink) -> Result<(), ExecError> {
        if !(ASCII_MIN..=ASCII_MAX).contains(&value) {
            return Err(ExecError::BufferValueOutOfAsciiRange { value });
        }
        if self.cursor >= self.slots.len() {
            return Err(ExecError::StringBufferOverflow {
                capacity: self.slots.len(),
            });
        }

        let ch = value as u8 as char;
        self.slots[self.cursor] = ch;
        sink.buffer_changed(self.cursor, ch);
        self.cursor += 1;
        Ok(())
    }

    /// Blank every slot (notifying the sink per slot) and reset the cursor.
    pub fn clear(&mut self, sink: &mut dyn Sink) {
        for i in 0..self.slots.len() {
            self.slots[i] = BLANK;
            sink.buffer_changed(i, BLANK);
        }
        self.cursor = 0;
    }
}
