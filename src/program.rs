//! Source provider protocol
//!
//! The engine never owns the program text; it consumes an ordered, read-only
//! sequence of lines through [`SourceLines`]. [`Program`] is the standard
//! implementation, an owned line store split from a source string.

/// Read-only line access the engine executes against.
pub trait SourceLines {
    /// Total number of source lines.
    fn line_count(&self) -> usize;

    /// Text of the line at `index` (0-based). `index` must be in bounds.
    fn line(&self, index: usize) -> &str;
}

/// An owned program: source text split into lines.
#[derive(Debug, Clone)]
pub struct Program {
    lines: Vec<String>,
}

impl Program {
    pub fn new(source: &str) -> Self {
        Program {
            lines: source.lines().map(|l| l.to_string()).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl SourceLines for Program {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> &str {
        &self.lines[index]
    }
}

impl SourceLines for &Program {
    fn line_count(&self) -> usize {
        (*self).line_count()
    }

    fn line(&self, index: usize) -> &str {
        (*self).line(index)
    }
}
