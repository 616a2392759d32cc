//! Label resolution
//!
//! A single forward pass over the source, run once per execution session
//! before any instruction executes. A line whose trimmed text ends with `:`
//! declares a label; the name is the uppercased prefix. A later duplicate
//! declaration silently overwrites an earlier one (documented behavior).

use crate::interpreter::errors::ExecError;
use crate::program::SourceLines;
use rustc_hash::FxHashMap;

/// Label name → 0-based line index of its declaration.
#[derive(Debug, Clone, Default)]
pub struct LabelTable {
    labels: FxHashMap<String, usize>,
}

impl LabelTable {
    /// Scan every source line for label declarations.
    ///
    /// Fails with `LabelContainedSpaces` (carrying the declaration line) if a
    /// label name contains whitespace. Uniqueness is not validated.
    pub fn scan(source: &dyn SourceLines) -> Result<Self, ExecError> {
        let mut labels = FxHashMap::default();

        for index in 0..source.line_count() {
            let line = source.line(index).trim();
            if let Some(name) = line.strip_suffix(':') {
                if name.chars().any(char::is_whitespace) {
                    return Err(ExecError::LabelContainedSpaces {
                        name: name.to_string(),
                        line: index,
                    });
                }
                labels.insert(name.to_uppercase(), index);
            }
        }

        Ok(LabelTable { labels })
    }

    /// Line index of a label, failing with `InvalidLabelReference`.
    pub fn lookup(&self, name: &str) -> Result<usize, ExecError> {
        self.labels
            .get(name)
            .copied()
            .ok_or_else(|| ExecError::InvalidLabelReference {
                name: name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::Program;

    #[test]
    fn scan_finds_labels_case_insensitively() {
        let program = Program::new("start:\nMOV 1 R0\n  loop:\nBR LOOP\n");
        let labels = LabelTable::scan(&program).unwrap();
        assert_eq!(labels.len(), 2);
        assert!(!labels.is_empty());
        assert_eq!(labels.lookup("START").unwrap(), 0);
        assert_eq!(labels.lookup("LOOP").unwrap(), 2);
        assert!(matches!(
            labels.lookup("END"),
            Err(ExecError::InvalidLabelReference { .. })
        ));
    }

    #[test]
    fn duplicate_declaration_overwrites() {
        let program = Program::new("L:\nMOV 1 R0\nL:\nMOV 2 R0\n");
        let labels = LabelTable::scan(&program).unwrap();
        assert_eq!(labels.lookup("L").unwrap(), 2);
    }

    #[test]
    fn whitespace_in_name_is_rejected_with_its_line() {
        let program = Program::new("MOV 1 R0\nbad label:\n");
        let err = LabelTable::scan(&program).unwrap_err();
        assert!(matches!(
            err,
            ExecError::LabelContainedSpaces { line: 1, .. }
        ));
    }
}
