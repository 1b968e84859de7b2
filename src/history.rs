//! # History
//!
//! Append-only log of `(index, best length)` pairs, one per completed step,
//! plus CSV export.
//!
//! ## Example
//!
//! ```rust
//! use tspalg::history::History;
//!
//! let mut history = History::new();
//! history.push(0, 120.5);
//! history.push(1, 98.25);
//!
//! let mut out = Vec::new();
//! history.write_csv(&mut out, "Generation").unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "Generation,BestDistance\n0,120.5\n1,98.25\n"
//! );
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Result, ResultExt};

/// Header of the second CSV column.
pub const BEST_DISTANCE_HEADER: &str = "BestDistance";

/// Best length recorded after the step with the given index.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryEntry {
    pub index: usize,
    pub best_length: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, index: usize, best_length: f64) {
        self.entries.push(HistoryEntry { index, best_length });
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Writes the history as two-column CSV: a header row
    /// `<index_header>,BestDistance` followed by one row per entry.
    pub fn write_csv<W: Write>(&self, mut writer: W, index_header: &str) -> Result<()> {
        writeln!(writer, "{},{}", index_header, BEST_DISTANCE_HEADER)?;
        for entry in &self.entries {
            writeln!(writer, "{},{}", entry.index, entry.best_length)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Creates (or truncates) the file at `path` and writes the CSV into it.
    pub fn save_csv<P: AsRef<Path>>(&self, path: P, index_header: &str) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).context(format!("Failed to create {}", path.display()))?;
        self.write_csv(BufWriter::new(file), index_header)
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
