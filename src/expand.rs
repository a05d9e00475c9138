//! Table expansion into display labels and raw frequencies

use core::fmt::{self, Write};

use alloc::{string::String, vec::Vec};

use log::debug;

use crate::channels::{Channel, Entry};
use crate::config::LabelFormat;
use crate::error::TableError;
use crate::flat::{self, Field};

/// Expanded channel table
///
/// `labels[i]` and `frequencies[i]` both describe the i'th input entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Expanded {
    pub labels: Vec<String>,
    /// Center frequencies in Hz, unmodified
    pub frequencies: Vec<f64>,
}

impl Expanded {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Write the labels list then the frequencies list, one line each
    pub fn write_list<W: Write>(&self, w: &mut W) -> fmt::Result {
        writeln!(w, "{:?}", self.labels)?;
        writeln!(w, "{:?}", self.frequencies)
    }

    /// Write one label per line
    pub fn write_table<W: Write>(&self, w: &mut W) -> fmt::Result {
        for l in &self.labels {
            writeln!(w, "{}", l)?;
        }
        Ok(())
    }
}

/// Expand a channel table using the default label format
pub fn expand(table: &[Channel]) -> Expanded {
    expand_with(table, &LabelFormat::default())
}

/// Expand a sequence of entries using the provided label format
pub fn expand_with<'a, I, E>(table: I, fmt: &LabelFormat) -> Expanded
where
    I: IntoIterator<Item = &'a E>,
    E: Entry + 'a,
{
    let mut e = Expanded::default();

    for c in table {
        e.labels.push(c.label(fmt));
        e.frequencies.push(c.frequency_hz());
    }

    debug!("Expanded {} channels", e.len());

    e
}

/// Decode and expand a flat `(number, frequency, standard)` table
pub fn expand_flat(fields: &[Field]) -> Result<Expanded, TableError> {
    let records = flat::decode(fields)?;
    Ok(expand_with(&records, &LabelFormat::default()))
}
