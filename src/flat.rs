//! Decoding of flat `(number, frequency, standard)` triple sequences

use alloc::vec::Vec;

use log::trace;

use crate::channels::Entry;
use crate::error::{FieldKind, TableError};

/// Number of slots per flat table entry
pub const FIELDS_PER_ENTRY: usize = 3;

/// One slot of a flat channel table
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<'a> {
    Int(u64),
    Float(f64),
    Text(&'a str),
}

impl <'a> From<u64> for Field<'a> {
    fn from(v: u64) -> Self {
        Field::Int(v)
    }
}

impl <'a> From<f64> for Field<'a> {
    fn from(v: f64) -> Self {
        Field::Float(v)
    }
}

impl <'a> From<&'a str> for Field<'a> {
    fn from(v: &'a str) -> Self {
        Field::Text(v)
    }
}

/// Entry decoded from a flat table, the standard label is kept verbatim
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record<'a> {
    pub number: u64,
    pub frequency_hz: f64,
    pub standard: &'a str,
}

impl <'a> Entry for Record<'a> {
    fn number(&self) -> u64 {
        self.number
    }

    fn frequency_hz(&self) -> f64 {
        self.frequency_hz
    }

    fn standard(&self) -> &str {
        self.standard
    }
}

/// Decode a flat table into records
///
/// The table must hold a whole number of triples, a trailing partial
/// entry is rejected rather than dropped. Frequencies may be integers
/// or floats, standard labels are not checked.
pub fn decode<'a>(fields: &[Field<'a>]) -> Result<Vec<Record<'a>>, TableError> {
    if fields.len() % FIELDS_PER_ENTRY != 0 {
        return Err(TableError::Malformed { len: fields.len() });
    }

    let mut records = Vec::with_capacity(fields.len() / FIELDS_PER_ENTRY);

    for (i, entry) in fields.chunks_exact(FIELDS_PER_ENTRY).enumerate() {
        let base = i * FIELDS_PER_ENTRY;

        let number = match entry[0] {
            Field::Int(n) => n,
            _ => return Err(TableError::UnexpectedField { index: base, expected: FieldKind::Number }),
        };

        let frequency_hz = match entry[1] {
            Field::Float(f) => f,
            Field::Int(n) => n as f64,
            _ => return Err(TableError::UnexpectedField { index: base + 1, expected: FieldKind::Frequency }),
        };

        let standard = match entry[2] {
            Field::Text(t) => t,
            _ => return Err(TableError::UnexpectedField { index: base + 2, expected: FieldKind::Standard }),
        };

        trace!("Decoded channel {} at {} Hz ({})", number, frequency_hz, standard);

        records.push(Record { number, frequency_hz, standard });
    }

    Ok(records)
}
