
use core::fmt;

/// Kind of value expected in a flat table slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Channel number
    Number,
    /// Center frequency in Hz
    Frequency,
    /// Standard label
    Standard,
}

/// Channel table errors
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    /// Flat table length is not a multiple of three
    Malformed { len: usize },

    /// Slot holds the wrong kind of value for its position
    UnexpectedField { index: usize, expected: FieldKind },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Malformed { len } => {
                write!(f, "malformed table: {} fields is not a whole number of entries", len)
            },
            TableError::UnexpectedField { index, expected } => {
                write!(f, "field {}: expected {:?}", index, expected)
            },
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TableError {}
