//! Channel table crate prelude
//
// ieee80211-channels
// Licensed under MPL-2.0

pub use crate::channels::{Channel, Entry, Standard};

pub use crate::table::{self, CHANNELS};

pub use crate::flat::{Field, Record};

pub use crate::expand::{expand, expand_with, expand_flat, Expanded};

pub use crate::config::LabelFormat;

pub use crate::error::{TableError, FieldKind};
