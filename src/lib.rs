//! IEEE 802.11 channel table
//!
//! Provides the static table of 802.11g / a / p channels with their
//! center frequencies, and expands channel tables into display labels
//! and raw frequency lists.

#![no_std]

extern crate alloc;

#[cfg(any(test, feature="std"))]
extern crate std;

pub mod config;

pub mod channels;

pub mod table;

pub mod flat;

pub mod expand;

pub mod error;

pub mod prelude;
