//! 802.11 channel records

use core::fmt;

use alloc::{format, string::String};

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::config::LabelFormat;

/// PHY standard / band a channel belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum Standard {
    /// 802.11g, 2.4 GHz
    #[strum(serialize = "11g")]
    G,
    /// 802.11a, 5 GHz
    #[strum(serialize = "11a")]
    A,
    /// 802.11a, short range device sub-band
    #[strum(serialize = "11a (SRD)")]
    ASrd,
    /// 802.11p, 5.9 GHz vehicular
    #[strum(serialize = "11p")]
    P,
}

/// Entry trait provides the fields needed to render a channel label,
/// implemented by table channels and by decoded flat records.
pub trait Entry {
    /// Channel number
    fn number(&self) -> u64;

    /// Center frequency in Hz
    fn frequency_hz(&self) -> f64;

    /// Standard label text
    fn standard(&self) -> &str;

    /// Fetch the center frequency in MHz
    fn mhz(&self) -> f64 {
        self.frequency_hz() / 1_000_000.0
    }

    /// Render the display label for this entry, eg. `"  1 | 2412.0 | 11g"`
    fn label(&self, fmt: &LabelFormat) -> String {
        // Debug keeps the fractional part on whole MHz values
        format!("{:>w$}{}{:?}{}{}",
            self.number(), fmt.separator, self.mhz(), fmt.separator, self.standard(),
            w = fmt.width,
        )
    }
}

/// A single channel entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Channel {
    /// IEEE 802.11 channel index
    pub number: u16,
    /// Center frequency in Hz
    pub frequency_hz: f64,
    pub standard: Standard,
}

impl Channel {
    pub const fn new(number: u16, frequency_hz: f64, standard: Standard) -> Self {
        Self { number, frequency_hz, standard }
    }
}

impl Entry for Channel {
    fn number(&self) -> u64 {
        self.number as u64
    }

    fn frequency_hz(&self) -> f64 {
        self.frequency_hz
    }

    fn standard(&self) -> &str {
        <&'static str>::from(self.standard)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label(&LabelFormat::default()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use std::string::ToString;
    use core::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn standard_labels() {
        for s in Standard::iter() {
            let text = s.to_string();
            assert_eq!(Standard::from_str(&text), Ok(s));
        }

        assert_eq!(Standard::ASrd.to_string(), "11a (SRD)");
        assert!(Standard::from_str("11n").is_err());
    }

    #[test]
    fn default_label() {
        let c = Channel::new(1, 2412e6, Standard::G);
        assert_eq!(c.mhz(), 2412.0);
        assert_eq!(Entry::standard(&c), "11g");
        assert_eq!(c.label(&LabelFormat::default()), "  1 | 2412.0 | 11g");
        assert_eq!(c.to_string(), "  1 | 2412.0 | 11g");
    }

    #[test]
    fn wide_numbers_are_not_truncated() {
        let c = Channel::new(1000, 5917.5e6, Standard::A);
        assert_eq!(c.label(&LabelFormat::default()), "1000 | 5917.5 | 11a");
    }

    #[test]
    fn custom_label() {
        let c = Channel::new(149, 5745e6, Standard::ASrd);
        let fmt = LabelFormat::new(5, ", ");
        assert_eq!(c.label(&fmt), "  149, 5745.0, 11a (SRD)");
    }
}
