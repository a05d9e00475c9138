//! Static 802.11 channel table and lookups

use crate::channels::{Channel, Entry, Standard::{self, *}};

/// 802.11 channels, grouped by standard in ascending channel order
pub static CHANNELS: &[Channel] = &[
    // 11g
    Channel::new(1, 2412e6, G),
    Channel::new(2, 2417e6, G),
    Channel::new(3, 2422e6, G),
    Channel::new(4, 2427e6, G),
    Channel::new(5, 2432e6, G),
    Channel::new(6, 2437e6, G),
    Channel::new(7, 2442e6, G),
    Channel::new(8, 2447e6, G),
    Channel::new(9, 2452e6, G),
    Channel::new(10, 2457e6, G),
    Channel::new(11, 2462e6, G),
    Channel::new(12, 2467e6, G),
    Channel::new(13, 2472e6, G),
    Channel::new(14, 2484e6, G),

    // 11a
    Channel::new(34, 5170e6, A),
    Channel::new(36, 5180e6, A),
    Channel::new(38, 5190e6, A),
    Channel::new(40, 5200e6, A),
    Channel::new(42, 5210e6, A),
    Channel::new(44, 5220e6, A),
    Channel::new(46, 5230e6, A),
    Channel::new(48, 5240e6, A),
    Channel::new(50, 5250e6, A),
    Channel::new(52, 5260e6, A),
    Channel::new(54, 5270e6, A),
    Channel::new(56, 5280e6, A),
    Channel::new(58, 5290e6, A),
    Channel::new(60, 5300e6, A),
    Channel::new(62, 5310e6, A),
    Channel::new(64, 5320e6, A),
    Channel::new(100, 5500e6, A),
    Channel::new(102, 5510e6, A),
    Channel::new(104, 5520e6, A),
    Channel::new(106, 5530e6, A),
    Channel::new(108, 5540e6, A),
    Channel::new(110, 5550e6, A),
    Channel::new(112, 5560e6, A),
    Channel::new(114, 5570e6, A),
    Channel::new(116, 5580e6, A),
    Channel::new(118, 5590e6, A),
    Channel::new(120, 5600e6, A),
    Channel::new(122, 5610e6, A),
    Channel::new(124, 5620e6, A),
    Channel::new(126, 5630e6, A),
    Channel::new(128, 5640e6, A),
    Channel::new(132, 5660e6, A),
    Channel::new(134, 5670e6, A),
    Channel::new(136, 5680e6, A),
    Channel::new(138, 5690e6, A),
    Channel::new(140, 5700e6, A),
    Channel::new(142, 5710e6, A),
    Channel::new(144, 5720e6, A),

    // 11a (SRD)
    Channel::new(149, 5745e6, ASrd),
    Channel::new(151, 5755e6, ASrd),
    Channel::new(153, 5765e6, ASrd),
    Channel::new(155, 5775e6, ASrd),
    Channel::new(157, 5785e6, ASrd),
    Channel::new(159, 5795e6, ASrd),
    Channel::new(161, 5805e6, ASrd),
    Channel::new(165, 5825e6, ASrd),

    // 11p
    Channel::new(172, 5860e6, P),
    Channel::new(174, 5870e6, P),
    Channel::new(176, 5880e6, P),
    Channel::new(178, 5890e6, P),
    Channel::new(180, 5900e6, P),
    Channel::new(182, 5910e6, P),
    Channel::new(184, 5920e6, P),
];

/// Find a channel by its channel number
pub fn by_number(number: u16) -> Option<&'static Channel> {
    CHANNELS.iter().find(|c| c.number == number)
}

/// Find the channel whose center frequency lies within 0.5 MHz of `freq_mhz`
pub fn by_mhz(freq_mhz: f64) -> Option<&'static Channel> {
    CHANNELS.iter().find(|c| {
        let d = c.mhz() - freq_mhz;
        d > -0.5 && d < 0.5
    })
}

/// Iterate over the channels of a single standard, in table order
pub fn by_standard(standard: Standard) -> impl Iterator<Item = &'static Channel> {
    CHANNELS.iter().filter(move |c| c.standard == standard)
}

#[cfg(test)]
mod test {
    use super::*;

    use strum::IntoEnumIterator;

    #[test]
    fn table_shape() {
        assert_eq!(CHANNELS.len(), 67);

        // Ascending, unique channel numbers
        for w in CHANNELS.windows(2) {
            assert!(w[0].number < w[1].number, "{:?} !< {:?}", w[0], w[1]);
        }

        let counts: std::vec::Vec<usize> = Standard::iter().map(|s| by_standard(s).count()).collect();
        assert_eq!(counts, &[14, 38, 8, 7]);
    }

    #[test]
    fn lookup_number() {
        let c = by_number(14).unwrap();
        assert_eq!(c.frequency_hz, 2484e6);
        assert_eq!(c.standard, Standard::G);

        let c = by_number(165).unwrap();
        assert_eq!(c.standard, Standard::ASrd);

        assert!(by_number(15).is_none());
        assert!(by_number(0).is_none());
    }

    #[test]
    fn lookup_mhz() {
        assert_eq!(by_mhz(5180.0).map(|c| c.number), Some(36));
        assert_eq!(by_mhz(5920.2).map(|c| c.number), Some(184));
        assert_eq!(by_mhz(2400.0), None);
    }

    #[test]
    fn lookup_standard() {
        let p: std::vec::Vec<u16> = by_standard(Standard::P).map(|c| c.number).collect();
        assert_eq!(p, &[172, 174, 176, 178, 180, 182, 184]);
    }
}
