//! Byte frequency counting.
//!
//! The frequency map is the model everything else derives from: the tree
//! shape, the code lengths, and the decoder's copy of both. It is stored as a
//! dense 256-slot count array rather than a hash map, so a symbol "present in
//! the map" simply means its slot is non-zero.

use crate::error::{Error, Result};

/// Occurrence counts for every possible byte value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: [u64; 256],
}

impl FrequencyMap {
    /// Create an all-zero map.
    pub fn new() -> Self {
        Self { counts: [0; 256] }
    }

    /// Count byte occurrences in `data`.
    ///
    /// Pure: the sum of all counts equals `data.len()`.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut counts = [0u64; 256];
        for &b in data {
            counts[b as usize] += 1;
        }
        Self { counts }
    }

    /// Rebuild a map from `(symbol, count)` pairs, as read from a container.
    ///
    /// The counts must sum within `u64`: tree construction adds subtree
    /// weights freely, so an unchecked total would turn a crafted container
    /// into an arithmetic panic instead of a typed failure.
    ///
    /// # Errors
    /// Returns `Error::CorruptFrequencyMap` on a duplicate symbol, a zero
    /// count, or an overflowing total, none of which a well-formed encoder
    /// emits.
    pub fn from_pairs(pairs: &[(u8, u64)]) -> Result<Self> {
        let mut counts = [0u64; 256];
        let mut total: u64 = 0;
        for &(symbol, count) in pairs {
            if count == 0 {
                return Err(Error::CorruptFrequencyMap("zero count for a listed symbol"));
            }
            if counts[symbol as usize] != 0 {
                return Err(Error::CorruptFrequencyMap("duplicate symbol entry"));
            }
            total = total
                .checked_add(count)
                .ok_or(Error::CorruptFrequencyMap("counts overflow"))?;
            counts[symbol as usize] = count;
        }
        Ok(Self { counts })
    }

    /// Occurrences of `symbol`.
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Total number of bytes counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of distinct byte values with a non-zero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// True when no symbol has been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Iterate over `(symbol, count)` pairs with non-zero counts, in
    /// ascending symbol order.
    pub fn symbols(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .map(|(s, &c)| (s as u8, c))
    }
}

impl Default for FrequencyMap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_input_length() {
        let data = b"abracadabra";
        let freq = FrequencyMap::from_bytes(data);
        assert_eq!(freq.total(), data.len() as u64);
        assert_eq!(freq.count(b'a'), 5);
        assert_eq!(freq.count(b'b'), 2);
        assert_eq!(freq.count(b'z'), 0);
        assert_eq!(freq.distinct(), 5);
    }

    #[test]
    fn empty_input_gives_empty_map() {
        let freq = FrequencyMap::from_bytes(&[]);
        assert!(freq.is_empty());
        assert_eq!(freq.total(), 0);
        assert_eq!(freq.symbols().count(), 0);
    }

    #[test]
    fn symbols_iterate_in_ascending_order() {
        let freq = FrequencyMap::from_bytes(b"cba");
        let pairs: Vec<_> = freq.symbols().collect();
        assert_eq!(pairs, vec![(b'a', 1), (b'b', 1), (b'c', 1)]);
    }

    #[test]
    fn from_pairs_rejects_duplicates() {
        let err = FrequencyMap::from_pairs(&[(7, 1), (7, 2)]).unwrap_err();
        assert!(matches!(err, Error::CorruptFrequencyMap(_)));
    }

    #[test]
    fn from_pairs_rejects_overflowing_totals() {
        // Two maximal counts cannot coexist; their subtree weights would
        // wrap during tree construction.
        let err = FrequencyMap::from_pairs(&[(0, u64::MAX), (1, u64::MAX)]).unwrap_err();
        assert!(matches!(err, Error::CorruptFrequencyMap("counts overflow")));
    }

    #[test]
    fn from_pairs_rejects_zero_counts() {
        let err = FrequencyMap::from_pairs(&[(7, 0)]).unwrap_err();
        assert!(matches!(err, Error::CorruptFrequencyMap(_)));
    }

    #[test]
    fn from_pairs_round_trips_symbols() {
        let freq = FrequencyMap::from_bytes(b"AAAAB");
        let pairs: Vec<_> = freq.symbols().collect();
        let rebuilt = FrequencyMap::from_pairs(&pairs).unwrap();
        assert_eq!(freq, rebuilt);
    }
}
