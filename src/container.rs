//! On-disk container layout.
//!
//! The layout, all little-endian:
//!
//! ```text
//! "HUF1"              magic, 4 bytes
//! u16                 number of distinct symbols (0..=256)
//! (u8, u64) * n       symbol value and its count
//! u64                 meaningful-bit count of the stream
//! [u8]                packed code bits, (bit_len + 7) / 8 bytes
//! ```
//!
//! The meaningful-bit count is load-bearing: without it the trailing padding
//! bits in the final byte are indistinguishable from real codes whenever the
//! stream length is not a multiple of 8.

use crate::codec::EncodedPayload;
use crate::error::{Error, Result};
use crate::freq::FrequencyMap;

const MAGIC: &[u8; 4] = b"HUF1";

/// Serialize `payload` into the container layout.
pub fn to_bytes(payload: &EncodedPayload) -> Vec<u8> {
    let distinct = payload.frequencies.distinct() as u16;

    let mut out = Vec::with_capacity(4 + 2 + 9 * distinct as usize + 8 + payload.bits.len());
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&distinct.to_le_bytes());
    for (symbol, count) in payload.frequencies.symbols() {
        out.push(symbol);
        out.extend_from_slice(&count.to_le_bytes());
    }
    out.extend_from_slice(&payload.bit_len.to_le_bytes());
    out.extend_from_slice(&payload.bits);
    out
}

/// Parse a container back into an [`EncodedPayload`].
///
/// # Errors
/// - `Error::CorruptFrequencyMap` on a bad magic, a short header, a
///   duplicate symbol, or a zero count.
/// - `Error::TruncatedStream` when fewer bit bytes remain than the declared
///   bit count requires.
pub fn from_bytes(data: &[u8]) -> Result<EncodedPayload> {
    let rest = data
        .strip_prefix(MAGIC)
        .ok_or(Error::CorruptFrequencyMap("bad magic"))?;

    let (count_bytes, mut rest) = split_array::<2>(rest)?;
    let distinct = u16::from_le_bytes(count_bytes) as usize;
    if distinct > 256 {
        return Err(Error::CorruptFrequencyMap("more than 256 symbols"));
    }

    let mut pairs = Vec::with_capacity(distinct);
    for _ in 0..distinct {
        let (symbol, tail) = rest
            .split_first()
            .ok_or(Error::CorruptFrequencyMap("short symbol table"))?;
        let (count_bytes, tail) = split_array::<8>(tail)?;
        pairs.push((*symbol, u64::from_le_bytes(count_bytes)));
        rest = tail;
    }
    let frequencies = FrequencyMap::from_pairs(&pairs)?;

    let (bit_len_bytes, bits) = split_array::<8>(rest)?;
    let bit_len = u64::from_le_bytes(bit_len_bytes);

    let needed = bit_len.div_ceil(8);
    if (bits.len() as u64) < needed {
        return Err(Error::TruncatedStream);
    }

    Ok(EncodedPayload {
        frequencies,
        bits: bits[..needed as usize].to_vec(),
        bit_len,
    })
}

fn split_array<const N: usize>(data: &[u8]) -> Result<([u8; N], &[u8])> {
    if data.len() < N {
        return Err(Error::CorruptFrequencyMap("short header"));
    }
    let (head, tail) = data.split_at(N);
    let mut array = [0u8; N];
    array.copy_from_slice(head);
    Ok((array, tail))
}
