//! Compression round trip.
//!
//! [`compress`] turns a byte buffer into an [`EncodedPayload`]: the frequency
//! map (enough to rebuild the tree), the packed bit stream, and the exact
//! meaningful-bit count. [`decompress`] inverts it. Both are pure in-memory
//! transforms; file access and the on-disk layout live in
//! [`crate::container`] and the CLI.

use crate::bits::{BitReader, BitWriter};
use crate::codes::CodeTable;
use crate::error::{Error, Result};
use crate::freq::FrequencyMap;
use crate::tree::{build_tree, Node};

/// Everything a decoder needs: the model and the packed bit stream.
#[derive(Debug, Clone)]
pub struct EncodedPayload {
    /// Symbol frequencies of the original input; rebuilds the tree.
    pub frequencies: FrequencyMap,
    /// Code bits packed MSB-first into bytes.
    pub bits: Vec<u8>,
    /// Exact number of meaningful bits in `bits`.
    pub bit_len: u64,
}

impl EncodedPayload {
    /// The payload for zero-length input: no symbols, no bits.
    pub fn empty() -> Self {
        Self {
            frequencies: FrequencyMap::new(),
            bits: Vec::new(),
            bit_len: 0,
        }
    }
}

/// Encode `data` into a packed bit stream using `table`.
///
/// # Errors
/// Returns `Error::UnknownSymbol` if a byte has no table entry. Unreachable
/// when the table was derived from `data`'s own frequencies, but decoupled
/// callers get a typed failure instead of corrupt output.
pub fn encode_bits(data: &[u8], table: &CodeTable) -> Result<(Vec<u8>, u64)> {
    let mut writer = BitWriter::new();
    for &b in data {
        let code = table.code(b).ok_or(Error::UnknownSymbol(b))?;
        writer.push_code(code);
    }
    Ok(writer.finish())
}

/// Decode `bit_len` bits of `bits` by walking the tree from `root`.
///
/// A degenerate single-leaf root emits its symbol once per meaningful bit:
/// the one-bit placeholder code carries no path information, only a tally.
///
/// # Errors
/// Returns `Error::TruncatedStream` if the bits run out mid-path.
pub fn decode_bits(root: &Node, bits: &[u8], bit_len: u64) -> Result<Vec<u8>> {
    if let Node::Leaf { symbol, .. } = root {
        return Ok(vec![*symbol; bit_len as usize]);
    }

    let mut out = Vec::new();
    let mut current = root;
    for bit in BitReader::new(bits, bit_len) {
        current = match current {
            Node::Internal { left, right, .. } => {
                if bit == 0 {
                    left
                } else {
                    right
                }
            }
            // The walk resets to the root after every emit, and the root is
            // internal here.
            Node::Leaf { .. } => unreachable!("walk stopped on a leaf"),
        };

        if let Node::Leaf { symbol, .. } = current {
            out.push(*symbol);
            current = root;
        }
    }

    if !std::ptr::eq(current, root) {
        return Err(Error::TruncatedStream);
    }
    Ok(out)
}

/// Compress `data` into an [`EncodedPayload`].
///
/// Zero-length input is special-cased to an empty payload before any tree
/// construction, so `compress` never fails on it.
pub fn compress(data: &[u8]) -> Result<EncodedPayload> {
    if data.is_empty() {
        return Ok(EncodedPayload::empty());
    }

    let frequencies = FrequencyMap::from_bytes(data);
    let root = build_tree(&frequencies)?;
    let table = CodeTable::from_tree(&root);
    let (bits, bit_len) = encode_bits(data, &table)?;

    Ok(EncodedPayload {
        frequencies,
        bits,
        bit_len,
    })
}

/// Reconstruct the original bytes from `payload`.
///
/// # Errors
/// - `Error::CorruptFrequencyMap` if the frequencies are zero-sum against a
///   non-empty bit sequence, or describe fewer bytes than the stream decodes.
/// - `Error::TruncatedStream` if the bit stream ends mid-code or decodes to
///   fewer bytes than the frequencies promise.
pub fn decompress(payload: &EncodedPayload) -> Result<Vec<u8>> {
    if payload.frequencies.is_empty() {
        if payload.bit_len > 0 {
            return Err(Error::CorruptFrequencyMap(
                "empty frequencies with a non-empty bit stream",
            ));
        }
        return Ok(Vec::new());
    }

    let root = build_tree(&payload.frequencies)?;
    let out = decode_bits(&root, &payload.bits, payload.bit_len)?;

    // The frequency map promises an exact output length; a stream that lost
    // whole codes would otherwise come back silently short.
    let expected = payload.frequencies.total();
    match (out.len() as u64).cmp(&expected) {
        std::cmp::Ordering::Less => Err(Error::TruncatedStream),
        std::cmp::Ordering::Greater => Err(Error::CorruptFrequencyMap(
            "bit stream decodes to more bytes than the frequencies describe",
        )),
        std::cmp::Ordering::Equal => Ok(out),
    }
}
