//! Packed bit streams.
//!
//! Codes are variable-length, so the encoded stream is a sequence of bits,
//! not bytes. Bits are packed MSB-first into bytes and always travel with
//! their exact meaningful-bit count: the final byte may hold up to seven
//! padding bits, and only the count disambiguates them from real data.

/// Append-only bit buffer for the encoder.
#[derive(Debug, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    bit_len: u64,
}

impl BitWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one bit. Any non-zero value counts as a 1 bit.
    pub fn push_bit(&mut self, bit: u8) {
        let offset = (self.bit_len % 8) as u8;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit != 0 {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 1 << (7 - offset);
        }
        self.bit_len += 1;
    }

    /// Append a whole code, first bit first.
    pub fn push_code(&mut self, code: &[u8]) {
        for &bit in code {
            self.push_bit(bit);
        }
    }

    /// Number of meaningful bits written so far.
    pub fn bit_len(&self) -> u64 {
        self.bit_len
    }

    /// Finish and return `(packed bytes, meaningful bit count)`.
    pub fn finish(self) -> (Vec<u8>, u64) {
        (self.bytes, self.bit_len)
    }
}

/// Bit-at-a-time reader over a packed byte slice.
#[derive(Debug)]
pub struct BitReader<'a> {
    bytes: &'a [u8],
    bit_len: u64,
    pos: u64,
}

impl<'a> BitReader<'a> {
    /// Read up to `bit_len` bits out of `bytes`; trailing padding in the
    /// final byte is never yielded.
    pub fn new(bytes: &'a [u8], bit_len: u64) -> Self {
        Self {
            bytes,
            bit_len,
            pos: 0,
        }
    }
}

impl Iterator for BitReader<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.pos >= self.bit_len {
            return None;
        }
        let byte = *self.bytes.get((self.pos / 8) as usize)?;
        let offset = (self.pos % 8) as u8;
        self.pos += 1;
        Some((byte >> (7 - offset)) & 1)
    }
}
