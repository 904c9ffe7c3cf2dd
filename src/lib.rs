//! # Huffman coding
//!
//! *Optimal prefix codes from symbol frequencies.*
//!
//! ## Intuition First
//!
//! Morse code already had the idea: give the common letter E a single dot and
//! the rare Q a long sequence. Huffman coding makes that intuition optimal.
//! Count how often each byte occurs, then repeatedly glue together the two
//! rarest things you have. Rare bytes sink deep into the resulting tree and
//! get long codes; frequent bytes stay near the root and get short ones.
//!
//! ## The Problem
//!
//! A fixed-width encoding spends 8 bits on every byte regardless of how
//! skewed the input distribution is. An English text spends as many bits on
//! `z` as on `e`. Entropy says we can do better, and a prefix code lets us do
//! so without delimiters: because no code is a prefix of another, the decoder
//! always knows where one symbol ends and the next begins.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the fundamental limit
//! 1949  Fano        Top-down splitting: close, but not optimal
//! 1952  Huffman     Bottom-up merging: provably optimal prefix codes
//! 1977  Ziv/Lempel  Dictionary coding, later paired with Huffman in DEFLATE
//! ```
//!
//! David Huffman found the algorithm as a student, after Fano offered his
//! class a choice between a term paper and a final exam. The key insight was
//! to build the tree bottom-up from the two least frequent symbols, the one
//! direction Fano had not tried.
//!
//! ## Mathematical Formulation
//!
//! Given symbols $S$ with frequencies $f_s$, Huffman's greedy merge produces
//! a binary tree whose leaf depths $d_s$ minimize the total cost
//!
//! ```text
//! B(T) = \sum_{s \in S} f_s \cdot d_s
//! ```
//!
//! over all prefix codes, landing within one bit per symbol of the Shannon
//! entropy $H = -\sum p_s \log_2 p_s$.
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(n + k \log k)$ for input length $n$ and alphabet size $k$.
//! - **Space**: $O(k)$ for the tree and code table; the packed bit stream is
//!   at most as long as the input and usually far shorter.
//!
//! ## Failure Modes
//!
//! 1. **Uniform input**: all 256 byte values equally likely compresses to
//!    exactly 8 bits per symbol, plus the frequency-table header.
//! 2. **Tiny input**: the header dominates; the "compressed" file can be
//!    larger than the original.
//!
//! ## Implementation Notes
//!
//! This crate keeps the core pure: [`compress`] and [`decompress`] transform
//! in-memory buffers, while file access and the on-disk layout live in
//! [`container`] and the `huffpack` binary. The packed bit stream always
//! travels with its exact meaningful-bit count, so trailing padding in the
//! final byte is never ambiguous.
//!
//! ## References
//!
//! - Huffman, D. (1952). "A Method for the Construction of
//!   Minimum-Redundancy Codes."
//! - Moffat, A. (2019). "Huffman Coding." ACM Computing Surveys.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bits;
pub mod codec;
pub mod codes;
pub mod container;
pub mod error;
pub mod freq;
pub mod tree;

pub use codec::{compress, decompress, EncodedPayload};
pub use codes::CodeTable;
pub use error::Error;
pub use freq::FrequencyMap;
pub use tree::Node;
