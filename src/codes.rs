//! Code table derivation.
//!
//! Codes are root-to-leaf paths: 0 descends left, 1 descends right. Because
//! every symbol sits at a leaf, no code can be a prefix of another, which is
//! the whole trick that lets the decoder run without delimiters.

use crate::tree::Node;

/// Per-symbol bit-string codes, indexed by byte value.
///
/// Each code is a sequence of 0/1 bytes. An empty sequence means the symbol
/// does not occur in the source alphabet.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: Vec<Vec<u8>>,
}

impl CodeTable {
    /// Derive the code table for `root`.
    ///
    /// A degenerate single-leaf root gets the fixed one-bit code `0`: a
    /// zero-length code would make the encoded stream carry no information
    /// about how many times the symbol occurred.
    pub fn from_tree(root: &Node) -> Self {
        let mut codes = vec![Vec::new(); 256];
        Self::walk(root, Vec::new(), &mut codes);
        Self { codes }
    }

    fn walk(node: &Node, prefix: Vec<u8>, codes: &mut [Vec<u8>]) {
        match node {
            Node::Leaf { symbol, .. } => {
                codes[*symbol as usize] = if prefix.is_empty() { vec![0] } else { prefix };
            }
            Node::Internal { left, right, .. } => {
                let mut left_prefix = prefix.clone();
                left_prefix.push(0);
                Self::walk(left, left_prefix, codes);

                let mut right_prefix = prefix;
                right_prefix.push(1);
                Self::walk(right, right_prefix, codes);
            }
        }
    }

    /// The code for `symbol`, or `None` if it has no entry.
    pub fn code(&self, symbol: u8) -> Option<&[u8]> {
        let code = &self.codes[symbol as usize];
        if code.is_empty() {
            None
        } else {
            Some(code)
        }
    }

    /// Number of symbols with an assigned code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| !c.is_empty()).count()
    }

    /// True when no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|c| c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::FrequencyMap;
    use crate::tree::build_tree;

    fn table_for(data: &[u8]) -> CodeTable {
        let root = build_tree(&FrequencyMap::from_bytes(data)).unwrap();
        CodeTable::from_tree(&root)
    }

    fn is_prefix_free(table: &CodeTable) -> bool {
        let codes: Vec<&[u8]> = (0u16..256)
            .filter_map(|s| table.code(s as u8))
            .collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j && b.len() >= a.len() && &b[..a.len()] == *a {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn degenerate_tree_gets_one_bit_code() {
        let table = table_for(&[b'x'; 10]);
        assert_eq!(table.code(b'x'), Some(&[0u8][..]));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn every_counted_symbol_has_a_code() {
        let data = b"abracadabra";
        let freq = FrequencyMap::from_bytes(data);
        let table = table_for(data);
        for (symbol, _) in freq.symbols() {
            assert!(table.code(symbol).is_some());
        }
        assert_eq!(table.len(), freq.distinct());
    }

    #[test]
    fn absent_symbols_have_no_code() {
        let table = table_for(b"abc");
        assert_eq!(table.code(b'z'), None);
    }

    #[test]
    fn codes_are_prefix_free() {
        assert!(is_prefix_free(&table_for(b"abracadabra")));
        assert!(is_prefix_free(&table_for(b"AAAAB")));

        let all: Vec<u8> = (0..=255).collect();
        assert!(is_prefix_free(&table_for(&all)));
    }

    #[test]
    fn frequent_symbols_never_get_longer_codes_than_rare_ones() {
        let data = b"aaaaaaaabbbbc";
        let table = table_for(data);
        let len = |s: u8| table.code(s).unwrap().len();
        assert!(len(b'a') <= len(b'b'));
        assert!(len(b'b') <= len(b'c'));
    }
}
