//! Code table derivation.
//!
//! Walking the tree depth-first assigns every leaf the bit path that leads
//! to it: 0 for a left edge, 1 for a right edge. The tree structure makes
//! the resulting codes prefix-free, since only leaves terminate paths.

use tracing::trace;

use stolas_core::{Error, Result};

use crate::tree::{HuffNode, HuffTree};
use crate::SYMBOL_COUNT;

/// Longest admissible code, in bits.
///
/// A 257-leaf tree can in principle reach depth 256, but a code of length
/// `n` requires a Fibonacci-like total input weight near φ^n; crossing 64
/// bits would take tens of terabytes of input. The bound keeps codes in a
/// single packed word and turns the impossible case into an error instead
/// of a truncation.
pub const MAX_CODE_BITS: usize = 64;

/// A single packed code: the low `len` bits of `bits`, MSB-first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Code {
    /// Code bits, right-aligned.
    pub bits: u64,
    /// Number of significant bits. Zero means "no code assigned".
    pub len: u8,
}

/// Mapping from symbol to its prefix-free code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: [Code; SYMBOL_COUNT],
}

impl CodeTable {
    /// Derive the code table from a tree.
    ///
    /// Rejects a single-leaf tree: its lone path is empty, and an empty
    /// code cannot be written or read back. Trees built by
    /// [`HuffTree::from_frequencies`] always have at least two leaves.
    pub fn from_tree(tree: &HuffTree) -> Result<Self> {
        if matches!(tree.node(tree.root()), HuffNode::Leaf { .. }) {
            return Err(Error::algorithm(
                "huffman",
                "cannot derive codes from a single-leaf tree",
            ));
        }

        let mut codes = [Code::default(); SYMBOL_COUNT];
        let mut stack: Vec<(usize, u64, u8)> = vec![(tree.root(), 0, 0)];

        while let Some((id, bits, len)) = stack.pop() {
            match tree.node(id) {
                HuffNode::Leaf { symbol } => {
                    trace!(symbol, code_len = len, "assigned code");
                    codes[usize::from(symbol)] = Code { bits, len };
                }
                HuffNode::Internal { left, right } => {
                    if usize::from(len) >= MAX_CODE_BITS {
                        return Err(Error::algorithm(
                            "huffman",
                            format!("code length exceeds {MAX_CODE_BITS} bits"),
                        ));
                    }
                    // Left pushed last so it is walked first.
                    stack.push((right, (bits << 1) | 1, len + 1));
                    stack.push((left, bits << 1, len + 1));
                }
            }
        }

        Ok(Self { codes })
    }

    /// Get the code for a symbol. A zero-length code means the symbol had
    /// no leaf in the tree.
    #[inline]
    pub fn code(&self, symbol: u16) -> Code {
        self.codes[usize::from(symbol)]
    }
}
