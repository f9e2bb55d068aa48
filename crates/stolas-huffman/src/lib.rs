//! # Stolas Huffman
//!
//! Tree-embedded Huffman compression: a lossless, reversible byte-stream
//! codec whose compressed output carries its own decoding tree, so no
//! external dictionary is ever needed.
//!
//! ## Quick Start
//!
//! ```rust
//! use stolas_huffman::HuffmanCodec;
//! use stolas_core::{Compressor, Decompressor};
//!
//! let codec = HuffmanCodec::new();
//! let compressed = codec.compress(b"Hello, World!").unwrap();
//! let original = codec.decompress(&compressed).unwrap();
//! assert_eq!(original, b"Hello, World!");
//! ```
//!
//! ## Stream Format
//!
//! All fields are written most-significant-bit first.
//!
//! | Field | Width | Meaning |
//! |-------|-------|---------|
//! | Magic | 32 bits | [`HUFF_MAGIC`], identifies the tree-embedded format |
//! | Tree header | variable | pre-order tree: `0` = internal, `1` + 9-bit symbol = leaf |
//! | Payload | variable | one code per input byte, then the end-of-stream code, then zero padding |
//!
//! The coder works over a 257-symbol alphabet: byte values 0-255 plus a
//! synthetic end-of-stream marker ([`EOS`]) that is always counted exactly
//! once, guaranteeing the decoder can find the exact end of the payload
//! despite byte-boundary padding.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                    stolas-huffman                      │
//! ├────────────────────────────────────────────────────────┤
//! │  compress:   histogram → tree → code table             │
//! │              → header write → encode walk              │
//! │  decompress: magic check → header read → decode walk   │
//! ├────────────────────────────────────────────────────────┤
//! │  bitstream.rs   MSB-first BitReader / BitWriter        │
//! │  histogram.rs   257-symbol frequency table             │
//! │  tree.rs        arena tree + greedy merge              │
//! │  code.rs        packed prefix-free code table          │
//! │  header.rs      pre-order tree (de)serialization       │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! Compression is two linear passes (count, then encode); decompression is
//! one. Nothing is shared between runs, so independent invocations are
//! freely parallel.

pub mod bitstream;
pub mod code;
pub mod decoder;
pub mod encoder;
pub mod header;
pub mod histogram;
pub mod tree;

pub use bitstream::{BitReader, BitWriter};
pub use code::{Code, CodeTable, MAX_CODE_BITS};
pub use decoder::decompress;
pub use encoder::compress;
pub use histogram::FrequencyTable;
pub use tree::{HuffNode, HuffTree, MAX_TREE_NODES};

use stolas_core::{Algorithm, Codec, Compressor, Decompressor, Result};

// =============================================================================
// Constants
// =============================================================================

/// Magic number identifying the tree-embedded Huffman format.
pub const HUFF_MAGIC: u32 = 0xFACE_8201;

/// Bits per input unit: the coder reads and emits whole bytes.
pub const BYTE_BITS: usize = 8;

/// Width of a leaf symbol field in the tree header, wide enough for 0-256.
pub const SYMBOL_BITS: usize = 9;

/// The synthetic end-of-stream symbol.
pub const EOS: u16 = 256;

/// Total alphabet size: 256 byte values plus the end-of-stream marker.
pub const SYMBOL_COUNT: usize = 257;

// =============================================================================
// Codec Implementation
// =============================================================================

/// Worst-case compressed size for `input_len` bytes: magic, a maximal tree
/// header, the 64-bit code cap for every symbol plus end-of-stream, and
/// final padding.
fn worst_case_size(input_len: usize) -> usize {
    const MAGIC_BYTES: usize = 4;
    const MAX_TREE_BYTES: usize = (MAX_TREE_NODES + SYMBOL_COUNT * SYMBOL_BITS + 7) / 8;
    MAGIC_BYTES + MAX_TREE_BYTES + (input_len + 1) * (MAX_CODE_BITS / 8) + 1
}

/// Huffman compressor.
///
/// # Example
///
/// ```rust
/// use stolas_huffman::HuffmanCompressor;
/// use stolas_core::Compressor;
///
/// let compressor = HuffmanCompressor::new();
/// let compressed = compressor.compress(b"abracadabra").unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct HuffmanCompressor;

impl HuffmanCompressor {
    /// Create a new Huffman compressor.
    pub fn new() -> Self {
        Self
    }
}

impl Compressor for HuffmanCompressor {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Huffman
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        encoder::compress(input)
    }

    fn max_compressed_size(&self, input_len: usize) -> usize {
        worst_case_size(input_len)
    }
}

/// Huffman decompressor.
#[derive(Debug, Clone, Default)]
pub struct HuffmanDecompressor;

impl HuffmanDecompressor {
    /// Create a new Huffman decompressor.
    pub fn new() -> Self {
        Self
    }
}

impl Decompressor for HuffmanDecompressor {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Huffman
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        decoder::decompress(input)
    }
}

/// Huffman codec combining compression and decompression.
#[derive(Debug, Clone, Default)]
pub struct HuffmanCodec;

impl HuffmanCodec {
    /// Create a new Huffman codec.
    pub fn new() -> Self {
        Self
    }
}

impl Compressor for HuffmanCodec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Huffman
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        encoder::compress(input)
    }

    fn max_compressed_size(&self, input_len: usize) -> usize {
        worst_case_size(input_len)
    }
}

impl Decompressor for HuffmanCodec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Huffman
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        decoder::decompress(input)
    }
}

impl Codec for HuffmanCodec {
    fn new() -> Self {
        HuffmanCodec::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
