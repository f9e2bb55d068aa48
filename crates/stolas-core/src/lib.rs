//! # Stolas Core
//!
//! Core traits, types, and error taxonomy for the Stolas compression
//! library.
//!
//! Stolas is named after the Great Prince of the Ars Goetia who teaches the
//! knowledge of herbs and precious stones - fitting for a coder whose whole
//! craft is knowing the worth of each symbol and growing trees from it.
//!
//! ## Core Traits
//!
//! - [`Compressor`] - One-shot compression operations
//! - [`Decompressor`] - One-shot decompression operations
//! - [`Codec`] - Combined compress/decompress capability
//!
//! ## Example
//!
//! ```ignore
//! use stolas_core::Codec;
//! use stolas_huffman::HuffmanCodec;
//!
//! let codec = HuffmanCodec::new();
//! let compressed = codec.compress(data)?;
//! let original = codec.decompress(&compressed)?;
//! ```

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::{Codec, Compressor, Decompressor};
pub use types::{Algorithm, CompressionRatio};
