//! Error types for compression operations.

use thiserror::Error;

/// Result type alias for compression operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Compression error types.
///
/// Decompression failures fall into three fatal categories that callers can
/// match on directly: a wrong magic number ([`Error::BadMagic`]), a bit
/// source that ran dry while the tree header was still being read
/// ([`Error::TruncatedHeader`]), and a payload that ended before the
/// end-of-stream leaf was reached ([`Error::TruncatedPayload`]). None of
/// them are retryable; a failed run produces no usable output.
#[derive(Debug, Error)]
pub enum Error {
    /// Input does not start with the expected magic number.
    #[error("bad magic number: expected 0x{expected:08x}, got 0x{found:08x}")]
    BadMagic { expected: u32, found: u32 },

    /// Bit source exhausted while the tree header was being decoded.
    #[error("truncated header: bit source exhausted at bit {bit_offset}")]
    TruncatedHeader { bit_offset: u64 },

    /// Bit source exhausted before an end-of-stream code was decoded.
    #[error("truncated payload: no end-of-stream code after {bytes_decoded} decoded bytes")]
    TruncatedPayload { bytes_decoded: usize },

    /// Input data is structurally invalid in a way plain truncation is not.
    #[error("corrupted data: {message}")]
    CorruptedData { message: String },

    /// Buffer too small for output.
    #[error("buffer too small: need {required} bytes, got {provided}")]
    BufferTooSmall { required: usize, provided: usize },

    /// Algorithm-specific contract violation.
    #[error("{algorithm} error: {message}")]
    Algorithm {
        algorithm: &'static str,
        message: String,
    },

    /// I/O error from an underlying stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a bad magic number error.
    pub fn bad_magic(expected: u32, found: u32) -> Self {
        Error::BadMagic { expected, found }
    }

    /// Create a truncated header error.
    pub fn truncated_header(bit_offset: u64) -> Self {
        Error::TruncatedHeader { bit_offset }
    }

    /// Create a truncated payload error.
    pub fn truncated_payload(bytes_decoded: usize) -> Self {
        Error::TruncatedPayload { bytes_decoded }
    }

    /// Create a corrupted data error.
    pub fn corrupted(message: impl Into<String>) -> Self {
        Error::CorruptedData {
            message: message.into(),
        }
    }

    /// Create a buffer too small error.
    pub fn buffer_too_small(required: usize, provided: usize) -> Self {
        Error::BufferTooSmall { required, provided }
    }

    /// Create an algorithm-specific error.
    pub fn algorithm(algorithm: &'static str, message: impl Into<String>) -> Self {
        Error::Algorithm {
            algorithm,
            message: message.into(),
        }
    }

    /// Check whether this is a format error (unrecognized container).
    pub fn is_format_error(&self) -> bool {
        matches!(self, Error::BadMagic { .. })
    }

    /// Check whether this is a truncation error (header or payload).
    pub fn is_truncation(&self) -> bool {
        matches!(
            self,
            Error::TruncatedHeader { .. } | Error::TruncatedPayload { .. }
        )
    }

    /// Get error category for metrics.
    pub fn category(&self) -> &'static str {
        match self {
            Error::BadMagic { .. } => "bad_magic",
            Error::TruncatedHeader { .. } => "truncated_header",
            Error::TruncatedPayload { .. } => "truncated_payload",
            Error::CorruptedData { .. } => "corrupted_data",
            Error::BufferTooSmall { .. } => "buffer_too_small",
            Error::Algorithm { .. } => "algorithm_error",
            Error::Io(_) => "io_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_are_distinguishable() {
        let format = Error::bad_magic(0xFACE_8201, 0xDEAD_BEEF);
        let header = Error::truncated_header(40);
        let payload = Error::truncated_payload(12);

        assert!(format.is_format_error());
        assert!(!format.is_truncation());
        assert!(header.is_truncation());
        assert!(payload.is_truncation());
        assert_ne!(header.category(), payload.category());
    }

    #[test]
    fn test_display_includes_context() {
        let err = Error::bad_magic(0xFACE_8201, 0x0000_0001);
        let text = err.to_string();
        assert!(text.contains("face8201"), "expected magic in message: {text}");
        assert!(text.contains("00000001"), "found magic in message: {text}");
    }
}
