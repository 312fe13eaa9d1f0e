//! Error definitions.
//!
//! Every failure in this crate is terminal for the run. The variants fall into three groups:
//! 1. **Malformed input:** Bad addresses, broken trace markers, missing or invalid parameters.
//! 2. **Precondition violations:** Inconsistent data handed between pipeline stages.
//! 3. **I/O:** Reading inputs, writing reports, or (de)serializing JSON.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading, selecting, or simulating.
#[derive(Debug, Error)]
pub enum Error {
    /// An address token does not have the configured width.
    #[error("address `{address}` has {actual} bits, expected {expected}")]
    AddressWidth {
        /// Offending token.
        address: String,
        /// Configured `Address_bits`.
        expected: usize,
        /// Length of the token.
        actual: usize,
    },

    /// An address token contains something other than `0` and `1`.
    #[error("address `{address}` contains non-binary digit {digit:?} at position {position}")]
    AddressDigit {
        /// Offending token.
        address: String,
        /// The bad character.
        digit: char,
        /// Zero-based position of the bad character (0 = most significant).
        position: usize,
    },

    /// Reference number `line` of the trace failed validation.
    #[error("trace reference {line}: {source}")]
    Reference {
        /// 1-based reference number inside the trace body.
        line: usize,
        /// Underlying address error.
        #[source]
        source: Box<Error>,
    },

    /// The trace does not open with `.benchmark <name>`.
    #[error("trace does not start with `.benchmark <name>`")]
    MissingBenchmark,

    /// The trace body is not terminated by `.end`.
    #[error("trace is missing the `.end` marker")]
    MissingEnd,

    /// The trace has no references, so no statistics can be derived.
    #[error("trace contains no references")]
    EmptyTrace,

    /// A required parameter key is absent.
    #[error("missing parameter `{0}`")]
    MissingParam(&'static str),

    /// A parameter value could not be interpreted.
    #[error("invalid value {value:?} for parameter `{key}`")]
    InvalidParam {
        /// Parameter key.
        key: String,
        /// Raw value text.
        value: String,
    },

    /// `Block_size` or `Cache_sets` is not a power of two.
    #[error("parameter `{key}` must be a power of two, got {value}")]
    NotPowerOfTwo {
        /// Parameter key.
        key: &'static str,
        /// Configured value.
        value: u64,
    },

    /// `Associativity` is zero.
    #[error("parameter `Associativity` must be at least 1")]
    ZeroAssociativity,

    /// The block offset consumes more bits than the address has.
    #[error("block offset needs {offset_bits} bits but addresses only have {address_bits}")]
    OffsetTooWide {
        /// `log2(Block_size)`.
        offset_bits: usize,
        /// `Address_bits`.
        address_bits: usize,
    },

    /// More index bits are requested than there are indexable positions.
    #[error("{index_bits} index bits requested but only {indexable_bits} bits are indexable")]
    TooManyIndexBits {
        /// `log2(Cache_sets)`.
        index_bits: usize,
        /// `Address_bits - log2(Block_size)`.
        indexable_bits: usize,
    },

    /// Quality vector and correlation table cover different bit universes.
    #[error("quality vector has {quality} entries but correlation table is {correlation}x{correlation}")]
    DimensionMismatch {
        /// Length of the quality vector.
        quality: usize,
        /// Dimension of the correlation table.
        correlation: usize,
    },

    /// The selector ran out of candidate positions.
    #[error("no candidate bit left at selection step {step}")]
    NoCandidate {
        /// Zero-based selection step.
        step: usize,
    },

    /// The index-bit list does not have `log2(Cache_sets)` entries.
    #[error("{actual} index bits supplied for a cache needing {expected}")]
    IndexBitCount {
        /// `log2(Cache_sets)`.
        expected: usize,
        /// Length of the supplied list.
        actual: usize,
    },

    /// An index bit lies outside the indexable prefix, or appears twice.
    #[error("bit position {position} cannot be an index bit (indexable prefix is {indexable_bits} bits)")]
    InvalidIndexBit {
        /// Offending position (0 = most significant).
        position: usize,
        /// Width of the indexable prefix.
        indexable_bits: usize,
    },

    /// An address reached the simulator without covering the indexable prefix.
    #[error("address `{address}` is narrower than the {required}-bit indexable prefix")]
    IndexWidth {
        /// Offending address.
        address: String,
        /// Required prefix width.
        required: usize,
    },

    /// Reading an input or writing an output file failed.
    #[error("i/o error on '{}': {source}", .path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// JSON parameters or report could not be (de)serialized.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Attaches a 1-based trace reference number to an address error.
    pub(crate) fn at_reference(self, line: usize) -> Self {
        Self::Reference {
            line,
            source: Box::new(self),
        }
    }
}
