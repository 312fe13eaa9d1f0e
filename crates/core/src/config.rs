//! Cache parameter configuration.
//!
//! This module defines the parameters that describe the simulated cache. It provides:
//! 1. **Keys:** The canonical parameter names as they appear in parameter files.
//! 2. **Parameters:** [`CacheParams`], the four user-supplied values (deserializable from JSON).
//! 3. **Geometry:** [`CacheGeometry`], the validated bit layout derived from the parameters.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::common::{Error, Result, exact_log2};

/// Canonical parameter keys, in file order.
pub const PARAM_KEYS: [&str; 4] = [ADDRESS_BITS, BLOCK_SIZE, CACHE_SETS, ASSOCIATIVITY];

/// Width of every trace address in bits.
pub const ADDRESS_BITS: &str = "Address_bits";
/// Block (line) size; `log2` of it gives the offset width.
pub const BLOCK_SIZE: &str = "Block_size";
/// Number of cache sets; `log2` of it gives the index width.
pub const CACHE_SETS: &str = "Cache_sets";
/// Number of ways per set.
pub const ASSOCIATIVITY: &str = "Associativity";

/// Largest accepted `Cache_sets`; per-set state is allocated up front.
pub const MAX_CACHE_SETS: u64 = 1 << 20;

/// User-supplied cache parameters.
///
/// # Examples
///
/// ```
/// use idxsim_core::config::CacheParams;
///
/// let json = r#"{
///     "Address_bits": 8,
///     "Block_size": 4,
///     "Cache_sets": 4,
///     "Associativity": 2
/// }"#;
///
/// let params: CacheParams = serde_json::from_str(json).unwrap();
/// let geometry = params.validate().unwrap();
/// assert_eq!(geometry.offset_bits, 2);
/// assert_eq!(geometry.index_bits, 2);
/// assert_eq!(geometry.indexable_bits, 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CacheParams {
    /// Address width in bits.
    #[serde(rename = "Address_bits")]
    pub address_bits: u64,
    /// Block size; must be a power of two.
    #[serde(rename = "Block_size")]
    pub block_size: u64,
    /// Number of sets; must be a power of two.
    #[serde(rename = "Cache_sets")]
    pub cache_sets: u64,
    /// Ways per set; must be at least 1.
    #[serde(rename = "Associativity")]
    pub associativity: u64,
}

/// Bit layout of an address for a validated [`CacheParams`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheGeometry {
    /// Address width in bits.
    pub address_bits: usize,
    /// Low-order block offset bits, never indexable.
    pub offset_bits: usize,
    /// Number of index bits (`k`).
    pub index_bits: usize,
    /// Width of the indexable prefix (also the tag width).
    pub indexable_bits: usize,
    /// Number of sets (`2^k`).
    pub sets: usize,
    /// Ways per set.
    pub associativity: usize,
}

impl CacheParams {
    /// Checks the parameters and derives the address bit layout.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidParam`] - `Address_bits` is zero or too large for this host.
    /// * [`Error::InvalidParam`] - `Cache_sets` exceeds [`MAX_CACHE_SETS`].
    /// * [`Error::NotPowerOfTwo`] - `Block_size` or `Cache_sets` is not a power of two.
    /// * [`Error::ZeroAssociativity`] - `Associativity` is zero.
    /// * [`Error::OffsetTooWide`] - the block offset is wider than the address.
    /// * [`Error::TooManyIndexBits`] - `log2(Cache_sets)` exceeds the indexable prefix.
    pub fn validate(&self) -> Result<CacheGeometry> {
        let address_bits = to_usize(ADDRESS_BITS, self.address_bits)?;
        if address_bits == 0 {
            return Err(Error::InvalidParam {
                key: ADDRESS_BITS.to_owned(),
                value: self.address_bits.to_string(),
            });
        }
        let offset_bits = exact_log2(self.block_size).ok_or(Error::NotPowerOfTwo {
            key: BLOCK_SIZE,
            value: self.block_size,
        })?;
        let index_bits = exact_log2(self.cache_sets).ok_or(Error::NotPowerOfTwo {
            key: CACHE_SETS,
            value: self.cache_sets,
        })?;
        if self.cache_sets > MAX_CACHE_SETS {
            return Err(Error::InvalidParam {
                key: CACHE_SETS.to_owned(),
                value: self.cache_sets.to_string(),
            });
        }
        if self.associativity == 0 {
            return Err(Error::ZeroAssociativity);
        }
        let associativity = to_usize(ASSOCIATIVITY, self.associativity)?;
        let sets = to_usize(CACHE_SETS, self.cache_sets)?;

        let indexable_bits =
            address_bits
                .checked_sub(offset_bits)
                .ok_or(Error::OffsetTooWide {
                    offset_bits,
                    address_bits,
                })?;
        if index_bits > indexable_bits {
            return Err(Error::TooManyIndexBits {
                index_bits,
                indexable_bits,
            });
        }

        let geometry = CacheGeometry {
            address_bits,
            offset_bits,
            index_bits,
            indexable_bits,
            sets,
            associativity,
        };
        debug!(?geometry, "validated cache parameters");
        Ok(geometry)
    }
}

fn to_usize(key: &str, value: u64) -> Result<usize> {
    usize::try_from(value).map_err(|_| Error::InvalidParam {
        key: key.to_owned(),
        value: value.to_string(),
    })
}
