//! Binary address and tag types.
//!
//! Trace addresses are fixed-width strings of `0`/`1` digits. This module provides:
//! 1. **Validation:** An [`Address`] can only be built from a token of the configured width
//!    made of binary digits.
//! 2. **Bit access:** Positions are counted from the left, so position 0 is the most
//!    significant bit.
//! 3. **Tags:** The indexable prefix of an address, as stored in cache sets.

use std::fmt;

use serde::Serialize;

use super::error::{Error, Result};

/// A fixed-width binary address as it appears in a trace.
///
/// The digits are kept as text because every consumer (statistics, tags, the report)
/// works on the textual form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Address(String);

/// The indexable prefix of an [`Address`].
///
/// Two references hit the same cache line exactly when their tags are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tag(Box<str>);

impl Address {
    /// Parses a trace token into an address of width `bits`.
    ///
    /// # Arguments
    ///
    /// * `token` - The raw token.
    /// * `bits` - The configured `Address_bits`.
    ///
    /// # Errors
    ///
    /// [`Error::AddressWidth`] if the length differs from `bits`, and
    /// [`Error::AddressDigit`] on the first character that is not `0` or `1`.
    pub fn parse(token: &str, bits: usize) -> Result<Self> {
        let actual = token.chars().count();
        if actual != bits {
            return Err(Error::AddressWidth {
                address: token.to_owned(),
                expected: bits,
                actual,
            });
        }
        if let Some((position, digit)) = token
            .chars()
            .enumerate()
            .find(|&(_, c)| c != '0' && c != '1')
        {
            return Err(Error::AddressDigit {
                address: token.to_owned(),
                digit,
                position,
            });
        }
        Ok(Self(token.to_owned()))
    }

    /// Number of bits in the address.
    #[inline]
    pub fn width(&self) -> usize {
        self.0.len()
    }

    /// Returns the bit at `position` (0 = most significant).
    ///
    /// # Panics
    ///
    /// Panics if `position >= self.width()`.
    #[inline]
    pub fn bit(&self, position: usize) -> bool {
        self.0.as_bytes()[position] == b'1'
    }

    /// Returns the raw digits.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extracts the leading `len` bits as a cache tag.
    ///
    /// Returns `None` when the address is narrower than `len`.
    pub fn tag(&self, len: usize) -> Option<Tag> {
        self.0.get(..len).map(|prefix| Tag(prefix.into()))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Tag {
    /// Returns the raw digits of the tag.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Tag {
    fn from(digits: &str) -> Self {
        Self(digits.into())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
