//! Hex string <-> integer group conversion.
//!
//! This module holds [`HexGroupCodec`], the only stateful type in the crate. Its state is the
//! configured group size and the separator derived from it; both are fixed at construction.

use crate::config::validate_group_size;
use crate::constants::{DEFAULT_GROUP_SIZE, UUID_HEX_LEN};
use crate::{CodecError, CodecResult};
use num_bigint::BigUint;

/// Re-exported for convenience.
pub use ::uuid::Uuid;

/// Converts hex strings into a flat sequence of integer groups and back.
///
/// Each hex string is split into groups of `group_size` digits, least-significant group first.
/// Consecutive strings are separated by [`HexGroupCodec::separator`], which is one larger than
/// the biggest value a full group can hold, so it cannot be confused with data.
///
/// # Construction
/// - [`HexGroupCodec::new`] validates the group size (1 to 32 inclusive).
/// - [`HexGroupCodec::default`] uses [`DEFAULT_GROUP_SIZE`].
///
/// # Errors
/// Only construction can fail. [`HexGroupCodec::encode`] and [`HexGroupCodec::decode`] are
/// total: non-hex characters are dropped on encode, and decode does not check that its input
/// came from a codec with the same group size.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HexGroupCodec {
    group_size: u8,
    separator: BigUint,
}

impl Default for HexGroupCodec {
    fn default() -> Self {
        Self::with_checked_group_size(DEFAULT_GROUP_SIZE)
    }
}

impl HexGroupCodec {
    /// Creates a codec packing `group_size` hex digits into each integer.
    ///
    /// Larger group sizes give fewer integers (shorter tokens) for long inputs; smaller ones
    /// suit short inputs.
    ///
    /// # Arguments
    ///
    /// * `group_size` - Hex digits per group, from 1 to 32 inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidConfiguration`] if `group_size` is out of range.
    pub fn new(group_size: u8) -> CodecResult<Self> {
        validate_group_size(group_size)?;
        Ok(Self::with_checked_group_size(group_size))
    }

    fn with_checked_group_size(group_size: u8) -> Self {
        let separator = BigUint::from(1u8) << (4 * usize::from(group_size));
        tracing::debug!(
            "hex group codec: group size {}, separator {}",
            group_size,
            separator
        );
        Self {
            group_size,
            separator,
        }
    }

    pub fn group_size(&self) -> u8 {
        self.group_size
    }

    /// Returns the sentinel placed between encoded strings, `2^(4 * group_size)`.
    pub fn separator(&self) -> &BigUint {
        &self.separator
    }

    /// Encodes hex strings into a flat integer sequence.
    ///
    /// For every string, in order, the output contains its digit groups from least to most
    /// significant followed by the separator. The separator after the last string is omitted.
    /// A string with no hex digits contributes only its separator.
    ///
    /// # Arguments
    ///
    /// * `hex_strings` - Strings to encode. Any characters outside `0-9a-fA-F` are ignored.
    ///
    /// # Returns
    ///
    /// The integer sequence; empty when `hex_strings` is empty.
    pub fn encode<I, S>(&self, hex_strings: I) -> Vec<BigUint>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut integers = Vec::new();
        let mut count = 0usize;

        for hex_string in hex_strings {
            integers.extend(self.digit_groups(hex_string.as_ref()));
            integers.push(self.separator.clone());
            count += 1;
        }

        // Drop the separator after the last string
        integers.pop();

        tracing::debug!("encoded {} hex strings into {} integers", count, integers.len());
        integers
    }

    /// Encodes UUIDs as 32-digit hex strings.
    pub fn encode_uuids(&self, uuids: &[Uuid]) -> Vec<BigUint> {
        self.encode(uuids.iter().map(|uuid| uuid.simple().to_string()))
    }

    /// Decodes an integer sequence produced by [`HexGroupCodec::encode`].
    ///
    /// Output strings are lowercase and contain only hex digits. The most significant group of
    /// each string is written without zero padding, so a leading zero in a short top group is
    /// lost (`0abc` with group size 2 decodes as `abc`).
    ///
    /// Input from a codec with a different group size is not detected and produces
    /// well-formed but wrong strings.
    pub fn decode(&self, integers: &[BigUint]) -> Vec<String> {
        let group_size = usize::from(self.group_size);
        let mut hex_strings = Vec::new();
        let mut current = String::new();
        let mut width = ChunkWidth::MostSignificant;

        for integer in integers.iter().rev() {
            if *integer == self.separator {
                tracing::trace!("separator after {} decoded strings", hex_strings.len());
                hex_strings.push(std::mem::take(&mut current));
                width = ChunkWidth::MostSignificant;
                continue;
            }

            current.push_str(&width.format(integer, group_size));
            width = ChunkWidth::Padded;
        }

        // The first string has no separator before it. It is pending if it produced chunks, or
        // if it was empty and its trailing separator opens the sequence.
        if width == ChunkWidth::Padded || integers.first() == Some(&self.separator) {
            hex_strings.push(current);
        }

        hex_strings.reverse();
        tracing::debug!(
            "decoded {} integers into {} hex strings",
            integers.len(),
            hex_strings.len()
        );
        hex_strings
    }

    /// Decodes an integer sequence back into UUIDs.
    ///
    /// Each decoded string is left-padded with zeros to 32 digits before parsing, which
    /// restores leading zeros dropped from the most significant group.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidUuid`] if a decoded string is empty or longer than 32 digits.
    pub fn decode_uuids(&self, integers: &[BigUint]) -> CodecResult<Vec<Uuid>> {
        self.decode(integers)
            .into_iter()
            .map(|hex| {
                if hex.is_empty() || hex.len() > UUID_HEX_LEN {
                    return Err(CodecError::InvalidUuid(format!(
                        "expected 1 to {} hex digits, got: '{}'",
                        UUID_HEX_LEN, hex
                    )));
                }
                let padded = format!("{:0>width$}", hex, width = UUID_HEX_LEN);
                Uuid::parse_str(&padded)
                    .map_err(|e| CodecError::InvalidUuid(format!("'{}': {}", hex, e)))
            })
            .collect()
    }

    /// Splits the hex digits of `hex_string` into group values, least significant first.
    fn digit_groups(&self, hex_string: &str) -> Vec<BigUint> {
        let nibbles: Vec<u8> = hex_string
            .chars()
            .filter_map(|c| c.to_digit(16))
            .map(|d| d as u8)
            .collect();

        // A group holds at most 32 digits, which fits in a u128
        nibbles
            .rchunks(usize::from(self.group_size))
            .map(|group| {
                let value = group
                    .iter()
                    .fold(0u128, |acc, &nibble| (acc << 4) | u128::from(nibble));
                BigUint::from(value)
            })
            .collect()
    }
}

/// Removes every character that is not a hex digit and lowercases the rest.
///
/// This is the cleaning step [`HexGroupCodec::encode`] applies, so the result is what a
/// round trip returns for inputs without a leading-zero loss.
pub fn clean_hex(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_hexdigit)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// How the next decoded chunk of the current string is formatted.
///
/// Decoding walks the sequence backwards, so the first chunk seen for a string is its most
/// significant group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ChunkWidth {
    /// Natural width, no zero padding
    MostSignificant,
    /// Zero-padded to exactly the group size
    Padded,
}

impl ChunkWidth {
    fn format(self, value: &BigUint, group_size: usize) -> String {
        let digits = value.to_str_radix(16);
        match self {
            Self::MostSignificant => digits,
            Self::Padded => format!("{:0>width$}", digits, width = group_size),
        }
    }
}
