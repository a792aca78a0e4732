//! Hex string to integer-group codec.
//!
//! Public identifiers are produced by an outer alphabet encoder that only understands sequences
//! of non-negative integers. This crate is the layer underneath it: it turns one or more
//! hexadecimal strings (typically UUIDs) into a flat integer sequence and back again.
//!
//! ## Grouping
//! Each string is cleaned of non-hex characters and split into groups of `group_size` digits,
//! counting from the rightmost digit. Groups are emitted least-significant first. The most
//! significant group may be shorter than `group_size`.
//!
//! Example with `group_size = 4`:
//! `1a2b3c4d5e` becomes `[0x4d5e, 0x2b3c, 0x1a]`.
//!
//! ## Separator
//! Strings are separated by the sentinel `2^(4 * group_size)`, one more than the largest value a
//! full group can hold. The last separator of a sequence is dropped. Because a group size of 32
//! puts the sentinel at `2^128`, values are [`BigUint`]s.
//!
//! ## Leading zeros
//! The most significant group is decoded without zero padding, so a string such as `0abc`
//! (group size 2) comes back as `abc`. Callers that need fixed-width output (for example
//! [`HexGroupCodec::decode_uuids`]) must restore the width themselves.

mod codec;
mod config;
pub mod constants;

// Re-export public types
pub use codec::{clean_hex, HexGroupCodec, Uuid};
pub use config::{group_size_from_env_value, CodecConfig};
pub use num_bigint::BigUint;

/// Error type for codec operations.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Group size missing, not an integer, or out of range
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// Decoded string is not a UUID
    #[error("invalid UUID: {0}")]
    InvalidUuid(String),
}

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
