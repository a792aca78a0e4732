//! Constants used throughout the hexgroup crate.

/// Smallest accepted group size.
pub const MIN_GROUP_SIZE: u8 = 1;

/// Largest accepted group size. The separator for this size is `2^128`.
pub const MAX_GROUP_SIZE: u8 = 32;

/// Group size used when nothing is configured.
pub const DEFAULT_GROUP_SIZE: u8 = 4;

/// Environment variable read by the CLI for the group size.
pub const GROUP_SIZE_ENV_VAR: &str = "HEXGROUP_GROUP_SIZE";

/// Number of hex digits in a UUID in simple form.
pub const UUID_HEX_LEN: usize = 32;
