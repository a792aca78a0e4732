//! Codec configuration.
//!
//! The group size is resolved once at process startup and then used to build a
//! [`HexGroupCodec`]. Nothing in this crate reads environment variables itself; callers pass the
//! raw value in, which keeps the codec deterministic in tests and multi-threaded hosts.

use crate::constants::{DEFAULT_GROUP_SIZE, MAX_GROUP_SIZE, MIN_GROUP_SIZE};
use crate::{CodecError, CodecResult, HexGroupCodec};

/// Codec configuration resolved at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCodecConfig"))]
pub struct CodecConfig {
    group_size: u8,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            group_size: DEFAULT_GROUP_SIZE,
        }
    }
}

impl CodecConfig {
    /// Create a new `CodecConfig`.
    pub fn new(group_size: u8) -> CodecResult<Self> {
        validate_group_size(group_size)?;
        Ok(Self { group_size })
    }

    pub fn group_size(&self) -> u8 {
        self.group_size
    }

    /// Builds a codec for this configuration.
    pub fn build_codec(&self) -> CodecResult<HexGroupCodec> {
        HexGroupCodec::new(self.group_size)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCodecConfig {
    #[serde(default = "default_group_size")]
    group_size: u8,
}

#[cfg(feature = "serde")]
fn default_group_size() -> u8 {
    DEFAULT_GROUP_SIZE
}

#[cfg(feature = "serde")]
impl TryFrom<RawCodecConfig> for CodecConfig {
    type Error = CodecError;

    fn try_from(raw: RawCodecConfig) -> Result<Self, Self::Error> {
        Self::new(raw.group_size)
    }
}

pub(crate) fn validate_group_size(group_size: u8) -> CodecResult<()> {
    if (MIN_GROUP_SIZE..=MAX_GROUP_SIZE).contains(&group_size) {
        return Ok(());
    }
    Err(CodecError::InvalidConfiguration(format!(
        "group size must be between {} and {}, got: {}",
        MIN_GROUP_SIZE, MAX_GROUP_SIZE, group_size
    )))
}

/// Parse the group size from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_GROUP_SIZE`].
///
/// # Errors
///
/// Returns [`CodecError::InvalidConfiguration`] if the value is not an integer or is out of
/// range.
pub fn group_size_from_env_value(value: Option<String>) -> CodecResult<u8> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let Some(value) = value else {
        return Ok(DEFAULT_GROUP_SIZE);
    };

    let group_size = value.parse::<u8>().map_err(|e| {
        CodecError::InvalidConfiguration(format!(
            "group size must be an integer, got: '{}' ({})",
            value, e
        ))
    })?;
    validate_group_size(group_size)?;

    Ok(group_size)
}
