//! # Configuration Management
//!
//! Wire constants and runtime limits for the codec.
//!
//! The constants pin the bit widths the protocol uses for its variable-length
//! fields. [`CodecConfig`] carries the limits a client applies to untrusted
//! input (frame size, unterminated strings) plus logging settings.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Direct instantiation with defaults
//! - Environment overrides via `from_env()`
//!
//! [`LimitsConfig`] feeds the codec directly: `frame_codec()` builds the
//! packet framer and `ProtoRead::read_ascii_string_limited` applies
//! `max_ascii_length`.

use crate::core::codec::VarintFrameCodec;
use crate::error::{CodecError, Result};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::Path;
use std::str::FromStr;
use tracing::{warn, Level};

/// Bit width of a protocol "VarInt"
pub const VARINT_BITS: u32 = 32;

/// Bit width of a protocol "VarShort"
pub const VARSHORT_BITS: u32 = 16;

/// Bit width of a protocol "VarLong"
pub const VARLONG_BITS: u32 = 64;

/// Default bit width of a byte-block length prefix
pub const DEFAULT_BYTES_LENGTH_BITS: u32 = 32;

/// Bit width of a UTF-8 string length prefix
pub const UTF8_LENGTH_BITS: u32 = VARSHORT_BITS;

/// Widest varint the codec accepts
pub const MAX_VARINT_BITS: u32 = 128;

/// Default bit width of a packet frame length prefix
pub const DEFAULT_FRAME_LENGTH_BITS: u32 = VARINT_BITS;

/// Max allowed frame size (2 MiB - 1, the largest 3-byte varint)
pub const MAX_FRAME_SIZE: usize = (1 << 21) - 1;

/// Default cap on null-terminated strings read from a peer
pub const MAX_ASCII_LENGTH: usize = 32767;

/// Prefix of the environment variables read by [`CodecConfig::from_env`]
pub const ENV_PREFIX: &str = "MCPROTO_WIRE_";

/// Top-level codec configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CodecConfig {
    /// Limits applied to incoming data
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CodecConfig {
    /// Read and parse a TOML file. The result is not validated.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| CodecError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml(&text)
    }

    /// Parse TOML text; missing sections take their defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CodecError::Config(format!("invalid TOML: {e}")))
    }

    /// Defaults overlaid with any `MCPROTO_WIRE_*` variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self::default().with_env_overrides())
    }

    /// Overlay `MCPROTO_WIRE_*` variables onto `self`. A value that does not
    /// parse is logged and leaves the field untouched.
    pub fn with_env_overrides(mut self) -> Self {
        env_override("FRAME_LENGTH_BITS", &mut self.limits.frame_length_bits);
        env_override("MAX_FRAME_SIZE", &mut self.limits.max_frame_size);
        env_override("MAX_ASCII_LENGTH", &mut self.limits.max_ascii_length);
        env_override("LOG_LEVEL", &mut self.logging.log_level);
        self
    }

    /// Render as TOML, in the layout `from_toml` reads back.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CodecError::Config(format!("cannot render config: {e}")))
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_toml()?)
            .map_err(|e| CodecError::Config(format!("{}: {e}", path.display())))
    }

    /// Every problem found, limits first. Empty when the config is usable.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = self.limits.validate();
        errors.append(&mut self.logging.validate());
        errors
    }

    /// Return `self` if it validates, else one `Config` error listing every problem.
    pub fn validated(self) -> Result<Self> {
        match self.validate().as_slice() {
            [] => Ok(self),
            errors => Err(CodecError::Config(format!(
                "{} invalid setting(s): {}",
                errors.len(),
                errors.join("; ")
            ))),
        }
    }
}

fn env_override<T: FromStr>(suffix: &str, slot: &mut T) {
    let name = format!("{ENV_PREFIX}{suffix}");
    let Ok(raw) = std::env::var(&name) else {
        return;
    };
    match raw.parse() {
        Ok(value) => *slot = value,
        Err(_) => warn!(variable = %name, value = %raw, "ignoring unparseable override"),
    }
}

/// Limits applied to data received from a peer
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LimitsConfig {
    /// Bit width of the packet frame length prefix
    pub frame_length_bits: u32,

    /// Maximum accepted frame payload in bytes
    pub max_frame_size: usize,

    /// Maximum length of a null-terminated string
    pub max_ascii_length: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            frame_length_bits: DEFAULT_FRAME_LENGTH_BITS,
            max_frame_size: MAX_FRAME_SIZE,
            max_ascii_length: MAX_ASCII_LENGTH,
        }
    }
}

impl LimitsConfig {
    /// Frame codec honoring these limits
    pub fn frame_codec(&self) -> Result<VarintFrameCodec> {
        VarintFrameCodec::new(self.frame_length_bits, self.max_frame_size)
    }

    /// Validate limits configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.frame_length_bits == 0 || self.frame_length_bits > 64 {
            errors.push(format!(
                "Invalid frame length bits: {} (valid range: 1-64)",
                self.frame_length_bits
            ));
        } else if self.frame_length_bits < 64 {
            let representable = (1u128 << self.frame_length_bits) - 1;
            if (self.max_frame_size as u128) > representable {
                errors.push(format!(
                    "Max frame size {} cannot be expressed in a {}-bit length prefix",
                    self.max_frame_size, self.frame_length_bits
                ));
            }
        }

        if self.max_frame_size == 0 {
            errors.push("Max frame size cannot be 0".to_string());
        } else if self.max_frame_size > 64 * 1024 * 1024 {
            errors.push(format!(
                "Max frame size too large: {} bytes (maximum recommended: 64 MB)",
                self.max_frame_size
            ));
        }

        if self.max_ascii_length == 0 {
            errors.push("Max ASCII string length cannot be 0".to_string());
        }

        errors
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LoggingConfig {
    /// Application name for logs
    pub app_name: String,

    /// Log level
    #[serde(serialize_with = "level_to_str", deserialize_with = "level_from_str")]
    pub log_level: Level,

    /// Whether to use JSON formatting for logs
    pub json_format: bool,

    /// Whether to emit ANSI colors
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("mcproto-wire"),
            log_level: Level::INFO,
            json_format: false,
            ansi: true,
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.app_name.is_empty() {
            errors.push("Application name cannot be empty".to_string());
        } else if self.app_name.len() > 64 {
            errors.push(format!(
                "Application name too long: {} characters (maximum: 64)",
                self.app_name.len()
            ));
        }

        if self.json_format && self.ansi {
            errors.push("ANSI colors cannot be combined with JSON log format".to_string());
        }

        errors
    }
}

// Levels are stored lowercase ("info"); parsing accepts any case
fn level_to_str<S: Serializer>(
    level: &Level,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&level.to_string().to_ascii_lowercase())
}

fn level_from_str<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Level, D::Error> {
    let raw = std::borrow::Cow::<'de, str>::deserialize(deserializer)?;
    raw.parse()
        .map_err(|_| D::Error::custom(format!("unknown log level `{raw}`")))
}
