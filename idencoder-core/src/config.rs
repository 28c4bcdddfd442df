/// Encoder configuration and the reference defaults
use crate::encoder::IdEncoder;
use crate::error::ConfigError;

/// Reference alphabet: 31 shuffled lower-case letters and digits, with look-alike
/// characters removed.
///
/// Do not rely on this in production. It may change at any time, which would
/// break every id already handed out. Generate and keep your own alphabet.
pub const DEFAULT_ALPHABET: &str = "3fq4rv5z7hsdamn8bpygw96j2cetxuk";

/// Reference number of low bits that get scrambled
pub const DEFAULT_BLOCK_SIZE: u32 = 24;

/// Reference checksum modulus
pub const DEFAULT_MODULUS: u64 = 29;

/// Reference minimum length of the encoded body (checksum symbol not included)
pub const DEFAULT_MIN_LENGTH: usize = 5;

/// Unvalidated encoder settings, turned into an [`IdEncoder`] with [`Config::build`].
///
/// Encoding and decoding must use the same config for ids to round-trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub alphabet: String,
    pub block_size: u32,
    pub modulus: u64,
}

impl Config {
    pub fn new(alphabet: impl Into<String>, block_size: u32, modulus: u64) -> Self {
        Self {
            alphabet: alphabet.into(),
            block_size,
            modulus,
        }
    }

    pub fn build(&self) -> Result<IdEncoder, ConfigError> {
        IdEncoder::new(&self.alphabet, self.block_size, self.modulus)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHABET, DEFAULT_BLOCK_SIZE, DEFAULT_MODULUS)
    }
}
