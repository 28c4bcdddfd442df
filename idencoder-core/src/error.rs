/// Error types for building an encoder and decoding ids
use thiserror::Error;

/// Rejected encoder configuration. Raised once, at construction time.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error("checksum modulus must be greater than zero")]
    ZeroModulus,

    #[error("checksum modulus {modulus} exceeds alphabet length {alphabet_len}")]
    ModulusExceedsAlphabet { modulus: u64, alphabet_len: usize },

    #[error("alphabet needs at least 2 characters, got {len}")]
    AlphabetTooShort { len: usize },

    #[error("alphabet has at most 128 characters, got {len}")]
    AlphabetTooLong { len: usize },

    #[error("duplicate character '{character}' at indexes {first} and {second}")]
    DuplicateCharacter { character: char, first: usize, second: usize },

    #[error("non-ascii character {character:#04x} at index {index}")]
    NonAsciiCharacter { character: u8, index: usize },

    #[error("block size {block_size} is too large, maximum is {max}")]
    BlockSizeTooLarge { block_size: u32, max: u32 },
}

/// Malformed or rejected id passed to a decoder.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum DecodeError {
    #[error("input too short: expected at least {min} character(s), got {len}")]
    InputTooShort { len: usize, min: usize },

    #[error("invalid character '{character}' at index {index}")]
    InvalidCharacter { character: char, index: usize },

    #[error("non-ascii character {character:#04x} at index {index}")]
    NonAsciiCharacter { character: u8, index: usize },

    #[error("encoded value does not fit in 64 bits")]
    Overflow,

    #[error("checksum mismatch: expected '{expected}', found '{found}' (decoded {value})")]
    ChecksumMismatch { expected: char, found: char, value: u64 },
}

impl DecodeError {
    /// Shift the reported character index by `offset`
    pub(crate) fn offset(self, offset: usize) -> Self {
        match self {
            Self::InvalidCharacter { character, index } => Self::InvalidCharacter {
                character,
                index: index + offset,
            },
            Self::NonAsciiCharacter { character, index } => Self::NonAsciiCharacter {
                character,
                index: index + offset,
            },
            other => other,
        }
    }
}
