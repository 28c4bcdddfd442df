/// Ordered symbol table with a reverse lookup, shared by the base converter and checksum
use crate::error::{ConfigError, DecodeError};

/// Upper bound on alphabet length (distinct ASCII symbols)
pub const MAX_ALPHABET_LEN: usize = 128;

/// A validated alphabet: 2..=128 distinct ASCII symbols.
///
/// A symbol's position is its digit value, so reordering the alphabet changes
/// every encoded id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    encode: Vec<u8>,
    decode: [Option<u8>; MAX_ALPHABET_LEN],
}

impl Alphabet {
    pub fn new(characters: &str) -> Result<Self, ConfigError> {
        let characters = characters.as_bytes();

        if characters.len() < 2 {
            return Err(ConfigError::AlphabetTooShort { len: characters.len() });
        }

        let mut decode: [Option<u8>; MAX_ALPHABET_LEN] = [None; MAX_ALPHABET_LEN];

        for (index, &character) in characters.iter().enumerate() {
            if !character.is_ascii() {
                return Err(ConfigError::NonAsciiCharacter { character, index });
            }
            if let Some(first) = decode[character as usize] {
                return Err(ConfigError::DuplicateCharacter {
                    character: character as char,
                    first: first as usize,
                    second: index,
                });
            }
            // digit values must fit in a u8
            let digit = u8::try_from(index)
                .map_err(|_| ConfigError::AlphabetTooLong { len: characters.len() })?;
            decode[character as usize] = Some(digit);
        }

        Ok(Self {
            encode: characters.to_vec(),
            decode,
        })
    }

    /// Symbol for digit `value`. Panics if `value >= len()`.
    pub fn symbol(&self, value: usize) -> u8 {
        self.encode[value]
    }

    /// Digit value of `character`; `index` is only used for error reporting
    pub fn digit(&self, character: u8, index: usize) -> Result<u8, DecodeError> {
        if !character.is_ascii() {
            return Err(DecodeError::NonAsciiCharacter { character, index });
        }
        self.decode[character as usize].ok_or(DecodeError::InvalidCharacter {
            character: character as char,
            index,
        })
    }

    /// The "zero" symbol, used for left padding
    pub fn zero(&self) -> u8 {
        self.encode[0]
    }

    pub fn len(&self) -> usize {
        self.encode.len()
    }

    /// Always false for a validated alphabet
    pub fn is_empty(&self) -> bool {
        self.encode.is_empty()
    }

    /// Radix used by the base converter
    pub fn radix(&self) -> u64 {
        self.encode.len() as u64
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.encode
    }

    pub fn as_str(&self) -> &str {
        // ascii was checked in new()
        std::str::from_utf8(&self.encode).unwrap_or_default()
    }
}
