/// Encoder/decoder facade tying scrambler, base conversion and checksum together
use crate::alphabet::Alphabet;
use crate::codec::{checksum, debase, enbase};
use crate::error::{ConfigError, DecodeError};
use crate::scramble::Scrambler;

/// Result of [`IdEncoder::decode`].
///
/// `value` is filled in even when the checksum does not match, for diagnostics.
/// Only trust it when `checksum_ok` is true.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Decoded {
    pub value: u64,
    pub checksum_ok: bool,
}

/// Validated, immutable encoder configuration.
///
/// Holds no mutable state, so one instance can be shared between threads freely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdEncoder {
    alphabet: Alphabet,
    scrambler: Scrambler,
    modulus: u64,
}

impl IdEncoder {
    pub fn new(alphabet: &str, block_size: u32, modulus: u64) -> Result<Self, ConfigError> {
        let alphabet = Alphabet::new(alphabet)?;

        if modulus == 0 {
            return Err(ConfigError::ZeroModulus);
        }
        if modulus > alphabet.radix() {
            return Err(ConfigError::ModulusExceedsAlphabet {
                modulus,
                alphabet_len: alphabet.len(),
            });
        }

        let scrambler = Scrambler::new(block_size)?;

        tracing::debug!(
            alphabet_len = alphabet.len(),
            block_size,
            modulus,
            "built id encoder"
        );

        Ok(Self {
            alphabet,
            scrambler,
            modulus,
        })
    }

    /// Encode `n` as `checksum symbol ++ body`, the body left padded to `min_length`
    pub fn encode(&self, n: u64, min_length: usize) -> String {
        let check = checksum(&self.alphabet, self.modulus, n);
        let body = enbase(&self.alphabet, self.scrambler.scramble(n), min_length);

        let mut encoded = String::with_capacity(body.len() + 1);
        encoded.push(char::from(check));
        encoded.push_str(&body);
        encoded
    }

    /// Decode an id produced by [`IdEncoder::encode`].
    ///
    /// Malformed input (empty, foreign symbols, too large) is an `Err`.
    /// A well-formed id whose checksum symbol does not match is `Ok` with
    /// `checksum_ok == false`.
    pub fn decode(&self, s: &str) -> Result<Decoded, DecodeError> {
        let (&head, tail) = s
            .as_bytes()
            .split_first()
            .ok_or(DecodeError::InputTooShort { len: 0, min: 1 })?;

        self.alphabet.digit(head, 0)?;

        let scrambled = debase(&self.alphabet, tail).map_err(|e| e.offset(1))?;
        let value = self.scrambler.scramble(scrambled);

        let expected = checksum(&self.alphabet, self.modulus, value);
        let checksum_ok = expected == head;
        if !checksum_ok {
            tracing::debug!(
                expected = %char::from(expected),
                found = %char::from(head),
                value,
                "checksum mismatch"
            );
        }

        Ok(Decoded { value, checksum_ok })
    }

    /// Like [`IdEncoder::decode`], but a checksum mismatch is an error too
    pub fn decode_verified(&self, s: &str) -> Result<u64, DecodeError> {
        let decoded = self.decode(s)?;
        if decoded.checksum_ok {
            return Ok(decoded.value);
        }

        // decode() succeeded, so there is a head symbol
        let found = s.chars().next().unwrap_or_default();
        Err(DecodeError::ChecksumMismatch {
            expected: char::from(checksum(&self.alphabet, self.modulus, decoded.value)),
            found,
            value: decoded.value,
        })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn block_size(&self) -> u32 {
        self.scrambler.block_size()
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }
}
