/// Handles the base conversion with left padding and the checksum symbol
use crate::alphabet::Alphabet;
use crate::error::DecodeError;

/// Pick the checksum symbol for a logical (unscrambled) value: `alphabet[n % modulus]`
///
/// `modulus` must be in `1..=alphabet.len()`, which `IdEncoder` guarantees.
pub fn checksum(alphabet: &Alphabet, modulus: u64, n: u64) -> u8 {
    alphabet.symbol((n % modulus) as usize)
}

/// Convert `x` to the alphabet's radix, most significant digit first.
///
/// `0` has no digits. The result is left padded with the zero symbol up to
/// `min_length`, a longer representation is never truncated.
pub fn enbase(alphabet: &Alphabet, mut x: u64, min_length: usize) -> String {
    let radix = alphabet.radix();

    // Collected least significant first, reversed at the end
    let mut digits = Vec::with_capacity(min_length.max(13));
    while x > 0 {
        digits.push(alphabet.symbol((x % radix) as usize));
        x /= radix;
    }

    if digits.len() < min_length {
        digits.resize(min_length, alphabet.zero());
    }

    digits.reverse();
    // Alphabet symbols are ascii
    digits.into_iter().map(char::from).collect()
}

/// Parse symbols in the alphabet's radix back into a number.
///
/// Leading zero symbols contribute nothing, so padding does not change the value.
/// An empty input is 0.
pub fn debase(alphabet: &Alphabet, symbols: impl AsRef<[u8]>) -> Result<u64, DecodeError> {
    let radix = alphabet.radix();

    symbols
        .as_ref()
        .iter()
        .enumerate()
        .try_fold(0u64, |result, (index, &character)| {
            let digit = alphabet.digit(character, index)?;
            result
                .checked_mul(radix)
                .and_then(|r| r.checked_add(digit as u64))
                .ok_or(DecodeError::Overflow)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimal() -> Alphabet {
        Alphabet::new("0123456789").unwrap()
    }

    fn default_alphabet() -> Alphabet {
        Alphabet::new(crate::DEFAULT_ALPHABET).unwrap()
    }

    #[test]
    fn test_enbase_decimal() {
        let a = decimal();
        assert_eq!(enbase(&a, 0, 0), "");
        assert_eq!(enbase(&a, 7, 0), "7");
        assert_eq!(enbase(&a, 1234, 0), "1234");
        assert_eq!(enbase(&a, u64::MAX, 0), u64::MAX.to_string());
    }

    #[test]
    fn test_enbase_padding() {
        let a = decimal();
        assert_eq!(enbase(&a, 0, 3), "000");
        assert_eq!(enbase(&a, 42, 5), "00042");
        // already long enough, nothing added or removed
        assert_eq!(enbase(&a, 123456, 3), "123456");
    }

    #[test]
    fn test_enbase_binary() {
        let a = Alphabet::new("ab").unwrap();
        assert_eq!(enbase(&a, 6, 0), "bba");
        assert_eq!(enbase(&a, 6, 5), "aabba");
    }

    #[test]
    fn test_enbase_default_alphabet() {
        let a = default_alphabet();
        // 8388608 == 1 << 23 == 9 * 31^4 + 2 * 31^3 + 18 * 31^2 + 1 * 31 + 8
        assert_eq!(enbase(&a, 8388608, 5), "hqyf7");
        assert_eq!(enbase(&a, 0, 5), "33333");
    }

    #[test]
    fn test_debase() {
        let a = decimal();
        assert_eq!(debase(&a, ""), Ok(0));
        assert_eq!(debase(&a, "0000"), Ok(0));
        assert_eq!(debase(&a, "00042"), Ok(42));
        assert_eq!(debase(&a, "18446744073709551615"), Ok(u64::MAX));
        assert_eq!(debase(&default_alphabet(), "hqyf7"), Ok(8388608));
    }

    #[test]
    fn test_debase_invalid_character() {
        let a = decimal();
        assert_eq!(
            debase(&a, "12x4"),
            Err(DecodeError::InvalidCharacter { character: 'x', index: 2 })
        );
        assert_eq!(
            debase(&a, "1é"),
            Err(DecodeError::NonAsciiCharacter { character: 0xc3, index: 1 })
        );
    }

    #[test]
    fn test_debase_overflow() {
        let a = decimal();
        assert_eq!(debase(&a, "18446744073709551616"), Err(DecodeError::Overflow));
        assert_eq!(debase(&a, "99999999999999999999999"), Err(DecodeError::Overflow));
        // leading zeros never overflow
        assert_eq!(debase(&a, "000000000000000000000000001"), Ok(1));
    }

    #[test]
    fn test_padding_neutrality() {
        let a = default_alphabet();
        for x in [0, 1, 30, 31, 961, 123_456_789, u64::MAX] {
            let natural = enbase(&a, x, 0);
            for len in [0, natural.len(), natural.len() + 1, 20] {
                assert_eq!(debase(&a, enbase(&a, x, len)), Ok(x));
            }
        }
    }

    #[test]
    fn test_checksum() {
        let a = default_alphabet();
        assert_eq!(checksum(&a, 29, 0), b'3');
        assert_eq!(checksum(&a, 29, 1), b'f');
        assert_eq!(checksum(&a, 29, 29), b'3');
        assert_eq!(checksum(&a, 29, 28), a.symbol(28));
        // modulus 1 always picks the zero symbol
        assert_eq!(checksum(&a, 1, 12345), b'3');
    }
}
