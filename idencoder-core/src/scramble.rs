/// Bit-block scrambler: reverses the low `block_size` bits of a u64
use crate::error::ConfigError;

/// Largest accepted block size. Shifting a u64 by 64 or more is not defined.
pub const MAX_BLOCK_SIZE: u32 = u64::BITS - 1;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Scrambler {
    block_size: u32,
    mask: u64,
}

impl Scrambler {
    pub fn new(block_size: u32) -> Result<Self, ConfigError> {
        if block_size > MAX_BLOCK_SIZE {
            return Err(ConfigError::BlockSizeTooLarge {
                block_size,
                max: MAX_BLOCK_SIZE,
            });
        }

        Ok(Self {
            block_size,
            mask: (1u64 << block_size) - 1,
        })
    }

    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Reverse the order of the low `block_size` bits, leave the rest untouched.
    ///
    /// Self-inverse: `scramble(scramble(n)) == n`.
    pub fn scramble(&self, n: u64) -> u64 {
        if self.block_size == 0 {
            return n;
        }

        // Bit `i` of the block lands on bit `block_size - i - 1`
        let block = (n & self.mask).reverse_bits() >> (u64::BITS - self.block_size);
        (n & !self.mask) | block
    }
}
