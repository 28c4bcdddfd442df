//! core functionality for turning sequential integer ids
//! into short, non-sequential, checksummed strings and back
//!
//! # Modules
//!
//! - `alphabet`: validated symbol table
//! - `scramble`: low-block bit reversal
//! - `codec`: base conversion with padding, checksum symbol
//! - `encoder`: `IdEncoder` encode/decode facade
//! - `config`: `Config` and the reference defaults
//!
//! Not a cryptographic primitive. Anyone who knows the alphabet, block size
//! and modulus can decode and forge ids.
//!
//! ```
//! use idencoder_core::Config;
//!
//! let encoder = Config::default().build().unwrap();
//! let id = encoder.encode(1, 5);
//! assert_eq!(encoder.decode_verified(&id), Ok(1));
//! ```

pub mod alphabet;
pub mod codec;
pub mod config;
pub mod encoder;
pub mod error;
pub mod scramble;

// Re-export commonly used items
pub use alphabet::Alphabet;
pub use codec::{checksum, debase, enbase};
pub use config::{Config, DEFAULT_ALPHABET, DEFAULT_BLOCK_SIZE, DEFAULT_MIN_LENGTH, DEFAULT_MODULUS};
pub use encoder::{Decoded, IdEncoder};
pub use error::{ConfigError, DecodeError};
pub use scramble::{MAX_BLOCK_SIZE, Scrambler};
