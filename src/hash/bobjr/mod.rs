//! Bob Jr., a small sponge over the Keccak-f[800] permutation.
//!
//! Bob Jr. instantiates the sponge construction as follows:
//!
//! - permutation: Keccak-f[800] (25 lanes of 32 bits), reduced to the
//!   last 10 of the standard 22 rounds
//! - rate: 68 bytes
//! - capacity: 256 bits
//! - mode: overwrite (input bytes replace rate bytes instead of being
//!   XORed in)
//!
//! Reference: <https://keccak.team/files/Keccak-reference-3.0.pdf> and
//! the XKCP sources at <https://github.com/XKCP>.

pub mod core;
pub mod permutation;

pub use self::core::BobJr;
