//! Hash functions exposed by the crate.
//!
//! The only hash here is Bob Jr., the reduced-round Keccak-f[800] sponge
//! used throughout the signature scheme.

pub mod bobjr;

/// Re-export of the sponge state type.
pub use bobjr::core::BobJr;
