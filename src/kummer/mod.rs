//! The Gaudry-Schost Kummer surface and its arithmetic.
//!
//! A Kummer surface is the quotient of the Jacobian of a genus-2 curve by
//! the inversion map. Its points do not form a group, but they support a
//! pseudo-group law that is enough for Montgomery-ladder scalar
//! multiplication and, through the biquadratic forms of `biquad`, for
//! signature verification without ever reconstructing a full group
//! element.
//!
//! Submodules, bottom up:
//!
//! - `field`: the base field GF(2¹²⁷ − 1)
//! - `scalar`: integers modulo the group order N (a 250-bit prime)
//! - `point`: projective points, differential addition, the ladders
//! - `codec`: 32-byte point compression and decompression
//! - `biquad`: the B_ii / B_ij forms and the verification check
//!
//! The surface is fixed. Its theta constants are small integers, kept
//! here as `u16` so the point formulas can use the cheaper
//! multiply-by-constant throughout.

pub mod biquad;
pub mod codec;
pub mod field;
pub mod point;
pub mod scalar;

/// Fundamental theta constants (μ1, μ2, μ3, μ4). Also the projective
/// coordinates of the surface's identity point.
pub(crate) const MU: [u16; 4] = [0x0B, 0x16, 0x13, 0x03];

/// Dual theta constants (μ̂1, μ̂2, μ̂3, μ̂4).
pub(crate) const MUHAT: [u16; 4] = [0x21, 0x0B, 0x11, 0x31];

/// Squared dual theta ratios (ê1, ê2, ê3, ê4), used in the doubling and
/// differential addition formulas.
pub(crate) const EHAT: [u16; 4] = [0x341, 0x9C3, 0x651, 0x231];

/// Companion constants to `EHAT` for the doubling half of xDBLADD.
pub(crate) const ECONS: [u16; 4] = [0x72, 0x39, 0x42, 0x1A2];
