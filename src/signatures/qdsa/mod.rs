//! The qDSA signature scheme and its Diffie-Hellman companions.
//!
//! All byte layouts are fixed and little-endian:
//!
//! - public key: 32 bytes, a compressed Kummer point Q = [d']P
//! - secret key: 64 bytes, the Bob Jr. image of the seed; the low half
//!   d'' feeds nonce derivation and the high half d' is the signing
//!   scalar
//! - signature: 32-byte compressed ephemeral point R, then the 32-byte
//!   response scalar s with its top six bits clear
//! - message: exactly 32 bytes
//!
//! Signing is deterministic: the nonce is derived from (d'' ‖ message),
//! never from ambient randomness. Verification never distinguishes a
//! malformed key from a failed equation; both are a plain rejection.

#[cfg(feature = "full")]
pub mod key_exchange;
#[cfg(feature = "full")]
pub mod keypair;
#[cfg(feature = "full")]
pub mod sign;
pub mod verify;

#[cfg(feature = "full")]
pub use key_exchange::{qdsa_dh_exchange, qdsa_dh_keygen};
#[cfg(feature = "full")]
pub use keypair::qdsa_keypair;
#[cfg(feature = "full")]
pub use sign::qdsa_sign;
pub use verify::qdsa_verify;

use crate::hash::BobJr;
use crate::kummer::scalar::Scalar;

/// The challenge scalar h = H(R ‖ Q ‖ M) reduced modulo the group order.
pub(crate) fn challenge_scalar(r: &[u8; 32], q: &[u8; 32], m: &[u8; 32]) -> Scalar {
    let mut ctx = BobJr::new();
    ctx.absorb(r);
    ctx.absorb(q);
    ctx.absorb(m);
    ctx.finish();
    Scalar::reduce_wide(&ctx.digest())
}
