use super::challenge_scalar;
use crate::kummer::biquad::check;
use crate::kummer::codec::decompress;
use crate::kummer::point::{ladder_base_vartime, ladder_vartime, wrap};
use crate::kummer::scalar::Scalar;

/// Verifies a 64-byte signature over a 32-byte message.
///
/// Returns `true` only if the public key decompresses, the ephemeral
/// point decompresses, and R = ±([s]P ± [h]Q) holds through all six
/// biquadratic identities. Every input is public, so both scalar
/// multiplications use the variable-time ladder.
pub fn qdsa_verify(sig: &[u8; 64], pk: &[u8; 32], msg: &[u8; 32]) -> bool {
    let Some(q) = decompress(pk) else {
        return false;
    };

    let s = Scalar::from_bytes(sig[32..].try_into().unwrap());
    let h = challenge_scalar(sig[..32].try_into().unwrap(), pk, msg);

    let qw = wrap(&q);
    let hq = ladder_vartime(q, &qw, &h.to_bytes());
    let sp = ladder_base_vartime(&s.to_bytes());

    check(sp, hq, sig[..32].try_into().unwrap())
}
