use zeroize::Zeroize;

use super::challenge_scalar;
use crate::hash::BobJr;
use crate::kummer::codec::compress;
use crate::kummer::point::ladder_base;
use crate::kummer::scalar::Scalar;

/// Produces the 64-byte signature R ‖ s over a 32-byte message.
///
/// The nonce r is H(d'' ‖ msg) reduced modulo the group order, R is the
/// compressed [r]P, and s = (r − h·d') mod N for the challenge
/// h = H(R ‖ pk ‖ msg). Secret intermediates are wiped before return.
pub fn qdsa_sign(sig: &mut [u8; 64], msg: &[u8; 32], pk: &[u8; 32], sk: &[u8; 64]) {
    let mut ctx = BobJr::new();
    ctx.absorb(&sk[..32]);
    ctx.absorb(msg);
    ctx.finish();
    let mut wide = ctx.digest();
    let mut r = Scalar::reduce_wide(&wide);

    let point_r = compress(&ladder_base(&r.to_bytes()));
    sig[..32].copy_from_slice(&point_r);

    let h = challenge_scalar(&point_r, pk, msg);
    let mut d = Scalar::from_bytes(sk[32..].try_into().unwrap());
    let s = Scalar::from_sub_mul(&r, &h, &d);
    sig[32..].copy_from_slice(&s.to_bytes());

    ctx.zeroize();
    wide.zeroize();
    r.zeroize();
    d.zeroize();
}
