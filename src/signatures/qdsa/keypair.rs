use zeroize::Zeroize;

use crate::hash::BobJr;
use crate::kummer::codec::compress;
use crate::kummer::point::ladder_base;
use crate::kummer::scalar::Scalar;

/// Derives a keypair from a 32-byte seed.
///
/// The secret key is the 64-byte Bob Jr. image of the seed; the public
/// key is the compressed image of the base point under the scalar held
/// in its upper half.
pub fn qdsa_keypair(pk: &mut [u8; 32], sk: &mut [u8; 64], seed: &[u8; 32]) {
    let mut ctx = BobJr::new();
    ctx.absorb(seed);
    ctx.finish();
    sk.copy_from_slice(&ctx.digest());

    let mut d = Scalar::from_bytes(sk[32..].try_into().unwrap());
    pk.copy_from_slice(&compress(&ladder_base(&d.to_bytes())));

    ctx.zeroize();
    d.zeroize();
}
