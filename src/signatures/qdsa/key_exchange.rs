use zeroize::Zeroize;

use crate::kummer::codec::{compress, decompress};
use crate::kummer::point::{KPoint, ladder, ladder_base, wrap};
use crate::kummer::scalar::Scalar;

/// Derives a Diffie-Hellman public key from a 32-byte secret.
///
/// Unlike the signature keypair, the secret bytes are used directly as
/// the scalar (after reduction).
pub fn qdsa_dh_keygen(pk: &mut [u8; 32], sk: &[u8; 32]) {
    let mut d = Scalar::from_bytes(sk);
    pk.copy_from_slice(&compress(&ladder_base(&d.to_bytes())));
    d.zeroize();
}

/// Computes the 32-byte shared secret from a remote public key and the
/// local secret.
///
/// The function is total: a remote key that fails to decompress falls
/// back to the identity point, yielding a well-defined (and useless)
/// secret rather than an error channel.
pub fn qdsa_dh_exchange(ss: &mut [u8; 32], pk: &[u8; 32], sk: &[u8; 32]) {
    let remote = decompress(pk).unwrap_or(KPoint::identity());
    let remote_w = wrap(&remote);

    let mut d = Scalar::from_bytes(sk);
    let shared = ladder(remote, &remote_w, &d.to_bytes());
    ss.copy_from_slice(&compress(&shared));
    d.zeroize();
}
