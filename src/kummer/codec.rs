//! Kummer point compression to 32 bytes and back.
//!
//! A compressed point stores two field elements (l1, l2) plus two tag
//! bits: τ in the top bit of byte 15 and σ in the top bit of byte 31.
//! Compression pushes a point through the constant matrix T, normalizes
//! by the first nonzero of (L3, L2, L1, L4), and records in σ the parity
//! that lets decompression pick the right root of the quadratic
//!
//! ```text
//! K2(l1, l2, τ)·X² − 2·K3(l1, l2, τ)·X + K4(l1, l2, τ) = 0
//! ```
//!
//! whose coefficients are the Rosenhain polynomials below. Decompression
//! solves that quadratic (three structural cases, by the vanishing of K2
//! and K3) and undoes the matrix with T⁻¹.
//!
//! Decompression is total over well-formed encodings and rejects the
//! rest; it runs only on public data and may branch freely.

use crate::kummer::MU;
use crate::kummer::field::Fe1271;
use crate::kummer::point::KPoint;

/// Rosenhain-derived coefficients of the K2, K3, K4 polynomials.
const Q: [u16; 8] = [
    0x0DF7, 0x2599, 0x1211, 0x2FE3, 0x2C0B, 0x1D33, 0x1779, 0xABD7,
];

/// Row coefficients of the compression matrix T.
#[cfg(feature = "full")]
const KHAT: [u16; 4] = [0x3C1, 0x80, 0x239, 0x449];

/// K2(l1, l2, τ).
fn k2_poly(l1: &Fe1271, l2: &Fe1271, tau: bool) -> Fe1271 {
    let mut r = *l2 * l1.mul_small(Q[2]);
    if tau {
        r = r + l1.mul_small(Q[0]);
        r = r - l2.mul_small(Q[1]);
    }
    r = r.mul_small(Q[3]);
    r = r + r;
    r = l1.mul_small(Q[5]).square() - r;
    r = l2.mul_small(Q[3]).square() + r;
    if tau {
        r = Fe1271::from_small(Q[4]).square() + r;
    }
    r
}

/// K3(l1, l2, τ).
fn k3_poly(l1: &Fe1271, l2: &Fe1271, tau: bool) -> Fe1271 {
    let mut r = l1.square();
    let mut t0 = l2.square();
    let mut t1 = Fe1271::ZERO;

    if tau {
        r = r + Fe1271::ONE;
        t0 = t0 + Fe1271::ONE;
        t1 = r + t0;
    }
    r = (r * *l2).mul_small(Q[0]);
    t0 = (t0 * *l1).mul_small(Q[1]);
    r = r - t0;
    if tau {
        t1 = t1 - Fe1271::ONE;
        t1 = t1 - Fe1271::ONE;
        r = r + t1.mul_small(Q[2]);
    }
    r = r.mul_small(Q[3]);
    if tau {
        r = r - (*l1 * *l2).mul_small(Q[6]).mul_small(Q[7]);
    }
    r
}

/// K4(l1, l2, τ).
fn k4_poly(l1: &Fe1271, l2: &Fe1271, tau: bool) -> Fe1271 {
    let mut t = Fe1271::ZERO;

    if tau {
        t = l2.mul_small(Q[0]);
        t = t - l1.mul_small(Q[1]);
        t = t + Fe1271::from_small(Q[2]);
        t = t * *l1;
        t = t * *l2;
        t = t.mul_small(Q[3]);
        t = t + t;
        t = l1.mul_small(Q[3]).square() - t;
        t = l2.mul_small(Q[5]).square() + t;
    }

    let mut r = (l1.mul_small(Q[4]) * *l2).square();
    if tau {
        r = r + t;
    }
    r
}

#[cfg(feature = "full")]
fn t_row(x1: &Fe1271, x2: &Fe1271, x3: &Fe1271, x4: &Fe1271) -> Fe1271 {
    let mut r = x2.mul_small(KHAT[1]);
    r = r + x3.mul_small(KHAT[2]);
    r = r + x4.mul_small(KHAT[3]);
    r - x1.mul_small(KHAT[0])
}

/// The compression matrix T, applied row by row with the coordinate
/// permutation baked into the row arguments.
#[cfg(feature = "full")]
fn t_mat(x: &KPoint) -> KPoint {
    KPoint {
        x: t_row(&x.t, &x.z, &x.y, &x.x),
        y: t_row(&x.z, &x.t, &x.x, &x.y),
        z: t_row(&x.y, &x.x, &x.t, &x.z),
        t: t_row(&x.x, &x.y, &x.z, &x.t),
    }
}

fn t_inv_row(x1: &Fe1271, x2: &Fe1271, x3: &Fe1271, x4: &Fe1271) -> Fe1271 {
    // μ2 = 2·μ1, so the first two terms share one constant multiply.
    let mut r = *x2 + *x2;
    r = r - *x1;
    r = r.mul_small(MU[0]);
    r = r + x3.mul_small(MU[2]);
    r + x4.mul_small(MU[3])
}

/// The inverse matrix T⁻¹, with coefficients drawn from μ.
fn t_inv(x: &KPoint) -> KPoint {
    KPoint {
        x: t_inv_row(&x.t, &x.z, &x.y, &x.x),
        y: t_inv_row(&x.z, &x.t, &x.x, &x.y),
        z: t_inv_row(&x.y, &x.x, &x.t, &x.z),
        t: t_inv_row(&x.x, &x.y, &x.z, &x.t),
    }
}

/// Compresses a point to (l1, l2, τ, σ) in 32 bytes.
#[cfg(feature = "full")]
pub fn compress(x: &KPoint) -> [u8; 32] {
    let t = t_mat(x);

    // τ records whether L3 vanishes; normalize by the first nonzero
    // coordinate in the order (L3, L2, L1, L4).
    let tau = !t.z.is_zero();
    let inv = if tau {
        t.z.invert()
    } else if !t.y.is_zero() {
        t.y.invert()
    } else if !t.x.is_zero() {
        t.x.invert()
    } else {
        t.t.invert()
    };

    let l4 = t.t * inv;
    let l1 = (t.x * inv).freeze();
    let l2 = (t.y * inv).freeze();

    // σ is the parity of k2·l4 − k3.
    let mut s = k2_poly(&l1, &l2, tau) * l4;
    s = s - k3_poly(&l1, &l2, tau);
    let s = s.freeze();

    let mut out = [0u8; 32];
    out[..16].copy_from_slice(&l1.to_bytes());
    out[16..].copy_from_slice(&l2.to_bytes());
    out[15] |= (tau as u8) << 7;
    out[31] |= (s.low_bit() & 1) << 7;
    out
}

/// Decompresses 32 bytes to a point, or `None` for a malformed encoding.
///
/// The three cases follow the quadratic in the module docs:
///
/// 1. K2 = K3 = 0: only the identity encoding (all-zero l1, l2, τ, σ)
///    is acceptable.
/// 2. K2 = 0, K3 ≠ 0: the quadratic degenerates to a linear equation;
///    σ must match the parity it would have been compressed with.
/// 3. K2 ≠ 0: the root (K3 + √Δ)/K2 with Δ = K3² − K2·K4; Δ must be a
///    square and σ selects the root.
pub fn decompress(x: &[u8; 32]) -> Option<KPoint> {
    let mut l1b: [u8; 16] = x[..16].try_into().unwrap();
    let mut l2b: [u8; 16] = x[16..].try_into().unwrap();

    let tau_bit = (l1b[15] & 0x80) >> 7;
    let sigma = (l2b[15] & 0x80) >> 7;
    l1b[15] &= 0x7F;
    l2b[15] &= 0x7F;

    let l1 = Fe1271::from_bytes(&l1b);
    let l2 = Fe1271::from_bytes(&l2b);
    let tau = tau_bit == 1;

    let k2 = k2_poly(&l1, &l2, tau);
    let k3 = k3_poly(&l1, &l2, tau);
    let k4 = k4_poly(&l1, &l2, tau);

    let pre = if k2.is_zero() {
        let k3 = k3.freeze();
        if k3.is_zero() {
            if !l1.is_zero() || !l2.is_zero() || tau_bit != 0 || sigma != 0 {
                return None;
            }
            KPoint {
                x: Fe1271::ZERO,
                y: Fe1271::ZERO,
                z: Fe1271::ZERO,
                t: Fe1271::ONE,
            }
        } else if (sigma ^ k3.low_bit()) == 1 {
            let x = k3 * l1;
            let y = k3 * l2;
            KPoint {
                x: x + x,
                y: y + y,
                z: if tau { k3 + k3 } else { Fe1271::ZERO },
                t: k4,
            }
        } else {
            return None;
        }
    } else {
        let delta = k3.square() - k2 * k4;
        let root = Fe1271::sqrt_with_sign(delta, sigma)?;
        KPoint {
            x: k2 * l1,
            y: k2 * l2,
            z: if tau { k2 } else { Fe1271::ZERO },
            t: k3 + root,
        }
    };

    Some(t_inv(&pre))
}
