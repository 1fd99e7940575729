//! Biquadratic forms and the signature verification check.
//!
//! On a Kummer surface, points carry no group law, so a verifier cannot
//! recompute R = [s]P + [h]Q directly. What it can do is evaluate the
//! biquadratic forms B_ii and B_ij of the two known points [s]P and
//! [h]Q: for every coordinate pair (i, j), any point equal to
//! ±([s]P ± [h]Q) must satisfy
//!
//! ```text
//! B_jj·R_i² − 2·C·B_ij·R_i·R_j + B_ii·R_j² = 0
//! ```
//!
//! The check below evaluates all six pairs against the decompressed R
//! and accepts only if every one vanishes.
//!
//! Everything here operates on public inputs; variable time is fine.

use crate::kummer::codec::decompress;
use crate::kummer::field::Fe1271;
use crate::kummer::point::KPoint;
use crate::kummer::{EHAT, MUHAT};

/// Small coefficients of the diagonal-form dot product.
const K: [u16; 4] = [0x1259, 0x173F, 0x1679, 0x07C7];

/// The curve constant C of the quad test.
const QUAD_C: Fe1271 = Fe1271::from_words([0xCDDD_A843, 0x46F7_E3D8, 0xA320_A2DD, 0x40F5_0EEF]);

/// Dot product of two coordinate 4-tuples.
fn dot(x: [&Fe1271; 4], y: [&Fe1271; 4]) -> Fe1271 {
    let mut r = *x[0] * *y[0];
    r = r + *x[1] * *y[1];
    r = r + *x[2] * *y[2];
    r + *x[3] * *y[3]
}

/// Dot product against the fixed small coefficients, with the sign
/// pattern (+, −, −, +).
fn dot_small(x0: &Fe1271, x1: &Fe1271, x2: &Fe1271, x3: &Fe1271) -> Fe1271 {
    let mut r = x0.mul_small(K[0]);
    r = r - x1.mul_small(K[1]);
    r = r - x2.mul_small(K[2]);
    r + x3.mul_small(K[3])
}

/// c1·c2 + c3·c4 as a field element.
fn const_sum(c1: u16, c2: u16, c3: u16, c4: u16) -> Fe1271 {
    Fe1271::from_small(c1).mul_small(c2) + Fe1271::from_small(c3).mul_small(c4)
}

/// The four diagonal forms (B_11, B_22, B_33, B_44), packed into one
/// point-shaped tuple.
///
/// Inputs are the two scalar multiples after their Hadamard transform.
fn bii_values(sp: &KPoint, hq: &KPoint) -> KPoint {
    let mut t0 = *sp;
    t0.sqr4();
    let mut r = *hq;
    r.sqr4();
    t0.mul4_small(&EHAT);
    r.mul4_small(&EHAT);
    t0.x = -t0.x;
    r.x = -r.x;

    let t1 = KPoint {
        x: dot([&t0.x, &t0.y, &t0.z, &t0.t], [&r.x, &r.y, &r.z, &r.t]),
        y: dot([&t0.x, &t0.y, &t0.z, &t0.t], [&r.y, &r.x, &r.t, &r.z]),
        z: dot([&t0.x, &t0.z, &t0.y, &t0.t], [&r.z, &r.x, &r.t, &r.y]),
        t: dot([&t0.x, &t0.t, &t0.y, &t0.z], [&r.t, &r.x, &r.z, &r.y]),
    };

    let mut out = KPoint {
        x: dot_small(&t1.x, &t1.y, &t1.z, &t1.t),
        y: dot_small(&t1.y, &t1.x, &t1.t, &t1.z),
        z: dot_small(&t1.z, &t1.t, &t1.x, &t1.y),
        t: dot_small(&t1.t, &t1.z, &t1.y, &t1.x),
    };
    out.mul4_small(&MUHAT);
    out.x = -out.x;
    out
}

/// One off-diagonal form B_ij.
///
/// `p` and `q` are coordinate permutations of the two scalar multiples
/// and `c` the matching permutation of the dual theta constants.
fn bij_value(p: [&Fe1271; 4], q: [&Fe1271; 4], c: [u16; 4]) -> Fe1271 {
    let mut r = *p[0] * *p[1];
    let mut tx = *q[0] * *q[1];
    let ty = *p[2] * *p[3];
    r = r - ty;
    let tz = *q[2] * *q[3];
    tx = tx - tz;
    r = r * tx;
    let tx = ty * tz;
    r = r.mul_small(c[2]);
    r = r.mul_small(c[3]);
    let tx = tx * const_sum(c[2], c[3], c[0], c[1]);
    r = tx - r;
    r = r.mul_small(c[0]);
    r = r.mul_small(c[1]);
    r = r * const_sum(c[1], c[3], c[0], c[2]);
    r * const_sum(c[1], c[2], c[0], c[3])
}

/// Whether B_jj·R1² − 2·C·B_ij·R1·R2 + B_ii·R2² vanishes.
fn quad_holds(bij: &Fe1271, bjj: &Fe1271, bii: &Fe1271, r1: &Fe1271, r2: &Fe1271) -> bool {
    let mut x = *bjj * r1.square();
    let mut y = *bij * (*r1 * *r2);
    y = QUAD_C * y;
    y = y + y;
    x = x - y;
    (x + *bii * r2.square()).is_zero()
}

/// Verifies R = ±([s]P ± [h]Q) given the compressed R.
///
/// Evaluates the diagonal forms, decompresses R (a malformed encoding
/// rejects), and tests all six quadratic identities. All six are always
/// evaluated; the result does not gate the work.
pub(crate) fn check(mut sp: KPoint, mut hq: KPoint, xr: &[u8; 32]) -> bool {
    sp.hadamard();
    hq.hadamard();
    let bii = bii_values(&sp, &hq);

    let Some(mut r) = decompress(xr) else {
        return false;
    };
    r.hadamard();

    let mut ok = true;

    // B12
    let bij = bij_value(
        [&sp.x, &sp.y, &sp.z, &sp.t],
        [&hq.x, &hq.y, &hq.z, &hq.t],
        [MUHAT[0], MUHAT[1], MUHAT[2], MUHAT[3]],
    );
    ok &= quad_holds(&bij, &bii.y, &bii.x, &r.x, &r.y);

    // B13
    let bij = bij_value(
        [&sp.x, &sp.z, &sp.y, &sp.t],
        [&hq.x, &hq.z, &hq.y, &hq.t],
        [MUHAT[0], MUHAT[2], MUHAT[1], MUHAT[3]],
    );
    ok &= quad_holds(&bij, &bii.z, &bii.x, &r.x, &r.z);

    // B14
    let bij = bij_value(
        [&sp.x, &sp.t, &sp.y, &sp.z],
        [&hq.x, &hq.t, &hq.y, &hq.z],
        [MUHAT[0], MUHAT[3], MUHAT[1], MUHAT[2]],
    );
    ok &= quad_holds(&bij, &bii.t, &bii.x, &r.x, &r.t);

    // B23, B24 and B34 pick up a sign from the coordinate permutation.
    let bij = -bij_value(
        [&sp.y, &sp.z, &sp.x, &sp.t],
        [&hq.y, &hq.z, &hq.x, &hq.t],
        [MUHAT[1], MUHAT[2], MUHAT[0], MUHAT[3]],
    );
    ok &= quad_holds(&bij, &bii.z, &bii.y, &r.y, &r.z);

    // B24
    let bij = -bij_value(
        [&sp.y, &sp.t, &sp.x, &sp.z],
        [&hq.y, &hq.t, &hq.x, &hq.z],
        [MUHAT[1], MUHAT[3], MUHAT[0], MUHAT[2]],
    );
    ok &= quad_holds(&bij, &bii.t, &bii.y, &r.y, &r.t);

    // B34
    let bij = -bij_value(
        [&sp.z, &sp.t, &sp.x, &sp.y],
        [&hq.z, &hq.t, &hq.x, &hq.y],
        [MUHAT[2], MUHAT[3], MUHAT[0], MUHAT[1]],
    );
    ok &= quad_holds(&bij, &bii.t, &bii.z, &r.z, &r.t);

    ok
}
