//! Projective Kummer points, differential addition and the ladders.
//!
//! Two point shapes exist. A [`KPoint`] carries four projective
//! coordinates (X : Y : Z : T). A [`WrappedPoint`] is the same point
//! normalized by its first coordinate: only X/Y, X/Z and X/T are stored,
//! which is exactly the form the differential addition consumes for the
//! fixed difference, trading one inversion up front for a saved
//! multiplication per ladder step.
//!
//! Sign convention: the doubling and differential-addition formulas want
//! the first theta constant negated. Instead of negating the constant,
//! points flow through [`xdbladd`] with their first coordinate negated,
//! and the ladder re-establishes that form on every iteration. The
//! convention is internal; it never leaks past compression.

use core::mem;

use crate::kummer::field::Fe1271;
use crate::kummer::{ECONS, EHAT, MU};

/// A projective point (X : Y : Z : T) on the Kummer surface.
#[derive(Clone, Copy)]
pub struct KPoint {
    pub x: Fe1271,
    pub y: Fe1271,
    pub z: Fe1271,
    pub t: Fe1271,
}

/// A Kummer point normalized by X: holds (X/Y, X/Z, X/T).
#[derive(Clone, Copy)]
pub struct WrappedPoint {
    pub y: Fe1271,
    pub z: Fe1271,
    pub t: Fe1271,
}

/// The wrapped base point of the group.
const BASE: WrappedPoint = WrappedPoint {
    y: Fe1271::from_words([0x4E93_1A48, 0xAEB3_51A6, 0x2049_C2E7, 0x1BE0_C3DC]),
    z: Fe1271::from_words([0xE07E_36DF, 0x6465_9818, 0x8EAB_A630, 0x23B4_16CD]),
    t: Fe1271::from_words([0x7215_441E, 0xC7AE_3D05, 0x4447_A24D, 0x5DB3_5C38]),
};

impl KPoint {
    /// The identity point (μ1 : μ2 : μ3 : μ4), which is also the ladder's
    /// starting accumulator.
    pub const fn identity() -> Self {
        KPoint {
            x: Fe1271::from_small(MU[0]),
            y: Fe1271::from_small(MU[1]),
            z: Fe1271::from_small(MU[2]),
            t: Fe1271::from_small(MU[3]),
        }
    }

    /// In-place Hadamard transform:
    /// (x, y, z, t) -> (x+y+z+t, x+y−z−t, x−y+z−t, x−y−z+t).
    ///
    /// An involution up to a factor of four.
    pub fn hadamard(&mut self) {
        let s1 = self.x + self.y;
        let s2 = self.x - self.y;
        let s3 = self.z + self.t;
        let s4 = self.z - self.t;

        self.x = s1 + s3;
        self.y = s1 - s3;
        self.z = s2 + s4;
        self.t = s2 - s4;
    }

    /// Componentwise product with another point.
    pub(crate) fn mul4(&mut self, rhs: &KPoint) {
        self.x = self.x * rhs.x;
        self.y = self.y * rhs.y;
        self.z = self.z * rhs.z;
        self.t = self.t * rhs.t;
    }

    /// Componentwise squaring.
    pub(crate) fn sqr4(&mut self) {
        self.x = self.x.square();
        self.y = self.y.square();
        self.z = self.z.square();
        self.t = self.t.square();
    }

    /// Componentwise multiplication by four small constants.
    pub(crate) fn mul4_small(&mut self, cons: &[u16; 4]) {
        self.x = self.x.mul_small(cons[0]);
        self.y = self.y.mul_small(cons[1]);
        self.z = self.z.mul_small(cons[2]);
        self.t = self.t.mul_small(cons[3]);
    }

    /// Constant-time conditional swap of two points.
    #[cfg(feature = "full")]
    pub(crate) fn ct_swap(a: &mut KPoint, b: &mut KPoint, condition: u32) {
        a.x.swap(&mut b.x, condition);
        a.y.swap(&mut b.y, condition);
        a.z.swap(&mut b.z, condition);
        a.t.swap(&mut b.t, condition);
    }
}

/// The Hadamard step of the differential formulas: the plain transform
/// conjugated by the sign convention, i.e. the first coordinate is
/// negated going in and the last coming out. This is what absorbs the
/// negated dual constant without a per-step correction.
fn hadamard_signed(p: &mut KPoint) {
    p.x = -p.x;
    p.hadamard();
    p.t = -p.t;
}

/// Simultaneous differential double and pseudo-add.
///
/// Both inputs arrive with their first coordinate negated, and `xp`
/// leaves the same way. On return `xp` holds the double of the old `xp`
/// and `xq` holds the pseudo-sum of the two inputs, relative to their
/// wrapped difference `xd`.
pub(crate) fn xdbladd(xp: &mut KPoint, xq: &mut KPoint, xd: &WrappedPoint) {
    hadamard_signed(xq);
    hadamard_signed(xp);
    xq.mul4(xp);
    xp.sqr4();
    xq.mul4_small(&EHAT);
    xp.mul4_small(&EHAT);
    hadamard_signed(xq);
    hadamard_signed(xp);
    xq.sqr4();
    xp.sqr4();
    xq.y = xq.y * xd.y;
    xq.z = xq.z * xd.z;
    xq.t = xq.t * xd.t;
    xp.mul4_small(&ECONS);
}

/// Normalizes a point by its first coordinate: one inversion of Y·Z·T,
/// then products recover X/Y, X/Z and X/T.
///
/// Y, Z and T must be nonzero, which holds for every point this crate
/// feeds in.
pub fn wrap(xp: &KPoint) -> WrappedPoint {
    let w0 = xp.y * xp.z;
    let w1 = w0 * xp.t;
    let w2 = w1.invert() * xp.x;
    let w3 = w2 * xp.t;

    WrappedPoint {
        y: w3 * xp.z,
        z: w3 * xp.y,
        t: w0 * w2,
    }
}

/// Rebuilds full projective coordinates from a wrapped point, up to an
/// overall scale, using three multiplications.
pub fn unwrap(xpw: &WrappedPoint) -> KPoint {
    let t = xpw.y * xpw.z;
    let z = xpw.y * xpw.t;
    let y = xpw.z * xpw.t;
    let x = t * xpw.t;

    KPoint { x, y, z, t }
}

/// Conditional swap used by the ladder: a masked XOR in constant-time
/// mode, a plain swap otherwise.
fn cond_swap(xp: &mut KPoint, xq: &mut KPoint, condition: u32, constant_time: bool) {
    #[cfg(feature = "full")]
    if constant_time {
        KPoint::ct_swap(xp, xq, condition);
        return;
    }

    let _ = constant_time;
    if condition == 1 {
        mem::swap(xp, xq);
    }
}

/// The shared ladder core. Processes scalar bits 250 down to 0 with the
/// usual swap-on-bit-transition bookkeeping; a final swap on bit 0
/// restores canonical operand order.
fn montgomery_ladder(
    xq: &mut KPoint,
    xd: &WrappedPoint,
    n: &[u8; 32],
    constant_time: bool,
) -> KPoint {
    let mut xp = KPoint::identity();
    let mut prev = 0u8;

    for i in (0..=250usize).rev() {
        let bit = (n[i >> 3] >> (i & 7)) & 1;
        let swap = (bit ^ prev) as u32;
        prev = bit;

        xq.x = -xq.x;
        cond_swap(&mut xp, xq, swap, constant_time);
        xdbladd(&mut xp, xq, xd);
    }

    xp.x = -xp.x;
    cond_swap(&mut xp, xq, prev as u32, constant_time);

    xp
}

/// Computes `[n]·start` with a data-oblivious ladder: the conditional
/// swap is a masked XOR over the whole point. This is the only ladder
/// secret scalars may use.
///
/// The scalar must be reduced (top six bits clear).
#[cfg(feature = "full")]
pub fn ladder(start: KPoint, diff: &WrappedPoint, n: &[u8; 32]) -> KPoint {
    let mut xq = start;
    montgomery_ladder(&mut xq, diff, n, true)
}

/// Computes `[n]·start` with a branching conditional swap.
///
/// Variable-time: only for public scalars, i.e. verification.
pub fn ladder_vartime(start: KPoint, diff: &WrappedPoint, n: &[u8; 32]) -> KPoint {
    let mut xq = start;
    montgomery_ladder(&mut xq, diff, n, false)
}

/// `[n]·P` for the fixed base point, constant-time.
#[cfg(feature = "full")]
pub fn ladder_base(n: &[u8; 32]) -> KPoint {
    ladder(unwrap(&BASE), &BASE, n)
}

/// `[n]·P` for the fixed base point, variable-time.
pub fn ladder_base_vartime(n: &[u8; 32]) -> KPoint {
    ladder_vartime(unwrap(&BASE), &BASE, n)
}
