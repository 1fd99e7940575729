//! Arithmetic in GF(2¹²⁷ − 1), the base field of the Kummer surface.
//!
//! ## Representation
//!
//! A field element is a single 128-bit word, little-endian at the byte
//! level. Values are kept **unreduced**: any 128-bit integer represents
//! its residue modulo the Mersenne prime `p = 2¹²⁷ − 1`, and operations
//! are free to return any representative of the correct class. Only
//! [`Fe1271::freeze`] produces the canonical representative in `[0, p)`,
//! and it is called exactly where a canonical value is needed: byte
//! serialization, zero tests and parity (sign) extraction.
//!
//! Reduction rides on the Mersenne identities `2¹²⁷ ≡ 1` and
//! `2¹²⁸ ≡ 2 (mod p)`: carries out of the 128th bit fold back in with
//! weight two, and the 256-bit products of `mul` split at bit 127 and
//! fold in one addition. Two folding passes always suffice.
//!
//! ## Constant-time behavior
//!
//! All arithmetic here is straight-line: no data-dependent branches and
//! no data-dependent memory access. The conditional swap used by the
//! constant-time ladder is a masked XOR.

use core::ops::{Add, Mul, Neg, Sub};

const MASK127: u128 = (1u128 << 127) - 1;

/// An element of GF(2¹²⁷ − 1), possibly unreduced.
#[derive(Clone, Copy)]
pub struct Fe1271(pub(crate) u128);

/// Full 128x128 -> 256 bit product, as (low, high) halves.
///
/// Shared with the scalar module, which builds its 256x256 schoolbook
/// multiplication out of four of these.
#[inline]
pub(crate) fn wide_mul(a: u128, b: u128) -> (u128, u128) {
    let (a0, a1) = (a as u64 as u128, a >> 64);
    let (b0, b1) = (b as u64 as u128, b >> 64);

    let ll = a0 * b0;
    let lh = a0 * b1;
    let hl = a1 * b0;
    let hh = a1 * b1;

    let (mid, mid_carry) = lh.overflowing_add(hl);
    let (lo, lo_carry) = ll.overflowing_add(mid << 64);
    let hi = hh + (mid >> 64) + ((mid_carry as u128) << 64) + lo_carry as u128;

    (lo, hi)
}

/// Reduces a 256-bit value to a 128-bit representative.
///
/// Splits at bit 127 and folds the high part back with weight one
/// (`2¹²⁷ ≡ 1`); carries out of the intermediate 128-bit additions fold
/// back with weight two (`2¹²⁸ ≡ 2`). The result is at most a few units
/// above `2¹²⁷` and always fits 128 bits.
#[inline]
fn reduce_wide(lo: u128, hi: u128) -> u128 {
    let fold = (hi << 1) | (lo >> 127);
    let top = hi >> 127;

    let (r, c1) = fold.overflowing_add(lo & MASK127);
    let (r, c2) = r.overflowing_add(top << 1);

    (r & MASK127) + (r >> 127) + (((c1 as u128) + (c2 as u128)) << 1)
}

impl Fe1271 {
    pub const ZERO: Self = Fe1271(0);
    pub const ONE: Self = Fe1271(1);

    /// Builds an element from four little-endian 32-bit words.
    pub(crate) const fn from_words(w: [u32; 4]) -> Self {
        Fe1271(
            (w[0] as u128) | ((w[1] as u128) << 32) | ((w[2] as u128) << 64) | ((w[3] as u128) << 96),
        )
    }

    /// Builds an element holding a small constant.
    #[inline]
    pub(crate) const fn from_small(c: u16) -> Self {
        Fe1271(c as u128)
    }

    /// Decodes 16 little-endian bytes. No masking and no reduction; the
    /// top bit is part of the representative and folds out on freeze.
    pub fn from_bytes(bytes: &[u8; 16]) -> Self {
        Fe1271(u128::from_le_bytes(*bytes))
    }

    /// Encodes the raw 128-bit representative as 16 little-endian bytes.
    ///
    /// Callers that need the canonical encoding freeze first.
    pub fn to_bytes(self) -> [u8; 16] {
        self.0.to_le_bytes()
    }

    /// Multiplies by a small (16-bit) constant.
    ///
    /// The surface constants are all small, and this avoids the full
    /// 256-bit product of a general multiplication.
    #[inline]
    pub fn mul_small(self, c: u16) -> Self {
        let c = c as u128;
        let p0 = (self.0 as u64 as u128) * c;
        let p1 = (self.0 >> 64) * c;

        let (lo, carry) = p0.overflowing_add(p1 << 64);
        let hi = (p1 >> 64) + carry as u128;

        Fe1271(reduce_wide(lo, hi))
    }

    #[inline]
    pub fn square(self) -> Self {
        self * self
    }

    /// Produces the canonical representative in `[0, p)`.
    ///
    /// Two folding passes bring the value to at most `p`, after which the
    /// second representation of zero (`p` itself) collapses to `0`.
    pub fn freeze(self) -> Self {
        let mut v = (self.0 & MASK127) + (self.0 >> 127);
        v = (v & MASK127) + (v >> 127);

        // v <= p here; adding one overflows bit 127 exactly when v == p.
        let wrap = v.wrapping_add(1) >> 127;
        Fe1271((v + wrap) & MASK127)
    }

    /// Tests whether the element is congruent to zero.
    pub fn is_zero(self) -> bool {
        self.freeze().0 == 0
    }

    /// Low bit of the representative. Meaningful on frozen values, where
    /// it acts as the sign used by compression.
    #[inline]
    pub(crate) fn low_bit(self) -> u8 {
        (self.0 & 1) as u8
    }

    /// Constant-time conditional swap.
    ///
    /// Swaps `self` and `rhs` when `condition == 1`, does nothing when it
    /// is `0`, without branching on the condition.
    #[cfg(feature = "full")]
    pub(crate) fn swap(&mut self, rhs: &mut Self, condition: u32) {
        let mask = (condition as u128).wrapping_neg();
        let t = (self.0 ^ rhs.0) & mask;
        self.0 ^= t;
        rhs.0 ^= t;
    }

    /// The fixed exponentiation chain shared by inversion and square
    /// roots: 11 multiplications and 125 squarings, data-independent.
    ///
    /// For a square δ, `delta.pow_min_half() * delta` is a square root
    /// candidate, which is why the chain carries this name.
    pub(crate) fn pow_min_half(self) -> Self {
        let x2 = self.square(); // 2
        let mut x3 = x2 * self; // 3
        let mut x6 = x3.square(); // 6
        x6 = x6.square(); // 12
        x3 = x6 * x3; // 2^4 - 1
        x6 = x3.square(); // 30
        x6 = x6 * self; // 2^5 - 1
        let mut r = x6.square(); // 2^6 - 2
        for _ in 0..4 {
            r = r.square(); // 2^10 - 2^5
        }
        x6 = r * x6; // 2^10 - 1
        r = x6.square(); // 2^11 - 2
        for _ in 0..9 {
            r = r.square(); // 2^20 - 2^10
        }
        x6 = r * x6; // 2^20 - 1
        r = x6.square(); // 2^21 - 2
        for _ in 0..19 {
            r = r.square(); // 2^40 - 2^20
        }
        x6 = r * x6; // 2^40 - 1
        r = x6.square(); // 2^41 - 2
        for _ in 0..39 {
            r = r.square(); // 2^80 - 2^40
        }
        r = r * x6; // 2^80 - 1
        for _ in 0..40 {
            r = r.square(); // 2^120 - 2^40
        }
        r = r * x6; // 2^120 - 1
        for _ in 0..4 {
            r = r.square(); // 2^124 - 2^4
        }
        r = r * x3; // 2^124 - 1
        r = r.square(); // 2^125 - 2
        x6 = r * x2; // 2^125
        x6 = x6.square(); // 2^126
        r * x6
    }

    /// Multiplicative inverse via Fermat, built on `pow_min_half`.
    ///
    /// Returns zero for a zero input.
    pub fn invert(self) -> Self {
        let r = self.square().pow_min_half();
        let t = r * self;
        r * t
    }

    /// Square root of `delta` with the sign (parity) bit `sigma`, if one
    /// exists.
    ///
    /// The candidate from the exponentiation chain is verified by
    /// squaring; a mismatch means `delta` is a non-residue and the
    /// function returns `None`. The root whose canonical form has low
    /// bit `sigma` is selected by negating the candidate when its parity
    /// disagrees.
    pub(crate) fn sqrt_with_sign(delta: Fe1271, sigma: u8) -> Option<Fe1271> {
        let root = delta.pow_min_half() * delta;
        if !(root.square() - delta).is_zero() {
            return None;
        }

        let root = root.freeze();
        if (root.low_bit() ^ sigma) == 1 {
            Some(-root)
        } else {
            Some(root)
        }
    }
}

impl Add for Fe1271 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        let (s, carry) = self.0.overflowing_add(rhs.0);
        let (s, carry2) = s.overflowing_add((carry as u128) << 1);
        Fe1271(s.wrapping_add((carry2 as u128) << 1))
    }
}

impl Sub for Fe1271 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        let (t, borrow) = self.0.overflowing_sub(rhs.0);
        let (t, borrow2) = t.overflowing_sub((borrow as u128) << 1);
        Fe1271(t.wrapping_sub((borrow2 as u128) << 1))
    }
}

impl Neg for Fe1271 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Fe1271::ZERO - self
    }
}

impl Mul for Fe1271 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        let (lo, hi) = wide_mul(self.0, rhs.0);
        Fe1271(reduce_wide(lo, hi))
    }
}
