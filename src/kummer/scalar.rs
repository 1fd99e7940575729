//! Arithmetic modulo N, the 250-bit prime order of the Kummer's Jacobian.
//!
//! Scalars are 32 little-endian bytes; a reduced scalar occupies 250
//! bits, so its top six bits are clear. Internally the
//! routines work on little-endian `u32` word arrays: 8 words for a
//! scalar, 16 for the double-width values produced by multiplication and
//! consumed by reduction.
//!
//! Reduction uses two precomputed folding constants. `L6` is
//! `2²⁵⁶ mod N`: four passes of "multiply the high 256 bits by `L6` and
//! add" shrink a 512-bit value until only a few bits remain above 2²⁵⁰.
//! `L` is `2²⁵⁰ mod N` and folds those final bits away, twice, leaving
//! the canonical representative.
//!
//! Everything here is branch-free and safe for secret scalars; the word
//! loops have fixed trip counts and carries are data-independent.

use crate::kummer::field::wide_mul;

/// 2²⁵⁰ mod N.
const L: [u32; 8] = [
    0x840C_05BD,
    0x4773_0B4B,
    0xF9A1_54FF,
    0xD2C2_7FC9,
    0x20C7_5294,
    0x0334_D698,
    0,
    0,
];

/// 2²⁵⁶ mod N.
const L6: [u32; 8] = [
    0x0301_6F40,
    0xDCC2_D2E1,
    0x6855_3FD1,
    0xB09F_F27E,
    0x31D4_A534,
    0xCD35_A608,
    0,
    0,
];

/// The group order N itself, for negation.
#[cfg(feature = "full")]
const N: [u32; 8] = [
    0x7BF3_FA43,
    0xB88C_F4B4,
    0x065E_AB00,
    0x2D3D_8036,
    0xDF38_AD6B,
    0xFCCB_2967,
    0xFFFF_FFFF,
    0x03FF_FFFF,
];

fn words(bytes: &[u8; 32]) -> [u32; 8] {
    let mut w = [0u32; 8];
    for (word, chunk) in w.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes(chunk.try_into().unwrap());
    }
    w
}

fn bytes(w: &[u32; 8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (chunk, word) in out.chunks_exact_mut(4).zip(w) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    out
}

/// 128x128 -> 256 bit product over word arrays.
fn mul_128(x: &[u32; 4], y: &[u32; 4]) -> [u32; 8] {
    let join = |w: &[u32; 4]| {
        (w[0] as u128) | ((w[1] as u128) << 32) | ((w[2] as u128) << 64) | ((w[3] as u128) << 96)
    };

    let (lo, hi) = wide_mul(join(x), join(y));

    let mut r = [0u32; 8];
    for i in 0..4 {
        r[i] = (lo >> (32 * i)) as u32;
        r[i + 4] = (hi >> (32 * i)) as u32;
    }
    r
}

/// Adds `y` into `x` starting at word `offset`, propagating the carry
/// through the rest of the 512-bit buffer.
fn large_add(x: &mut [u32; 16], y: &[u32; 8], offset: usize) {
    let mut carry = 0u64;
    for i in 0..8 {
        let t = x[i + offset] as u64 + y[i] as u64 + carry;
        x[i + offset] = t as u32;
        carry = t >> 32;
    }
    for i in (8 + offset)..16 {
        let t = x[i] as u64 + carry;
        x[i] = t as u32;
        carry = t >> 32;
    }
}

/// 256x256 -> 512 bit schoolbook multiplication from four half-products.
fn large_mul(x: &[u32; 8], y: &[u32; 8]) -> [u32; 16] {
    let xl: [u32; 4] = x[..4].try_into().unwrap();
    let xh: [u32; 4] = x[4..].try_into().unwrap();
    let yl: [u32; 4] = y[..4].try_into().unwrap();
    let yh: [u32; 4] = y[4..].try_into().unwrap();

    let mut r = [0u32; 16];
    r[..8].copy_from_slice(&mul_128(&xl, &yl));
    large_add(&mut r, &mul_128(&xl, &yh), 4);
    large_add(&mut r, &mul_128(&xh, &yl), 4);
    large_add(&mut r, &mul_128(&xh, &yh), 8);
    r
}

/// Reduces a 512-bit value modulo N into 250-bit 8-word form.
fn large_red(x: &[u32; 16]) -> [u32; 8] {
    let mut r = *x;

    // Fold the high 256 bits down with 2^256 ≡ L6.
    for _ in 0..4 {
        let hi: [u32; 8] = r[8..].try_into().unwrap();
        let temp = large_mul(&hi, &L6);
        r[8..].copy_from_slice(&temp[8..]);
        large_add(&mut r, temp[..8].try_into().unwrap(), 0);
    }

    // Isolate bits 250.. into word 8 and fold with 2^250 ≡ L, twice.
    r[8] = (r[8] << 6) | ((r[7] & 0xFC00_0000) >> 26);
    r[7] &= 0x03FF_FFFF;
    let hi: [u32; 8] = r[8..].try_into().unwrap();
    let temp = large_mul(&hi, &L);
    r[8..].copy_from_slice(&temp[8..]);
    large_add(&mut r, temp[..8].try_into().unwrap(), 0);

    r[8] = (r[7] & 0x0400_0000) >> 26;
    r[7] &= 0x03FF_FFFF;
    let hi: [u32; 8] = r[8..].try_into().unwrap();
    let temp = large_mul(&hi, &L);
    r[8] = 0;
    large_add(&mut r, temp[..8].try_into().unwrap(), 0);

    r[..8].try_into().unwrap()
}

/// N − x for canonical x.
#[cfg(feature = "full")]
fn large_neg(x: &[u32; 8]) -> [u32; 8] {
    let mut r = [0u32; 8];
    let mut borrow = 0u64;
    for i in 0..8 {
        let t = (N[i] as u64).wrapping_sub(x[i] as u64 + borrow);
        r[i] = t as u32;
        borrow = (t >> 32) & 1;
    }
    r
}

/// A scalar modulo the group order, as 32 little-endian bytes.
///
/// Constructors reduce, so a `Scalar` always fits 250 bits and the top
/// six bits of its encoding are clear.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "full", derive(zeroize::Zeroize))]
pub struct Scalar(pub(crate) [u8; 32]);

impl Scalar {
    /// Reduces a 512-bit little-endian value, e.g. a 64-byte hash output.
    pub fn reduce_wide(wide: &[u8; 64]) -> Self {
        let mut t = [0u32; 16];
        for (word, chunk) in t.iter_mut().zip(wide.chunks_exact(4)) {
            *word = u32::from_le_bytes(chunk.try_into().unwrap());
        }
        Scalar(bytes(&large_red(&t)))
    }

    /// Canonicalizes 32 bytes: zero-extends to 512 bits and reduces.
    pub fn from_bytes(input: &[u8; 32]) -> Self {
        let mut t = [0u32; 16];
        t[..8].copy_from_slice(&words(input));
        Scalar(bytes(&large_red(&t)))
    }

    pub fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Computes `r − h·d (mod N)`, the response scalar of a signature.
    ///
    /// The product is reduced, negated against N and added to `r`, with
    /// one final reduction to restore 250-bit form.
    #[cfg(feature = "full")]
    pub fn from_sub_mul(r: &Scalar, h: &Scalar, d: &Scalar) -> Self {
        let t = large_mul(&words(&h.0), &words(&d.0));
        let hd = large_red(&t);

        let mut t = [0u32; 16];
        t[..8].copy_from_slice(&large_neg(&hd));
        large_add(&mut t, &words(&r.0), 0);
        Scalar(bytes(&large_red(&t)))
    }
}
