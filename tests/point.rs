#![cfg(feature = "full")]

use qdsv::kummer::codec::{compress, decompress};
use qdsv::kummer::field::Fe1271;
use qdsv::kummer::point::{KPoint, ladder, ladder_base, ladder_base_vartime, ladder_vartime, unwrap, wrap};
use qdsv::signatures::qdsa::qdsa_keypair;

fn fe(v: u128) -> Fe1271 {
    Fe1271::from_bytes(&v.to_le_bytes())
}

fn canon(x: Fe1271) -> [u8; 16] {
    x.freeze().to_bytes()
}

/// Projective equality: all pairwise cross-products agree.
fn proj_eq(a: &KPoint, b: &KPoint) -> bool {
    let ac = [a.x, a.y, a.z, a.t];
    let bc = [b.x, b.y, b.z, b.t];
    for i in 0..4 {
        for j in (i + 1)..4 {
            if canon(ac[i] * bc[j]) != canon(ac[j] * bc[i]) {
                return false;
            }
        }
    }
    true
}

/// A valid surface point, obtained by decompressing a generated public
/// key.
fn sample_point(seed_byte: u8) -> KPoint {
    let mut pk = [0u8; 32];
    let mut sk = [0u8; 64];
    qdsa_keypair(&mut pk, &mut sk, &[seed_byte; 32]);
    decompress(&pk).expect("generated public keys decompress")
}

#[test]
fn hadamard_is_an_involution_up_to_four() {
    let cases = [
        (1u128, 2u128, 3u128, 4u128),
        (0, 0, 0, 1),
        (
            0x0123_4567_89AB_CDEF_0011_2233_4455_6677,
            0x7EDC_BA98_7654_3210_8899_AABB_CCDD_EEFF,
            (1 << 127) - 2,
            42,
        ),
    ];

    for (x, y, z, t) in cases {
        let mut p = KPoint {
            x: fe(x),
            y: fe(y),
            z: fe(z),
            t: fe(t),
        };
        p.hadamard();
        p.hadamard();

        let four = |v: u128| canon(fe(v) + fe(v) + fe(v) + fe(v));
        assert_eq!(canon(p.x), four(x));
        assert_eq!(canon(p.y), four(y));
        assert_eq!(canon(p.z), four(z));
        assert_eq!(canon(p.t), four(t));
    }
}

#[test]
fn wrap_then_unwrap_is_projectively_identity() {
    // Wrapping only needs nonzero coordinates, not surface membership.
    let p = KPoint {
        x: fe(0x1111_2222_3333_4444),
        y: fe(0x5555_6666_7777_8888_9999),
        z: fe(0xAAAA_BBBB_CCCC_DDDD_EEEE_FFFF),
        t: fe(7),
    };
    let q = unwrap(&wrap(&p));
    assert!(proj_eq(&p, &q));

    let r = sample_point(3);
    assert!(proj_eq(&r, &unwrap(&wrap(&r))));
}

#[test]
fn zero_scalar_yields_the_identity_encoding() {
    // [0]P compresses to the all-zero string: l1 = l2 = 0, tau = sigma = 0.
    let zero = [0u8; 32];
    assert_eq!(compress(&ladder_base_vartime(&zero)), [0u8; 32]);

    // Same through a non-base point.
    let q = sample_point(9);
    let qw = wrap(&q);
    assert_eq!(compress(&ladder_vartime(q, &qw, &zero)), [0u8; 32]);
}

#[test]
fn constant_time_and_vartime_ladders_agree() {
    let q = sample_point(5);
    let qw = wrap(&q);

    let mut n = [0u8; 32];
    for (i, byte) in n.iter_mut().enumerate() {
        *byte = (i as u8).wrapping_mul(0x6D).wrapping_add(0x31);
    }
    n[31] &= 0x03;

    let ct = ladder(q, &qw, &n);
    let vt = ladder_vartime(q, &qw, &n);

    assert_eq!(canon(ct.x), canon(vt.x));
    assert_eq!(canon(ct.y), canon(vt.y));
    assert_eq!(canon(ct.z), canon(vt.z));
    assert_eq!(canon(ct.t), canon(vt.t));

    let ct = ladder_base(&n);
    let vt = ladder_base_vartime(&n);
    assert_eq!(canon(ct.x), canon(vt.x));
    assert_eq!(canon(ct.y), canon(vt.y));
    assert_eq!(canon(ct.z), canon(vt.z));
    assert_eq!(canon(ct.t), canon(vt.t));
}

#[test]
fn one_times_base_point_round_trips_through_compression() {
    let mut one = [0u8; 32];
    one[0] = 1;

    let p1 = ladder_base_vartime(&one);
    let ck = compress(&p1);
    let back = decompress(&ck).expect("[1]P decompresses");
    assert!(proj_eq(&p1, &back));
    assert_eq!(compress(&back), ck);
}

#[test]
fn ladder_respects_projective_representatives() {
    // Running the ladder from a point and from the (differently scaled)
    // representative produced by a compression round-trip must land on
    // the same compressed result.
    let q = sample_point(11);
    let q2 = decompress(&compress(&q)).expect("round-trip decompresses");

    let mut n = [0u8; 32];
    for (i, byte) in n.iter_mut().enumerate() {
        *byte = (i as u8).wrapping_mul(0x29).wrapping_add(0x0B);
    }
    n[31] &= 0x03;

    let a = ladder_vartime(q, &wrap(&q), &n);
    let b = ladder_vartime(q2, &wrap(&q2), &n);
    assert!(proj_eq(&a, &b));
    assert_eq!(compress(&a), compress(&b));
}
