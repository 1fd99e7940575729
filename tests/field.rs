use proptest::prelude::*;

use qdsv::kummer::field::Fe1271;

const P: u128 = (1u128 << 127) - 1;

fn fe(v: u128) -> Fe1271 {
    Fe1271::from_bytes(&v.to_le_bytes())
}

fn canon(x: Fe1271) -> u128 {
    u128::from_le_bytes(x.freeze().to_bytes())
}

/// Independent multiplication mod p by binary double-and-add, used as an
/// oracle against the crate's folded 256-bit product.
fn ref_mulmod(a: u128, b: u128) -> u128 {
    let a = a % P;
    let mut acc = 0u128;
    for i in (0..128).rev() {
        acc = (acc << 1) % P;
        if (b >> i) & 1 == 1 {
            acc = (acc + a) % P;
        }
    }
    acc
}

#[test]
fn freeze_maps_both_zero_representations_to_zero() {
    assert_eq!(canon(fe(0)), 0);
    assert_eq!(canon(fe(P)), 0);
    // 2^127 ≡ 1 and the all-ones word ≡ 1 as well.
    assert_eq!(canon(fe(1u128 << 127)), 1);
    assert_eq!(canon(fe(u128::MAX)), 1);
}

#[test]
fn one_is_its_own_inverse() {
    assert_eq!(canon(Fe1271::ONE.invert()), 1);
}

#[test]
fn zero_inverts_to_zero() {
    assert_eq!(canon(Fe1271::ZERO.invert()), 0);
}

#[test]
fn is_zero_sees_through_representations() {
    assert!(fe(0).is_zero());
    assert!(fe(P).is_zero());
    assert!(!fe(1).is_zero());
    assert!(!fe(P - 1).is_zero());
    assert!(!fe(1u128 << 127).is_zero());
}

proptest! {
    #[test]
    fn mul_matches_reference(a in any::<u128>(), b in any::<u128>()) {
        prop_assert_eq!(canon(fe(a) * fe(b)), ref_mulmod(a, b));
    }

    #[test]
    fn mul_commutes(a in any::<u128>(), b in any::<u128>()) {
        prop_assert_eq!(canon(fe(a) * fe(b)), canon(fe(b) * fe(a)));
    }

    #[test]
    fn square_equals_self_product(a in any::<u128>()) {
        prop_assert_eq!(canon(fe(a).square()), canon(fe(a) * fe(a)));
    }

    #[test]
    fn mul_small_matches_reference(a in any::<u128>(), c in any::<u16>()) {
        prop_assert_eq!(canon(fe(a).mul_small(c)), ref_mulmod(a, c as u128));
    }

    #[test]
    fn add_matches_reference(a in any::<u128>(), b in any::<u128>()) {
        prop_assert_eq!(canon(fe(a) + fe(b)), (a % P + b % P) % P);
    }

    #[test]
    fn sub_then_add_round_trips(a in any::<u128>(), b in any::<u128>()) {
        prop_assert_eq!(canon((fe(a) - fe(b)) + fe(b)), canon(fe(a)));
    }

    #[test]
    fn neg_is_additive_inverse(a in any::<u128>()) {
        prop_assert_eq!(canon(fe(a) + (-fe(a))), 0);
    }

    #[test]
    fn freeze_is_idempotent(a in any::<u128>()) {
        let once = fe(a).freeze();
        let twice = once.freeze();
        prop_assert_eq!(once.to_bytes(), twice.to_bytes());
        prop_assert!(u128::from_le_bytes(once.to_bytes()) < P);
    }

    #[test]
    fn invert_is_multiplicative_inverse(a in any::<u128>()) {
        prop_assume!(a % P != 0);
        prop_assert_eq!(canon(fe(a) * fe(a).invert()), 1);
    }

    #[test]
    fn distributes_over_addition(a in any::<u128>(), b in any::<u128>(), c in any::<u128>()) {
        let left = fe(a) * (fe(b) + fe(c));
        let right = fe(a) * fe(b) + fe(a) * fe(c);
        prop_assert_eq!(canon(left), canon(right));
    }
}
