//! Modular arithmetic tests.

use num_integer::Integer;
use proptest::prelude::*;
use weierstrass::{
    Error,
    field::{is_probable_prime, mod_inverse, mod_pow, mod_reduce, mod_sqrt},
    num_bigint::{BigInt, BigUint, Sign},
};

/// NIST P-256 field modulus, `p ≡ 3 (mod 4)`.
const P256_MODULUS: &str = "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff";

/// NIST P-224 field modulus, `p ≡ 1 (mod 2^96)`.
const P224_MODULUS: &str = "ffffffffffffffffffffffffffffffff000000000000000000000001";

fn modulus(hex: &str) -> BigUint {
    BigUint::parse_bytes(hex.as_bytes(), 16).unwrap()
}

prop_compose! {
    fn signed()(bytes in any::<[u8; 40]>(), negative in any::<bool>()) -> BigInt {
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        BigInt::from_bytes_be(sign, &bytes)
    }
}

prop_compose! {
    fn odd_modulus()(bytes in any::<[u8; 24]>()) -> BigUint {
        BigUint::from_bytes_be(&bytes) | BigUint::from(3u32)
    }
}

proptest! {
    #[test]
    fn reduce_is_in_range(value in signed(), m in odd_modulus()) {
        let reduced = mod_reduce(&value, &m);
        prop_assert!(reduced < m);

        let difference = value - BigInt::from(reduced);
        prop_assert!(difference.is_multiple_of(&BigInt::from(m)));
    }

    #[test]
    fn inverse_times_value_is_one(value in signed(), m in odd_modulus()) {
        let reduced = mod_reduce(&value, &m);
        let gcd = BigInt::from(reduced.clone()).gcd(&BigInt::from(m.clone()));

        match mod_inverse(&value, &m) {
            Ok(inverse) => {
                prop_assert!(gcd == BigInt::from(1));
                prop_assert_eq!(reduced * inverse % &m, BigUint::from(1u32));
            }
            Err(err) => {
                prop_assert_eq!(err, Error::NotInvertible);
                prop_assert!(gcd != BigInt::from(1));
            }
        }
    }

    #[test]
    fn inverse_modulo_prime(value in signed()) {
        let p = modulus(P256_MODULUS);
        prop_assume!(mod_reduce(&value, &p).bits() != 0);

        let inverse = mod_inverse(&value, &p).unwrap();
        prop_assert_eq!(mod_reduce(&(value * BigInt::from(inverse)), &p), BigUint::from(1u32));
    }

    #[test]
    fn sqrt_of_square(bytes in any::<[u8; 32]>()) {
        for p in [modulus(P256_MODULUS), modulus(P224_MODULUS)] {
            let x = BigUint::from_bytes_be(&bytes) % &p;
            let square = mod_pow(&x, &BigUint::from(2u32), &p);
            let root = mod_sqrt(&square, &p).unwrap();

            prop_assert!(root == x || root == (&p - &x) % &p);
        }
    }
}

#[test]
fn inverse_of_non_coprime_value() {
    let m = BigUint::from(100u32);
    for value in [0i64, 10, 25, -50, 200] {
        assert_eq!(
            mod_inverse(&BigInt::from(value), &m),
            Err(Error::NotInvertible)
        );
    }
    assert_eq!(
        mod_inverse(&BigInt::from(3), &m),
        Ok(BigUint::from(67u32))
    );
}

#[test]
fn non_residues_have_no_root() {
    let p = modulus(P224_MODULUS);
    let mut non_residues = 0;

    for value in (1u32..64).map(BigUint::from) {
        match mod_sqrt(&value, &p) {
            Some(root) => assert_eq!(&root * &root % &p, value),
            None => non_residues += 1,
        }
    }

    assert_eq!(non_residues, 16);
}

#[test]
fn named_moduli_are_prime() {
    assert!(is_probable_prime(&modulus(P256_MODULUS)));
    assert!(is_probable_prime(&modulus(P224_MODULUS)));
    assert!(!is_probable_prime(&(modulus(P256_MODULUS) + 2u32)));

    // Carmichael numbers
    for composite in [561u32, 41041, 825265] {
        assert!(!is_probable_prime(&BigUint::from(composite)));
    }
}
