//! ECDSA tests.

#![cfg(feature = "std")]

use proptest::prelude::*;
use weierstrass::{
    CurveGroup, Error,
    curves::{nist_p256, secp256k1},
    ecdsa::{Signature, SigningKey, VerifyingKey, check_signature, sign, verify},
    num_bigint::BigUint,
};

/// Reduce random bytes into `[1, n-1]`.
fn reduce_nonzero(group: &CurveGroup, bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes) % (group.order() - 1u32) + 1u32
}

prop_compose! {
    fn p256_signing_key()(bytes in any::<[u8; 32]>()) -> SigningKey<'static> {
        let group = nist_p256();
        SigningKey::from_scalar(group, reduce_nonzero(group, &bytes)).unwrap()
    }
}

prop_compose! {
    fn p256_nonce()(bytes in any::<[u8; 32]>()) -> BigUint {
        reduce_nonzero(nist_p256(), &bytes)
    }
}

prop_compose! {
    fn digest()(bytes in any::<[u8; 32]>()) -> BigUint {
        BigUint::from_bytes_be(&bytes)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn sign_and_verify(sk in p256_signing_key(), k in p256_nonce(), e in digest()) {
        let signature = sk.sign_digest_with_nonce(&e, &k).unwrap();
        prop_assert!(sk.verifying_key().verify(&e, &signature).is_ok());
        prop_assert!(verify(sk.verifying_key().as_point(), &e, &signature));
    }

    #[test]
    fn reject_invalid_signature(
        sk in p256_signing_key(),
        k in p256_nonce(),
        e in digest(),
        bit in 0u64..256,
        component in 0usize..3,
    ) {
        let (r, s) = sk.sign_digest_with_nonce(&e, &k).unwrap().split();
        let mut tweaked = [e, r, s];

        // tweak the digest or one of the signature components
        let flipped = !tweaked[component].bit(bit);
        tweaked[component].set_bit(bit, flipped);

        let [e, r, s] = tweaked;
        let result = sk.verifying_key().verify(&e, &Signature::new(r, s));
        prop_assert!(matches!(
            result,
            Err(Error::SignatureVerificationFailed | Error::InvalidSignatureFormat)
        ));
    }

    #[test]
    fn normalized_signature_still_verifies(
        sk in p256_signing_key(),
        k in p256_nonce(),
        e in digest(),
    ) {
        let n = nist_p256().order();
        let signature = sk.sign_digest_with_nonce(&e, &k).unwrap();
        let normalized = signature.normalize_s(n);

        prop_assert!(normalized.is_low_s(n));
        prop_assert!(sk.verifying_key().verify(&e, &normalized).is_ok());
    }
}

#[test]
fn digest_is_reduced_mod_n() {
    let group = secp256k1();
    let d = BigUint::from(0x1234u32);
    let k = BigUint::from(0x5678u32);
    let e = BigUint::from(42u32);
    let e_wrapped = &e + group.order();

    let signature = sign(group, &d, &e, &k).unwrap();
    assert_eq!(sign(group, &d, &e_wrapped, &k), Ok(signature.clone()));

    let public_key = group.new_point_from_scalar(&d.into());
    assert!(verify(&public_key, &e_wrapped, &signature));
}

#[test]
fn verifying_key_rejects_identity() {
    let group = nist_p256();
    assert_eq!(
        VerifyingKey::from_point(group.infinity_point()).err(),
        Some(Error::InvalidPublicKey)
    );
}

#[test]
fn verifying_key_from_affine() {
    let group = nist_p256();
    let generator = group.generator();
    let key = VerifyingKey::from_affine(
        group,
        generator.x().unwrap().clone(),
        generator.y().unwrap().clone(),
    )
    .unwrap();
    assert_eq!(key.as_point(), &generator);

    let off_curve = VerifyingKey::from_affine(
        group,
        generator.x().unwrap().clone(),
        generator.y().unwrap() + 1u32,
    );
    assert_eq!(off_curve.err(), Some(Error::PointNotOnCurve));
}

#[test]
fn signature_from_other_key_fails() {
    let group = secp256k1();
    let alice = SigningKey::from_scalar(group, BigUint::from(1111u32)).unwrap();
    let bob = SigningKey::from_scalar(group, BigUint::from(2222u32)).unwrap();
    let e = BigUint::from(0xabcdefu32);

    let signature = alice
        .sign_digest_with_nonce(&e, &BigUint::from(3333u32))
        .unwrap();
    assert_eq!(
        check_signature(bob.verifying_key().as_point(), &e, &signature),
        Err(Error::SignatureVerificationFailed)
    );
}

#[cfg(feature = "test-vectors")]
mod fips_vectors {
    use weierstrass::{
        CurveGroup,
        curves::{nist_p192, nist_p224, secp256k1},
        ecdsa::{Signature, SigningKey, VerifyingKey},
        num_bigint::BigUint,
        test_vectors::ecdsa::{
            P192_TEST_VECTORS, P224_TEST_VECTORS, SECP256K1_TEST_VECTORS, TestVector,
        },
    };

    fn int(bytes: &[u8]) -> BigUint {
        BigUint::from_bytes_be(bytes)
    }

    fn check_signing(group: &CurveGroup, vectors: &[TestVector]) {
        for vector in vectors {
            let sk = SigningKey::from_scalar(group, int(vector.d)).unwrap();
            let signature = sk
                .sign_digest_with_nonce(&int(vector.m), &int(vector.k))
                .unwrap();

            assert_eq!(signature.r(), &int(vector.r));
            assert_eq!(signature.s(), &int(vector.s));
        }
    }

    fn check_verification(group: &CurveGroup, vectors: &[TestVector]) {
        for vector in vectors {
            let vk = VerifyingKey::from_affine(group, int(vector.q_x), int(vector.q_y)).unwrap();
            let signature = Signature::new(int(vector.r), int(vector.s));

            assert!(vk.verify(&int(vector.m), &signature).is_ok());
            assert!(vk.verify(&(int(vector.m) + 1u32), &signature).is_err());
        }
    }

    #[test]
    fn p192_signing() {
        check_signing(nist_p192(), P192_TEST_VECTORS);
    }

    #[test]
    fn p192_verification() {
        check_verification(nist_p192(), P192_TEST_VECTORS);
    }

    #[test]
    fn p224_signing() {
        check_signing(nist_p224(), P224_TEST_VECTORS);
    }

    #[test]
    fn p224_verification() {
        check_verification(nist_p224(), P224_TEST_VECTORS);
    }

    #[test]
    fn secp256k1_signing() {
        check_signing(secp256k1(), SECP256K1_TEST_VECTORS);
        for vector in SECP256K1_TEST_VECTORS {
            let signature = Signature::new(int(vector.r), int(vector.s));
            assert!(signature.is_low_s(secp256k1().order()));
        }
    }

    #[test]
    fn secp256k1_verification() {
        check_verification(secp256k1(), SECP256K1_TEST_VECTORS);
    }
}
