//! Elliptic Curve Digital Signature Algorithm (ECDSA)
//!
//! Signing and verification over any [`CurveGroup`], as specified in
//! FIPS 186-4 and SEC1 section 4.1. Digest computation, the conversion of a
//! digest into the integer `e`, and nonce generation (e.g. RFC6979) are left
//! to the caller.
//!
//! ## Algorithm
//!
//! ```text
//! sign(d, e, k):
//!   R = k·G, r = R.x mod n                 retry with a new k if r = 0
//!   s = k⁻¹·(e + r·d) mod n                retry with a new k if s = 0
//!
//! verify(Q, e, (r, s)):
//!   require r, s in [1, n-1]
//!   w = s⁻¹ mod n, u₁ = e·w mod n, u₂ = r·w mod n
//!   P = u₁·G + u₂·Q                        reject if P = O
//!   accept iff P.x mod n = r
//! ```

mod signing;
mod verifying;

pub use self::{signing::SigningKey, verifying::VerifyingKey};

use crate::{
    CurveGroup, Error, Point, Result,
    field::{add_mod, invert, mul_mod},
};
use core::fmt;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

/// ECDSA signature: the pair `(r, s)`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Create a signature from its components.
    ///
    /// No range checks are performed here; verification rejects
    /// components outside of `[1, n-1]`.
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// The `r` component.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// The `s` component.
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Split into `(r, s)`.
    pub fn split(self) -> (BigUint, BigUint) {
        (self.r, self.s)
    }

    /// Is `s` in the lower half of `[1, n-1]`?
    pub fn is_low_s(&self, order: &BigUint) -> bool {
        self.s <= order >> 1u32
    }

    /// Normalize to the "low S" form, replacing `s` with `n - s` when `s` is
    /// in the upper half of the range.
    ///
    /// Both forms verify under the same key; some protocols (e.g. Bitcoin)
    /// only accept the low form.
    pub fn normalize_s(&self, order: &BigUint) -> Self {
        if self.is_low_s(order) || &self.s >= order {
            self.clone()
        } else {
            Self::new(self.r.clone(), order - &self.s)
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(r: {:#x}, s: {:#x})", self.r, self.s)
    }
}

/// Sign the digest integer `digest` with the private scalar `private_key`
/// using the nonce `nonce`.
///
/// Returns [`Error::InvalidNonce`] unless `1 ≤ nonce ≤ n-1`, and
/// [`Error::RetryWithNewNonce`] if the nonce yields `r = 0` or `s = 0`.
///
/// # ⚠️ Warning
///
/// The nonce must be secret, unpredictable and never reused: two
/// signatures sharing a nonce reveal the private key.
pub fn sign(
    group: &CurveGroup,
    private_key: &BigUint,
    digest: &BigUint,
    nonce: &BigUint,
) -> Result<Signature> {
    let n = group.order();

    if nonce.is_zero() || nonce >= n {
        return Err(Error::InvalidNonce);
    }

    let big_r = group.generator().mul_magnitude(nonce);
    let r = match big_r.x() {
        Some(x) => x % n,
        None => BigUint::zero(),
    };
    if r.is_zero() {
        debug!(curve = group.name(), "degenerate nonce: r = 0");
        return Err(Error::RetryWithNewNonce);
    }

    let k_inv = invert(nonce, n)?;
    let s = mul_mod(
        &k_inv,
        &add_mod(&(digest % n), &mul_mod(&r, private_key, n), n),
        n,
    );
    if s.is_zero() {
        debug!(curve = group.name(), "degenerate nonce: s = 0");
        return Err(Error::RetryWithNewNonce);
    }

    Ok(Signature::new(r, s))
}

/// Verify `signature` over the digest integer `digest` against
/// `public_key`.
///
/// Returns `false` for malformed signatures as well as for signatures that
/// do not verify; see [`check_signature`] for the reason.
pub fn verify(public_key: &Point<'_>, digest: &BigUint, signature: &Signature) -> bool {
    check_signature(public_key, digest, signature).is_ok()
}

/// Verify `signature` over the digest integer `digest` against
/// `public_key`, reporting why verification failed.
///
/// # Errors
///
/// - [`Error::InvalidSignatureFormat`]: `r` or `s` outside of `[1, n-1]`
/// - [`Error::InvalidPublicKey`]: `public_key` is the point at infinity
/// - [`Error::SignatureVerificationFailed`]: the signature does not verify
pub fn check_signature(
    public_key: &Point<'_>,
    digest: &BigUint,
    signature: &Signature,
) -> Result<()> {
    let group = public_key.group();
    let n = group.order();
    let (r, s) = (signature.r(), signature.s());

    if r.is_zero() || r >= n || s.is_zero() || s >= n {
        debug!(curve = group.name(), "signature components out of range");
        return Err(Error::InvalidSignatureFormat);
    }

    if public_key.is_infinity() {
        debug!(curve = group.name(), "public key is the point at infinity");
        return Err(Error::InvalidPublicKey);
    }

    let w = invert(s, n)?;
    let u1 = BigInt::from_biguint(Sign::Plus, mul_mod(&(digest % n), &w, n));
    let u2 = BigInt::from_biguint(Sign::Plus, mul_mod(r, &w, n));

    let generator = group.generator();
    let point = group.lincomb(&[(&generator, &u1), (public_key, &u2)]);

    match point.x() {
        Some(x) if &(x % n) == r => Ok(()),
        Some(_) => {
            debug!(curve = group.name(), "signature mismatch");
            Err(Error::SignatureVerificationFailed)
        }
        None => {
            debug!(curve = group.name(), "u1·G + u2·Q is the point at infinity");
            Err(Error::SignatureVerificationFailed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_vectors::ecdsa::{NIST_EXAMPLES, TestVector};

    fn int(bytes: &[u8]) -> BigUint {
        BigUint::from_bytes_be(bytes)
    }

    /// y² = x³ + 2x + 2 over 𝔽₁₇, generator (5, 1) of order 19.
    fn toy() -> CurveGroup {
        CurveGroup::new(
            "toy17",
            BigUint::from(17u32),
            BigUint::from(2u32),
            BigUint::from(2u32),
            (BigUint::from(5u32), BigUint::from(1u32)),
            BigUint::from(19u32),
            BigUint::from(1u32),
        )
        .unwrap()
    }

    fn check_example(group: &CurveGroup, vector: &TestVector) {
        let d = int(vector.d);
        let e = int(vector.m);
        let k = int(vector.k);
        let expected = Signature::new(int(vector.r), int(vector.s));

        let public_key = group
            .new_point(int(vector.q_x), int(vector.q_y))
            .unwrap();
        assert_eq!(
            group.new_point_from_scalar(&BigInt::from_biguint(Sign::Plus, d.clone())),
            public_key
        );

        let signature = sign(group, &d, &e, &k).unwrap();
        assert_eq!(signature, expected);
        assert!(verify(&public_key, &e, &signature));
        assert_eq!(check_signature(&public_key, &e, &signature), Ok(()));

        // flip the lowest bit of e, r and s in turn
        let flip = |v: &BigUint| v ^ BigUint::from(1u32);
        assert!(!verify(&public_key, &flip(&e), &signature));
        for bit in [1, e.bits() / 2, e.bits() - 1, e.bits()] {
            let mut tweaked = e.clone();
            tweaked.set_bit(bit, !e.bit(bit));
            assert!(!verify(&public_key, &tweaked, &signature), "bit {bit} of e");
        }
        assert!(!verify(
            &public_key,
            &e,
            &Signature::new(flip(signature.r()), signature.s().clone())
        ));
        assert!(!verify(
            &public_key,
            &e,
            &Signature::new(signature.r().clone(), flip(signature.s()))
        ));
    }

    #[test]
    fn nist_examples() {
        for (params, vector) in NIST_EXAMPLES {
            let group = CurveGroup::from_params(params).unwrap();
            check_example(&group, vector);
        }
    }

    #[test]
    fn nonce_out_of_range() {
        let group = toy();
        let (d, e) = (BigUint::from(7u32), BigUint::from(10u32));

        assert_eq!(sign(&group, &d, &e, &BigUint::zero()), Err(Error::InvalidNonce));
        assert_eq!(sign(&group, &d, &e, &BigUint::from(19u32)), Err(Error::InvalidNonce));
        assert_eq!(sign(&group, &d, &e, &BigUint::from(40u32)), Err(Error::InvalidNonce));
    }

    #[test]
    fn degenerate_nonces_are_reported() {
        let group = toy();
        let d = BigUint::from(7u32);

        // k = 7: 7·G = (0, 6) so r = 0
        assert_eq!(
            sign(&group, &d, &BigUint::from(10u32), &BigUint::from(7u32)),
            Err(Error::RetryWithNewNonce)
        );

        // k = 1: r = 5, s = e + 5·7 = e + 35 ≡ 0 (mod 19) for e = 3
        assert_eq!(
            sign(&group, &d, &BigUint::from(3u32), &BigUint::from(1u32)),
            Err(Error::RetryWithNewNonce)
        );
    }

    #[test]
    fn toy_round_trip() {
        let group = toy();
        let d = BigUint::from(7u32);
        let public_key = group.new_point_from_scalar(&BigInt::from(7));

        for k in 1..19u32 {
            for e in [0u32, 1, 10, 18, 19, 100] {
                let e = BigUint::from(e);
                match sign(&group, &d, &e, &BigUint::from(k)) {
                    Ok(signature) => assert!(verify(&public_key, &e, &signature)),
                    Err(err) => assert_eq!(err, Error::RetryWithNewNonce),
                }
            }
        }
    }

    #[test]
    fn out_of_range_signature_components() {
        let group = toy();
        let public_key = group.new_point_from_scalar(&BigInt::from(7));
        let e = BigUint::from(10u32);
        let n = group.order().clone();

        for (r, s) in [
            (BigUint::zero(), BigUint::from(1u32)),
            (BigUint::from(1u32), BigUint::zero()),
            (n.clone(), BigUint::from(1u32)),
            (BigUint::from(1u32), n + 1u32),
        ] {
            let signature = Signature::new(r, s);
            assert!(!verify(&public_key, &e, &signature));
            assert_eq!(
                check_signature(&public_key, &e, &signature),
                Err(Error::InvalidSignatureFormat)
            );
        }
    }

    #[test]
    fn infinity_is_not_a_public_key() {
        let group = toy();
        let signature = sign(
            &group,
            &BigUint::from(7u32),
            &BigUint::from(10u32),
            &BigUint::from(2u32),
        )
        .unwrap();

        assert_eq!(
            check_signature(&group.infinity_point(), &BigUint::from(10u32), &signature),
            Err(Error::InvalidPublicKey)
        );
    }

    #[test]
    fn low_s_normalization() {
        let n = BigUint::from(19u32);
        let high = Signature::new(BigUint::from(5u32), BigUint::from(15u32));
        let low = high.normalize_s(&n);

        assert!(!high.is_low_s(&n));
        assert!(low.is_low_s(&n));
        assert_eq!(low.s(), &BigUint::from(4u32));
        assert_eq!(low.normalize_s(&n), low);
    }
}
