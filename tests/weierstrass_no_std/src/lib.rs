//! Build check for `weierstrass` without `std`.

#![no_std]

use weierstrass::{
    CurveGroup, Result, curves,
    ecdsa::{self, Signature},
    num_bigint::BigUint,
};

/// Sign with a curve built from the tabulated P-256 parameters.
pub fn sign_p256(d: &BigUint, e: &BigUint, k: &BigUint) -> Result<Signature> {
    let group = CurveGroup::from_params(&curves::NIST_P256)?;
    ecdsa::sign(&group, d, e, k)
}

/// Sign with the lazily built secp256k1 group.
#[cfg(feature = "critical-section")]
pub fn sign_secp256k1(d: &BigUint, e: &BigUint, k: &BigUint) -> Result<Signature> {
    ecdsa::sign(curves::secp256k1(), d, e, k)
}
