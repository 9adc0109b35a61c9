//! Support for computing ECDSA signatures.

use super::{Signature, VerifyingKey, sign};
use crate::{CurveGroup, Error, Result};
use core::fmt::{self, Debug};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

/// ECDSA secret key used for signing digests.
///
/// Nonce generation is up to the caller, see [`sign`] for its
/// requirements.
#[derive(Clone)]
pub struct SigningKey<'g> {
    /// Secret scalar `d` in `[1, n-1]`.
    secret_scalar: BigUint,

    /// Verifying key for this signing key.
    verifying_key: VerifyingKey<'g>,
}

impl<'g> SigningKey<'g> {
    /// Create a signing key from a secret scalar.
    ///
    /// Returns [`Error::InvalidPrivateKey`] unless `1 ≤ scalar ≤ n-1`.
    pub fn from_scalar(group: &'g CurveGroup, secret_scalar: BigUint) -> Result<Self> {
        if secret_scalar.is_zero() || &secret_scalar >= group.order() {
            return Err(Error::InvalidPrivateKey);
        }

        let public_key =
            group.new_point_from_scalar(&BigInt::from_biguint(Sign::Plus, secret_scalar.clone()));
        let verifying_key = VerifyingKey::from_point(public_key)?;

        Ok(Self {
            secret_scalar,
            verifying_key,
        })
    }

    /// Borrow the secret scalar for this key.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    ///
    /// Please treat it with the care it deserves!
    pub fn as_scalar(&self) -> &BigUint {
        &self.secret_scalar
    }

    /// Get the [`VerifyingKey`] which corresponds to this [`SigningKey`].
    pub fn verifying_key(&self) -> &VerifyingKey<'g> {
        &self.verifying_key
    }

    /// Sign the digest integer `digest` with an explicit nonce.
    pub fn sign_digest_with_nonce(&self, digest: &BigUint, nonce: &BigUint) -> Result<Signature> {
        sign(
            self.verifying_key.group(),
            &self.secret_scalar,
            digest,
            nonce,
        )
    }
}

impl Debug for SigningKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

impl Eq for SigningKey<'_> {}

impl PartialEq for SigningKey<'_> {
    fn eq(&self, other: &SigningKey<'_>) -> bool {
        self.secret_scalar == other.secret_scalar && self.verifying_key == other.verifying_key
    }
}
