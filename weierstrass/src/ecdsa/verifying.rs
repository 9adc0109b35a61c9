//! Support for verifying ECDSA signatures.

use super::{Signature, check_signature};
use crate::{CurveGroup, Point, Result};
use num_bigint::BigUint;

/// ECDSA public key used for verifying signatures.
///
/// Unlike a bare [`Point`], a [`VerifyingKey`] has been checked with
/// [`CurveGroup::validate_public_key`]: it is not the identity and lies in
/// the subgroup generated by `G`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerifyingKey<'g> {
    /// Signer's public key.
    point: Point<'g>,
}

impl<'g> VerifyingKey<'g> {
    /// Initialize [`VerifyingKey`] from a public key point.
    pub fn from_point(point: Point<'g>) -> Result<Self> {
        point.group().validate_public_key(&point)?;
        Ok(Self { point })
    }

    /// Initialize [`VerifyingKey`] from affine coordinates.
    pub fn from_affine(group: &'g CurveGroup, x: BigUint, y: BigUint) -> Result<Self> {
        Self::from_point(group.new_point(x, y)?)
    }

    /// Borrow the public key point.
    pub fn as_point(&self) -> &Point<'g> {
        &self.point
    }

    /// Group of this key.
    pub fn group(&self) -> &'g CurveGroup {
        self.point.group()
    }

    /// Verify `signature` over the digest integer `digest`.
    pub fn verify(&self, digest: &BigUint, signature: &Signature) -> Result<()> {
        check_signature(&self.point, digest, signature)
    }
}

impl<'g> From<VerifyingKey<'g>> for Point<'g> {
    fn from(verifying_key: VerifyingKey<'g>) -> Point<'g> {
        verifying_key.point
    }
}
