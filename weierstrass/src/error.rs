//! Error type.

use core::fmt::{self, Display};

/// Result type with the `weierstrass` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised by curve arithmetic and ECDSA.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Affine coordinates do not satisfy the curve equation, or lie outside
    /// of `[0, p)`.
    PointNotOnCurve,

    /// Requested a modular inverse of a value which shares a factor with the
    /// modulus.
    NotInvertible,

    /// Signing nonce outside of `[1, n-1]`.
    InvalidNonce,

    /// The nonce produced a degenerate signature (`r == 0` or `s == 0`).
    ///
    /// The caller must pick a fresh nonce and sign again.
    RetryWithNewNonce,

    /// Signature component `r` or `s` outside of `[1, n-1]`.
    InvalidSignatureFormat,

    /// Signature is well-formed but does not verify.
    SignatureVerificationFailed,

    /// Domain parameters do not describe a valid curve group.
    InvalidCurveParameters,

    /// Point is not acceptable as a public key.
    InvalidPublicKey,

    /// Private scalar outside of `[1, n-1]`.
    InvalidPrivateKey,

    /// Operands belong to different curve groups.
    GroupMismatch,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::PointNotOnCurve => "point is not on the curve",
            Error::NotInvertible => "value is not invertible modulo the given modulus",
            Error::InvalidNonce => "nonce must be in the range [1, n-1]",
            Error::RetryWithNewNonce => "degenerate signature, retry with a new nonce",
            Error::InvalidSignatureFormat => "signature components must be in the range [1, n-1]",
            Error::SignatureVerificationFailed => "signature verification failed",
            Error::InvalidCurveParameters => "invalid curve parameters",
            Error::InvalidPublicKey => "invalid public key",
            Error::InvalidPrivateKey => "private key must be in the range [1, n-1]",
            Error::GroupMismatch => "points belong to different curve groups",
        })
    }
}

impl core::error::Error for Error {}
