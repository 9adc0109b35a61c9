//! Parameters of widely deployed named curves.
//!
//! The tables are plain [`CurveParams`] constants. With the `std` or
//! `critical-section` feature enabled, each curve also has an accessor
//! returning a `&'static` [`CurveGroup`] which is validated and built once,
//! on first use.

use crate::CurveParams;

#[cfg(any(feature = "critical-section", feature = "std"))]
use crate::CurveGroup;

#[cfg(feature = "critical-section")]
use once_cell::sync::Lazy as LazyLock;
#[cfg(all(feature = "std", not(feature = "critical-section")))]
use std::sync::LazyLock;

/// secp256k1 (K-256), the SECG Koblitz curve used by Bitcoin and Ethereum.
///
/// ```text
/// y² = x³ + 7
/// ```
pub const SECP256K1: CurveParams = CurveParams {
    name: "secp256k1",
    p: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
    a: "0",
    b: "7",
    gx: "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
    gy: "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
    n: "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
    h: "1",
};

/// NIST P-192 (secp192r1).
///
/// ```text
/// y² = x³ - 3x + b
/// ```
pub const NIST_P192: CurveParams = CurveParams {
    name: "P-192",
    p: "fffffffffffffffffffffffffffffffeffffffffffffffff",
    a: "fffffffffffffffffffffffffffffffefffffffffffffffc",
    b: "64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1",
    gx: "188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012",
    gy: "07192b95ffc8da78631011ed6b24cdd573f977a11e794811",
    n: "ffffffffffffffffffffffff99def836146bc9b1b4d22831",
    h: "1",
};

/// NIST P-224 (secp224r1).
///
/// ```text
/// y² = x³ - 3x + b
/// ```
pub const NIST_P224: CurveParams = CurveParams {
    name: "P-224",
    p: "ffffffffffffffffffffffffffffffff000000000000000000000001",
    a: "fffffffffffffffffffffffffffffffefffffffffffffffffffffffe",
    b: "b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4",
    gx: "b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21",
    gy: "bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34",
    n: "ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d",
    h: "1",
};

/// NIST P-256 (secp256r1, prime256v1).
///
/// ```text
/// y² = x³ - 3x + b
/// ```
pub const NIST_P256: CurveParams = CurveParams {
    name: "P-256",
    p: "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
    a: "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc",
    b: "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
    gx: "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
    gy: "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
    n: "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
    h: "1",
};

/// NIST P-384 (secp384r1).
///
/// ```text
/// y² = x³ - 3x + b
/// ```
pub const NIST_P384: CurveParams = CurveParams {
    name: "P-384",
    p: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff",
    a: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000fffffffc",
    b: "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875ac656398d8a2ed19d2a85c8edd3ec2aef",
    gx: "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a385502f25dbf55296c3a545e3872760ab7",
    gy: "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c00a60b1ce1d7e819d7a431d7c90ea0e5f",
    n: "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973",
    h: "1",
};

/// NIST P-521 (secp521r1).
///
/// ```text
/// y² = x³ - 3x + b
/// ```
pub const NIST_P521: CurveParams = CurveParams {
    name: "P-521",
    p: "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
    a: "01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffc",
    b: "0051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef109e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b503f00",
    gx: "00c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5bd66",
    gy: "011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd16650",
    n: "01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e91386409",
    h: "1",
};

/// Define a lazily initialized accessor for a built-in curve.
macro_rules! named_group {
    ($(#[$attr:meta])* $fn:ident, $params:expr) => {
        $(#[$attr])*
        #[cfg(any(feature = "critical-section", feature = "std"))]
        pub fn $fn() -> &'static CurveGroup {
            static GROUP: LazyLock<CurveGroup> = LazyLock::new(|| {
                CurveGroup::from_params(&$params).expect("built-in curve parameters are valid")
            });
            &GROUP
        }
    };
}

named_group!(
    /// The [`SECP256K1`] group.
    secp256k1,
    SECP256K1
);

named_group!(
    /// The [`NIST_P192`] group.
    nist_p192,
    NIST_P192
);

named_group!(
    /// The [`NIST_P224`] group.
    nist_p224,
    NIST_P224
);

named_group!(
    /// The [`NIST_P256`] group.
    nist_p256,
    NIST_P256
);

named_group!(
    /// The [`NIST_P384`] group.
    nist_p384,
    NIST_P384
);

named_group!(
    /// The [`NIST_P521`] group.
    nist_p521,
    NIST_P521
);
