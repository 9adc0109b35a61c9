#![no_main]
// Targets: secp256k1, P-192, P-224, P-256, P-384, P-521
use libfuzzer_sys::fuzz_target;
use weierstrass::{
    CurveGroup, Point, curves,
    num_bigint::{BigInt, BigUint, Sign},
};

fn test_group(p1: &Point<'_>, p2: &Point<'_>, s: &BigInt) {
    let group = p1.group();
    let sum = p1 + p2;
    let scalar_mul = p1 * s;

    // Test that addition and doubling are consistent
    assert_eq!(p1.double(), &(p1 + p1) - &group.infinity_point());

    // Test that negation works correctly
    assert!((&sum + &sum.negate()).is_infinity());
    assert!(sum.is_on_curve());

    // Test scalar multiplication distributive property
    assert_eq!(&scalar_mul + &scalar_mul, p1 * &(s + s));
}

/// Decode a point from untrusted bytes, falling back to the generator.
fn decode_point<'g>(group: &'g CurveGroup, bytes: &[u8]) -> Point<'g> {
    let (first, rest) = bytes.split_first().expect("non-empty input");
    let x = BigUint::from_bytes_be(rest);
    group
        .point_from_x(x.clone(), first & 1 == 1)
        .or_else(|_| group.new_point(x, BigUint::from_bytes_be(&bytes[..bytes.len() / 2])))
        .unwrap_or_else(|_| group.generator())
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 160 {
        return;
    }

    for group in [
        curves::secp256k1(),
        curves::nist_p192(),
        curves::nist_p224(),
        curves::nist_p256(),
        curves::nist_p384(),
        curves::nist_p521(),
    ] {
        let len = group.prime().bits().div_ceil(8) as usize;
        let p1 = decode_point(group, &data[..len.min(64) + 1]);
        let p2 = decode_point(group, &data[32..32 + len.min(64) + 1]);
        let sign = if data[0] & 0x80 == 0 { Sign::Plus } else { Sign::Minus };
        let scalar = BigInt::from_bytes_be(sign, &data[96..160]);

        test_group(&p1, &p2, &scalar);
    }
});
