//! Group law tests for the built-in curves and a curve defined at runtime.

#![cfg(feature = "std")]

mod secp256k1 {
    #[cfg(not(feature = "test-vectors"))]
    weierstrass::impl_group_law_tests!(weierstrass::curves::secp256k1());

    #[cfg(feature = "test-vectors")]
    use weierstrass::test_vectors::group::{
        SECP256K1_ADD_TEST_VECTORS, SECP256K1_MUL_TEST_VECTORS,
    };
    #[cfg(feature = "test-vectors")]
    weierstrass::impl_group_law_tests!(
        weierstrass::curves::secp256k1(),
        SECP256K1_ADD_TEST_VECTORS,
        SECP256K1_MUL_TEST_VECTORS
    );

    #[test]
    fn curve_equation_has_no_linear_term() {
        let group = weierstrass::curves::secp256k1();
        assert_eq!(group.a(), &BigUint::from(0u32));
        assert_eq!(group.b(), &BigUint::from(7u32));
    }
}

mod nist_p192 {
    weierstrass::impl_group_law_tests!(weierstrass::curves::nist_p192());
}

mod nist_p224 {
    weierstrass::impl_group_law_tests!(weierstrass::curves::nist_p224());
}

mod nist_p256 {
    #[cfg(not(feature = "test-vectors"))]
    weierstrass::impl_group_law_tests!(weierstrass::curves::nist_p256());

    #[cfg(feature = "test-vectors")]
    use weierstrass::test_vectors::group::{
        NIST_P256_ADD_TEST_VECTORS, NIST_P256_MUL_TEST_VECTORS,
    };
    #[cfg(feature = "test-vectors")]
    weierstrass::impl_group_law_tests!(
        weierstrass::curves::nist_p256(),
        NIST_P256_ADD_TEST_VECTORS,
        NIST_P256_MUL_TEST_VECTORS
    );
}

mod nist_p384 {
    #[cfg(not(feature = "test-vectors"))]
    weierstrass::impl_group_law_tests!(weierstrass::curves::nist_p384());

    #[cfg(feature = "test-vectors")]
    use weierstrass::test_vectors::group::{
        NIST_P384_ADD_TEST_VECTORS, NIST_P384_MUL_TEST_VECTORS,
    };
    #[cfg(feature = "test-vectors")]
    weierstrass::impl_group_law_tests!(
        weierstrass::curves::nist_p384(),
        NIST_P384_ADD_TEST_VECTORS,
        NIST_P384_MUL_TEST_VECTORS
    );
}

mod nist_p521 {
    weierstrass::impl_group_law_tests!(weierstrass::curves::nist_p521());
}

/// brainpoolP256r1, a curve with a generic `a` that has no built-in table.
mod brainpool_p256r1 {
    use std::sync::LazyLock;
    use weierstrass::{CurveGroup, CurveParams};

    const BRAINPOOL_P256R1: CurveParams = CurveParams {
        name: "brainpoolP256r1",
        p: "a9fb57dba1eea9bc3e660a909d838d726e3bf623d52620282013481d1f6e5377",
        a: "7d5a0975fc2c3057eef67530417affe7fb8055c126dc5c6ce94a4b44f330b5d9",
        b: "26dc5c6ce94a4b44f330b5d9bbd77cbf958416295cf7e1ce6bccdc18ff8c07b6",
        gx: "8bd2aeb9cb7e57cb2c4b482ffc81b7afb9de27e1e3bd23c23a4453bd9ace3262",
        gy: "547ef835c3dac4fd97f8461a14611dc9c27745132ded8e545c1d54c72f046997",
        n: "a9fb57dba1eea9bc3e660a909d838d718c397aa3b561a6f7901e0e82974856a7",
        h: "1",
    };

    static GROUP: LazyLock<CurveGroup> =
        LazyLock::new(|| CurveGroup::from_params(&BRAINPOOL_P256R1).unwrap());

    weierstrass::impl_group_law_tests!(&*GROUP);
}
