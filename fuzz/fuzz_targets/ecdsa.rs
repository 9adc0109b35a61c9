#![no_main]
use libfuzzer_sys::fuzz_target;
use weierstrass::{
    Error, curves,
    ecdsa::{Signature, SigningKey, check_signature},
    num_bigint::BigUint,
};

fuzz_target!(|data: &[u8]| {
    if data.len() < 96 {
        return;
    }

    let group = curves::nist_p256();
    let d = BigUint::from_bytes_be(&data[..32]);
    let k = BigUint::from_bytes_be(&data[32..64]);
    let e = BigUint::from_bytes_be(&data[64..96]);

    let Ok(sk) = SigningKey::from_scalar(group, d) else {
        return;
    };

    match sk.sign_digest_with_nonce(&e, &k) {
        Ok(signature) => {
            assert!(sk.verifying_key().verify(&e, &signature).is_ok());

            // arbitrary trailing bytes as a forged signature must never panic
            let (r, s) = data[96..].split_at(data[96..].len() / 2);
            let forged = Signature::new(BigUint::from_bytes_be(r), BigUint::from_bytes_be(s));
            if forged != signature {
                let _ = check_signature(sk.verifying_key().as_point(), &e, &forged);
            }
        }
        Err(err) => assert!(matches!(err, Error::InvalidNonce | Error::RetryWithNewNonce)),
    }
});
