//! Modular arithmetic over arbitrary-precision integers.
//!
//! The same helpers serve two moduli: the field prime `p` (curve
//! coordinates) and the group order `n` (ECDSA scalars).

use crate::{Error, Result};
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Bases used for Miller-Rabin. Deterministic below 3.3 * 10^24, and a
/// negligible error probability above.
const MILLER_RABIN_BASES: [u32; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Reduce `value` into `[0, modulus)`.
///
/// Unlike `%`, negative inputs map to a non-negative representative.
///
/// # Panics
///
/// If `modulus` is zero.
pub fn mod_reduce(value: &BigInt, modulus: &BigUint) -> BigUint {
    let modulus = BigInt::from_biguint(Sign::Plus, modulus.clone());
    // `mod_floor` takes the sign of the (positive) divisor
    value.mod_floor(&modulus).into_parts().1
}

/// Compute `x` such that `value * x ≡ 1 (mod modulus)` using the extended
/// Euclidean algorithm.
///
/// Returns [`Error::NotInvertible`] if `gcd(value, modulus) != 1`, which
/// includes `value ≡ 0`, or if `modulus` is zero.
pub fn mod_inverse(value: &BigInt, modulus: &BigUint) -> Result<BigUint> {
    if modulus.is_zero() {
        return Err(Error::NotInvertible);
    }

    let m = BigInt::from_biguint(Sign::Plus, modulus.clone());
    let (mut old_r, mut r) = (value.mod_floor(&m), m);
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());

    while !r.is_zero() {
        let q = &old_r / &r;
        let next_r = &old_r - &q * &r;
        old_r = core::mem::replace(&mut r, next_r);
        let next_s = &old_s - &q * &s;
        old_s = core::mem::replace(&mut s, next_s);
    }

    // `old_r` is now gcd(value, modulus)
    if !old_r.is_one() && !modulus.is_one() {
        return Err(Error::NotInvertible);
    }

    Ok(mod_reduce(&old_s, modulus))
}

/// Compute `base^exponent mod modulus`.
///
/// # Panics
///
/// If `modulus` is zero.
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    base.modpow(exponent, modulus)
}

/// Compute a square root of `value` modulo an odd `prime` with the
/// Tonelli-Shanks algorithm.
///
/// Returns `None` if `value` is a quadratic non-residue. The other root, if
/// distinct, is `prime - root`. A composite `prime` yields `None` or a root,
/// but always terminates.
///
/// # Panics
///
/// If `prime` is zero.
pub fn mod_sqrt(value: &BigUint, prime: &BigUint) -> Option<BigUint> {
    let a = value % prime;
    if a.is_zero() {
        return Some(a);
    }

    let one = BigUint::one();
    let p_minus_1 = prime - &one;
    let legendre_exp = &p_minus_1 >> 1u32;

    // Euler's criterion
    if a.modpow(&legendre_exp, prime) != one {
        return None;
    }

    // p ≡ 3 (mod 4)
    if prime.bit(1) {
        let root = a.modpow(&((prime + &one) >> 2u32), prime);
        return is_root(&root, &a, prime).then_some(root);
    }

    // p - 1 = q * 2^s with q odd
    let s = p_minus_1.trailing_zeros()?;
    let q = &p_minus_1 >> s;

    // a non-residue exists below `prime` only if it is actually prime
    let mut z = BigUint::from(2u32);
    while z.modpow(&legendre_exp, prime) != p_minus_1 {
        z += 1u32;
        if &z >= prime {
            return None;
        }
    }

    let mut m = s;
    let mut c = z.modpow(&q, prime);
    let mut t = a.modpow(&q, prime);
    let mut root = a.modpow(&((&q + &one) >> 1u32), prime);

    while !t.is_one() {
        // least i in (0, m) with t^(2^i) == 1
        let mut i = 0;
        let mut t2i = t.clone();
        while !t2i.is_one() {
            t2i = &t2i * &t2i % prime;
            i += 1;
            if i >= m {
                return None;
            }
        }

        let b = c.modpow(&(BigUint::one() << (m - i - 1)), prime);
        root = root * &b % prime;
        c = &b * &b % prime;
        t = t * &c % prime;
        m = i;
    }

    is_root(&root, &a, prime).then_some(root)
}

/// `root² ≡ a (mod m)`
fn is_root(root: &BigUint, a: &BigUint, m: &BigUint) -> bool {
    &(root * root % m) == a
}

/// Miller-Rabin probable prime test.
pub fn is_probable_prime(candidate: &BigUint) -> bool {
    let two = BigUint::from(2u32);
    if candidate < &two {
        return false;
    }

    for base in MILLER_RABIN_BASES {
        let base = BigUint::from(base);
        if candidate == &base {
            return true;
        }
        if (candidate % &base).is_zero() {
            return false;
        }
    }

    let one = BigUint::one();
    let n_minus_1 = candidate - &one;
    let Some(s) = n_minus_1.trailing_zeros() else {
        return false;
    };
    let d = &n_minus_1 >> s;

    'witness: for base in MILLER_RABIN_BASES {
        let mut x = BigUint::from(base).modpow(&d, candidate);
        if x == one || x == n_minus_1 {
            continue;
        }
        for _ in 1..s {
            x = &x * &x % candidate;
            if x == n_minus_1 {
                continue 'witness;
            }
        }
        return false;
    }

    true
}

/// `(a + b) mod m`
pub(crate) fn add_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a + b) % m
}

/// `(a - b) mod m`
pub(crate) fn sub_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a + m - (b % m)) % m
}

/// `(a * b) mod m`
pub(crate) fn mul_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    a * b % m
}

/// Inverse of a non-negative value modulo `m`.
pub(crate) fn invert(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    mod_inverse(&BigInt::from_biguint(Sign::Plus, a.clone()), m)
}
