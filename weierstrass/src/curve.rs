//! Curve groups: domain parameters of a short Weierstrass curve
//! `y² = x³ + a·x + b` over the prime field `𝔽p`, together with the cyclic
//! subgroup generated by `G`.

use crate::{
    Error, Point, Result,
    field::{self, add_mod, is_probable_prime, mod_sqrt, mul_mod},
    point::Coordinates,
};
use alloc::{borrow::Cow, vec::Vec};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

/// Domain parameters of a curve as big endian hex strings.
///
/// This is the form named curves are tabulated in (see the `curves`
/// module). Values are parsed and validated by
/// [`CurveGroup::from_params`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CurveParams {
    /// Curve name, e.g. `"secp256k1"`.
    pub name: &'static str,

    /// Field modulus `p`.
    pub p: &'static str,

    /// Coefficient `a`, reduced modulo `p`.
    pub a: &'static str,

    /// Coefficient `b`, reduced modulo `p`.
    pub b: &'static str,

    /// Generator x-coordinate.
    pub gx: &'static str,

    /// Generator y-coordinate.
    pub gy: &'static str,

    /// Order `n` of the generator.
    pub n: &'static str,

    /// Cofactor `h`.
    pub h: &'static str,
}

/// Elliptic curve group in short Weierstrass form.
///
/// Immutable once constructed. Points borrow the group they belong to, see
/// [`Point`].
///
/// Equality compares the domain parameters only; the name is a label.
#[derive(Clone, Debug)]
pub struct CurveGroup {
    name: Cow<'static, str>,
    p: BigUint,
    a: BigUint,
    b: BigUint,
    generator: (BigUint, BigUint),
    order: BigUint,
    cofactor: BigUint,
}

impl CurveGroup {
    /// Create a curve group from its domain parameters.
    ///
    /// Returns [`Error::InvalidCurveParameters`] unless all of the following
    /// hold:
    ///
    /// - `p` is an odd prime greater than 3 and `a, b < p`
    /// - the curve is non-singular: `4a³ + 27b² ≢ 0 (mod p)`
    /// - the generator lies on the curve
    /// - `n` is prime, `h ≥ 1` and `h·n` is within the Hasse bound
    ///   `|h·n - (p + 1)| ≤ 2√p`
    /// - `n·G` is the point at infinity
    ///
    /// Primality is checked with Miller-Rabin.
    ///
    /// `name` is either a static string or an owned one, e.g. read from
    /// configuration.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        p: BigUint,
        a: BigUint,
        b: BigUint,
        generator: (BigUint, BigUint),
        order: BigUint,
        cofactor: BigUint,
    ) -> Result<Self> {
        let group = Self {
            name: name.into(),
            p,
            a,
            b,
            generator,
            order,
            cofactor,
        };

        if let Err(_reason) = group.validate() {
            debug!(curve = group.name(), reason = _reason, "rejected curve parameters");
            return Err(Error::InvalidCurveParameters);
        }

        Ok(group)
    }

    /// Parse and validate tabulated [`CurveParams`].
    pub fn from_params(params: &CurveParams) -> Result<Self> {
        let parse = |hex: &str| {
            BigUint::parse_bytes(hex.as_bytes(), 16).ok_or(Error::InvalidCurveParameters)
        };

        Self::new(
            params.name,
            parse(params.p)?,
            parse(params.a)?,
            parse(params.b)?,
            (parse(params.gx)?, parse(params.gy)?),
            parse(params.n)?,
            parse(params.h)?,
        )
    }

    /// Check the invariants documented on [`CurveGroup::new`].
    fn validate(&self) -> core::result::Result<(), &'static str> {
        let p = &self.p;

        if p <= &BigUint::from(3u32) || !p.bit(0) || !is_probable_prime(p) {
            return Err("field modulus is not an odd prime greater than 3");
        }

        if &self.a >= p || &self.b >= p {
            return Err("coefficients are not reduced modulo p");
        }

        let a3 = mul_mod(&mul_mod(&self.a, &self.a, p), &self.a, p);
        let b2 = mul_mod(&self.b, &self.b, p);
        let discriminant = add_mod(
            &mul_mod(&BigUint::from(4u32), &a3, p),
            &mul_mod(&BigUint::from(27u32), &b2, p),
            p,
        );
        if discriminant.is_zero() {
            return Err("curve is singular");
        }

        let (gx, gy) = &self.generator;
        if gx >= p || gy >= p || !self.satisfies_equation(gx, gy) {
            return Err("generator is not on the curve");
        }

        if !is_probable_prime(&self.order) {
            return Err("group order is not prime");
        }

        if self.cofactor.is_zero() {
            return Err("cofactor is zero");
        }

        // Hasse: (h·n - (p + 1))² ≤ 4p
        let trace = BigInt::from_biguint(Sign::Plus, &self.cofactor * &self.order)
            - BigInt::from_biguint(Sign::Plus, p + 1u32);
        if trace.magnitude() * trace.magnitude() > p * 4u32 {
            return Err("order and cofactor violate the Hasse bound");
        }

        if !self.generator().mul_magnitude(&self.order).is_infinity() {
            return Err("generator does not have order n");
        }

        Ok(())
    }

    /// Name of this curve.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field modulus `p`.
    pub fn prime(&self) -> &BigUint {
        &self.p
    }

    /// Coefficient `a` of the curve equation.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient `b` of the curve equation.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Order `n` of the subgroup generated by [`CurveGroup::generator`].
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// Cofactor `h`: index of the generated subgroup in the curve group.
    pub fn cofactor(&self) -> &BigUint {
        &self.cofactor
    }

    /// Base point `G`.
    pub fn generator(&self) -> Point<'_> {
        let (x, y) = &self.generator;
        Point::new_unchecked(
            self,
            Coordinates::Affine {
                x: x.clone(),
                y: y.clone(),
            },
        )
    }

    /// Additive identity of the group a.k.a. the point at infinity.
    pub fn infinity_point(&self) -> Point<'_> {
        Point::new_unchecked(self, Coordinates::Infinity)
    }

    /// Create a point from affine coordinates.
    ///
    /// Returns [`Error::PointNotOnCurve`] if either coordinate is not in
    /// `[0, p)` or the curve equation does not hold.
    pub fn new_point(&self, x: BigUint, y: BigUint) -> Result<Point<'_>> {
        if x >= self.p || y >= self.p || !self.satisfies_equation(&x, &y) {
            return Err(Error::PointNotOnCurve);
        }

        Ok(Point::new_unchecked(self, Coordinates::Affine { x, y }))
    }

    /// Multiply the generator by `scalar`, i.e. derive the public key of the
    /// private key `scalar`.
    pub fn new_point_from_scalar(&self, scalar: &BigInt) -> Point<'_> {
        self.generator().multiply_by_scalar(scalar)
    }

    /// All `y` in `[0, p)` such that `(x, y)` is on the curve, in ascending
    /// order.
    pub fn solve_for_y(&self, x: &BigUint) -> Vec<BigUint> {
        if x >= &self.p {
            return Vec::new();
        }

        match mod_sqrt(&self.equation_rhs(x), &self.p) {
            None => Vec::new(),
            Some(root) if root.is_zero() => alloc::vec![root],
            Some(root) => {
                let other = &self.p - &root;
                if root < other {
                    alloc::vec![root, other]
                } else {
                    alloc::vec![other, root]
                }
            }
        }
    }

    /// Recover a point from its x-coordinate and the parity of its
    /// y-coordinate.
    pub fn point_from_x(&self, x: BigUint, y_is_odd: bool) -> Result<Point<'_>> {
        let y = self
            .solve_for_y(&x)
            .into_iter()
            .find(|y| y.bit(0) == y_is_odd)
            .ok_or(Error::PointNotOnCurve)?;

        Ok(Point::new_unchecked(self, Coordinates::Affine { x, y }))
    }

    /// Check that `point` is acceptable as a public key of this group.
    ///
    /// The point must belong to this group, must not be the identity, and
    /// when the cofactor is not 1 it must lie in the subgroup of order `n`.
    pub fn validate_public_key(&self, point: &Point<'_>) -> Result<()> {
        if !point.belongs_to(self) {
            return Err(Error::GroupMismatch);
        }

        if point.is_infinity() || !point.is_on_curve() {
            debug!(curve = self.name(), "public key is the identity or off the curve");
            return Err(Error::InvalidPublicKey);
        }

        if !self.cofactor.is_one() && !point.mul_magnitude(&self.order).is_infinity() {
            debug!(curve = self.name(), "public key is outside of the prime order subgroup");
            return Err(Error::InvalidPublicKey);
        }

        Ok(())
    }

    /// Compute `k₁·P₁ + k₂·P₂ + ...` with a single chain of doublings.
    ///
    /// # Panics
    ///
    /// If any of the points belongs to a different group.
    pub fn lincomb<'g>(&'g self, terms: &[(&Point<'g>, &BigInt)]) -> Point<'g> {
        let terms = terms
            .iter()
            .map(|(point, scalar)| {
                assert!(point.belongs_to(self), "point belongs to a different curve group");
                let base = match scalar.sign() {
                    Sign::Minus => point.negate(),
                    _ => (*point).clone(),
                };
                (base, scalar.magnitude())
            })
            .collect::<Vec<_>>();

        let bits = terms.iter().map(|(_, k)| k.bits()).max().unwrap_or(0);
        let mut acc = self.infinity_point();

        for i in (0..bits).rev() {
            acc = acc.double();
            for (base, k) in &terms {
                if k.bit(i) {
                    acc = acc.add_unchecked(base);
                }
            }
        }

        acc
    }

    /// Does `(x, y)` satisfy `y² ≡ x³ + a·x + b (mod p)`?
    pub(crate) fn satisfies_equation(&self, x: &BigUint, y: &BigUint) -> bool {
        mul_mod(y, y, &self.p) == self.equation_rhs(x)
    }

    /// `x³ + a·x + b mod p`
    fn equation_rhs(&self, x: &BigUint) -> BigUint {
        let p = &self.p;
        let x3 = mul_mod(&mul_mod(x, x, p), x, p);
        add_mod(&add_mod(&x3, &mul_mod(&self.a, x, p), p), &self.b, p)
    }

    /// Do both groups have the same domain parameters?
    fn same_parameters(&self, other: &Self) -> bool {
        self.p == other.p
            && self.a == other.a
            && self.b == other.b
            && self.generator == other.generator
            && self.order == other.order
            && self.cofactor == other.cofactor
    }

    /// Invert a nonzero field element.
    ///
    /// # Panics
    ///
    /// If `value` is not invertible, which only happens for zero or a
    /// composite modulus slipping past the primality test.
    pub(crate) fn invert_field_element(&self, value: &BigUint) -> BigUint {
        field::invert(value, &self.p)
            .unwrap_or_else(|_| panic!("{}: field element has no inverse", self.name))
    }
}

impl Eq for CurveGroup {}

impl PartialEq for CurveGroup {
    fn eq(&self, other: &Self) -> bool {
        self.same_parameters(other)
    }
}
