//! Curve points and the group law.

use crate::{
    CurveGroup, Error, Result,
    field::{add_mod, mul_mod, sub_mod},
};
use core::{
    fmt,
    ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign},
};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

/// Coordinates of a curve point.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Coordinates {
    /// The point at infinity, i.e. the identity element.
    Infinity,

    /// Affine coordinates, both in `[0, p)`.
    Affine {
        /// x-coordinate
        x: BigUint,

        /// y-coordinate
        y: BigUint,
    },
}

/// Point on a [`CurveGroup`].
///
/// Points borrow the group they belong to. Every point obtained through the
/// public API lies on its curve; all operations return new points.
#[derive(Clone)]
pub struct Point<'g> {
    group: &'g CurveGroup,
    coordinates: Coordinates,
}

impl<'g> Point<'g> {
    /// Caller guarantees `coordinates` are on the curve of `group`.
    pub(crate) fn new_unchecked(group: &'g CurveGroup, coordinates: Coordinates) -> Self {
        Self { group, coordinates }
    }

    /// Group this point belongs to.
    pub fn group(&self) -> &'g CurveGroup {
        self.group
    }

    /// Coordinates of this point.
    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    /// Affine x-coordinate, `None` for the point at infinity.
    pub fn x(&self) -> Option<&BigUint> {
        match &self.coordinates {
            Coordinates::Infinity => None,
            Coordinates::Affine { x, .. } => Some(x),
        }
    }

    /// Affine y-coordinate, `None` for the point at infinity.
    pub fn y(&self) -> Option<&BigUint> {
        match &self.coordinates {
            Coordinates::Infinity => None,
            Coordinates::Affine { y, .. } => Some(y),
        }
    }

    /// Is this point the point at infinity?
    pub fn is_infinity(&self) -> bool {
        matches!(self.coordinates, Coordinates::Infinity)
    }

    /// Does this point satisfy the curve equation of its group?
    ///
    /// Always true for the point at infinity.
    pub fn is_on_curve(&self) -> bool {
        match &self.coordinates {
            Coordinates::Infinity => true,
            Coordinates::Affine { x, y } => {
                let p = self.group.prime();
                x < p && y < p && self.group.satisfies_equation(x, y)
            }
        }
    }

    /// Returns `-self`.
    pub fn negate(&self) -> Self {
        match &self.coordinates {
            Coordinates::Infinity => self.clone(),
            Coordinates::Affine { x, y } => self.with_coordinates(
                x.clone(),
                sub_mod(&BigUint::zero(), y, self.group.prime()),
            ),
        }
    }

    /// Returns `self + other`.
    ///
    /// # Panics
    ///
    /// If `other` belongs to a different group. See
    /// [`Point::checked_add`] for a fallible version.
    pub fn add_point(&self, other: &Self) -> Self {
        assert!(
            self.belongs_to(other.group),
            "cannot add points of different curve groups"
        );
        self.add_unchecked(other)
    }

    /// Returns `self + other`, or [`Error::GroupMismatch`] if the points
    /// belong to different groups.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        if !self.belongs_to(other.group) {
            return Err(Error::GroupMismatch);
        }
        Ok(self.add_unchecked(other))
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Self {
        let (x, y) = match &self.coordinates {
            Coordinates::Infinity => return self.clone(),
            // vertical tangent at a point of order two
            Coordinates::Affine { y, .. } if y.is_zero() => return self.group.infinity_point(),
            Coordinates::Affine { x, y } => (x, y),
        };

        let p = self.group.prime();

        // λ = (3x² + a) / 2y
        let numerator = add_mod(
            &mul_mod(&BigUint::from(3u32), &mul_mod(x, x, p), p),
            self.group.a(),
            p,
        );
        let denominator = add_mod(y, y, p);
        let lambda = mul_mod(
            &numerator,
            &self.group.invert_field_element(&denominator),
            p,
        );

        self.line_through(&lambda, x, x, y)
    }

    /// Returns `k·self`.
    ///
    /// `k` does not need to be reduced modulo the group order. Negative
    /// scalars multiply the negated point.
    pub fn multiply_by_scalar(&self, k: &BigInt) -> Self {
        let product = self.mul_magnitude(k.magnitude());
        match k.sign() {
            Sign::Minus => product.negate(),
            _ => product,
        }
    }

    /// Do `self` and `group` refer to the same curve group?
    pub(crate) fn belongs_to(&self, group: &CurveGroup) -> bool {
        core::ptr::eq(self.group, group) || self.group == group
    }

    /// Group law without the group membership check.
    pub(crate) fn add_unchecked(&self, other: &Self) -> Self {
        let ((x1, y1), (x2, y2)) = match (&self.coordinates, &other.coordinates) {
            (Coordinates::Infinity, _) => return other.clone(),
            (_, Coordinates::Infinity) => return self.clone(),
            (Coordinates::Affine { x: x1, y: y1 }, Coordinates::Affine { x: x2, y: y2 }) => {
                ((x1, y1), (x2, y2))
            }
        };

        let p = self.group.prime();

        if x1 == x2 {
            if add_mod(y1, y2, p).is_zero() {
                // mutual negatives
                return self.group.infinity_point();
            }

            // on the curve, equal x and y₂ ≠ -y₁ means the points coincide
            return self.double();
        }

        // λ = (y₂ - y₁) / (x₂ - x₁)
        let lambda = mul_mod(
            &sub_mod(y2, y1, p),
            &self.group.invert_field_element(&sub_mod(x2, x1, p)),
            p,
        );

        self.line_through(&lambda, x1, x2, y1)
    }

    /// Double-and-add over the bits of `k`, most significant first.
    pub(crate) fn mul_magnitude(&self, k: &BigUint) -> Self {
        let mut acc = self.group.infinity_point();
        if self.is_infinity() {
            return acc;
        }

        for i in (0..k.bits()).rev() {
            acc = acc.double();
            if k.bit(i) {
                acc = acc.add_unchecked(self);
            }
        }

        acc
    }

    /// Third intersection of the line with slope `λ` through `(x₁, y₁)` and
    /// `(x₂, ·)`, reflected over the x-axis.
    fn line_through(&self, lambda: &BigUint, x1: &BigUint, x2: &BigUint, y1: &BigUint) -> Self {
        let p = self.group.prime();
        let x3 = sub_mod(&sub_mod(&mul_mod(lambda, lambda, p), x1, p), x2, p);
        let y3 = sub_mod(&mul_mod(lambda, &sub_mod(x1, &x3, p), p), y1, p);
        self.with_coordinates(x3, y3)
    }

    fn with_coordinates(&self, x: BigUint, y: BigUint) -> Self {
        Self::new_unchecked(self.group, Coordinates::Affine { x, y })
    }
}

impl PartialEq for Point<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.belongs_to(other.group) && self.coordinates == other.coordinates
    }
}

impl Eq for Point<'_> {}

impl fmt::Debug for Point<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Point")
            .field("group", &self.group.name())
            .field("coordinates", &self.coordinates)
            .finish()
    }
}

impl fmt::Display for Point<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coordinates {
            Coordinates::Infinity => f.write_str("infinity"),
            Coordinates::Affine { x, y } => write!(f, "({x:#x}, {y:#x})"),
        }
    }
}

//
// Operator impls
//

impl<'g> Add<&Point<'g>> for &Point<'g> {
    type Output = Point<'g>;

    fn add(self, other: &Point<'g>) -> Point<'g> {
        self.add_point(other)
    }
}

impl<'g> Add<&Point<'g>> for Point<'g> {
    type Output = Point<'g>;

    fn add(self, other: &Point<'g>) -> Point<'g> {
        self.add_point(other)
    }
}

impl<'g> Add<Point<'g>> for Point<'g> {
    type Output = Point<'g>;

    fn add(self, other: Point<'g>) -> Point<'g> {
        self.add_point(&other)
    }
}

impl<'g> AddAssign<&Point<'g>> for Point<'g> {
    fn add_assign(&mut self, rhs: &Point<'g>) {
        *self = self.add_point(rhs);
    }
}

impl<'g> Sub<&Point<'g>> for &Point<'g> {
    type Output = Point<'g>;

    fn sub(self, other: &Point<'g>) -> Point<'g> {
        self.add_point(&other.negate())
    }
}

impl<'g> Sub<&Point<'g>> for Point<'g> {
    type Output = Point<'g>;

    fn sub(self, other: &Point<'g>) -> Point<'g> {
        self.add_point(&other.negate())
    }
}

impl<'g> SubAssign<&Point<'g>> for Point<'g> {
    fn sub_assign(&mut self, rhs: &Point<'g>) {
        *self = self.add_point(&rhs.negate());
    }
}

impl<'g> Neg for &Point<'g> {
    type Output = Point<'g>;

    fn neg(self) -> Point<'g> {
        self.negate()
    }
}

impl<'g> Neg for Point<'g> {
    type Output = Point<'g>;

    fn neg(self) -> Point<'g> {
        self.negate()
    }
}

impl<'g> Mul<&BigInt> for &Point<'g> {
    type Output = Point<'g>;

    fn mul(self, scalar: &BigInt) -> Point<'g> {
        self.multiply_by_scalar(scalar)
    }
}

impl<'g> Mul<&BigUint> for &Point<'g> {
    type Output = Point<'g>;

    fn mul(self, scalar: &BigUint) -> Point<'g> {
        self.mul_magnitude(scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{string::ToString, vec::Vec};

    /// y² = x³ + 2x + 2 over 𝔽₁₇, generator (5, 1) of order 19.
    fn toy() -> CurveGroup {
        CurveGroup::new(
            "toy17",
            BigUint::from(17u32),
            BigUint::from(2u32),
            BigUint::from(2u32),
            (BigUint::from(5u32), BigUint::from(1u32)),
            BigUint::from(19u32),
            BigUint::from(1u32),
        )
        .unwrap()
    }

    fn affine(x: u32, y: u32) -> Coordinates {
        Coordinates::Affine {
            x: BigUint::from(x),
            y: BigUint::from(y),
        }
    }

    /// Multiples 1·G through 18·G of the toy curve's generator.
    const MULTIPLES: [(u32, u32); 18] = [
        (5, 1),
        (6, 3),
        (10, 6),
        (3, 1),
        (9, 16),
        (16, 13),
        (0, 6),
        (13, 7),
        (7, 6),
        (7, 11),
        (13, 10),
        (0, 11),
        (16, 4),
        (9, 1),
        (3, 16),
        (10, 11),
        (6, 14),
        (5, 16),
    ];

    #[test]
    fn repeated_addition_matches_table() {
        let group = toy();
        let g = group.generator();
        let mut p = g.clone();

        for (x, y) in MULTIPLES {
            assert_eq!(p.coordinates(), &affine(x, y));
            p += &g;
        }

        assert!(p.is_infinity());
    }

    #[test]
    fn scalar_multiplication_matches_table() {
        let group = toy();
        let g = group.generator();

        for (k, (x, y)) in MULTIPLES.into_iter().enumerate() {
            let k = BigInt::from(k + 1);
            assert_eq!(g.multiply_by_scalar(&k).coordinates(), &affine(x, y));
        }

        assert!(g.multiply_by_scalar(&BigInt::from(19)).is_infinity());
        assert_eq!(g.multiply_by_scalar(&BigInt::from(20)), g);
        assert_eq!(g.multiply_by_scalar(&BigInt::from(-1)).coordinates(), &affine(5, 16));
    }

    #[test]
    fn identity_cases() {
        let group = toy();
        let g = group.generator();
        let o = group.infinity_point();

        assert_eq!(&g + &o, g);
        assert_eq!(&o + &g, g);
        assert_eq!(&o + &o, o);
        assert_eq!(o.double(), o);
        assert_eq!(o.negate(), o);
        assert!(o.is_on_curve());
        assert!(o.multiply_by_scalar(&BigInt::from(7)).is_infinity());
        assert_eq!(&g - &g, o);
    }

    #[test]
    fn points_of_order_two_double_to_infinity() {
        // y² = x³ + x over 𝔽₁₉ has the 2-torsion point (0, 0); it is only
        // reachable through the group law, not as a generator
        let group = CurveGroup::new(
            "order2",
            BigUint::from(19u32),
            BigUint::from(1u32),
            BigUint::from(0u32),
            (BigUint::from(5u32), BigUint::from(4u32)),
            BigUint::from(5u32),
            BigUint::from(4u32),
        )
        .unwrap();

        let t = group
            .new_point(BigUint::zero(), BigUint::zero())
            .unwrap();
        assert!(t.double().is_infinity());
        assert!((&t + &t).is_infinity());
        assert_eq!(t.negate(), t);
    }

    #[test]
    fn points_from_other_groups_do_not_mix() {
        let a = toy();
        let b = CurveGroup::new(
            "toy17-twin",
            BigUint::from(17u32),
            BigUint::from(2u32),
            BigUint::from(2u32),
            (BigUint::from(6u32), BigUint::from(3u32)),
            BigUint::from(19u32),
            BigUint::from(1u32),
        )
        .unwrap();

        assert_eq!(
            a.generator().checked_add(&b.generator()).err(),
            Some(Error::GroupMismatch)
        );
        assert_ne!(a.infinity_point(), b.infinity_point());
        assert_eq!(a.infinity_point(), a.clone().infinity_point());
    }

    #[test]
    fn lincomb_matches_separate_products() {
        let group = toy();
        let g = group.generator();
        let q = g.multiply_by_scalar(&BigInt::from(7));

        for (k1, k2) in [(0, 0), (3, 5), (18, 1), (-4, 11), (25, -30)] {
            let (k1, k2) = (BigInt::from(k1), BigInt::from(k2));
            let expected = &(&g * &k1) + &(&q * &k2);
            assert_eq!(group.lincomb(&[(&g, &k1), (&q, &k2)]), expected);
        }
    }

    #[test]
    fn display() {
        let group = toy();
        assert_eq!(group.infinity_point().to_string(), "infinity");
        assert_eq!(group.generator().to_string(), "(0x5, 0x1)");
    }

    #[test]
    fn every_multiple_is_on_curve() {
        let group = toy();
        let g = group.generator();
        let points = (0..19)
            .map(|k| g.multiply_by_scalar(&BigInt::from(k)))
            .collect::<Vec<_>>();

        assert!(points.iter().all(Point::is_on_curve));
        for p in &points {
            for q in &points {
                assert_eq!(p + q, q + p);
            }
        }
    }
}
