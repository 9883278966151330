//! Point arithmetic implementation optimised for different curve equations
//!
//! Support for formulas specialized to the short Weierstrass equation's
//! 𝒂-coefficient.

use super::{AffinePoint, ProjectivePoint, WeierstrassParams};
use subtle::ConditionallySelectable;
use towerfield::Field;

mod sealed {
    use crate::weierstrass::{AffinePoint, ProjectivePoint, WeierstrassParams};

    /// Elliptic point arithmetic implementation
    ///
    /// Provides implementation of point arithmetic (point addition, point doubling) which
    /// might be optimized for the curve.
    pub trait PointArithmetic<C: WeierstrassParams> {
        /// Returns `lhs + rhs`
        fn add(lhs: &ProjectivePoint<C>, rhs: &ProjectivePoint<C>) -> ProjectivePoint<C>;

        /// Returns `lhs + rhs`
        fn add_mixed(lhs: &ProjectivePoint<C>, rhs: &AffinePoint<C>) -> ProjectivePoint<C>;

        /// Returns `point + point`
        fn double(point: &ProjectivePoint<C>) -> ProjectivePoint<C>;
    }
}

pub(crate) use sealed::PointArithmetic;

/// `3b`, the constant shared by every complete formula.
fn b3<C: WeierstrassParams>() -> C::Base {
    C::B.double() + C::B
}

/// The 𝒂-coefficient of the short Weierstrass equation does not have specific
/// properties which allow for an optimized implementation. Used by the MNT curves.
#[derive(Clone, Copy, Debug)]
pub struct EquationAIsGeneric {}

impl<C: WeierstrassParams> PointArithmetic<C> for EquationAIsGeneric {
    /// Implements complete addition for any curve
    ///
    /// Implements the complete addition formula from [Renes-Costello-Batina 2015]
    /// (Algorithm 1). The comments after each line indicate which algorithm steps
    /// are being performed.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    fn add(lhs: &ProjectivePoint<C>, rhs: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        let b3 = b3::<C>();
        let a = C::A;

        let t0 = lhs.x * rhs.x; // 1
        let t1 = lhs.y * rhs.y; // 2
        let t2 = lhs.z * rhs.z; // 3
        let t3 = (lhs.x + lhs.y) * (rhs.x + rhs.y) - (t0 + t1); // 4, 5, 6, 7, 8
        let t4 = (lhs.x + lhs.z) * (rhs.x + rhs.z) - (t0 + t2); // 9, 10, 11, 12, 13
        let t5 = (lhs.y + lhs.z) * (rhs.y + rhs.z) - (t1 + t2); // 14, 15, 16, 17, 18
        let z3 = b3 * t2 + a * t4; // 19, 20, 21
        let x3 = t1 - z3; // 22
        let z3 = t1 + z3; // 23
        let y3 = x3 * z3; // 24
        let t1 = t0.double() + t0 + a * t2; // 25, 26, 27, 29
        let t2 = a * (t0 - a * t2); // 30, 31
        let t4 = b3 * t4 + t2; // 28, 32
        let y3 = y3 + t1 * t4; // 33, 34

        ProjectivePoint {
            x: t3 * x3 - t5 * t4,  // 35, 36, 37
            y: y3,
            z: t5 * z3 + t3 * t1,  // 38, 39, 40
        }
    }

    /// Implements complete mixed addition for curves with any `a`
    ///
    /// Implements the complete mixed addition formula from [Renes-Costello-Batina 2015]
    /// (Algorithm 2). The comments after each line indicate which algorithm
    /// steps are being performed.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    fn add_mixed(lhs: &ProjectivePoint<C>, rhs: &AffinePoint<C>) -> ProjectivePoint<C> {
        let b3 = b3::<C>();
        let a = C::A;

        let t0 = lhs.x * rhs.x; // 1
        let t1 = lhs.y * rhs.y; // 2
        let t3 = (rhs.x + rhs.y) * (lhs.x + lhs.y) - (t0 + t1); // 3, 4, 5, 6, 7
        let t4 = rhs.x * lhs.z + lhs.x; // 8, 9
        let t5 = rhs.y * lhs.z + lhs.y; // 10, 11
        let z3 = a * t4 + b3 * lhs.z; // 12, 13, 14
        let x3 = t1 - z3; // 15
        let z3 = t1 + z3; // 16
        let y3 = x3 * z3; // 17
        let t2 = a * lhs.z; // 20
        let t1 = t0.double() + t0 + t2; // 18, 19, 22
        let t4 = b3 * t4 + a * (t0 - t2); // 21, 23, 24, 25
        let y3 = y3 + t1 * t4; // 26, 27

        let mut ret = ProjectivePoint {
            x: t3 * x3 - t5 * t4, // 28, 29, 30
            y: y3,
            z: t5 * z3 + t3 * t1, // 31, 32, 33
        };
        ret.conditional_assign(lhs, rhs.is_identity());
        ret
    }

    /// Implements point doubling for curves with any `a`
    ///
    /// Implements the exception-free point doubling formula from [Renes-Costello-Batina 2015]
    /// (Algorithm 3). The comments after each line indicate which algorithm
    /// steps are being performed.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    fn double(point: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        let b3 = b3::<C>();
        let a = C::A;

        let t0 = point.x.square(); // 1
        let t1 = point.y.square(); // 2
        let t2 = point.z.square(); // 3
        let t3 = (point.x * point.y).double(); // 4, 5
        let z3 = (point.x * point.z).double(); // 6, 7
        let y3 = a * z3 + b3 * t2; // 8, 9, 10
        let x3 = t1 - y3; // 11
        let y3 = x3 * (t1 + y3); // 12, 13
        let x3 = t3 * x3; // 14
        let z3 = b3 * z3; // 15
        let t2 = a * t2; // 16
        let t3 = a * (t0 - t2) + z3; // 17, 18, 19
        let t0 = (t0.double() + t0 + t2) * t3; // 20, 21, 22, 23
        let y3 = y3 + t0; // 24
        let t2 = (point.y * point.z).double(); // 25, 26
        let x3 = x3 - t2 * t3; // 27, 28
        let z3 = (t2 * t1).double().double(); // 29, 30, 31

        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }
}

/// The 𝒂-coefficient of the short Weierstrass equation is zero. Used by the BLS12 and
/// BN curves and their twists.
#[derive(Clone, Copy, Debug)]
pub struct EquationAIsZero {}

impl<C: WeierstrassParams> PointArithmetic<C> for EquationAIsZero {
    /// Implements complete addition for curves with `a = 0`
    ///
    /// Implements the complete addition formula from [Renes-Costello-Batina 2015]
    /// (Algorithm 7). The comments after each line indicate which algorithm steps
    /// are being performed.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    fn add(lhs: &ProjectivePoint<C>, rhs: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        debug_assert!(bool::from(C::A.is_zero()), "only valid for C::A = 0");
        let b3 = b3::<C>();

        let t0 = lhs.x * rhs.x; // 1
        let t1 = lhs.y * rhs.y; // 2
        let t2 = lhs.z * rhs.z; // 3
        let t3 = (lhs.x + lhs.y) * (rhs.x + rhs.y) - (t0 + t1); // 4, 5, 6, 7, 8
        let t4 = (lhs.y + lhs.z) * (rhs.y + rhs.z) - (t1 + t2); // 9, 10, 11, 12, 13
        let y3 = (lhs.x + lhs.z) * (rhs.x + rhs.z) - (t0 + t2); // 14, 15, 16, 17, 18
        let t0 = t0.double() + t0; // 19, 20
        let t2 = b3 * t2; // 21
        let z3 = t1 + t2; // 22
        let t1 = t1 - t2; // 23
        let y3 = b3 * y3; // 24

        ProjectivePoint {
            x: t3 * t1 - t4 * y3,  // 25, 26, 27
            y: t1 * z3 + y3 * t0,  // 28, 29, 30
            z: z3 * t4 + t0 * t3,  // 31, 32, 33
        }
    }

    /// Implements complete mixed addition for curves with `a = 0`
    ///
    /// Implements the complete mixed addition formula from [Renes-Costello-Batina 2015]
    /// (Algorithm 8). The comments after each line indicate which algorithm
    /// steps are being performed.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    fn add_mixed(lhs: &ProjectivePoint<C>, rhs: &AffinePoint<C>) -> ProjectivePoint<C> {
        debug_assert!(bool::from(C::A.is_zero()), "only valid for C::A = 0");
        let b3 = b3::<C>();

        let t0 = lhs.x * rhs.x; // 1
        let t1 = lhs.y * rhs.y; // 2
        let t3 = (rhs.x + rhs.y) * (lhs.x + lhs.y) - (t0 + t1); // 3, 4, 5, 6, 7
        let t4 = rhs.y * lhs.z + lhs.y; // 8, 9
        let y3 = rhs.x * lhs.z + lhs.x; // 10, 11
        let t0 = t0.double() + t0; // 12, 13
        let t2 = b3 * lhs.z; // 14
        let z3 = t1 + t2; // 15
        let t1 = t1 - t2; // 16
        let y3 = b3 * y3; // 17

        let mut ret = ProjectivePoint {
            x: t3 * t1 - t4 * y3, // 18, 19, 20
            y: t1 * z3 + y3 * t0, // 21, 22, 23
            z: z3 * t4 + t0 * t3, // 24, 25, 26
        };
        ret.conditional_assign(lhs, rhs.is_identity());
        ret
    }

    /// Implements point doubling for curves with `a = 0`
    ///
    /// Implements the exception-free point doubling formula from [Renes-Costello-Batina 2015]
    /// (Algorithm 9). The comments after each line indicate which algorithm
    /// steps are being performed.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    fn double(point: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        debug_assert!(bool::from(C::A.is_zero()), "only valid for C::A = 0");
        let b3 = b3::<C>();

        let t0 = point.y.square(); // 1
        let z3 = t0.double().double().double(); // 2, 3, 4
        let t1 = point.y * point.z; // 5
        let t2 = b3 * point.z.square(); // 6, 7
        let x3 = t2 * z3; // 8
        let y3 = t0 + t2; // 9
        let z3 = t1 * z3; // 10
        let t2 = t2.double() + t2; // 11, 12
        let t0 = t0 - t2; // 13
        let y3 = x3 + t0 * y3; // 14, 15
        let x3 = (t0 * point.x * point.y).double(); // 16, 17, 18

        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }
}
