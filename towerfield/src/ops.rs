//! Operator impls shared by the extension field types.

/// Implements the arithmetic operator traits for an extension type in terms of its
/// inherent `add`, `sub`, `multiply` and `neg` methods.
macro_rules! impl_ext_ops {
    (@binary $ty:ident, $config:ident, $op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $inner:ident) => {
        impl<C: $config> core::ops::$op for $ty<C> {
            type Output = Self;

            #[inline]
            fn $op_fn(self, rhs: Self) -> Self {
                $ty::$inner(&self, &rhs)
            }
        }

        impl<C: $config> core::ops::$op<&$ty<C>> for $ty<C> {
            type Output = Self;

            #[inline]
            fn $op_fn(self, rhs: &Self) -> Self {
                $ty::$inner(&self, rhs)
            }
        }

        impl<C: $config> core::ops::$op<&$ty<C>> for &$ty<C> {
            type Output = $ty<C>;

            #[inline]
            fn $op_fn(self, rhs: &$ty<C>) -> $ty<C> {
                $ty::$inner(self, rhs)
            }
        }

        impl<C: $config> core::ops::$assign for $ty<C> {
            #[inline]
            fn $assign_fn(&mut self, rhs: Self) {
                *self = $ty::$inner(self, &rhs);
            }
        }

        impl<C: $config> core::ops::$assign<&$ty<C>> for $ty<C> {
            #[inline]
            fn $assign_fn(&mut self, rhs: &Self) {
                *self = $ty::$inner(self, rhs);
            }
        }
    };
    ($ty:ident, $config:ident) => {
        $crate::ops::impl_ext_ops!(@binary $ty, $config, Add, add, AddAssign, add_assign, add);
        $crate::ops::impl_ext_ops!(@binary $ty, $config, Sub, sub, SubAssign, sub_assign, sub);
        $crate::ops::impl_ext_ops!(@binary $ty, $config, Mul, mul, MulAssign, mul_assign, multiply);

        impl<C: $config> core::ops::Neg for $ty<C> {
            type Output = Self;

            fn neg(self) -> Self {
                $ty::neg(&self)
            }
        }

        impl<C: $config> core::ops::Neg for &$ty<C> {
            type Output = $ty<C>;

            fn neg(self) -> $ty<C> {
                $ty::neg(self)
            }
        }

        impl<C: $config> core::iter::Sum for $ty<C> {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.reduce(|a, b| a + b).unwrap_or(Self::ZERO)
            }
        }

        impl<'a, C: $config> core::iter::Sum<&'a $ty<C>> for $ty<C> {
            fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.copied().sum()
            }
        }

        impl<C: $config> core::iter::Product for $ty<C> {
            fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.reduce(|a, b| a * b).unwrap_or(Self::ONE)
            }
        }

        impl<'a, C: $config> core::iter::Product<&'a $ty<C>> for $ty<C> {
            fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.copied().product()
            }
        }
    };
}

pub(crate) use impl_ext_ops;
