//! Internal macros.

/// Define borrow and non-borrow variants of `Add` from `&LHS + &RHS`.
macro_rules! define_add_variants {
    (Params = $params:ident, LHS = $lhs:ident, RHS = $rhs:ident, Output = $out:ident) => {
        impl<'b, C: $params> Add<&'b $rhs<C>> for $lhs<C> {
            type Output = $out<C>;

            fn add(self, rhs: &'b $rhs<C>) -> $out<C> {
                &self + rhs
            }
        }

        impl<'a, C: $params> Add<$rhs<C>> for &'a $lhs<C> {
            type Output = $out<C>;

            fn add(self, rhs: $rhs<C>) -> $out<C> {
                self + &rhs
            }
        }

        impl<C: $params> Add<$rhs<C>> for $lhs<C> {
            type Output = $out<C>;

            fn add(self, rhs: $rhs<C>) -> $out<C> {
                &self + &rhs
            }
        }
    };
}

/// Define `AddAssign` variants from `&LHS + &RHS`.
macro_rules! define_add_assign_variants {
    (Params = $params:ident, LHS = $lhs:ident, RHS = $rhs:ident) => {
        impl<'b, C: $params> AddAssign<&'b $rhs<C>> for $lhs<C> {
            fn add_assign(&mut self, rhs: &'b $rhs<C>) {
                *self = &*self + rhs;
            }
        }

        impl<C: $params> AddAssign<$rhs<C>> for $lhs<C> {
            fn add_assign(&mut self, rhs: $rhs<C>) {
                *self += &rhs;
            }
        }
    };
}

/// Define borrow and non-borrow variants of `Sub` from `&LHS - &RHS`.
macro_rules! define_sub_variants {
    (Params = $params:ident, LHS = $lhs:ident, RHS = $rhs:ident, Output = $out:ident) => {
        impl<'b, C: $params> Sub<&'b $rhs<C>> for $lhs<C> {
            type Output = $out<C>;

            fn sub(self, rhs: &'b $rhs<C>) -> $out<C> {
                &self - rhs
            }
        }

        impl<'a, C: $params> Sub<$rhs<C>> for &'a $lhs<C> {
            type Output = $out<C>;

            fn sub(self, rhs: $rhs<C>) -> $out<C> {
                self - &rhs
            }
        }

        impl<C: $params> Sub<$rhs<C>> for $lhs<C> {
            type Output = $out<C>;

            fn sub(self, rhs: $rhs<C>) -> $out<C> {
                &self - &rhs
            }
        }
    };
}

/// Define `SubAssign` variants from `&LHS - &RHS`.
macro_rules! define_sub_assign_variants {
    (Params = $params:ident, LHS = $lhs:ident, RHS = $rhs:ident) => {
        impl<'b, C: $params> SubAssign<&'b $rhs<C>> for $lhs<C> {
            fn sub_assign(&mut self, rhs: &'b $rhs<C>) {
                *self = &*self - rhs;
            }
        }

        impl<C: $params> SubAssign<$rhs<C>> for $lhs<C> {
            fn sub_assign(&mut self, rhs: $rhs<C>) {
                *self -= &rhs;
            }
        }
    };
}

pub(crate) use {
    define_add_assign_variants, define_add_variants, define_sub_assign_variants,
    define_sub_variants,
};
