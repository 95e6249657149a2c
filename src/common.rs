// Copyright 2018 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

#![allow(missing_docs)]

use core::f64::consts::PI;

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            /// Special implementation for `rem_euclid`, because libm only has `fmod`.
            fn rem_euclid(self, rhs: Self) -> Self;

            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            #[inline]
            fn rem_euclid(self, rhs: f64) -> f64 {
                let r = self.fmod(rhs);
                if r < 0.0 {
                    r + rhs.abs()
                } else {
                    r
                }
            }

            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("biarc requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn atan2(self, other: Self) -> Self => atan2;
    fn cos(self) -> Self => cos;
    fn fmod(self, other: Self) -> Self => fmod;
    fn hypot(self, other: Self) -> Self => hypot;
    fn sin(self) -> Self => sin;
    fn sqrt(self) -> Self => sqrt;
}

/// Full turn, in radians.
pub const TAU: f64 = 2.0 * PI;

/// Reduce an angle to the range `[0, 2π)`.
#[inline]
pub fn normalize_angle(th: f64) -> f64 {
    let th = th.rem_euclid(TAU);
    // `rem_euclid` can round up to the modulus for tiny negative inputs.
    if th >= TAU {
        0.0
    } else {
        th
    }
}

/// Is `x` between `a` and `b` (in either order), with `slack` allowed on both ends?
#[inline]
pub fn between(x: f64, a: f64, b: f64, slack: f64) -> bool {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    lo - slack <= x && x <= hi + slack
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_angle_range() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert!((normalize_angle(-0.5 * PI) - 1.5 * PI).abs() < 1e-12);
        assert!((normalize_angle(5.0 * PI) - PI).abs() < 1e-12);
        assert!(normalize_angle(-1e-18) < TAU);
    }

    #[test]
    fn between_either_order() {
        assert!(between(0.5, 0.0, 1.0, 0.0));
        assert!(between(-0.5, 0.0, -1.0, 0.0));
        assert!(between(1.005, 0.0, 1.0, 0.01));
        assert!(!between(1.5, 1.0, 0.0, 0.01));
    }
}
