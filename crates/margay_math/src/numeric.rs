use std::ops::*;
use crate::RealConsts;

/// Defines a type which has a 0-value, i.e. the additive identity
pub trait Zero {
    fn zero() -> Self;
}

impl Zero for f32 {
    #[inline(always)]
    fn zero() -> Self { 0f32 }
}
impl Zero for f64 {
    #[inline(always)]
    fn zero() -> Self { 0f64 }
}

/// Defines a type which has a 1-value, i.e. the multiplicative identity
pub trait One {
    fn one() -> Self;
}

impl One for f32 {
    #[inline(always)]
    fn one() -> Self { 1f32 }
}
impl One for f64 {
    #[inline(always)]
    fn one() -> Self { 1f64 }
}

/// Defines a type that can be compared for equality within a given epsilon
pub trait ApproxEq<E = Self>: Sized {
    /// Check if 2 values are equal within a given epsilon
    fn is_close_to(self, rhs: Self, epsilon: E) -> bool;

    /// Check if 2 values are equal within the machine epsilon
    fn is_approx_eq(self, rhs: Self) -> bool;
}

/// Defines a type that can be compared to 0 within a given epsilon
pub trait ApproxZero<E = Self>: Sized {
    /// Check if the value is 0 within a given epsilon
    fn is_close_to_zero(self, epsilon: E) -> bool;

    /// Check if the value is 0 within the machine epsilon
    fn is_zero(self) -> bool;
}

macro_rules! impl_approx {
    {$($ty:ty),*} => {
        $(
            impl ApproxEq for $ty {
                #[inline(always)]
                fn is_close_to(self, rhs: Self, epsilon: Self) -> bool {
                    (self - rhs).abs() <= epsilon
                }

                #[inline(always)]
                fn is_approx_eq(self, rhs: Self) -> bool {
                    self.is_close_to(rhs, <$ty>::EPSILON)
                }
            }

            impl ApproxZero for $ty {
                #[inline(always)]
                fn is_close_to_zero(self, epsilon: Self) -> bool {
                    self.abs() <= epsilon
                }

                #[inline(always)]
                fn is_zero(self) -> bool {
                    self.is_close_to_zero(<$ty>::EPSILON)
                }
            }
        )*
    };
}
impl_approx!{f32, f64}

/// Arithmetic type representing a real number
///
/// The single scalar bound used by every shape and collision routine in the crate, so the
/// same implementation instantiates for both `f32` (render-side helpers) and `f64`
/// (physics-side helpers).
pub trait Real : Sized + Clone + Copy + std::fmt::Debug + PartialEq + PartialOrd +
                 Zero + One + RealConsts + ApproxEq + ApproxZero +
                 Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self> +
                 AddAssign + SubAssign + MulAssign + DivAssign + Neg<Output = Self>
{
    /// Get the minimum of 2 values
    fn min(self, rhs: Self) -> Self;
    /// Get the maximum of 2 values
    fn max(self, rhs: Self) -> Self;

    /// Clamp a value between 2 values
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    /// Calculate the absolute value
    fn abs(self) -> Self;
    /// Get the sign of the value: 0 for 0, +1 for positive, and -1 for negative
    fn sign(self) -> Self;

    /// Calculate the square root of the value
    fn sqrt(self) -> Self;
    /// Calculate the reciprocal of the value
    fn recip(self) -> Self;

    /// Create a real from an f32
    fn from_f32(val: f32) -> Self;
    /// Create a real from an f64
    fn from_f64(val: f64) -> Self;
    /// Create a real from an i32
    fn from_i32(val: i32) -> Self;
}

macro_rules! impl_real {
    {$ty:ty} => {
        impl Real for $ty {
            fn min(self, rhs: Self) -> Self {
                self.min(rhs)
            }

            fn max(self, rhs: Self) -> Self {
                self.max(rhs)
            }

            fn abs(self) -> Self {
                self.abs()
            }

            fn sign(self) -> Self {
                if self == 0 as $ty { 0 as $ty } else { self.signum() }
            }

            fn sqrt(self) -> Self {
                self.sqrt()
            }

            fn recip(self) -> Self {
                self.recip()
            }

            fn from_f32(val: f32) -> Self {
                val as $ty
            }

            fn from_f64(val: f64) -> Self {
                val as $ty
            }

            fn from_i32(val: i32) -> Self {
                val as $ty
            }
        }
    };
}
impl_real!{f32}
impl_real!{f64}
