/// Trait that defines the constants a real number type needs to provide
pub trait RealConsts {
    /// Minimum value
    const MIN : Self;
    /// Maximum value
    const MAX : Self;
    /// Machine epsilon
    const EPSILON : Self;

    /// pi
    const PI : Self;
    /// 2 * pi
    const TWO_PI : Self;
    /// pi / 2
    const HALF_PI : Self;

    /// Guard epsilon for collision routines, below which a squared length, determinant or
    /// direction component is treated as degenerate instead of divided by
    const SAFE_EPSILON : Self;
}

macro_rules! impl_real_consts {
    {$ty:ty, $safe_epsilon:literal} => {
        impl RealConsts for $ty {
            const MIN          : $ty = <$ty>::MIN;
            const MAX          : $ty = <$ty>::MAX;
            const EPSILON      : $ty = <$ty>::EPSILON;

            const PI           : $ty = 3.14159265358979323846264338327950288 as $ty;
            const TWO_PI       : $ty = 6.28318530717958647692528676655900576 as $ty;
            const HALF_PI      : $ty = 1.57079632679489661923132169163975144 as $ty;

            const SAFE_EPSILON : $ty = $safe_epsilon;
        }
    };
}

impl_real_consts!{ f32, 1e-6 }
impl_real_consts!{ f64, 1e-12 }
