//! Raw numeric representations a quantity can carry.
//!
//! Primitive integers and floats qualify, as do [`Complex`] numbers for
//! phasor-style quantities. Ordering is not part of [`Scalar`]; operations
//! that compare or wrap values ask for `PartialOrd` themselves.
//!
//! Rescaling between raw types goes through [`Promote`]: the value is widened
//! into a common representation (`i128` for two integer types, `f64` as soon
//! as a float is involved), scaled there, and narrowed to the target last.
//! Integer targets therefore truncate toward zero only once, and intermediate
//! products cannot overflow the narrow type.

use num_complex::Complex;
use num_traits::{AsPrimitive, Float, Num};

use crate::ratio::Ratio;

/// Numeric payload of a quantity
pub trait Scalar: Num + Copy + 'static {
    /// Convert an integer ratio part into this representation
    fn from_i64(value: i64) -> Self;

    /// Value of `ratio` computed in this representation
    #[inline]
    fn from_ratio(ratio: Ratio) -> Self {
        Self::from_i64(ratio.num()) / Self::from_i64(ratio.den())
    }

    /// `self * ratio.num / ratio.den`, multiplication first
    #[inline]
    fn scale_by(self, ratio: Ratio) -> Self {
        self * Self::from_i64(ratio.num()) / Self::from_i64(ratio.den())
    }
}

macro_rules! impl_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn from_i64(value: i64) -> $t {
                    value.as_()
                }
            }
        )*
    };
}

impl_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T: Float + Scalar> Scalar for Complex<T> {
    #[inline]
    fn from_i64(value: i64) -> Self {
        Complex::new(T::from_i64(value), T::zero())
    }
}

/// Common representation for mixing `Self` with `Other`.
///
/// Conversions from a `Self` value into an `Other` value compute in
/// [`Promote::Common`] and narrow at the end; comparisons between the two
/// compare in `Common`.
pub trait Promote<Other: Scalar>: Scalar {
    /// Representation wide enough for both operands
    type Common: Scalar;

    /// Widen a `Self` value
    fn promote(self) -> Self::Common;

    /// Widen an `Other` value
    fn promote_other(other: Other) -> Self::Common;

    /// Narrow a common value into `Other`
    fn demote(common: Self::Common) -> Other;
}

macro_rules! impl_promote {
    (@row $common:ty; $from:ty; [$($to:ty),*]) => {
        $(
            impl Promote<$to> for $from {
                type Common = $common;

                #[inline]
                fn promote(self) -> $common {
                    self.as_()
                }

                #[inline]
                fn promote_other(other: $to) -> $common {
                    other.as_()
                }

                #[inline]
                fn demote(common: $common) -> $to {
                    common.as_()
                }
            }
        )*
    };
    ($common:ty; $($from:ty),* ; $to:tt) => {
        $( impl_promote!(@row $common; $from; $to); )*
    };
}

impl_promote!(i128;
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize;
    [i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize]);
impl_promote!(f64;
    f32, f64;
    [i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize, f32, f64]);
impl_promote!(f64;
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize;
    [f32, f64]);

impl<T: Float + Scalar> Promote<Complex<T>> for Complex<T> {
    type Common = Complex<T>;

    #[inline]
    fn promote(self) -> Complex<T> {
        self
    }

    #[inline]
    fn promote_other(other: Complex<T>) -> Complex<T> {
        other
    }

    #[inline]
    fn demote(common: Complex<T>) -> Complex<T> {
        common
    }
}

/// `value * ratio` computed in the common representation, narrowed into `T`
#[inline]
pub(crate) fn rescale<S: Promote<T>, T: Scalar>(value: S, ratio: Ratio) -> T {
    S::demote(value.promote().scale_by(ratio))
}

/// `value * factor + offset` computed in the common representation, narrowed into `T`
#[inline]
pub(crate) fn rescale_affine<S: Promote<T>, T: Scalar>(value: S, factor: Ratio, offset: Ratio) -> T {
    S::demote(value.promote().scale_by(factor) + <S::Common as Scalar>::from_ratio(offset))
}

/// Scalars with a floating-point counterpart used by roots and trigonometry
///
/// Floats map to themselves, integers widen to `f64`.
pub trait Real: Scalar + PartialOrd {
    /// Floating representation results are computed in
    type Float: Float + Scalar + AsPrimitive<Self>;

    /// Widen into the floating representation
    fn to_float(self) -> Self::Float;
}

macro_rules! impl_real {
    ($float:ty => $($t:ty),*) => {
        $(
            impl Real for $t {
                type Float = $float;
                #[inline]
                fn to_float(self) -> $float {
                    AsPrimitive::<$float>::as_(self)
                }
            }
        )*
    };
}

impl_real!(f32 => f32);
impl_real!(f64 => f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
