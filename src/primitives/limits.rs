//! `numeric_limits` for the arithmetic primitives.

/// Compile-time numeric properties of an arithmetic type.
pub trait NumericLimits: Copy + PartialOrd + 'static {
    /// Smallest finite value for integers; smallest positive normal for floats.
    const MIN: Self;
    /// Most negative finite value.
    const LOWEST: Self;
    const MAX: Self;
    /// Radix digits representable without change (excluding the sign bit).
    const DIGITS: u32;
    const IS_SIGNED: bool;
    const IS_INTEGER: bool;
}

macro_rules! impl_int_limits {
    ($($t:ty => $signed:expr),* $(,)?) => {
        $(
            impl NumericLimits for $t {
                const MIN: Self = <$t>::MIN;
                const LOWEST: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const DIGITS: u32 = <$t>::BITS - ($signed as u32);
                const IS_SIGNED: bool = $signed;
                const IS_INTEGER: bool = true;
            }
        )*
    };
}

impl_int_limits! {
    i8 => true, i16 => true, i32 => true, i64 => true, i128 => true, isize => true,
    u8 => false, u16 => false, u32 => false, u64 => false, u128 => false, usize => false,
}

macro_rules! impl_float_limits {
    ($($t:ty),*) => {
        $(
            impl NumericLimits for $t {
                const MIN: Self = <$t>::MIN_POSITIVE;
                const LOWEST: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const DIGITS: u32 = <$t>::MANTISSA_DIGITS;
                const IS_SIGNED: bool = true;
                const IS_INTEGER: bool = false;
            }
        )*
    };
}

impl_float_limits!(f32, f64);
