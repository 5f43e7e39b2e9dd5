//! The recognized set of scalar numeric types.
//!
//! A declaration-time value is treated as a constant rather than invoked as
//! a rule when its type is a member of this set. Membership is expressed as
//! a marker trait so downstream expression subsystems can admit their own
//! scalar types.

use num_traits::Num;

/// Marker for types classified as primitive numeric constants.
///
/// The supertrait bounds guarantee members behave like scalars; the marker
/// itself is the membership test used by [`ScalarField::constant`].
///
/// [`ScalarField::constant`]: crate::field::ScalarField::constant
pub trait NumericConstant: Num + Copy {}

macro_rules! impl_numeric_constant {
    ($($ty:ty),* $(,)?) => {
        $(impl NumericConstant for $ty {})*
    };
}

impl_numeric_constant!(i8, i16, i32, i64, i128, isize);
impl_numeric_constant!(u8, u16, u32, u64, u128, usize);
impl_numeric_constant!(f32, f64);
