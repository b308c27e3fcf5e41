//! Curated boundary values per numeric width.
//!
//! Each width's set is the widened set of the next narrower width followed
//! by the new boundary points the wider type introduces. Floating-point sets
//! add the smallest normal and subnormal magnitudes, the largest finite
//! value, both infinities and NaN. Sets may contain duplicates; callers
//! should only rely on membership and order.

use std::sync::Arc;

use super::{fixed, FixedGenerator, SharedGenerator};
use crate::error::{ParamForgeError, Result};
use crate::value::{ParamKind, ParamType, ParamValue};

/// Interesting `i8` values.
pub fn bytes() -> Vec<i8> {
    let mut values = vec![i8::MIN, 64, 100, i8::MAX];
    values.extend(-35..=35);
    values
}

/// Interesting `i16` values, a superset of [`bytes`].
pub fn shorts() -> Vec<i16> {
    let mut values: Vec<i16> = bytes().into_iter().map(i16::from).collect();
    values.extend([i16::MIN, -129, 128, 255, 256, 512, 1000, 1024, 4096, i16::MAX]);
    values
}

/// Interesting `i32` values, a superset of [`shorts`].
pub fn ints() -> Vec<i32> {
    let mut values: Vec<i32> = shorts().into_iter().map(i32::from).collect();
    values.extend([
        i32::MIN,
        -100_663_046,
        -32_769,
        32_768,
        65_535,
        65_536,
        100_663_045,
        i32::MAX,
    ]);
    values
}

/// Interesting `i64` values, a superset of [`ints`].
pub fn longs() -> Vec<i64> {
    let mut values: Vec<i64> = ints().into_iter().map(i64::from).collect();
    values.extend([i64::MIN, i64::MAX]);
    values
}

/// Interesting `f32` values: [`longs`] as floats plus the float singularities.
pub fn floats() -> Vec<f32> {
    let mut values: Vec<f32> = longs().into_iter().map(|v| v as f32).collect();
    values.extend([
        f32::MIN_POSITIVE,
        // smallest positive subnormal
        f32::from_bits(1),
        f32::MAX,
        f32::NEG_INFINITY,
        f32::INFINITY,
        f32::NAN,
    ]);
    values
}

/// Interesting `f64` values, a superset of [`floats`].
pub fn doubles() -> Vec<f64> {
    let mut values: Vec<f64> = floats().into_iter().map(f64::from).collect();
    values.extend([f64::MIN_POSITIVE, f64::from_bits(1), f64::MAX]);
    values
}

/// The interesting values for a numeric kind, as parameter values.
///
/// # Errors
///
/// Returns [`ParamForgeError::Unsupported`] for `char`, which has no curated
/// codepoint boundaries (surrogates, max scalar, combining marks) yet, and
/// [`ParamForgeError::NoSuggestion`] for non-numeric kinds.
pub fn values_for(kind: ParamKind) -> Result<Vec<ParamValue>> {
    let values = match kind {
        ParamKind::Byte => lift(bytes()),
        ParamKind::Short => lift(shorts()),
        ParamKind::Int => lift(ints()),
        ParamKind::Long => lift(longs()),
        ParamKind::Float => lift(floats()),
        ParamKind::Double => lift(doubles()),
        ParamKind::Char => {
            return Err(ParamForgeError::Unsupported {
                type_name: kind.name().to_string(),
            });
        }
        ParamKind::Bool | ParamKind::Str => {
            return Err(ParamForgeError::NoSuggestion {
                type_name: kind.name().to_string(),
            })
        }
    };
    Ok(values)
}

/// A finite generator over the interesting values of a numeric kind.
///
/// # Example
///
/// ```
/// use paramforge_core::generator::interesting;
/// use paramforge_core::{ParamGenerator, ParamKind, ParamValue};
///
/// let bytes = interesting::generator(ParamKind::Byte).unwrap();
/// assert!(bytes.values().any(|v| v == ParamValue::Byte(-128)));
/// assert!(interesting::generator(ParamKind::Char).is_err());
/// ```
pub fn generator(kind: ParamKind) -> Result<FixedGenerator<ParamValue>> {
    Ok(fixed(values_for(kind)?))
}

/// Like [`generator`], with the null sentinel first.
pub fn nullable(kind: ParamKind) -> Result<FixedGenerator<ParamValue>> {
    let values = values_for(kind)?;
    Ok(fixed(std::iter::once(ParamValue::Null).chain(values)))
}

/// Picks a default generator for a parameter type.
///
/// Booleans get both values, numeric kinds get their interesting set, and
/// nullable types get the null sentinel first.
///
/// # Errors
///
/// [`ParamForgeError::Unsupported`] for `char`, and
/// [`ParamForgeError::NoSuggestion`] for kinds without a curated set.
pub fn suggested(ty: ParamType) -> Result<SharedGenerator> {
    let generator = match (ty.kind(), ty.is_nullable()) {
        (ParamKind::Bool, false) => fixed([ParamValue::Bool(true), ParamValue::Bool(false)]),
        (ParamKind::Bool, true) => fixed([
            ParamValue::Null,
            ParamValue::Bool(true),
            ParamValue::Bool(false),
        ]),
        (ParamKind::Str, _) => {
            return Err(ParamForgeError::NoSuggestion {
                type_name: ty.to_string(),
            })
        }
        (ParamKind::Char, _) => {
            return Err(ParamForgeError::Unsupported {
                type_name: ty.to_string(),
            })
        }
        (kind, false) => generator(kind)?,
        (kind, true) => nullable(kind)?,
    };
    Ok(Arc::new(generator))
}

fn lift<T: Into<ParamValue>>(values: Vec<T>) -> Vec<ParamValue> {
    values.into_iter().map(Into::into).collect()
}
