use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest color component.
pub const MAX_COLOR_COMPONENT: f64 = 255.0;

/// Converts a repeat count to an `i64` if the value is finite, within range,
/// and not fractional.
///
/// ## Errors
/// Returns `RuntimeError::Type` for non-finite, out-of-range, or fractional
/// values.
///
/// ## Parameters
/// - `value`: The evaluated count.
///
/// ## Returns
/// - `Ok(i64)`: The count, possibly zero or negative.
/// - `Err(RuntimeError::Type)`: If the value is not an integer.
///
/// ## Example
/// ```
/// use turtle_logo::{error::RuntimeError, util::num::f64_to_count_checked};
///
/// assert_eq!(f64_to_count_checked(4.0).unwrap(), 4);
/// assert_eq!(f64_to_count_checked(-2.0).unwrap(), -2);
///
/// let err = f64_to_count_checked(2.5).unwrap_err();
/// assert!(matches!(err, RuntimeError::Type { .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_count_checked(value: f64) -> EvalResult<i64> {
    if !value.is_finite() {
        return Err(RuntimeError::Type { details: format!("repeat count {value} is not finite") });
    }
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(RuntimeError::Type { details: format!("repeat count {value} is out of range") });
    }
    if value.fract() != 0.0 {
        return Err(RuntimeError::Type { details: format!("repeat count {value} must evaluate to an integer") });
    }
    Ok(value as i64)
}

/// Converts a color component to a `u8`, truncating any fraction.
///
/// ## Errors
/// Returns `RuntimeError::Range` if the value is below `0`, above `255`, or
/// not a number.
///
/// ## Example
/// ```
/// use turtle_logo::{error::RuntimeError, util::num::f64_to_color_checked};
///
/// assert_eq!(f64_to_color_checked(127.9).unwrap(), 127);
/// assert_eq!(f64_to_color_checked(255.0).unwrap(), 255);
///
/// let err = f64_to_color_checked(256.0).unwrap_err();
/// assert_eq!(err, RuntimeError::Range { value: 256.0 });
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_color_checked(value: f64) -> EvalResult<u8> {
    if !(0.0..=MAX_COLOR_COMPONENT).contains(&value) {
        return Err(RuntimeError::Range { value });
    }
    Ok(value as u8)
}
