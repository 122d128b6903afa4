//! Color math helpers for base-color brightness and tint adjustments.
use crate::foundation::core::Rgb8;

/// Shift a color's brightness by a signed fraction of full scale.
///
/// Each channel moves by `amount * 255`, clamped to the valid byte range and
/// rounded to the nearest integer. Negative `amount` darkens, positive
/// lightens; `amount = 0` returns the input unchanged.
pub fn adjust_brightness(color: Rgb8, amount: f64) -> Rgb8 {
    let delta = amount * 255.0;
    let ch = |c: u8| -> u8 { (f64::from(c) + delta).round().clamp(0.0, 255.0) as u8 };
    Rgb8 {
        r: ch(color.r),
        g: ch(color.g),
        b: ch(color.b),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/color.rs"]
mod tests;
