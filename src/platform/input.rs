//! Pointer mapping
//!
//! The play field is addressed in percent of its width, so pointer
//! coordinates are normalised against the element's client width.

use crate::fraction_to_field;

/// Map a pointer x offset within an element of `width` pixels to a field column.
/// Returns None for a collapsed (zero-width) element.
pub fn pointer_to_field(offset_x: f32, width: f32) -> Option<f32> {
    if width.is_nan() || width <= 0.0 || !offset_x.is_finite() {
        return None;
    }
    Some(fraction_to_field(offset_x / width))
}
