use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Buffer size mismatch: expected {expected} elements, got {actual}")]
    BufferSize { expected: usize, actual: usize },
    #[error("Pipe brush needs at least one image")]
    EmptyPipe,
}

/// Check that a `width * height` buffer holds exactly `actual` elements
pub fn validate_buffer_len(width: u32, height: u32, actual: usize) -> Result<(), ValidationError> {
    if width == 0 || height == 0 {
        return Err(ValidationError::InvalidDimensions { width, height });
    }
    let expected = (width as usize) * (height as usize);
    if expected != actual {
        return Err(ValidationError::BufferSize { expected, actual });
    }
    Ok(())
}

/// Split a continuous coordinate into an integer pixel and a fraction in [0, 1)
///
/// Uses floor semantics, so `-0.25` splits into `(-1, 0.75)`.
#[inline]
pub fn split_coordinate(coord: f32) -> (i32, f32) {
    let base = coord.floor();
    let fraction = coord - base;
    // Rounding can land exactly on 1.0 for tiny negative inputs
    if fraction >= 1.0 {
        return ((base as i32).saturating_add(1), 0.0);
    }
    (base as i32, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_positive() {
        let (x, frac) = split_coordinate(45.3);
        assert_eq!(x, 45);
        assert!((frac - 0.3).abs() < 1e-4);
    }

    #[test]
    fn test_split_integer() {
        assert_eq!(split_coordinate(12.0), (12, 0.0));
        assert_eq!(split_coordinate(0.0), (0, 0.0));
    }

    #[test]
    fn test_split_negative() {
        let (x, frac) = split_coordinate(-0.25);
        assert_eq!(x, -1);
        assert!((frac - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_split_tiny_negative_stays_in_range() {
        let (x, frac) = split_coordinate(-1e-9);
        assert!((0.0..1.0).contains(&frac));
        assert!((x as f32 + frac - (-1e-9)).abs() < 1e-6);
    }

    #[test]
    fn test_split_is_exact() {
        let mut c = -20.0f32;
        while c < 20.0 {
            let (base, frac) = split_coordinate(c);
            assert!((0.0..1.0).contains(&frac), "fraction {frac} out of range for {c}");
            assert!((base as f32 + frac - c).abs() < 1e-4, "split of {c} is not exact");
            c += 0.37;
        }
    }

    #[test]
    fn test_validate_buffer_len() {
        assert!(validate_buffer_len(4, 4, 16).is_ok());
        assert_eq!(
            validate_buffer_len(4, 4, 15),
            Err(ValidationError::BufferSize { expected: 16, actual: 15 })
        );
        assert_eq!(
            validate_buffer_len(0, 4, 0),
            Err(ValidationError::InvalidDimensions { width: 0, height: 4 })
        );
    }
}
