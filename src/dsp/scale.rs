//! Affine range mapping primitive.

/*
Range Mapping
=============

Envelopes and shaped envelopes live in [0, 1]. Parameters do not: a cutoff
wants 200 - 2000 Hz, a detune wants -12 - +12 cents. Range mapping is the
affine map that takes one to the other:

    y = min + x × (max - min)

    x = 0.0   →  y = min
    x = 0.5   →  y = halfway
    x = 1.0   →  y = max

Nothing requires min < max. A reversed range (min = 2000, max = 200) simply
runs the sweep backwards, which is handy for "closing" a filter on attack.

Values outside [0, 1] extrapolate along the same line. No clamping is done
here; if the target parameter has limits, the target enforces them.
*/

/// Map a single normalized value into `[min, max]`.
#[inline]
pub fn scale(x: f32, min: f32, max: f32) -> f32 {
    min + x * (max - min)
}

/// Map a block in place.
#[inline]
pub fn scale_buffer(buffer: &mut [f32], min: f32, max: f32) {
    let span = max - min;
    for sample in buffer.iter_mut() {
        *sample = min + *sample * span;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(scale(0.0, 200.0, 2000.0), 200.0);
        assert_eq!(scale(1.0, 200.0, 2000.0), 2000.0);
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(scale(0.5, -1.0, 1.0), 0.0);
        assert_eq!(scale(0.25, 0.0, 100.0), 25.0);
    }

    #[test]
    fn test_reversed_range_inverts() {
        assert_eq!(scale(0.0, 10.0, 0.0), 10.0);
        assert_eq!(scale(1.0, 10.0, 0.0), 0.0);
        assert_eq!(scale(0.75, 10.0, 0.0), 2.5);
    }

    #[test]
    fn test_unit_range_is_identity() {
        for &x in &[0.0, 0.3, 0.7, 1.0] {
            assert_eq!(scale(x, 0.0, 1.0), x);
        }
    }

    #[test]
    fn test_buffer() {
        let mut buffer = [0.0, 0.5, 1.0];
        scale_buffer(&mut buffer, 5.0, 15.0);
        assert_eq!(buffer, [5.0, 10.0, 15.0]);
    }
}
