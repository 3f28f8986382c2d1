//! Power-law shaping primitive.

/*
Power-Law Shaping
=================

A linear envelope sounds "wrong" on most parameters because we hear pitch and
brightness logarithmically. Raising the normalized level to a power bends the
ramp without touching its endpoints:

    y = x ^ exponent          (for x in [0, 1], y stays in [0, 1])

    exponent = 1     straight line (identity)
    exponent > 1     slow start, fast finish; sweeps feel even in Hz
    exponent < 1     fast start, slow finish

    1.0 ┐            ..·´      e = 0.5
        │        .·´´  ..·´    e = 1
        │     .·´  ..·´   ·    e = 3
        │   ·´ ..·´     ·´
    0.0 └·····´·······´─────→ x
        0                  1

Negative inputs
---------------

Control signals can dip below zero (an LFO fed into the input, for example).
A fractional power of a negative number is NaN, so the magnitude is shaped
instead:

    y = |x| ^ exponent

For the non-negative range an envelope produces this is exactly x^exponent.
*/

/// Shape a single value.
#[inline]
pub fn shape(x: f32, exponent: f32) -> f32 {
    x.abs().powf(exponent)
}

/// Shape a block in place.
#[inline]
pub fn shape_buffer(buffer: &mut [f32], exponent: f32) {
    // powf(1.0) is exact, but skipping it saves a transcendental per sample
    if exponent == 1.0 {
        for sample in buffer.iter_mut() {
            *sample = sample.abs();
        }
        return;
    }

    for sample in buffer.iter_mut() {
        *sample = shape(*sample, exponent);
    }
}
