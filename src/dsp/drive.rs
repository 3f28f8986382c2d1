//! Block-rate parameter driving.

/*
Driving a Parameter
===================

A scaled envelope already speaks the target's units: its output is 200 - 2000
when it was configured for a 200 - 2000 Hz cutoff. So instead of the usual
"base + modulator × depth" recipe, the control value is written to the
parameter as-is:

    parameter = control

Block Rate
----------

Parameters are updated once per rendered block, not per sample. The block is
represented by the mean of its control samples, which is smoother than taking
the first or last sample when the control is ramping:

    block:   [200, 260, 320, 380]
    value:   290

At 48 kHz and 128-sample blocks that is an update every 2.7 ms, well below the
point where steps in a sweep become audible as zipper noise for typical
envelope times.
*/

/// Mean of a block of control samples.
///
/// Empty blocks average to 0.0.
#[inline]
pub fn block_average(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f32>() / samples.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_average() {
        let samples = [200.0, 260.0, 320.0, 380.0];
        assert_eq!(block_average(&samples), 290.0);
    }

    #[test]
    fn test_block_average_empty() {
        let samples: [f32; 0] = [];
        assert_eq!(block_average(&samples), 0.0);
    }

    #[test]
    fn test_block_average_constant() {
        let samples = [2000.0; 64];
        assert_eq!(block_average(&samples), 2000.0);
    }
}
