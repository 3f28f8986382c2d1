use std::f32::consts::TAU;

/// Phase-accumulating sine oscillator.
///
/// Kept deliberately small: it exists so a scaled envelope has an audible
/// parameter to drive (frequency) in tests, benches and the demo binary.
pub struct SineOscillator {
    phase: f32, // radians, wrapped to [0, TAU)
}

impl SineOscillator {
    pub fn new() -> Self {
        Self { phase: 0.0 }
    }

    /// Render a block at a fixed frequency.
    pub fn render(&mut self, buffer: &mut [f32], frequency: f32, sample_rate: f32) {
        let increment = TAU * frequency / sample_rate;
        for sample in buffer.iter_mut() {
            *sample = self.phase.sin();
            self.phase += increment;
            if self.phase >= TAU {
                self.phase -= TAU;
            }
        }
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}

impl Default for SineOscillator {
    fn default() -> Self {
        Self::new()
    }
}
