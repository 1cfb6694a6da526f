// Uniform draws in [0, 1)
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    // len must be non-zero
    fn index(&mut self, len: usize) -> usize {
        ((self.next_f64() * len as f64) as usize).min(len - 1)
    }

    fn chance(&mut self) -> bool {
        self.next_f64() < 0.5
    }
}

pub struct MathRandom;

impl RandomSource for MathRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}
