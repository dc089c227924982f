// File: crates/chart-core/src/random.rs
// Summary: Random bar colors from a seeded PRNG.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::color::Color;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Supplies one color per bar when random coloring is requested.
pub trait ColorSource {
    fn next_color(&mut self) -> Color;
}

/// Uniform `#RRGGBB` colors drawn from `0-9A-F` digit by digit.
#[derive(Debug, Clone)]
pub struct RandomHexColors {
    state: u64,
}

impl RandomHexColors {
    /// Seeded from the wall clock.
    pub fn new() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x9E37_79B9_7F4A_7C15);
        Self::with_seed(nanos)
    }

    /// Reproducible sequence for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self { state: seed.wrapping_add(1) }
    }

    fn next_u64(&mut self) -> u64 {
        // LCG parameters from Numerical Recipes
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    /// One hex digit in `0..16`; high bits of an LCG are the well mixed ones.
    fn next_digit(&mut self) -> u8 {
        (self.next_u64() >> 60) as u8
    }

    /// `#` followed by six uppercase hex digits.
    pub fn next_hex(&mut self) -> String {
        let mut s = String::with_capacity(7);
        s.push('#');
        for _ in 0..6 {
            s.push(HEX_DIGITS[self.next_digit() as usize] as char);
        }
        s
    }
}

impl Default for RandomHexColors {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSource for RandomHexColors {
    fn next_color(&mut self) -> Color {
        let mut channel = || (self.next_digit() << 4) | self.next_digit();
        let r = channel();
        let g = channel();
        let b = channel();
        Color::rgb(r, g, b)
    }
}

/// Next color of `source` in `#RRGGBB` form.
pub fn random_hex_color(source: &mut dyn ColorSource) -> String {
    source.next_color().to_hex()
}
