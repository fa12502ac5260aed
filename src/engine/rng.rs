//! Deterministic pseudo-random sequence generator for grid seeding

/// Park–Miller linear congruential generator (a = 7^5), stepped with
/// Schrage's decomposition so the multiply stays in 32 bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    const A: u32 = 16807;
    const Q: u32 = 127773;
    const R: u32 = 2836;

    /// Create a generator from a seed. Equal seeds yield identical sequences.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the generator and return the new state.
    pub fn draw(&mut self) -> u32 {
        let k = self.state / Self::Q;
        self.state = Self::A
            .wrapping_mul(self.state - k * Self::Q)
            .wrapping_sub(Self::R.wrapping_mul(k));
        self.state
    }

    /// Draw one cell state: alive on odd draws, dead on even.
    pub fn draw_cell(&mut self) -> bool {
        self.draw() % 2 == 1
    }
}
