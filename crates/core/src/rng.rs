//! RNG module - uniform random piece selection
//!
//! Every spawn picks one of the seven variants with equal probability. The
//! generator is a small LCG so a seed reproduces a whole game; anything that
//! implements [`PieceSource`] can replace it (tests use closures).

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::PieceKind;

/// Supplies the variant of the next spawned piece.
pub trait PieceSource: Send {
    fn next_kind(&mut self) -> PieceKind;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Seed from the wall clock.
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
            .unwrap_or(1);
        Self::new(nanos)
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high half of the state; the low bits of an LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }

    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl PieceSource for SimpleRng {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PieceKind::ALL.len() as u32) as usize]
    }
}

impl<F> PieceSource for F
where
    F: FnMut() -> PieceKind + Send,
{
    fn next_kind(&mut self) -> PieceKind {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_kind(), rng2.next_kind());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_every_kind_is_drawn() {
        let mut rng = SimpleRng::new(7);
        let mut counts = [0u32; 7];
        for _ in 0..7000 {
            let kind = rng.next_kind();
            let idx = PieceKind::ALL.iter().position(|&k| k == kind).unwrap();
            counts[idx] += 1;
        }
        // Roughly uniform: each variant near 1000 draws.
        for (i, &n) in counts.iter().enumerate() {
            assert!(n > 700 && n < 1300, "{:?} drawn {} times", PieceKind::ALL[i], n);
        }
    }

    #[test]
    fn test_closure_source() {
        let mut script = [PieceKind::O, PieceKind::I].into_iter().cycle();
        let mut source = move || script.next().unwrap_or(PieceKind::T);
        assert_eq!(source.next_kind(), PieceKind::O);
        assert_eq!(source.next_kind(), PieceKind::I);
        assert_eq!(source.next_kind(), PieceKind::O);
    }
}
