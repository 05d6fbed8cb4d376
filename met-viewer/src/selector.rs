use crate::catalog::IdentifierPool;
use crate::types::ObjectId;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Uniform random draws from the pool.
pub struct CandidateSelector {
    rng: StdRng,
}

impl CandidateSelector {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence of draws for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }

    pub fn select_next(&mut self, pool: &IdentifierPool) -> Option<ObjectId> {
        if pool.is_empty() {
            return None;
        }
        let index = self.rng.gen_range(0..pool.len());
        let candidate = pool.get(index);
        debug!("Drew candidate {:?} at index {}", candidate, index);
        candidate
    }
}

impl Default for CandidateSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws left for one user-initiated advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptBudget {
    used: u32,
    bound: u32,
}

impl AttemptBudget {
    pub fn new(bound: u32) -> Self {
        Self { used: 0, bound }
    }

    /// Consume one attempt; `false` once the bound has been reached.
    pub fn try_consume(&mut self) -> bool {
        if self.used >= self.bound {
            return false;
        }
        self.used += 1;
        true
    }

    pub fn used(&self) -> u32 {
        self.used
    }

    pub fn bound(&self) -> u32 {
        self.bound
    }

    pub fn is_exhausted(&self) -> bool {
        self.used >= self.bound
    }
}
