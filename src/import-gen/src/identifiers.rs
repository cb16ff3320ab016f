use indexmap::IndexSet;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::SKU_PREFIXES;
use crate::error::ImportGenError;
use crate::error::Result;
use crate::probability::chance;

const UPID_MIN: u32 = 100_000;
const UPID_MAX: u32 = 999_999;
const SKU_MIN: u32 = 10_000;
const SKU_MAX: u32 = 99_999;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Upid,
    Sku,
}

impl IdentifierKind {
    pub fn name(&self) -> &'static str {
        match self {
            IdentifierKind::Upid => "UPID",
            IdentifierKind::Sku => "SKU",
        }
    }

    /// Number of distinct tokens this kind can produce.
    pub fn capacity(&self) -> usize {
        match self {
            IdentifierKind::Upid => (UPID_MAX - UPID_MIN + 1) as usize,
            IdentifierKind::Sku => (SKU_MAX - SKU_MIN + 1) as usize * SKU_PREFIXES.len(),
        }
    }

    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        match self {
            IdentifierKind::Upid => format!("UPID-{:06}", rng.gen_range(UPID_MIN..=UPID_MAX)),
            IdentifierKind::Sku => {
                // SKU_PREFIXES is never empty
                let prefix = SKU_PREFIXES.choose(rng).copied().unwrap_or("SKU");
                format!("SKU-{}-{}", prefix, rng.gen_range(SKU_MIN..=SKU_MAX))
            }
        }
    }
}

/// Identifiers emitted so far in one run, in emission order.
#[derive(Debug, Clone)]
pub struct IdentifierPool {
    kind: IdentifierKind,
    emitted: IndexSet<String>,
}

impl IdentifierPool {
    pub fn new(kind: IdentifierKind) -> Self {
        Self {
            kind,
            emitted: IndexSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.emitted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emitted.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.emitted.contains(id)
    }

    /// Draws a token that hasn't been emitted in this run and records it.
    pub fn fresh<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<String> {
        let capacity = self.kind.capacity();
        if self.emitted.len() >= capacity {
            return Err(ImportGenError::IdentifierSpaceExhausted {
                kind: self.kind.name(),
                capacity,
            });
        }

        loop {
            let id = self.kind.draw(rng);
            if self.emitted.insert(id.clone()) {
                return Ok(id);
            }
        }
    }

    /// With `probability`, returns an already emitted token; otherwise a fresh one.
    pub fn fresh_or_reuse<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        probability: f64,
    ) -> Result<String> {
        if !self.emitted.is_empty() && chance(rng, probability) {
            let idx = rng.gen_range(0..self.emitted.len());
            if let Some(id) = self.emitted.get_index(idx) {
                return Ok(id.clone());
            }
        }

        self.fresh(rng)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_fresh_tokens_are_unique() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pool = IdentifierPool::new(IdentifierKind::Sku);
        for _ in 0..5000 {
            let id = pool.fresh(&mut rng).unwrap();
            assert!(id.starts_with("SKU-"));
        }
        assert_eq!(pool.len(), 5000);
    }

    #[test]
    fn test_upid_format() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut pool = IdentifierPool::new(IdentifierKind::Upid);
        let id = pool.fresh(&mut rng).unwrap();
        assert_eq!(id.len(), "UPID-".len() + 6);
        assert!(id["UPID-".len()..].chars().all(|c| c.is_ascii_digit()));
        assert!(pool.contains(&id));
    }

    #[test]
    fn test_reuse_returns_emitted_token() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut pool = IdentifierPool::new(IdentifierKind::Upid);
        let first = pool.fresh(&mut rng).unwrap();

        let reused = pool.fresh_or_reuse(&mut rng, 1.).unwrap();
        assert_eq!(reused, first);
        assert_eq!(pool.len(), 1);

        pool.fresh_or_reuse(&mut rng, 0.).unwrap();
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_reuse_on_empty_pool_is_fresh() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut pool = IdentifierPool::new(IdentifierKind::Sku);
        pool.fresh_or_reuse(&mut rng, 1.).unwrap();
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_exhausted_space() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut pool = IdentifierPool::new(IdentifierKind::Upid);
        for n in UPID_MIN..=UPID_MAX {
            pool.emitted.insert(format!("UPID-{n:06}"));
        }
        assert!(matches!(
            pool.fresh(&mut rng),
            Err(ImportGenError::IdentifierSpaceExhausted { kind: "UPID", .. })
        ));
    }
}
