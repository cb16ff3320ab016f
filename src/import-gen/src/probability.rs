use rand::seq::index;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::ImportGenError;
use crate::error::Result;

pub fn pick<R: Rng + ?Sized>(
    pool: &'static str,
    values: &[&'static str],
    rng: &mut R,
) -> Result<&'static str> {
    values
        .choose(rng)
        .copied()
        .ok_or(ImportGenError::PoolTooSmall {
            pool,
            requested: 1,
            available: 0,
        })
}

/// Picks `amount` distinct values, in draw order.
pub fn sample_distinct<R: Rng + ?Sized, T: Copy>(
    pool: &'static str,
    values: &[T],
    amount: usize,
    rng: &mut R,
) -> Result<Vec<T>> {
    if amount > values.len() {
        return Err(ImportGenError::PoolTooSmall {
            pool,
            requested: amount,
            available: values.len(),
        });
    }

    Ok(index::sample(rng, values.len(), amount)
        .into_iter()
        .map(|idx| values[idx])
        .collect())
}

/// `true` with the given probability, clamped to `[0, 1]`.
pub fn chance<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
    rng.gen_bool(probability.clamp(0., 1.))
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_sample_distinct() {
        let mut rng = StdRng::seed_from_u64(42);
        let values = ["a", "b", "c", "d"];
        let mut sampled = sample_distinct("letters", &values, 4, &mut rng).unwrap();
        sampled.sort();
        assert_eq!(sampled, values.to_vec());
    }

    #[test]
    fn test_sample_more_than_available() {
        let mut rng = StdRng::seed_from_u64(42);
        let res = sample_distinct("letters", &["a", "b"], 3, &mut rng);
        assert!(matches!(
            res,
            Err(ImportGenError::PoolTooSmall {
                pool: "letters",
                requested: 3,
                available: 2,
            })
        ));
    }

    #[test]
    fn test_pick_from_empty_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(pick("nothing", &[], &mut rng).is_err());
    }

    #[test]
    fn test_chance_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!((0..100).all(|_| chance(&mut rng, 1.)));
        assert!((0..100).all(|_| !chance(&mut rng, 0.)));
    }
}
