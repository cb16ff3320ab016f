use rand::Rng;

use crate::catalog::MATERIAL_BLENDS;
use crate::catalog::PRIMARY_MATERIALS;
use crate::error::Result;
use crate::probability::pick;
use crate::probability::sample_distinct;
use crate::record::Material;
use crate::record::MATERIAL_SLOTS;

pub type Composition = [Material; MATERIAL_SLOTS];

// percentages of this composition sum to 115
const INVALID_COMPOSITION: [(&str, u32); 2] = [("Cotton", 65), ("Polyester", 50)];

fn fill(parts: &[(&str, u32)]) -> Composition {
    let mut composition = Composition::default();
    for (slot, (name, percentage)) in composition.iter_mut().zip(parts) {
        *slot = Material {
            name: name.to_string(),
            percentage: percentage.to_string(),
        };
    }

    composition
}

/// Scales weights to integer percentages. The last percentage absorbs the rounding so the
/// total is exactly 100.
pub fn normalize(weights: &[u32]) -> Vec<u32> {
    let total: u32 = weights.iter().sum();
    if total == 0 {
        return vec![0; weights.len()];
    }

    let mut percentages = weights
        .iter()
        .map(|w| w * 100 / total)
        .collect::<Vec<_>>();
    if let Some((last, rest)) = percentages.split_last_mut() {
        *last = 100 - rest.iter().sum::<u32>();
    }

    percentages
}

/// Up to three distinct blend components summing to 100%.
pub fn compose<R: Rng + ?Sized>(rng: &mut R) -> Result<Composition> {
    let count = rng.gen_range(1..=MATERIAL_SLOTS);
    let blend = sample_distinct("material blends", MATERIAL_BLENDS, count, rng)?;
    let percentages = normalize(&blend.iter().map(|(_, w)| *w).collect::<Vec<_>>());
    let parts = blend
        .iter()
        .zip(percentages)
        .map(|((name, _), pct)| (*name, pct))
        .collect::<Vec<_>>();

    Ok(fill(&parts))
}

/// Composition whose percentages don't add up to 100.
pub fn compose_invalid() -> Composition {
    fill(&INVALID_COMPOSITION)
}

/// Single material at 100%.
pub fn compose_single<R: Rng + ?Sized>(rng: &mut R) -> Result<Composition> {
    let name = pick("primary materials", PRIMARY_MATERIALS, rng)?;
    Ok(fill(&[(name, 100)]))
}
