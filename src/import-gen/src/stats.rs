use tracing::info;

use crate::policy::Fault;
use crate::synthesizer::Row;
use crate::synthesizer::Synthesizer;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub total_rows: usize,
    pub unique_upids: usize,
    pub unique_skus: usize,
    pub missing_identifiers: usize,
    pub missing_product_name: usize,
    pub duplicate_faults: usize,
    pub missing_faults: usize,
    pub invalid_faults: usize,
    pub with_description: usize,
    pub with_materials: usize,
    pub with_care_codes: usize,
    pub with_eco_claims: usize,
}

fn percent(n: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.;
    }
    n as f64 / total as f64 * 100.
}

impl Statistics {
    pub fn collect(rows: &[Row], synthesizer: &Synthesizer) -> Self {
        let mut stats = Statistics {
            total_rows: rows.len(),
            unique_upids: synthesizer.upids().len(),
            unique_skus: synthesizer.skus().len(),
            ..Default::default()
        };

        for row in rows {
            let rec = &row.record;
            match row.fault {
                Some(Fault::Duplicate) => stats.duplicate_faults += 1,
                Some(Fault::Missing) => stats.missing_faults += 1,
                Some(Fault::Invalid) => stats.invalid_faults += 1,
                None => {}
            }
            if rec.is_missing_identifiers() {
                stats.missing_identifiers += 1;
            }
            if rec.product_name.is_empty() {
                stats.missing_product_name += 1;
            }
            if !rec.description.is_empty() {
                stats.with_description += 1;
            }
            if !rec.materials[0].name.is_empty() {
                stats.with_materials += 1;
            }
            if !rec.care_codes.is_empty() {
                stats.with_care_codes += 1;
            }
            if !rec.eco_claims.is_empty() {
                stats.with_eco_claims += 1;
            }
        }

        stats
    }

    pub fn faulty_rows(&self) -> usize {
        self.duplicate_faults + self.missing_faults + self.invalid_faults
    }

    pub fn log(&self) {
        let total = self.total_rows;
        info!("total rows: {total}");
        info!("unique UPIDs: {}", self.unique_upids);
        info!("unique SKUs: {}", self.unique_skus);
        info!("rows missing both UPID and SKU: {}", self.missing_identifiers);
        info!("rows missing product_name: {}", self.missing_product_name);
        info!(
            "faulty rows: {} (duplicate {}, missing {}, invalid {})",
            self.faulty_rows(),
            self.duplicate_faults,
            self.missing_faults,
            self.invalid_faults
        );
        for (name, n) in [
            ("descriptions", self.with_description),
            ("materials", self.with_materials),
            ("care codes", self.with_care_codes),
            ("eco claims", self.with_eco_claims),
        ] {
            info!("{name}: {n}/{total} ({:.1}%)", percent(n, total));
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::scenario::Scenario;

    #[test]
    fn test_collect() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut synth = Synthesizer::new(Scenario::MissingFields);
        let rows = (1..=500)
            .map(|idx| synth.synthesize(idx, &mut rng).unwrap())
            .collect::<Vec<_>>();
        let stats = Statistics::collect(&rows, &synth);

        assert_eq!(stats.total_rows, 500);
        assert_eq!(stats.with_materials, 500);
        assert_eq!(stats.faulty_rows(), stats.missing_faults);
        assert!(stats.missing_faults > 0);
        assert_eq!(
            stats.missing_identifiers + stats.missing_product_name,
            stats.missing_faults
        );
        assert_eq!(stats.unique_upids, 500 - stats.missing_identifiers);
    }

    #[test]
    fn test_percent_of_nothing() {
        assert_eq!(percent(0, 0), 0.);
        assert_eq!(percent(1, 4), 25.);
    }
}
