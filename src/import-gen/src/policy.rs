use strum_macros::Display;

use crate::error::ImportGenError;
use crate::error::Result;
use crate::record::Header;
use crate::scenario::Scenario;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Fault {
    #[strum(serialize = "duplicate")]
    Duplicate,
    #[strum(serialize = "missing")]
    Missing,
    #[strum(serialize = "invalid")]
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fields {
    /// Required and optional fields.
    Full,
    /// Name, identifiers and a single 100% material only.
    Required,
}

/// Per-scenario corruption policy. All probabilities are in `[0, 1]`.
#[derive(Debug, Clone)]
pub struct Policy {
    pub fault_rate: f64,
    // rows with index <= fault_after_row are never faulted
    pub fault_after_row: usize,
    pub fault_kinds: &'static [Fault],
    pub duplicate_reuse: f64,
    pub missing_identifiers: f64,
    pub invalid_name: f64,
    pub invalid_description: f64,
    pub invalid_url: f64,
    pub invalid_materials: f64,
    pub mapped_catalog: f64,
    pub fields: Fields,
    pub header: Header,
    pub emits_rows: bool,
}

/// Probabilities of filling optional fields, applied regardless of the row fault.
#[derive(Debug, Clone)]
pub struct Coverage {
    pub description: f64,
    pub category: f64,
    pub season: f64,
    pub images: f64,
    pub secondary_image: f64,
    pub color: f64,
    pub size: f64,
    pub care_codes: f64,
    pub eco_claims: f64,
    pub environment_score: f64,
}

impl Default for Coverage {
    fn default() -> Self {
        Self {
            description: 0.7,
            category: 0.8,
            season: 0.6,
            images: 0.5,
            secondary_image: 0.5,
            color: 0.8,
            size: 0.8,
            care_codes: 0.6,
            eco_claims: 0.6,
            environment_score: 0.7,
        }
    }
}

const DUPLICATE_REUSE_PROBABILITY: f64 = 0.3;
const DUPLICATES_AFTER_ROW: usize = 10;

pub fn make_policy(scenario: Scenario) -> Policy {
    let base = Policy {
        fault_rate: 0.,
        fault_after_row: 0,
        fault_kinds: &[],
        duplicate_reuse: DUPLICATE_REUSE_PROBABILITY,
        missing_identifiers: 0.5,
        invalid_name: 0.3,
        invalid_description: 0.2,
        invalid_url: 0.2,
        invalid_materials: 0.15,
        mapped_catalog: 1.,
        fields: Fields::Full,
        header: Header::Standard,
        emits_rows: true,
    };

    match scenario {
        Scenario::Valid => base,
        Scenario::Duplicates => Policy {
            fault_rate: 1.,
            fault_after_row: DUPLICATES_AFTER_ROW,
            fault_kinds: &[Fault::Duplicate],
            ..base
        },
        Scenario::MissingFields => Policy {
            fault_rate: 0.2,
            fault_kinds: &[Fault::Missing],
            ..base
        },
        Scenario::InvalidFormats => Policy {
            fault_rate: 0.2,
            fault_kinds: &[Fault::Invalid],
            ..base
        },
        Scenario::Mixed => Policy {
            fault_rate: 0.1,
            fault_kinds: &[Fault::Duplicate, Fault::Missing, Fault::Invalid],
            mapped_catalog: 0.5,
            ..base
        },
        Scenario::Unmapped => Policy {
            mapped_catalog: 0.,
            ..base
        },
        Scenario::WrongHeaders => Policy {
            header: Header::Renamed,
            ..base
        },
        Scenario::Minimal => Policy {
            fields: Fields::Required,
            ..base
        },
        Scenario::Empty => Policy {
            emits_rows: false,
            ..base
        },
        Scenario::LargeMixed => Policy {
            mapped_catalog: 0.3,
            ..base
        },
    }
}

impl Policy {
    pub fn with_duplicate_reuse(mut self, probability: f64) -> Self {
        self.duplicate_reuse = probability;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let probabilities = [
            ("fault_rate", self.fault_rate),
            ("duplicate_reuse", self.duplicate_reuse),
            ("missing_identifiers", self.missing_identifiers),
            ("invalid_name", self.invalid_name),
            ("invalid_description", self.invalid_description),
            ("invalid_url", self.invalid_url),
            ("invalid_materials", self.invalid_materials),
            ("mapped_catalog", self.mapped_catalog),
        ];
        for (name, value) in probabilities {
            if !(0. ..=1.).contains(&value) {
                return Err(ImportGenError::InvalidProbability { name, value });
            }
        }

        if self.fault_rate > 0. && self.fault_kinds.is_empty() {
            return Err(ImportGenError::PoolTooSmall {
                pool: "fault kinds",
                requested: 1,
                available: 0,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use enum_iterator::all;

    use super::*;

    #[test]
    fn test_every_scenario_policy_is_valid() {
        for scenario in all::<Scenario>() {
            make_policy(scenario).validate().unwrap();
        }
    }

    #[test]
    fn test_only_error_scenarios_fault() {
        let faulting = all::<Scenario>()
            .filter(|s| make_policy(*s).fault_rate > 0.)
            .collect::<Vec<_>>();
        assert_eq!(faulting, vec![
            Scenario::Duplicates,
            Scenario::MissingFields,
            Scenario::InvalidFormats,
            Scenario::Mixed,
        ]);
    }

    #[test]
    fn test_duplicate_reuse_override() {
        let policy = make_policy(Scenario::Duplicates).with_duplicate_reuse(1.);
        assert_eq!(policy.duplicate_reuse, 1.);
        assert!(policy.validate().is_ok());

        let policy = make_policy(Scenario::Duplicates).with_duplicate_reuse(1.5);
        assert!(matches!(
            policy.validate(),
            Err(ImportGenError::InvalidProbability {
                name: "duplicate_reuse",
                ..
            })
        ));
    }
}
