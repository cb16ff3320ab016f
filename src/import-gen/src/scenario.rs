use clap::ValueEnum;
use enum_iterator::Sequence;
use serde::Deserialize;
use strum_macros::Display;
use strum_macros::EnumString;

#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    Display,
    EnumString,
    Sequence,
    ValueEnum,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[value(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    Valid,
    Duplicates,
    MissingFields,
    InvalidFormats,
    Mixed,
    Unmapped,
    WrongHeaders,
    Minimal,
    Empty,
    LargeMixed,
}

impl Scenario {
    /// File name used for this scenario in the generated test suite.
    pub fn suite_file_name(&self) -> &'static str {
        match self {
            Scenario::Valid => "test-01-valid-data.csv",
            Scenario::Duplicates => "test-02-duplicates.csv",
            Scenario::Unmapped => "test-03-unmapped-values.csv",
            Scenario::MissingFields => "test-04-missing-required.csv",
            Scenario::InvalidFormats => "test-05-invalid-formats.csv",
            Scenario::WrongHeaders => "test-06-wrong-headers.csv",
            Scenario::Mixed => "test-07-mixed-errors.csv",
            Scenario::Minimal => "test-08-minimal-required.csv",
            Scenario::Empty => "test-09-empty.csv",
            Scenario::LargeMixed => "test-10-large-mixed.csv",
        }
    }

    pub fn about(&self) -> &'static str {
        match self {
            Scenario::Valid => "all valid mapped values",
            Scenario::Duplicates => "duplicate UPIDs/SKUs after row 10",
            Scenario::MissingFields => "missing required fields (20% of rows)",
            Scenario::InvalidFormats => "invalid URLs, field lengths and compositions (20% of rows)",
            Scenario::Mixed => "mix of all error types (10% of rows)",
            Scenario::Unmapped => "unmapped colors, sizes and categories",
            Scenario::WrongHeaders => "incorrect header names",
            Scenario::Minimal => "only required fields populated",
            Scenario::Empty => "header only, no data rows",
            Scenario::LargeMixed => "realistic mix (70% unmapped)",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use enum_iterator::all;

    use super::*;

    #[test]
    fn test_snake_case_names() {
        for scenario in all::<Scenario>() {
            let name = scenario.to_string();
            assert_eq!(<Scenario as FromStr>::from_str(&name).unwrap(), scenario);
        }
        assert_eq!(Scenario::MissingFields.to_string(), "missing_fields");
        assert_eq!(Scenario::LargeMixed.to_string(), "large_mixed");
    }

    #[test]
    fn test_suite_file_names_are_ordered() {
        let names = all::<Scenario>()
            .map(|s| s.suite_file_name())
            .collect::<Vec<_>>();
        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), names.len());
        assert_eq!(sorted[0], "test-01-valid-data.csv");
        assert_eq!(sorted[9], "test-10-large-mixed.csv");
    }
}
