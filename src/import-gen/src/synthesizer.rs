use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::CatalogPool;
use crate::catalog::CARE_CODES;
use crate::catalog::DESCRIPTION_SEASONS;
use crate::catalog::ECO_CLAIMS;
use crate::catalog::IMAGE_DOMAINS;
use crate::catalog::PRIMARY_MATERIALS;
use crate::catalog::PRODUCT_STYLES;
use crate::catalog::PRODUCT_TYPES;
use crate::catalog::SEASONS;
use crate::error::Result;
use crate::identifiers::IdentifierKind;
use crate::identifiers::IdentifierPool;
use crate::materials;
use crate::policy::make_policy;
use crate::policy::Coverage;
use crate::policy::Fault;
use crate::policy::Fields;
use crate::policy::Policy;
use crate::probability::chance;
use crate::probability::pick;
use crate::probability::sample_distinct;
use crate::record::Record;
use crate::scenario::Scenario;

pub const MAX_PRODUCT_NAME_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 2000;

const OVERSIZED_PRODUCT_NAME_LEN: usize = 150;
const OVERSIZED_DESCRIPTION_LEN: usize = 2500;
const DISALLOWED_PRODUCT_NAME: &str = "Product@#$%^&*()";
const MALFORMED_URL: &str = "not-a-valid-url";
const MAX_CARE_CODES: usize = 3;
const MAX_ECO_CLAIMS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Violation {
    OversizedName,
    OversizedDescription,
    BadComposition,
}

// the first invalid rows of a run go through these in order, later ones are drawn at random
const FORCED_VIOLATIONS: [Violation; 3] = [
    Violation::OversizedName,
    Violation::OversizedDescription,
    Violation::BadComposition,
];

#[derive(Debug, Clone)]
pub struct Row {
    /// 1-based position in the generated file.
    pub index: usize,
    pub fault: Option<Fault>,
    pub record: Record,
}

/// Builds product import rows for one scenario. Owns the identifiers emitted so far, so a
/// single synthesizer must be used for the whole run.
pub struct Synthesizer {
    scenario: Scenario,
    policy: Policy,
    coverage: Coverage,
    upids: IdentifierPool,
    skus: IdentifierPool,
    repeated_identifier: bool,
    invalid_rows: usize,
}

impl Synthesizer {
    pub fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            policy: make_policy(scenario),
            coverage: Coverage::default(),
            upids: IdentifierPool::new(IdentifierKind::Upid),
            skus: IdentifierPool::new(IdentifierKind::Sku),
            repeated_identifier: false,
            invalid_rows: 0,
        }
    }

    pub fn try_with_policy(scenario: Scenario, policy: Policy) -> Result<Self> {
        policy.validate()?;
        Ok(Self {
            policy,
            ..Self::new(scenario)
        })
    }

    pub fn scenario(&self) -> Scenario {
        self.scenario
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn upids(&self) -> &IdentifierPool {
        &self.upids
    }

    pub fn skus(&self) -> &IdentifierPool {
        &self.skus
    }

    pub fn synthesize<R: Rng + ?Sized>(&mut self, index: usize, rng: &mut R) -> Result<Row> {
        if self.policy.fields == Fields::Required {
            return Ok(Row {
                index,
                fault: None,
                record: self.required_only(rng)?,
            });
        }

        let fault = self.select_fault(index, rng);
        let is_invalid = fault == Some(Fault::Invalid);
        let forced = if is_invalid {
            let forced = FORCED_VIOLATIONS.get(self.invalid_rows).copied();
            self.invalid_rows += 1;
            forced
        } else {
            None
        };
        let pool = if chance(rng, self.policy.mapped_catalog) {
            CatalogPool::Mapped
        } else {
            CatalogPool::Unmapped
        };

        let mut rec = Record::default();

        let mut missing_identifiers = false;
        match fault {
            Some(Fault::Missing) if chance(rng, self.policy.missing_identifiers) => {
                missing_identifiers = true;
            }
            Some(Fault::Duplicate) => {
                // until something repeats, duplicate rows always reuse a UPID
                let upid_reuse = if self.repeated_identifier {
                    self.policy.duplicate_reuse
                } else {
                    1.
                };
                let (upids, skus) = (self.upids.len(), self.skus.len());
                rec.upid = self.upids.fresh_or_reuse(rng, upid_reuse)?;
                rec.sku = self.skus.fresh_or_reuse(rng, self.policy.duplicate_reuse)?;
                if self.upids.len() == upids || self.skus.len() == skus {
                    self.repeated_identifier = true;
                }
            }
            _ => {
                rec.upid = self.upids.fresh(rng)?;
                rec.sku = self.skus.fresh(rng)?;
            }
        }

        rec.product_name = match fault {
            // a missing row always lacks a required field
            Some(Fault::Missing) if !missing_identifiers => String::new(),
            Some(Fault::Invalid) if forced == Some(Violation::OversizedName) => {
                "A".repeat(OVERSIZED_PRODUCT_NAME_LEN)
            }
            Some(Fault::Invalid) if chance(rng, self.policy.invalid_name) => {
                invalid_product_name(rng)
            }
            _ => product_name(rng)?,
        };

        let include_description = chance(rng, self.coverage.description);
        rec.description = if forced == Some(Violation::OversizedDescription)
            || (is_invalid && chance(rng, self.policy.invalid_description))
        {
            "D".repeat(OVERSIZED_DESCRIPTION_LEN)
        } else if include_description {
            description(rng)?
        } else {
            String::new()
        };

        if chance(rng, self.coverage.category) {
            rec.category_name = pick("categories", pool.categories(), rng)?.to_string();
        }
        if chance(rng, self.coverage.season) {
            rec.season = pick("seasons", SEASONS, rng)?.to_string();
        }

        let include_images = chance(rng, self.coverage.images);
        rec.primary_image_url = if is_invalid && chance(rng, self.policy.invalid_url) {
            MALFORMED_URL.to_string()
        } else if include_images {
            image_url(rng)?
        } else {
            String::new()
        };
        if include_images && chance(rng, self.coverage.secondary_image) {
            rec.product_image_url = if is_invalid && chance(rng, self.policy.invalid_url) {
                MALFORMED_URL.to_string()
            } else {
                image_url(rng)?
            };
        }

        if chance(rng, self.coverage.color) {
            rec.color_name = pick("colors", pool.colors(), rng)?.to_string();
        }
        if chance(rng, self.coverage.size) {
            rec.size_name = pick("sizes", pool.sizes(), rng)?.to_string();
        }

        rec.materials = if forced == Some(Violation::BadComposition)
            || (is_invalid && chance(rng, self.policy.invalid_materials))
        {
            materials::compose_invalid()
        } else {
            materials::compose(rng)?
        };

        if chance(rng, self.coverage.care_codes) {
            rec.care_codes = joined("care codes", CARE_CODES, MAX_CARE_CODES, rng)?;
        }
        if chance(rng, self.coverage.eco_claims) {
            rec.eco_claims = joined("eco claims", ECO_CLAIMS, MAX_ECO_CLAIMS, rng)?;
        }
        if chance(rng, self.coverage.environment_score) {
            rec.environment_score = rng.gen_range(50..=100u32).to_string();
        }

        Ok(Row {
            index,
            fault,
            record: rec,
        })
    }

    fn select_fault<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> Option<Fault> {
        if index <= self.policy.fault_after_row || !chance(rng, self.policy.fault_rate) {
            return None;
        }

        self.policy.fault_kinds.choose(rng).copied()
    }

    fn required_only<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Record> {
        Ok(Record {
            product_name: product_name(rng)?,
            upid: self.upids.fresh(rng)?,
            sku: self.skus.fresh(rng)?,
            materials: materials::compose_single(rng)?,
            ..Default::default()
        })
    }
}

fn product_name<R: Rng + ?Sized>(rng: &mut R) -> Result<String> {
    let style = pick("product styles", PRODUCT_STYLES, rng)?;
    let ptype = pick("product types", PRODUCT_TYPES, rng)?;
    let material = pick("primary materials", PRIMARY_MATERIALS, rng)?;

    Ok(match rng.gen_range(0..4) {
        0 => format!("{style} {ptype}"),
        1 => format!("{material} {ptype}"),
        2 => format!("{style} {material} {ptype}"),
        _ => ptype.to_string(),
    })
}

fn invalid_product_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    match rng.gen_range(0..3) {
        0 => "A".repeat(OVERSIZED_PRODUCT_NAME_LEN),
        1 => String::new(),
        _ => DISALLOWED_PRODUCT_NAME.to_string(),
    }
}

fn description<R: Rng + ?Sized>(rng: &mut R) -> Result<String> {
    let product = pick("product types", PRODUCT_TYPES, rng)?.to_lowercase();
    let material = pick("primary materials", PRIMARY_MATERIALS, rng)?.to_lowercase();
    let style = pick("product styles", PRODUCT_STYLES, rng)?.to_lowercase();
    let season = pick("description seasons", DESCRIPTION_SEASONS, rng)?;

    Ok(match rng.gen_range(0..5) {
        0 => format!(
            "A comfortable and stylish {product} perfect for everyday wear. Made with high-quality {material}."
        ),
        1 => format!(
            "Discover the {style} {product} crafted from premium {material}. Ideal for any occasion."
        ),
        2 => format!(
            "Elevate your wardrobe with this {style} {product}. Features exceptional quality and durability."
        ),
        3 => format!(
            "Classic {product} design meets modern comfort. Made from sustainable {material}."
        ),
        _ => format!(
            "The perfect {product} for the {season} season. Combines style with functionality."
        ),
    })
}

fn image_url<R: Rng + ?Sized>(rng: &mut R) -> Result<String> {
    let domain = pick("image domains", IMAGE_DOMAINS, rng)?;
    Ok(format!(
        "https://{domain}/products/product-{}.jpg",
        rng.gen_range(1000..=9999u32)
    ))
}

fn joined<R: Rng + ?Sized>(
    pool: &'static str,
    values: &[&'static str],
    max: usize,
    rng: &mut R,
) -> Result<String> {
    let amount = rng.gen_range(1..=max);
    Ok(sample_distinct(pool, values, amount, rng)?.join(","))
}
