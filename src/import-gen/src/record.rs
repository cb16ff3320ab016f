use strum_macros::Display;

pub const FIELDS_COUNT: usize = 19;

pub const FIELD_NAMES: [&str; FIELDS_COUNT] = [
    "product_name",
    "upid",
    "sku",
    "description",
    "category_name",
    "season",
    "primary_image_url",
    "color_name",
    "size_name",
    "product_image_url",
    "material_1_name",
    "material_1_percentage",
    "material_2_name",
    "material_2_percentage",
    "material_3_name",
    "material_3_percentage",
    "care_codes",
    "eco_claims",
    "environment_score",
];

// positionally aligned with FIELD_NAMES
pub const RENAMED_FIELD_NAMES: [&str; FIELDS_COUNT] = [
    "ProductName",
    "UPID",
    "SKU",
    "Description",
    "Category",
    "Season",
    "PrimaryImage",
    "ColorName",
    "SizeName",
    "ProductImage",
    "Material1",
    "Material1Pct",
    "Material2",
    "Material2Pct",
    "Material3",
    "Material3Pct",
    "CareCodes",
    "EcoClaims",
    "EnvScore",
];

pub const MATERIAL_SLOTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Header {
    #[strum(serialize = "standard")]
    Standard,
    /// Column names the importer doesn't recognize.
    #[strum(serialize = "renamed")]
    Renamed,
}

impl Header {
    pub fn names(&self) -> &'static [&'static str; FIELDS_COUNT] {
        match self {
            Header::Standard => &FIELD_NAMES,
            Header::Renamed => &RENAMED_FIELD_NAMES,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Material {
    pub name: String,
    pub percentage: String,
}

/// One product import line. Every column is always present, empty strings stand for
/// omitted values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub product_name: String,
    pub upid: String,
    pub sku: String,
    pub description: String,
    pub category_name: String,
    pub season: String,
    pub primary_image_url: String,
    pub color_name: String,
    pub size_name: String,
    pub product_image_url: String,
    pub materials: [Material; MATERIAL_SLOTS],
    pub care_codes: String,
    pub eco_claims: String,
    pub environment_score: String,
}

impl Record {
    pub fn values(&self) -> [&str; FIELDS_COUNT] {
        [
            self.product_name.as_str(),
            self.upid.as_str(),
            self.sku.as_str(),
            self.description.as_str(),
            self.category_name.as_str(),
            self.season.as_str(),
            self.primary_image_url.as_str(),
            self.color_name.as_str(),
            self.size_name.as_str(),
            self.product_image_url.as_str(),
            self.materials[0].name.as_str(),
            self.materials[0].percentage.as_str(),
            self.materials[1].name.as_str(),
            self.materials[1].percentage.as_str(),
            self.materials[2].name.as_str(),
            self.materials[2].percentage.as_str(),
            self.care_codes.as_str(),
            self.eco_claims.as_str(),
            self.environment_score.as_str(),
        ]
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        FIELD_NAMES
            .iter()
            .position(|name| *name == field)
            .map(|idx| self.values()[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        FIELD_NAMES.into_iter().zip(self.values())
    }

    pub fn is_missing_identifiers(&self) -> bool {
        self.upid.is_empty() && self.sku.is_empty()
    }

    /// Sum of the non-empty material percentages, `None` if any of them isn't a number.
    pub fn materials_total(&self) -> Option<i64> {
        self.materials
            .iter()
            .filter(|m| !m.percentage.is_empty())
            .map(|m| m.percentage.parse::<i64>().ok())
            .sum()
    }
}
