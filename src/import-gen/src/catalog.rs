//! Reference data the synthesizer draws from.

pub const PRODUCT_TYPES: &[&str] = &[
    "T-Shirt",
    "Polo Shirt",
    "Dress Shirt",
    "Sweater",
    "Hoodie",
    "Jeans",
    "Chinos",
    "Shorts",
    "Dress Pants",
    "Joggers",
    "Jacket",
    "Blazer",
    "Coat",
    "Vest",
    "Parka",
    "Dress",
    "Skirt",
    "Blouse",
    "Cardigan",
    "Tank Top",
];

pub const PRODUCT_STYLES: &[&str] = &[
    "Classic",
    "Slim Fit",
    "Regular Fit",
    "Oversized",
    "Fitted",
    "Vintage",
    "Modern",
    "Casual",
    "Formal",
    "Athletic",
    "Premium",
    "Essential",
    "Signature",
    "Limited Edition",
    "Heritage",
];

pub const PRIMARY_MATERIALS: &[&str] = &[
    "Cotton", "Polyester", "Wool", "Linen", "Silk", "Denim", "Leather", "Suede", "Cashmere",
    "Fleece",
];

/// Blend components and their relative weights. Weights are normalized to percentages
/// when a composition is drawn.
pub const MATERIAL_BLENDS: &[(&str, u32)] = &[
    ("Cotton", 65),
    ("Organic Cotton", 100),
    ("Polyester", 35),
    ("Recycled Polyester", 88),
    ("Wool", 80),
    ("Merino Wool", 100),
    ("Elastane", 5),
    ("Nylon", 20),
    ("Linen", 70),
    ("Viscose", 60),
    ("Cashmere", 30),
    ("Silk", 40),
];

pub const SEASONS: &[&str] = &[
    "Spring 2024",
    "Summer 2024",
    "Fall 2024",
    "Winter 2024",
    "Spring/Summer 2024",
    "Fall/Winter 2024",
    "SS24",
    "FW24",
    "AW24",
    "SS25",
];

pub const DESCRIPTION_SEASONS: &[&str] = &["spring", "summer", "fall", "winter"];

pub const CARE_CODES: &[&str] = &[
    "MACHINE_WASH",
    "HAND_WASH",
    "DRY_CLEAN",
    "TUMBLE_DRY",
    "DO_NOT_BLEACH",
    "IRON_LOW_HEAT",
    "DO_NOT_IRON",
];

pub const ECO_CLAIMS: &[&str] = &[
    "ORGANIC",
    "RECYCLED",
    "CARBON_NEUTRAL",
    "GOTS_CERTIFIED",
    "FAIR_TRADE",
    "OEKO_TEX",
    "BLUESIGN",
    "CRADLE_TO_CRADLE",
];

pub const IMAGE_DOMAINS: &[&str] = &[
    "cdn.example.com",
    "images.product-store.com",
    "assets.fashion-brand.com",
];

pub const SKU_PREFIXES: &[&str] = &["TSH", "PNT", "JKT", "DRS", "SHT"];

/// Values present in the target catalog.
pub mod mapped {
    pub const COLORS: &[&str] = &["Black", "White", "Navy", "Gray", "Beige"];
    pub const SIZES: &[&str] = &["XS", "S", "M", "L", "XL"];
    pub const CATEGORIES: &[&str] = &["Tops", "Bottoms", "Outerwear", "Dresses"];
}

/// Values the target catalog doesn't know about. Disjoint from [`mapped`].
pub mod unmapped {
    pub const COLORS: &[&str] = &[
        "Coral",
        "Burgundy",
        "Orange",
        "Pink",
        "Navy Blue",
        "Light Gray",
        "Olive Green",
        "Mustard",
        "Teal",
        "Lavender",
        "Crimson",
        "Charcoal",
    ];
    pub const SIZES: &[&str] = &["2XL", "3XL", "XXS", "One Size"];
    pub const CATEGORIES: &[&str] = &[
        "Accessories",
        "Footwear",
        "T-Shirts",
        "Shirts",
        "Activewear",
        "Loungewear",
        "Swimwear",
        "Underwear",
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogPool {
    Mapped,
    Unmapped,
}

impl CatalogPool {
    pub fn colors(&self) -> &'static [&'static str] {
        match self {
            CatalogPool::Mapped => mapped::COLORS,
            CatalogPool::Unmapped => unmapped::COLORS,
        }
    }

    pub fn sizes(&self) -> &'static [&'static str] {
        match self {
            CatalogPool::Mapped => mapped::SIZES,
            CatalogPool::Unmapped => unmapped::SIZES,
        }
    }

    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            CatalogPool::Mapped => mapped::CATEGORIES,
            CatalogPool::Unmapped => unmapped::CATEGORIES,
        }
    }
}
