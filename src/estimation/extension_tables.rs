//! Static tables for the extension cost calculator.
//!
//! Prices are in pounds sterling; multipliers are unitless.

use super::lookup::CatalogKey;

pub const VAT_RATE: f64 = 0.20;
pub const DEFAULT_MULTIPLIER: f64 = 1.0;
pub const DEFAULT_CONTINGENCY_RATE: f64 = 0.10;
/// Used for sizes outside every band.
pub const DEFAULT_SIZE_MULTIPLIER: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionType {
    SingleStorey,
    DoubleStorey,
    Basement,
    Loft,
}

impl CatalogKey for ExtensionType {
    const CATALOG: &'static str = "extension type";
    const ALL: &'static [Self] = &[
        Self::SingleStorey,
        Self::DoubleStorey,
        Self::Basement,
        Self::Loft,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::SingleStorey => "singleStorey",
            Self::DoubleStorey => "doubleStorey",
            Self::Basement => "basement",
            Self::Loft => "loft",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    Terraced,
    SemiDetached,
    Detached,
    Flat,
    Maisonette,
}

impl CatalogKey for PropertyType {
    const CATALOG: &'static str = "property type";
    const ALL: &'static [Self] = &[
        Self::Terraced,
        Self::SemiDetached,
        Self::Detached,
        Self::Flat,
        Self::Maisonette,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Terraced => "terraced",
            Self::SemiDetached => "semiDetached",
            Self::Detached => "detached",
            Self::Flat => "flat",
            Self::Maisonette => "maisonette",
        }
    }
}

/// Regional build-cost zone; zone1 is the most expensive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationZone {
    Zone1,
    Zone2,
    Zone3,
    Zone4,
    Zone5,
}

impl CatalogKey for LocationZone {
    const CATALOG: &'static str = "location";
    const ALL: &'static [Self] = &[
        Self::Zone1,
        Self::Zone2,
        Self::Zone3,
        Self::Zone4,
        Self::Zone5,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Zone1 => "zone1",
            Self::Zone2 => "zone2",
            Self::Zone3 => "zone3",
            Self::Zone4 => "zone4",
            Self::Zone5 => "zone5",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
    VeryComplex,
}

impl CatalogKey for Complexity {
    const CATALOG: &'static str = "complexity";
    const ALL: &'static [Self] = &[
        Self::Simple,
        Self::Moderate,
        Self::Complex,
        Self::VeryComplex,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Moderate => "moderate",
            Self::Complex => "complex",
            Self::VeryComplex => "veryComplex",
        }
    }
}

/// Contingency buffer tiers. Simple and moderate projects share the
/// standard tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContingencyTier {
    Standard,
    Complex,
    VeryComplex,
}

impl ContingencyTier {
    pub fn for_complexity(complexity: Complexity) -> Self {
        match complexity {
            Complexity::Simple | Complexity::Moderate => Self::Standard,
            Complexity::Complex => Self::Complex,
            Complexity::VeryComplex => Self::VeryComplex,
        }
    }

    pub fn rate(self) -> f64 {
        match self {
            Self::Standard => 0.10,
            Self::Complex => 0.15,
            Self::VeryComplex => 0.20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    BifoldDoors,
    SlidingDoors,
    Skylights,
    RoofLantern,
    UnderfloorHeating,
    KitchenFitting,
    BathroomFitting,
    EnsuiteBathroom,
    UtilityRoom,
    ElectricalUpgrade,
    PlumbingRelocation,
    PremiumFlooring,
    Soundproofing,
    SmartHome,
    AirConditioning,
    SolarPanels,
    SteelBeams,
}

impl CatalogKey for Feature {
    const CATALOG: &'static str = "feature";
    const ALL: &'static [Self] = &[
        Self::BifoldDoors,
        Self::SlidingDoors,
        Self::Skylights,
        Self::RoofLantern,
        Self::UnderfloorHeating,
        Self::KitchenFitting,
        Self::BathroomFitting,
        Self::EnsuiteBathroom,
        Self::UtilityRoom,
        Self::ElectricalUpgrade,
        Self::PlumbingRelocation,
        Self::PremiumFlooring,
        Self::Soundproofing,
        Self::SmartHome,
        Self::AirConditioning,
        Self::SolarPanels,
        Self::SteelBeams,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::BifoldDoors => "bifoldDoors",
            Self::SlidingDoors => "slidingDoors",
            Self::Skylights => "skylights",
            Self::RoofLantern => "roofLantern",
            Self::UnderfloorHeating => "underfloorHeating",
            Self::KitchenFitting => "kitchenFitting",
            Self::BathroomFitting => "bathroomFitting",
            Self::EnsuiteBathroom => "ensuiteBathroom",
            Self::UtilityRoom => "utilityRoom",
            Self::ElectricalUpgrade => "electricalUpgrade",
            Self::PlumbingRelocation => "plumbingRelocation",
            Self::PremiumFlooring => "premiumFlooring",
            Self::Soundproofing => "soundproofing",
            Self::SmartHome => "smartHome",
            Self::AirConditioning => "airConditioning",
            Self::SolarPanels => "solarPanels",
            Self::SteelBeams => "steelBeams",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanningService {
    ArchitecturalDrawings,
    PlanningApplication,
    BuildingRegulations,
    StructuralEngineer,
    PartyWallAgreement,
}

impl CatalogKey for PlanningService {
    const CATALOG: &'static str = "planning service";
    const ALL: &'static [Self] = &[
        Self::ArchitecturalDrawings,
        Self::PlanningApplication,
        Self::BuildingRegulations,
        Self::StructuralEngineer,
        Self::PartyWallAgreement,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::ArchitecturalDrawings => "architecturalDrawings",
            Self::PlanningApplication => "planningApplication",
            Self::BuildingRegulations => "buildingRegulations",
            Self::StructuralEngineer => "structuralEngineer",
            Self::PartyWallAgreement => "partyWallAgreement",
        }
    }
}

/// Pounds per square metre. No default: an unknown type is an error.
pub const BASE_COST_PER_SQM: &[(ExtensionType, f64)] = &[
    (ExtensionType::SingleStorey, 2500.0),
    (ExtensionType::DoubleStorey, 2200.0),
    (ExtensionType::Basement, 4000.0),
    (ExtensionType::Loft, 1800.0),
];

/// Typical build duration before size and complexity scaling.
pub const BASE_BUILD_WEEKS: &[(ExtensionType, f64)] = &[
    (ExtensionType::SingleStorey, 12.0),
    (ExtensionType::DoubleStorey, 16.0),
    (ExtensionType::Basement, 24.0),
    (ExtensionType::Loft, 10.0),
];

/// Economies of scale by floor area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeBand {
    pub min: f64,
    pub max: f64,
    pub multiplier: f64,
}

impl SizeBand {
    pub fn contains(&self, size: f64) -> bool {
        size >= self.min && size <= self.max
    }
}

// Bounds are inclusive; fractional sizes between bands (e.g. 20.5) match none.
pub const SIZE_BANDS: &[SizeBand] = &[
    SizeBand {
        min: 0.0,
        max: 20.0,
        multiplier: 1.10,
    },
    SizeBand {
        min: 21.0,
        max: 40.0,
        multiplier: 1.00,
    },
    SizeBand {
        min: 41.0,
        max: 100.0,
        multiplier: 0.90,
    },
    SizeBand {
        min: 101.0,
        max: 200.0,
        multiplier: 0.85,
    },
];

pub const LOCATION_MULTIPLIERS: &[(LocationZone, f64)] = &[
    (LocationZone::Zone1, 1.5),
    (LocationZone::Zone2, 1.35),
    (LocationZone::Zone3, 1.2),
    (LocationZone::Zone4, 1.1),
    (LocationZone::Zone5, 1.0),
];

pub const PROPERTY_MULTIPLIERS: &[(PropertyType, f64)] = &[
    (PropertyType::Terraced, 1.0),
    (PropertyType::SemiDetached, 1.05),
    (PropertyType::Detached, 1.1),
    (PropertyType::Flat, 1.15),
    (PropertyType::Maisonette, 1.1),
];

pub const COMPLEXITY_MULTIPLIERS: &[(Complexity, f64)] = &[
    (Complexity::Simple, 1.0),
    (Complexity::Moderate, 1.15),
    (Complexity::Complex, 1.3),
    (Complexity::VeryComplex, 1.5),
];

/// Build-time scaling by complexity; unknown tiers take 1.0.
pub const COMPLEXITY_TIMELINE_FACTORS: &[(Complexity, f64)] = &[
    (Complexity::Simple, 1.0),
    (Complexity::Moderate, 1.15),
    (Complexity::Complex, 1.3),
    (Complexity::VeryComplex, 1.5),
];

/// Build-time scaling by floor area: (upper bound inclusive, factor).
pub const TIMELINE_SIZE_FACTORS: &[(f64, f64)] = &[(20.0, 0.8), (40.0, 1.0), (100.0, 1.2)];
pub const TIMELINE_LARGE_SIZE_FACTOR: f64 = 1.4;

/// Flat contribution per selected feature.
pub const FEATURE_COSTS: &[(Feature, f64)] = &[
    (Feature::BifoldDoors, 3500.0),
    (Feature::SlidingDoors, 3000.0),
    (Feature::Skylights, 1200.0),
    (Feature::RoofLantern, 3500.0),
    (Feature::UnderfloorHeating, 2500.0),
    (Feature::KitchenFitting, 8000.0),
    (Feature::BathroomFitting, 5000.0),
    (Feature::EnsuiteBathroom, 6000.0),
    (Feature::UtilityRoom, 3000.0),
    (Feature::ElectricalUpgrade, 2000.0),
    (Feature::PlumbingRelocation, 1800.0),
    (Feature::PremiumFlooring, 2500.0),
    (Feature::Soundproofing, 1500.0),
    (Feature::SmartHome, 2000.0),
    (Feature::AirConditioning, 3000.0),
    (Feature::SolarPanels, 6000.0),
    (Feature::SteelBeams, 2500.0),
];

pub const PLANNING_FEES: &[(PlanningService, f64)] = &[
    (PlanningService::ArchitecturalDrawings, 2500.0),
    (PlanningService::PlanningApplication, 500.0),
    (PlanningService::BuildingRegulations, 1200.0),
    (PlanningService::StructuralEngineer, 1500.0),
    (PlanningService::PartyWallAgreement, 1000.0),
];
