//! Static tables for the heating (BTU) calculator.

use super::lookup::CatalogKey;

/// UK rule of thumb for floor-area heating load.
pub const BTU_PER_SQ_FT: f64 = 18.0;
pub const SQ_FT_PER_SQ_M: f64 = 10.764;
pub const FT_PER_M: f64 = 3.281;

/// Ceilings above this height (feet) add a surcharge.
pub const STANDARD_CEILING_FT: f64 = 8.0;
/// Surcharge per foot above [`STANDARD_CEILING_FT`].
pub const CEILING_SURCHARGE_PER_FT: f64 = 0.10;

pub const BTU_PER_WINDOW: f64 = 500.0;
pub const BTU_PER_DOOR: f64 = 300.0;
pub const BTU_PER_OUTSIDE_WALL: f64 = 200.0;
/// Assumed two-person occupancy; not derived from input.
pub const OCCUPANCY_BTU: f64 = 200.0;
pub const KITCHEN_APPLIANCE_BTU: f64 = 500.0;
pub const DEFAULT_APPLIANCE_BTU: f64 = 100.0;

pub const SAFETY_MARGIN: f64 = 1.15;

/// Radiator option thresholds (strictly greater than).
pub const TWO_RADIATOR_THRESHOLD: i64 = 1500;
pub const THREE_RADIATOR_THRESHOLD: i64 = 3000;

pub const DEFAULT_MULTIPLIER: f64 = 1.0;
pub const DEFAULT_COST_PER_BTU: f64 = 0.40;
pub const DEFAULT_INSTALLATION_FEE: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomType {
    LivingRoom,
    Bedroom,
    Bathroom,
    Kitchen,
    DiningRoom,
    StudyOffice,
    Hallway,
    UtilityRoom,
}

impl CatalogKey for RoomType {
    const CATALOG: &'static str = "room type";
    const ALL: &'static [Self] = &[
        Self::LivingRoom,
        Self::Bedroom,
        Self::Bathroom,
        Self::Kitchen,
        Self::DiningRoom,
        Self::StudyOffice,
        Self::Hallway,
        Self::UtilityRoom,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::LivingRoom => "Living Room",
            Self::Bedroom => "Bedroom",
            Self::Bathroom => "Bathroom",
            Self::Kitchen => "Kitchen",
            Self::DiningRoom => "Dining Room",
            Self::StudyOffice => "Study/Office",
            Self::Hallway => "Hallway",
            Self::UtilityRoom => "Utility Room",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsulationLevel {
    Excellent,
    Good,
    Average,
    Poor,
}

impl CatalogKey for InsulationLevel {
    const CATALOG: &'static str = "insulation level";
    const ALL: &'static [Self] = &[Self::Excellent, Self::Good, Self::Average, Self::Poor];

    fn key(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::Poor => "Poor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatingType {
    GasRadiator,
    ElectricRadiator,
    UnderfloorHeating,
}

impl CatalogKey for HeatingType {
    const CATALOG: &'static str = "heating type";
    const ALL: &'static [Self] = &[
        Self::GasRadiator,
        Self::ElectricRadiator,
        Self::UnderfloorHeating,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::GasRadiator => "Gas Radiator",
            Self::ElectricRadiator => "Electric Radiator",
            Self::UnderfloorHeating => "Underfloor Heating",
        }
    }
}

pub const ROOM_TYPE_MULTIPLIERS: &[(RoomType, f64)] = &[
    (RoomType::LivingRoom, 1.0),
    (RoomType::Bedroom, 0.9),
    (RoomType::Bathroom, 1.2),
    (RoomType::Kitchen, 0.9),
    (RoomType::DiningRoom, 1.0),
    (RoomType::StudyOffice, 1.0),
    (RoomType::Hallway, 0.8),
    (RoomType::UtilityRoom, 0.85),
];

pub const INSULATION_MULTIPLIERS: &[(InsulationLevel, f64)] = &[
    (InsulationLevel::Excellent, 0.8),
    (InsulationLevel::Good, 1.0),
    (InsulationLevel::Average, 1.15),
    (InsulationLevel::Poor, 1.3),
];

pub const HEATING_TYPE_MULTIPLIERS: &[(HeatingType, f64)] = &[
    (HeatingType::GasRadiator, 1.0),
    (HeatingType::ElectricRadiator, 1.1),
    (HeatingType::UnderfloorHeating, 0.85),
];

/// Emitter cost in pounds per BTU of capacity.
pub const COST_PER_BTU: &[(HeatingType, f64)] = &[
    (HeatingType::GasRadiator, 0.10),
    (HeatingType::ElectricRadiator, 0.17),
    (HeatingType::UnderfloorHeating, 0.70),
];

/// Flat installation fee in pounds.
pub const INSTALLATION_FEES: &[(HeatingType, f64)] = &[
    (HeatingType::GasRadiator, 300.0),
    (HeatingType::ElectricRadiator, 150.0),
    (HeatingType::UnderfloorHeating, 80.0),
];
