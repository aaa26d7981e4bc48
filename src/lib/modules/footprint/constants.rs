// base water requirement [l/kg] and irrigation efficiency factors [-]
pub const WHEAT_BASE: f64 = 1300.0;
pub const WHEAT_DRIP: f64 = 0.85;
pub const WHEAT_SPRINKLER: f64 = 1.0;
pub const WHEAT_FLOOD: f64 = 1.2;

pub const RICE_BASE: f64 = 2500.0;
pub const RICE_DRIP: f64 = 0.9;
pub const RICE_SPRINKLER: f64 = 1.1;
pub const RICE_FLOOD: f64 = 1.3;

pub const CORN_BASE: f64 = 900.0;
pub const CORN_DRIP: f64 = 0.8;
pub const CORN_SPRINKLER: f64 = 0.95;
pub const CORN_FLOOD: f64 = 1.15;

pub const COTTON_BASE: f64 = 8000.0;
pub const COTTON_DRIP: f64 = 0.75;
pub const COTTON_SPRINKLER: f64 = 0.9;
pub const COTTON_FLOOD: f64 = 1.1;

pub const SUGARCANE_BASE: f64 = 150.0;
pub const SUGARCANE_DRIP: f64 = 0.7;
pub const SUGARCANE_SPRINKLER: f64 = 0.85;
pub const SUGARCANE_FLOOD: f64 = 1.05;

// rainfall bands [mm]
pub const RAINFALL_LOW_TH: f64 = 300.0;
pub const RAINFALL_HIGH_TH: f64 = 800.0;
pub const RAINFALL_LOW: f64 = 1.2;
pub const RAINFALL_MEDIUM: f64 = 1.0;
pub const RAINFALL_HIGH: f64 = 0.8;

// temperature bands [°C]
pub const TEMPERATURE_COOL_TH: f64 = 20.0;
pub const TEMPERATURE_HOT_TH: f64 = 30.0;
pub const TEMPERATURE_COOL: f64 = 0.9;
pub const TEMPERATURE_MODERATE: f64 = 1.0;
pub const TEMPERATURE_HOT: f64 = 1.15;

// footprint above base * ratio is flagged as inefficient
pub const HIGH_FOOTPRINT_RATIO: f64 = 1.1;
