//! Playfield constants, run configuration and its fail-fast validation
//!
//! Everything that tunes the simulation lives here: screen and road
//! dimensions, entity sizes, spawn/speed bands and the per-level score
//! targets. `Config` is the record the selection menu emits; resolving it
//! is the one place a collaborator contract violation can surface.

use std::ops::RangeInclusive;

use macroquad::prelude::Color;
use thiserror::Error;

use crate::theme::CAR_COLORS;

// =============================================================================
// Screen & road
// =============================================================================

pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

/// Width of the drivable strip, centered on screen
pub const ROAD_WIDTH: f32 = 400.0;

pub const ROAD_LEFT: f32 = (SCREEN_WIDTH - ROAD_WIDTH) / 2.0;
pub const ROAD_RIGHT: f32 = ROAD_LEFT + ROAD_WIDTH;

/// Gap kept between decorations and the road / screen edges
pub const VERGE_MARGIN: f32 = 10.0;

// =============================================================================
// Entity dimensions
// =============================================================================

pub const CAR_WIDTH: f32 = 60.0;
pub const CAR_HEIGHT: f32 = 100.0;

/// Fixed car row near the bottom of the screen
pub const CAR_Y: f32 = SCREEN_HEIGHT - CAR_HEIGHT - 20.0;

pub const PERSON_WIDTH: f32 = 30.0;
pub const PERSON_HEIGHT: f32 = 50.0;

pub const BOX_WIDTH: f32 = 40.0;
pub const BOX_HEIGHT: f32 = 40.0;

pub const TREE_WIDTH: f32 = 60.0;
pub const TREE_HEIGHT: f32 = 100.0;
pub const HOUSE_WIDTH: f32 = 80.0;
pub const HOUSE_HEIGHT: f32 = 80.0;
pub const ROCKET_WIDTH: f32 = 40.0;
pub const ROCKET_HEIGHT: f32 = 80.0;

// =============================================================================
// Speeds & scoring
// =============================================================================

pub const INITIAL_CAR_SPEED: f32 = 5.0;
pub const SPEED_INCREMENT: f32 = 0.2;
pub const MAX_SPEED: f32 = 15.0;

/// Downward speed bands, in pixels per tick (inclusive, whole-pixel steps)
pub const PERSON_SPEED: RangeInclusive<i32> = 2..=5;
pub const BOX_SPEED: RangeInclusive<i32> = 3..=6;
pub const DECORATION_SPEED: RangeInclusive<i32> = 1..=3;

/// Spawn re-arm intervals, in ticks
pub const PERSON_SPAWN_INTERVAL: RangeInclusive<u32> = 45..=100;
pub const BOX_SPAWN_INTERVAL: RangeInclusive<u32> = 60..=140;
pub const DECORATION_SPAWN_INTERVAL: RangeInclusive<u32> = 50..=120;

/// Points per collected box
pub const BOX_REWARD: u32 = 5;

/// Score threshold for each level; clearing the last one wins the run
pub const LEVEL_TARGETS: [u32; 5] = [10, 25, 45, 70, 100];

// =============================================================================
// Road markings
// =============================================================================

pub const LINE_WIDTH: f32 = 10.0;
pub const LINE_HEIGHT: f32 = 20.0;
pub const LINE_SPACING: f32 = 50.0;

/// Markers respawn here after scrolling past the bottom
pub const LINE_RESET_Y: f32 = -40.0;

// =============================================================================
// Car models
// =============================================================================

/// The four selectable car bodies, each with hand-specified geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarModel {
    Mercedes = 0,
    Bmw = 1,
    Lamborghini = 2,
    Zhiguli = 3,
}

impl CarModel {
    pub const ALL: [CarModel; 4] = [
        CarModel::Mercedes,
        CarModel::Bmw,
        CarModel::Lamborghini,
        CarModel::Zhiguli,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Display name for the menu
    pub fn label(&self) -> &'static str {
        match self {
            CarModel::Mercedes => "Mercedes",
            CarModel::Bmw => "BMW",
            CarModel::Lamborghini => "Lamborghini",
            CarModel::Zhiguli => "Zhiguli",
        }
    }

    /// Index into [`CAR_COLORS`] used for the menu preview before the
    /// player picks a color
    pub fn default_color_index(&self) -> usize {
        match self {
            CarModel::Mercedes => 5,   // silver
            CarModel::Bmw => 1,        // blue
            CarModel::Lamborghini => 3, // yellow
            CarModel::Zhiguli => 0,    // red
        }
    }

    pub fn from_index(i: usize) -> Option<CarModel> {
        Self::ALL.get(i).copied()
    }
}

// =============================================================================
// Time of day
// =============================================================================

/// Backdrop recipe selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Day = 0,
    Night = 1,
    Sunset = 2,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 3] = [TimeOfDay::Day, TimeOfDay::Night, TimeOfDay::Sunset];

    pub const COUNT: usize = Self::ALL.len();

    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::Day => "Day",
            TimeOfDay::Night => "Night",
            TimeOfDay::Sunset => "Sunset",
        }
    }

    pub fn from_index(i: usize) -> Option<TimeOfDay> {
        Self::ALL.get(i).copied()
    }
}

// =============================================================================
// Run configuration
// =============================================================================

/// Raw selection indices as emitted by the menu's cyclic selectors.
/// Kept as indices so the menu stays a dumb counter; `resolve` turns them
/// into typed values and is where out-of-range input fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub car_model: usize,
    pub car_color: usize,
    pub time_of_day: usize,
}

/// Collaborator handed us a selection outside the fixed option sets.
/// Not a runtime condition to recover from, so surfaced at construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown car model index {0} (have {count})", count = CarModel::COUNT)]
    UnknownCarModel(usize),
    #[error("car color index {0} outside palette of {count}", count = CAR_COLORS.len())]
    UnknownCarColor(usize),
    #[error("unknown time of day index {0} (have {count})", count = TimeOfDay::COUNT)]
    UnknownTimeOfDay(usize),
}

impl Config {
    /// Validate and convert the raw indices into typed selections.
    pub fn resolve(&self) -> Result<(CarModel, Color, TimeOfDay), ConfigError> {
        let model = CarModel::from_index(self.car_model)
            .ok_or(ConfigError::UnknownCarModel(self.car_model))?;
        let color = CAR_COLORS
            .get(self.car_color)
            .copied()
            .ok_or(ConfigError::UnknownCarColor(self.car_color))?;
        let time = TimeOfDay::from_index(self.time_of_day)
            .ok_or(ConfigError::UnknownTimeOfDay(self.time_of_day))?;
        Ok((model, color, time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_accepts_all_menu_combinations() {
        for m in 0..CarModel::COUNT {
            for c in 0..CAR_COLORS.len() {
                for t in 0..TimeOfDay::COUNT {
                    let cfg = Config { car_model: m, car_color: c, time_of_day: t };
                    assert!(cfg.resolve().is_ok());
                }
            }
        }
    }

    #[test]
    fn resolve_rejects_out_of_range_indices() {
        let cfg = Config { car_model: 4, car_color: 0, time_of_day: 0 };
        assert_eq!(cfg.resolve(), Err(ConfigError::UnknownCarModel(4)));

        let cfg = Config { car_model: 0, car_color: 8, time_of_day: 0 };
        assert_eq!(cfg.resolve(), Err(ConfigError::UnknownCarColor(8)));

        let cfg = Config { car_model: 0, car_color: 0, time_of_day: 3 };
        assert_eq!(cfg.resolve(), Err(ConfigError::UnknownTimeOfDay(3)));
    }

    #[test]
    fn road_is_centered() {
        assert_eq!(ROAD_LEFT, 200.0);
        assert_eq!(ROAD_RIGHT, 600.0);
    }
}
