/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of grip-limit.
 *
 * grip-limit is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * grip-limit is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with grip-limit. If not, see <https://www.gnu.org/licenses/>.
 */

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceParseError {
    #[error("unknown road condition `{0}`")]
    UnknownRoadCondition(String),
    #[error("unknown rolling surface `{0}`")]
    UnknownRollingSurface(String),
}

/// Road conditions and their tyre/road friction coefficient (μ)
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum RoadCondition {
    #[default]
    DryAsphaltPerformance,
    DryAsphaltNormal,
    WetAsphalt,
    ConcreteWet,
    Gravel,
    EarthRoadDry,
    EarthRoadWet,
    SnowHardPacked,
    Ice,
}

impl RoadCondition {
    pub const ALL: [RoadCondition; 9] = [
        RoadCondition::DryAsphaltPerformance,
        RoadCondition::DryAsphaltNormal,
        RoadCondition::WetAsphalt,
        RoadCondition::ConcreteWet,
        RoadCondition::Gravel,
        RoadCondition::EarthRoadDry,
        RoadCondition::EarthRoadWet,
        RoadCondition::SnowHardPacked,
        RoadCondition::Ice,
    ];

    pub fn friction_coefficient(&self) -> f64 {
        match self {
            RoadCondition::DryAsphaltPerformance => 1.0,
            RoadCondition::DryAsphaltNormal => 0.85,
            RoadCondition::WetAsphalt => 0.6,
            RoadCondition::ConcreteWet => 0.8,
            RoadCondition::Gravel => 0.6,
            RoadCondition::EarthRoadDry => 0.68,
            RoadCondition::EarthRoadWet => 0.55,
            RoadCondition::SnowHardPacked => 0.2,
            RoadCondition::Ice => 0.1,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RoadCondition::DryAsphaltPerformance => "Dry Asphalt (Performance)",
            RoadCondition::DryAsphaltNormal => "Dry Asphalt (Normal)",
            RoadCondition::WetAsphalt => "Wet Asphalt",
            RoadCondition::ConcreteWet => "Concrete (Wet)",
            RoadCondition::Gravel => "Gravel",
            RoadCondition::EarthRoadDry => "Earth Road (Dry)",
            RoadCondition::EarthRoadWet => "Earth Road (Wet)",
            RoadCondition::SnowHardPacked => "Snow (Hard-packed)",
            RoadCondition::Ice => "Ice",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            RoadCondition::DryAsphaltPerformance => "dry_asphalt_performance",
            RoadCondition::DryAsphaltNormal => "dry_asphalt_normal",
            RoadCondition::WetAsphalt => "wet_asphalt",
            RoadCondition::ConcreteWet => "concrete_wet",
            RoadCondition::Gravel => "gravel",
            RoadCondition::EarthRoadDry => "earth_road_dry",
            RoadCondition::EarthRoadWet => "earth_road_wet",
            RoadCondition::SnowHardPacked => "snow_hard_packed",
            RoadCondition::Ice => "ice",
        }
    }
}

impl Display for RoadCondition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (μ={})", self.name(), self.friction_coefficient())
    }
}

impl FromStr for RoadCondition {
    type Err = SurfaceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        RoadCondition::ALL.into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s) || c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SurfaceParseError::UnknownRoadCondition(s.to_string()))
    }
}

/// Surfaces and their rolling-resistance coefficient (Cr)
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum RollingSurface {
    #[default]
    AsphaltConcrete,
    RolledGravel,
    UnpavedRoad,
    Field,
}

impl RollingSurface {
    pub const ALL: [RollingSurface; 4] = [
        RollingSurface::AsphaltConcrete,
        RollingSurface::RolledGravel,
        RollingSurface::UnpavedRoad,
        RollingSurface::Field,
    ];

    pub fn rolling_resistance_coefficient(&self) -> f64 {
        match self {
            RollingSurface::AsphaltConcrete => 0.013,
            RollingSurface::RolledGravel => 0.02,
            RollingSurface::UnpavedRoad => 0.05,
            // field resistance ranges from 0.10 to 0.35
            RollingSurface::Field => 0.225,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RollingSurface::AsphaltConcrete => "Asphalt/Concrete",
            RollingSurface::RolledGravel => "Rolled Gravel",
            RollingSurface::UnpavedRoad => "Unpaved Road",
            RollingSurface::Field => "Field",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            RollingSurface::AsphaltConcrete => "asphalt_concrete",
            RollingSurface::RolledGravel => "rolled_gravel",
            RollingSurface::UnpavedRoad => "unpaved_road",
            RollingSurface::Field => "field",
        }
    }
}

impl Display for RollingSurface {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (Cr={})", self.name(), self.rolling_resistance_coefficient())
    }
}

impl FromStr for RollingSurface {
    type Err = SurfaceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        RollingSurface::ALL.into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s) || c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SurfaceParseError::UnknownRollingSurface(s.to_string()))
    }
}
