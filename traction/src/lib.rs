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

//! Longitudinal traction model for a single degree of freedom car.
//!
//! Everything in here is a pure function of a [`ParameterSet`]: the power needed
//! to stay on the traction limit across a speed range, and forward Euler
//! integration of the time taken to reach a speed for a given horsepower.

pub mod surface;
pub mod params;
pub mod power_curve;
pub mod acceleration;
pub mod insights;

pub use surface::{RoadCondition, RollingSurface, SurfaceParseError};
pub use params::ParameterSet;
pub use power_curve::{compute_power_curve, PowerCurvePoint};
pub use acceleration::{compute_acceleration_sweep, compute_time_to_speed, simulate, AccelerationResult, AccelerationSweep, Outcome};
pub use insights::Insights;
