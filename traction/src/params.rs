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

use serde::{Deserialize, Serialize};
use crate::surface::{RoadCondition, RollingSurface};

pub const GRAVITY: f64 = 9.81; // m/s^2
pub const AIR_DENSITY: f64 = 1.225; // kg/m³ (at sea level)
pub const DRAG_COEFFICIENT: f64 = 0.23;
pub const FRONTAL_AREA: f64 = 2.2; // m^2
pub const DRIVETRAIN_EFFICIENCY: f64 = 0.95;
/// Allows momentary use of more than the static friction (launch control)
pub const LAUNCH_BOOST_FACTOR: f64 = 1.2;
pub const AWD_TRACTION_BOOST: f64 = 1.3;
/// Share of the car's mass used as the traction baseline while launching
pub const LAUNCH_WEIGHT_FACTOR: f64 = 0.5;
/// Below this speed (m/s) the launch traction limit applies
pub const LAUNCH_SPEED_THRESHOLD: f64 = 5.0;

pub const MIN_MASS_KG: f64 = 1000.0;
pub const MAX_MASS_KG: f64 = 2500.0;
pub const MASS_STEP_KG: f64 = 50.0;
pub const DEFAULT_MASS_KG: f64 = 1800.0;


/// Physical inputs shared by the power curve and the acceleration model.
///
/// Only the mass, friction coefficient and rolling-resistance coefficient are
/// tunable; the remaining values describe a modern performance EV and are
/// fixed by [`ParameterSet::new`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    pub mass: f64,
    pub friction_coefficient: f64,
    pub rolling_resistance_coefficient: f64,
    pub drag_coefficient: f64,
    pub frontal_area: f64,
    pub air_density: f64,
    pub drivetrain_efficiency: f64,
    pub launch_boost_factor: f64,
    pub awd_traction_boost: f64,
}

impl ParameterSet {
    pub fn new(mass: f64, friction_coefficient: f64, rolling_resistance_coefficient: f64) -> ParameterSet {
        ParameterSet {
            mass,
            friction_coefficient,
            rolling_resistance_coefficient,
            drag_coefficient: DRAG_COEFFICIENT,
            frontal_area: FRONTAL_AREA,
            air_density: AIR_DENSITY,
            drivetrain_efficiency: DRIVETRAIN_EFFICIENCY,
            launch_boost_factor: LAUNCH_BOOST_FACTOR,
            awd_traction_boost: AWD_TRACTION_BOOST,
        }
    }

    pub fn from_surfaces(mass: f64, road: RoadCondition, surface: RollingSurface) -> ParameterSet {
        ParameterSet::new(mass, road.friction_coefficient(), surface.rolling_resistance_coefficient())
    }

    pub fn gravitational_force(&self) -> f64 {
        self.mass * GRAVITY
    }

    /// Maximum force the tyres can put down with launch control, in N.
    /// Doesn't vary with speed; this is a grip ceiling rather than a torque curve.
    pub fn max_tractive_force(&self) -> f64 {
        self.gravitational_force() * self.friction_coefficient * self.launch_boost_factor
    }

    pub fn max_acceleration(&self) -> f64 {
        self.max_tractive_force() / self.mass
    }

    pub fn max_acceleration_g(&self) -> f64 {
        self.max_acceleration() / GRAVITY
    }

    pub fn rolling_resistance_force(&self) -> f64 {
        self.rolling_resistance_coefficient * self.mass * GRAVITY
    }

    pub fn drag_force_at(&self, speed: f64) -> f64 {
        0.5 * self.air_density * self.drag_coefficient * self.frontal_area * (speed * speed)
    }

    pub fn total_resistance_at(&self, speed: f64) -> f64 {
        self.rolling_resistance_force() + self.drag_force_at(speed)
    }

    /// Grip ceiling while launching. Weight transfer and AWD let the car use more
    /// than its static grip, measured against half of its mass.
    pub fn launch_traction_limit(&self) -> f64 {
        (self.mass * LAUNCH_WEIGHT_FACTOR) * GRAVITY
            * self.friction_coefficient
            * self.awd_traction_boost
            * self.launch_boost_factor
    }

    pub fn cruise_traction_limit(&self) -> f64 {
        self.gravitational_force() * self.friction_coefficient
    }

    pub fn traction_limit_at(&self, speed: f64) -> f64 {
        if speed < LAUNCH_SPEED_THRESHOLD {
            self.launch_traction_limit()
        } else {
            self.cruise_traction_limit()
        }
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        ParameterSet::from_surfaces(DEFAULT_MASS_KG, RoadCondition::default(), RollingSurface::default())
    }
}

#[cfg(test)]
mod tests {
    use crate::params::{ParameterSet, DEFAULT_MASS_KG};
    use crate::surface::{RoadCondition, RollingSurface};

    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    #[test]
    fn default_is_performance_ev_on_dry_asphalt() {
        let params = ParameterSet::default();
        assert_eq!(params.mass, DEFAULT_MASS_KG);
        assert_eq!(params.friction_coefficient, 1.0);
        assert_eq!(params.rolling_resistance_coefficient, 0.013);
        assert_eq!(params, ParameterSet::new(1800.0, 1.0, 0.013));
    }

    #[test]
    fn derived_forces() {
        let params = ParameterSet::from_surfaces(1800.0, RoadCondition::DryAsphaltPerformance, RollingSurface::AsphaltConcrete);
        assert!(approx_eq(params.max_tractive_force(), 21189.6, 0.001));
        assert!(approx_eq(params.rolling_resistance_force(), 229.554, 0.001));
        assert!(approx_eq(params.launch_traction_limit(), 13773.24, 0.001));
        assert!(approx_eq(params.cruise_traction_limit(), 17658.0, 0.001));
        assert!(approx_eq(params.max_acceleration(), 11.772, 0.0001));
        assert!(approx_eq(params.max_acceleration_g(), 1.2, 0.0001));
        assert_eq!(params.drag_force_at(0.0), 0.0);
        assert!(approx_eq(params.drag_force_at(10.0), 30.9925, 0.0001));
    }

    #[test]
    fn traction_limit_switches_at_launch_threshold() {
        let params = ParameterSet::default();
        assert_eq!(params.traction_limit_at(0.01), params.launch_traction_limit());
        assert_eq!(params.traction_limit_at(4.99), params.launch_traction_limit());
        assert_eq!(params.traction_limit_at(5.0), params.cruise_traction_limit());
        assert_eq!(params.traction_limit_at(50.0), params.cruise_traction_limit());
    }
}
