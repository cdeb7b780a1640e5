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
use serde::{Deserialize, Serialize};
use utils::numeric::round_float_to;
use crate::acceleration::{compute_time_to_speed, horsepower_for_time, AccelerationSweep, SWEEP_END_HP};
use crate::params::ParameterSet;
use crate::power_curve::{power_limited_point, PowerCurvePoint, REFERENCE_CAR_HP};

pub const HYPERCAR_TIME_S: f64 = 2.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReferenceVehicle {
    pub name: String,
    pub horsepower: f64,
    pub advertised_time_s: f64,
}

pub fn reference_vehicles() -> Vec<ReferenceVehicle> {
    [("Tesla Model S P100D", 780.0, 2.5),
     ("Tesla Model S Plaid", 1020.0, 2.1),
     ("EV with 1500HP", 1500.0, 1.9)]
        .into_iter()
        .map(|(name, horsepower, advertised_time_s)| ReferenceVehicle {
            name: name.to_string(),
            horsepower,
            advertised_time_s
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTime {
    pub vehicle: ReferenceVehicle,
    pub modelled_time_s: f64,
}

/// Summary of what the model says about a car
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub mass: f64,
    pub max_tractive_force: f64,
    pub max_acceleration: f64,
    pub max_acceleration_g: f64,
    /// Speed at which a 300HP car stops being traction limited
    pub power_limited_speed_kmh: Option<f64>,
    pub reference_times: Vec<ReferenceTime>,
    /// Lowest swept horsepower that does 0-100km/h in 2 seconds
    pub hypercar_horsepower: Option<f64>,
}

impl Insights {
    pub fn compute(params: &ParameterSet,
                   power_curve: &[PowerCurvePoint],
                   sweep: &AccelerationSweep) -> Insights {
        let reference_times = reference_vehicles().into_iter().map(|vehicle| {
            let modelled_time_s = compute_time_to_speed(params, vehicle.horsepower, 100.0);
            ReferenceTime { vehicle, modelled_time_s }
        }).collect();

        Insights {
            mass: params.mass,
            max_tractive_force: params.max_tractive_force().round(),
            max_acceleration: round_float_to(params.max_acceleration(), 2),
            max_acceleration_g: round_float_to(params.max_acceleration_g(), 2),
            power_limited_speed_kmh: power_limited_point(power_curve, REFERENCE_CAR_HP).map(|p| p.speed_kmh),
            reference_times,
            hypercar_horsepower: horsepower_for_time(&sweep.to_100, HYPERCAR_TIME_S),
        }
    }
}

impl Display for Insights {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Key Physics Insights:")?;
        writeln!(f, "  Maximum tractive force: {} N", self.max_tractive_force)?;
        writeln!(f, "  Maximum possible acceleration: {:.2} m/s² (about {:.2}g)",
                 self.max_acceleration, self.max_acceleration_g)?;
        match self.power_limited_speed_kmh {
            Some(speed) => writeln!(f, "  A {}HP car becomes power limited at {} km/h", REFERENCE_CAR_HP, speed)?,
            None => writeln!(f, "  A {}HP car stays traction limited up to 200 km/h", REFERENCE_CAR_HP)?
        }
        writeln!(f, "  Modelled 0-100 km/h times:")?;
        for reference in &self.reference_times {
            writeln!(f, "    {} (~{}HP): {}s (vs. advertised {}s)",
                     reference.vehicle.name,
                     reference.vehicle.horsepower,
                     reference.modelled_time_s,
                     reference.vehicle.advertised_time_s)?;
        }
        let hypercar_hp = match self.hypercar_horsepower {
            Some(hp) => format!("{}", hp),
            None => format!("over {}", SWEEP_END_HP)
        };
        write!(f, "  For {:.1}s acceleration, a {}kg car would need ~{}HP", HYPERCAR_TIME_S, self.mass, hypercar_hp)
    }
}
