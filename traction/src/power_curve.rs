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
use utils::units::{kmh_to_ms, watts_to_hp};
use crate::params::ParameterSet;

pub const CURVE_START_KMH: u32 = 5;
pub const CURVE_END_KMH: u32 = 200;
pub const CURVE_STEP_KMH: usize = 5;

/// Horsepower of the everyday car the power curve is usually compared against
pub const REFERENCE_CAR_HP: f64 = 300.0;


#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PowerCurvePoint {
    pub speed_kmh: f64,
    pub horsepower_required: u32,
}

/// Power needed at the wheels to stay on the traction limit at each speed from
/// 5 to 200 km/h in 5 km/h steps. Above the curve the car is grip limited,
/// below it the car is power limited.
pub fn compute_power_curve(params: &ParameterSet) -> Vec<PowerCurvePoint> {
    let max_tractive_force = params.max_tractive_force();
    (CURVE_START_KMH..=CURVE_END_KMH).step_by(CURVE_STEP_KMH).map(|speed_kmh| {
        let speed_kmh = speed_kmh as f64;
        let power_required = max_tractive_force * kmh_to_ms(speed_kmh);
        let horsepower_required = watts_to_hp(power_required) / params.drivetrain_efficiency;
        PowerCurvePoint {
            speed_kmh,
            horsepower_required: horsepower_required.round() as u32
        }
    }).collect()
}

/// First point on the curve at which a car making `available_hp` can no longer
/// stay on the traction limit
pub fn power_limited_point(curve: &[PowerCurvePoint], available_hp: f64) -> Option<&PowerCurvePoint> {
    curve.iter().find(|point| point.horsepower_required as f64 > available_hp)
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use crate::params::ParameterSet;
    use crate::power_curve::{compute_power_curve, power_limited_point, REFERENCE_CAR_HP};
    use crate::surface::{RoadCondition, RollingSurface};

    #[test]
    fn curve_covers_5_to_200_kmh() {
        let curve = compute_power_curve(&ParameterSet::default());
        assert_eq!(curve.len(), 40);
        assert_eq!(curve.first().unwrap().speed_kmh, 5.0);
        assert_eq!(curve.last().unwrap().speed_kmh, 200.0);
    }

    #[test]
    fn default_curve_values() {
        let curve = compute_power_curve(&ParameterSet::default());
        assert_eq!(curve[0].horsepower_required, 42);
        assert_eq!(curve[6].horsepower_required, 291);
        assert_eq!(curve[7].horsepower_required, 332);
        assert_eq!(curve[39].horsepower_required, 1662);
    }

    #[test]
    fn curve_is_ordered_and_non_decreasing() {
        for road in RoadCondition::ALL {
            for mass in [1000.0, 1800.0, 2500.0] {
                let params = ParameterSet::from_surfaces(mass, road, RollingSurface::AsphaltConcrete);
                let curve = compute_power_curve(&params);
                for (a, b) in curve.iter().tuple_windows() {
                    assert!(b.speed_kmh > a.speed_kmh);
                    assert!(b.horsepower_required >= a.horsepower_required);
                }
            }
        }
    }

    #[test]
    fn rolling_surface_does_not_affect_curve() {
        let asphalt = ParameterSet::from_surfaces(1500.0, RoadCondition::Gravel, RollingSurface::AsphaltConcrete);
        let field = ParameterSet::from_surfaces(1500.0, RoadCondition::Gravel, RollingSurface::Field);
        assert_eq!(compute_power_curve(&asphalt), compute_power_curve(&field));
    }

    #[test]
    fn curve_is_repeatable() {
        let params = ParameterSet::from_surfaces(2150.0, RoadCondition::WetAsphalt, RollingSurface::UnpavedRoad);
        assert_eq!(compute_power_curve(&params), compute_power_curve(&params));
    }

    #[test]
    fn power_limited_point_for_reference_car() {
        let curve = compute_power_curve(&ParameterSet::default());
        let point = power_limited_point(&curve, REFERENCE_CAR_HP).unwrap();
        assert_eq!(point.speed_kmh, 40.0);
        assert!(power_limited_point(&curve, 5000.0).is_none());
    }
}
