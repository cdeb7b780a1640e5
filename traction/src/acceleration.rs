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
use tracing::debug;
use utils::numeric::round_float_to;
use utils::units::{hp_to_watts, kmh_to_ms};
use crate::params::ParameterSet;

pub const TIME_STEP: f64 = 0.01; // s
/// Starting speed in m/s. Never starts at zero so the power/speed division is always defined.
pub const INITIAL_SPEED: f64 = 0.01;
/// Acceleration (m/s^2) at or below which the car is considered unable to go any faster
pub const STALL_ACCELERATION: f64 = 0.01;
pub const TIME_HORIZON: f64 = 100.0; // s
/// Below this speed (m/s) the motor is modelled as constant torque
pub const CONSTANT_TORQUE_THRESHOLD: f64 = 15.0;
/// Floor for the speed used to turn power into force in the constant torque region
pub const MIN_FORCE_SPEED: f64 = 5.0;

/// Reported for a target that can't be reached, picked so charts keep a usable scale
pub const UNREACHABLE_HIGHWAY_TIME: f64 = 30.0;
pub const UNREACHABLE_HIGH_SPEED_TIME: f64 = 100.0;
pub const HIGH_SPEED_TARGET_KMH: f64 = 200.0;

pub const SWEEP_START_HP: u32 = 100;
pub const SWEEP_END_HP: u32 = 1600;
pub const SWEEP_STEP_HP: usize = 50;


#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    Reached,
    /// Net acceleration dropped to the stall threshold before the target speed
    Stalled,
    HorizonExceeded,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccelerationResult {
    pub horsepower: f64,
    pub target_speed_kmh: f64,
    /// Seconds to the target rounded to 0.1s, or the chart sentinel when it wasn't reached
    pub time_s: f64,
    pub outcome: Outcome,
}

impl AccelerationResult {
    pub fn is_achievable(&self) -> bool {
        self.outcome == Outcome::Reached
    }
}

pub fn unreachable_time_for(target_speed_kmh: f64) -> f64 {
    if target_speed_kmh >= HIGH_SPEED_TARGET_KMH {
        UNREACHABLE_HIGH_SPEED_TIME
    } else {
        UNREACHABLE_HIGHWAY_TIME
    }
}

/// Force the motor can deliver at `speed` before grip is taken into account.
///
/// Electric motors hold roughly constant torque up to ~54 km/h and constant power
/// after that. The divisor is floored at 5 m/s to stop the force running away at
/// very low speed.
fn motor_force_at(power_watts: f64, speed: f64) -> f64 {
    if speed < CONSTANT_TORQUE_THRESHOLD {
        power_watts / speed.max(MIN_FORCE_SPEED)
    } else {
        power_watts / speed
    }
}

/// Net acceleration in m/s^2 at `speed` with the motor output capped by grip
fn acceleration_at(params: &ParameterSet, power_watts: f64, speed: f64) -> f64 {
    let tractive_force = motor_force_at(power_watts, speed).min(params.traction_limit_at(speed));
    let net_force = tractive_force - params.total_resistance_at(speed);
    net_force / params.mass
}

/// Integrate the car's speed from rest with a fixed step forward Euler scheme
/// until `target_speed_kmh` is reached, the car stops accelerating, or the time
/// horizon runs out.
pub fn simulate(params: &ParameterSet, horsepower: f64, target_speed_kmh: f64) -> AccelerationResult {
    let target_speed = kmh_to_ms(target_speed_kmh);
    let power_watts = hp_to_watts(horsepower) * params.drivetrain_efficiency;

    let result = |time_s: f64, outcome: Outcome| AccelerationResult {
        horsepower,
        target_speed_kmh,
        time_s,
        outcome
    };

    let mut speed = INITIAL_SPEED;
    let mut time = 0.0;
    while speed < target_speed {
        let acceleration = acceleration_at(params, power_watts, speed);
        if acceleration <= STALL_ACCELERATION {
            debug!("{}hp stalled at {:.2}m/s on the way to {}km/h", horsepower, speed, target_speed_kmh);
            return result(unreachable_time_for(target_speed_kmh), Outcome::Stalled);
        }

        speed += acceleration * TIME_STEP;
        time += TIME_STEP;

        if time > TIME_HORIZON {
            debug!("{}hp didn't reach {}km/h within {}s", horsepower, target_speed_kmh, TIME_HORIZON);
            return result(TIME_HORIZON, Outcome::HorizonExceeded);
        }
    }
    result(round_float_to(time, 1), Outcome::Reached)
}

/// Seconds taken to reach `target_speed_kmh` from rest. Targets that can't be
/// reached produce the chart sentinel rather than an error; see [`simulate`]
/// to tell the two apart.
pub fn compute_time_to_speed(params: &ParameterSet, horsepower: f64, target_speed_kmh: f64) -> f64 {
    simulate(params, horsepower, target_speed_kmh).time_s
}

/// 0-100 and 0-200 km/h times over the standard horsepower range
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccelerationSweep {
    pub to_100: Vec<AccelerationResult>,
    pub to_200: Vec<AccelerationResult>,
}

pub fn sweep_horsepower_levels() -> impl Iterator<Item = f64> {
    (SWEEP_START_HP..=SWEEP_END_HP).step_by(SWEEP_STEP_HP).map(f64::from)
}

pub fn compute_acceleration_sweep(params: &ParameterSet) -> AccelerationSweep {
    let (to_100, to_200): (Vec<_>, Vec<_>) = sweep_horsepower_levels()
        .map(|hp| (simulate(params, hp, 100.0), simulate(params, hp, 200.0)))
        .unzip();
    AccelerationSweep { to_100, to_200 }
}

/// Lowest horsepower in `series` that gets to its target within `max_time_s`
pub fn horsepower_for_time(series: &[AccelerationResult], max_time_s: f64) -> Option<f64> {
    series.iter()
        .find(|r| r.is_achievable() && r.time_s <= max_time_s)
        .map(|r| r.horsepower)
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use crate::acceleration::{compute_acceleration_sweep, compute_time_to_speed, horsepower_for_time, motor_force_at, simulate, sweep_horsepower_levels, Outcome};
    use crate::params::ParameterSet;
    use crate::surface::{RoadCondition, RollingSurface};

    fn dry_performance() -> ParameterSet {
        ParameterSet::from_surfaces(1800.0, RoadCondition::DryAsphaltPerformance, RollingSurface::AsphaltConcrete)
    }

    #[test]
    fn motor_force_regions() {
        // constant torque with the divisor floored at 5m/s
        assert_eq!(motor_force_at(50000.0, 0.01), 10000.0);
        assert_eq!(motor_force_at(50000.0, 4.0), 10000.0);
        assert_eq!(motor_force_at(50000.0, 10.0), 5000.0);
        // constant power
        assert_eq!(motor_force_at(50000.0, 20.0), 2500.0);
    }

    #[test]
    fn p100d_zero_to_100() {
        let time = compute_time_to_speed(&dry_performance(), 780.0, 100.0);
        assert!(time >= 2.0 && time <= 3.5, "got {}", time);
    }

    #[test]
    fn plaid_is_never_slower_than_p100d() {
        let params = dry_performance();
        let p100d = compute_time_to_speed(&params, 780.0, 100.0);
        let plaid = compute_time_to_speed(&params, 1020.0, 100.0);
        assert!(plaid <= p100d);
    }

    #[test]
    fn more_power_helps_when_power_limited() {
        let params = dry_performance();
        let slow = compute_time_to_speed(&params, 200.0, 100.0);
        let quick = compute_time_to_speed(&params, 400.0, 100.0);
        assert!(quick < slow, "{} vs {}", quick, slow);
    }

    #[test]
    fn time_never_increases_with_power() {
        for road in [RoadCondition::DryAsphaltPerformance, RoadCondition::WetAsphalt, RoadCondition::Gravel] {
            let params = ParameterSet::from_surfaces(1800.0, road, RollingSurface::AsphaltConcrete);
            let sweep = compute_acceleration_sweep(&params);
            for series in [&sweep.to_100, &sweep.to_200] {
                for (a, b) in series.iter().tuple_windows() {
                    assert!(b.time_s <= a.time_s, "{:?} then {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn higher_target_never_quicker() {
        for road in RoadCondition::ALL {
            let params = ParameterSet::from_surfaces(1800.0, road, RollingSurface::RolledGravel);
            let sweep = compute_acceleration_sweep(&params);
            for (to_100, to_200) in sweep.to_100.iter().zip(sweep.to_200.iter()) {
                assert!(to_200.time_s >= to_100.time_s, "{:?} vs {:?}", to_100, to_200);
            }
        }
    }

    #[test]
    fn ice_is_slow_at_any_power() {
        let params = ParameterSet::from_surfaces(1800.0, RoadCondition::Ice, RollingSurface::AsphaltConcrete);
        for hp in sweep_horsepower_levels() {
            assert!(compute_time_to_speed(&params, hp, 100.0) > 20.0);
        }
    }

    #[test]
    fn no_power_stalls_with_sentinel() {
        let params = dry_performance();
        let to_100 = simulate(&params, 0.0, 100.0);
        assert_eq!(to_100.outcome, Outcome::Stalled);
        assert_eq!(to_100.time_s, 30.0);
        assert!(!to_100.is_achievable());

        let to_200 = simulate(&params, 0.0, 200.0);
        assert_eq!(to_200.outcome, Outcome::Stalled);
        assert_eq!(to_200.time_s, 100.0);
    }

    #[test]
    fn slow_creep_hits_time_horizon() {
        // rolling resistance leaves ~0.02m/s^2 of launch acceleration
        let params = ParameterSet::new(1000.0, 1.0, 0.77796);
        let result = simulate(&params, 500.0, 10.0);
        assert_eq!(result.outcome, Outcome::HorizonExceeded);
        assert_eq!(result.time_s, 100.0);
    }

    #[test]
    fn reached_time_is_rounded_to_tenth() {
        let result = simulate(&dry_performance(), 500.0, 100.0);
        assert_eq!(result.outcome, Outcome::Reached);
        assert_eq!((result.time_s * 10.0).round() / 10.0, result.time_s);
    }

    #[test]
    fn zero_target_takes_no_time() {
        assert_eq!(compute_time_to_speed(&dry_performance(), 500.0, 0.0), 0.0);
    }

    #[test]
    fn tolerates_masses_outside_ui_range() {
        let light = ParameterSet::new(300.0, 1.0, 0.013);
        let heavy = ParameterSet::new(40000.0, 0.85, 0.013);
        assert!(simulate(&light, 200.0, 100.0).is_achievable());
        assert!(compute_time_to_speed(&heavy, 400.0, 100.0) > compute_time_to_speed(&light, 400.0, 100.0));
    }

    #[test]
    fn results_are_repeatable() {
        let params = ParameterSet::from_surfaces(2300.0, RoadCondition::EarthRoadWet, RollingSurface::UnpavedRoad);
        assert_eq!(simulate(&params, 650.0, 200.0), simulate(&params, 650.0, 200.0));
        assert_eq!(compute_acceleration_sweep(&params), compute_acceleration_sweep(&params));
    }

    #[test]
    fn sweep_covers_100_to_1600_hp() {
        let sweep = compute_acceleration_sweep(&dry_performance());
        assert_eq!(sweep.to_100.len(), 31);
        assert_eq!(sweep.to_200.len(), 31);
        assert_eq!(sweep.to_100.first().unwrap().horsepower, 100.0);
        assert_eq!(sweep.to_200.last().unwrap().horsepower, 1600.0);
        assert!(sweep.to_100.iter().all(|r| r.target_speed_kmh == 100.0));
        assert!(sweep.to_200.iter().all(|r| r.target_speed_kmh == 200.0));
    }

    #[test]
    fn horsepower_for_time_picks_first_fast_enough() {
        let sweep = compute_acceleration_sweep(&dry_performance());
        // grip limited at ~3s so a 2s run is out of reach
        assert_eq!(horsepower_for_time(&sweep.to_100, 2.0), None);
        let hp = horsepower_for_time(&sweep.to_100, 10.0).unwrap();
        let result = sweep.to_100.iter().find(|r| r.horsepower == hp).unwrap();
        assert!(result.time_s <= 10.0);
        assert!(sweep.to_100.iter().filter(|r| r.horsepower < hp).all(|r| r.time_s > 10.0));
    }
}
