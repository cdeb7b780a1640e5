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

/// Mechanical horsepower in watts
pub const WATTS_PER_HP: f64 = 745.7;

/// Number of km/h in 1 m/s
pub const KMH_PER_MS: f64 = 3.6;

pub fn kmh_to_ms(speed_kmh: f64) -> f64 {
    speed_kmh / KMH_PER_MS
}

pub fn ms_to_kmh(speed_ms: f64) -> f64 {
    speed_ms * KMH_PER_MS
}

pub fn hp_to_watts(power_hp: f64) -> f64 {
    power_hp * WATTS_PER_HP
}

pub fn watts_to_hp(power_watts: f64) -> f64 {
    power_watts / WATTS_PER_HP
}
