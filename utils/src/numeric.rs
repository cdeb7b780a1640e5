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

pub fn round_float_to(float: f64, decimal_places: u32) -> f64 {
    let precision_factor = 10f64.powi(decimal_places as i32);
    (float * precision_factor).round() / precision_factor
}

/// Round `val` up to the next multiple of `multiple`. Anything below a single
/// multiple gets rounded up to `multiple` so an axis never collapses to zero.
pub fn round_up_to_nearest_multiple(val: f64, multiple: f64) -> f64 {
    if val < multiple {
        return multiple;
    }
    (val / multiple).ceil() * multiple
}
