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

use std::error::Error;
use std::path::Path;
use itertools::Itertools;
use plotters::prelude::*;
use utils::numeric::round_up_to_nearest_multiple;
use traction::insights::ReferenceTime;
use traction::power_curve::{PowerCurvePoint, REFERENCE_CAR_HP};
use traction::AccelerationResult;

const CHART_SIZE: (u32, u32) = (800, 600);
const ORANGE: RGBColor = RGBColor(255, 115, 0);
const PURPLE: RGBColor = RGBColor(136, 132, 216);
const SEA_GREEN: RGBColor = RGBColor(130, 202, 157);

pub struct ReferenceLine {
    pub value: f64,
    pub label: String,
    pub colour: RGBColor
}

impl ReferenceLine {
    pub fn new(value: f64, label: &str, colour: RGBColor) -> ReferenceLine {
        ReferenceLine { value, label: label.to_string(), colour }
    }
}

fn as_usize(x: &f64) -> String {
    format!("{}", *x as usize)
}

fn caption_font() -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, 22.0, FontStyle::Normal)
}

fn label_font() -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, 12.0, FontStyle::Normal)
}

pub fn draw_power_curve(path: &Path,
                        curve: &[PowerCurvePoint],
                        power_limited_point: Option<&PowerCurvePoint>) -> Result<(), Box<dyn Error>> {
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let max_hp = curve.iter().map(|p| p.horsepower_required).max().unwrap_or(0) as f64;
    let x_axis_limit = curve.last().map(|p| p.speed_kmh).unwrap_or(200.0) + 5.0;
    let y_axis_limit = round_up_to_nearest_multiple(max_hp.max(REFERENCE_CAR_HP), 100.0);
    let mut context = ChartBuilder::on(&root)
        .margin(15)
        .caption("Power vs Speed", caption_font().color(&BLACK))
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .build_cartesian_2d(0f64..x_axis_limit, 0f64..y_axis_limit)?;

    context
        .configure_mesh()
        .x_labels(10)
        .x_label_formatter(&as_usize)
        .x_desc("Speed (km/h)")
        .y_desc("Horsepower Required")
        .draw()?;

    context
        .draw_series(LineSeries::new(curve.iter().map(|p| (p.speed_kmh, p.horsepower_required as f64)), &PURPLE))?
        .label("Required Horsepower")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &PURPLE));

    context
        .draw_series(LineSeries::new(vec![(0.0, REFERENCE_CAR_HP), (x_axis_limit, REFERENCE_CAR_HP)], &RED))?
        .label(format!("{} HP Car", REFERENCE_CAR_HP))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    if let Some(point) = power_limited_point {
        context
            .draw_series(LineSeries::new(vec![(point.speed_kmh, 0.0), (point.speed_kmh, y_axis_limit)], &GREEN))?
            .label("Power-Limited Point")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &GREEN));
    }

    context
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

pub fn draw_acceleration_times(path: &Path,
                               title: &str,
                               series: &[AccelerationResult],
                               colour: RGBColor,
                               reference_lines: &[ReferenceLine],
                               reference_times: &[ReferenceTime]) -> Result<(), Box<dyn Error>> {
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let (min_hp, max_hp) = series.iter().map(|r| r.horsepower).minmax().into_option().unwrap_or((0.0, 0.0));
    let max_time = series.iter()
        .map(|r| r.time_s)
        .chain(reference_lines.iter().map(|l| l.value))
        .fold(0f64, f64::max);
    let x_axis_start = (min_hp - 100.0).max(0.0);
    let x_axis_limit = round_up_to_nearest_multiple(max_hp + 1.0, 100.0);
    let y_axis_limit = round_up_to_nearest_multiple(max_time + 1.0, 5.0);
    let mut context = ChartBuilder::on(&root)
        .margin(15)
        .caption(title, caption_font().color(&BLACK))
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .build_cartesian_2d(x_axis_start..x_axis_limit, 0f64..y_axis_limit)?;

    context
        .configure_mesh()
        .x_labels(15)
        .x_label_formatter(&as_usize)
        .x_desc("Horsepower")
        .y_desc(format!("{} (seconds)", title))
        .draw()?;

    context
        .draw_series(LineSeries::new(series.iter().map(|r| (r.horsepower, r.time_s)), &colour))?
        .label(title)
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], colour));
    context.draw_series(series.iter().map(|r| Circle::new((r.horsepower, r.time_s), 3, colour.filled())))?;

    for line in reference_lines {
        let line_colour = line.colour;
        context
            .draw_series(LineSeries::new(vec![(x_axis_start, line.value), (x_axis_limit, line.value)], &line_colour))?
            .label(line.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_colour));
    }

    for reference in reference_times {
        let position = (reference.vehicle.horsepower, reference.modelled_time_s);
        context.draw_series(std::iter::once(Circle::new(position, 6, BLACK.stroke_width(2))))?;
        context.draw_series(std::iter::once(
            Text::new(format!("{} (~{}HP)", reference.vehicle.name, reference.vehicle.horsepower),
                      position,
                      label_font())))?;
    }

    context
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

pub fn zero_to_100_reference_lines() -> Vec<ReferenceLine> {
    vec![ReferenceLine::new(2.0, "2.0s (hypercar)", GREEN),
         ReferenceLine::new(10.0, "10s (average car)", BLUE)]
}

pub fn zero_to_200_reference_lines() -> Vec<ReferenceLine> {
    vec![ReferenceLine::new(10.0, "10 seconds (hypercar)", GREEN)]
}

pub fn zero_to_100_colour() -> RGBColor {
    ORANGE
}

pub fn zero_to_200_colour() -> RGBColor {
    SEA_GREEN
}
