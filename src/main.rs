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

mod settings;
mod charts;

use std::env;
use std::fs;
use std::path::Path;
use tracing::{error, info};

use traction::power_curve::{power_limited_point, REFERENCE_CAR_HP};
use traction::{compute_acceleration_sweep, compute_power_curve, Insights};

use crate::settings::{GlobalSettings, SettingsError};


#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("io error")]
    IoError(#[from] std::io::Error),
    #[error("failed to load settings. {0}")]
    ConfigError(#[from] config::ConfigError),
    #[error("invalid settings. {0}")]
    SettingsError(#[from] SettingsError),
    #[error("failed to draw `{0}`. `{1}`")]
    ChartError(String, String),
}

fn init_logging() {
    match env::current_dir() {
        Ok(current_dir) => {
            let file_appender = tracing_appender::rolling::never(current_dir, "grip_limit.log");
            let subscriber = tracing_subscriber::fmt()
                .with_writer(file_appender)
                .with_ansi(false)
                .compact()
                .finish();
            match tracing::subscriber::set_global_default(subscriber) {
                Ok(_) => {
                    info!("Logging initialised");
                }
                Err(e) => {
                    eprintln!("Failed to init logging. {}", e.to_string());
                }
            }
        }
        Err(e) => {
            eprintln!("Failed to init logging. Couldn't determine current dir {}", e.to_string());
        }
    }
}

fn draw_chart<F>(path: &Path, draw: F) -> Result<(), AppError>
    where F: FnOnce(&Path) -> Result<(), Box<dyn std::error::Error>>
{
    draw(path).map_err(|e| {
        error!("Failed to draw {}. {}", path.display(), e.to_string());
        AppError::ChartError(path.display().to_string(), e.to_string())
    })?;
    info!("Wrote {}", path.display());
    Ok(())
}

fn main() -> Result<(), AppError> {
    init_logging();

    let settings = GlobalSettings::load()?;
    let params = settings.to_parameter_set()?;
    info!("Modelling a {}kg car on {} with {}",
          settings.mass_kg(), settings.road_condition()?, settings.rolling_surface()?);

    let power_curve = compute_power_curve(&params);
    let sweep = compute_acceleration_sweep(&params);
    let insights = Insights::compute(&params, &power_curve, &sweep);

    let output_dir = settings.output_dir();
    fs::create_dir_all(&output_dir)?;

    draw_chart(&output_dir.join("power_curve.svg"), |path| {
        charts::draw_power_curve(path, &power_curve, power_limited_point(&power_curve, REFERENCE_CAR_HP))
    })?;
    draw_chart(&output_dir.join("accel_100.svg"), |path| {
        charts::draw_acceleration_times(path,
                                        "0-100 km/h Time",
                                        &sweep.to_100,
                                        charts::zero_to_100_colour(),
                                        &charts::zero_to_100_reference_lines(),
                                        &insights.reference_times)
    })?;
    draw_chart(&output_dir.join("accel_200.svg"), |path| {
        charts::draw_acceleration_times(path,
                                        "0-200 km/h Time",
                                        &sweep.to_200,
                                        charts::zero_to_200_colour(),
                                        &charts::zero_to_200_reference_lines(),
                                        &[])
    })?;

    println!("{}", insights);
    Ok(())
}
