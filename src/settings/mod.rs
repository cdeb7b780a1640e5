use std::fs;
use std::path::PathBuf;
use config::{Config, ConfigError};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use traction::params::{DEFAULT_MASS_KG, MAX_MASS_KG, MIN_MASS_KG};
use traction::{ParameterSet, RoadCondition, RollingSurface, SurfaceParseError};

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("car mass {0}kg is outside of the supported {1}-{2}kg range")]
    MassOutOfRange(f64, f64, f64),
    #[error("invalid surface. {0}")]
    InvalidSurface(#[from] SurfaceParseError),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GlobalSettings {
    mass_kg: f64,
    road_condition: String,
    rolling_surface: String,
    output_dir: String
}

impl GlobalSettings {
    const MASS_KG: &'static str = "mass_kg";
    const ROAD_CONDITION: &'static str = "road_condition";
    const ROLLING_SURFACE: &'static str = "rolling_surface";
    const OUTPUT_DIR: &'static str = "output_dir";
    const CONFIG_FILENAME: &'static str = "grip-limit-conf";
    const ENV_PREFIX: &'static str = "GRIP";

    pub fn default() -> Self {
        GlobalSettings {
            mass_kg: DEFAULT_MASS_KG,
            road_condition: RoadCondition::default().key().to_string(),
            rolling_surface: RollingSurface::default().key().to_string(),
            output_dir: String::from("."),
        }
    }

    fn builder_with_defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let defaults = GlobalSettings::default();
        Config::builder()
            .set_default(GlobalSettings::MASS_KG, defaults.mass_kg)?
            .set_default(GlobalSettings::ROAD_CONDITION, defaults.road_condition)?
            .set_default(GlobalSettings::ROLLING_SURFACE, defaults.rolling_surface)?
            .set_default(GlobalSettings::OUTPUT_DIR, defaults.output_dir)
    }

    pub fn load() -> Result<Self, ConfigError> {
        let builder = GlobalSettings::builder_with_defaults()?;
        return match builder
            .add_source(config::File::with_name(GlobalSettings::CONFIG_FILENAME))
            .add_source(config::Environment::with_prefix(GlobalSettings::ENV_PREFIX))
            .build() {
            Ok(settings) => {
                settings.try_deserialize()
            }
            Err(e) => {
                warn!("Failed to load settings. {}", e.to_string());
                let settings = GlobalSettings::builder_with_defaults()?
                    .add_source(config::Environment::with_prefix(GlobalSettings::ENV_PREFIX))
                    .build()?;
                let ret: GlobalSettings = settings.try_deserialize()?;
                ret.write().unwrap_or_else(|e| { error!("Failed to write settings. {}", e.to_string())});
                Ok(ret)
            }
        }
    }

    pub fn mass_kg(&self) -> f64 {
        self.mass_kg
    }

    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(&self.output_dir)
    }

    pub fn road_condition(&self) -> Result<RoadCondition, SettingsError> {
        Ok(self.road_condition.parse()?)
    }

    pub fn rolling_surface(&self) -> Result<RollingSurface, SettingsError> {
        Ok(self.rolling_surface.parse()?)
    }

    /// The model itself accepts any positive mass; the range here is what the
    /// app is tuned for.
    pub fn to_parameter_set(&self) -> Result<ParameterSet, SettingsError> {
        if !(MIN_MASS_KG..=MAX_MASS_KG).contains(&self.mass_kg) {
            return Err(SettingsError::MassOutOfRange(self.mass_kg, MIN_MASS_KG, MAX_MASS_KG));
        }
        Ok(ParameterSet::from_surfaces(self.mass_kg, self.road_condition()?, self.rolling_surface()?))
    }

    pub fn write(&self) -> std::io::Result<()> {
        fs::write(format!("{}.toml", GlobalSettings::CONFIG_FILENAME), toml::to_string(&self).map_err(|_e|{
            std::io::Error::new(std::io::ErrorKind::Other, "Failed to encode settings to toml")
        })?)
    }
}

#[cfg(test)]
mod tests {
    use traction::{ParameterSet, RoadCondition, RollingSurface};
    use crate::settings::{GlobalSettings, SettingsError};

    fn settings(mass_kg: f64, road_condition: &str, rolling_surface: &str) -> GlobalSettings {
        GlobalSettings {
            mass_kg,
            road_condition: road_condition.to_string(),
            rolling_surface: rolling_surface.to_string(),
            output_dir: ".".to_string()
        }
    }

    #[test]
    fn default_settings_give_default_parameters() {
        let params = GlobalSettings::default().to_parameter_set().unwrap();
        assert_eq!(params, ParameterSet::default());
    }

    #[test]
    fn surfaces_by_name() {
        let params = settings(1500.0, "Snow (Hard-packed)", "unpaved_road").to_parameter_set().unwrap();
        assert_eq!(params, ParameterSet::from_surfaces(1500.0, RoadCondition::SnowHardPacked, RollingSurface::UnpavedRoad));
    }

    #[test]
    fn mass_must_be_in_range() {
        assert!(settings(1000.0, "ice", "field").to_parameter_set().is_ok());
        assert!(settings(2500.0, "ice", "field").to_parameter_set().is_ok());
        assert!(matches!(settings(999.0, "ice", "field").to_parameter_set(),
                         Err(SettingsError::MassOutOfRange(..))));
        assert!(matches!(settings(f64::NAN, "ice", "field").to_parameter_set(),
                         Err(SettingsError::MassOutOfRange(..))));
    }

    #[test]
    fn unknown_surface_is_rejected() {
        assert!(matches!(settings(1800.0, "moon dust", "field").to_parameter_set(),
                         Err(SettingsError::InvalidSurface(..))));
    }

    #[test]
    fn settings_round_trip_through_toml() {
        let original = settings(2050.0, "gravel", "rolled_gravel");
        let encoded = toml::to_string(&original).unwrap();
        let decoded: GlobalSettings = toml::from_str(&encoded).unwrap();
        assert_eq!(original, decoded);
    }
}
