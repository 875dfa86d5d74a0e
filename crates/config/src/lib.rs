//! Configuration models and loaders for astronav.

use std::fs::File;
use std::path::{Path, PathBuf};

use astronav_core::units::{km_to_m, km3_s2_to_m3_s2};
use log::debug;
use serde::Deserialize;
use thiserror::Error;

/// Central body parsed from catalog files.
#[derive(Debug, Deserialize, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub mu_km3_s2: f64,
    pub radius_km: f64,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl BodyConfig {
    /// Gravitational parameter in m³/s².
    pub fn mu_m3_s2(&self) -> f64 {
        km3_s2_to_m3_s2(self.mu_km3_s2)
    }

    /// Reference radius in metres.
    pub fn radius_m(&self) -> f64 {
        km_to_m(self.radius_km)
    }

    fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

/// Which anomaly the sixth scenario element holds.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnomalyKind {
    #[default]
    True,
    Mean,
}

/// Orbit scenario: an element set around a named body.
#[derive(Debug, Deserialize, Clone)]
pub struct ScenarioConfig {
    pub name: String,
    pub body: String,
    /// `"deg"` or `"rad"`; validated when the elements are converted.
    #[serde(default = "default_angle_units")]
    pub angle_units: String,
    /// `[sma_m, ecc, inc, raan, arg_perigee, anomaly]`.
    pub elements: [f64; 6],
    #[serde(default)]
    pub anomaly: AnomalyKind,
    /// When set, `elements[0]` is ignored and the semi-major axis is this multiple
    /// of the body radius.
    #[serde(default)]
    pub sma_body_radii: Option<f64>,
}

fn default_angle_units() -> String {
    "deg".to_string()
}

impl ScenarioConfig {
    /// Element array with `sma_body_radii` resolved against `body`.
    pub fn resolved_elements(&self, body: &BodyConfig) -> [f64; 6] {
        let mut elements = self.elements;
        if let Some(factor) = self.sma_body_radii {
            elements[0] = factor * body.radius_m();
        }
        elements
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("body '{0}' not found in catalog")]
    UnknownBody(String),
    #[error("scenario '{0}' not found")]
    UnknownScenario(String),
}

/// Load central-body records from a YAML file, a TOML file, or a directory of TOML files.
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<BodyConfig>, ConfigError> {
    load_records(path)
}

/// Load orbit scenarios from a YAML file, a TOML file, or a directory of TOML files.
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<ScenarioConfig>, ConfigError> {
    load_records(path)
}

/// Case-insensitive lookup by name or alias.
pub fn find_body<'a>(bodies: &'a [BodyConfig], name: &str) -> Result<&'a BodyConfig, ConfigError> {
    bodies
        .iter()
        .find(|b| b.matches(name))
        .ok_or_else(|| ConfigError::UnknownBody(name.to_string()))
}

/// Case-insensitive scenario lookup.
pub fn find_scenario<'a>(
    scenarios: &'a [ScenarioConfig],
    name: &str,
) -> Result<&'a ScenarioConfig, ConfigError> {
    scenarios
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| ConfigError::UnknownScenario(name.to_string()))
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    debug!("loading configuration records from {}", path.display());
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
