//! Dashboard configuration.
//!
//! Every field has a default, so an empty document (or no file at all)
//! yields the stock nation-wide setup:
//!
//! ```toml
//! [map]
//! country_code = "FRA"
//! padding = 20.0
//! min_usable_size = 50.0
//! min_zoom = 0.0
//! max_zoom = 20.0
//! min_extent = 0.01
//!
//! [map.default_viewport]
//! latitude = 46.9
//! longitude = 1.7
//! zoom = 5.0
//! ```

use std::path::Path;

use covid_dashboard_viewport::{ViewportFitter, ViewportState};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding the path of the configuration file.
pub const CONFIG_ENV_VAR: &str = "COVID_DASHBOARD_CONFIG";

/// Errors loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The configuration is not valid TOML or has mistyped fields.
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// The configuration parsed but its values are inconsistent.
    #[error("Invalid configuration: {message}")]
    Invalid {
        /// What is wrong.
        message: String,
    },
}

/// Top-level configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Map camera settings.
    pub map: MapConfig,
}

/// Map camera settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Geo code of the box framed at the `National` level.
    pub country_code: String,
    /// Pixels kept free on every side of a fitted box.
    pub padding: f64,
    /// Containers at or below this size (pixels, either axis) are not
    /// fitted.
    pub min_usable_size: f64,
    /// Lowest zoom a fit may return.
    pub min_zoom: f64,
    /// Highest zoom a fit may return.
    pub max_zoom: f64,
    /// Extent in degrees that zero-area boxes are widened to.
    pub min_extent: f64,
    /// Camera shown before the first successful fit.
    pub default_viewport: DefaultViewport,
}

impl Default for MapConfig {
    fn default() -> Self {
        let fitter = ViewportFitter::default();
        Self {
            country_code: "FRA".to_string(),
            padding: 20.0,
            min_usable_size: fitter.min_usable_size,
            min_zoom: fitter.min_zoom,
            max_zoom: fitter.max_zoom,
            min_extent: fitter.min_extent,
            default_viewport: DefaultViewport::default(),
        }
    }
}

/// Camera shown before the first successful fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultViewport {
    /// Center latitude in degrees.
    pub latitude: f64,
    /// Center longitude in degrees.
    pub longitude: f64,
    /// Fractional zoom level.
    pub zoom: f64,
}

impl Default for DefaultViewport {
    fn default() -> Self {
        let viewport = ViewportState::default();
        Self {
            latitude: viewport.center_latitude,
            longitude: viewport.center_longitude,
            zoom: viewport.zoom,
        }
    }
}

impl DashboardConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// * If the document is not valid TOML
    /// * If the values fail [`validate`](Self::validate)
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::de::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates the TOML file at `path`.
    ///
    /// # Errors
    ///
    /// * If the file cannot be read
    /// * If its contents fail [`from_toml_str`](Self::from_toml_str)
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("Loading dashboard configuration from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Loads the file named by `COVID_DASHBOARD_CONFIG`, or returns the
    /// defaults when the variable is unset.
    ///
    /// # Errors
    ///
    /// * If the variable is set and [`load`](Self::load) fails
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.is_empty() => Self::load(path),
            _ => {
                log::debug!("{CONFIG_ENV_VAR} not set, using default configuration");
                Ok(Self::default())
            }
        }
    }

    /// Checks the values are consistent.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::Invalid`] describing the first inconsistency found
    pub fn validate(&self) -> Result<(), ConfigError> {
        let map = &self.map;
        let invalid = |message: String| Err(ConfigError::Invalid { message });

        if map.country_code.is_empty() {
            return invalid("map.country_code must not be empty".to_string());
        }
        if !(map.padding.is_finite() && map.padding >= 0.0) {
            return invalid(format!("map.padding must be >= 0, got {}", map.padding));
        }
        if !(map.min_usable_size.is_finite() && map.min_usable_size >= 0.0) {
            return invalid(format!(
                "map.min_usable_size must be >= 0, got {}",
                map.min_usable_size
            ));
        }
        if !(map.min_zoom.is_finite() && map.max_zoom.is_finite()) || map.min_zoom > map.max_zoom
        {
            return invalid(format!(
                "map.min_zoom ({}) must not exceed map.max_zoom ({})",
                map.min_zoom, map.max_zoom
            ));
        }
        if !(map.min_extent.is_finite() && map.min_extent > 0.0) {
            return invalid(format!("map.min_extent must be > 0, got {}", map.min_extent));
        }

        let viewport = map.default_viewport;
        if !(viewport.latitude.is_finite()
            && viewport.longitude.is_finite()
            && viewport.zoom.is_finite())
        {
            return invalid("map.default_viewport must be finite".to_string());
        }

        Ok(())
    }

    /// The fitter described by the `[map]` table.
    #[must_use]
    pub const fn fitter(&self) -> ViewportFitter {
        ViewportFitter {
            min_usable_size: self.map.min_usable_size,
            min_zoom: self.map.min_zoom,
            max_zoom: self.map.max_zoom,
            min_extent: self.map.min_extent,
        }
    }

    /// Camera shown before the first successful fit.
    #[must_use]
    pub const fn initial_viewport(&self) -> ViewportState {
        let viewport = self.map.default_viewport;
        ViewportState::new(viewport.latitude, viewport.longitude, viewport.zoom)
    }
}
