use crate::{error::ConfigError, types::Color};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable parameters for the dot field and its side widgets.
///
/// Every field has a default, so a JSON file only needs to name the
/// values it overrides.
///
/// ### Fields
/// - `dot_radius` - Radius of every rendered dot, in pixels.
/// - `dot_color` - RGBA fill color of every dot.
/// - `dot_spacing` - Grid step between neighbouring origins.
/// - `attraction_radius` - Cursor distance below which dots are pulled.
/// - `attraction_force` - Scale applied to the attraction term.
/// - `restoring_force` - Spring constant pulling dots back to their origin.
/// - `friction` - Per-frame velocity damping, strictly between 0 and 1.
/// - `min_attraction_distance` - Lower clamp on the distance used in the
///   force magnitude; `0.0` leaves the zero-distance singularity unguarded.
/// - `cursor_sentinel` - Position the cursor parks at while the pointer is
///   outside the window.
/// - `resize_quiet_secs` - Quiet window before a resize rebuilds the field.
/// - `background` - Color the surface is cleared to each frame.
/// - `playlists` - Embed URLs, one of which is picked at startup.
/// - `pictures` - Image sources cycled by clicking the picture.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dot_radius: f32,
    pub dot_color: Color,
    pub dot_spacing: f32,
    pub attraction_radius: f32,
    pub attraction_force: f32,
    pub restoring_force: f32,
    pub friction: f32,
    pub min_attraction_distance: f32,
    pub cursor_sentinel: Vec2,
    pub resize_quiet_secs: f64,
    pub background: Color,
    pub playlists: Vec<String>,
    pub pictures: Vec<String>,
}

/// Smallest grid step accepted from a config, in pixels.
pub const MIN_DOT_SPACING: f32 = 1.0;

impl Default for Config {
    fn default() -> Self {
        Self {
            dot_radius: 1.0,
            dot_color: [255, 255, 255, 179],
            dot_spacing: 30.0,
            attraction_radius: 3000.0,
            attraction_force: 0.005,
            restoring_force: 0.1,
            friction: 0.9,
            min_attraction_distance: 1.0,
            cursor_sentinel: Vec2::new(-1000.0, -1000.0),
            resize_quiet_secs: 0.25,
            background: [0, 0, 0, 255],
            playlists: vec![
                "https://open.spotify.com/embed/playlist/3qdonEAUvLyn94B8tx68JD?utm_source=generator&theme=0".into(),
                "https://open.spotify.com/embed/playlist/3q4LgADzfMhHol8jmCo2eV?utm_source=generator".into(),
                "https://open.spotify.com/embed/playlist/2KLs11xdyrGkbwDuCZTgFE?utm_source=generator".into(),
                "https://open.spotify.com/embed/playlist/2ghs7z7G68NExBSuwvxNM4?utm_source=generator".into(),
            ],
            pictures: vec![
                "images/skull.jpg".into(),
                "images/firefly.jpg".into(),
                "images/marchseventh.webp".into(),
                "images/yunli.jpg".into(),
                "images/bruh.jpg".into(),
                "images/idk.jpg".into(),
                "images/bocchi1.jpg".into(),
                "images/nagisa.webp".into(),
            ],
        }
    }
}

impl Config {
    /// Parses a config from JSON and validates it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let cfg: Config = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Checks the physical parameters for values the simulation cannot use.
    ///
    /// ### Returns
    /// - `Ok(())` when every parameter is in range.
    /// - `Err(ConfigError::Invalid)` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dot_spacing.is_finite() && self.dot_spacing >= MIN_DOT_SPACING) {
            return Err(invalid("dot_spacing", "must be a finite value >= 1 pixel"));
        }
        if !(self.dot_radius >= 0.0) {
            return Err(invalid("dot_radius", "must be >= 0"));
        }
        if !(self.attraction_radius >= 0.0) {
            return Err(invalid("attraction_radius", "must be >= 0"));
        }
        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(invalid("friction", "must be strictly between 0 and 1"));
        }
        if !(self.restoring_force >= 0.0) {
            return Err(invalid("restoring_force", "must be >= 0"));
        }
        if !(self.min_attraction_distance >= 0.0) {
            return Err(invalid("min_attraction_distance", "must be >= 0"));
        }
        if !(self.resize_quiet_secs >= 0.0) {
            return Err(invalid("resize_quiet_secs", "must be >= 0"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
