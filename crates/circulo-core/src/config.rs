use crate::button::MenuButton;
use crate::geometry::Anchor;
use thiserror::Error;

pub const DEFAULT_DURATION: f64 = 0.35;
pub const DEFAULT_DISTANCE: f64 = 95.0;
pub const DEFAULT_RADIUS: f64 = 30.0;

#[derive(Debug, Clone, PartialEq)]
pub struct MenuConfig {
    /// Seconds.
    pub duration: f64,
    /// Orbit radius of the satellites.
    pub distance: f64,
    /// Radius of every button circle.
    pub radius: f64,
    pub center_button: Option<MenuButton>,
    pub buttons: Vec<MenuButton>,
    pub half_mode: bool,
    pub anchor: Anchor,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            distance: DEFAULT_DISTANCE,
            radius: DEFAULT_RADIUS,
            center_button: None,
            buttons: Vec::new(),
            half_mode: false,
            anchor: Anchor::default(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidMeasure { field: &'static str, value: f64 },
}

impl MenuConfig {
    /// Rejects negative and non-finite measures. Zero is accepted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        [
            ("duration", self.duration),
            ("distance", self.distance),
            ("radius", self.radius),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite() || *value < 0.0)
        .map_or(Ok(()), |(field, value)| {
            Err(ConfigError::InvalidMeasure { field, value })
        })
    }

    /// Scale the background halo grows to when expanded.
    pub fn halo_scale(&self) -> f64 {
        if self.radius > 0.0 {
            self.distance / self.radius
        } else {
            1.0
        }
    }

    /// Delay before satellite `index` starts moving.
    pub fn stagger(&self, index: usize) -> f64 {
        self.duration / 7.0 * index as f64
    }
}
