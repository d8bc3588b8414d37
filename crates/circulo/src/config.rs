use crate::sys::exec::ShellCommand;
use circulo_core::config::{DEFAULT_DISTANCE, DEFAULT_DURATION, DEFAULT_RADIUS};
use circulo_core::{Anchor, ButtonId, ImageRef, MenuButton, MenuConfig, Point};
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use palette::{Srgb, Srgba};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// `#rrggbb` / `#rgb` colour as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, DeserializeFromStr, SerializeDisplay)]
pub struct HexColor(Srgb<u8>);

impl FromStr for HexColor {
    type Err = palette::rgb::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Srgb::<u8>::from_str(s.trim()).map(Self)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.0.into_components();
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl HexColor {
    pub fn with_alpha(&self, alpha: f64) -> Srgba<f64> {
        let c: Srgb<f64> = self.0.into_format();
        Srgba::new(c.red, c.green, c.blue, alpha)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ButtonConfig {
    pub id: ButtonId,
    pub image: ImageRef,
    /// Falls back to the theme accent.
    #[serde(default)]
    pub color: Option<HexColor>,
    #[serde(default)]
    pub alpha: Option<f64>,
    /// Run when the button is pressed.
    #[serde(default)]
    pub exec: Option<ShellCommand>,
}

impl ButtonConfig {
    pub fn to_button(&self, accent: Srgba<f64>) -> MenuButton {
        let color = match self.color {
            Some(hex) => hex.with_alpha(self.alpha.unwrap_or(1.0)),
            None => Srgba {
                alpha: self.alpha.unwrap_or(accent.alpha),
                ..accent
            },
        };
        MenuButton {
            id: self.id.clone(),
            image: self.image.clone(),
            color,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_duration")]
    pub duration: f64,
    #[serde(default = "default_distance")]
    pub distance: f64,
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default)]
    pub half_mode: bool,
    #[serde(default)]
    pub anchor: Option<Point>,
    #[serde(default)]
    pub center: Option<ButtonConfig>,
    #[serde(default)]
    pub buttons: Vec<ButtonConfig>,
}

fn default_duration() -> f64 {
    DEFAULT_DURATION
}

fn default_distance() -> f64 {
    DEFAULT_DISTANCE
}

fn default_radius() -> f64 {
    DEFAULT_RADIUS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            distance: DEFAULT_DISTANCE,
            radius: DEFAULT_RADIUS,
            half_mode: false,
            anchor: None,
            center: None,
            buttons: Vec::new(),
        }
    }
}

impl Config {
    pub fn to_menu_config(&self, accent: Srgba<f64>) -> MenuConfig {
        MenuConfig {
            duration: self.duration,
            distance: self.distance,
            radius: self.radius,
            center_button: self.center.as_ref().map(|c| c.to_button(accent)),
            buttons: self.buttons.iter().map(|b| b.to_button(accent)).collect(),
            half_mode: self.half_mode,
            anchor: self.anchor.map_or(Anchor::ViewportCenter, Anchor::At),
        }
    }

    pub fn exec_for(&self, id: &ButtonId) -> Option<&ShellCommand> {
        self.buttons
            .iter()
            .find(|b| &b.id == id)
            .and_then(|b| b.exec.as_ref())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "circulo", "circulo").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("CIRCULO"))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn default_config() -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from_str(
            DEFAULT_CONFIG,
            config::FileFormat::Toml,
        ))
        .build()?;

    Ok(s.try_deserialize()?)
}

/// Loads the user config, falling back to the built-in one when there is no
/// file yet or it cannot be read.
pub fn load_or_default() -> Config {
    let loaded = match get_config_path() {
        Ok(path) if !path.exists() => {
            log::info!("No config at {}, using defaults", path.display());
            default_config()
        }
        _ => load_config(),
    };

    loaded
        .or_else(|e| {
            log::error!("Failed to load config: {}", e);
            default_config()
        })
        .unwrap_or_else(|e| {
            log::error!("Built-in config is invalid: {}", e);
            Config::default()
        })
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", e);
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let config_changed = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                ) && event.paths.iter().any(|p| p == &config_path);

                if config_changed && tx.send(AppEvent::ConfigReload).await.is_err() {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}
