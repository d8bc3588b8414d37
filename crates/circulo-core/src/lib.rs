pub mod animation;
pub mod button;
pub mod config;
pub mod geometry;
pub mod macros;
pub mod menu;
pub mod scene;

pub use button::{ButtonId, ImageRef, MenuButton};
pub use config::{ConfigError, MenuConfig};
pub use geometry::{Anchor, Point, Size, Transform};
pub use menu::{CircleMenu, MenuState, PressAction};
