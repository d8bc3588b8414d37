pub mod build;
pub mod state;

pub use build::{BuildError, ImageSizes, Layers, MenuScene, Satellite, rebuild};
pub use state::{CircleMenu, MenuState, PressAction};
