pub mod app;
pub mod assets;
pub mod stage;
pub mod theme;
pub mod view;
pub mod window;

/// Edge length icons are loaded at, in pixels.
pub const ICON_SIZE: i32 = 28;
