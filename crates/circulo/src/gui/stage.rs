use super::assets::ImageCache;
use circulo_core::animation::Timeline;
use circulo_core::menu::BuildError;
use circulo_core::{CircleMenu, MenuConfig, Point, PressAction, Size};
use std::time::Instant;

/// The menu together with the timeline playing its animations and the images it draws.
#[derive(Default)]
pub struct Stage {
    pub menu: CircleMenu,
    pub timeline: Timeline,
    pub images: ImageCache,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    /// On failure the previous scene stays in place.
    pub fn rebuild(&mut self, config: MenuConfig, viewport: Size) -> Result<(), BuildError> {
        self.images.preload(&config);
        self.menu.rebuild(config, viewport, &self.images)?;
        // animations still target the old scene
        self.timeline.clear();
        Ok(())
    }

    pub fn toggle(&mut self) {
        self.menu.toggle(&mut self.timeline);
    }

    pub fn press(&mut self, point: Point) -> PressAction {
        self.menu.press(point, &mut self.timeline)
    }

    /// Returns whether the frame changed anything.
    pub fn advance(&mut self, now: Instant) -> bool {
        self.timeline.advance(self.menu.scene_mut(), now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use circulo_core::{ImageRef, MenuButton};
    use palette::Srgba;

    fn missing_button(id: &str) -> MenuButton {
        MenuButton::new(
            id,
            "/definitely/not/here/circulo.png",
            Srgba::new(1.0, 1.0, 1.0, 1.0),
        )
    }

    #[test]
    fn test_empty_config_builds_empty_scene() {
        let mut stage = Stage::new();
        stage
            .rebuild(MenuConfig::default(), Size::new(100.0, 100.0))
            .unwrap();
        assert!(stage.menu.scene().is_empty());
        assert_eq!(stage.press(Point::new(50.0, 50.0)), PressAction::Outside);
    }

    #[test]
    fn test_missing_image_keeps_previous_scene() {
        let mut stage = Stage::new();
        let config = MenuConfig {
            center_button: Some(missing_button("menu")),
            ..MenuConfig::default()
        };

        let result = stage.rebuild(config, Size::new(100.0, 100.0));
        assert_eq!(
            result,
            Err(BuildError::MissingImage(ImageRef::new(
                "/definitely/not/here/circulo.png"
            )))
        );
        assert!(stage.menu.scene().is_empty());
        assert!(!stage.advance(Instant::now()));
    }
}
