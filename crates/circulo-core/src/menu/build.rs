use crate::button::{ImageRef, MenuButton};
use crate::config::{ConfigError, MenuConfig};
use crate::geometry::{Size, Transform};
use crate::scene::{Node, NodeId, Scene};
use thiserror::Error;

/// Alpha of the halo drawn behind the center button.
pub const BACKGROUND_ALPHA: f64 = 0.2;

/// Looks up the intrinsic size of an image asset.
pub trait ImageSizes {
    fn intrinsic_size(&self, asset: &ImageRef) -> Option<Size>;
}

impl<F> ImageSizes for F
where
    F: Fn(&ImageRef) -> Option<Size>,
{
    fn intrinsic_size(&self, asset: &ImageRef) -> Option<Size> {
        self(asset)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error("Image asset not found: {0}")]
    MissingImage(ImageRef),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Satellite {
    pub button: MenuButton,
    pub node: NodeId,
}

/// Nodes the menu animates and routes presses for.
#[derive(Debug, Clone, PartialEq)]
pub struct Layers {
    pub root: NodeId,
    pub background: NodeId,
    pub satellites: Vec<Satellite>,
    pub center: NodeId,
    pub center_button: MenuButton,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuScene {
    pub scene: Scene,
    /// `None` when no center button is configured.
    pub layers: Option<Layers>,
}

/// Builds the whole scene for `config` from scratch.
pub fn rebuild(
    config: &MenuConfig,
    viewport: Size,
    images: &impl ImageSizes,
) -> Result<MenuScene, BuildError> {
    config.validate()?;

    let Some(center_button) = &config.center_button else {
        return Ok(MenuScene::default());
    };

    let mut scene = Scene::empty();

    let background = scene.add(Node::circle(
        config.radius,
        center_button.color_with_alpha(BACKGROUND_ALPHA),
    ));

    let satellites = config
        .buttons
        .iter()
        .map(|button| {
            // hidden and stacked under the center until expanded
            let node = button_group(&mut scene, button, config.radius, 0.0, images)?;
            Ok(Satellite {
                button: button.clone(),
                node,
            })
        })
        .collect::<Result<Vec<_>, BuildError>>()?;
    let satellites_group = scene.add(Node::group(
        satellites.iter().map(|s| s.node).collect(),
        1.0,
    ));

    let center = button_group(&mut scene, center_button, config.radius, 1.0, images)?;

    let mut root = Node::group(vec![background, satellites_group, center], 1.0);
    root.place = Transform::move_to(config.anchor.resolve(viewport));
    let root = scene.add(root);
    scene.set_root(root);

    log::debug!(
        "Built menu scene with {} satellites (half mode: {})",
        satellites.len(),
        config.half_mode
    );

    Ok(MenuScene {
        scene,
        layers: Some(Layers {
            root,
            background,
            satellites,
            center,
            center_button: center_button.clone(),
        }),
    })
}

fn button_group(
    scene: &mut Scene,
    button: &MenuButton,
    radius: f64,
    opacity: f64,
    images: &impl ImageSizes,
) -> Result<NodeId, BuildError> {
    let size = images
        .intrinsic_size(&button.image)
        .ok_or_else(|| BuildError::MissingImage(button.image.clone()))?;

    let circle = scene.add(Node::circle(radius, button.color));
    let image = scene.add(Node::image(button.image.clone(), size));
    Ok(scene.add(Node::group(vec![circle, image], opacity)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Anchor, Point};
    use crate::scene::Content;
    use palette::Srgba;

    fn button(id: &str) -> MenuButton {
        MenuButton::new(id, format!("{}.png", id), Srgba::new(0.2, 0.4, 0.6, 1.0))
    }

    fn sizes(_: &ImageRef) -> Option<Size> {
        Some(Size::new(24.0, 16.0))
    }

    #[test]
    fn test_no_center_button_is_empty() {
        let config = MenuConfig {
            buttons: vec![button("a")],
            ..MenuConfig::default()
        };
        let menu = rebuild(&config, Size::new(100.0, 100.0), &sizes).unwrap();
        assert!(menu.scene.is_empty());
        assert!(menu.layers.is_none());
    }

    #[test]
    fn test_empty_buttons_has_no_satellites() {
        let config = MenuConfig {
            center_button: Some(button("menu")),
            ..MenuConfig::default()
        };
        let menu = rebuild(&config, Size::new(100.0, 100.0), &sizes).unwrap();
        let layers = menu.layers.unwrap();
        assert!(layers.satellites.is_empty());
        assert_eq!(menu.scene.children(layers.center).len(), 2);
    }

    #[test]
    fn test_layout_and_styles() {
        let config = MenuConfig {
            center_button: Some(button("menu")),
            buttons: vec![button("a"), button("b")],
            ..MenuConfig::default()
        };
        let menu = rebuild(&config, Size::new(400.0, 200.0), &sizes).unwrap();
        let layers = menu.layers.unwrap();
        let scene = &menu.scene;

        assert_eq!(
            scene.node(layers.root).place,
            Transform::move_to(Point::new(200.0, 100.0))
        );
        assert_eq!(
            scene.children(layers.root)[0],
            layers.background,
            "background is drawn first"
        );
        assert_eq!(*scene.children(layers.root).last().unwrap(), layers.center);

        match &scene.node(layers.background).content {
            Content::Circle { radius, fill } => {
                assert_eq!(*radius, config.radius);
                assert_eq!(fill.alpha, BACKGROUND_ALPHA);
            }
            other => panic!("unexpected background {:?}", other),
        }

        for satellite in &layers.satellites {
            assert_eq!(scene.node(satellite.node).opacity, 0.0);
            let image = scene.children(satellite.node)[1];
            match &scene.node(image).content {
                Content::Image { origin, .. } => assert_eq!(*origin, Point::new(-12.0, -8.0)),
                other => panic!("unexpected image {:?}", other),
            }
        }
        assert_eq!(layers.satellites[1].button.id.as_str(), "b");
    }

    #[test]
    fn test_explicit_anchor() {
        let config = MenuConfig {
            center_button: Some(button("menu")),
            anchor: Anchor::At(Point::new(5.0, 6.0)),
            ..MenuConfig::default()
        };
        let menu = rebuild(&config, Size::new(400.0, 200.0), &sizes).unwrap();
        let root = menu.layers.unwrap().root;
        assert_eq!(
            menu.scene.node(root).place,
            Transform::move_to(Point::new(5.0, 6.0))
        );
    }

    #[test]
    fn test_missing_image() {
        let config = MenuConfig {
            center_button: Some(button("menu")),
            ..MenuConfig::default()
        };
        let none = |_: &ImageRef| -> Option<Size> { None };
        assert_eq!(
            rebuild(&config, Size::default(), &none),
            Err(BuildError::MissingImage(ImageRef::new("menu.png")))
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = MenuConfig {
            center_button: Some(button("menu")),
            duration: -1.0,
            ..MenuConfig::default()
        };
        assert!(matches!(
            rebuild(&config, Size::default(), &sizes),
            Err(BuildError::Config(_))
        ));
    }
}
