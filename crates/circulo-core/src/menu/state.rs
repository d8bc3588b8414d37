use super::build::{self, BuildError, ImageSizes, Layers, MenuScene};
use crate::animation::{Animation, Animator, Easing, Tween};
use crate::button::MenuButton;
use crate::config::MenuConfig;
use crate::geometry::{Point, Size, Transform, expand_offset};
use crate::scene::{NodeId, Scene};

/// Toggle state. Tracks intent, not what is currently on screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum MenuState {
    #[default]
    Collapsed,
    /// Expanded or expanding; holds the animation that will be reversed on collapse.
    Transitioning(Animation),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PressAction {
    /// The press missed every node of the menu.
    Outside,
    /// The press landed on the menu but not on a button.
    Ignored,
    Toggled { expanded: bool },
    ButtonPressed(MenuButton),
}

impl PressAction {
    pub fn should_redraw(&self) -> bool {
        matches!(self, Self::Toggled { .. })
    }
}

type ButtonCallback = Box<dyn FnMut(&MenuButton)>;

pub struct CircleMenu {
    config: MenuConfig,
    menu: MenuScene,
    state: MenuState,
    on_button_pressed: Option<ButtonCallback>,
}

impl Default for CircleMenu {
    /// A menu with nothing to show until the first rebuild.
    fn default() -> Self {
        Self {
            config: MenuConfig::default(),
            menu: MenuScene::default(),
            state: MenuState::Collapsed,
            on_button_pressed: None,
        }
    }
}

impl CircleMenu {
    pub fn new(
        config: MenuConfig,
        viewport: Size,
        images: &impl ImageSizes,
    ) -> Result<Self, BuildError> {
        let menu = build::rebuild(&config, viewport, images)?;
        Ok(Self {
            config,
            menu,
            state: MenuState::Collapsed,
            on_button_pressed: None,
        })
    }

    /// Replaces the scene. Any handle is dropped; the host should discard
    /// animations still playing against the previous scene.
    pub fn rebuild(
        &mut self,
        config: MenuConfig,
        viewport: Size,
        images: &impl ImageSizes,
    ) -> Result<(), BuildError> {
        self.menu = build::rebuild(&config, viewport, images)?;
        self.config = config;
        self.state = MenuState::Collapsed;
        Ok(())
    }

    pub fn set_on_button_pressed<F>(&mut self, callback: F)
    where
        F: FnMut(&MenuButton) + 'static,
    {
        self.on_button_pressed = Some(Box::new(callback));
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self.state, MenuState::Transitioning(_))
    }

    pub fn scene(&self) -> &Scene {
        &self.menu.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.menu.scene
    }

    pub fn layers(&self) -> Option<&Layers> {
        self.menu.layers.as_ref()
    }

    pub fn toggle(&mut self, animator: &mut impl Animator) {
        match std::mem::take(&mut self.state) {
            MenuState::Transitioning(animation) => {
                // cleared right away; the reverse may still be on screen
                log::debug!("Collapsing menu");
                animator.play(animation.reverse());
            }
            MenuState::Collapsed => {
                let Some(animation) = self.expand_animation() else {
                    return;
                };
                log::debug!("Expanding menu");
                animator.play(animation.clone());
                self.state = MenuState::Transitioning(animation);
            }
        }
    }

    fn expand_animation(&self) -> Option<Animation> {
        let layers = self.menu.layers.as_ref()?;
        let scene = &self.menu.scene;
        let config = &self.config;
        let duration = config.duration;
        let total = layers.satellites.len();

        let scale = config.halo_scale();
        let background = Tween::place(
            scene,
            layers.background,
            Transform::scale(scale, scale),
            duration,
        );

        let expand = Animation::combine(layers.satellites.iter().enumerate().map(|(i, s)| {
            let offset = expand_offset(i, total, config.half_mode, config.distance);
            Animation::combine([
                Tween::opacity(scene, s.node, 1.0, duration),
                Tween::place(scene, s.node, Transform::move_to(offset), duration)
                    .easing(Easing::EaseOut),
            ])
            .delay(config.stagger(i))
        }));

        // brings the center glyph back to full opacity
        let center = Tween::opacity(scene, layers.center, 1.0, duration);

        Some(Animation::combine([
            Animation::from(background),
            expand,
            Animation::from(center),
        ]))
    }

    /// Routes a press at `point` (viewport coordinates).
    pub fn press(&mut self, point: Point, animator: &mut impl Animator) -> PressAction {
        match self.menu.scene.hit_test(point) {
            Some(path) => self.press_path(&path, animator),
            None => PressAction::Outside,
        }
    }

    /// Routes a press on the node path returned by a hit test.
    pub fn press_path(&mut self, path: &[NodeId], animator: &mut impl Animator) -> PressAction {
        let Some(layers) = &self.menu.layers else {
            return PressAction::Ignored;
        };

        if path.contains(&layers.center) {
            self.toggle(animator);
            return PressAction::Toggled {
                expanded: self.is_expanded(),
            };
        }

        let Some(button) = layers
            .satellites
            .iter()
            .find(|s| path.contains(&s.node))
            .map(|s| s.button.clone())
        else {
            return PressAction::Ignored;
        };

        log::debug!("Satellite '{}' pressed", button.id);
        if let Some(callback) = self.on_button_pressed.as_mut() {
            callback(&button);
        }
        PressAction::ButtonPressed(button)
    }
}
