//! Property animations over the scene graph.
//!
//! An [`Animation`] is a plain description: a set of tweens, each targeting one
//! property of one node with its own delay, duration and easing. Animations are
//! combined into a single value that can be reversed as a whole and handed to an
//! [`Animator`] to be played.

pub mod easing;
pub mod timeline;

pub use easing::Easing;
pub use timeline::Timeline;

use crate::geometry::{Transform, lerp};
use crate::scene::{NodeId, Scene};

/// Something that can start playing an animation.
pub trait Animator {
    fn play(&mut self, animation: Animation);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Place(Transform),
    Opacity(f64),
}

impl Value {
    fn lerp(&self, to: &Value, t: f64) -> Value {
        match (self, to) {
            (Self::Place(a), Self::Place(b)) => Self::Place(a.lerp(b, t)),
            (Self::Opacity(a), Self::Opacity(b)) => Self::Opacity(lerp(*a, *b, t)),
            // mismatched kinds cannot be built through the public constructors
            (_, other) => *other,
        }
    }

    fn write(&self, scene: &mut Scene, node: NodeId) {
        if let Some(target) = scene.get_mut(node) {
            match self {
                Self::Place(place) => target.place = *place,
                Self::Opacity(opacity) => target.opacity = *opacity,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub node: NodeId,
    pub from: Value,
    pub to: Value,
    /// Seconds.
    pub duration: f64,
    /// Seconds before the tween starts, relative to the animation start.
    pub delay: f64,
    pub easing: Easing,
}

impl Tween {
    /// Animates the node's placement from its current value.
    pub fn place(scene: &Scene, node: NodeId, to: Transform, duration: f64) -> Self {
        Self::new(
            node,
            Value::Place(scene.node(node).place),
            Value::Place(to),
            duration,
        )
    }

    /// Animates the node's opacity from its current value.
    pub fn opacity(scene: &Scene, node: NodeId, to: f64, duration: f64) -> Self {
        Self::new(
            node,
            Value::Opacity(scene.node(node).opacity),
            Value::Opacity(to),
            duration,
        )
    }

    fn new(node: NodeId, from: Value, to: Value, duration: f64) -> Self {
        Self {
            node,
            from,
            to,
            duration,
            delay: 0.0,
            easing: Easing::Linear,
        }
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn end(&self) -> f64 {
        self.delay + self.duration
    }

    /// Value at `elapsed` seconds into the animation, `None` while still delayed.
    pub fn value_at(&self, elapsed: f64) -> Option<Value> {
        if elapsed < self.delay {
            return None;
        }
        let progress = if self.duration > 0.0 {
            (elapsed - self.delay) / self.duration
        } else {
            1.0
        };
        Some(self.from.lerp(&self.to, self.easing.evaluate(progress)))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Animation {
    tweens: Vec<Tween>,
}

impl From<Tween> for Animation {
    fn from(tween: Tween) -> Self {
        Self {
            tweens: vec![tween],
        }
    }
}

impl Animation {
    pub fn combine<I>(animations: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Animation>,
    {
        Self {
            tweens: animations
                .into_iter()
                .flat_map(|a| a.into().tweens)
                .collect(),
        }
    }

    pub fn delay(mut self, seconds: f64) -> Self {
        for tween in &mut self.tweens {
            tween.delay += seconds;
        }
        self
    }

    pub fn tweens(&self) -> &[Tween] {
        &self.tweens
    }

    pub fn total_duration(&self) -> f64 {
        self.tweens.iter().map(Tween::end).fold(0.0, f64::max)
    }

    /// Same animation played backwards: every tween swaps its endpoints and
    /// mirrors its delay within the total duration.
    pub fn reverse(&self) -> Self {
        let total = self.total_duration();
        Self {
            tweens: self
                .tweens
                .iter()
                .map(|t| Tween {
                    node: t.node,
                    from: t.to,
                    to: t.from,
                    duration: t.duration,
                    delay: total - t.end(),
                    easing: t.easing.reversed(),
                })
                .collect(),
        }
    }

    pub fn is_finished_at(&self, elapsed: f64) -> bool {
        elapsed >= self.total_duration()
    }

    /// Writes every started tween's value at `elapsed` into the scene.
    pub fn apply(&self, scene: &mut Scene, elapsed: f64) {
        for tween in &self.tweens {
            if let Some(value) = tween.value_at(elapsed) {
                value.write(scene, tween.node);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::scene::Node;
    use palette::Srgba;

    fn scene_with_circle() -> (Scene, NodeId) {
        let mut scene = Scene::empty();
        let id = scene.add(Node::circle(10.0, Srgba::new(0.0, 0.0, 0.0, 1.0)));
        scene.set_root(id);
        (scene, id)
    }

    #[test]
    fn test_tween_captures_current_value() {
        let (mut scene, id) = scene_with_circle();
        scene.node_mut(id).opacity = 0.5;
        let tween = Tween::opacity(&scene, id, 1.0, 1.0);
        assert_eq!(tween.from, Value::Opacity(0.5));
        assert_eq!(tween.value_at(0.5), Some(Value::Opacity(0.75)));
    }

    #[test]
    fn test_delay_holds_value() {
        let (scene, id) = scene_with_circle();
        let animation = Animation::from(Tween::opacity(&scene, id, 0.0, 1.0)).delay(0.5);
        assert_eq!(animation.tweens()[0].value_at(0.25), None);
        assert_eq!(animation.total_duration(), 1.5);
    }

    #[test]
    fn test_reverse_mirrors_delays() {
        let (scene, id) = scene_with_circle();
        let first = Animation::from(Tween::opacity(&scene, id, 1.0, 1.0));
        let second = Animation::from(Tween::opacity(&scene, id, 1.0, 1.0)).delay(0.5);
        let combined = Animation::combine([first, second]);
        let reversed = combined.reverse();

        assert_eq!(reversed.total_duration(), combined.total_duration());
        assert_eq!(reversed.tweens()[0].delay, 0.5);
        assert_eq!(reversed.tweens()[1].delay, 0.0);
        assert_eq!(reversed.tweens()[0].from, Value::Opacity(1.0));
        assert_eq!(reversed.tweens()[0].to, Value::Opacity(1.0));
    }

    #[test]
    fn test_reverse_traces_same_path_backwards() {
        let (scene, id) = scene_with_circle();
        let target = Transform::move_to(Point::new(100.0, 0.0));
        let forward =
            Animation::from(Tween::place(&scene, id, target, 1.0).easing(Easing::EaseOut));
        let backward = forward.reverse();

        for step in 0..=10 {
            let t = step as f64 / 10.0;
            let Some(Value::Place(a)) = forward.tweens()[0].value_at(t) else {
                panic!("forward tween not started");
            };
            let Some(Value::Place(b)) = backward.tweens()[0].value_at(1.0 - t) else {
                panic!("backward tween not started");
            };
            assert!((a.dx - b.dx).abs() < 1e-9);
        }
    }

    #[test]
    fn test_apply_writes_scene() {
        let (mut scene, id) = scene_with_circle();
        let animation = Animation::combine([
            Tween::opacity(&scene, id, 0.0, 1.0),
            Tween::place(&scene, id, Transform::scale(2.0, 2.0), 1.0),
        ]);
        animation.apply(&mut scene, 1.0);
        assert_eq!(scene.node(id).opacity, 0.0);
        assert_eq!(scene.node(id).place, Transform::scale(2.0, 2.0));
        assert!(animation.is_finished_at(1.0));
    }

    #[test]
    fn test_zero_duration_jumps_to_end() {
        let (scene, id) = scene_with_circle();
        let tween = Tween::opacity(&scene, id, 0.0, 0.0);
        assert_eq!(tween.value_at(0.0), Some(Value::Opacity(0.0)));
    }
}
