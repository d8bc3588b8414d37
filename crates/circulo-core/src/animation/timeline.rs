use super::{Animation, Animator};
use crate::scene::Scene;
use std::time::Instant;

struct Playback {
    animation: Animation,
    started: Instant,
}

/// Plays animations against a scene, advanced by the host's frame clock.
///
/// Overlapping animations are applied in the order they were started, so a later
/// animation wins on properties both of them touch.
#[derive(Default)]
pub struct Timeline {
    running: Vec<Playback>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        !self.running.is_empty()
    }

    pub fn play_at(&mut self, animation: Animation, started: Instant) {
        log::debug!(
            "Playing {} tweens over {:.3}s",
            animation.tweens().len(),
            animation.total_duration()
        );
        self.running.push(Playback { animation, started });
    }

    /// Applies every running animation at `now` and drops finished ones.
    /// Returns whether anything was applied.
    pub fn advance(&mut self, scene: &mut Scene, now: Instant) -> bool {
        if self.running.is_empty() {
            return false;
        }

        for playback in &self.running {
            let elapsed = now.saturating_duration_since(playback.started).as_secs_f64();
            playback.animation.apply(scene, elapsed);
        }

        self.running.retain(|p| {
            let elapsed = now.saturating_duration_since(p.started).as_secs_f64();
            !p.animation.is_finished_at(elapsed)
        });
        true
    }

    /// Drops all running animations without touching the scene.
    pub fn clear(&mut self) {
        self.running.clear();
    }
}

impl Animator for Timeline {
    fn play(&mut self, animation: Animation) {
        self.play_at(animation, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Tween;
    use crate::scene::Node;
    use palette::Srgba;
    use std::time::Duration;

    #[test]
    fn test_advance_until_finished() {
        let mut scene = Scene::empty();
        let id = scene.add(Node::circle(1.0, Srgba::new(0.0, 0.0, 0.0, 1.0)));
        scene.set_root(id);

        let start = Instant::now();
        let mut timeline = Timeline::new();
        timeline.play_at(Tween::opacity(&scene, id, 0.0, 1.0).into(), start);

        assert!(timeline.advance(&mut scene, start + Duration::from_millis(500)));
        assert!((scene.node(id).opacity - 0.5).abs() < 1e-9);
        assert!(timeline.is_running());

        assert!(timeline.advance(&mut scene, start + Duration::from_secs(2)));
        assert_eq!(scene.node(id).opacity, 0.0);
        assert!(!timeline.is_running());
        assert!(!timeline.advance(&mut scene, start + Duration::from_secs(3)));
    }

    #[test]
    fn test_later_animation_wins() {
        let mut scene = Scene::empty();
        let id = scene.add(Node::circle(1.0, Srgba::new(0.0, 0.0, 0.0, 1.0)));
        scene.set_root(id);

        let start = Instant::now();
        let mut timeline = Timeline::new();
        timeline.play_at(Tween::opacity(&scene, id, 0.0, 1.0).into(), start);
        timeline.play_at(Tween::opacity(&scene, id, 0.25, 0.0).into(), start);

        timeline.advance(&mut scene, start + Duration::from_millis(100));
        assert_eq!(scene.node(id).opacity, 0.25);
    }
}
