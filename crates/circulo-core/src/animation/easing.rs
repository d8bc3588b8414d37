/// Rate of change across a tween, evaluated on normalised time `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// Starts slow, ends fast
    EaseIn,
    /// Starts fast, ends slow
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }

    /// Curve traced when the tween runs backwards: `1 - f(1 - t)`.
    pub fn reversed(&self) -> Self {
        match self {
            Self::EaseIn => Self::EaseOut,
            Self::EaseOut => Self::EaseIn,
            other => *other,
        }
    }
}
