//! Easing functions for animations
//!
//! Pure shape functions mapping normalized progress `t` in `[0, 1]` to eased
//! progress. Callers clamp `t` before applying; overshoot shapes (elastic,
//! back, bounce) may leave `[0, 1]` in between but hit the endpoints exactly.
//!
//! Each shape defines only its "in" primitive. The Out and InOut variants are
//! derived from it:
//!
//! ```text
//! f_out(t)   = 1 - f_in(1 - t)
//! f_inout(t) = t < 0.5 ? f_in(2t)/2 : 1 - f_in(2(1-t))/2
//! ```

use std::f32::consts::{FRAC_PI_2, PI};

/// Easing curve selector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuartIn,
    QuartOut,
    QuartInOut,
    QuintIn,
    QuintOut,
    QuintInOut,
    SineIn,
    SineOut,
    SineInOut,
    ExpoIn,
    ExpoOut,
    ExpoInOut,
    CircIn,
    CircOut,
    CircInOut,
    ElasticIn,
    ElasticOut,
    ElasticInOut,
    BackIn,
    BackOut,
    BackInOut,
    BounceIn,
    BounceOut,
    BounceInOut,
}

/// Interpolation shape, independent of direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Shape {
    Quad,
    Cubic,
    Quart,
    Quint,
    Sine,
    Expo,
    Circ,
    Elastic,
    Back,
    Bounce,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Mode {
    In,
    Out,
    InOut,
}

impl Easing {
    /// Apply the easing function to a progress value in `[0, 1]`
    pub fn apply(self, t: f32) -> f32 {
        let (shape, mode) = match self.decompose() {
            Some(pair) => pair,
            None => return t, // Linear
        };
        match mode {
            Mode::In => ease_in(shape, t),
            Mode::Out => 1.0 - ease_in(shape, 1.0 - t),
            Mode::InOut => {
                if t < 0.5 {
                    ease_in(shape, 2.0 * t) / 2.0
                } else {
                    1.0 - ease_in(shape, 2.0 * (1.0 - t)) / 2.0
                }
            }
        }
    }

    pub(crate) fn decompose(self) -> Option<(Shape, Mode)> {
        use Easing::*;
        Some(match self {
            Linear => return None,
            QuadIn => (Shape::Quad, Mode::In),
            QuadOut => (Shape::Quad, Mode::Out),
            QuadInOut => (Shape::Quad, Mode::InOut),
            CubicIn => (Shape::Cubic, Mode::In),
            CubicOut => (Shape::Cubic, Mode::Out),
            CubicInOut => (Shape::Cubic, Mode::InOut),
            QuartIn => (Shape::Quart, Mode::In),
            QuartOut => (Shape::Quart, Mode::Out),
            QuartInOut => (Shape::Quart, Mode::InOut),
            QuintIn => (Shape::Quint, Mode::In),
            QuintOut => (Shape::Quint, Mode::Out),
            QuintInOut => (Shape::Quint, Mode::InOut),
            SineIn => (Shape::Sine, Mode::In),
            SineOut => (Shape::Sine, Mode::Out),
            SineInOut => (Shape::Sine, Mode::InOut),
            ExpoIn => (Shape::Expo, Mode::In),
            ExpoOut => (Shape::Expo, Mode::Out),
            ExpoInOut => (Shape::Expo, Mode::InOut),
            CircIn => (Shape::Circ, Mode::In),
            CircOut => (Shape::Circ, Mode::Out),
            CircInOut => (Shape::Circ, Mode::InOut),
            ElasticIn => (Shape::Elastic, Mode::In),
            ElasticOut => (Shape::Elastic, Mode::Out),
            ElasticInOut => (Shape::Elastic, Mode::InOut),
            BackIn => (Shape::Back, Mode::In),
            BackOut => (Shape::Back, Mode::Out),
            BackInOut => (Shape::Back, Mode::InOut),
            BounceIn => (Shape::Bounce, Mode::In),
            BounceOut => (Shape::Bounce, Mode::Out),
            BounceInOut => (Shape::Bounce, Mode::InOut),
        })
    }

    /// Whether the shape can leave `[0, 1]` between the endpoints
    pub fn overshoots(self) -> bool {
        matches!(
            self.decompose(),
            Some((Shape::Elastic | Shape::Back, _))
        )
    }
}

/// The "in" primitive for each shape
pub(crate) fn ease_in(shape: Shape, t: f32) -> f32 {
    match shape {
        Shape::Quad => t * t,
        Shape::Cubic => t * t * t,
        Shape::Quart => t * t * t * t,
        Shape::Quint => t * t * t * t * t,
        Shape::Sine => 1.0 - (t * FRAC_PI_2).cos(),
        Shape::Expo => {
            if t <= 0.0 {
                0.0
            } else {
                2.0_f32.powf(10.0 * (t - 1.0))
            }
        }
        Shape::Circ => 1.0 - (1.0 - t * t).max(0.0).sqrt(),
        Shape::Elastic => elastic_in(t),
        Shape::Back => {
            const S: f32 = 1.70158;
            t * t * ((S + 1.0) * t - S)
        }
        Shape::Bounce => 1.0 - bounce_out(1.0 - t),
    }
}

fn elastic_in(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    const PERIOD: f32 = 0.3;
    let s = PERIOD / 4.0;
    -(2.0_f32.powf(10.0 * (t - 1.0)) * ((t - 1.0 - s) * (2.0 * PI) / PERIOD).sin())
}

fn bounce_out(t: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;
    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let t = t - 1.5 / D;
        N * t * t + 0.75
    } else if t < 2.5 / D {
        let t = t - 2.25 / D;
        N * t * t + 0.9375
    } else {
        let t = t - 2.625 / D;
        N * t * t + 0.984375
    }
}
