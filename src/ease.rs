//! Easing curves: pure maps from normalized progress to an eased factor.

use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, PI};

// 1/255 and 1/510, truncated the same way the reference curves were tuned.
const INV_255: f32 = 0.003921568;
const INV_510: f32 = 0.0019607;

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Selects the easing curve a tween runs through.
///
/// Every family comes as `In` (slow start), `Out` (slow finish) and `InOut`
/// (both), with `Out(t) = 1 - In(1 - t)`. All curves pass through (0,0) and
/// (1,1) except [`Ease::Pulse`] and [`Ease::Eslup`], which return to their
/// starting level and peak (or trough) at t = 0.5. [`Ease::Null`] is the
/// unset marker and applies no remap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Ease {
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
    PowIn,
    PowOut,
    PowInOut,
    CircIn,
    CircOut,
    CircInOut,
    BackIn,
    BackOut,
    BackInOut,
    ElasticIn,
    ElasticOut,
    ElasticInOut,
    BounceIn,
    BounceOut,
    BounceInOut,
    SinIn,
    SinOut,
    SinInOut,
    Bezier,
    Pulse,
    Eslup,
    Null,
}

impl Ease {
    /// Remaps normalized progress `t` (nominally in `[0, 1]`) through the
    /// selected curve. Back, Elastic and Bounce overshoot `[0, 1]` on purpose.
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Ease::Linear | Ease::Null => t,

            Ease::QuadIn => t * t,
            Ease::QuadOut => t * (2.0 - t),
            Ease::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    t * (4.0 - 2.0 * t) - 1.0
                }
            }

            Ease::CubicIn => t * t * t,
            Ease::CubicOut => {
                let u = t - 1.0;
                1.0 + u * u * u
            }
            Ease::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = t - 1.0;
                    1.0 + 4.0 * u * u * u
                }
            }

            Ease::QuartIn => {
                let s = t * t;
                s * s
            }
            Ease::QuartOut => {
                let s = (t - 1.0) * (t - 1.0);
                1.0 - s * s
            }
            Ease::QuartInOut => {
                if t < 0.5 {
                    let s = t * t;
                    8.0 * s * s
                } else {
                    let s = (t - 1.0) * (t - 1.0);
                    1.0 - 8.0 * s * s
                }
            }

            Ease::QuintIn => {
                let s = t * t;
                t * s * s
            }
            Ease::QuintOut => {
                let u = t - 1.0;
                let s = u * u;
                1.0 + u * s * s
            }
            Ease::QuintInOut => {
                if t < 0.5 {
                    let s = t * t;
                    16.0 * t * s * s
                } else {
                    let u = t - 1.0;
                    let s = u * u;
                    1.0 + 16.0 * u * s * s
                }
            }

            Ease::PowIn => (2f32.powf(8.0 * t) - 1.0) * INV_255,
            Ease::PowOut => 1.0 - 2f32.powf(-8.0 * t),
            Ease::PowInOut => {
                if t < 0.5 {
                    (2f32.powf(16.0 * t) - 1.0) * INV_510
                } else {
                    1.0 - 0.5 * 2f32.powf(-16.0 * (t - 0.5))
                }
            }

            Ease::CircIn => 1.0 - (1.0 - t).sqrt(),
            Ease::CircOut => t.sqrt(),
            Ease::CircInOut => {
                if t < 0.5 {
                    (1.0 - (1.0 - 2.0 * t).sqrt()) * 0.5
                } else {
                    (1.0 + (2.0 * t - 1.0).sqrt()) * 0.5
                }
            }

            Ease::BackIn => t * t * (2.70158 * t - 1.70158),
            Ease::BackOut => {
                let u = t - 1.0;
                1.0 + u * u * (2.70158 * u + 1.70158)
            }
            Ease::BackInOut => {
                if t < 0.5 {
                    t * t * (7.0 * t - 2.5) * 2.0
                } else {
                    let u = t - 1.0;
                    1.0 + u * u * 2.0 * (7.0 * u + 2.5)
                }
            }

            Ease::ElasticIn => {
                let s = t * t;
                s * s * (t * PI * 4.5).sin()
            }
            Ease::ElasticOut => {
                let s = (t - 1.0) * (t - 1.0);
                1.0 - s * s * (t * PI * 4.5).cos()
            }
            Ease::ElasticInOut => {
                if t < 0.45 {
                    let s = t * t;
                    8.0 * s * s * (t * PI * 9.0).sin()
                } else if t < 0.55 {
                    0.5 + 0.75 * (t * PI * 4.0).sin()
                } else {
                    let s = (t - 1.0) * (t - 1.0);
                    1.0 - 8.0 * s * s * (t * PI * 9.0).sin()
                }
            }

            Ease::BounceIn => 2f32.powf(6.0 * (t - 1.0)) * (t * PI * 3.5).sin().abs(),
            Ease::BounceOut => 1.0 - 2f32.powf(-6.0 * t) * (t * PI * 3.5).cos().abs(),
            Ease::BounceInOut => {
                if t < 0.5 {
                    8.0 * 2f32.powf(8.0 * (t - 1.0)) * (t * PI * 7.0).sin().abs()
                } else {
                    1.0 - 8.0 * 2f32.powf(-8.0 * t) * (t * PI * 7.0).sin().abs()
                }
            }

            Ease::SinIn => (FRAC_PI_2 * t).sin(),
            Ease::SinOut => 1.0 + (FRAC_PI_2 * (t - 1.0)).sin(),
            Ease::SinInOut => 0.5 * (1.0 + (PI * (t - 0.5)).sin()),

            // smoothstep
            Ease::Bezier => t * t * (3.0 - 2.0 * t),

            Ease::Pulse => {
                let u = t - 0.5;
                1.0 - 4.0 * u * u
            }
            Ease::Eslup => {
                let u = t - 0.5;
                4.0 * u * u
            }
        }
    }
}
