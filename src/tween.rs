//! Tween descriptors: what to animate, over how long, through which curve.

use crate::ease::Ease;
use serde::{Deserialize, Serialize};

/// Describes one animation before it is handed to a pool.
///
/// `on_update` receives the interpolated value every active tick;
/// `on_complete`, if set, fires exactly once when the tween finishes or is
/// stopped with completion requested. Both run inline on the evaluating
/// thread and must not call back into the owning pool.
pub struct Tween {
    pub start: f32,
    pub end: f32,
    /// Ignored by [`ConstantPool`](crate::ConstantPool); must be positive for
    /// [`Pool`](crate::Pool).
    pub duration: f32,
    pub ease: Ease,
    pub on_update: Box<dyn FnMut(f32)>,
    pub on_complete: Option<Box<dyn FnOnce()>>,
}

impl Tween {
    pub fn new(start: f32, end: f32, ease: Ease, on_update: impl FnMut(f32) + 'static) -> Self {
        Self {
            start,
            end,
            duration: 0.0,
            ease,
            on_update: Box::new(on_update),
            on_complete: None,
        }
    }

    /// Sets the duration, in the same time units the host passes to `eval`.
    pub fn over(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    /// Attaches a completion callback.
    pub fn then(mut self, on_complete: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(on_complete));
        self
    }
}

/// The data half of a tween: endpoints, span and curve with no callbacks.
///
/// Serializable, so animation definitions can live in a config file and be
/// bound to callbacks at start time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    pub from: f32,
    pub to: f32,
    #[serde(default = "default_duration")]
    pub duration: f32,
    #[serde(default)]
    pub ease: Ease,
}

fn default_duration() -> f32 {
    crate::pool::constant::SPAN
}

impl Motion {
    /// Binds an update callback, producing a startable [`Tween`].
    pub fn tween(self, on_update: impl FnMut(f32) + 'static) -> Tween {
        Tween {
            start: self.from,
            end: self.to,
            duration: self.duration,
            ease: self.ease,
            on_update: Box::new(on_update),
            on_complete: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motion_from_toml() {
        let motion: Motion = toml::from_str(
            r#"
            from = 0.0
            to = 10.0
            duration = 0.5
            ease = "quad_in"
            "#,
        )
        .unwrap();
        assert_eq!(motion.from, 0.0);
        assert_eq!(motion.to, 10.0);
        assert_eq!(motion.duration, 0.5);
        assert_eq!(motion.ease, Ease::QuadIn);
    }

    #[test]
    fn motion_defaults_span_and_curve() {
        let motion: Motion = toml::from_str("from = 1.0\nto = 2.0").unwrap();
        assert_eq!(motion.duration, crate::pool::constant::SPAN);
        assert_eq!(motion.ease, Ease::Linear);
    }

    #[test]
    fn motion_binds_into_tween() {
        let motion = Motion {
            from: 2.0,
            to: 4.0,
            duration: 1.5,
            ease: Ease::SinOut,
        };
        let tween = motion.tween(|_| {});
        assert_eq!(tween.start, 2.0);
        assert_eq!(tween.end, 4.0);
        assert_eq!(tween.duration, 1.5);
        assert_eq!(tween.ease, Ease::SinOut);
        assert!(tween.on_complete.is_none());
    }

    #[test]
    fn builder_chain() {
        let tween = Tween::new(0.0, 1.0, Ease::Bezier, |_| {})
            .over(0.25)
            .then(|| {});
        assert_eq!(tween.duration, 0.25);
        assert!(tween.on_complete.is_some());
    }
}
