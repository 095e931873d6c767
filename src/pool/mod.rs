//! Fixed-capacity tween pools.
//!
//! Both flavors keep running slots packed in the prefix `[0, active)` of a
//! fixed array. Removal overwrites the freed slot with the last active one
//! and shrinks the count, so the prefix stays dense without shifting.

pub mod constant;
pub mod variable;

use thiserror::Error;

/// Ticks with a magnitude below this are skipped entirely: no time advances,
/// no callback fires. Keeps a degenerate `elapsed / duration` off the hot
/// path when the host hands us a zero-length frame.
pub const EPSILON: f32 = 0.0001;

/// Names a running tween: slot index plus the generation stamp issued when it
/// started.
///
/// Stamps come from a pool-wide counter, so a handle kept across the tween's
/// end (or across a swap that moved another tween into its slot) stops
/// matching and every operation on it reports [`PoolError::InvalidHandle`]
/// instead of touching the wrong animation. The reverse also holds: a tween
/// relocated by an unrelated stop keeps running but can no longer be reached
/// through its old handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handle {
    pub(crate) index: u16,
    pub(crate) gen: u32,
}

impl Handle {
    /// The slot position this handle was issued for.
    pub fn index(self) -> usize {
        self.index as usize
    }
}

/// Everything that can go wrong at the pool surface. All of it is non-fatal;
/// callers on the frame path are free to ignore these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoolError {
    /// Every slot is already running; the start request was dropped.
    #[error("tween pool is full")]
    CapacityExceeded,
    /// The handle does not name a live tween (already finished, stopped, or
    /// displaced by compaction).
    #[error("handle does not name a live tween")]
    InvalidHandle,
    /// Durations must be positive.
    #[error("tween duration must be positive")]
    InvalidDuration,
}
