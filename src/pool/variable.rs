//! Per-slot-duration tween pool.

use super::{Handle, PoolError, EPSILON};
use crate::ease::Ease;
use crate::tween::Tween;
use log::{debug, trace};

struct Slot {
    elapsed: f32,
    start: f32,
    dist: f32,
    duration: f32,
    // 1/duration, computed once at start so the hot path multiplies
    inv_duration: f32,
    ease: Ease,
    gen: u32,
    running: bool,
    on_update: Option<Box<dyn FnMut(f32)>>,
    on_complete: Option<Box<dyn FnOnce()>>,
}

impl Default for Slot {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            start: 0.0,
            dist: 0.0,
            duration: 0.0,
            inv_duration: 0.0,
            ease: Ease::Null,
            gen: 0,
            running: false,
            on_update: None,
            on_complete: None,
        }
    }
}

/// A fixed-capacity pool of tweens, each with its own duration.
///
/// Slots `[0, active)` are exactly the running tweens; the suffix is stale
/// and never evaluated. Owned by a single host and ticked from its update
/// loop via [`eval`](Pool::eval).
pub struct Pool<const CAP: usize = 32> {
    slots: [Slot; CAP],
    active: usize,
    stamp: u32,
}

impl<const CAP: usize> Default for Pool<CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAP: usize> Pool<CAP> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| Slot::default()),
            active: 0,
            stamp: 0,
        }
    }

    /// Number of running tweens.
    pub fn active(&self) -> usize {
        self.active
    }

    pub fn capacity(&self) -> usize {
        CAP
    }

    pub fn is_empty(&self) -> bool {
        self.active == 0
    }

    /// Whether `handle` still names a live tween.
    pub fn is_running(&self, handle: Handle) -> bool {
        self.lookup(handle).is_ok()
    }

    /// Starts a tween in the next free slot and returns its handle.
    ///
    /// Fails with [`PoolError::CapacityExceeded`] when the pool is full and
    /// [`PoolError::InvalidDuration`] for a non-positive duration; in both
    /// cases nothing is mutated and no callback fires.
    pub fn start(&mut self, tween: Tween) -> Result<Handle, PoolError> {
        if self.active == CAP {
            debug!("tween pool full ({CAP} slots), dropping start request");
            return Err(PoolError::CapacityExceeded);
        }
        if !(tween.duration > 0.0) {
            return Err(PoolError::InvalidDuration);
        }

        self.stamp = self.stamp.wrapping_add(1);
        let index = self.active;
        let slot = &mut self.slots[index];
        slot.elapsed = 0.0;
        slot.start = tween.start;
        slot.dist = tween.end - tween.start;
        slot.duration = tween.duration;
        slot.inv_duration = 1.0 / tween.duration;
        slot.ease = tween.ease;
        slot.gen = self.stamp;
        slot.running = true;
        slot.on_update = Some(tween.on_update);
        slot.on_complete = tween.on_complete;
        self.active += 1;

        trace!(
            "tween start: slot {index} gen {} {} -> {} over {}",
            slot.gen,
            tween.start,
            tween.end,
            tween.duration
        );
        Ok(Handle {
            index: index as u16,
            gen: self.stamp,
        })
    }

    /// Cancels the tween named by `handle`, firing its completion callback
    /// only when `fire_on_complete` is set.
    pub fn stop(&mut self, handle: Handle, fire_on_complete: bool) -> Result<(), PoolError> {
        let index = self.lookup(handle)?;
        trace!("tween stop: slot {index} gen {}", handle.gen);
        let on_complete = self.free(index);
        if fire_on_complete {
            if let Some(cb) = on_complete {
                cb();
            }
        }
        Ok(())
    }

    /// Rewinds the tween to its start, keeping span, curve and callbacks.
    pub fn restart(&mut self, handle: Handle) -> Result<(), PoolError> {
        let index = self.lookup(handle)?;
        self.slots[index].elapsed = 0.0;
        Ok(())
    }

    /// Swaps the tween's endpoints in place. Elapsed time is untouched, so a
    /// tween flipped mid-flight finishes at its original starting value.
    pub fn flip(&mut self, handle: Handle) -> Result<(), PoolError> {
        let index = self.lookup(handle)?;
        let slot = &mut self.slots[index];
        slot.start += slot.dist;
        slot.dist = -slot.dist;
        Ok(())
    }

    /// [`flip`](Pool::flip) followed by [`restart`](Pool::restart): runs the
    /// animation again in the opposite direction. The usual oscillation move.
    pub fn start_flip(&mut self, handle: Handle) -> Result<(), PoolError> {
        let index = self.lookup(handle)?;
        let slot = &mut self.slots[index];
        slot.start += slot.dist;
        slot.dist = -slot.dist;
        slot.elapsed = 0.0;
        Ok(())
    }

    /// Advances every running tween by `dt` and fires their callbacks.
    ///
    /// Ticks below [`EPSILON`] in magnitude are a no-op. A tween reaching its
    /// duration gets one final `on_update` with the exact end value (not the
    /// eased approximation, so there is no float drift at the boundary), then
    /// `on_complete`, and its slot is reclaimed. The slot swapped into the
    /// freed position is evaluated in the same pass.
    pub fn eval(&mut self, dt: f32) {
        if self.active == 0 || dt.abs() < EPSILON {
            return;
        }

        let mut i = 0;
        while i < self.active {
            let slot = &mut self.slots[i];
            slot.elapsed += dt;

            if slot.elapsed < slot.duration {
                let eased = slot.ease.apply(slot.elapsed * slot.inv_duration);
                let value = slot.start + slot.dist * eased;
                if let Some(cb) = slot.on_update.as_mut() {
                    cb(value);
                }
                i += 1;
            } else {
                let end = slot.start + slot.dist;
                if let Some(cb) = slot.on_update.as_mut() {
                    cb(end);
                }
                let on_complete = self.free(i);
                if let Some(cb) = on_complete {
                    cb();
                }
                // the slot compacted into `i` has not been advanced yet;
                // revisit the same index
            }
        }
    }

    fn lookup(&self, handle: Handle) -> Result<usize, PoolError> {
        let index = handle.index as usize;
        if index >= self.active || self.slots[index].gen != handle.gen || !self.slots[index].running
        {
            return Err(PoolError::InvalidHandle);
        }
        Ok(index)
    }

    /// Releases slot `index`: drops its callbacks (so captured state is not
    /// retained), swap-compacts the last active slot into its place, and
    /// hands back the completion callback for the caller to fire or discard.
    fn free(&mut self, index: usize) -> Option<Box<dyn FnOnce()>> {
        let slot = &mut self.slots[index];
        slot.running = false;
        slot.ease = Ease::Null;
        slot.on_update = None;
        let on_complete = slot.on_complete.take();
        self.active -= 1;
        self.slots.swap(index, self.active);
        on_complete
    }
}
