//! Shared-duration tween pool.
//!
//! Every tween in a [`ConstantPool`] runs over the same [`SPAN`], so slots
//! carry no duration and the evaluator multiplies by one precomputed
//! reciprocal. The cheapest flavor for UI feedback ticks that all want the
//! same feel.

use super::{Handle, PoolError, EPSILON};
use crate::ease::Ease;
use crate::tween::Tween;
use log::{debug, trace};

const GOLDEN_RATIO: f32 = 1.6180339;

/// The one duration every tween in a [`ConstantPool`] runs over, in host
/// time units. Half the reciprocal golden ratio, ~0.309.
pub const SPAN: f32 = 1.0 / (GOLDEN_RATIO * 2.0);
pub const INV_SPAN: f32 = 1.0 / SPAN;

struct Slot {
    elapsed: f32,
    start: f32,
    dist: f32,
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
            ease: Ease::Null,
            gen: 0,
            running: false,
            on_update: None,
            on_complete: None,
        }
    }
}

/// A fixed-capacity pool of tweens that all share [`SPAN`] as their duration.
///
/// Same contract as [`Pool`](crate::Pool): running slots packed in
/// `[0, active)`, swap-compaction on removal, generation-stamped handles.
/// The `duration` field of a started [`Tween`] is ignored.
pub struct ConstantPool<const CAP: usize = 32> {
    slots: [Slot; CAP],
    active: usize,
    stamp: u32,
}

impl<const CAP: usize> Default for ConstantPool<CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAP: usize> ConstantPool<CAP> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| Slot::default()),
            active: 0,
            stamp: 0,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn capacity(&self) -> usize {
        CAP
    }

    pub fn is_empty(&self) -> bool {
        self.active == 0
    }

    pub fn is_running(&self, handle: Handle) -> bool {
        self.lookup(handle).is_ok()
    }

    /// Starts a tween over the shared [`SPAN`]. Fails with
    /// [`PoolError::CapacityExceeded`] when full; nothing is mutated then.
    pub fn start(&mut self, tween: Tween) -> Result<Handle, PoolError> {
        if self.active == CAP {
            debug!("constant tween pool full ({CAP} slots), dropping start request");
            return Err(PoolError::CapacityExceeded);
        }

        self.stamp = self.stamp.wrapping_add(1);
        let index = self.active;
        let slot = &mut self.slots[index];
        slot.elapsed = 0.0;
        slot.start = tween.start;
        slot.dist = tween.end - tween.start;
        slot.ease = tween.ease;
        slot.gen = self.stamp;
        slot.running = true;
        slot.on_update = Some(tween.on_update);
        slot.on_complete = tween.on_complete;
        self.active += 1;

        trace!(
            "tween start: slot {index} gen {} {} -> {}",
            slot.gen,
            tween.start,
            tween.end
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

    /// Rewinds the tween to its start, keeping endpoints, curve and callbacks.
    pub fn restart(&mut self, handle: Handle) -> Result<(), PoolError> {
        let index = self.lookup(handle)?;
        self.slots[index].elapsed = 0.0;
        Ok(())
    }

    /// Swaps the tween's endpoints in place without touching elapsed time.
    pub fn flip(&mut self, handle: Handle) -> Result<(), PoolError> {
        let index = self.lookup(handle)?;
        let slot = &mut self.slots[index];
        slot.start += slot.dist;
        slot.dist = -slot.dist;
        Ok(())
    }

    /// Flip and restart in one step.
    pub fn start_flip(&mut self, handle: Handle) -> Result<(), PoolError> {
        let index = self.lookup(handle)?;
        let slot = &mut self.slots[index];
        slot.start += slot.dist;
        slot.dist = -slot.dist;
        slot.elapsed = 0.0;
        Ok(())
    }

    /// Advances every running tween by `dt`. Same walk as
    /// [`Pool::eval`](crate::Pool::eval), against the shared [`SPAN`].
    pub fn eval(&mut self, dt: f32) {
        if self.active == 0 || dt.abs() < EPSILON {
            return;
        }

        let mut i = 0;
        while i < self.active {
            let slot = &mut self.slots[i];
            slot.elapsed += dt;

            if slot.elapsed < SPAN {
                let eased = slot.ease.apply(slot.elapsed * INV_SPAN);
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
                // revisit index i: it now holds the compacted slot
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
