//! Fixed-capacity tween pools for per-frame value animation.
//!
//! A tween interpolates a single `f32` from a start value to an end value
//! over a bounded time span, remapped through an easing curve and reported to
//! a caller-supplied callback once per tick. Pools hold a fixed number of
//! slots and keep the running ones packed at the front of the array, so
//! starting, stopping and evaluating are all O(1) per slot with no per-frame
//! allocation.
//!
//! Two pool flavors share the same algorithm: [`ConstantPool`] runs every
//! tween over one global span, [`Pool`] stores a duration per slot. Both are
//! single-threaded and meant to be ticked from the host's update loop:
//!
//! ```
//! use twixt::{Ease, Pool, Tween};
//!
//! let mut pool: Pool = Pool::new();
//! let handle = pool
//!     .start(Tween::new(0.0, 10.0, Ease::QuadOut, |v| println!("{v}")).over(0.3))
//!     .unwrap();
//! pool.eval(0.016); // once per frame
//! let _ = pool.stop(handle, false);
//! ```

pub mod ease;
pub mod pool;
pub mod tween;

pub use ease::{lerp, Ease};
pub use pool::constant::ConstantPool;
pub use pool::variable::Pool;
pub use pool::{Handle, PoolError, EPSILON};
pub use tween::{Motion, Tween};
