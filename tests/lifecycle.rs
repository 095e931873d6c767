// Full lifecycle runs against the public surface: batches of tweens driven
// by a fixed-step host loop, with stops, flips and reuse interleaved.

use std::cell::RefCell;
use std::rc::Rc;
use twixt::{Ease, Pool, PoolError, Tween};

#[derive(Default)]
struct Trace {
    updates: usize,
    last: f32,
    completions: usize,
}

fn traced(pool: &mut Pool<8>, end: f32, duration: f32) -> Rc<RefCell<Trace>> {
    let trace = Rc::new(RefCell::new(Trace::default()));
    let u = trace.clone();
    let c = trace.clone();
    pool.start(
        Tween::new(0.0, end, Ease::Linear, move |v| {
            let mut t = u.borrow_mut();
            t.updates += 1;
            t.last = v;
        })
        .over(duration)
        .then(move || c.borrow_mut().completions += 1),
    )
    .unwrap();
    trace
}

#[test]
fn staggered_batch_drains_cleanly() {
    let mut pool: Pool<8> = Pool::new();

    // durations 0.25, 0.5, ... 2.0 against a fixed 0.125 step; every value
    // here is an exact binary float, so completion lands on a predictable
    // step with no accumulation drift
    let traces: Vec<_> = (0..8)
        .map(|i| traced(&mut pool, (i + 1) as f32, 0.25 * (i + 1) as f32))
        .collect();
    assert_eq!(pool.active(), 8);

    for _ in 0..20 {
        pool.eval(0.125);
    }

    assert!(pool.is_empty());
    for (i, trace) in traces.iter().enumerate() {
        let t = trace.borrow();
        assert_eq!(t.completions, 1, "tween {i}");
        // the final update reports the exact end value
        assert_eq!(t.last, (i + 1) as f32, "tween {i}");
        // one update per step until the boundary step completes it
        assert_eq!(t.updates, 2 * (i + 1), "tween {i}");
    }

    // a drained pool stays silent
    pool.eval(0.125);
    for trace in &traces {
        assert_eq!(trace.borrow().completions, 1);
    }
}

#[test]
fn host_driven_oscillation_via_flip() {
    let mut pool: Pool<8> = Pool::new();
    let trace = Rc::new(RefCell::new(Trace::default()));
    let u = trace.clone();
    let c = trace.clone();
    let h = pool
        .start(
            Tween::new(0.0, 1.0, Ease::Linear, move |v| u.borrow_mut().last = v)
                .over(0.2)
                .then(move || c.borrow_mut().completions += 1),
        )
        .unwrap();

    pool.eval(0.1);
    assert!((trace.borrow().last - 0.5).abs() < 1e-6);

    // flip halfway: same elapsed, reversed endpoints, finishes back at 0
    pool.flip(h).unwrap();
    pool.eval(0.1);
    assert_eq!(trace.borrow().last, 0.0);
    assert_eq!(trace.borrow().completions, 1);
    assert!(pool.is_empty());
}

#[test]
fn slots_recycle_after_interleaved_stops() {
    let mut pool: Pool<8> = Pool::new();

    let mut handles = Vec::new();
    for i in 0..8 {
        let h = pool
            .start(Tween::new(0.0, i as f32, Ease::QuadOut, |_| {}).over(5.0))
            .unwrap();
        handles.push(h);
    }
    assert_eq!(
        pool.start(Tween::new(0.0, 1.0, Ease::Linear, |_| {}).over(1.0)),
        Err(PoolError::CapacityExceeded)
    );

    // stop every other tween, back to front so compaction never displaces a
    // handle we are about to use
    for i in [6, 4, 2, 0] {
        pool.stop(handles[i], false).unwrap();
    }
    assert_eq!(pool.active(), 4);

    // 1 and 3 were never moved; 5 and 7 were compacted into freed slots and
    // are no longer reachable through their old handles (they keep running)
    assert!(pool.is_running(handles[1]));
    assert!(pool.is_running(handles[3]));
    for i in [0, 2, 4, 6, 5, 7] {
        assert!(!pool.is_running(handles[i]), "handle {i}");
    }

    // freed capacity is immediately reusable
    for _ in 0..4 {
        pool.start(Tween::new(0.0, 1.0, Ease::Linear, |_| {}).over(0.05))
            .unwrap();
    }
    assert_eq!(pool.active(), 8);

    // the short refills complete in one tick, the long originals keep going
    pool.eval(0.1);
    assert_eq!(pool.active(), 4);
    assert!(pool.is_running(handles[1]));
    pool.restart(handles[3]).unwrap();
}
