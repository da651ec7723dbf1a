//! Re-armable countdown driven by explicit ticks
//!
//! Nothing self-schedules: the embedding loop calls `tick(dt)` and completion
//! fires synchronously inside that call, exactly once per run.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::events::{Listener, Signal};

#[derive(Default)]
struct CountdownState {
    total: f32,
    elapsed: f32,
    running: bool,
    started: bool,
    finished: Signal,
}

/// A single-owner countdown timer
///
/// `Countdown` is a handle over shared state so that a completion callback
/// can stop or re-arm the very timer it came from. Clones alias the same
/// timer, never fork it; the owning entity keeps the one long-lived handle.
#[derive(Clone, Default)]
pub struct Countdown {
    state: Rc<RefCell<CountdownState>>,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the run duration; refused with a debug log while running
    pub fn set_duration(&self, secs: f32) {
        let mut state = self.state.borrow_mut();
        if state.running {
            log::debug!("set_duration({secs}) ignored: countdown is running");
            return;
        }
        state.total = secs;
    }

    /// Begin a run if a positive duration is set
    ///
    /// Elapsed time resets, so starting over a completed run re-arms with the
    /// retained duration. A zero or negative duration never starts.
    pub fn start(&self) {
        let mut state = self.state.borrow_mut();
        if state.total > 0.0 {
            state.elapsed = 0.0;
            state.running = true;
            state.started = true;
        }
    }

    /// Halt and fully reset a running countdown; idempotent when stopped
    pub fn stop(&self) {
        let mut state = self.state.borrow_mut();
        if state.running {
            state.total = 0.0;
            state.running = false;
            state.started = false;
        }
    }

    /// Lengthen the current run; dropped with a debug log unless running
    pub fn extend(&self, secs: f32) {
        let mut state = self.state.borrow_mut();
        if state.running {
            state.total += secs;
        } else {
            log::debug!("extend({secs}) dropped: countdown is not running");
        }
    }

    /// Advance the countdown; fires the completion signal when it runs out
    ///
    /// The running flag drops before listeners run, so a completion callback
    /// observes a finished timer and may immediately re-arm it.
    pub fn tick(&self, dt: f32) {
        let finished = {
            let mut state = self.state.borrow_mut();
            if !state.running {
                return;
            }
            state.elapsed += dt;
            if state.elapsed >= state.total {
                state.running = false;
                Some(state.finished.clone())
            } else {
                None
            }
        };
        if let Some(signal) = finished {
            signal.emit();
        }
    }

    /// Subscribe to run completion
    pub fn on_finished(&self, listener: Listener) {
        self.state.borrow().finished.connect(listener);
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().running
    }

    /// Configured duration of the current or next run
    pub fn duration(&self) -> f32 {
        self.state.borrow().total
    }

    /// Seconds consumed by the current run
    pub fn elapsed(&self) -> f32 {
        self.state.borrow().elapsed
    }

    /// True once a run has completed and no new run has begun
    pub fn is_finished(&self) -> bool {
        let state = self.state.borrow();
        state.started && !state.running
    }

    /// Seconds left in the current run; 0 when not running
    pub fn time_remaining(&self) -> f32 {
        let state = self.state.borrow();
        if state.running {
            state.total - state.elapsed
        } else {
            0.0
        }
    }
}

impl fmt::Debug for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Countdown")
            .field("total", &state.total)
            .field("elapsed", &state.elapsed)
            .field("running", &state.running)
            .finish()
    }
}
