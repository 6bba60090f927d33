//! Answer Countdown
//!
//! Timed quiz mode: one tick per second rendered into `#time_counter`,
//! navigation to the "time is up" page once zero has been shown.
//! The interval is never cleared.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;

use crate::dom;
use crate::endpoints;

pub const COUNTER_ID: &str = "time_counter";
pub const TICK_MS: u32 = 1000;

/// Result of one tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    /// Number to show
    pub display: i32,
    /// Time ran out on this tick
    pub expired: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    remaining: i32,
}

impl Countdown {
    pub fn new(seconds: i32) -> Self {
        Self { remaining: seconds }
    }

    pub fn remaining(&self) -> i32 {
        self.remaining
    }

    /// Show the current value, then count down. Keeps going below zero
    /// if the page has not unloaded yet.
    pub fn tick(&mut self) -> Tick {
        let tick = Tick {
            display: self.remaining,
            expired: self.remaining == 0,
        };
        self.remaining -= 1;
        tick
    }
}

/// Start ticking if the page has a counter element
pub fn start(seconds: i32) -> bool {
    if dom::query_opt(&format!("#{}", COUNTER_ID)).is_none() {
        return false;
    }
    log::info!("countdown started at {}", seconds);
    let state = Rc::new(Cell::new(Countdown::new(seconds)));
    Interval::new(TICK_MS, move || {
        let mut countdown = state.get();
        let tick = countdown.tick();
        state.set(countdown);

        // The element may be gone by now; the countdown carries on regardless
        if let Ok(el) = dom::by_id::<web_sys::Element>(COUNTER_ID) {
            el.set_inner_html(&tick.display.to_string());
        }
        if tick.expired {
            if let Err(e) = dom::navigate(endpoints::TIME_IS_UP) {
                log::warn!("countdown: {}", e);
            }
        }
    })
    .forget();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifteen_to_zero() {
        let mut countdown = Countdown::new(15);
        let ticks: Vec<Tick> = (0..16).map(|_| countdown.tick()).collect();

        let shown: Vec<i32> = ticks.iter().map(|t| t.display).collect();
        assert_eq!(shown, (0..=15).rev().collect::<Vec<_>>());

        // Only the sixteenth tick (display 0) navigates
        assert!(ticks[..15].iter().all(|t| !t.expired));
        assert!(ticks[15].expired);
    }

    #[test]
    fn test_keeps_counting_after_expiry() {
        let mut countdown = Countdown::new(0);
        assert!(countdown.tick().expired);
        let next = countdown.tick();
        assert_eq!(next.display, -1);
        assert!(!next.expired);
        assert_eq!(countdown.remaining(), -2);
    }
}
