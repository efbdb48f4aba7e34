//! Deadline-based tick scheduling.
//!
//! The loop runs two cadences off one monotonic clock:
//!
//! - **Tick** (default 1000 ms): decrement the countdown, maybe re-fetch, redraw
//! - **Frame** (default 500 ms): advance the direction marker
//!
//! [`TickSchedule`] keeps an absolute deadline for each and tells the caller
//! how long it may sleep. Deadlines advance by whole periods so the tick does
//! not drift. If the loop falls more than a period behind (a blocking fetch,
//! say), the missed events are dropped and the deadline is re-anchored on
//! the current time instead of firing a burst of catch-up ticks.
//!
//! # Example
//!
//! ```rust
//! use torn_travel::{ScheduleEvent, TickSchedule};
//!
//! let mut schedule = TickSchedule::new(1000, 500, 0);
//! assert_eq!(schedule.poll(0), None);
//! assert_eq!(schedule.sleep_ms(0), 500);
//!
//! assert_eq!(schedule.poll(500), Some(ScheduleEvent::Frame));
//! assert_eq!(schedule.poll(1000), Some(ScheduleEvent::Tick));
//! assert_eq!(schedule.poll(1000), Some(ScheduleEvent::Frame));
//! assert_eq!(schedule.poll(1000), None);
//! ```

use crate::config::RefreshConfig;

/// Event produced by [`TickSchedule::poll`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScheduleEvent {
    /// One countdown second has elapsed.
    Tick,
    /// One animation frame has elapsed.
    Frame,
}

/// Absolute deadlines for the tick and the animation frame.
#[derive(Clone, Debug)]
pub struct TickSchedule {
    tick_ms: u64,
    frame_ms: u64,
    next_tick: u64,
    next_frame: u64,
}

impl TickSchedule {
    /// Creates a schedule whose first tick and frame are one period after `now_ms`.
    ///
    /// Zero periods are treated as 1 ms.
    pub fn new(tick_ms: u32, frame_ms: u32, now_ms: u64) -> Self {
        let tick_ms = u64::from(tick_ms.max(1));
        let frame_ms = u64::from(frame_ms.max(1));
        Self {
            tick_ms,
            frame_ms,
            next_tick: now_ms + tick_ms,
            next_frame: now_ms + frame_ms,
        }
    }

    /// Creates a schedule from the refresh configuration.
    pub fn from_config(config: &RefreshConfig, now_ms: u64) -> Self {
        Self::new(config.tick_ms, config.frame_ms, now_ms)
    }

    /// Returns the next due event, if any.
    ///
    /// A due tick is reported before a due frame. Call repeatedly until it
    /// returns `None`, then sleep for [`sleep_ms`](Self::sleep_ms).
    pub fn poll(&mut self, now_ms: u64) -> Option<ScheduleEvent> {
        if now_ms >= self.next_tick {
            self.next_tick = advance(self.next_tick, self.tick_ms, now_ms);
            Some(ScheduleEvent::Tick)
        } else if now_ms >= self.next_frame {
            self.next_frame = advance(self.next_frame, self.frame_ms, now_ms);
            Some(ScheduleEvent::Frame)
        } else {
            None
        }
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> u64 {
        self.next_tick.min(self.next_frame)
    }

    /// Milliseconds until the earliest pending deadline (0 if already due).
    pub fn sleep_ms(&self, now_ms: u64) -> u64 {
        self.next_deadline().saturating_sub(now_ms)
    }

    /// Deadline of the next tick.
    pub fn next_tick(&self) -> u64 {
        self.next_tick
    }
}

/// Moves a deadline forward by one period, re-anchoring if a whole period was missed.
fn advance(deadline: u64, period: u64, now_ms: u64) -> u64 {
    let next = deadline + period;
    if next <= now_ms {
        now_ms + period
    } else {
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_due_at_start() {
        let mut schedule = TickSchedule::new(1000, 500, 10_000);
        assert_eq!(schedule.poll(10_000), None);
        assert_eq!(schedule.next_deadline(), 10_500);
        assert_eq!(schedule.next_tick(), 11_000);
    }

    #[test]
    fn one_second_produces_one_tick_and_two_frames() {
        let mut schedule = TickSchedule::new(1000, 500, 0);
        let mut ticks = 0;
        let mut frames = 0;

        for now in 0..=1000 {
            while let Some(event) = schedule.poll(now) {
                match event {
                    ScheduleEvent::Tick => ticks += 1,
                    ScheduleEvent::Frame => frames += 1,
                }
            }
        }

        assert_eq!(ticks, 1);
        assert_eq!(frames, 2);
    }

    #[test]
    fn tick_reported_before_frame() {
        let mut schedule = TickSchedule::new(1000, 1000, 0);
        assert_eq!(schedule.poll(1000), Some(ScheduleEvent::Tick));
        assert_eq!(schedule.poll(1000), Some(ScheduleEvent::Frame));
    }

    #[test]
    fn deadlines_do_not_drift_on_late_polls() {
        let mut schedule = TickSchedule::new(1000, 500, 0);
        // Woken 30 ms late: the next tick still lands on the 1 s grid
        assert_eq!(schedule.poll(1030), Some(ScheduleEvent::Tick));
        assert_eq!(schedule.next_tick(), 2000);
    }

    #[test]
    fn missed_ticks_are_not_replayed() {
        let mut schedule = TickSchedule::new(1000, 500, 0);
        // A 3.5 s blocking fetch
        assert_eq!(schedule.poll(4500), Some(ScheduleEvent::Tick));
        assert_eq!(schedule.next_tick(), 5500);
        assert_eq!(schedule.poll(4500), Some(ScheduleEvent::Frame));
        assert_eq!(schedule.poll(4500), None);
    }

    #[test]
    fn sleep_ms_counts_down_to_deadline() {
        let schedule = TickSchedule::new(1000, 500, 0);
        assert_eq!(schedule.sleep_ms(0), 500);
        assert_eq!(schedule.sleep_ms(499), 1);
        assert_eq!(schedule.sleep_ms(600), 0);
    }

    #[test]
    fn zero_periods_are_clamped() {
        let mut schedule = TickSchedule::new(0, 0, 0);
        assert_eq!(schedule.poll(1), Some(ScheduleEvent::Tick));
    }

    #[test]
    fn from_config_uses_periods() {
        let config = RefreshConfig::default().with_tick_ms(200).with_frame_ms(100);
        let schedule = TickSchedule::from_config(&config, 50);
        assert_eq!(schedule.next_tick(), 250);
        assert_eq!(schedule.next_deadline(), 150);
    }
}
