//! Post-release momentum state and its tick pacer.

use glam::Vec3;
use web_time::{Duration, Instant};

/// Fixed-interval pacer standing in for a repeating timer.
///
/// The host's frame loop asks whether a tick is due; jitter in delivery
/// is acceptable because each tick is a discrete decrement, not an
/// integrated timestep. Missed intervals are caught up one tick at a
/// time.
#[derive(Debug, Clone)]
pub(crate) struct TickPacer {
    interval: Duration,
    next_due: Instant,
}

impl TickPacer {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now + interval,
        }
    }

    /// Whether a tick is due at `now`. Advances the schedule by one
    /// interval when so.
    pub fn tick_due(&mut self, now: Instant) -> bool {
        if now >= self.next_due {
            self.next_due += self.interval;
            true
        } else {
            false
        }
    }
}

/// Decaying rotation that continues after a drag is released.
///
/// The angle shrinks by a constant per-tick amount (a fixed fraction of
/// the starting angle), so the tick count to termination is the same
/// regardless of how hard the drag was flung — only the per-tick
/// rotation magnitude scales.
#[derive(Debug, Clone)]
pub(crate) struct Momentum {
    /// Rotation axis, unit length, frozen at release.
    pub axis: Vec3,
    /// Starting angle in radians; the per-tick decrement derives from
    /// this, not from the shrinking remainder.
    pub angle_at_start: f32,
    /// Angle still to be applied. Negative means terminal.
    pub remaining: f32,
    /// Schedule for the next tick.
    pub pacer: TickPacer,
}

impl Momentum {
    pub fn new(
        axis: Vec3,
        angle: f32,
        interval: Duration,
        now: Instant,
    ) -> Self {
        Self {
            axis,
            angle_at_start: angle,
            remaining: angle,
            pacer: TickPacer::new(interval, now),
        }
    }

    /// Remove one tick's worth of angle.
    pub fn decay(&mut self, deceleration_rate: f32) {
        self.remaining -= deceleration_rate * self.angle_at_start;
    }

    /// Whether the decay has crossed below zero.
    pub fn finished(&self) -> bool {
        self.remaining < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE: f32 = 1.0 / 60.0;

    #[test]
    fn test_decay_is_linear_in_start_angle() {
        let now = Instant::now();
        let mut m =
            Momentum::new(Vec3::Y, 0.6, Duration::from_millis(33), now);
        m.decay(RATE);
        let first_step = 0.6 - m.remaining;
        m.decay(RATE);
        let second_step = 0.6 - first_step - m.remaining;
        // Constant decrement, derived from the starting angle.
        assert!((first_step - second_step).abs() < 1e-7);
        assert!((first_step - 0.6 * RATE).abs() < 1e-7);
    }

    #[test]
    fn test_termination_tick_count_is_angle_independent() {
        let now = Instant::now();
        for angle in [0.01, 0.3, 2.5] {
            let mut m = Momentum::new(
                Vec3::Y,
                angle,
                Duration::from_millis(33),
                now,
            );
            let mut ticks = 0;
            while !m.finished() {
                m.decay(RATE);
                ticks += 1;
                assert!(ticks <= 62, "decay never terminated");
            }
            // 1/RATE decrements reach zero; rounding may cost one more.
            assert!(
                (60..=61).contains(&ticks),
                "angle {angle} terminated after {ticks} ticks"
            );
        }
    }

    #[test]
    fn test_not_finished_before_full_schedule() {
        let now = Instant::now();
        let mut m =
            Momentum::new(Vec3::Y, 1.2, Duration::from_millis(33), now);
        for _ in 0..59 {
            m.decay(RATE);
            assert!(!m.finished());
        }
    }

    #[test]
    fn test_pacer_catches_up_one_tick_per_interval() {
        let now = Instant::now();
        let interval = Duration::from_millis(100);
        let mut pacer = TickPacer::new(interval, now);

        assert!(!pacer.tick_due(now));
        assert!(!pacer.tick_due(now + Duration::from_millis(50)));

        // Three intervals elapsed: exactly three ticks are due.
        let later = now + Duration::from_millis(350);
        let mut due = 0;
        while pacer.tick_due(later) {
            due += 1;
        }
        assert_eq!(due, 3);
    }
}
